//! Field validators.
//!
//! Values arrive as the raw strings typed into a form. They are parsed the
//! way browsers parse numeric input with `parseFloat`: leading whitespace is
//! skipped and the longest numeric prefix wins, so `"12 ha"` reads as `12`.

/// Parse the longest leading decimal number of `raw`.
///
/// Returns `None` when no digits can be read (`"abc"`, `""`, `"-"`).
pub fn parse_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        let value = f64::INFINITY;
        return Some(if s.starts_with('-') { -value } else { value });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Validate that `value` is a number inside the optional inclusive bounds.
///
/// Returns the message for the first violation found, or `None`.
pub fn validate_number(
    value: &str,
    min: Option<f64>,
    max: Option<f64>,
    label: &str,
) -> Option<String> {
    let num = match parse_float(value) {
        Some(n) => n,
        None => return Some(format!("{} must be a valid number", label)),
    };

    if let Some(min) = min {
        if num < min {
            return Some(format!("{} must be greater than or equal to {}", label, min));
        }
    }

    if let Some(max) = max {
        if num > max {
            return Some(format!("{} must be less than or equal to {}", label, max));
        }
    }

    None
}

/// Bounds for one form field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    pub id: &'static str,
    pub label: &'static str,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Reject values equal to `min` as well.
    pub strict_min: bool,
    /// An empty value is accepted and means "not provided".
    pub optional: bool,
}

impl FieldRule {
    pub const fn range(id: &'static str, label: &'static str, min: f64, max: f64) -> Self {
        Self {
            id,
            label,
            min: Some(min),
            max: Some(max),
            strict_min: false,
            optional: false,
        }
    }

    pub const fn at_least(id: &'static str, label: &'static str, min: f64) -> Self {
        Self {
            id,
            label,
            min: Some(min),
            max: None,
            strict_min: false,
            optional: false,
        }
    }

    pub const fn above(id: &'static str, label: &'static str, min: f64) -> Self {
        Self {
            id,
            label,
            min: Some(min),
            max: None,
            strict_min: true,
            optional: false,
        }
    }

    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn check(&self, raw: &str) -> Option<String> {
        if self.optional && raw.trim().is_empty() {
            return None;
        }
        if let Some(message) = validate_number(raw, self.min, self.max, self.label) {
            return Some(message);
        }
        match (self.strict_min, self.min, parse_float(raw)) {
            (true, Some(min), Some(num)) if num <= min => {
                Some(format!("{} must be greater than {}", self.label, min))
            }
            _ => None,
        }
    }
}

/// A threshold above which the user must confirm before submitting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoftLimit {
    pub id: &'static str,
    pub above: f64,
    pub prompt: &'static str,
}

impl SoftLimit {
    pub fn triggered(&self, raw: &str) -> bool {
        parse_float(raw).is_some_and(|v| v > self.above)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_float_reads_numeric_prefix() {
        assert_eq!(parse_float("0.9"), Some(0.9));
        assert_eq!(parse_float("  12 ha"), Some(12.0));
        assert_eq!(parse_float("-.5"), Some(-0.5));
        assert_eq!(parse_float("5."), Some(5.0));
        assert_eq!(parse_float("1e3x"), Some(1000.0));
        assert_eq!(parse_float("2e"), Some(2.0));
        assert_eq!(parse_float("3.1.4"), Some(3.1));
        assert_eq!(parse_float("-Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn parse_float_rejects_non_numbers() {
        assert_eq!(parse_float("abc"), None);
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("-"), None);
        assert_eq!(parse_float("."), None);
        assert_eq!(parse_float("e5"), None);
    }

    #[test]
    fn not_a_number_names_the_field() {
        assert_eq!(
            validate_number("abc", Some(0.0), Some(1.0), "X").as_deref(),
            Some("X must be a valid number")
        );
    }

    #[test]
    fn accepts_exactly_the_closed_interval() {
        for (raw, ok) in [
            ("0", true),
            ("0.5", true),
            ("1", true),
            ("-0.01", false),
            ("1.01", false),
        ] {
            let result = validate_number(raw, Some(0.0), Some(1.0), "C");
            assert_eq!(result.is_none(), ok, "value {raw}");
        }
    }

    #[test]
    fn messages_mention_violated_bound() {
        assert_eq!(
            validate_number("-3", Some(0.0), Some(1000.0), "Intensity I").as_deref(),
            Some("Intensity I must be greater than or equal to 0")
        );
        assert_eq!(
            validate_number("100001", Some(0.0), Some(100000.0), "Area A").as_deref(),
            Some("Area A must be less than or equal to 100000")
        );
    }

    #[test]
    fn missing_bounds_are_not_checked() {
        assert_eq!(validate_number("-1e9", None, None, "X"), None);
        assert_eq!(validate_number("7", None, Some(10.0), "X"), None);
        assert!(validate_number("11", None, Some(10.0), "X").is_some());
    }

    #[test]
    fn only_first_violation_is_reported() {
        // min > max cannot both be satisfied; the lower bound is checked first
        let msg = validate_number("5", Some(10.0), Some(1.0), "X").unwrap();
        assert!(msg.contains("greater than or equal to 10"));
    }

    #[test]
    fn strict_rule_rejects_the_bound() {
        let rule = FieldRule::above("d", "Duration", 0.0);
        assert_eq!(
            rule.check("0").as_deref(),
            Some("Duration must be greater than 0")
        );
        assert_eq!(rule.check("0.25"), None);
        assert_eq!(
            rule.check("-1").as_deref(),
            Some("Duration must be greater than or equal to 0")
        );
    }

    #[test]
    fn optional_rule_accepts_blank() {
        let rule = FieldRule::at_least("Ac", "Area", 0.0).optional();
        assert_eq!(rule.check("   "), None);
        assert!(rule.check("-2").is_some());
    }

    #[test]
    fn soft_limit_triggers_strictly_above() {
        let limit = SoftLimit {
            id: "Tr",
            above: 100.0,
            prompt: "sure?",
        };
        assert!(!limit.triggered("100"));
        assert!(limit.triggered("101"));
        assert!(!limit.triggered("n/a"));
    }
}
