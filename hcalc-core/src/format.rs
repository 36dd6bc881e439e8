//! Number formatting for result displays.

use std::fmt;
use std::str::FromStr;

/// Placeholder shown when a value is missing.
pub const MISSING: &str = "-";

/// Decimal and thousands separators used when formatting numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    pub decimal: char,
    pub grouping: char,
}

impl NumberLocale {
    /// `12,345.67`
    pub const DEFAULT: NumberLocale = NumberLocale {
        decimal: '.',
        grouping: ',',
    };

    /// `12.345,67`, the Uruguayan convention.
    pub const ES_UY: NumberLocale = NumberLocale {
        decimal: ',',
        grouping: '.',
    };

    pub fn tag(&self) -> &'static str {
        if *self == Self::ES_UY {
            "es-UY"
        } else {
            "en"
        }
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for NumberLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for NumberLocale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "en" | "en-us" | "default" => Ok(Self::DEFAULT),
            "es" | "es-uy" => Ok(Self::ES_UY),
            other => Err(format!("unsupported locale: {}", other)),
        }
    }
}

/// Format with fixed decimals and thousands separators.
///
/// `None` and non-finite values render as [`MISSING`].
pub fn format_number(value: Option<f64>, decimals: usize, locale: NumberLocale) -> String {
    let value = match value {
        Some(v) if v.is_finite() => v,
        _ => return MISSING.to_string(),
    };

    let digits = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(locale.grouping);
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    let is_zero = digits.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push(locale.decimal);
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        let en = NumberLocale::DEFAULT;
        assert_eq!(format_number(Some(1234567.891), 2, en), "1,234,567.89");
        assert_eq!(format_number(Some(100000.0), 0, en), "100,000");
        assert_eq!(format_number(Some(999.0), 0, en), "999");
        assert_eq!(format_number(Some(12.5), 2, en), "12.50");
    }

    #[test]
    fn uruguayan_separators() {
        let uy = NumberLocale::ES_UY;
        assert_eq!(format_number(Some(45000.0), 2, uy), "45.000,00");
        assert_eq!(format_number(Some(0.0125), 4, uy), "0,0125");
    }

    #[test]
    fn negatives_and_missing() {
        let en = NumberLocale::DEFAULT;
        assert_eq!(format_number(Some(-1500.26), 1, en), "-1,500.3");
        assert_eq!(format_number(Some(-0.001), 2, en), "0.00");
        assert_eq!(format_number(None, 2, en), "-");
        assert_eq!(format_number(Some(f64::NAN), 2, en), "-");
    }

    #[test]
    fn parses_locale_tags() {
        assert_eq!("es-UY".parse::<NumberLocale>().unwrap(), NumberLocale::ES_UY);
        assert_eq!("en".parse::<NumberLocale>().unwrap(), NumberLocale::DEFAULT);
        assert!("fr".parse::<NumberLocale>().is_err());
    }
}
