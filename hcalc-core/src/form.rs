//! Transient form state: field id -> raw entered string.

use crate::validate::parse_float;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    fields: BTreeMap<String, String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy when assembling a form in one expression.
    pub fn with(mut self, field_id: &str, value: impl Into<String>) -> Self {
        self.set(field_id, value);
        self
    }

    pub fn set(&mut self, field_id: &str, value: impl Into<String>) {
        self.fields.insert(field_id.to_string(), value.into());
    }

    /// Raw value of a field; fields never touched read as empty.
    pub fn get(&self, field_id: &str) -> &str {
        self.fields.get(field_id).map(String::as_str).unwrap_or("")
    }

    pub fn number(&self, field_id: &str) -> Option<f64> {
        parse_float(self.get(field_id))
    }

    /// Number for an optional field: blank means `None`.
    pub fn optional_number(&self, field_id: &str) -> Option<f64> {
        if self.get(field_id).trim().is_empty() {
            None
        } else {
            self.number(field_id)
        }
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_fields_read_empty() {
        let form = FormState::new().with("C", "0.9");
        assert_eq!(form.get("C"), "0.9");
        assert_eq!(form.get("A_ha"), "");
        assert_eq!(form.number("C"), Some(0.9));
        assert_eq!(form.number("A_ha"), None);
    }

    #[test]
    fn optional_number_treats_blank_as_absent() {
        let mut form = FormState::new().with("Ac", "  ");
        assert_eq!(form.optional_number("Ac"), None);
        form.set("Ac", "25");
        assert_eq!(form.optional_number("Ac"), Some(25.0));
        form.clear();
        assert_eq!(form.iter().count(), 0);
    }
}
