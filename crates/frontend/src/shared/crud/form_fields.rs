//! Raw form values as typed by the user, keyed by wire field name.
//!
//! Parsing into numbers / ids happens when the payload is built; a value
//! that does not parse is reported as a field error, not dropped.

use super::entity::FieldDef;
use contracts::domain::common::RecordId;
use contracts::shared::FieldErrors;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Flag(bool),
    Null,
}

impl FieldValue {
    /// Value as shown in an input control
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => format_plain_number(*n),
            FieldValue::Flag(b) => b.to_string(),
            FieldValue::Null => String::new(),
        }
    }

    pub fn as_flag(&self) -> bool {
        match self {
            FieldValue::Flag(b) => *b,
            FieldValue::Text(s) => matches!(s.trim(), "true" | "1" | "on"),
            FieldValue::Number(n) => *n != 0.0,
            FieldValue::Null => false,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        value.map(FieldValue::Text).unwrap_or(FieldValue::Null)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<Option<f64>> for FieldValue {
    fn from(value: Option<f64>) -> Self {
        value.map(FieldValue::Number).unwrap_or(FieldValue::Null)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<Option<RecordId>> for FieldValue {
    fn from(value: Option<RecordId>) -> Self {
        value
            .map(|id| FieldValue::Text(id.to_string()))
            .unwrap_or(FieldValue::Null)
    }
}

/// `1234.5` → "1234.5", `20.0` → "20"
fn format_plain_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Accepts `1234.56`, `1234,56` and `1.234,56`.
///
/// Without a comma the `.` is the decimal mark, as `type="number"` inputs
/// send it: `"1.234"` is 1.234, not 1234.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let normalized = if raw.contains(',') {
        raw.replace('.', "").replace(',', ".")
    } else {
        raw.to_string()
    };
    normalized.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields(BTreeMap<String, FieldValue>);

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_defaults(defs: &[FieldDef]) -> Self {
        Self(
            defs.iter()
                .map(|def| (def.key.to_string(), def.default.clone()))
                .collect(),
        )
    }

    pub fn with(mut self, key: &str, value: impl Into<FieldValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<FieldValue>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    /// Trimmed text, empty when missing
    pub fn text(&self, key: &str) -> String {
        self.get(key)
            .map(|v| v.as_text().trim().to_string())
            .unwrap_or_default()
    }

    pub fn opt_text(&self, key: &str) -> Option<String> {
        Some(self.text(key)).filter(|s| !s.is_empty())
    }

    pub fn flag(&self, key: &str) -> bool {
        self.get(key).map(FieldValue::as_flag).unwrap_or(false)
    }

    /// Empty ⇒ `None`; unparseable ⇒ `None` plus a field error
    pub fn number(&self, key: &str, label: &str, errors: &mut FieldErrors) -> Option<f64> {
        match self.get(key) {
            Some(FieldValue::Number(n)) => Some(*n),
            Some(other) => {
                let raw = other.as_text();
                if raw.trim().is_empty() {
                    return None;
                }
                let parsed = parse_decimal(&raw);
                if parsed.is_none() {
                    errors.insert(key.to_string(), format!("{} deve ser um número", label));
                }
                parsed
            }
            None => None,
        }
    }

    pub fn integer(&self, key: &str, label: &str, errors: &mut FieldErrors) -> Option<i64> {
        let value = self.number(key, label, errors)?;
        if value.fract() != 0.0 {
            errors.insert(key.to_string(), format!("{} deve ser um número inteiro", label));
            return None;
        }
        Some(value as i64)
    }

    pub fn record_id(&self, key: &str, label: &str, errors: &mut FieldErrors) -> Option<RecordId> {
        let raw = self.opt_text(key)?;
        match RecordId::from_string(&raw) {
            Ok(id) => Some(id),
            Err(_) => {
                errors.insert(key.to_string(), format!("{} inválido", label));
                None
            }
        }
    }
}

/// Merge parse errors with the DTO's own validation; parse errors win
pub fn checked<P>(
    mut parse_errors: FieldErrors,
    dto: P,
    validate: impl Fn(&P) -> Result<(), FieldErrors>,
) -> Result<P, FieldErrors> {
    if let Err(errors) = validate(&dto) {
        for (field, message) in errors {
            parse_errors.entry(field).or_insert(message);
        }
    }
    if parse_errors.is_empty() {
        Ok(dto)
    } else {
        Err(parse_errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_formats() {
        assert_eq!(parse_decimal("1234.56"), Some(1234.56));
        assert_eq!(parse_decimal("1234,56"), Some(1234.56));
        assert_eq!(parse_decimal("1.234,56"), Some(1234.56));
        assert_eq!(parse_decimal(" "), None);
        assert_eq!(parse_decimal("abc"), None);
    }

    #[test]
    fn test_dot_without_comma_is_decimal_mark() {
        assert_eq!(parse_decimal("1.234"), Some(1.234));
        assert_eq!(parse_decimal("5.899"), Some(5.899));
        assert_eq!(parse_decimal("1.234,5"), Some(1234.5));
    }

    #[test]
    fn test_number_reports_unparseable_value() {
        let form = FormFields::new().with("litros", "dez");
        let mut errors = FieldErrors::new();
        assert_eq!(form.number("litros", "Litros", &mut errors), None);
        assert_eq!(errors["litros"], "Litros deve ser um número");
    }

    #[test]
    fn test_empty_number_is_none_without_error() {
        let form = FormFields::new().with("litros", "");
        let mut errors = FieldErrors::new();
        assert_eq!(form.number("litros", "Litros", &mut errors), None);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_integer_rejects_fraction() {
        let form = FormFields::new().with("prazo_dias", "2.5");
        let mut errors = FieldErrors::new();
        assert_eq!(form.integer("prazo_dias", "Prazo", &mut errors), None);
        assert!(errors.contains_key("prazo_dias"));
    }

    #[test]
    fn test_number_value_renders_without_trailing_zero() {
        assert_eq!(FieldValue::Number(20.0).as_text(), "20");
        assert_eq!(FieldValue::Number(5.79).as_text(), "5.79");
    }

    #[test]
    fn test_checked_keeps_parse_error_first() {
        let mut parse = FieldErrors::new();
        parse.insert("litros".into(), "Litros deve ser um número".into());
        let result = checked(parse, (), |_| {
            let mut e = FieldErrors::new();
            e.insert("litros".into(), "Litros é obrigatório".into());
            e.insert("placa".into(), "Placa é obrigatório".into());
            Err(e)
        });
        let errors = result.unwrap_err();
        assert_eq!(errors["litros"], "Litros deve ser um número");
        assert!(errors.contains_key("placa"));
    }
}
