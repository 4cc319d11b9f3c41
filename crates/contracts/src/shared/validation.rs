//! Field validation rules shared by every form

use std::collections::BTreeMap;

/// Field key → message, keyed by the wire name of the field
pub type FieldErrors = BTreeMap<String, String>;

/// Fixed formats some fields must follow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    /// Two-letter state code (UF), e.g. `SP`
    StateCode,
    /// `#RRGGBB`
    HexColor,
    /// Exactly N digits
    Digits(usize),
    /// Bank branch: digits with an optional `-X` check digit
    BankBranch,
    /// Chart of accounts code: digit groups separated by dots, e.g. `1.01.003`
    AccountCode,
    /// Brazilian license plate, old (`ABC1234`) or Mercosul (`ABC1D23`)
    LicensePlate,
    /// `YYYY-MM-DD`
    IsoDate,
    Email,
}

impl FieldFormat {
    pub fn matches(&self, value: &str) -> bool {
        let value = value.trim();
        match self {
            FieldFormat::StateCode => {
                value.len() == 2 && value.chars().all(|c| c.is_ascii_alphabetic())
            }
            FieldFormat::HexColor => {
                value.len() == 7
                    && value.starts_with('#')
                    && value[1..].chars().all(|c| c.is_ascii_hexdigit())
            }
            FieldFormat::Digits(n) => {
                value.len() == *n && value.chars().all(|c| c.is_ascii_digit())
            }
            FieldFormat::BankBranch => {
                let (main, check) = match value.split_once('-') {
                    Some((main, check)) => (main, Some(check)),
                    None => (value, None),
                };
                !main.is_empty()
                    && main.len() <= 6
                    && main.chars().all(|c| c.is_ascii_digit())
                    && check.map_or(true, |c| c.len() == 1 && c.chars().all(|c| c.is_ascii_alphanumeric()))
            }
            FieldFormat::AccountCode => {
                !value.is_empty()
                    && value
                        .split('.')
                        .all(|group| !group.is_empty() && group.chars().all(|c| c.is_ascii_digit()))
            }
            FieldFormat::LicensePlate => {
                let plate: Vec<char> = value.chars().filter(|c| *c != '-').collect();
                plate.len() == 7
                    && plate[..3].iter().all(|c| c.is_ascii_alphabetic())
                    && plate[3].is_ascii_digit()
                    && (plate[4].is_ascii_digit() || plate[4].is_ascii_alphabetic())
                    && plate[5..].iter().all(|c| c.is_ascii_digit())
            }
            FieldFormat::IsoDate => chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok(),
            FieldFormat::Email => match value.split_once('@') {
                Some((user, domain)) => {
                    !user.is_empty()
                        && domain.contains('.')
                        && !domain.starts_with('.')
                        && !domain.ends_with('.')
                        && !value.contains(char::is_whitespace)
                }
                None => false,
            },
        }
    }

    /// Message shown next to the field when the value does not match
    pub fn hint(&self) -> String {
        match self {
            FieldFormat::StateCode => "deve conter exatamente 2 letras".to_string(),
            FieldFormat::HexColor => "deve estar no formato #RRGGBB".to_string(),
            FieldFormat::Digits(n) => format!("deve conter exatamente {} dígitos", n),
            FieldFormat::BankBranch => "deve conter apenas dígitos (ex.: 1234-5)".to_string(),
            FieldFormat::AccountCode => "deve conter números separados por ponto (ex.: 1.01.003)".to_string(),
            FieldFormat::LicensePlate => "placa inválida (ex.: ABC1234 ou ABC1D23)".to_string(),
            FieldFormat::IsoDate => "data inválida".to_string(),
            FieldFormat::Email => "e-mail inválido".to_string(),
        }
    }
}

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// `min` itself is rejected (strictly greater than)
    pub exclusive_min: bool,
    pub integer: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub format: Option<FieldFormat>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            exclusive_min: false,
            integer: false,
            min_length: None,
            max_length: None,
            format: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        let mut rules = Self::none();
        rules.required = true;
        rules
    }

    pub const fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub const fn at_least(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub const fn positive(mut self) -> Self {
        self.min = Some(0.0);
        self.exclusive_min = true;
        self
    }

    pub const fn integer(mut self) -> Self {
        self.integer = true;
        self
    }

    pub const fn length(mut self, min: usize, max: usize) -> Self {
        self.min_length = Some(min);
        self.max_length = Some(max);
        self
    }

    pub const fn format(mut self, format: FieldFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return if self.required {
                Err(format!("{} é obrigatório", field_label))
            } else {
                Ok(())
            };
        }

        let len = trimmed.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!("{} deve ter no mínimo {} caracteres", field_label, min));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!("{} deve ter no máximo {} caracteres", field_label, max));
            }
        }

        if let Some(format) = self.format {
            if !format.matches(trimmed) {
                return Err(format!("{} {}", field_label, format.hint()));
            }
        }

        Ok(())
    }

    /// Validate an optional numeric value against min/max rules
    pub fn validate_number(&self, value: Option<f64>, field_label: &str) -> Result<(), String> {
        let value = match value {
            Some(v) => v,
            None if self.required => return Err(format!("{} é obrigatório", field_label)),
            None => return Ok(()),
        };

        if !value.is_finite() {
            return Err(format!("{} deve ser um número", field_label));
        }

        if self.integer && value.fract() != 0.0 {
            return Err(format!("{} deve ser um número inteiro", field_label));
        }

        if let Some(min) = self.min {
            if self.exclusive_min && value <= min {
                return Err(format!("{} deve ser maior que {}", field_label, min));
            }
            if value < min {
                return Err(format!("{} deve ser no mínimo {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} deve ser no máximo {}", field_label, max));
            }
        }

        Ok(())
    }
}

/// Collects field errors while a DTO is checked field by field
#[derive(Debug, Default)]
pub struct Validator {
    errors: FieldErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, field: &str, label: &str, value: &str, rules: ValidationRules) -> &mut Self {
        if let Err(e) = rules.validate_string(value, label) {
            self.push(field, e);
        }
        self
    }

    pub fn number(&mut self, field: &str, label: &str, value: Option<f64>, rules: ValidationRules) -> &mut Self {
        if let Err(e) = rules.validate_number(value, label) {
            self.push(field, e);
        }
        self
    }

    /// Record `message` for `field` unless `ok` holds
    pub fn check(&mut self, field: &str, ok: bool, message: impl Into<String>) -> &mut Self {
        if !ok {
            self.push(field, message.into());
        }
        self
    }

    /// First message per field wins
    fn push(&mut self, field: &str, message: String) {
        self.errors.entry(field.to_string()).or_insert(message);
    }

    pub fn finish(&mut self) -> Result<(), FieldErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(std::mem::take(&mut self.errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats() {
        assert!(FieldFormat::StateCode.matches("SP"));
        assert!(!FieldFormat::StateCode.matches("SPX"));
        assert!(!FieldFormat::StateCode.matches("S1"));

        assert!(FieldFormat::HexColor.matches("#1a2B3c"));
        assert!(!FieldFormat::HexColor.matches("1a2b3c"));
        assert!(!FieldFormat::HexColor.matches("#12345g"));

        assert!(FieldFormat::Digits(7).matches("3550308"));
        assert!(!FieldFormat::Digits(7).matches("355030"));

        assert!(FieldFormat::BankBranch.matches("1234-5"));
        assert!(FieldFormat::BankBranch.matches("0001"));
        assert!(!FieldFormat::BankBranch.matches("12a4"));

        assert!(FieldFormat::AccountCode.matches("1.01.003"));
        assert!(!FieldFormat::AccountCode.matches("1..2"));

        assert!(FieldFormat::LicensePlate.matches("ABC1234"));
        assert!(FieldFormat::LicensePlate.matches("ABC1D23"));
        assert!(FieldFormat::LicensePlate.matches("abc-1234"));
        assert!(!FieldFormat::LicensePlate.matches("AB12345"));

        assert!(FieldFormat::IsoDate.matches("2024-02-29"));
        assert!(!FieldFormat::IsoDate.matches("2023-02-29"));

        assert!(FieldFormat::Email.matches("ana@empresa.com.br"));
        assert!(!FieldFormat::Email.matches("ana@empresa"));
    }

    #[test]
    fn test_required_string() {
        let rules = ValidationRules::required();
        assert!(rules.validate_string("  ", "Nome").is_err());
        assert!(rules.validate_string("Ana", "Nome").is_ok());
        assert!(ValidationRules::none().validate_string("", "Nome").is_ok());
    }

    #[test]
    fn test_optional_format_skipped_when_empty() {
        let rules = ValidationRules::none().format(FieldFormat::Digits(7));
        assert!(rules.validate_string("", "IBGE").is_ok());
        assert!(rules.validate_string("12", "IBGE").is_err());
    }

    #[test]
    fn test_number_rules() {
        let pct = ValidationRules::required().range(0.0, 100.0);
        assert!(pct.validate_number(Some(100.0), "Taxa").is_ok());
        assert!(pct.validate_number(Some(100.5), "Taxa").is_err());
        assert!(pct.validate_number(None, "Taxa").is_err());

        let liters = ValidationRules::required().positive();
        assert!(liters.validate_number(Some(0.0), "Litros").is_err());
        assert!(liters.validate_number(Some(0.1), "Litros").is_ok());

        let days = ValidationRules::none().integer().range(0.0, 365.0);
        assert!(days.validate_number(Some(2.5), "Prazo").is_err());
        assert!(days.validate_number(None, "Prazo").is_ok());
    }

    #[test]
    fn test_validator_keeps_first_error_per_field() {
        let mut v = Validator::new();
        v.text("nome", "Nome", "", ValidationRules::required())
            .check("nome", false, "outro");
        let errors = v.finish().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["nome"], "Nome é obrigatório");
    }
}
