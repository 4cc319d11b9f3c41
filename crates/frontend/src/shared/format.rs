//! Number and cell formatting for tables (pt-BR: `1.234,56`)

use super::crud::entity::CellValue;
use super::date_utils::{format_date, format_datetime};

/// Formats a number with `.` as thousands separator and `,` as decimal mark
///
/// # Examples
///
/// ```text
/// format_number_with_decimals(1234.567, 2) == "1.234,57"
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.*}", decimals.min(6) as usize, value);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{},{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Money with two decimals, e.g. `R$ 1.234,56`
pub fn format_money(value: f64) -> String {
    format!("R$ {}", format_number_with_decimals(value, 2))
}

/// Plain text of a cell, as exported and as shown outside badges
pub fn cell_text(cell: &CellValue) -> String {
    match cell {
        CellValue::Text(s) => s.clone(),
        CellValue::Money(v) => format_money(*v),
        CellValue::Number { value, decimals } => format_number_with_decimals(*value, *decimals),
        CellValue::Date(s) => format_date(s),
        CellValue::DateTime(s) => format_datetime(s),
        CellValue::Badge { label, .. } => label.clone(),
        CellValue::Color(s) => s.clone(),
        CellValue::Empty => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "R$ 1.234,56");
        assert_eq!(format_money(1234567.891), "R$ 1.234.567,89");
        assert_eq!(format_money(0.0), "R$ 0,00");
        assert_eq!(format_money(-1234.5), "R$ -1.234,50");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1.235");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1.234,567");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
        assert_eq!(format_number_with_decimals(100000.0, 1), "100.000,0");
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&CellValue::Date("2024-03-15".into())), "15/03/2024");
        assert_eq!(cell_text(&CellValue::active(false)), "Inativo");
        assert_eq!(cell_text(&CellValue::Empty), "");
    }
}
