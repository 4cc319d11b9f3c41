//! Utilities for date and time formatting
//!
//! Provides consistent pt-BR date/time formatting across the application

/// Format ISO datetime string to DD/MM/YYYY HH:MM:SS format
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    let (date_part, time_part) = match datetime_str.split_once('T') {
        Some(parts) => parts,
        None => match datetime_str.split_once(' ') {
            Some(parts) => parts,
            None => return format_date(datetime_str),
        },
    };
    let date = format_date(date_part);
    if date == date_part {
        return datetime_str.to_string();
    }
    let time = time_part
        .split(&['.', 'Z', '+'][..])
        .next()
        .unwrap_or(time_part);
    format!("{} {}", date, time)
}

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Today as `YYYY-MM-DD`, the value a date input expects
pub fn today_iso() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
