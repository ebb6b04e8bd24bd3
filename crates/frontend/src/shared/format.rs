//! pt-BR formatting of dates, numbers and money

use chrono::{Datelike, NaiveDate};

/// `dd/mm/yyyy`
pub fn format_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year())
}

/// Number with `.` as thousands separator and `,` before the decimals
///
/// # Examples
///
/// ```
/// use bpp_frontend::shared::format::format_number;
/// assert_eq!(format_number(1234.567, 2), "1.234,57");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Group the integer part by thousands from the right
    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let mut result: String = grouped.chars().rev().collect();

    if let Some(d) = decimal_part {
        result.push(',');
        result.push_str(d);
    }

    let is_zero = result.chars().all(|c| c == '0' || c == '.' || c == ',');
    if value < 0.0 && !is_zero {
        result.insert(0, '-');
    }
    result
}

/// BRL currency the way `Intl.NumberFormat('pt-BR', {currency: 'BRL'})`
/// prints it: `R$ 1.234,56` with a non-breaking space.
pub fn format_currency(value: f64) -> String {
    let amount = format_number(value.abs(), 2);
    if value < 0.0 && amount != "0,00" {
        format!("-R$\u{a0}{}", amount)
    } else {
        format!("R$\u{a0}{}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format_date(date), "07/03/2025");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234.567, 2), "1.234,57");
        assert_eq!(format_number(1234567.0, 0), "1.234.567");
        assert_eq!(format_number(0.0, 2), "0,00");
        assert_eq!(format_number(-1234.5, 1), "-1.234,5");
        assert_eq!(format_number(-0.001, 2), "0,00");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.56), "R$\u{a0}1.234,56");
        assert_eq!(format_currency(0.5), "R$\u{a0}0,50");
        assert_eq!(format_currency(-1.0), "-R$\u{a0}1,00");
        assert_eq!(format_currency(1_000_000.0), "R$\u{a0}1.000.000,00");
    }
}
