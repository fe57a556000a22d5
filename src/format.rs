//! pt-BR Formatting
//!
//! Locale-aware rendering of money, quantities and dates. Grouping uses a
//! dot, decimals use a comma, matching `Intl.NumberFormat('pt-BR')` output.

use chrono::NaiveDate;

/// Format a monetary amount as BRL: `R$ 1.234,56`.
///
/// The separator after `R$` is a non-breaking space, as emitted by the
/// browser's own locale formatting.
pub fn format_brl(value: f64) -> String {
    let decimal = format_decimal_comma(value.abs());
    if value < -0.004 {
        format!("-R$\u{a0}{decimal}")
    } else {
        format!("R$\u{a0}{decimal}")
    }
}

/// Format a number with two decimal places in pt-BR notation: `1.234,56`.
pub fn format_decimal_comma(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;
    let grouped = group_thousands(whole);

    if value < -0.004 {
        format!("-{grouped},{fraction:02}")
    } else {
        format!("{grouped},{fraction:02}")
    }
}

/// Insert a dot every three digits: `1234567` -> `1.234.567`.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Short chart label: day/month (`02/05`).
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%d/%m").to_string()
}

/// Full pt-BR date (`02/05/2024`), used for the period header.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brl_uses_ptbr_grouping_and_decimal_comma() {
        assert_eq!(format_brl(0.0), "R$\u{a0}0,00");
        assert_eq!(format_brl(25.5), "R$\u{a0}25,50");
        assert_eq!(format_brl(1234.56), "R$\u{a0}1.234,56");
        assert_eq!(format_brl(1_234_567.89), "R$\u{a0}1.234.567,89");
    }

    #[test]
    fn brl_negative_amounts_carry_the_sign_outside() {
        assert_eq!(format_brl(-12.3), "-R$\u{a0}12,30");
    }

    #[test]
    fn decimal_comma_rounds_to_cents() {
        assert_eq!(format_decimal_comma(25.5), "25,50");
        assert_eq!(format_decimal_comma(25.499), "25,50");
        assert_eq!(format_decimal_comma(0.005), "0,01");
        assert_eq!(format_decimal_comma(1000.0), "1.000,00");
    }

    #[test]
    fn short_date_is_day_slash_month() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        assert_eq!(format_short_date(date), "02/05");
        assert_eq!(format_long_date(date), "02/05/2024");
    }
}
