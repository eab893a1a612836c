//! Cell Formatting
//!
//! French number formatting for currency and quantity cells.

/// `1234.5` -> `"1 234,50 €"`
pub fn format_currency(value: f64) -> String {
    format!("{} €", group_decimal(&format!("{:.2}", value)))
}

/// Whole numbers without decimals, others with up to two; `None` is blank
pub fn format_number(value: Option<f64>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    if value.fract() == 0.0 {
        group_decimal(&format!("{:.0}", value))
    } else {
        let fixed = format!("{:.2}", value);
        let trimmed = fixed.trim_end_matches('0');
        group_decimal(trimmed)
    }
}

/// Group thousands with spaces and use a decimal comma
fn group_decimal(fixed: &str) -> String {
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac) if !frac.is_empty() => format!("{}{},{}", sign, grouped, frac),
        _ => format!("{}{}", sign, grouped),
    }
}
