//! Money formatting for terminal output.

/// Separators used when rendering amounts for a locale tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberStyle {
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl NumberStyle {
    /// Comma-decimal locales group with dots; everything else uses the `en` convention.
    pub fn for_locale(tag: &str) -> Self {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "pt" | "es" | "de" | "it" | "nl" | "fr" => Self {
                decimal_separator: ',',
                grouping_separator: '.',
            },
            _ => Self::default(),
        }
    }
}

impl Default for NumberStyle {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

pub fn symbol_for(code: &str) -> &str {
    match code {
        "BRL" => "R$",
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        _ => code,
    }
}

pub fn minor_units_for(code: &str) -> usize {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Renders `amount` with the currency symbol, grouping and minor units of `code`.
pub fn format_amount(amount: f64, code: &str, style: NumberStyle) -> String {
    let body = format_number(amount.abs(), minor_units_for(code), style);
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{} {body}", symbol_for(code))
}

pub fn format_number(value: f64, precision: usize, style: NumberStyle) -> String {
    let raw = format!("{:.*}", precision, value);
    let (int_part, fraction) = match raw.split_once('.') {
        Some((int_part, fraction)) => (int_part, Some(fraction)),
        None => (raw.as_str(), None),
    };
    let mut body = group_digits(int_part, style.grouping_separator);
    if let Some(fraction) = fraction {
        body.push(style.decimal_separator);
        body.push_str(fraction);
    }
    body
}

fn group_digits(digits: &str, separator: char) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}")
}
