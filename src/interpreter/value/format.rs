/// Maximum number of fractional digits shown when rendering a number.
pub const MAX_FRACTION_DIGITS: usize = 4;

/// Renders a number for display.
///
/// The integer part is grouped in threes with commas, the fractional part is
/// truncated (not rounded) to [`MAX_FRACTION_DIGITS`] digits, and integral
/// values carry no decimal point. Negative zero renders as `0`.
///
/// ## Example
/// ```
/// use umni::interpreter::value::format::format_number;
///
/// assert_eq!(format_number(1234567.0), "1,234,567");
/// assert_eq!(format_number(-1234.56789), "-1,234.5678");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(-0.0), "0");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}Infinity");
    }

    let digits = value.abs().to_string();
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    let mut rendered = String::from(sign);
    rendered.push_str(&group_thousands(integer));
    if !fraction.is_empty() {
        rendered.push('.');
        rendered.extend(fraction.chars().take(MAX_FRACTION_DIGITS));
    }
    rendered
}

/// Renders an integer with thousands separators.
#[must_use]
pub fn format_natural(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    format!("{sign}{}", group_thousands(&value.unsigned_abs().to_string()))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
