/// Group the digits of a whole number with commas
fn group_thousands(whole: u64) -> String {
    let digits = whole.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Format an amount rounded to whole units with thousands separators
pub fn format_amount(value: f64) -> String {
    let whole = value.abs().round() as u64;
    if value < 0.0 && whole > 0 {
        format!("-{}", group_thousands(whole))
    } else {
        group_thousands(whole)
    }
}

/// Format a value that is already a percentage (80.0 -> "80.00%")
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}
