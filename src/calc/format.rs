//! Display formatting for numeric values.

/// Group digits in threes with commas: `1234567` becomes `"1,234,567"`.
///
/// Safe across the full `i32` range, including `i32::MIN`.
pub fn group_digits(value: i32) -> String {
    let digits: Vec<char> = value.unsigned_abs().to_string().chars().rev().collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*c);
    }
    if value < 0 {
        out.push('-');
    }
    out.chars().rev().collect()
}
