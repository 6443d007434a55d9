//! Utility functions and helpers

/// Insert `separator` between every group of three digits, counting from the right.
///
/// A leading `-` is kept in front of the grouped digits.
pub fn group_digits(digits: &str, separator: char) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    let mut count = 0;
    for c in digits.chars().rev() {
        if count == 3 {
            result.push(separator);
            count = 0;
        }
        result.push(c);
        count += 1;
    }
    result.push_str(sign);
    result.chars().rev().collect()
}

/// Format a number with thousands separators
pub fn format_number<T: ToString>(n: T) -> String {
    group_digits(&n.to_string(), ',')
}
