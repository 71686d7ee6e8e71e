//! Digit extraction shared by the formatter and the validator.

/// Number of digits in a CPF.
pub const CPF_LEN: usize = 11;

/// Number of digits in a CNPJ.
pub const CNPJ_LEN: usize = 14;

/// Strip every character that is not an ASCII digit.
///
/// Punctuation, whitespace, letters and non-ASCII digits are all dropped.
pub fn strip_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Digit values of `raw` (0-9), punctuation skipped.
pub(crate) fn digit_values(raw: &str) -> Vec<u8> {
    raw.bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

/// True when the slice is non-empty and every element equals the first.
pub(crate) fn all_same(digits: &[u8]) -> bool {
    match digits.split_first() {
        Some((first, rest)) => rest.iter().all(|d| d == first),
        None => false,
    }
}
