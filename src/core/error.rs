use thiserror::Error;

/// Reasons a CPF/CNPJ fails strict parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TaxIdError {
    /// The input contained no digits at all.
    #[error("no digits in input")]
    Empty,

    /// The digit count is neither 11 (CPF) nor 14 (CNPJ).
    #[error("expected 11 digits (CPF) or 14 digits (CNPJ), got {len}")]
    InvalidLength {
        /// Number of digits found after stripping punctuation.
        len: usize,
    },

    /// Every digit is the same (e.g. "000.000.000-00").
    #[error("all digits are identical")]
    RepeatedDigits,

    /// One of the two trailing check digits does not match.
    #[error("check digit {position} should be {expected}, found {found}")]
    CheckDigitMismatch {
        /// 1 for the first check digit, 2 for the second.
        position: u8,
        /// The digit computed from the preceding digits.
        expected: u8,
        /// The digit present in the input.
        found: u8,
    },
}
