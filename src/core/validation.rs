use super::digits::{CNPJ_LEN, CPF_LEN, all_same, digit_values};
use super::error::TaxIdError;
use super::types::TaxIdKind;

/// CNPJ weights for the first check digit (digits 1-12).
pub const CNPJ_WEIGHTS_FIRST: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// CNPJ weights for the second check digit (digits 1-13).
pub const CNPJ_WEIGHTS_SECOND: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Validate a CPF or CNPJ, formatted or not.
///
/// Returns `true` only for 11 or 14 digits (after stripping punctuation)
/// that are not all the same digit and whose two check digits match.
/// Input with any other digit count is invalid; it is not truncated.
///
/// Never panics.
pub fn validate_cpf_or_cnpj(raw: &str) -> bool {
    check(&digit_values(raw)).is_ok()
}

/// Validate a CPF only. A valid CNPJ yields `false`.
pub fn validate_cpf(raw: &str) -> bool {
    matches!(check(&digit_values(raw)), Ok(TaxIdKind::Cpf))
}

/// Validate a CNPJ only. A valid CPF yields `false`.
pub fn validate_cnpj(raw: &str) -> bool {
    matches!(check(&digit_values(raw)), Ok(TaxIdKind::Cnpj))
}

/// Compute the two check digits for a CPF or CNPJ base.
///
/// The base is 9 digits for a CPF or 12 for a CNPJ, punctuation ignored.
/// Any other digit count gives `None`.
///
/// ```rust
/// use cadastro::core::check_digits;
///
/// assert_eq!(check_digits("111.444.777"), Some([3, 5]));
/// assert_eq!(check_digits("11.222.333/0001"), Some([8, 1]));
/// assert_eq!(check_digits("1234"), None);
/// ```
pub fn check_digits(base: &str) -> Option<[u8; 2]> {
    let mut digits = digit_values(base);
    let kind = match digits.len() {
        n if n == CPF_LEN - 2 => TaxIdKind::Cpf,
        n if n == CNPJ_LEN - 2 => TaxIdKind::Cnpj,
        _ => return None,
    };
    let first = expected_digit(kind, &digits);
    digits.push(first);
    let second = expected_digit(kind, &digits);
    Some([first, second])
}

/// Append the two check digits to a CPF or CNPJ base.
///
/// Returns the bare digit sequence, e.g. `"11144477735"` for `"111444777"`.
pub fn complete_with_check_digits(base: &str) -> Option<String> {
    let [first, second] = check_digits(base)?;
    let mut out = super::strip_digits(base);
    out.push(char::from(b'0' + first));
    out.push(char::from(b'0' + second));
    Some(out)
}

/// Run the full rule set on a digit sequence.
pub(crate) fn check(digits: &[u8]) -> Result<TaxIdKind, TaxIdError> {
    let kind = match digits.len() {
        0 => return Err(TaxIdError::Empty),
        CPF_LEN => TaxIdKind::Cpf,
        CNPJ_LEN => TaxIdKind::Cnpj,
        len => return Err(TaxIdError::InvalidLength { len }),
    };

    if all_same(digits) {
        return Err(TaxIdError::RepeatedDigits);
    }

    let len = digits.len();
    for (position, at) in [(1u8, len - 2), (2u8, len - 1)] {
        let expected = expected_digit(kind, &digits[..at]);
        let found = digits[at];
        if expected != found {
            return Err(TaxIdError::CheckDigitMismatch {
                position,
                expected,
                found,
            });
        }
    }

    Ok(kind)
}

/// Check digit for `prefix`, which must hold every digit before it.
fn expected_digit(kind: TaxIdKind, prefix: &[u8]) -> u8 {
    let sum: u32 = match kind {
        // CPF weights count down to 2 from prefix.len() + 1
        TaxIdKind::Cpf => prefix
            .iter()
            .rev()
            .zip(2u32..)
            .map(|(&d, w)| u32::from(d) * w)
            .sum(),
        TaxIdKind::Cnpj => {
            let weights: &[u32] = if prefix.len() == CNPJ_WEIGHTS_FIRST.len() {
                &CNPJ_WEIGHTS_FIRST
            } else {
                &CNPJ_WEIGHTS_SECOND
            };
            prefix
                .iter()
                .zip(weights)
                .map(|(&d, &w)| u32::from(d) * w)
                .sum()
        }
    };
    mod11(sum)
}

fn mod11(sum: u32) -> u8 {
    let rem = sum % 11;
    if rem < 2 { 0 } else { (11 - rem) as u8 }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- CPF ---

    #[test]
    fn known_valid_cpf() {
        assert!(validate_cpf_or_cnpj("11144477735"));
        assert!(validate_cpf_or_cnpj("111.444.777-35"));
    }

    #[test]
    fn cpf_repeated_digits_rejected() {
        assert!(!validate_cpf_or_cnpj("111.111.111-11"));
        assert_eq!(check(&[0; 11]), Err(TaxIdError::RepeatedDigits));
    }

    #[test]
    fn cpf_bad_second_check_digit() {
        assert!(!validate_cpf_or_cnpj("111.444.777-36"));
        assert_eq!(
            check(&digit_values("11144477736")),
            Err(TaxIdError::CheckDigitMismatch {
                position: 2,
                expected: 5,
                found: 6
            })
        );
    }

    #[test]
    fn cpf_bad_first_check_digit() {
        assert_eq!(
            check(&digit_values("11144477745")),
            Err(TaxIdError::CheckDigitMismatch {
                position: 1,
                expected: 3,
                found: 4
            })
        );
    }

    #[test]
    fn cpf_remainder_below_two_gives_zero() {
        assert_eq!(check_digits("987654321"), Some([0, 0]));
        assert!(validate_cpf("987.654.321-00"));
    }

    #[test]
    fn leading_zeros_are_significant() {
        assert!(validate_cpf("000.000.001-91"));
        assert!(validate_cnpj("00.000.000/0001-91"));
    }

    // --- CNPJ ---

    #[test]
    fn known_valid_cnpj() {
        assert!(validate_cpf_or_cnpj("11222333000181"));
        assert!(validate_cpf_or_cnpj("11.222.333/0001-81"));
    }

    #[test]
    fn cnpj_repeated_digits_rejected() {
        assert!(!validate_cpf_or_cnpj("00.000.000/0000-00"));
        assert!(!validate_cpf_or_cnpj("99999999999999"));
    }

    #[test]
    fn cnpj_bad_check_digit() {
        assert!(!validate_cpf_or_cnpj("11.222.333/0001-82"));
        assert!(!validate_cpf_or_cnpj("11.222.333/0001-91"));
    }

    #[test]
    fn cnpj_second_digit_zero() {
        assert_eq!(check_digits("123456789012"), Some([3, 0]));
        assert!(validate_cnpj("12.345.678/9012-30"));
    }

    // --- Lengths ---

    #[test]
    fn wrong_lengths_are_invalid() {
        assert!(!validate_cpf_or_cnpj(""));
        assert!(!validate_cpf_or_cnpj("123456"));
        assert!(!validate_cpf_or_cnpj("1114447773"));
        assert!(!validate_cpf_or_cnpj("111444777350"));
    }

    #[test]
    fn over_length_is_not_truncated() {
        // First 14 digits form a valid CNPJ, but the validator sees 20
        assert!(!validate_cpf_or_cnpj("11222333000181000000"));
        assert_eq!(
            check(&digit_values("11222333000181000000")),
            Err(TaxIdError::InvalidLength { len: 20 })
        );
    }

    #[test]
    fn empty_reports_empty() {
        assert_eq!(check(&digit_values("--")), Err(TaxIdError::Empty));
    }

    // --- Kind-restricted ---

    #[test]
    fn kind_restricted_validators() {
        assert!(validate_cpf("111.444.777-35"));
        assert!(!validate_cpf("11.222.333/0001-81"));
        assert!(validate_cnpj("11.222.333/0001-81"));
        assert!(!validate_cnpj("111.444.777-35"));
    }

    // --- Check digit generation ---

    #[test]
    fn check_digits_for_known_bases() {
        assert_eq!(check_digits("111444777"), Some([3, 5]));
        assert_eq!(check_digits("112223330001"), Some([8, 1]));
    }

    #[test]
    fn check_digits_wrong_base_length() {
        assert_eq!(check_digits(""), None);
        assert_eq!(check_digits("11144477735"), None);
    }

    #[test]
    fn complete_appends_digits() {
        assert_eq!(
            complete_with_check_digits("111.444.777").as_deref(),
            Some("11144477735")
        );
        assert_eq!(
            complete_with_check_digits("11.222.333/0001").as_deref(),
            Some("11222333000181")
        );
    }

    #[test]
    fn mod11_rule() {
        assert_eq!(mod11(0), 0);
        assert_eq!(mod11(1), 0);
        assert_eq!(mod11(12), 0);
        assert_eq!(mod11(13), 9);
        assert_eq!(mod11(21), 1);
    }
}
