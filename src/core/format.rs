//! Live input masking for CPF and CNPJ.

use super::digits::{CNPJ_LEN, CPF_LEN};

/// Separators of `000.000.000-00`, keyed by the digit index they precede.
const CPF_MASK: &[(usize, char)] = &[(3, '.'), (6, '.'), (9, '-')];

/// Separators of `00.000.000/0000-00`, keyed by the digit index they precede.
const CNPJ_MASK: &[(usize, char)] = &[(2, '.'), (5, '.'), (8, '/'), (12, '-')];

/// Mask a CPF or CNPJ as the user types it.
///
/// Non-digits are stripped and anything beyond the 14th digit is dropped.
/// Up to 11 digits are masked as a CPF, 12 to 14 as a CNPJ. A separator
/// only appears once a digit follows it, so partial input stays partial:
///
/// ```rust
/// use cadastro::core::format_cpf_cnpj;
///
/// assert_eq!(format_cpf_cnpj("123"), "123");
/// assert_eq!(format_cpf_cnpj("1234"), "123.4");
/// assert_eq!(format_cpf_cnpj("11144477735"), "111.444.777-35");
/// assert_eq!(format_cpf_cnpj("112223330001"), "11.222.333/0001");
/// assert_eq!(format_cpf_cnpj("11222333000181"), "11.222.333/0001-81");
/// ```
///
/// No checksum is verified; see
/// [`validate_cpf_or_cnpj`](super::validate_cpf_or_cnpj) for that.
pub fn format_cpf_cnpj(raw: &str) -> String {
    let digits: Vec<char> = raw
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(CNPJ_LEN)
        .collect();

    let mask = if digits.len() <= CPF_LEN {
        CPF_MASK
    } else {
        CNPJ_MASK
    };

    let mut out = String::with_capacity(digits.len() + mask.len());
    for (i, digit) in digits.into_iter().enumerate() {
        if let Some(&(_, sep)) = mask.iter().find(|&&(at, _)| at == i) {
            out.push(sep);
        }
        out.push(digit);
    }
    out
}
