use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::digits::{CNPJ_LEN, CPF_LEN, digit_values, strip_digits};
use super::error::TaxIdError;
use super::format::format_cpf_cnpj;
use super::validation::check;

/// Which registry an identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaxIdKind {
    /// Cadastro de Pessoas Físicas — individuals, 11 digits.
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica — businesses, 14 digits.
    Cnpj,
}

impl TaxIdKind {
    /// Number of digits including the two check digits.
    pub fn digit_len(self) -> usize {
        match self {
            Self::Cpf => CPF_LEN,
            Self::Cnpj => CNPJ_LEN,
        }
    }

    /// Short registry name ("CPF" / "CNPJ").
    pub fn name(self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
        }
    }
}

impl fmt::Display for TaxIdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A CPF or CNPJ that passed checksum validation.
///
/// Stored as bare digits; [`Display`](fmt::Display) renders the canonical
/// mask. Serializes as the digit string and only deserializes valid
/// identifiers.
///
/// ```rust
/// use cadastro::core::{TaxId, TaxIdError, TaxIdKind};
///
/// let id = TaxId::parse("11.222.333/0001-81").unwrap();
/// assert_eq!(id.kind(), TaxIdKind::Cnpj);
/// assert_eq!(id.to_string(), "11.222.333/0001-81");
///
/// assert_eq!(TaxId::parse("111.111.111-11"), Err(TaxIdError::RepeatedDigits));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaxId {
    digits: String,
    kind: TaxIdKind,
}

impl TaxId {
    /// Parse a CPF or CNPJ in any punctuation style.
    ///
    /// Accepts exactly the inputs for which
    /// [`validate_cpf_or_cnpj`](super::validate_cpf_or_cnpj) returns `true`.
    pub fn parse(raw: &str) -> Result<Self, TaxIdError> {
        let values = digit_values(raw);
        match check(&values) {
            Ok(kind) => Ok(Self {
                digits: strip_digits(raw),
                kind,
            }),
            Err(err) => {
                tracing::debug!(digits = values.len(), %err, "rejected tax id");
                Err(err)
            }
        }
    }

    /// CPF or CNPJ.
    pub fn kind(&self) -> TaxIdKind {
        self.kind
    }

    /// The bare digit sequence, without punctuation.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// The canonical mask (`000.000.000-00` or `00.000.000/0000-00`).
    pub fn formatted(&self) -> String {
        format_cpf_cnpj(&self.digits)
    }

    pub fn is_cpf(&self) -> bool {
        self.kind == TaxIdKind::Cpf
    }

    pub fn is_cnpj(&self) -> bool {
        self.kind == TaxIdKind::Cnpj
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for TaxId {
    type Err = TaxIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for TaxId {
    type Error = TaxIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for TaxId {
    type Error = TaxIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TaxId> for String {
    fn from(id: TaxId) -> Self {
        id.digits
    }
}

impl AsRef<str> for TaxId {
    fn as_ref(&self) -> &str {
        &self.digits
    }
}
