use thiserror::Error;

use crate::core::TaxIdError;

/// Errors raised while assembling a client's document set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DocumentError {
    /// The client identifier is not a valid CPF/CNPJ.
    #[error("invalid client identifier: {0}")]
    InvalidClient(#[from] TaxIdError),

    /// A template with this id was already selected.
    #[error("duplicate template id '{0}'")]
    DuplicateTemplate(String),

    /// The template label is blank, so no status record could ever match it.
    #[error("template '{0}' has an empty label")]
    EmptyLabel(String),
}
