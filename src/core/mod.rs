//! CPF/CNPJ masking, checksum validation, and strict parsing.
//!
//! The free functions here are pure and total, safe to call on every
//! keystroke. [`TaxId`] is the typed form for values that must be valid.

mod digits;
mod error;
mod format;
mod types;
mod validation;

pub use digits::{CNPJ_LEN, CPF_LEN, strip_digits};
pub use error::*;
pub use format::format_cpf_cnpj;
pub use types::*;
pub use validation::*;
