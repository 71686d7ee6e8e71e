//! # cadastro
//!
//! Brazilian taxpayer identifiers for back-office client registration:
//! CPF (individuals, 11 digits) and CNPJ (businesses, 14 digits).
//!
//! Formatting and validation are orthogonal. [`format_cpf_cnpj`] masks
//! whatever digits it is given, as an input field would while the user
//! types. [`validate_cpf_or_cnpj`] runs the modulo-11 check-digit rules.
//! Both are total: they never panic and never return an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use cadastro::core::*;
//!
//! assert_eq!(format_cpf_cnpj("11144477735"), "111.444.777-35");
//! assert_eq!(format_cpf_cnpj("123456"), "123.456");
//! assert!(validate_cpf_or_cnpj("11.222.333/0001-81"));
//! assert!(!validate_cpf_or_cnpj("111.111.111-11"));
//!
//! let id: TaxId = "111.444.777-35".parse().unwrap();
//! assert_eq!(id.kind(), TaxIdKind::Cpf);
//! assert_eq!(id.digits(), "11144477735");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | CPF/CNPJ masking, validation, strict parsing, check digits |
//! | `text` | Accent- and case-insensitive label matching |
//! | `documents` | Client document templates and generation status |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "text")]
pub mod text;

#[cfg(feature = "documents")]
pub mod documents;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
