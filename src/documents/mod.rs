//! Document generation status for a client.
//!
//! A client (identified by CPF or CNPJ) has a set of selected document
//! templates. The backend reports generation progress as free-text status
//! records; these are matched to templates by label, ignoring accents and
//! case, to work out which documents are still outstanding.
//!
//! # Example
//!
//! ```rust
//! use cadastro::documents::*;
//!
//! let docs = ClientDocuments::for_client("111.444.777-35")
//!     .unwrap()
//!     .template("proc", "Procuração INSS")
//!     .template("decl", "Declaração de hipossuficiência")
//!     .record(StatusRecord::new("PROCURACAO INSS (gerada)", GenerationState::Generated));
//!
//! let pending: Vec<_> = docs.pending().into_iter().map(|d| d.template.id).collect();
//! assert_eq!(pending, ["decl"]);
//! assert_eq!(docs.progress().percent(), 50);
//! ```

mod error;
mod status;
mod types;

pub use error::DocumentError;
pub use status::*;
pub use types::*;
