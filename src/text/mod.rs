//! Accent- and case-insensitive label matching.
//!
//! Document labels arrive from the backend with inconsistent accents and
//! capitalisation ("Procuração INSS", "PROCURACAO inss"), so matching
//! folds both sides before comparing.

mod compare;

pub use compare::{compare_strings, fold_text};
