use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold a string for comparison: NFD decomposition, combining marks
/// removed, lowercased.
///
/// ```rust
/// use cadastro::text::fold_text;
///
/// assert_eq!(fold_text("Procuração"), "procuracao");
/// ```
pub fn fold_text(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Whether `text` contains `compare`, ignoring accents and case.
///
/// Returns `false` when either side is missing or empty. This is
/// containment, not equality: a longer `text` matches a shorter `compare`.
///
/// ```rust
/// use cadastro::text::compare_strings;
///
/// assert!(compare_strings(Some("Procuração INSS"), Some("procuracao")));
/// assert!(!compare_strings(None, Some("x")));
/// assert!(!compare_strings(Some("abc"), Some("xyz")));
/// ```
pub fn compare_strings(text: Option<&str>, compare: Option<&str>) -> bool {
    match (text, compare) {
        (Some(text), Some(compare)) if !text.is_empty() && !compare.is_empty() => {
            fold_text(text).contains(&fold_text(compare))
        }
        _ => false,
    }
}
