// crates/popdb-core/src/text.rs

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Côte d'Ivoire` -> `Cote d'Ivoire`)
/// 2\) Normalize to lowercase
/// 3\) Trim surrounding whitespace
///
/// # Examples
///
/// ```rust
/// use popdb_core::text::fold_key;
///
/// assert_eq!(fold_key(" Côte d'Ivoire "), "cote d'ivoire");
/// assert_eq!(fold_key("TÜRKIYE"), "turkiye");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s.trim()).to_lowercase()
}

/// Maps user input onto a stored country name.
///
/// An exact match wins. Otherwise the first candidate equal to `input` under
/// [`fold_key`] is returned. `None` when nothing matches; callers then use the
/// input verbatim and get empty results.
///
/// ```rust
/// use popdb_core::text::resolve_country;
///
/// let known = vec!["Germany".to_string(), "Réunion".to_string()];
/// assert_eq!(resolve_country(&known, "germany"), Some("Germany"));
/// assert_eq!(resolve_country(&known, "reunion"), Some("Réunion"));
/// assert_eq!(resolve_country(&known, "Atlantis"), None);
/// ```
pub fn resolve_country<'a>(candidates: &'a [String], input: &str) -> Option<&'a str> {
    if let Some(exact) = candidates.iter().find(|c| c.as_str() == input) {
        return Some(exact.as_str());
    }
    let key = fold_key(input);
    if key.is_empty() {
        return None;
    }
    candidates
        .iter()
        .find(|c| fold_key(c) == key)
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_beats_folded_match() {
        let known = vec!["chad".to_string(), "Chad".to_string()];
        assert_eq!(resolve_country(&known, "Chad"), Some("Chad"));
    }

    #[test]
    fn blank_input_resolves_to_nothing() {
        let known = vec!["Chad".to_string()];
        assert_eq!(resolve_country(&known, "   "), None);
    }

    #[test]
    fn folded_match_needs_the_whole_name() {
        let known = vec!["Niger".to_string(), "São Tomé".to_string()];
        assert_eq!(resolve_country(&known, "sao tome"), Some("São Tomé"));
        assert_eq!(resolve_country(&known, "nigeria"), None);
    }
}
