use unicode_normalization::UnicodeNormalization;

/// Fold text to lower-case plain ASCII for comparison.
///
/// NFKC first so compatibility forms (ligatures, full-width letters) collapse,
/// then transliterate: "Straße" -> "strasse", "привет" -> "privet".
pub fn normalize(text: &str) -> String {
    let text = text.trim();

    if text.is_empty() {
        return String::new();
    }

    let composed: String = text.nfkc().collect();

    deunicode::deunicode(&composed).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_diacritics_and_case() {
        assert_eq!(normalize("Café"), "cafe");
        assert_eq!(normalize("ÉCOLE"), "ecole");
        assert_eq!(normalize("Straße"), "strasse");
    }

    #[test]
    fn test_transliterates_non_latin() {
        assert_eq!(normalize("привет"), "privet");
        assert!(normalize("καλημέρα").is_ascii());
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  "), "");
    }
}
