use std::sync::LazyLock;

use regex::Regex;

static HEADLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""alternativeHeadline"\s*:\s*"([^"]*)""#).unwrap());

/// Pull the restaurant name out of the article's embedded metadata.
///
/// Only the first `"alternativeHeadline"` occurrence counts.
pub fn extract_restaurant_name(markup: &str) -> Option<String> {
    HEADLINE_RE
        .captures(markup)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_wins() {
        let html = r#"{"alternativeHeadline":"Leonti"} {"alternativeHeadline": "Café Altro Paradiso"}"#;
        assert_eq!(extract_restaurant_name(html).as_deref(), Some("Leonti"));
    }

    #[test]
    fn tolerates_whitespace_around_colon() {
        let html = "\"alternativeHeadline\"  :\n  \"Wu's Wonton King\"";
        assert_eq!(extract_restaurant_name(html).as_deref(), Some("Wu's Wonton King"));
    }

    #[test]
    fn missing_field() {
        assert_eq!(extract_restaurant_name(r#"{"headline":"Leonti"}"#), None);
    }

    #[test]
    fn empty_value_is_captured_as_empty() {
        assert_eq!(
            extract_restaurant_name(r#""alternativeHeadline":"""#).as_deref(),
            Some("")
        );
    }

    #[test]
    fn article_fixture() {
        let html = std::fs::read_to_string("tests/fixtures/leonti.html").unwrap();
        assert_eq!(extract_restaurant_name(&html).as_deref(), Some("Leonti"));
    }
}
