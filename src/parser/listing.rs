use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

static ARTICLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/magazine/[0-9]{4}/[0-9]{2}/[0-9]{2}/[a-zA-Z0-9-]+").unwrap());

/// Collect every `/magazine/YYYY/MM/DD/slug` path in the listing markup.
///
/// The result is deduplicated and sorted lexicographically so that picking
/// the first element is reproducible across runs. Paths are not checked for
/// existence.
pub fn extract_article_references(markup: &str) -> Vec<String> {
    ARTICLE_RE
        .find_iter(markup)
        .map(|m| m.as_str().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedups_and_sorts() {
        let html = r#"
            <a href="/magazine/2019/01/28/uptown-glamour-and-tortellini-pie-at-leonti">x</a>
            <a href="/magazine/2018/12/24/a-chefs-mini-empire-in-the-evelyn-hotel">y</a>
            <a href="/magazine/2019/01/28/uptown-glamour-and-tortellini-pie-at-leonti">z</a>
        "#;
        assert_eq!(
            extract_article_references(html),
            vec![
                "/magazine/2018/12/24/a-chefs-mini-empire-in-the-evelyn-hotel",
                "/magazine/2019/01/28/uptown-glamour-and-tortellini-pie-at-leonti",
            ]
        );
    }

    #[test]
    fn ignores_non_article_paths() {
        let html = r#"<a href="/magazine/tables-for-two">TFT</a><a href="/magazine/2019/1/2/bad">"#;
        assert!(extract_article_references(html).is_empty());
    }

    #[test]
    fn ascii_only() {
        let html = "/magazine/\u{0662}\u{0660}\u{0661}\u{0669}/01/28/leonti \
                    /magazine/2019/01/28/\u{212A}atz";
        assert!(extract_article_references(html).is_empty());
    }

    #[test]
    fn keeps_mixed_case_slug() {
        let html = r#"<a href="/magazine/2019/01/28/Leonti-NYC">"#;
        assert_eq!(
            extract_article_references(html),
            vec!["/magazine/2019/01/28/Leonti-NYC"]
        );
    }

    #[test]
    fn stops_slug_at_query_string() {
        let html = r#"href="https://www.newyorker.com/magazine/2019/02/04/momofuku-ko?utm=1""#;
        assert_eq!(
            extract_article_references(html),
            vec!["/magazine/2019/02/04/momofuku-ko"]
        );
    }

    #[test]
    fn listing_fixture() {
        let html = std::fs::read_to_string("tests/fixtures/tables-for-two.html").unwrap();
        let refs = extract_article_references(&html);
        assert_eq!(refs.len(), 3);
        assert_eq!(
            refs[0],
            "/magazine/2019/01/28/uptown-glamour-and-tortellini-pie-at-leonti"
        );
    }
}
