//! Trailing-anchor cleanup for embedding page URLs.

/// Strips the trailing `#fragment` from `origin` unless the fragment is a `#/` route.
///
/// The cut happens at the last `#` not immediately followed by `/`, so hash-routed pages keep
/// their route while plain scroll anchors are dropped. Input without such a `#` is returned as-is.
pub fn clean_anchor(origin: &str) -> &str {
    let bytes = origin.as_bytes();
    let cut = bytes
        .iter()
        .enumerate()
        .rev()
        .find(|&(index, &byte)| byte == b'#' && bytes.get(index + 1) != Some(&b'/'))
        .map(|(index, _)| index);
    match cut {
        Some(index) => &origin[..index],
        None => origin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_anchor_is_removed() {
        assert_eq!(clean_anchor("https://a.com/page#section"), "https://a.com/page");
    }

    #[test]
    fn route_anchor_is_kept() {
        assert_eq!(
            clean_anchor("https://a.com/page#/route"),
            "https://a.com/page#/route"
        );
    }

    #[test]
    fn url_without_anchor_is_unchanged() {
        assert_eq!(clean_anchor("https://a.com/page"), "https://a.com/page");
        assert_eq!(clean_anchor(""), "");
    }

    #[test]
    fn bare_trailing_hash_is_removed() {
        assert_eq!(clean_anchor("https://a.com/page#"), "https://a.com/page");
    }

    #[test]
    fn only_the_last_plain_anchor_is_cut() {
        assert_eq!(
            clean_anchor("https://a.com/#/route#section"),
            "https://a.com/#/route"
        );
        assert_eq!(clean_anchor("https://a.com/#a#b"), "https://a.com/#a");
    }

    #[test]
    fn route_after_plain_anchor_cuts_at_the_plain_one() {
        assert_eq!(clean_anchor("https://a.com/p#x#/y"), "https://a.com/p");
    }

    #[test]
    fn non_ascii_prefix_is_preserved() {
        assert_eq!(clean_anchor("https://a.com/文章#注释"), "https://a.com/文章");
    }
}
