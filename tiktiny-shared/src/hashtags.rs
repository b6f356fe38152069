//! Display-only hashtags for feed cards.

use once_cell::sync::Lazy;
use regex::Regex;

/// Tag appended to every video so each card has at least one clickable filter.
pub const BRAND_TAG: &str = "#TikTiny";

/// Maximum number of tags shown on a card.
pub const MAX_TAGS: usize = 5;

static TITLE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#[A-Za-z0-9_]+").expect("hashtag pattern is valid"));

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Derive the tags shown under a video.
///
/// Order is title tags, then the genre tag, then [`BRAND_TAG`]. Duplicates keep
/// their first position and the result never exceeds [`MAX_TAGS`] entries.
#[must_use]
pub fn extract_hashtags(title: &str, genre: Option<&str>) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    let mut push = |tag: String| {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    };

    for found in TITLE_TAG.find_iter(title) {
        push(found.as_str().to_string());
    }

    if let Some(genre) = genre.map(str::trim).filter(|genre| !genre.is_empty()) {
        push(format!("#{}", WHITESPACE.replace_all(genre, "")));
    }

    push(BRAND_TAG.to_string());

    tags.truncate(MAX_TAGS);
    tags
}

/// Search term produced by clicking a tag: the tag without its leading `#`.
#[must_use]
pub fn search_term_for_tag(tag: &str) -> &str {
    tag.strip_prefix('#').unwrap_or(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_tags_then_genre_then_brand() {
        let tags = extract_hashtags("Summer #a #b", Some("Comedy"));
        assert_eq!(tags, vec!["#a", "#b", "#Comedy", "#TikTiny"]);
    }

    #[test]
    fn brand_tag_in_title_is_not_duplicated() {
        let tags = extract_hashtags("#TikTiny rocks #fun", Some("Comedy"));
        assert_eq!(tags, vec!["#TikTiny", "#fun", "#Comedy"]);
    }

    #[test]
    fn repeated_title_tags_collapse() {
        let tags = extract_hashtags("#dance #dance #dance", None);
        assert_eq!(tags, vec!["#dance", "#TikTiny"]);
    }

    #[test]
    fn capped_at_five_tags() {
        let tags = extract_hashtags("#one #two #three #four #five #six", Some("Drama"));
        assert_eq!(tags.len(), MAX_TAGS);
        assert_eq!(tags, vec!["#one", "#two", "#three", "#four", "#five"]);
        assert!(!tags.contains(&BRAND_TAG.to_string()));
    }

    #[test]
    fn genre_whitespace_is_removed() {
        let tags = extract_hashtags("no tags here", Some("  Science  Fiction "));
        assert_eq!(tags, vec!["#ScienceFiction", "#TikTiny"]);
    }

    #[test]
    fn blank_genre_is_ignored() {
        assert_eq!(extract_hashtags("", Some("   ")), vec!["#TikTiny"]);
        assert_eq!(extract_hashtags("", None), vec!["#TikTiny"]);
    }

    #[test]
    fn genre_matching_title_tag_is_not_duplicated() {
        let tags = extract_hashtags("Best #Comedy ever", Some("Comedy"));
        assert_eq!(tags, vec!["#Comedy", "#TikTiny"]);
    }

    #[test]
    fn title_tags_stop_at_punctuation() {
        let tags = extract_hashtags("#rust-lang #wasm!", None);
        assert_eq!(tags, vec!["#rust", "#wasm", "#TikTiny"]);
    }

    #[test]
    fn lone_hash_is_not_a_tag() {
        assert_eq!(extract_hashtags("# alone", None), vec!["#TikTiny"]);
    }

    #[test]
    fn tag_click_strips_marker() {
        assert_eq!(search_term_for_tag("#Comedy"), "Comedy");
        assert_eq!(search_term_for_tag("plain"), "plain");
        assert_eq!(search_term_for_tag("##double"), "#double");
    }
}
