//! Pure feed derivation: everything the home view needs computed from a
//! list of posts. No side effects, safe to re-run on every request.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::post::Post;

const WORDS_PER_MINUTE: u64 = 200;

lazy_static! {
    static ref IMAGE_EMBED: Regex = Regex::new(r"!\[.*?\]\((.*?)\)").unwrap();
}

/// Union of every post's tag list, duplicates collapsed, first-seen
/// order (stable across calls with the same input).
pub fn collect_tags(posts: &[Post]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for post in posts {
        for tag in &post.tags {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}

/// A post passes when no tag is selected or the selected tag is one of
/// its tags, and the query is empty or its title contains the query
/// case-insensitively. Input order is preserved; sorting is owned by
/// the repository query upstream.
pub fn filter_posts<'a>(
    posts: &'a [Post],
    active_tag: Option<&str>,
    search_query: &str,
) -> Vec<&'a Post> {
    let query = search_query.to_lowercase();
    posts
        .iter()
        .filter(|post| {
            let matches_tag = match active_tag {
                Some(tag) => post.tags.iter().any(|t| t == tag),
                None => true,
            };
            let matches_search =
                query.is_empty() || post.title.to_lowercase().contains(&query);
            matches_tag && matches_search
        })
        .collect()
}

/// Whitespace-token count at 200 words per minute, rounded up, floored
/// at one minute. An empty or whitespace-only body counts as zero
/// words, so the floor is what yields the 1.
pub fn estimate_reading_time(body: &str) -> u64 {
    let words = body.split_whitespace().count() as u64;
    ((words + WORDS_PER_MINUTE - 1) / WORDS_PER_MINUTE).max(1)
}

/// URL of the first `![alt](url)` image embed, if any. A regex is
/// enough here: only the first reference matters, not the document
/// structure.
pub fn extract_thumbnail(body: &str) -> Option<String> {
    IMAGE_EMBED
        .captures(body)
        .map(|captures| captures[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, tags: &[&str]) -> Post {
        Post {
            id: 0,
            title: title.to_string(),
            content: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            created_at: time::OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_collect_tags_collapses_duplicates() {
        let posts = vec![post("a", &["a", "b"]), post("b", &["b"]), post("c", &[])];
        assert_eq!(collect_tags(&posts), vec!["a", "b"]);

        let reversed: Vec<Post> = posts.into_iter().rev().collect();
        let mut tags = collect_tags(&reversed);
        tags.sort();
        assert_eq!(tags, vec!["a", "b"]);
    }

    #[test]
    fn test_collect_tags_is_stable() {
        let posts = vec![post("a", &["rust", "web"]), post("b", &["rust"])];
        assert_eq!(collect_tags(&posts), collect_tags(&posts));
    }

    #[test]
    fn test_filter_posts_by_tag() {
        let posts = vec![post("Intro to Go", &["go"]), post("Rust Basics", &["rust"])];
        let matches = filter_posts(&posts, Some("go"), "");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title, "Intro to Go");
    }

    #[test]
    fn test_filter_posts_by_search_case_insensitive() {
        let posts = vec![post("Intro to Go", &["go"]), post("Rust Basics", &["rust"])];
        let matches = filter_posts(&posts, None, "rust");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title, "Rust Basics");
    }

    #[test]
    fn test_filter_posts_unknown_tag_matches_nothing() {
        let posts = vec![post("Intro to Go", &["go"]), post("Rust Basics", &["rust"])];
        assert!(filter_posts(&posts, Some("zig"), "").is_empty());
    }

    #[test]
    fn test_filter_posts_preserves_input_order() {
        let posts = vec![
            post("Rust Basics", &["rust"]),
            post("Advanced Rust", &["rust"]),
        ];
        let matches = filter_posts(&posts, Some("rust"), "rust");
        let titles: Vec<&str> = matches.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Rust Basics", "Advanced Rust"]);
    }

    #[test]
    fn test_reading_time_rounds_up_and_floors_at_one() {
        let words = |n: usize| vec!["word"; n].join(" ");
        assert_eq!(estimate_reading_time(&words(400)), 2);
        assert_eq!(estimate_reading_time(&words(201)), 2);
        assert_eq!(estimate_reading_time(&words(200)), 1);
        assert_eq!(estimate_reading_time(&words(50)), 1);
    }

    #[test]
    fn test_reading_time_empty_body_is_one_minute() {
        assert_eq!(estimate_reading_time(""), 1);
        assert_eq!(estimate_reading_time("   \n\t "), 1);
    }

    #[test]
    fn test_thumbnail_takes_first_image() {
        let body = "intro ![alt](http://x/a.png) more ![alt2](http://x/b.png)";
        assert_eq!(
            extract_thumbnail(body),
            Some("http://x/a.png".to_string())
        );
    }

    #[test]
    fn test_thumbnail_absent() {
        assert_eq!(extract_thumbnail("no images [link](http://x) here"), None);
    }
}
