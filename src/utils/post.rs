use tracing::warn;

use super::app_error::AppError;

/// Split a comma-separated tag string into trimmed, non-empty tags,
/// original order preserved.
pub fn parse_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Every displayed post has a non-empty title and body.
pub fn check_post_data(title: &str, content: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        warn!("Rejected post with an empty title");
        return Err(AppError::forbidden_error(Some(
            "A post needs a title.",
        )));
    }

    if content.trim().is_empty() {
        warn!("Rejected post `{title}` with an empty body");
        return Err(AppError::forbidden_error(Some(
            "A post needs some content.",
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags_trims_and_drops_empty_entries() {
        assert_eq!(parse_tags("  go, rust ,, web  "), vec!["go", "rust", "web"]);
    }

    #[test]
    fn test_parse_tags_empty_input() {
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,").is_empty());
    }

    #[test]
    fn test_check_post_data() {
        assert!(check_post_data("Title", "Content").is_ok());
        assert!(check_post_data("", "Content").is_err());
        assert!(check_post_data("Title", "   ").is_err());
    }
}
