//! Markdown rendering for post bodies and the admin live preview.

use pulldown_cmark::{html, Options, Parser};

/// Render markdown to HTML.
pub fn render(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(markdown, options);

    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let rendered = render("# Hello\n\nSome *emphasis* here.");
        assert!(rendered.contains("<h1>Hello</h1>"));
        assert!(rendered.contains("<em>emphasis</em>"));
    }

    #[test]
    fn test_render_image_embed() {
        let rendered = render("![alt](http://x/a.png)");
        assert!(rendered.contains(r#"src="http://x/a.png""#));
    }

    #[test]
    fn test_render_empty_input() {
        assert_eq!(render(""), "");
    }
}
