use pulldown_cmark::{html, Options, Parser};

/// Renders a markdown string to an HTML fragment for `inner_html` display.
pub fn to_html(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(text, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_emphasis() {
        assert!(to_html("**hi**").contains("<strong>hi</strong>"));
    }

    #[test]
    fn renders_bullet_list() {
        let out = to_html("- A\n- B");
        assert!(out.contains("<ul>"));
        assert!(out.contains("<li>A</li>"));
        assert!(out.contains("<li>B</li>"));
    }

    #[test]
    fn renders_topic_heading_and_body() {
        let out = to_html("### Funding\nSeries B closed.");
        assert!(out.contains("<h3>Funding</h3>"));
        assert!(out.contains("Series B closed."));
    }

    #[test]
    fn renders_image_syntax() {
        let out = to_html("![chart](https://example.com/a.png)");
        assert!(out.contains(r#"<img src="https://example.com/a.png" alt="chart""#));
    }

    #[test]
    fn escapes_raw_text() {
        assert!(to_html("a < b").contains("a &lt; b"));
    }
}
