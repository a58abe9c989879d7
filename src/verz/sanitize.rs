//! Query sanitization.
//!
//! The browser version of this tool escaped user input through a DOM text
//! node before comparing or echoing it, so a query containing markup could
//! never be interpreted as markup in the status line. The same escaping is
//! kept here so search semantics stay identical: `&`, `<` and `>` become
//! their entity forms before comparison.

/// Escapes markup-significant characters the way a DOM text node would.
pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(sanitize("Alpha Beta"), "Alpha Beta");
    }

    #[test]
    fn markup_characters_are_escaped() {
        assert_eq!(sanitize("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
    }

    #[test]
    fn ampersand_is_escaped_first_pass_only() {
        // No double escaping: the input is walked once.
        assert_eq!(sanitize("&lt;"), "&amp;lt;");
    }
}
