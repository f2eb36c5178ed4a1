//! Terminal rendering for bot replies.
//!
//! The crew server decorates its output for a web widget: `**bold**`
//! section headers and `[label](url)` links. This is the terminal
//! rendition of that dialect; everything else passes through untouched.

use regex::Regex;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Formats markdown-lite replies, with the patterns compiled once.
pub struct ReplyFormatter {
    bold: Regex,
    link: Regex,
}

impl ReplyFormatter {
    pub fn new() -> Self {
        Self {
            bold: Regex::new(r"\*\*(.*?)\*\*").unwrap(),
            link: Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap(),
        }
    }

    /// Format one reply for display.
    ///
    /// Links flatten to `label (url)` first, so a bold label still gets
    /// its ANSI span afterwards.
    pub fn format(&self, text: &str) -> String {
        let flattened = self.link.replace_all(text, "$1 ($2)");
        self.bold
            .replace_all(&flattened, "\x1b[1m$1\x1b[0m")
            .into_owned()
    }
}

impl Default for ReplyFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(text: &str) -> String {
        ReplyFormatter::new().format(text)
    }

    #[test]
    fn bold_becomes_an_ansi_span() {
        assert_eq!(
            fmt("**Project Plan**"),
            format!("{BOLD}Project Plan{RESET}")
        );
    }

    #[test]
    fn multiple_bold_spans_in_one_reply() {
        assert_eq!(
            fmt("**Components**: motors\n**Budget**: $200"),
            format!("{BOLD}Components{RESET}: motors\n{BOLD}Budget{RESET}: $200")
        );
    }

    #[test]
    fn unclosed_bold_passes_through() {
        assert_eq!(fmt("**unclosed header"), "**unclosed header");
    }

    #[test]
    fn links_flatten_to_label_and_url() {
        assert_eq!(
            fmt("[View your project folder](https://notion.example/p/123)"),
            "View your project folder (https://notion.example/p/123)"
        );
    }

    #[test]
    fn bold_link_label_keeps_its_span() {
        assert_eq!(
            fmt("[**Download**](https://example.com/kit)"),
            format!("{BOLD}Download{RESET} (https://example.com/kit)")
        );
    }

    #[test]
    fn plain_text_is_untouched() {
        let text = "1. Frame\n2. Motors (x4)\n3. Flight controller";
        assert_eq!(fmt(text), text);
    }
}
