//! Inline markdown formatting shared by all content parsers.

use std::sync::LazyLock;

use regex::Regex;

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link pattern"));

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid bold pattern"));

static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.+?)\*").expect("valid italic pattern"));

/// Process inline markdown:
///   `[text](url)` -> hyperlink, `**text**` -> bold, `*text*` -> italic.
///
/// Order matters: links first so URLs containing asterisks survive, bold
/// before italic so `**` pairs are not consumed as two italics.
#[must_use]
pub fn format_inline(text: &str) -> String {
    let text = LINK.replace_all(text, "<a href=\"$2\" target=\"_blank\" rel=\"noopener\">$1</a>");
    let text = BOLD.replace_all(&text, "<strong>$1</strong>");
    ITALIC.replace_all(&text, "<em>$1</em>").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link() {
        assert_eq!(
            format_inline("see [the lab](https://example.org) for details"),
            "see <a href=\"https://example.org\" target=\"_blank\" rel=\"noopener\">the lab</a> for details"
        );
    }

    #[test]
    fn test_bold_and_italic() {
        assert_eq!(format_inline("**bold** and *italic*"), "<strong>bold</strong> and <em>italic</em>");
    }

    #[test]
    fn test_species_name_italics() {
        assert_eq!(
            format_inline("male *Drosophila melanogaster* flies"),
            "male <em>Drosophila melanogaster</em> flies"
        );
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(format_inline("no markup here"), "no markup here");
    }
}
