//! Parsers for the site's hand-written content files.
//!
//! Research and talks use a block grammar where blocks are separated by a
//! line containing exactly `---`; the CV uses `## ` section headings with
//! blank-line-separated entries. Each parser maps its blocks onto the HTML
//! fragment its drawer section expects. These are thin glue around string
//! splitting; the interesting logic lives in the publication pipeline.

pub mod cv;
pub mod inline;
pub mod research;
pub mod talks;

/// Which content document a file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ContentKind {
    /// Research overview (`research.md`).
    Research,
    /// Talks and posters (`talks.md`).
    Talks,
    /// Curriculum vitae (`cv.md`).
    Cv,
}

impl ContentKind {
    /// Render a document of this kind to its HTML fragment.
    #[must_use]
    pub fn render(self, text: &str) -> String {
        match self {
            Self::Research => research::render(text),
            Self::Talks => talks::render(text),
            Self::Cv => cv::render(text),
        }
    }

    /// Section heading shown above the fragment.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Research => "Research",
            Self::Talks => "Talks & Posters",
            Self::Cv => "CV",
        }
    }

    /// Conventional file name for this document.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Research => "research.md",
            Self::Talks => "talks.md",
            Self::Cv => "cv.md",
        }
    }
}

/// Split a document into blocks on `---` separator lines.
#[must_use]
pub fn split_blocks(text: &str) -> Vec<&str> {
    text.trim().split("\n---\n").collect()
}
