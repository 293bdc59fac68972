//! Append-only Markdown writer
//!
//! Each call emits exactly one semantic unit to the underlying sink. The
//! writer has no layout intelligence; callers decide what goes where.

use std::io::{self, Write};

/// Native line separator of the host platform
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// ATX heading level
///
/// Levels 5 and 6 are written with six and seven hash marks. Downstream
/// tooling reads the files with that mapping, so it is kept as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    fn marker(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "#",
            HeadingLevel::H2 => "##",
            HeadingLevel::H3 => "###",
            HeadingLevel::H4 => "####",
            HeadingLevel::H5 => "######",
            HeadingLevel::H6 => "#######",
        }
    }
}

/// Markdown document writer over any `Write` sink
pub struct MarkdownDocument<W: Write> {
    sink: W,
}

impl<W: Write> MarkdownDocument<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Write `text` followed by a line ending
    pub fn raw(&mut self, text: &str) -> io::Result<()> {
        write!(self.sink, "{}{}", text, LINE_ENDING)
    }

    pub fn blank_line(&mut self) -> io::Result<()> {
        self.raw("")
    }

    pub fn heading(&mut self, level: HeadingLevel, text: &str) -> io::Result<()> {
        self.raw(&format!("{} {}", level.marker(), text))
    }

    /// `- text`, indented by one tab per level
    pub fn unordered_item(&mut self, text: &str, indent: usize) -> io::Result<()> {
        self.raw(&format!("{}- {}", "\t".repeat(indent), text))
    }

    /// `1. text`, indented by one tab per level
    pub fn ordered_item(&mut self, text: &str, indent: usize) -> io::Result<()> {
        self.raw(&format!("{}1. {}", "\t".repeat(indent), text))
    }

    /// Header row followed by the dashed separator row
    pub fn table<S: AsRef<str>>(&mut self, headers: &[S]) -> io::Result<()> {
        self.table_row(headers)?;
        let separator = vec!["---"; headers.len()];
        self.table_row(&separator)
    }

    pub fn table_row<S: AsRef<str>>(&mut self, cells: &[S]) -> io::Result<()> {
        let row: Vec<&str> = cells.iter().map(AsRef::as_ref).collect();
        self.raw(&row.join(" | "))
    }

    pub fn code_block(&mut self, content: &str, language: Option<&str>) -> io::Result<()> {
        self.raw(&format!("```{}", language.unwrap_or("")))?;
        self.raw(content)?;
        self.raw("```")
    }

    /// Inline link `[text](target)` on its own line
    pub fn link(&mut self, text: &str, target: &str) -> io::Result<()> {
        self.raw(&inline_link(text, target))
    }

    /// Catalog bullet `* [text](target)`, as listed on the summary page
    pub fn catalog_entry(&mut self, text: &str, target: &str) -> io::Result<()> {
        self.raw(&format!("* {}", inline_link(text, target)))
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

fn inline_link(text: &str, target: &str) -> String {
    format!("[{}]({})", text, target.replace(' ', "%20"))
}
