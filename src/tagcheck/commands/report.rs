use crate::model::TagId;
use crate::table::TagTable;
use console::Style;
use dicom_core::dictionary::{DataDictionary, DataDictionaryEntry};
use dicom_dictionary_std::StandardDataDictionary;
use std::io::{self, Write};

pub const BANNER: &str = "All values";
pub const VALUE_PREFIX: &str = " = ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportStyle {
    /// Bare text, for files and pipes.
    #[default]
    Plain,
    /// Bold tag lines and dimmed prefixes, for an interactive terminal.
    Styled,
}

/// Renders a tag as `(GGGG,EEEE) Keyword`, or just the canonical form when
/// the standard dictionary does not know it.
pub fn tag_label(tag: TagId) -> String {
    match StandardDataDictionary.by_tag(tag.into()) {
        Some(entry) => format!("{} {}", tag, entry.alias()),
        None => tag.to_string(),
    }
}

/// Writes the whole report: a banner, then one block per tag in table order,
/// each value on its own line, blocks separated by a blank line.
pub fn write_report<W: Write>(table: &TagTable, out: &mut W, style: ReportStyle) -> io::Result<()> {
    let (banner, heading, prefix) = match style {
        ReportStyle::Plain => (Style::new(), Style::new(), Style::new()),
        ReportStyle::Styled => (
            Style::new().bold().underlined(),
            Style::new().bold().cyan(),
            Style::new().dim(),
        ),
    };
    let paint = |s: &Style, text: &str| -> String {
        match style {
            ReportStyle::Plain => text.to_string(),
            ReportStyle::Styled => s.apply_to(text).to_string(),
        }
    };

    writeln!(out, "{}", paint(&banner, BANNER))?;
    for (tag, values) in table.iter() {
        writeln!(out, "{}", paint(&heading, &tag_label(tag)))?;
        for value in values {
            writeln!(out, "{}{}", paint(&prefix, VALUE_PREFIX), value)?;
        }
        writeln!(out)?;
    }
    out.flush()
}
