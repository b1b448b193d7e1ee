//! Jupyter notebook text extraction
//!
//! Notebooks are JSON; embedding the raw JSON mostly embeds output blobs and
//! execution metadata. Only the sources of code and markdown cells are kept.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Notebook {
    #[serde(default)]
    cells: Vec<Cell>,
}

#[derive(Debug, Deserialize)]
struct Cell {
    cell_type: String,
    #[serde(default)]
    source: CellSource,
}

/// `source` is either one string or a list of lines
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CellSource {
    Text(String),
    Lines(Vec<String>),
}

impl Default for CellSource {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl CellSource {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Lines(lines) => lines.concat(),
        }
    }
}

/// Extract code and markdown cell sources, separated by blank lines
///
/// Returns `None` when `raw` is not a notebook, so the caller can keep the
/// raw text instead.
///
/// ```rust
/// use repochat_providers::github::notebook::extract_notebook_text;
///
/// let raw = r##"{"cells": [{"cell_type": "markdown", "source": ["# Title"]},
///                          {"cell_type": "code", "source": "print(1)"}]}"##;
/// assert_eq!(extract_notebook_text(raw).as_deref(), Some("# Title\n\nprint(1)"));
/// ```
pub fn extract_notebook_text(raw: &str) -> Option<String> {
    let notebook: Notebook = serde_json::from_str(raw).ok()?;
    let sections: Vec<String> = notebook
        .cells
        .into_iter()
        .filter(|cell| matches!(cell.cell_type.as_str(), "code" | "markdown"))
        .map(|cell| cell.source.into_text().trim_end().to_string())
        .filter(|text| !text.trim().is_empty())
        .collect();
    Some(sections.join("\n\n"))
}
