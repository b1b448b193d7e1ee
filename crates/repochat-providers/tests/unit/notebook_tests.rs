//! Tests for notebook text extraction

use repochat_providers::github::notebook::extract_notebook_text;

#[test]
fn test_non_notebook_returns_none() {
    assert_eq!(extract_notebook_text("print('not json')"), None);
}

#[test]
fn test_string_and_list_sources() {
    let raw = r#"{"cells": [
        {"cell_type": "code", "source": "x = 1\n"},
        {"cell_type": "code", "source": ["y = 2\n", "z = 3"]}
    ]}"#;
    assert_eq!(
        extract_notebook_text(raw).as_deref(),
        Some("x = 1\n\ny = 2\nz = 3")
    );
}

#[test]
fn test_empty_cells_are_dropped() {
    let raw = r#"{"cells": [
        {"cell_type": "markdown", "source": []},
        {"cell_type": "code", "source": "  "},
        {"cell_type": "markdown", "source": "kept"}
    ]}"#;
    assert_eq!(extract_notebook_text(raw).as_deref(), Some("kept"));
}
