//! Integration tests for the clipboard module.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chromatext::clipboard::copy::Copy;
use chromatext::clipboard::tool::{CopyTool, CopyToolError};
use chromatext::clipboard::{ClipboardError, CopyMethod, CopyResult};
use chromatext::document::Selection;
use chromatext::{EncodeOptions, Editor, StyleCode};

// =============================================================================
// Mock tool
// =============================================================================

struct MockTool {
    method: CopyMethod,
    available: bool,
    outcome: Result<(), CopyToolError>,
    calls: Arc<AtomicUsize>,
    received: Arc<Mutex<Option<String>>>,
}

impl MockTool {
    fn new(method: CopyMethod, available: bool, outcome: Result<(), CopyToolError>) -> Self {
        Self {
            method,
            available,
            outcome,
            calls: Arc::new(AtomicUsize::new(0)),
            received: Arc::new(Mutex::new(None)),
        }
    }

    fn succeeding(method: CopyMethod) -> Self {
        Self::new(method, true, Ok(()))
    }

    fn failing(method: CopyMethod) -> Self {
        Self::new(method, true, Err(CopyToolError::Failed("boom".to_string())))
    }

    fn unavailable(method: CopyMethod) -> Self {
        Self::new(method, false, Ok(()))
    }
}

impl CopyTool for MockTool {
    fn method(&self) -> CopyMethod {
        self.method
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.received.lock().unwrap() = Some(text.to_string());
        self.outcome.clone()
    }
}

// =============================================================================
// Result types
// =============================================================================

#[test]
fn copy_method_name_returns_correct_strings() {
    assert_eq!(CopyMethod::Pbcopy.name(), "pbcopy");
    assert_eq!(CopyMethod::Xclip.name(), "xclip");
    assert_eq!(CopyMethod::Xsel.name(), "xsel");
    assert_eq!(CopyMethod::WlCopy.name(), "wl-copy");
}

#[test]
fn copy_result_message_names_tool_and_size() {
    let result = CopyResult::new(CopyMethod::Xclip, 42);
    assert_eq!(
        result.message("ansi block"),
        "Copied ansi block to clipboard (42 bytes via xclip)"
    );
}

// =============================================================================
// Orchestrator
// =============================================================================

#[test]
fn first_working_tool_wins() {
    let first = MockTool::succeeding(CopyMethod::WlCopy);
    let second = MockTool::succeeding(CopyMethod::Xclip);
    let second_calls = second.calls.clone();

    let copy = Copy::with_tools(vec![Box::new(first), Box::new(second)]);
    let result = copy.text("hello").unwrap();

    assert_eq!(result, CopyResult::new(CopyMethod::WlCopy, 5));
    assert_eq!(second_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn unavailable_tools_are_skipped_without_calling() {
    let missing = MockTool::unavailable(CopyMethod::WlCopy);
    let missing_calls = missing.calls.clone();
    let working = MockTool::succeeding(CopyMethod::Xsel);

    let copy = Copy::with_tools(vec![Box::new(missing), Box::new(working)]);
    let result = copy.text("x").unwrap();

    assert_eq!(result.tool, CopyMethod::Xsel);
    assert_eq!(missing_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn failing_tool_falls_through_to_next() {
    let broken = MockTool::failing(CopyMethod::Xclip);
    let broken_calls = broken.calls.clone();
    let working = MockTool::succeeding(CopyMethod::Xsel);

    let copy = Copy::with_tools(vec![Box::new(broken), Box::new(working)]);
    assert_eq!(copy.text("x").unwrap().tool, CopyMethod::Xsel);
    assert_eq!(broken_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn all_tools_failing_is_no_tool_available() {
    let copy = Copy::with_tools(vec![
        Box::new(MockTool::failing(CopyMethod::Xclip)),
        Box::new(MockTool::new(
            CopyMethod::Xsel,
            true,
            Err(CopyToolError::NotFound),
        )),
    ]);
    assert!(matches!(copy.text("x"), Err(ClipboardError::NoToolAvailable)));
}

#[test]
fn no_tools_is_unsupported_platform() {
    let copy = Copy::with_tools(Vec::new());
    assert!(matches!(
        copy.text("x"),
        Err(ClipboardError::UnsupportedPlatform)
    ));
}

#[test]
fn oversized_text_is_rejected_before_any_tool_runs() {
    let tool = MockTool::succeeding(CopyMethod::Pbcopy);
    let calls = tool.calls.clone();
    let copy = Copy::with_tools(vec![Box::new(tool)]).max_size(1024);

    let err = copy.text(&"x".repeat(1025)).unwrap_err();
    assert!(matches!(
        err,
        ClipboardError::ContentTooLarge {
            size_kb: 2,
            max_kb: 1
        }
    ));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

// =============================================================================
// Editor export
// =============================================================================

#[test]
fn editor_copies_exactly_the_exported_block() {
    let tool = MockTool::succeeding(CopyMethod::Xclip);
    let received = tool.received.clone();
    let copy = Copy::with_tools(vec![Box::new(tool)]);

    let mut editor = Editor::new("Hello");
    editor.apply(Selection::new(0, 5), StyleCode::FgRed);
    let options = EncodeOptions::default();
    editor.copy_to(&copy, &options).unwrap();

    assert_eq!(
        received.lock().unwrap().as_deref(),
        Some(editor.export(&options).as_str())
    );
}

#[test]
fn failed_copy_leaves_document_untouched() {
    let copy = Copy::with_tools(vec![Box::new(MockTool::failing(CopyMethod::Xclip))]);

    let mut editor = Editor::new("Hello");
    editor.apply(Selection::new(0, 2), StyleCode::Bold);
    let before = editor.document().clone();

    assert!(editor.copy_to(&copy, &EncodeOptions::default()).is_err());
    assert_eq!(editor.document(), &before);
}
