//! Row rendering delegates.
//!
//! The option list is polymorphic over how one option is turned into row
//! content. [`DefaultOptionDelegate`] shows the label with search matches
//! highlighted; hosts can supply their own [`OptionDelegate`] (any
//! `Fn(&DropdownOption) -> RowContent` closure works) to show extra details.
//!
//! # Example
//!
//! ```
//! use horizon_dropdown::{DropdownOption, RowContent, TextSpan};
//!
//! // Label followed by the value in a muted style.
//! let delegate = |option: &DropdownOption| {
//!     RowContent::new()
//!         .with_span(TextSpan::accent("●"))
//!         .with_span(TextSpan::plain(option.label.clone()))
//!         .with_span(TextSpan::muted(format!("({})", option.value)))
//! };
//! # let _ = delegate;
//! ```

use crate::filter::highlight_ranges;
use crate::option::DropdownOption;

/// Visual role of a run of text inside a row or chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpanStyle {
    /// Regular text.
    #[default]
    Normal,
    /// Text that matches the current search term.
    Match,
    /// De-emphasized text.
    Muted,
    /// Decorative accent (markers, swatches).
    Accent,
}

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    pub style: SpanStyle,
}

impl TextSpan {
    /// Create a span with an explicit style.
    pub fn new(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanStyle::Normal)
    }

    pub fn matched(text: impl Into<String>) -> Self {
        Self::new(text, SpanStyle::Match)
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self::new(text, SpanStyle::Muted)
    }

    pub fn accent(text: impl Into<String>) -> Self {
        Self::new(text, SpanStyle::Accent)
    }
}

/// The content of one option row, as a sequence of styled spans.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowContent {
    pub spans: Vec<TextSpan>,
}

impl RowContent {
    /// Create empty content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a span using builder pattern.
    pub fn with_span(mut self, span: TextSpan) -> Self {
        self.spans.push(span);
        self
    }

    /// All span text concatenated.
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    /// Text of the spans styled as search matches.
    pub fn matched_text(&self) -> Vec<&str> {
        self.spans
            .iter()
            .filter(|span| span.style == SpanStyle::Match)
            .map(|span| span.text.as_str())
            .collect()
    }
}

/// Trait for custom rendering of option rows.
///
/// Implement this to customize what each row of the option list shows.
pub trait OptionDelegate: Send + Sync {
    /// Produce the content for `option` while the user searches for `search_term`.
    fn row_content(&self, option: &DropdownOption, search_term: &str) -> RowContent;
}

/// Default delegate: the label, with search matches highlighted.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultOptionDelegate;

impl OptionDelegate for DefaultOptionDelegate {
    fn row_content(&self, option: &DropdownOption, search_term: &str) -> RowContent {
        highlight_label(&option.label, search_term)
    }
}

impl<F> OptionDelegate for F
where
    F: Fn(&DropdownOption) -> RowContent + Send + Sync,
{
    fn row_content(&self, option: &DropdownOption, _search_term: &str) -> RowContent {
        self(option)
    }
}

/// Split `label` into plain and matched spans for `term`.
pub fn highlight_label(label: &str, term: &str) -> RowContent {
    let mut content = RowContent::new();
    let mut cursor = 0;
    for range in highlight_ranges(label, term) {
        if range.start > cursor {
            content.spans.push(TextSpan::plain(&label[cursor..range.start]));
        }
        content.spans.push(TextSpan::matched(&label[range.clone()]));
        cursor = range.end;
    }
    if cursor < label.len() || content.spans.is_empty() {
        content.spans.push(TextSpan::plain(&label[cursor..]));
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_preserves_original_case() {
        let content = highlight_label("Option 1", "opt");
        assert_eq!(
            content.spans,
            vec![TextSpan::matched("Opt"), TextSpan::plain("ion 1")]
        );
        assert_eq!(content.text(), "Option 1");
    }

    #[test]
    fn test_highlight_without_term_is_single_plain_span() {
        let content = highlight_label("Vanilla", "");
        assert_eq!(content.spans, vec![TextSpan::plain("Vanilla")]);
    }

    #[test]
    fn test_highlight_multiple_matches() {
        let content = highlight_label("banana", "an");
        assert_eq!(content.matched_text(), vec!["an", "an"]);
        assert_eq!(content.text(), "banana");
    }

    #[test]
    fn test_empty_label_yields_one_span() {
        let content = highlight_label("", "x");
        assert_eq!(content.spans, vec![TextSpan::plain("")]);
    }

    #[test]
    fn test_closure_delegate_ignores_term() {
        let delegate = |option: &DropdownOption| {
            RowContent::new()
                .with_span(TextSpan::accent("●"))
                .with_span(TextSpan::plain(option.label.clone()))
                .with_span(TextSpan::muted(format!("({})", option.value)))
        };
        let content = delegate.row_content(&DropdownOption::new("1", "Option 1"), "opt");
        assert_eq!(content.text(), "●Option 1(1)");
        assert!(content.matched_text().is_empty());
    }
}
