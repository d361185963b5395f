//! Nested style scopes and their flattening into runs.

use crate::style::{StyleCode, StyleState};

use super::{Document, Segment, TextRun};

/// A child of a [`StyleScope`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeNode {
    Text(String),
    LineBreak,
    Scope(StyleScope),
}

/// A tree of nested style applications.
///
/// Each scope applies its codes on top of the state inherited from its
/// parent, so an inner foreground replaces an outer one while bold and
/// underline accumulate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleScope {
    codes: Vec<StyleCode>,
    children: Vec<ScopeNode>,
}

impl StyleScope {
    /// A scope that adds no style of its own.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn new(code: StyleCode) -> Self {
        Self::with_codes([code])
    }

    pub fn with_codes<I: IntoIterator<Item = StyleCode>>(codes: I) -> Self {
        Self {
            codes: codes.into_iter().collect(),
            children: Vec::new(),
        }
    }

    pub fn codes(&self) -> &[StyleCode] {
        &self.codes
    }

    pub fn children(&self) -> &[ScopeNode] {
        &self.children
    }

    pub fn push(&mut self, node: ScopeNode) {
        self.children.push(node);
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.push(ScopeNode::Text(text.into()));
        self
    }

    pub fn line_break(mut self) -> Self {
        self.push(ScopeNode::LineBreak);
        self
    }

    pub fn child(mut self, scope: StyleScope) -> Self {
        self.push(ScopeNode::Scope(scope));
        self
    }

    fn state_over(&self, parent: StyleState) -> StyleState {
        self.codes
            .iter()
            .fold(parent, |state, code| state.with(*code))
    }

    /// Flatten the tree into non-overlapping runs.
    ///
    /// Walks the tree depth-first keeping a stack of inherited states;
    /// leaving a scope restores its parent's state for the siblings that
    /// follow. Empty text nodes produce no run.
    pub fn flatten(&self) -> Document {
        let mut segments = Vec::new();
        let mut stack = vec![(
            self.children.iter(),
            self.state_over(StyleState::default()),
        )];

        while let Some((children, state)) = stack.last_mut() {
            let state = *state;
            let Some(node) = children.next() else {
                stack.pop();
                continue;
            };

            match node {
                ScopeNode::Text(text) if text.is_empty() => {}
                ScopeNode::Text(text) => {
                    segments.push(Segment::Run(TextRun::new(text.clone(), state)));
                }
                ScopeNode::LineBreak => segments.push(Segment::LineBreak),
                ScopeNode::Scope(scope) => {
                    stack.push((scope.children.iter(), scope.state_over(state)));
                }
            }
        }

        Document::from_segments(segments)
    }
}
