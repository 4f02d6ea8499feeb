//! The canonical UAST node and its terminal token payload.
//!
//! Pure data: construction is the sole mutation point, and a node is
//! read-only once its mapping rule returns it. The caller exclusively owns
//! the mapped tree.

use serde::{Deserialize, Serialize};

use crate::kind::Kind;

/// A terminal lexical unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UastToken {
    /// 1-based byte position of the token's first character in the source
    /// file, resolved through [`crate::source::SourceFile`].
    pub offset: usize,
    /// The literal source text, verbatim. A string literal keeps its quotes
    /// and escape sequences exactly as written.
    pub value: String,
}

/// The canonical UAST unit.
///
/// Invariants upheld by construction:
/// - `kinds` is non-empty, primary kind first, no duplicate tags;
/// - `native_node` is non-empty for every node a mapping rule produces;
/// - a token and non-empty children are mutually exclusive, except on the
///   compilation-unit root, which carries its identity token alongside the
///   declaration list (see [`UastNode::anchored`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UastNode {
    pub kinds: Vec<Kind>,
    /// Provenance label: the concrete native syntax-node variant this node
    /// was derived from. Diagnostics only, never part of the semantic
    /// contract.
    pub native_node: String,
    pub token: Option<UastToken>,
    pub children: Vec<UastNode>,
}

impl UastNode {
    /// A leaf node: carries a token, no children.
    pub fn leaf(kind: Kind, native_node: impl Into<String>, token: UastToken) -> Self {
        UastNode {
            kinds: vec![kind],
            native_node: native_node.into(),
            token: Some(token),
            children: Vec::new(),
        }
    }

    /// A composite node: carries children, no token.
    pub fn composite(kind: Kind, native_node: impl Into<String>, children: Vec<UastNode>) -> Self {
        UastNode {
            kinds: vec![kind],
            native_node: native_node.into(),
            token: None,
            children,
        }
    }

    /// A composite that also carries an anchoring identity token. Only the
    /// compilation unit takes this shape: its token anchors the unit's
    /// primary name while the declaration list hangs below it.
    pub fn anchored(
        kind: Kind,
        native_node: impl Into<String>,
        token: UastToken,
        children: Vec<UastNode>,
    ) -> Self {
        UastNode {
            kinds: vec![kind],
            native_node: native_node.into(),
            token: Some(token),
            children,
        }
    }

    /// Appends a secondary role tag, keeping the primary kind first.
    /// No-op if the tag is already present.
    pub fn with_kind(mut self, kind: Kind) -> Self {
        if !self.kinds.contains(&kind) {
            self.kinds.push(kind);
        }
        self
    }

    /// True when this node carries any of the given tags.
    pub fn is(&self, kinds: &[Kind]) -> bool {
        kinds.iter().any(|k| self.kinds.contains(k))
    }

    /// First direct child carrying the given tag.
    pub fn child_of_kind(&self, kind: Kind) -> Option<&UastNode> {
        self.children.iter().find(|c| c.kinds.contains(&kind))
    }

    /// All direct children carrying any of the given tags, in order.
    pub fn children_of_kind(&self, kinds: &[Kind]) -> Vec<&UastNode> {
        self.children.iter().filter(|c| c.is(kinds)).collect()
    }

    /// Visits every descendant (including `self`) carrying the given tag,
    /// depth-first in source order.
    pub fn descendants<F: FnMut(&UastNode)>(&self, kind: Kind, f: &mut F) {
        if self.kinds.contains(&kind) {
            f(self);
        }
        for child in &self.children {
            child.descendants(kind, f);
        }
    }

    /// First token of the subtree in source order.
    pub fn first_token(&self) -> Option<&UastToken> {
        if let Some(token) = &self.token {
            return Some(token);
        }
        self.children.iter().find_map(|c| c.first_token())
    }

    /// Last token of the subtree in source order.
    pub fn last_token(&self) -> Option<&UastToken> {
        if let Some(token) = self.children.iter().rev().find_map(|c| c.last_token()) {
            return Some(token);
        }
        self.token.as_ref()
    }

    /// Every token of the subtree, in source order.
    pub fn tokens(&self) -> Vec<&UastToken> {
        let mut out = Vec::new();
        self.collect_tokens(&mut out);
        out
    }

    fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a UastToken>) {
        if let Some(token) = &self.token {
            out.push(token);
        }
        for child in &self.children {
            child.collect_tokens(out);
        }
    }
}
