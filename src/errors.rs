//! Mapping failure modes.
//!
//! Two distinct families, never conflated: a classification gap (a native
//! variant with no registered mapping rule) and a position-resolution
//! failure (a marker inconsistent with the source file). Under the strict
//! fallback policy either one fails the whole mapping; no partial trees are
//! returned.
//!
//! Errors carry labeled spans where derivable. The mapper borrows the native
//! tree and does not hold the source text, so reports render bare by
//! default; callers that hold the text can attach it:
//!
//! ```ignore
//! let report = miette::Report::new(err).with_source_code(source_text);
//! ```

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum MapError {
    /// A native variant reached dispatch without a registered rule.
    /// Propagated to the caller as-is; there is nothing to retry against
    /// since the input tree is fixed.
    #[error("no mapping rule for native node `{construct}`")]
    #[diagnostic(
        code(uast::unsupported_node),
        help("add a classification tag and a mapping rule for `{construct}`")
    )]
    UnsupportedNode {
        construct: &'static str,
        #[label("unsupported construct")]
        span: Option<SourceSpan>,
    },

    /// A position marker points outside its source file: the native tree and
    /// the file disagree, which is a front-end consistency problem rather
    /// than a missing mapping rule.
    #[error("position {pos} is out of range for `{file}` (valid range 1..={size})")]
    #[diagnostic(code(uast::position_out_of_range))]
    PositionOutOfRange { pos: u32, file: String, size: usize },

    /// A native node that must carry a position was stamped with the
    /// "no position" marker.
    #[error("native node `{construct}` carries no source position")]
    #[diagnostic(code(uast::missing_position))]
    MissingPosition { construct: &'static str },
}
