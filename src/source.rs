//! Position markers and the position-resolution boundary.
//!
//! The front-end parser stamps every native node with [`Pos`] markers; the
//! mapper never computes offsets itself, it resolves markers through a
//! [`SourceFile`] handle. Offsets are 1-based byte positions (the first byte
//! of the file is offset 1), matching the marker scheme of the native
//! front end.

use serde::{Deserialize, Serialize};

use crate::errors::MapError;

/// An opaque position marker inside one source file.
///
/// `Pos(0)` is the explicit "no position" marker; any other value is the
/// 1-based byte position it denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Pos(pub u32);

impl Pos {
    pub const NONE: Pos = Pos(0);

    pub fn is_none(&self) -> bool {
        self.0 == 0
    }
}

/// Resolution handle for one source file: validates markers and turns them
/// into absolute byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    name: String,
    size: usize,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, source: &str) -> Self {
        SourceFile {
            name: name.into(),
            size: source.len(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size of the source text in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Resolves a marker to its 1-based byte offset.
    ///
    /// A missing or out-of-range marker is a consistency problem between the
    /// native tree and its source file, reported distinctly from
    /// classification gaps. `construct` names the native variant whose
    /// marker is being resolved, for diagnostics.
    pub fn offset(&self, pos: Pos, construct: &'static str) -> Result<usize, MapError> {
        if pos.is_none() {
            return Err(MapError::MissingPosition { construct });
        }
        let offset = pos.0 as usize;
        if offset > self.size {
            return Err(MapError::PositionOutOfRange {
                pos: pos.0,
                file: self.name.clone(),
                size: self.size,
            });
        }
        Ok(offset)
    }
}
