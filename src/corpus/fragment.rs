//! Lazily-parsed vector fragments

use crate::io::error::Result;
use crate::svg::node::Node;
use crate::svg::parse::load_document;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

/// A vector fragment backing a radical or character
///
/// The document is parsed from storage on first access and cached for the
/// lifetime of the process. The cached tree is a read-only template: callers
/// needing per-generation mutations must clone it first.
#[derive(Debug)]
pub struct Fragment {
    glyph: Option<char>,
    path: PathBuf,
    // Once-only guard so concurrent batch generation parses at most once
    root: OnceCell<Node>,
}

impl Fragment {
    /// Declare a fragment stored at `path`, without touching the file
    pub fn new(glyph: Option<char>, path: impl Into<PathBuf>) -> Self {
        Self {
            glyph,
            path: path.into(),
            root: OnceCell::new(),
        }
    }

    /// Wrap an already-parsed tree, bypassing storage entirely
    ///
    /// Useful for fixtures and benchmarks that build trees in memory.
    pub fn preparsed(glyph: Option<char>, root: Node) -> Self {
        Self {
            glyph,
            path: PathBuf::new(),
            root: OnceCell::with_value(root),
        }
    }

    /// The single logical character this fragment renders, if any
    pub const fn glyph(&self) -> Option<char> {
        self.glyph
    }

    /// Storage path the fragment was declared with
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The fragment's root element, parsing the backing file on first access
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a well-formed
    /// SVG document. A failed parse is not cached; the next access retries.
    pub fn node(&self) -> Result<&Node> {
        self.root.get_or_try_init(|| load_document(&self.path))
    }
}
