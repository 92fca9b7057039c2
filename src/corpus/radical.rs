//! Radical definitions: reusable two-slot layout templates

use crate::corpus::fragment::Fragment;

/// One of the two positions in an output composition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Slot 0
    First,
    /// Slot 1
    Second,
}

impl Slot {
    /// Both slots in output order
    pub const BOTH: [Self; 2] = [Self::First, Self::Second];

    /// Index into per-slot range arrays
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    /// Convert a raw data-file index, rejecting anything outside {0, 1}
    pub const fn from_index(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::First),
            1 => Some(Self::Second),
            _ => None,
        }
    }
}

/// A named, reusable layout template
///
/// The radical's own fragment occupies `slot`; the paired character fills
/// the other slot at generation time. Each geometry range holds one value
/// per slot; equal endpoints mean the radical does not stretch in that
/// dimension. Immutable after configuration load.
#[derive(Debug)]
pub struct RadicalDefinition {
    /// Unique lookup name, if authored
    pub name: Option<String>,
    /// Backing fragment
    pub fragment: Fragment,
    /// Which slot the radical's own fragment occupies
    pub slot: Slot,
    /// Whether the preprocessing stage copies this fragment verbatim
    /// (consumed only by that stage; carried here because the data file
    /// declares it per radical)
    pub copy: bool,
    /// Per-slot x positions
    pub x: [f64; 2],
    /// Per-slot y positions
    pub y: [f64; 2],
    /// Per-slot widths
    pub width: [f64; 2],
    /// Per-slot heights
    pub height: [f64; 2],
    /// Per-slot stroke-width multipliers (never exactly 0)
    pub stroke_multiplier: [f64; 2],
    /// Whether the complexity-weighting heuristic adjusts this radical
    pub apply_weighting: bool,
    /// Coordinate space of the radical's own slot
    pub viewbox: String,
}

impl RadicalDefinition {
    /// The glyph identity of the backing fragment, if any
    pub const fn glyph(&self) -> Option<char> {
        self.fragment.glyph()
    }
}
