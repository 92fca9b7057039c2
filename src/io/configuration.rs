//! Engine constants and runtime configuration defaults

// Canvas geometry shared by every KanjiVG-derived fragment
/// Default output image width in user units
pub const DEFAULT_WIDTH: u32 = 109;
/// Default output image height in user units
pub const DEFAULT_HEIGHT: u32 = 109;
/// Default viewBox covering the full canvas
pub const DEFAULT_VIEWBOX: &str = "0 0 109 109";

// XML namespaces declared on every output document
/// Base SVG namespace
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
/// KanjiVG extension namespace
pub const KVG_NAMESPACE: &str = "http://kanjivg.tagaini.net";

/// Attribute marking a node as a named structural element
///
/// Counting these markers across a fragment tree is the complexity proxy
/// used by the layout weighting heuristic.
pub const ELEMENT_ATTRIBUTE: &str = "kvg:element";

/// Substring identifying the stroke-path group inside a fragment
pub const STROKE_PATHS_MARKER: &str = "StrokePaths";

/// Inline style property rescaled by the per-slot stroke multiplier
pub const STROKE_WIDTH_PROPERTY: &str = "stroke-width";

// Weighting coefficients, empirically chosen against the original data set.
// Their exact values are a compatibility contract for output parity.
/// Per-weight-unit shift applied to x/y range endpoints
pub const POSITION_WEIGHT_COEFFICIENT: f64 = -0.2;
/// Per-weight-unit stretch applied to width/height range endpoints
pub const SIZE_WEIGHT_COEFFICIENT: f64 = 0.3;

// Fragment storage layout, resolved relative to the data file
/// Directory of radical fragments
pub const RADICAL_DIRECTORY: &str = "radicals";
/// Directory of character fragments
pub const CHARACTER_DIRECTORY: &str = "characters";
/// File extension of stored fragments
pub const FRAGMENT_EXTENSION: &str = "svg";

// Default values for configurable parameters
/// Default number of images per run
pub const DEFAULT_COUNT: usize = 10;
/// Default data file path
pub const DEFAULT_DATA_FILE: &str = "data.toml";

// Fallback geometry for radicals that omit a range in the data file
/// Default x/y range
pub const DEFAULT_POSITION_RANGE: [f64; 2] = [0.0, 0.0];
/// Default width/height range
pub const DEFAULT_SIZE_RANGE: [f64; 2] = [109.0, 109.0];
/// Default stroke multiplier range
pub const DEFAULT_STROKE_RANGE: [f64; 2] = [1.0, 1.0];
