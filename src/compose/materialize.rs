//! Turning resolved slots into embeddable image parts
//!
//! Each occupied slot becomes an independent copy of its operand's fragment
//! tree with position, size and viewbox overwritten and stroke widths
//! rescaled. Copies are mandatory: the cached fragment trees are reused
//! across generation calls and must never accumulate per-call mutations.

use crate::compose::layout::SlotGeometry;
use crate::corpus::character::CharacterEntry;
use crate::corpus::radical::{RadicalDefinition, Slot};
use crate::io::configuration::{DEFAULT_VIEWBOX, STROKE_PATHS_MARKER, STROKE_WIDTH_PROPERTY};
use crate::io::error::{GenerationError, Result};
use crate::svg::node::Node;

/// The resolved, ready-to-embed description of one occupied slot
///
/// Produced fresh for every generation call and consumed immediately by
/// the assembler; never persisted.
#[derive(Debug)]
pub struct ImagePart {
    /// Glyph identity of the embedded operand, if any
    pub glyph: Option<char>,
    /// Independently-copied fragment tree with geometry applied
    pub node: Node,
    /// Resolved horizontal position
    pub x: f64,
    /// Resolved vertical position
    pub y: f64,
    /// Resolved width
    pub width: f64,
    /// Resolved height
    pub height: f64,
    /// Resolved stroke multiplier
    pub stroke_multiplier: f64,
    /// Resolved viewbox string
    pub viewbox: String,
}

/// Materialize both slots for a (radical, character) pairing
///
/// The radical's own slot keeps its authored viewbox; the paired slot is
/// normalized to the default viewbox, since the character was not authored
/// for this composition's coordinate space.
///
/// # Errors
///
/// Returns an error if a fragment cannot be loaded or its stroke group
/// does not have the expected structure.
pub fn materialize(
    radical: &RadicalDefinition,
    character: &CharacterEntry,
    geometry: &[SlotGeometry; 2],
) -> Result<[ImagePart; 2]> {
    Ok([
        materialize_slot(radical, character, Slot::First, &geometry[0])?,
        materialize_slot(radical, character, Slot::Second, &geometry[1])?,
    ])
}

fn materialize_slot(
    radical: &RadicalDefinition,
    character: &CharacterEntry,
    slot: Slot,
    geometry: &SlotGeometry,
) -> Result<ImagePart> {
    let own = radical.slot == slot;
    let fragment = if own {
        &radical.fragment
    } else {
        &character.fragment
    };
    let viewbox = if own {
        radical.viewbox.clone()
    } else {
        DEFAULT_VIEWBOX.to_owned()
    };

    // Deep copy: the cached tree is a shared read-only template
    let mut node = fragment.node()?.clone();

    node.attributes = vec![
        ("x".to_owned(), geometry.x.to_string()),
        ("y".to_owned(), geometry.y.to_string()),
        ("width".to_owned(), geometry.width.to_string()),
        ("height".to_owned(), geometry.height.to_string()),
        ("viewBox".to_owned(), viewbox.clone()),
        ("preserveAspectRatio".to_owned(), "none".to_owned()),
    ];

    if geometry.stroke_multiplier != 1.0 {
        rescale_stroke_widths(&mut node, geometry.stroke_multiplier).map_err(|reason| {
            GenerationError::MalformedDocument {
                path: fragment.path().to_path_buf(),
                reason,
            }
        })?;
    }

    Ok(ImagePart {
        glyph: fragment.glyph(),
        node,
        x: geometry.x,
        y: geometry.y,
        width: geometry.width,
        height: geometry.height,
        stroke_multiplier: geometry.stroke_multiplier,
        viewbox,
    })
}

// Rescales every stroke-width entry in the stroke group's inline style.
// The group is the fragment root's first child and carries the StrokePaths
// id; anything else means the preprocessing contract was broken.
fn rescale_stroke_widths(
    root: &mut Node,
    multiplier: f64,
) -> std::result::Result<(), String> {
    let group = root
        .first_element_mut()
        .ok_or_else(|| "fragment root has no child group".to_owned())?;

    if !group
        .attribute("id")
        .is_some_and(|id| id.contains(STROKE_PATHS_MARKER))
    {
        return Err(format!(
            "first group is not a {STROKE_PATHS_MARKER} group"
        ));
    }

    let style = group
        .attribute("style")
        .ok_or_else(|| "stroke group has no inline style".to_owned())?;

    let rescaled = rescale_style(style, multiplier)?;
    group.set_attribute("style", rescaled);
    Ok(())
}

/// Rescale the stroke-width entry of a semicolon-delimited style string
///
/// Entries other than the stroke-width property, and the exact layout of
/// separators, pass through untouched.
///
/// # Errors
///
/// Returns a description of the problem if a stroke-width value is not
/// numeric.
pub fn rescale_style(style: &str, multiplier: f64) -> std::result::Result<String, String> {
    let mut entries: Vec<String> = style.split(';').map(str::to_owned).collect();

    for entry in &mut entries {
        let Some((key, value)) = entry.split_once(':') else {
            continue;
        };
        if key != STROKE_WIDTH_PROPERTY {
            continue;
        }
        let width: f64 = value
            .parse()
            .map_err(|_| format!("invalid {STROKE_WIDTH_PROPERTY} value '{value}'"))?;
        *entry = format!("{STROKE_WIDTH_PROPERTY}:{}", width * multiplier);
    }

    Ok(entries.join(";"))
}
