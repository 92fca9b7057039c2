//! Slot geometry resolution with complexity weighting
//!
//! Starts from a radical's authored per-slot ranges and optionally nudges
//! them by the weight difference between the radical and its paired
//! character. A more complex radical gets slightly more room, and the
//! center of its box shifts correspondingly. Ranges whose endpoints are
//! equal were pinned by the author and are never touched.

use crate::compose::weight::weight;
use crate::corpus::character::CharacterEntry;
use crate::corpus::radical::{RadicalDefinition, Slot};
use crate::io::configuration::{POSITION_WEIGHT_COEFFICIENT, SIZE_WEIGHT_COEFFICIENT};
use crate::io::error::Result;

/// Final numeric geometry for one slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotGeometry {
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
    /// Slot width
    pub width: f64,
    /// Slot height
    pub height: f64,
    /// Stroke-width multiplier for the embedded fragment
    pub stroke_multiplier: f64,
}

/// Resolve both slots' geometry for a (radical, character) pairing
///
/// The radical's stored ranges are never mutated; adjustment happens on
/// copies. With `apply_weighting` disabled, or when both fragments weigh
/// the same, the authored ranges pass through unchanged.
///
/// # Errors
///
/// Returns an error if either fragment's backing document cannot be
/// loaded for weighing.
pub fn resolve(
    radical: &RadicalDefinition,
    character: &CharacterEntry,
) -> Result<[SlotGeometry; 2]> {
    let mut x = radical.x;
    let mut y = radical.y;
    let mut width = radical.width;
    let mut height = radical.height;

    if radical.apply_weighting {
        let mut diff =
            f64::from(weight(radical.fragment.node()?)) - f64::from(weight(character.fragment.node()?));
        // Keep the sign relative to the radical's own slot, whichever
        // physical slot it was authored into
        if radical.slot == Slot::Second {
            diff = -diff;
        }

        adjust(&mut x, diff * POSITION_WEIGHT_COEFFICIENT);
        adjust(&mut y, diff * POSITION_WEIGHT_COEFFICIENT);
        adjust(&mut width, diff * SIZE_WEIGHT_COEFFICIENT);
        adjust(&mut height, diff * SIZE_WEIGHT_COEFFICIENT);
    }

    Ok(Slot::BOTH.map(|slot| {
        let index = slot.index();
        SlotGeometry {
            x: x[index],
            y: y[index],
            width: width[index],
            height: height[index],
            stroke_multiplier: radical.stroke_multiplier[index],
        }
    }))
}

// Equal endpoints signal a pinned dimension; nudging one would displace
// geometry the author fixed deliberately.
fn adjust(range: &mut [f64; 2], delta: f64) {
    if range[0] != range[1] {
        range[0] += delta;
        range[1] -= delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Fragment;
    use crate::svg::parse::parse_tree;

    fn fragment(marked_elements: usize) -> Fragment {
        let groups: String = (0..marked_elements)
            .map(|i| format!(r#"<g kvg:element="e{i}"/>"#))
            .collect();
        let text = format!(r#"<svg xmlns="http://www.w3.org/2000/svg">{groups}</svg>"#);
        Fragment::preparsed(None, parse_tree(&text).unwrap())
    }

    fn radical(slot: Slot, weighting: bool, complexity: usize) -> RadicalDefinition {
        RadicalDefinition {
            name: None,
            fragment: fragment(complexity),
            slot,
            copy: true,
            x: [0.0, 55.0],
            y: [10.0, 10.0],
            width: [55.0, 54.0],
            height: [109.0, 109.0],
            stroke_multiplier: [1.0, 1.5],
            apply_weighting: weighting,
            viewbox: "0 0 55 109".to_owned(),
        }
    }

    fn character(complexity: usize) -> CharacterEntry {
        CharacterEntry {
            fragment: fragment(complexity),
        }
    }

    #[test]
    fn no_weighting_passes_ranges_through() {
        let geometry = resolve(&radical(Slot::First, false, 9), &character(1)).unwrap();
        assert_eq!(geometry[0].x, 0.0);
        assert_eq!(geometry[1].x, 55.0);
        assert_eq!(geometry[0].width, 55.0);
        assert_eq!(geometry[1].width, 54.0);
        assert_eq!(geometry[0].stroke_multiplier, 1.0);
        assert_eq!(geometry[1].stroke_multiplier, 1.5);
    }

    #[test]
    fn equal_weights_are_a_no_op() {
        let weighted = resolve(&radical(Slot::First, true, 3), &character(3)).unwrap();
        let unweighted = resolve(&radical(Slot::First, false, 3), &character(3)).unwrap();
        assert_eq!(weighted, unweighted);
    }

    #[test]
    fn heavier_radical_claims_more_room() {
        // diff = 2: x endpoints move by -0.4, width endpoints by +0.6
        let geometry = resolve(&radical(Slot::First, true, 3), &character(1)).unwrap();
        assert!((geometry[0].x - -0.4).abs() < 1e-9);
        assert!((geometry[1].x - 55.4).abs() < 1e-9);
        assert!((geometry[0].width - 55.6).abs() < 1e-9);
        assert!((geometry[1].width - 53.4).abs() < 1e-9);
    }

    #[test]
    fn slot_one_radicals_negate_the_difference() {
        let first = resolve(&radical(Slot::First, true, 3), &character(1)).unwrap();
        let second = resolve(&radical(Slot::Second, true, 1), &character(3)).unwrap();
        // Same relative complexity seen from opposite slots: identical ranges
        assert_eq!(first[0].x, second[0].x);
        assert_eq!(first[1].width, second[1].width);
    }

    #[test]
    fn pinned_dimensions_never_move() {
        let geometry = resolve(&radical(Slot::First, true, 9), &character(0)).unwrap();
        // y and height ranges have equal endpoints in the fixture
        assert_eq!(geometry[0].y, 10.0);
        assert_eq!(geometry[1].y, 10.0);
        assert_eq!(geometry[0].height, 109.0);
        assert_eq!(geometry[1].height, 109.0);
    }

    #[test]
    fn stored_ranges_survive_resolution() {
        let template = radical(Slot::First, true, 5);
        let _ = resolve(&template, &character(0)).unwrap();
        assert_eq!(template.x, [0.0, 55.0]);
        assert_eq!(template.width, [55.0, 54.0]);
    }
}
