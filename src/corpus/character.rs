//! Character entries and glyph/filename inference

use crate::corpus::fragment::Fragment;
use crate::io::configuration::FRAGMENT_EXTENSION;

/// One glyph fragment usable as the non-radical operand
///
/// Synthesized per file discovered in the character store at load time.
#[derive(Debug)]
pub struct CharacterEntry {
    /// Backing fragment
    pub fragment: Fragment,
}

impl CharacterEntry {
    /// The glyph identity inferred from the fragment's filename, if any
    pub const fn glyph(&self) -> Option<char> {
        self.fragment.glyph()
    }
}

/// Infer a glyph identity from a fragment filename
///
/// Recognizes names of the form `<hex>.svg` where `<hex>` is the glyph's
/// code point in lowercase hexadecimal. Unrecognized names yield `None`;
/// such files are still usable fragments, just without an identity.
pub fn glyph_from_filename(name: &str) -> Option<char> {
    let stem = name.strip_suffix(&format!(".{FRAGMENT_EXTENSION}"))?;
    if stem.is_empty() || !stem.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
        return None;
    }
    char::from_u32(u32::from_str_radix(stem, 16).ok()?)
}

/// Build the storage filename for a glyph
///
/// Code points are lowercase hexadecimal, zero-padded to 5 digits.
pub fn glyph_to_filename(glyph: char) -> String {
    format!("{:05x}.{FRAGMENT_EXTENSION}", glyph as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_hex_filenames() {
        assert_eq!(glyph_from_filename("04e00.svg"), Some('一'));
        assert_eq!(glyph_from_filename("05927.svg"), Some('大'));
        assert_eq!(glyph_from_filename("61.svg"), Some('a'));
    }

    #[test]
    fn rejects_unrecognized_filenames() {
        assert_eq!(glyph_from_filename("04e00-Kaisho.svg"), None);
        assert_eq!(glyph_from_filename("04E00.svg"), None, "uppercase hex");
        assert_eq!(glyph_from_filename("04e00.png"), None);
        assert_eq!(glyph_from_filename(".svg"), None);
        assert_eq!(glyph_from_filename("110000.svg"), None, "beyond Unicode");
        assert_eq!(glyph_from_filename("d800.svg"), None, "surrogate");
    }

    #[test]
    fn filenames_are_zero_padded_lowercase() {
        assert_eq!(glyph_to_filename('一'), "04e00.svg");
        assert_eq!(glyph_to_filename('a'), "00061.svg");
    }

    #[test]
    fn inference_inverts_filename_building() {
        for glyph in ['一', '大', '口', 'あ'] {
            assert_eq!(glyph_from_filename(&glyph_to_filename(glyph)), Some(glyph));
        }
    }
}
