//! Corpus data model: fragments, radicals, characters and derived indexes

/// Character entries and glyph/filename inference
pub mod character;
/// Data file parsing and corpus loading
pub mod config;
/// Lazily-parsed vector fragments
pub mod fragment;
/// Radical layout templates
pub mod radical;

use crate::io::error::{GenerationError, Result};
use character::CharacterEntry;
use radical::RadicalDefinition;
use std::collections::{HashMap, HashSet};

pub use config::load_corpus;
pub use fragment::Fragment;
pub use radical::Slot;

/// All radical definitions and character entries, plus derived indexes
///
/// Built once at load time, immutable thereafter.
#[derive(Debug)]
pub struct Corpus {
    radicals: Vec<RadicalDefinition>,
    characters: Vec<CharacterEntry>,
    radical_names: HashMap<String, usize>,
    radical_glyphs: HashSet<char>,
    excluded_glyphs: HashSet<char>,
}

impl Corpus {
    /// Assemble a corpus and build its derived indexes
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::DuplicateRadicalName`] if two radicals
    /// share a non-blank name.
    pub fn from_parts(
        radicals: Vec<RadicalDefinition>,
        characters: Vec<CharacterEntry>,
        excluded_glyphs: Vec<char>,
    ) -> Result<Self> {
        let mut radical_names = HashMap::new();
        let mut radical_glyphs = HashSet::new();

        for (index, radical) in radicals.iter().enumerate() {
            if let Some(glyph) = radical.glyph() {
                radical_glyphs.insert(glyph);
            }
            if let Some(name) = &radical.name {
                if radical_names.insert(name.clone(), index).is_some() {
                    return Err(GenerationError::DuplicateRadicalName { name: name.clone() });
                }
            }
        }

        Ok(Self {
            radicals,
            characters,
            radical_names,
            radical_glyphs,
            excluded_glyphs: excluded_glyphs.into_iter().collect(),
        })
    }

    /// All radical definitions in declaration order
    pub fn radicals(&self) -> &[RadicalDefinition] {
        &self.radicals
    }

    /// All character entries in storage order
    pub fn characters(&self) -> &[CharacterEntry] {
        &self.characters
    }

    /// Whether this glyph is itself usable as a structural radical
    pub fn is_radical(&self, glyph: char) -> bool {
        self.radical_glyphs.contains(&glyph)
    }

    /// Look up a radical by its data-file name
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::UnknownRadical`] for unknown names.
    pub fn radical_by_name(&self, name: &str) -> Result<&RadicalDefinition> {
        self.radical_names
            .get(name)
            .and_then(|&index| self.radicals.get(index))
            .ok_or_else(|| GenerationError::UnknownRadical {
                name: name.to_owned(),
            })
    }

    /// Look up a character by glyph (single-character ID) or filename
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::UnknownCharacter`] if nothing matches.
    pub fn character_by_id(&self, id: &str) -> Result<&CharacterEntry> {
        let mut chars = id.chars();
        let glyph = match (chars.next(), chars.next()) {
            (Some(glyph), None) => Some(glyph),
            _ => None,
        };

        self.characters
            .iter()
            .find(|entry| match glyph {
                Some(glyph) => entry.glyph() == Some(glyph),
                None => entry
                    .fragment
                    .path()
                    .file_name()
                    .is_some_and(|name| name.to_string_lossy() == id),
            })
            .ok_or_else(|| GenerationError::UnknownCharacter { id: id.to_owned() })
    }

    /// The default character pool: every entry whose glyph is not excluded
    pub fn character_pool(&self) -> Vec<&CharacterEntry> {
        self.characters
            .iter()
            .filter(|entry| {
                !entry
                    .glyph()
                    .is_some_and(|glyph| self.excluded_glyphs.contains(&glyph))
            })
            .collect()
    }
}
