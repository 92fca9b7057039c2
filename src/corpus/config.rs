//! Data file parsing and corpus loading
//!
//! The data file is TOML: `[[radical]]` tables describing layout templates,
//! an `exclude` array of glyphs never drawn from the character pool, and
//! `[[extraction]]` tables consumed only by the preprocessing stage (ignored
//! here). Character entries are synthesized from the files present in the
//! character directory next to the data file.

use crate::corpus::character::{glyph_from_filename, glyph_to_filename, CharacterEntry};
use crate::corpus::fragment::Fragment;
use crate::corpus::radical::{RadicalDefinition, Slot};
use crate::corpus::Corpus;
use crate::io::configuration::{
    CHARACTER_DIRECTORY, DEFAULT_POSITION_RANGE, DEFAULT_SIZE_RANGE, DEFAULT_STROKE_RANGE,
    DEFAULT_VIEWBOX, RADICAL_DIRECTORY,
};
use crate::io::error::{configuration_error, file_system_error, GenerationError, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct DataFile {
    #[serde(default, rename = "radical")]
    radicals: Vec<RadicalSpec>,
    #[serde(default)]
    exclude: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RadicalSpec {
    name: Option<String>,
    #[serde(rename = "char")]
    glyph: Option<String>,
    file: Option<String>,
    #[serde(default = "default_copy")]
    copy: bool,
    pos: i64,
    #[serde(default = "default_position_range")]
    x: [f64; 2],
    #[serde(default = "default_position_range")]
    y: [f64; 2],
    #[serde(default = "default_size_range")]
    width: [f64; 2],
    #[serde(default = "default_size_range")]
    height: [f64; 2],
    #[serde(default = "default_stroke_range", rename = "stroke")]
    stroke_multiplier: [f64; 2],
    #[serde(default = "default_weighting", rename = "weight")]
    apply_weighting: bool,
    #[serde(default = "default_viewbox")]
    viewbox: String,
}

const fn default_copy() -> bool {
    true
}

const fn default_weighting() -> bool {
    true
}

const fn default_position_range() -> [f64; 2] {
    DEFAULT_POSITION_RANGE
}

const fn default_size_range() -> [f64; 2] {
    DEFAULT_SIZE_RANGE
}

const fn default_stroke_range() -> [f64; 2] {
    DEFAULT_STROKE_RANGE
}

fn default_viewbox() -> String {
    DEFAULT_VIEWBOX.to_owned()
}

/// Load a corpus from a data file
///
/// Fragment directories resolve relative to the data file's parent
/// directory. Fragments themselves are declared lazily; no SVG is parsed
/// here.
///
/// # Errors
///
/// Returns a configuration error if the data file is syntactically invalid
/// or violates a structural requirement (duplicate name, zero stroke
/// multiplier, slot outside {0, 1}, radical with neither glyph nor file),
/// and a file system error if the data file or character directory cannot
/// be read.
pub fn load_corpus(data_path: &Path) -> Result<Corpus> {
    let text = std::fs::read_to_string(data_path)
        .map_err(|err| file_system_error(data_path, "read", err))?;
    let base = data_path.parent().unwrap_or_else(|| Path::new("."));

    let (radicals, exclude) = parse_data_file(&text, base)?;
    let characters = scan_characters(&base.join(CHARACTER_DIRECTORY))?;

    Corpus::from_parts(radicals, characters, exclude)
}

/// Parse data file text into radical definitions and the exclusion set
///
/// Separated from [`load_corpus`] so validation is testable without a
/// character store on disk.
///
/// # Errors
///
/// Returns a configuration error for syntax errors or invalid radical
/// declarations.
pub fn parse_data_file(text: &str, base: &Path) -> Result<(Vec<RadicalDefinition>, Vec<char>)> {
    let data: DataFile = toml::from_str(text).map_err(|err| configuration_error(err.to_string()))?;

    let radicals = data
        .radicals
        .into_iter()
        .map(|spec| build_radical(spec, base))
        .collect::<Result<Vec<_>>>()?;

    let exclude = data
        .exclude
        .into_iter()
        .map(|entry| single_glyph(&entry, "exclude"))
        .collect::<Result<Vec<_>>>()?;

    Ok((radicals, exclude))
}

fn build_radical(spec: RadicalSpec, base: &Path) -> Result<RadicalDefinition> {
    let glyph = spec
        .glyph
        .as_deref()
        .map(|value| single_glyph(value, "radical char"))
        .transpose()?;

    let file = match spec.file {
        Some(file) => file,
        None => glyph_to_filename(glyph.ok_or_else(|| {
            configuration_error("radical must declare one of 'char' or 'file'")
        })?),
    };

    let slot = Slot::from_index(spec.pos).ok_or(GenerationError::InvalidSlot { value: spec.pos })?;

    if spec.stroke_multiplier.contains(&0.0) {
        return Err(GenerationError::ZeroStrokeMultiplier {
            radical: spec
                .name
                .clone()
                .or_else(|| glyph.map(String::from))
                .unwrap_or_else(|| file.clone()),
        });
    }

    Ok(RadicalDefinition {
        name: spec.name,
        fragment: Fragment::new(glyph, base.join(RADICAL_DIRECTORY).join(file)),
        slot,
        copy: spec.copy,
        x: spec.x,
        y: spec.y,
        width: spec.width,
        height: spec.height,
        stroke_multiplier: spec.stroke_multiplier,
        apply_weighting: spec.apply_weighting,
        viewbox: spec.viewbox,
    })
}

fn single_glyph(value: &str, field: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(glyph), None) => Ok(glyph),
        _ => Err(configuration_error(format!(
            "{field} entry '{value}' must be exactly one character"
        ))),
    }
}

fn scan_characters(directory: &Path) -> Result<Vec<CharacterEntry>> {
    let mut entries = Vec::new();
    let listing = std::fs::read_dir(directory)
        .map_err(|err| file_system_error(directory, "list characters", err))?;

    for entry in listing {
        let entry = entry.map_err(|err| file_system_error(directory, "list characters", err))?;
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        entries.push(CharacterEntry {
            fragment: Fragment::new(glyph_from_filename(&name), entry.path()),
        });
    }

    // Directory iteration order is platform-dependent
    entries.sort_by(|a, b| a.fragment.path().cmp(b.fragment.path()));
    Ok(entries)
}
