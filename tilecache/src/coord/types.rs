//! Tile key types

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// Which path segment of a tile request a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// `{z}`
    Zoom,
    /// `{x}`
    Column,
    /// `{y}` with any image extension removed
    Row,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Zoom => write!(f, "zoom"),
            Segment::Column => write!(f, "column"),
            Segment::Row => write!(f, "row"),
        }
    }
}

/// Errors produced while deriving a tile key from request segments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// Segment is empty or contains something other than decimal digits.
    #[error("Invalid {segment} segment: '{value}'")]
    InvalidSegment { segment: Segment, value: String },

    /// Segment tries to climb out of the cache root.
    #[error("Path traversal in {segment} segment: '{value}'")]
    Traversal { segment: Segment, value: String },
}

/// Validated tile coordinates.
///
/// Components are kept as the digit strings they arrived as. No numeric range
/// is enforced here, so a zoom of `"99999999999999999999"` is a valid key that
/// the upstream will simply refuse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TileKey {
    zoom: String,
    column: String,
    row: String,
}

impl TileKey {
    /// Zoom level segment.
    pub fn zoom(&self) -> &str {
        &self.zoom
    }

    /// Column (x) segment.
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Row (y) segment, without extension.
    pub fn row(&self) -> &str {
        &self.row
    }
}

impl fmt::Display for TileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.column, self.row)
    }
}

fn digits_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]+$").unwrap())
}

fn extension_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)\.png$").unwrap())
}

fn check_segment(segment: Segment, value: &str) -> Result<String, KeyError> {
    if value.contains("..") {
        return Err(KeyError::Traversal {
            segment,
            value: value.to_string(),
        });
    }
    if !digits_pattern().is_match(value) {
        return Err(KeyError::InvalidSegment {
            segment,
            value: value.to_string(),
        });
    }
    Ok(value.to_string())
}

/// Derive a [`TileKey`] from raw request segments.
///
/// A single trailing `.png` (any case) is removed from `y` before checking.
/// Every segment must then be a non-empty run of ASCII digits.
///
/// # Errors
///
/// Returns [`KeyError`] naming the first offending segment.
pub fn parse_tile_key(z: &str, x: &str, y: &str) -> Result<TileKey, KeyError> {
    let row = extension_pattern().replace(y, "");

    Ok(TileKey {
        zoom: check_segment(Segment::Zoom, z)?,
        column: check_segment(Segment::Column, x)?,
        row: check_segment(Segment::Row, &row)?,
    })
}
