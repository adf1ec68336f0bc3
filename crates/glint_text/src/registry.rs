//! Font resolution
//!
//! An explicitly requested font path is authoritative. Without one, a short
//! list of well-known per-OS font files is tried, then the system font
//! database (fontdb) is queried for a sans-serif face.

use crate::font::FontFace;
use crate::{Result, TextError};
use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use std::path::{Path, PathBuf};

/// Well-known font files for the current OS, in preference order
pub fn default_font_paths() -> Vec<PathBuf> {
    let paths: &[&str] = if cfg!(target_os = "macos") {
        &[
            "/System/Library/Fonts/Helvetica.ttc",
            "/System/Library/Fonts/Supplemental/Arial.ttf",
        ]
    } else if cfg!(target_os = "windows") {
        &["C:\\Windows\\Fonts\\segoeui.ttf", "C:\\Windows\\Fonts\\arial.ttf"]
    } else {
        &[
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        ]
    };
    paths.iter().map(PathBuf::from).collect()
}

/// Resolve the font the application renders with
///
/// When `explicit` is set, only that file is tried and its load error is
/// returned unchanged.
pub fn resolve_font(explicit: Option<&Path>) -> Result<FontFace> {
    if let Some(path) = explicit {
        let face = FontFace::from_file(path)?;
        tracing::info!("Loaded font '{}' from {}", face.family_name(), path.display());
        return Ok(face);
    }

    for path in default_font_paths() {
        match FontFace::from_file(&path) {
            Ok(face) => {
                tracing::info!("Loaded font '{}' from {}", face.family_name(), path.display());
                return Ok(face);
            }
            Err(e) => tracing::debug!("Skipping font candidate: {}", e),
        }
    }

    load_system_sans_serif()
}

/// Query the system font database for a regular sans-serif face
pub fn load_system_sans_serif() -> Result<FontFace> {
    let mut db = Database::new();
    db.load_system_fonts();

    let query = Query {
        families: &[Family::SansSerif],
        weight: Weight::NORMAL,
        style: Style::Normal,
        stretch: Stretch::Normal,
    };

    let id = db.query(&query).ok_or_else(|| {
        TextError::FontNotFound(format!(
            "no sans-serif face among {} system fonts",
            db.len()
        ))
    })?;

    let (data, index) = db
        .with_face_data(id, |data, index| (data.to_vec(), index))
        .ok_or(TextError::InvalidFontData)?;

    let face = FontFace::from_data_with_index(data, index)?;
    tracing::info!("Loaded system font '{}'", face.family_name());
    Ok(face)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_font_paths_not_empty() {
        assert!(!default_font_paths().is_empty());
    }

    #[test]
    fn test_explicit_missing_font_fails() {
        let result = resolve_font(Some(Path::new("/no/such/font/file.ttf")));
        assert!(matches!(result, Err(TextError::FontLoadError(_))));
    }
}
