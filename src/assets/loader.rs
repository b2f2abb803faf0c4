use std::path::{Path, PathBuf};

use log::debug;
use sdl2::image::LoadSurface;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::BlendMode;
use sdl2::surface::Surface;
use thiserror::Error;

use crate::material::OrbType;

/// Errors that can occur while loading assets
#[derive(Debug, Error)]
pub enum AssetError {
    /// A required file is not on disk
    #[error("Image file {} does not exist", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to decode {}: {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("Failed to upload {} to the GPU: {reason}", .path.display())]
    Upload { path: PathBuf, reason: String },
}

impl From<AssetError> for String {
    fn from(error: AssetError) -> Self {
        error.to_string()
    }
}

/// Loads an image and resizes it to `size` x `size` pixels
///
/// The file's existence is checked before anything is decoded, so a missing
/// asset is reported as `NotFound` without touching SDL. The decoded
/// source surface is dropped before returning.
pub fn load_icon_surface(path: &Path, size: u32) -> Result<Surface<'static>, AssetError> {
    if !path.exists() {
        return Err(AssetError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let decode_error = |reason: String| AssetError::Decode {
        path: path.to_path_buf(),
        reason,
    };

    let mut raw = Surface::from_file(path).map_err(decode_error)?;

    // Copy alpha straight across instead of blending onto the blank target
    raw.set_blend_mode(BlendMode::None).map_err(decode_error)?;

    let mut icon = Surface::new(size, size, PixelFormatEnum::RGBA32).map_err(decode_error)?;
    raw.blit_scaled(None, &mut icon, None).map_err(decode_error)?;

    debug!(
        "Loaded {} ({}x{} -> {}x{})",
        path.display(),
        raw.width(),
        raw.height(),
        size,
        size
    );

    Ok(icon)
}

/// Loads every material icon, failing on the first missing or broken file
pub fn load_material_icons(size: u32) -> Result<Vec<(OrbType, Surface<'static>)>, AssetError> {
    OrbType::ALL
        .iter()
        .map(|&orb| load_icon_surface(Path::new(orb.icon_path()), size).map(|icon| (orb, icon)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reports_not_found() {
        let path = Path::new("assets/definitely-not-here.png");
        match load_icon_surface(path, 50) {
            Err(AssetError::NotFound { path: missing }) => assert_eq!(missing, path),
            Err(other) => panic!("expected NotFound, got {}", other),
            Ok(_) => panic!("expected NotFound, got a surface"),
        }
    }

    #[test]
    fn test_not_found_message_names_the_path() {
        let error = AssetError::NotFound {
            path: PathBuf::from("./assets/divine-orb.png"),
        };
        let message: String = error.into();
        assert_eq!(message, "Image file ./assets/divine-orb.png does not exist");
    }
}
