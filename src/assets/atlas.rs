use std::collections::HashMap;
use std::path::PathBuf;

use log::info;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::render::{Texture, TextureCreator};
use sdl2::surface::Surface;
use sdl2::video::WindowContext;

use super::gradient::{radial_gradient_pixels, BYTES_PER_PIXEL};
use super::loader::AssetError;
use crate::material::OrbType;

/// How far the solid centre of the radial background reaches
const RADIAL_DENSITY: f32 = 0.01;

/// Every texture the game draws, owned in one place
///
/// Textures are tied to the `TextureCreator` they came from and released when
/// the atlas is dropped.
pub struct TextureAtlas<'a> {
    icons: HashMap<OrbType, Texture<'a>>,
    radial: Texture<'a>,
}

impl<'a> TextureAtlas<'a> {
    /// Uploads pre-loaded icon surfaces and generates the radial background
    pub fn upload(
        texture_creator: &'a TextureCreator<WindowContext>,
        icon_surfaces: Vec<(OrbType, Surface<'static>)>,
        image_size: u32,
    ) -> Result<Self, AssetError> {
        let mut icons = HashMap::with_capacity(icon_surfaces.len());
        for (orb, surface) in icon_surfaces {
            let texture = texture_creator
                .create_texture_from_surface(&surface)
                .map_err(|e| AssetError::Upload {
                    path: PathBuf::from(orb.icon_path()),
                    reason: e.to_string(),
                })?;
            icons.insert(orb, texture);
        }

        let radial = create_radial_texture(texture_creator, image_size)?;

        info!("Uploaded {} material icons and radial background", icons.len());

        Ok(TextureAtlas { icons, radial })
    }

    pub fn icon(&self, orb: OrbType) -> Option<&Texture<'a>> {
        self.icons.get(&orb)
    }

    /// An orb's icon together with the shared radial background
    ///
    /// The radial texture is handed out mutably because every draw sets its
    /// color mod to the material's rarity color.
    pub fn icon_with_radial(&mut self, orb: OrbType) -> Option<(&Texture<'a>, &mut Texture<'a>)> {
        let icon = self.icons.get(&orb)?;
        Some((icon, &mut self.radial))
    }
}

fn create_radial_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    size: u32,
) -> Result<Texture<'a>, AssetError> {
    let upload_error = |reason: String| AssetError::Upload {
        path: PathBuf::from("<radial gradient>"),
        reason,
    };

    let pixels = radial_gradient_pixels(size, size, RADIAL_DENSITY, Color::WHITE, Color::BLACK);

    let mut texture = texture_creator
        .create_texture_static(PixelFormatEnum::RGBA32, size, size)
        .map_err(|e| upload_error(e.to_string()))?;
    texture
        .update(None, &pixels, size as usize * BYTES_PER_PIXEL)
        .map_err(|e| upload_error(e.to_string()))?;

    Ok(texture)
}
