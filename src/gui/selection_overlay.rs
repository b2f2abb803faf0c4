use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::assets::TextureAtlas;
use crate::material::OrbType;

/// Which icon to draw under the cursor for a held orb
///
/// Every orb currently resolves to the Divine Orb icon, matching the only
/// orb right-click can pick up. Per-orb icons slot in here.
pub fn selection_icon(_selected: OrbType) -> OrbType {
    OrbType::Divine
}

/// Rectangle of a `width` x `height` icon centred on the cursor
pub fn overlay_rect(cursor_x: i32, cursor_y: i32, width: u32, height: u32) -> Rect {
    Rect::new(
        cursor_x - (width / 2) as i32,
        cursor_y - (height / 2) as i32,
        width,
        height,
    )
}

/// Draws the held orb's icon centred on the cursor
pub fn render_selection_under_cursor(
    canvas: &mut Canvas<Window>,
    atlas: &TextureAtlas,
    selected: OrbType,
    cursor_x: i32,
    cursor_y: i32,
) -> Result<(), String> {
    let icon_orb = selection_icon(selected);
    let texture = atlas
        .icon(icon_orb)
        .ok_or_else(|| format!("No texture loaded for {}", icon_orb.id()))?;

    let query = texture.query();
    canvas.copy(texture, None, overlay_rect(cursor_x, cursor_y, query.width, query.height))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_selection_resolves_to_divine_icon() {
        for orb in OrbType::ALL {
            assert_eq!(selection_icon(orb), OrbType::Divine);
        }
    }

    #[test]
    fn test_overlay_is_centred_on_cursor() {
        let rect = overlay_rect(400, 230, 50, 50);
        assert_eq!(rect, Rect::new(375, 205, 50, 50));
        assert_eq!(rect.center().x(), 400);
        assert_eq!(rect.center().y(), 230);
    }

    #[test]
    fn test_overlay_may_extend_off_screen() {
        let rect = overlay_rect(0, 0, 50, 50);
        assert_eq!((rect.x(), rect.y()), (-25, -25));
    }

    #[test]
    fn test_non_square_icons_centre_on_both_axes() {
        let rect = overlay_rect(100, 100, 40, 20);
        assert_eq!((rect.x(), rect.y()), (80, 90));
    }
}
