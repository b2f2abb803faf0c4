use sdl2::pixels::Color;

/// Bytes per RGBA pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// Generates an opaque radial gradient as tightly packed RGBA bytes
///
/// `inner` fills the centre out to `radius * density`, then blends linearly
/// to `outer` at the radius (half the shorter side). Everything beyond the
/// radius is `outer`.
pub fn radial_gradient_pixels(
    width: u32,
    height: u32,
    density: f32,
    inner: Color,
    outer: Color,
) -> Vec<u8> {
    let radius = width.min(height) as f32 / 2.0;
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;

    let mut pixels = Vec::with_capacity(width as usize * height as usize * BYTES_PER_PIXEL);

    for y in 0..height {
        for x in 0..width {
            let dist = (x as f32 - center_x).hypot(y as f32 - center_y);
            let factor = ((dist - radius * density) / (radius * (1.0 - density))).clamp(0.0, 1.0);

            let blend = |o: u8, i: u8| (o as f32 * factor + i as f32 * (1.0 - factor)).round() as u8;
            pixels.extend_from_slice(&[
                blend(outer.r, inner.r),
                blend(outer.g, inner.g),
                blend(outer.b, inner.b),
                blend(outer.a, inner.a),
            ]);
        }
    }

    pixels
}
