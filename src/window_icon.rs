use crate::ui::BRAND_COLOR;
use winit::window::Icon;

const ICON_SIZE: u32 = 32;

#[cfg(target_os = "macos")]
pub fn window_icon() -> Option<Icon> {
    None
}

#[cfg(not(target_os = "macos"))]
pub fn window_icon() -> Option<Icon> {
    match Icon::from_rgba(brand_pixels(ICON_SIZE), ICON_SIZE, ICON_SIZE) {
        Ok(icon) => Some(icon),
        Err(err) => {
            log::warn!("Failed to build window icon: {}", err);
            None
        }
    }
}

/// RGBA pixels of the brand mark: a rounded square with a white `<>`.
fn brand_pixels(size: u32) -> Vec<u8> {
    let s = size as f32;
    let radius = s * 0.2;
    let [r, g, b, _] = BRAND_COLOR.to_array();

    let mut pixels = Vec::with_capacity((size * size * 4) as usize);

    for y in 0..size {
        for x in 0..size {
            let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);

            let pixel = if !inside_rounded_square(px, py, s, radius) {
                [0, 0, 0, 0]
            } else if on_chevrons(px / s, py / s) {
                [255, 255, 255, 255]
            } else {
                [r, g, b, 255]
            };

            pixels.extend_from_slice(&pixel);
        }
    }

    pixels
}

fn inside_rounded_square(x: f32, y: f32, size: f32, radius: f32) -> bool {
    let cx = x.clamp(radius, size - radius);
    let cy = y.clamp(radius, size - radius);

    (x - cx).powi(2) + (y - cy).powi(2) <= radius.powi(2)
}

/// `x` and `y` are normalized to the unit square.
fn on_chevrons(x: f32, y: f32) -> bool {
    const THICKNESS: f32 = 0.06;

    if !(0.3..=0.7).contains(&y) {
        return false;
    }

    let arm = (y - 0.5).abs();
    let left = 0.22 + arm;
    let right = 0.78 - arm;

    (x - left).abs() < THICKNESS || (x - right).abs() < THICKNESS
}
