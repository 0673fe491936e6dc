//! Pure helpers shared by the grid views.

use egui::Color32;

/// Parse a hex color string to Color32.
///
/// # Arguments
/// * `hex` - `#RRGGBB` or `#RGB`, the leading `#` optional
///
/// # Returns
/// * `None` if the input is empty or invalid
pub fn parse_color(hex: &str) -> Option<Color32> {
    let hex = hex.trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    match hex.len() {
        6 => Some(Color32::from_rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
            Some(Color32::from_rgb(short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}

/// Dark or light text, whichever reads better on `bg`.
pub fn readable_text_color(bg: Color32) -> Color32 {
    const LIGHT: Color32 = Color32::from_rgb(255, 255, 255);
    const DARK: Color32 = Color32::from_rgb(20, 28, 45);
    if relative_luminance(bg) > 0.5 {
        DARK
    } else {
        LIGHT
    }
}

fn relative_luminance(color: Color32) -> f32 {
    fn srgb_component(value: u8) -> f32 {
        let channel = value as f32 / 255.0;
        if channel <= 0.03928 {
            channel / 12.92
        } else {
            ((channel + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * srgb_component(color.r())
        + 0.7152 * srgb_component(color.g())
        + 0.0722 * srgb_component(color.b())
}
