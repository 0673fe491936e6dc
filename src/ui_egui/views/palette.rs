use egui::{Color32, Visuals};

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

/// Colors for the week grid, derived from the active egui visuals.
#[derive(Clone, Copy, Debug)]
pub(crate) struct GridPalette {
    pub header_bg: Color32,
    pub header_text: Color32,
    pub axis_text: Color32,
    pub cell_bg: Color32,
    pub hour_line: Color32,
    pub slot_line: Color32,
    pub divider: Color32,
    pub hover_overlay: Color32,
    pub selection_fill: Color32,
    pub pending_outline: Color32,
}

impl GridPalette {
    pub fn from_visuals(visuals: &Visuals) -> Self {
        let border = visuals.widgets.noninteractive.bg_stroke.color;
        let accent = visuals.selection.bg_fill;
        let background = visuals.extreme_bg_color;
        Self {
            header_bg: blend(visuals.panel_fill, background, 0.4),
            header_text: visuals.strong_text_color(),
            axis_text: Color32::GRAY,
            cell_bg: background,
            hour_line: border,
            slot_line: with_alpha(border, 120),
            divider: with_alpha(border, 220),
            hover_overlay: with_alpha(accent, if visuals.dark_mode { 60 } else { 40 }),
            selection_fill: with_alpha(accent, if visuals.dark_mode { 140 } else { 110 }),
            pending_outline: visuals.strong_text_color(),
        }
    }
}
