use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Species;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Species colours
// ---------------------------------------------------------------------------

/// Colour for a species, used by the scatter plot and the filter checkboxes.
/// Stable across frames: the palette is indexed by the fixed species order.
pub fn species_color(species: Species) -> Color32 {
    let palette = generate_palette(Species::ALL.len());
    let idx = Species::ALL
        .iter()
        .position(|&sp| sp == species)
        .unwrap_or(0);
    palette[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(5).len(), 5);
    }

    #[test]
    fn species_colors_are_distinct() {
        let colors: Vec<Color32> = Species::ALL.iter().map(|&sp| species_color(sp)).collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }
}
