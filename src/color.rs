use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
/// Used for bar and pie segments.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            to_color32(hsl)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Diverging scale for the correlation heatmap
// ---------------------------------------------------------------------------

/// Map a correlation coefficient in `[-1, 1]` to a diverging colour:
/// blue for negative, near-white around zero, red for positive. NaN
/// (degenerate pairs) renders as a neutral grey.
pub fn correlation_color(r: f64) -> Color32 {
    if r.is_nan() {
        return Color32::from_gray(90);
    }
    let r = r.clamp(-1.0, 1.0) as f32;
    let hue = if r < 0.0 { 220.0 } else { 10.0 };
    let strength = r.abs();
    let hsl = Hsl::new(hue, 0.70 * strength + 0.05, 0.92 - 0.42 * strength);
    to_color32(hsl)
}

fn to_color32(hsl: Hsl) -> Color32 {
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_entries() {
        assert!(generate_palette(0).is_empty());
        let p = generate_palette(8);
        assert_eq!(p.len(), 8);
        assert_ne!(p[0], p[4]);
    }

    #[test]
    fn correlation_scale_diverges() {
        let neg = correlation_color(-1.0);
        let pos = correlation_color(1.0);
        let nan = correlation_color(f64::NAN);
        assert!(neg.b() > neg.r());
        assert!(pos.r() > pos.b());
        assert_eq!(nan, Color32::from_gray(90));
    }
}
