use std::collections::HashMap;

use super::pipeline::QuadVertex;
use crate::ui::text_layout::TextMeasure;

/// Screen-space 2D position `[x, y]` in pixels.
pub type Vec2 = [f32; 2];

// ── generate_text_mesh ────────────────────────────────────────────────────────

/// Convert `text` into a flat vertex + index buffer.
///
/// # Layout
/// Each renderable character produces **4 vertices** and **6 indices**
/// (two counter-clockwise triangles, Y-axis pointing down):
///
/// ```text
/// 0──1
/// │ /│
/// 2──3
/// triangles: (0,1,2) and (1,3,2)
/// ```
///
/// # Parameters
/// - `start_pos`: top-left origin of the text block in screen pixels.
/// - `font_size`: desired line height in pixels.  All glyph dimensions are
///   scaled uniformly by `font_size / font.line_height`.
/// - `color`: written to every vertex; multiplied with glyph coverage.
///
/// # Skipping rules
/// - `'\n'` resets the X cursor to `start_pos.x` and advances Y by one
///   scaled line height; it produces no geometry.
/// - Characters absent from `font.glyphs` are silently skipped.
/// - Glyphs with an empty atlas region (e.g. space) only advance the cursor.
/// - Returns empty buffers when `font.line_height` is zero.
pub fn generate_text_mesh(
    text: &str,
    font: &Font,
    start_pos: Vec2,
    font_size: f32,
    color: [f32; 4],
) -> (Vec<QuadVertex>, Vec<u32>) {
    if font.line_height == 0 {
        return (Vec::new(), Vec::new());
    }

    let scale = font.scale(font_size);
    let tw = font.texture_width as f32;
    let th = font.texture_height as f32;

    let mut vertices: Vec<QuadVertex> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    let mut current_x = start_pos[0];
    let mut current_y = start_pos[1];

    for ch in text.chars() {
        if ch == '\n' {
            current_x = start_pos[0];
            current_y += font.line_height as f32 * scale;
            continue;
        }

        let Some(glyph) = font.glyphs.get(&ch) else {
            continue;
        };

        if glyph.is_blank() {
            current_x += glyph.x_advance as f32 * scale;
            continue;
        }

        let quad_x = current_x + glyph.x_offset as f32 * scale;
        let quad_y = current_y + glyph.y_offset as f32 * scale;
        let quad_w = glyph.width as f32 * scale;
        let quad_h = glyph.height as f32 * scale;

        let uv_x0 = glyph.x as f32 / tw;
        let uv_y0 = glyph.y as f32 / th;
        let uv_x1 = (glyph.x + glyph.width) as f32 / tw;
        let uv_y1 = (glyph.y + glyph.height) as f32 / th;

        let base = vertices.len() as u32;

        // Four corners in reading order: top-left, top-right, bottom-left, bottom-right.
        vertices.push(QuadVertex { position: [quad_x,          quad_y         ], uv: [uv_x0, uv_y0], color });
        vertices.push(QuadVertex { position: [quad_x + quad_w, quad_y         ], uv: [uv_x1, uv_y0], color });
        vertices.push(QuadVertex { position: [quad_x,          quad_y + quad_h], uv: [uv_x0, uv_y1], color });
        vertices.push(QuadVertex { position: [quad_x + quad_w, quad_y + quad_h], uv: [uv_x1, uv_y1], color });

        // Two CCW triangles (Y-down): TL-TR-BL, TR-BR-BL.
        indices.extend_from_slice(&[base, base + 1, base + 2, base + 1, base + 3, base + 2]);

        current_x += glyph.x_advance as f32 * scale;
    }

    (vertices, indices)
}

// ── Glyph ────────────────────────────────────────────────────────────────────

/// Metrics for a single character in the bitmap font atlas.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// The character this glyph represents.
    pub id: char,
    /// Top-left pixel X of the glyph region in the atlas.
    pub x: u32,
    /// Top-left pixel Y of the glyph region in the atlas.
    pub y: u32,
    /// Pixel width of the glyph region.
    pub width: u32,
    /// Pixel height of the glyph region.
    pub height: u32,
    /// Horizontal offset applied when rendering.
    pub x_offset: i32,
    /// Vertical offset applied when rendering.
    pub y_offset: i32,
    /// How far to advance the cursor after drawing this glyph.
    pub x_advance: u32,
}

impl Glyph {
    /// True when the glyph has no coverage at all (space).
    pub fn is_blank(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

// ── Font ─────────────────────────────────────────────────────────────────────

/// A bitmap font whose glyphs live in an atlas texture.
///
/// Atlas dimensions are stored so callers can normalise pixel coordinates to
/// UV coordinates: `u = glyph.x as f32 / font.texture_width as f32`.
#[derive(Debug, Clone)]
pub struct Font {
    /// All glyphs in this font, keyed by character.
    pub glyphs: HashMap<char, Glyph>,
    /// Vertical distance between successive lines in unscaled pixels.
    pub line_height: u32,
    /// Width of the backing texture atlas in pixels.
    pub texture_width: u32,
    /// Height of the backing texture atlas in pixels.
    pub texture_height: u32,
}

impl Font {
    /// Scale factor that turns unscaled atlas pixels into `font_size` pixels.
    pub fn scale(&self, font_size: f32) -> f32 {
        if self.line_height == 0 {
            return 0.0;
        }
        font_size / self.line_height as f32
    }

    /// Rendered width of `text` on a single line at `font_size`.
    ///
    /// Sums scaled advances; unknown characters and `'\n'` contribute nothing,
    /// matching what [`generate_text_mesh`] draws.
    pub fn measure(&self, text: &str, font_size: f32) -> f32 {
        let advance: u32 = text
            .chars()
            .filter_map(|ch| self.glyphs.get(&ch))
            .map(|g| g.x_advance)
            .sum();
        advance as f32 * self.scale(font_size)
    }
}

impl TextMeasure for Font {
    fn measure_text(&self, text: &str, font_size: f32) -> f32 {
        self.measure(text, font_size)
    }
}
