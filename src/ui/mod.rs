// ── UI drawing: canvas capability, quad batch, dialogue box ──────────────────

pub mod text_layout;

pub use text_layout::{LaidOutLine, TextMeasure, line_capacity, word_count, wrap_text_boxed};

use crate::config::DialogueStyle;
use crate::engine::Color;
use crate::geometry::Rect;
use crate::renderer::pipeline::QuadVertex;
use crate::renderer::text::{Font, generate_text_mesh};

/// The drawing surface the scene talks to. Later calls cover earlier ones.
pub trait Canvas: TextMeasure {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Outline drawn inside `rect`, `thickness` pixels wide.
    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color);
    /// `(x, y)` is the top-left of the text block.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color);
}

/// The four bands of an inside outline: top, bottom, left, right. The side
/// bands span only the gap between top and bottom so no pixel is covered twice.
pub fn outline_bands(rect: Rect, thickness: f32) -> [Rect; 4] {
    let t = thickness.min(rect.w / 2.0).min(rect.h / 2.0).max(0.0);
    [
        Rect::new(rect.x, rect.y, rect.w, t),
        Rect::new(rect.x, rect.bottom() - t, rect.w, t),
        Rect::new(rect.x, rect.y + t, t, rect.h - 2.0 * t),
        Rect::new(rect.right() - t, rect.y + t, t, rect.h - 2.0 * t),
    ]
}

// ── DrawList ──────────────────────────────────────────────────────────────────

/// Plain-data quad batch for one frame. Shapes and glyphs share a single
/// vertex/index buffer so draw order is exactly call order. Holds no GPU state.
pub struct DrawList {
    pub font: Font,
    /// Atlas UV of a fully opaque white texel; used for untextured shapes.
    pub solid_uv: [f32; 2],
    pub vertices: Vec<QuadVertex>,
    pub indices: Vec<u32>,
}

impl DrawList {
    pub fn new(font: Font, solid_uv: [f32; 2]) -> Self {
        Self { font, solid_uv, vertices: Vec::new(), indices: Vec::new() }
    }

    /// Clear accumulated geometry. Call once per frame before drawing.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    /// Number of quads queued so far.
    pub fn quad_count(&self) -> usize {
        self.indices.len() / 6
    }

    fn push_mesh(&mut self, vertices: &[QuadVertex], indices: &[u32]) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(vertices);
        self.indices.extend(indices.iter().map(|i| i + base));
    }
}

impl TextMeasure for DrawList {
    fn measure_text(&self, text: &str, font_size: f32) -> f32 {
        self.font.measure(text, font_size)
    }
}

impl Canvas for DrawList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.w <= 0.0 || rect.h <= 0.0 {
            return;
        }
        let uv = self.solid_uv;
        let c = color.0;
        let (x0, y0, x1, y1) = (rect.x, rect.y, rect.right(), rect.bottom());
        let quad = [
            QuadVertex { position: [x0, y0], uv, color: c },
            QuadVertex { position: [x1, y0], uv, color: c },
            QuadVertex { position: [x0, y1], uv, color: c },
            QuadVertex { position: [x1, y1], uv, color: c },
        ];
        self.push_mesh(&quad, &[0, 1, 2, 1, 3, 2]);
    }

    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color) {
        for band in outline_bands(rect, thickness) {
            self.fill_rect(band, color);
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        let (verts, idxs) = generate_text_mesh(text, &self.font, [x, y], font_size, color.0);
        self.push_mesh(&verts, &idxs);
    }
}

// ── Boxed text & dialogue ─────────────────────────────────────────────────────

/// Wrap `text` into `bounds` and draw each line at the left edge.
/// Returns the number of lines drawn. Logs at debug level when words had to
/// be dropped to fit the box.
pub fn draw_text_boxed<C: Canvas + ?Sized>(
    canvas: &mut C,
    text: &str,
    bounds: Rect,
    font_size: f32,
    line_spacing: f32,
    color: Color,
) -> usize {
    let lines = wrap_text_boxed(text, bounds, font_size, line_spacing, &*canvas);
    let total_words = text.split(' ').count();
    if word_count(&lines) < total_words {
        log::debug!(
            "text cut to {} of {total_words} words, box holds {} lines",
            word_count(&lines),
            line_capacity(bounds.h, font_size + line_spacing)
        );
    }
    for line in &lines {
        canvas.draw_text(&line.text, bounds.x, line.y, font_size, color);
    }
    lines.len()
}

/// Outer frame of the dialogue box: full width minus margins, resting on the
/// bottom margin.
pub fn dialogue_frame(screen_w: f32, screen_h: f32, style: &DialogueStyle) -> Rect {
    Rect::new(
        style.margin,
        screen_h - style.box_height - style.margin,
        screen_w - 2.0 * style.margin,
        style.box_height,
    )
}

/// Area the dialogue text is wrapped into.
pub fn dialogue_text_bounds(frame: Rect, style: &DialogueStyle) -> Rect {
    Rect::new(
        frame.x + style.padding,
        frame.y + style.padding,
        frame.w - 2.0 * style.padding,
        frame.h - 2.0 * style.padding,
    )
}

/// Light box with a thin dark border and the wrapped message inside.
pub fn draw_dialogue_box<C: Canvas + ?Sized>(
    canvas: &mut C,
    message: &str,
    screen_w: f32,
    screen_h: f32,
    style: &DialogueStyle,
) {
    let frame = dialogue_frame(screen_w, screen_h, style);
    canvas.fill_rect(frame, Color::RAYWHITE);
    canvas.stroke_rect(frame, 1.0, Color::BLACK);

    draw_text_boxed(
        canvas,
        message,
        dialogue_text_bounds(frame, style),
        style.font_size,
        style.line_spacing,
        Color::BLACK,
    );
}
