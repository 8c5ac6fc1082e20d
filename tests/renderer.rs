use zombie_room::engine::{Color, EngineBuilder, FixedStep};
use zombie_room::renderer::pipeline::{QuadVertex, orthographic_projection};
use zombie_room::renderer::{MIN_BUFFER_BYTES, PROJECTION_USAGE, builtin_font, fnv1a_64, grown_capacity};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

/// Apply a column-major 4×4 matrix to `(x, y, 0, 1)`.
fn project(m: &[f32; 16], x: f32, y: f32) -> (f32, f32) {
    (m[0] * x + m[4] * y + m[12], m[1] * x + m[5] * y + m[13])
}

// ── Projection ───────────────────────────────────────────────────────────────

#[test]
fn projection_maps_screen_corners_to_clip_space() {
    let m = orthographic_projection(800.0, 600.0);
    let (x0, y0) = project(&m, 0.0, 0.0);
    let (x1, y1) = project(&m, 800.0, 600.0);
    assert!(approx(x0, -1.0) && approx(y0, 1.0));
    assert!(approx(x1, 1.0) && approx(y1, -1.0));
}

#[test]
fn projection_centre_is_origin() {
    let m = orthographic_projection(800.0, 600.0);
    let (x, y) = project(&m, 400.0, 300.0);
    assert!(approx(x, 0.0) && approx(y, 0.0));
}

#[test]
fn projection_uniform_is_static_and_fits_a_mat4() {
    assert!(PROJECTION_USAGE.contains(wgpu::BufferUsages::UNIFORM));
    assert!(!PROJECTION_USAGE.contains(wgpu::BufferUsages::COPY_DST));
    let m = orthographic_projection(800.0, 600.0);
    assert_eq!(bytemuck::cast_slice::<f32, u8>(&m).len(), 64);
}

// ── Vertex layout ────────────────────────────────────────────────────────────

#[test]
fn quad_vertex_is_tightly_packed() {
    assert_eq!(std::mem::size_of::<QuadVertex>(), 32);
    assert_eq!(QuadVertex::layout().array_stride, 32);
    assert_eq!(QuadVertex::layout().attributes.len(), 3);
}

#[test]
fn quad_vertices_cast_to_bytes() {
    let v = [QuadVertex { position: [1.0, 2.0], uv: [0.5, 0.5], color: [1.0; 4] }; 2];
    let bytes: &[u8] = bytemuck::cast_slice(&v);
    assert_eq!(bytes.len(), 64);
}

// ── Buffer helpers ───────────────────────────────────────────────────────────

#[test]
fn fnv1a_known_values() {
    assert_eq!(fnv1a_64(b""), 0xcbf2_9ce4_8422_2325);
    assert_eq!(fnv1a_64(b"a"), 0xaf63_dc4c_8601_ec8c);
}

#[test]
fn fnv1a_detects_changes() {
    assert_ne!(fnv1a_64(&[1, 2, 3]), fnv1a_64(&[1, 2, 4]));
    assert_eq!(fnv1a_64(&[9; 100]), fnv1a_64(&[9; 100]));
}

#[test]
fn capacity_has_a_floor_and_grows_by_powers_of_two() {
    assert_eq!(grown_capacity(0), MIN_BUFFER_BYTES);
    assert_eq!(grown_capacity(100), MIN_BUFFER_BYTES);
    assert_eq!(grown_capacity(4096), 4096);
    assert_eq!(grown_capacity(4097), 8192);
    assert_eq!(grown_capacity(100_000), 131_072);
}

// ── Atlas ────────────────────────────────────────────────────────────────────

#[test]
fn atlas_has_expected_size() {
    let img = builtin_font::atlas_image();
    assert_eq!(img.dimensions(), (builtin_font::ATLAS_WIDTH, builtin_font::ATLAS_HEIGHT));
    assert_eq!(img.dimensions(), (96, 60));
}

#[test]
fn solid_texel_is_opaque_white() {
    let img = builtin_font::atlas_image();
    let [u, v] = builtin_font::solid_uv();
    let px = img.get_pixel((u * 96.0) as u32, (v * 60.0) as u32);
    assert_eq!(px.0, [255, 255, 255, 255]);
}

#[test]
fn space_cell_is_transparent() {
    let img = builtin_font::atlas_image();
    for y in 0..10 {
        for x in 0..6 {
            assert_eq!(img.get_pixel(x, y).0[3], 0, "pixel ({x}, {y}) of ' ' is covered");
        }
    }
}

#[test]
fn exclamation_mark_is_a_centre_column() {
    // '!' is cell 1 at (6, 0); its top row has only the middle pixel set.
    let img = builtin_font::atlas_image();
    assert_eq!(img.get_pixel(8, 1).0[3], 255);
    assert_eq!(img.get_pixel(6, 1).0[3], 0);
    assert_eq!(img.get_pixel(10, 1).0[3], 0);
    // gap row before the dot
    assert_eq!(img.get_pixel(8, 6).0[3], 0);
    assert_eq!(img.get_pixel(8, 7).0[3], 255);
}

// ── Colour ───────────────────────────────────────────────────────────────────

#[test]
fn rgb8_normalises_channels() {
    assert_eq!(Color::rgb8(255, 0, 0), Color([1.0, 0.0, 0.0, 1.0]));
    assert!(approx(Color::RAYWHITE.0[0], 245.0 / 255.0));
    assert_eq!(Color::BLACK, Color::rgb8(0, 0, 0));
}

// ── Fixed timestep ───────────────────────────────────────────────────────────

#[test]
fn fixed_step_accumulates_partial_frames() {
    let mut clock = FixedStep::new(0.1);
    assert_eq!(clock.advance(0.05), 0);
    assert_eq!(clock.advance(0.06), 1);
    assert_eq!(clock.advance(0.2), 2);
}

#[test]
fn fixed_step_caps_long_pauses() {
    let mut clock = FixedStep::new(0.01);
    let ticks = clock.advance(10.0);
    assert!(ticks <= 25, "replayed {ticks} ticks");
    assert!(ticks >= 24);
}

#[test]
fn builder_fixed_dt_from_ups() {
    assert!(approx(EngineBuilder::default().fixed_dt(), 1.0 / 60.0));
    assert!(approx(EngineBuilder::default().with_ups(0).fixed_dt(), 1.0));
    assert!(approx(EngineBuilder::default().with_ups(120).fixed_dt(), 1.0 / 120.0));
}
