//! Core rendering functions
//! Orthographic triangle rasterization with a z-buffer and supersampling

use super::camera::camera_transform;
use super::lighting::{compute_lighting, shade};
use super::math::{Mat3, Vec3};
use super::types::{Color, Triangle};
use super::view::ViewState;
use super::SUPERSAMPLING_FACTOR;

/// Supersampled working canvas: RGBA color plus one depth per pixel.
///
/// Depth follows a larger-wins convention and starts at negative infinity.
pub struct Framebuffer {
    pub pixels: Vec<u8>,   // RGBA, 4 bytes per pixel
    pub zbuffer: Vec<f64>, // Depth buffer
    pub width: usize,
    pub height: usize,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height * 4],
            zbuffer: vec![f64::NEG_INFINITY; width * height],
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: Color) {
        let bytes = color.to_bytes();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&bytes);
        }
        self.zbuffer.fill(f64::NEG_INFINITY);
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Color {
        let idx = (y * self.width + x) * 4;
        Color::from_bytes([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ])
    }

    pub fn depth(&self, x: usize, y: usize) -> f64 {
        self.zbuffer[y * self.width + x]
    }

    /// Write `color` only if `z` is strictly greater than the stored depth.
    /// Ties keep the earlier pixel.
    pub fn set_pixel_with_depth(&mut self, x: usize, y: usize, z: f64, color: Color) -> bool {
        if x < self.width && y < self.height {
            let idx = y * self.width + x;
            if self.zbuffer[idx] < z {
                self.zbuffer[idx] = z;
                let pixel_idx = idx * 4;
                self.pixels[pixel_idx..pixel_idx + 4].copy_from_slice(&color.to_bytes());
                return true;
            }
        }
        false
    }

    /// Box-filter down by an integer factor, averaging each factor x factor block
    pub fn downsample(&self, factor: usize) -> Frame {
        debug_assert!(factor > 0, "downsample factor must be positive");
        let width = self.width / factor;
        let height = self.height / factor;
        let samples = (factor * factor) as u32;

        let mut pixels = Vec::with_capacity(width * height * 4);
        for y in 0..height {
            for x in 0..width {
                let mut sum = [0u32; 4];
                for sy in 0..factor {
                    let row = (y * factor + sy) * self.width;
                    for sx in 0..factor {
                        let idx = (row + x * factor + sx) * 4;
                        for (c, total) in sum.iter_mut().enumerate() {
                            *total += self.pixels[idx + c] as u32;
                        }
                    }
                }
                pixels.extend(sum.iter().map(|total| ((total + samples / 2) / samples) as u8));
            }
        }

        Frame { width, height, pixels }
    }
}

/// Final output image at display resolution
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>, // RGBA, 4 bytes per pixel
}

impl Frame {
    pub fn get_pixel(&self, x: usize, y: usize) -> Color {
        let idx = (y * self.width + x) * 4;
        Color::from_bytes([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ])
    }
}

/// Projected triangle ready for rasterization
#[derive(Debug, Clone, Copy)]
pub struct Surface {
    pub v1: Vec3, // Screen-space vertex 1
    pub v2: Vec3, // Screen-space vertex 2
    pub v3: Vec3, // Screen-space vertex 3
    pub normal: Vec3,
}

/// Inclusive pixel bounds; empty when min > max
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

/// Scale by zoom and offset by pan, both in supersampled units. z is untouched.
pub fn apply_zoom(v: Vec3, zoom: f64, pan_x: f64, pan_y: f64) -> Vec3 {
    let scale = zoom * SUPERSAMPLING_FACTOR as f64;
    Vec3 {
        x: v.x * scale + pan_x * SUPERSAMPLING_FACTOR as f64,
        y: v.y * scale + pan_y * SUPERSAMPLING_FACTOR as f64,
        z: v.z,
    }
}

/// Move the origin to the canvas center (integer half extents)
pub fn translate_to_screen(v: Vec3, width: usize, height: usize) -> Vec3 {
    Vec3 {
        x: v.x + (width / 2) as f64,
        y: v.y + (height / 2) as f64,
        z: v.z,
    }
}

/// Camera transform, then zoom/pan, then screen translation
pub fn project_vertex(v: Vec3, transform: &Mat3, view: &ViewState, width: usize, height: usize) -> Vec3 {
    let rotated = transform.transform(v);
    let zoomed = apply_zoom(rotated, view.zoom, view.pan_x, view.pan_y);
    translate_to_screen(zoomed, width, height)
}

/// Unit face normal from the edges leaving v1 (NaN for degenerate faces)
pub fn face_normal(v1: Vec3, v2: Vec3, v3: Vec3) -> Vec3 {
    (v2 - v1).cross(v3 - v1).normalize()
}

/// Twice the signed area; shared denominator for all barycentrics of a triangle
pub fn signed_area(v1: Vec3, v2: Vec3, v3: Vec3) -> f64 {
    (v1.y - v3.y) * (v2.x - v3.x) + (v2.y - v3.y) * (v3.x - v1.x)
}

/// Barycentric weights of (x, y) against a precomputed `signed_area`
pub fn barycentric(x: f64, y: f64, v1: Vec3, v2: Vec3, v3: Vec3, area: f64) -> (f64, f64, f64) {
    let b1 = ((y - v3.y) * (v2.x - v3.x) + (v2.y - v3.y) * (v3.x - x)) / area;
    let b2 = ((y - v1.y) * (v3.x - v1.x) + (v3.y - v1.y) * (v1.x - x)) / area;
    let b3 = ((y - v2.y) * (v1.x - v2.x) + (v1.y - v2.y) * (v2.x - x)) / area;
    (b1, b2, b3)
}

/// Pixel bounds of a surface clipped to the canvas (ceil low edge, floor high edge)
pub fn compute_bounds(surface: &Surface, width: usize, height: usize) -> Bounds {
    let (v1, v2, v3) = (surface.v1, surface.v2, surface.v3);
    let min_x = v1.x.min(v2.x).min(v3.x).ceil().max(0.0);
    let max_x = v1.x.max(v2.x).max(v3.x).floor().min(width as f64 - 1.0);
    let min_y = v1.y.min(v2.y).min(v3.y).ceil().max(0.0);
    let max_y = v1.y.max(v2.y).max(v3.y).floor().min(height as f64 - 1.0);

    Bounds {
        min_x: min_x as i64,
        max_x: max_x as i64,
        min_y: min_y as i64,
        max_y: max_y as i64,
    }
}

fn inside_unit(b: f64) -> bool {
    (0.0..=1.0).contains(&b)
}

/// Rasterize a single triangle. Returns the number of pixels written.
///
/// Coverage uses the closed interval [0, 1] on every weight, so pixels on a
/// shared edge belong to both triangles and go to whichever is deeper.
pub fn rasterize_triangle(fb: &mut Framebuffer, surface: &Surface, color: Color, angle_cos: f64) -> usize {
    let bounds = compute_bounds(surface, fb.width, fb.height);
    let area = signed_area(surface.v1, surface.v2, surface.v3);
    let pixel_color = Color { a: 255, ..shade(color, angle_cos) };
    let mut written = 0;

    for y in bounds.min_y..=bounds.max_y {
        for x in bounds.min_x..=bounds.max_x {
            let (b1, b2, b3) = barycentric(x as f64, y as f64, surface.v1, surface.v2, surface.v3, area);
            if inside_unit(b1) && inside_unit(b2) && inside_unit(b3) {
                let depth = b1 * surface.v1.z + b2 * surface.v2.z + b3 * surface.v3.z;
                if fb.set_pixel_with_depth(x as usize, y as usize, depth, pixel_color) {
                    written += 1;
                }
            }
        }
    }

    written
}

/// Build the screen-space surface for one scene triangle
pub fn project_triangle(tri: &Triangle, transform: &Mat3, view: &ViewState, width: usize, height: usize) -> Surface {
    let v1 = project_vertex(tri.v1, transform, view, width, height);
    let v2 = project_vertex(tri.v2, transform, view, width, height);
    let v3 = project_vertex(tri.v3, transform, view, width, height);
    Surface {
        v1,
        v2,
        v3,
        normal: face_normal(v1, v2, v3),
    }
}

/// Rasterize every triangle in input order (no sorting; the z-buffer decides)
pub fn render_triangles(fb: &mut Framebuffer, tris: &[Triangle], transform: &Mat3, view: &ViewState) {
    for (i, tri) in tris.iter().enumerate() {
        let surface = project_triangle(tri, transform, view, fb.width, fb.height);
        let angle_cos = surface.normal.z.abs();
        let lit = compute_lighting(tri.color, surface.normal, view.lighting);
        let written = rasterize_triangle(fb, &surface, lit, angle_cos);
        log::trace!("triangle {}: normal={:?} lit={:?} pixels={}", i, surface.normal, lit, written);
    }
}

/// Render into a fresh supersampled framebuffer for a `width x height` display
pub fn render_supersampled(tris: &[Triangle], view: &ViewState, width: usize, height: usize, background: Color) -> Framebuffer {
    let transform = camera_transform(view.heading, view.pitch);
    let mut fb = Framebuffer::new(width * SUPERSAMPLING_FACTOR, height * SUPERSAMPLING_FACTOR);
    fb.clear(background);
    render_triangles(&mut fb, tris, &transform, view);
    fb
}

/// Render one frame at display resolution. Nothing is cached between calls.
pub fn render_frame(tris: &[Triangle], view: &ViewState, width: usize, height: usize, background: Color) -> Frame {
    let fb = render_supersampled(tris, view, width, height, background);
    log::debug!(
        "rendered {}x{} (x{}) heading={} pitch={} zoom={:.2} mode={}",
        width,
        height,
        SUPERSAMPLING_FACTOR,
        view.heading,
        view.pitch,
        view.zoom,
        view.lighting.name()
    );
    fb.downsample(SUPERSAMPLING_FACTOR)
}
