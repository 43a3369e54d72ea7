//! The fixed demo solid: four colored faces spanning a 200-unit cube

use crate::rasterizer::{Color, Triangle, Vec3};

/// Build the scene triangles in draw order
pub fn create_triangles() -> Vec<Triangle> {
    let a = Vec3::new(100.0, 100.0, 100.0);
    let b = Vec3::new(-100.0, -100.0, 100.0);
    let c = Vec3::new(-100.0, 100.0, -100.0);
    let d = Vec3::new(100.0, -100.0, -100.0);

    vec![
        Triangle::new(a, b, c, Color::WHITE),
        Triangle::new(a, b, d, Color::RED),
        Triangle::new(c, d, a, Color::GREEN),
        Triangle::new(c, d, b, Color::BLUE),
    ]
}
