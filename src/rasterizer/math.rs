//! Vector and matrix math for the orthographic pipeline
//!
//! Everything is f64 so shaded colors and depth ties come out the same as the
//! double-precision reference renders.

use std::ops::{Add, Mul, Sub};
use serde::{Deserialize, Serialize};

/// 3D Vector (used for both points and directions)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn len(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Divide by the Euclidean length.
    ///
    /// There is no zero-length guard: a degenerate triangle yields a NaN
    /// normal, which the rasterizer tolerates (its barycentrics are NaN too,
    /// so no pixel is ever covered).
    pub fn normalize(self) -> Vec3 {
        let l = self.len();
        Vec3 {
            x: self.x / l,
            y: self.y / l,
            z: self.z / l,
        }
    }

    pub fn scale(self, s: f64) -> Vec3 {
        Vec3 {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }

    /// Mirror a direction about a normal: `R = L - 2(L.N)N`
    pub fn reflect(self, normal: Vec3) -> Vec3 {
        self - normal.scale(2.0 * self.dot(normal))
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    fn mul(self, s: f64) -> Vec3 {
        self.scale(s)
    }
}

/// 3x3 matrix, nine values in row-major order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    pub values: [f64; 9],
}

impl Mat3 {
    pub const IDENTITY: Mat3 = Mat3 {
        values: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
    };

    pub const fn new(values: [f64; 9]) -> Self {
        Self { values }
    }

    /// Standard row-major product `self * other`
    pub fn compose(&self, other: &Mat3) -> Mat3 {
        let mut result = [0.0; 9];
        for row in 0..3 {
            for col in 0..3 {
                for i in 0..3 {
                    result[row * 3 + col] += self.values[row * 3 + i] * other.values[i * 3 + col];
                }
            }
        }
        Mat3 { values: result }
    }

    /// Transform a vector: `out_i = sum_k v_k * m[k*3 + i]`.
    ///
    /// Note the index mapping walks columns of the stored rows, so the stored
    /// layout behaves column-major here. No translation component.
    pub fn transform(&self, v: Vec3) -> Vec3 {
        let m = &self.values;
        Vec3 {
            x: v.x * m[0] + v.y * m[3] + v.z * m[6],
            y: v.x * m[1] + v.y * m[4] + v.z * m[7],
            z: v.x * m[2] + v.y * m[5] + v.z * m[8],
        }
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Mat3::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert!((a.dot(b) - 32.0).abs() < 1e-12);
    }

    #[test]
    fn test_vec3_cross() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 1.0, 0.0);
        let c = a.cross(b);
        assert_eq!(c, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_normalize_unit_length() {
        let n = Vec3::new(3.0, 0.0, 4.0).normalize();
        assert!((n.len() - 1.0).abs() < 1e-12);
        assert!((n.x - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_zero_is_nan() {
        let n = Vec3::ZERO.normalize();
        assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
    }

    #[test]
    fn test_reflect_about_normal() {
        let light = Vec3::new(0.0, 0.0, -1.0);
        let r = light.reflect(Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(r, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_compose_row_major() {
        let a = Mat3::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let b = Mat3::new([9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
        let c = a.compose(&b);
        assert_eq!(
            c.values,
            [30.0, 24.0, 18.0, 84.0, 69.0, 54.0, 138.0, 114.0, 90.0]
        );
        assert_eq!(Mat3::IDENTITY.compose(&a), a);
    }

    #[test]
    fn test_transform_index_mapping() {
        let m = Mat3::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        // x picks m[0], m[1], m[2] as the first column of the output
        assert_eq!(m.transform(Vec3::new(1.0, 0.0, 0.0)), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.transform(Vec3::new(0.0, 0.0, 1.0)), Vec3::new(7.0, 8.0, 9.0));
        assert_eq!(m.transform(Vec3::new(1.0, 1.0, 1.0)), Vec3::new(12.0, 15.0, 18.0));
    }
}
