//! Orthographic camera: heading (yaw) then pitch, no roll and no perspective

use super::math::Mat3;

/// Rotation about the vertical axis
pub fn heading_matrix(heading_deg: f64) -> Mat3 {
    let (s, c) = heading_deg.to_radians().sin_cos();
    Mat3::new([
        c, 0.0, s,
        0.0, 1.0, 0.0,
        -s, 0.0, c,
    ])
}

/// Rotation about the horizontal axis
pub fn pitch_matrix(pitch_deg: f64) -> Mat3 {
    let (s, c) = pitch_deg.to_radians().sin_cos();
    Mat3::new([
        1.0, 0.0, 0.0,
        0.0, c, s,
        0.0, -s, c,
    ])
}

/// Build the camera transform `heading * pitch` from integer degree angles
pub fn camera_transform(heading: i32, pitch: i32) -> Mat3 {
    heading_matrix(heading as f64).compose(&pitch_matrix(pitch as f64))
}
