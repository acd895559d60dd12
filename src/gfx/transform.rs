//! Transform composer
//!
//! Builds the single model matrix for a draw from independent scale,
//! per-axis rotation, and translation inputs. The composition order is
//! fixed and significant:
//!
//! ```text
//! model = T * Rz * Ry * Rx * S
//! ```
//!
//! applied to column vectors, so a vertex is scaled first, rotated about X,
//! then Y, then Z, and finally translated. Rotations follow cgmath's
//! right-handed convention: positive angles turn counter-clockwise when
//! looking down the axis toward the origin, so rotating (0, 1, 0) by 90°
//! about X yields (0, 0, 1). There is no matrix stack or hierarchy; every
//! draw composes its matrix from scratch.

use cgmath::{Deg, Matrix4, Vector3};

/// Composes the model matrix from scale, per-axis rotation in degrees
/// (X, Y, Z), and position.
///
/// The three rotations are independent world-axis rotations, not a combined
/// axis-angle, so the fixed X-then-Y-then-Z application order matters for
/// non-trivial angle triples.
pub fn compose(
    scale: Vector3<f32>,
    rotation_degrees: Vector3<f32>,
    position: Vector3<f32>,
) -> Matrix4<f32> {
    let scale = Matrix4::from_nonuniform_scale(scale.x, scale.y, scale.z);
    let rotation_x = Matrix4::from_angle_x(Deg(rotation_degrees.x));
    let rotation_y = Matrix4::from_angle_y(Deg(rotation_degrees.y));
    let rotation_z = Matrix4::from_angle_z(Deg(rotation_degrees.z));
    let translation = Matrix4::from_translation(position);

    translation * rotation_z * rotation_y * rotation_x * scale
}
