//! The knot record consumed by the point-cache builder.
//!
//! Knots are owned and mutated by the authoring collaborator; this engine
//! only ever reads them through a `&[Knot]` slice with cyclic (modulo)
//! indexing. Rotation is canonicalized to a quaternion at the boundary:
//! sources that store Euler angles convert once via
//! [`Knot::from_euler_degrees`] instead of the engine branching on
//! representation.

use glam::{EulerRot, Quat, Vec3};

/// A control point of a closed-loop spline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knot {
    /// Position of the knot.
    pub position: Vec3,
    /// Orientation applied to the tangent handles (and to the forward axis
    /// for the velocity-based Hermite convention).
    pub rotation: Quat,
    /// Outgoing tangent handle, in the knot's local frame.
    pub tangent_out: Vec3,
    /// Incoming tangent handle, in the knot's local frame.
    pub tangent_in: Vec3,
    /// Scalar speed along the rotated forward axis (Hermite-specific).
    pub velocity: f32,
}

impl Knot {
    /// Creates a knot at `position` with identity rotation, zero tangents
    /// and zero velocity.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            tangent_out: Vec3::ZERO,
            tangent_in: Vec3::ZERO,
            velocity: 0.0,
        }
    }

    /// Creates a knot from an Euler-angle orientation.
    ///
    /// `euler_degrees` are Tait-Bryan angles in degrees around the X, Y and
    /// Z axes, applied in Z-X-Y order (Y-up convention). Storage layers that
    /// keep Euler angles should convert here; everything downstream sees
    /// only the quaternion.
    pub fn from_euler_degrees(position: Vec3, euler_degrees: Vec3) -> Self {
        let rotation = Quat::from_euler(
            EulerRot::YXZ,
            euler_degrees.y.to_radians(),
            euler_degrees.x.to_radians(),
            euler_degrees.z.to_radians(),
        );
        Self {
            rotation,
            ..Self::new(position)
        }
    }

    /// Returns the knot with symmetric tangent handles: `tangent` outgoing
    /// and its mirror incoming.
    pub fn with_tangent(mut self, tangent: Vec3) -> Self {
        self.tangent_out = tangent;
        self.tangent_in = -tangent;
        self
    }

    /// Returns the knot with independent tangent handles.
    pub fn with_tangents(mut self, tangent_out: Vec3, tangent_in: Vec3) -> Self {
        self.tangent_out = tangent_out;
        self.tangent_in = tangent_in;
        self
    }

    /// Returns the knot with the given scalar velocity.
    pub fn with_velocity(mut self, velocity: f32) -> Self {
        self.velocity = velocity;
        self
    }

    /// Outgoing tangent in world space.
    #[inline]
    pub fn world_tangent_out(&self) -> Vec3 {
        self.rotation * self.tangent_out
    }

    /// Incoming tangent in world space.
    #[inline]
    pub fn world_tangent_in(&self) -> Vec3 {
        self.rotation * self.tangent_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn euler_conversion_matches_axis_rotation() {
        // 90° yaw turns +Z into +X.
        let knot = Knot::from_euler_degrees(Vec3::ZERO, Vec3::new(0.0, 90.0, 0.0));
        let forward = knot.rotation * Vec3::Z;
        assert_abs_diff_eq!(forward, Vec3::X, epsilon = 1e-6);
    }

    #[test]
    fn world_tangents_rotate_handles() {
        let knot = Knot::from_euler_degrees(Vec3::ZERO, Vec3::new(0.0, 90.0, 0.0))
            .with_tangent(Vec3::new(0.0, 0.0, 2.0));
        assert_abs_diff_eq!(knot.world_tangent_out(), Vec3::new(2.0, 0.0, 0.0), epsilon = 1e-6);
        assert_abs_diff_eq!(knot.world_tangent_in(), Vec3::new(-2.0, 0.0, 0.0), epsilon = 1e-6);
    }
}
