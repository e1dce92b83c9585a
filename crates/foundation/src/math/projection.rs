use super::{Vec2, Vec3};

/// Pinhole camera projection for the particle renderers.
///
/// The camera sits on the negative z axis looking toward +z. A point's screen
/// offset and drawn radius are both multiplied by `focal_length /
/// (focal_length + z)`, so larger z means farther away and smaller.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pinhole {
    pub focal_length: f64,
    /// Points with `z <= -focal_length + near_margin` are behind the camera
    /// plane and are not projected.
    pub near_margin: f64,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projected {
    /// Screen-space offset from the projection center, in pixels.
    pub offset: Vec2,
    /// Scale factor that was applied; also applies to drawn radii.
    pub scale: f64,
}

impl Pinhole {
    pub fn new(focal_length: f64, near_margin: f64) -> Self {
        Self {
            focal_length,
            near_margin,
        }
    }

    /// Projects a camera-space point to a 2D offset, or `None` when the point
    /// is behind the camera plane.
    pub fn project(&self, point: Vec3) -> Option<Projected> {
        if point.z <= -self.focal_length + self.near_margin {
            return None;
        }
        let scale = self.focal_length / (self.focal_length + point.z);
        Some(Projected {
            offset: Vec2::new(point.x * scale, point.y * scale),
            scale,
        })
    }
}

/// Rotates a point around the vertical (y) axis.
pub fn rotate_y(v: Vec3, angle_rad: f64) -> Vec3 {
    let (sin, cos) = angle_rad.sin_cos();
    Vec3::new(v.x * cos - v.z * sin, v.y, v.z * cos + v.x * sin)
}

/// Moves `current` toward `target` by `fraction` of the remaining distance.
///
/// Pure exponential approach: the distance shrinks by a constant factor per
/// step, so it converges but never reaches exactly zero in finite steps for
/// `fraction` in (0, 1).
pub fn approach(current: Vec3, target: Vec3, fraction: f64) -> Vec3 {
    current + (target - current) * fraction
}

/// Depth fog opacity: nearer points (smaller z) are more opaque.
///
/// Maps z in [-radius, radius] onto [0, 1] and clamps to `[floor, 1]` so
/// distant points stay faintly visible instead of disappearing.
pub fn depth_fog_alpha(z: f64, radius: f64, floor: f64) -> f64 {
    let alpha = (z + radius) / (radius * 2.0);
    alpha.clamp(floor, 1.0)
}
