use foundation::color::Rgba;

/// Tunables for the assembling-globe animation.
///
/// The approach fraction and shockwave band are empirical constants with
/// only visual justification; nothing depends on their exact values beyond
/// convergence (fraction in (0, 1)) and a bounded pulse width.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    /// Resting sphere radius, in camera-space units.
    pub globe_radius: f64,
    pub focal_length: f64,
    /// Clip margin in front of the camera plane.
    pub near_margin: f64,
    /// Edge length of the cube initial positions are scattered in.
    pub explosion_extent: f64,
    /// Fraction of the remaining distance covered per frame.
    pub approach_fraction: f64,
    pub particle_size_min_px: f64,
    pub particle_size_max_px: f64,
    /// Share of particles drawn in the accent color.
    pub accent_ratio: f64,
    /// Engine time units added per frame.
    pub time_step: f64,
    /// Rotation speed (radians per time unit) while still forming.
    pub forming_spin: f64,
    /// Rotation speed once the caller reports the globe assembled.
    pub assembled_spin: f64,
    pub shockwave_frequency: f64,
    /// Vertical half-extent of the shockwave band, in camera-space units.
    pub shockwave_band: f64,
    pub grid_spacing_px: f64,
    /// Grid scroll speed, pixels per time unit.
    pub grid_drift: f64,
    /// Minimum depth-fog opacity so far particles stay faintly visible.
    pub fog_floor: f64,
    /// Per-particle, per-frame probability of a cosmetic connection line.
    pub link_chance: f64,
    /// Jitter of the line endpoint around the viewport center, in pixels.
    pub link_jitter_px: f64,
    /// The projection center sits this many pixels above the viewport middle.
    pub center_lift_px: f64,
    /// Frames before the one-shot ready signal fires.
    pub ready_after_frames: u64,
    pub rng_seed: u64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 1200,
            globe_radius: 180.0,
            focal_length: 400.0,
            near_margin: 10.0,
            explosion_extent: 2000.0,
            approach_fraction: 0.05,
            particle_size_min_px: 0.5,
            particle_size_max_px: 2.0,
            accent_ratio: 0.2,
            time_step: 1.0,
            forming_spin: 0.002,
            assembled_spin: 0.005,
            shockwave_frequency: 0.05,
            shockwave_band: 20.0,
            grid_spacing_px: 60.0,
            grid_drift: 0.5,
            fog_floor: 0.1,
            link_chance: 0.02,
            link_jitter_px: 20.0,
            center_lift_px: 50.0,
            ready_after_frames: 240,
            rng_seed: 0x0b5e_7a70,
        }
    }
}

/// Colors of the landing animation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FieldPalette {
    pub background_center: Rgba,
    pub background_edge: Rgba,
    pub grid: Rgba,
    pub primary: Rgba,
    pub accent: Rgba,
    pub shockwave_fill: Rgba,
    pub shockwave_glow: Rgba,
    pub link: Rgba,
}

impl Default for FieldPalette {
    fn default() -> Self {
        let accent = Rgba::from_u8(139, 92, 246);
        Self {
            background_center: Rgba::from_u8(15, 23, 42),
            background_edge: Rgba::BLACK,
            grid: accent.with_alpha(0.05),
            primary: Rgba::WHITE,
            accent,
            shockwave_fill: Rgba::WHITE,
            shockwave_glow: accent,
            link: accent,
        }
    }
}
