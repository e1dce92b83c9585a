use catalog::MapCoordinates;
use foundation::color::Rgba;

/// Fixed rectangular map region that tints markers regardless of faction.
///
/// The bounds are empirical constants inherited from the hosted map art;
/// membership is strict (x must exceed `min_x`, y must stay below `max_y`).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PollutionZone {
    pub min_x: f64,
    pub max_y: f64,
}

impl PollutionZone {
    pub fn contains(&self, coordinates: MapCoordinates) -> bool {
        coordinates.x > self.min_x && coordinates.y < self.max_y
    }
}

/// Tunables for the map renderer and its hit-testing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MapConfig {
    pub grid_spacing_px: f64,
    /// Engine time units added per frame.
    pub time_step: f64,
    /// Amplitude of the slow grid drift, in pixels.
    pub parallax_amplitude_px: f64,
    pub parallax_rate: f64,
    /// Marker pulse angular rate, radians per time unit.
    pub pulse_rate: f64,
    pub pulse_amplitude_px: f64,
    pub glow_radius_px: f64,
    pub core_radius_px: f64,
    pub label_offset_x_px: f64,
    pub label_offset_y_px: f64,
    pub label_size_px: f64,
    /// Markers are labeled only when resonance exceeds this.
    pub label_min_resonance: f64,
    /// Click-to-marker distance for entity selection.
    pub hit_radius_px: f64,
    pub pollution_zone: PollutionZone,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            grid_spacing_px: 40.0,
            time_step: 0.02,
            parallax_amplitude_px: 10.0,
            parallax_rate: 0.1,
            pulse_rate: 2.0,
            pulse_amplitude_px: 3.0,
            glow_radius_px: 8.0,
            core_radius_px: 3.0,
            label_offset_x_px: 12.0,
            label_offset_y_px: 3.0,
            label_size_px: 10.0,
            label_min_resonance: 50.0,
            hit_radius_px: 20.0,
            pollution_zone: PollutionZone {
                min_x: 70.0,
                max_y: 40.0,
            },
        }
    }
}

/// Colors of the map view.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MapPalette {
    pub background: Rgba,
    pub grid: Rgba,
    pub grid_targeting: Rgba,
    /// Cool-toned decorative zone overlay, lower left.
    pub union_zone: Rgba,
    /// Warning-toned decorative zone overlay, upper right.
    pub pollution_zone: Rgba,
    pub union_core: Rgba,
    pub union_glow: Rgba,
    pub rscp_core: Rgba,
    pub rscp_glow: Rgba,
    pub observer_core: Rgba,
    pub observer_glow: Rgba,
    /// Glow override inside the pollution zone, any faction.
    pub pollution_glow: Rgba,
    pub label: Rgba,
    pub vignette_edge: Rgba,
}

impl Default for MapPalette {
    fn default() -> Self {
        Self {
            background: Rgba::from_u8(5, 5, 5),
            grid: Rgba::WHITE.with_alpha(0.03),
            grid_targeting: Rgba::from_u8(139, 92, 246).with_alpha(0.15),
            union_zone: Rgba::from_u8(15, 23, 42).with_alpha(0.4),
            pollution_zone: Rgba::from_u8(127, 29, 29).with_alpha(0.15),
            union_core: Rgba::from_u8(59, 130, 246),
            union_glow: Rgba::from_u8(59, 130, 246).with_alpha(0.3),
            rscp_core: Rgba::from_u8(226, 232, 240),
            rscp_glow: Rgba::from_u8(226, 232, 240).with_alpha(0.3),
            observer_core: Rgba::from_u8(167, 139, 250),
            observer_glow: Rgba::from_u8(139, 92, 246).with_alpha(0.3),
            pollution_glow: Rgba::from_u8(239, 68, 68).with_alpha(0.3),
            label: Rgba::WHITE.with_alpha(0.5),
            vignette_edge: Rgba::BLACK.with_alpha(0.8),
        }
    }
}
