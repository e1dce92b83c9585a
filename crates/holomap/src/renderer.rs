use catalog::{EntityRecord, Faction};
use foundation::color::Rgba;
use foundation::math::Vec2;
use foundation::time::Clock;
use surface::{DrawList, Paint, RadialGradient, Viewport};

use crate::config::{MapConfig, MapPalette};

/// Per-frame marker accounting, for metrics and tests.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct MarkerStats {
    pub drawn: usize,
    /// Records without usable coordinates; they never block the frame.
    pub skipped: usize,
    pub labeled: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapFrame {
    pub draw_list: DrawList,
    pub stats: MarkerStats,
}

/// Renders archive rows as glowing markers over a grid and zone overlays.
///
/// Markers are derived from the caller's records every frame and never
/// stored; the record slice is read-only from the renderer's perspective.
#[derive(Debug, Clone)]
pub struct Holomap {
    config: MapConfig,
    palette: MapPalette,
    clock: Clock,
}

impl Holomap {
    pub fn new(config: MapConfig) -> Self {
        Self::with_palette(config, MapPalette::default())
    }

    pub fn with_palette(config: MapConfig, palette: MapPalette) -> Self {
        Self {
            clock: Clock::new(config.time_step),
            config,
            palette,
        }
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn palette(&self) -> &MapPalette {
        &self.palette
    }

    /// Draws one frame: background, grid (tinted while targeting), the two
    /// decorative zone overlays, every marker, then the vignette on top.
    pub fn render_frame(
        &mut self,
        viewport: Viewport,
        entities: &[EntityRecord],
        targeting: bool,
    ) -> MapFrame {
        let time = self.clock.tick().0;

        let mut list = DrawList::new();
        let mut stats = MarkerStats::default();
        if viewport.is_degenerate() {
            return MapFrame {
                draw_list: list,
                stats,
            };
        }

        list.clear_with(Paint::Solid(self.palette.background));
        self.draw_grid(&mut list, viewport, time, targeting);
        self.draw_zones(&mut list, viewport);

        for entity in entities {
            let Some(coordinates) = entity.coordinates else {
                stats.skipped += 1;
                continue;
            };
            let position = Vec2::new(
                coordinates.x / 100.0 * viewport.width_px,
                coordinates.y / 100.0 * viewport.height_px,
            );

            let core = self.core_color(entity.faction);
            let glow = if self.config.pollution_zone.contains(coordinates) {
                self.palette.pollution_glow
            } else {
                self.glow_color(entity.faction)
            };

            let pulse = (time * self.config.pulse_rate + pulse_phase(&entity.id)).sin()
                * self.config.pulse_amplitude_px;
            list.circle(position, self.config.glow_radius_px + pulse, glow);
            list.circle(position, self.config.core_radius_px, core);

            if entity.resonance > self.config.label_min_resonance {
                let anchor = position
                    + Vec2::new(self.config.label_offset_x_px, self.config.label_offset_y_px);
                list.text(
                    anchor,
                    entity.id.to_uppercase(),
                    self.palette.label,
                    self.config.label_size_px,
                );
                stats.labeled += 1;
            }
            stats.drawn += 1;
        }

        self.draw_vignette(&mut list, viewport);

        MapFrame {
            draw_list: list,
            stats,
        }
    }

    pub fn core_color(&self, faction: Faction) -> Rgba {
        match faction {
            Faction::Union => self.palette.union_core,
            Faction::Rscp => self.palette.rscp_core,
            Faction::Observer => self.palette.observer_core,
        }
    }

    pub fn glow_color(&self, faction: Faction) -> Rgba {
        match faction {
            Faction::Union => self.palette.union_glow,
            Faction::Rscp => self.palette.rscp_glow,
            Faction::Observer => self.palette.observer_glow,
        }
    }

    fn draw_grid(&self, list: &mut DrawList, viewport: Viewport, time: f64, targeting: bool) {
        let spacing = self.config.grid_spacing_px;
        let amplitude = self.config.parallax_amplitude_px;
        let offset_x = ((time * self.config.parallax_rate).sin() * amplitude) % spacing;
        let offset_y = ((time * self.config.parallax_rate).cos() * amplitude) % spacing;
        let tint = if targeting {
            self.palette.grid_targeting
        } else {
            self.palette.grid
        };

        let mut x = 0.0;
        while x <= viewport.width_px {
            list.line(
                Vec2::new(x + offset_x, 0.0),
                Vec2::new(x + offset_x, viewport.height_px),
                tint,
                1.0,
            );
            x += spacing;
        }
        let mut y = 0.0;
        while y <= viewport.height_px {
            list.line(
                Vec2::new(0.0, y + offset_y),
                Vec2::new(viewport.width_px, y + offset_y),
                tint,
                1.0,
            );
            y += spacing;
        }
    }

    fn draw_zones(&self, list: &mut DrawList, viewport: Viewport) {
        let full = Vec2::new(viewport.width_px, viewport.height_px);
        let origin = Vec2::new(0.0, 0.0);

        // Cool-toned control zone, lower left.
        let union = RadialGradient::new(
            Vec2::new(viewport.width_px * 0.25, viewport.height_px * 0.75),
            50.0,
            400.0,
        )
        .stop(0.0, self.palette.union_zone)
        .stop(1.0, Rgba::TRANSPARENT);
        list.fill_rect(origin, full, Paint::Radial(union));

        // Warning-toned mist, upper right.
        let pollution = RadialGradient::new(
            Vec2::new(viewport.width_px * 0.8, viewport.height_px * 0.2),
            20.0,
            300.0,
        )
        .stop(0.0, self.palette.pollution_zone)
        .stop(1.0, Rgba::TRANSPARENT);
        list.fill_rect(origin, full, Paint::Radial(pollution));
    }

    fn draw_vignette(&self, list: &mut DrawList, viewport: Viewport) {
        let vignette = RadialGradient::new(
            viewport.center(),
            viewport.height_px / 2.0,
            viewport.height_px,
        )
        .stop(0.0, Rgba::TRANSPARENT)
        .stop(1.0, self.palette.vignette_edge);
        list.fill_rect(
            Vec2::new(0.0, 0.0),
            Vec2::new(viewport.width_px, viewport.height_px),
            Paint::Radial(vignette),
        );
    }
}

/// Deterministic pulse phase from an identifier's first character.
///
/// This is intentionally not randomness: each marker pulses out of phase
/// with its neighbors but identically from frame to frame, so the phase can
/// be asserted exactly per entity.
pub fn pulse_phase(id: &str) -> f64 {
    id.chars().next().map(|c| c as u32 as f64).unwrap_or(0.0)
}
