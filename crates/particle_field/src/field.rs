use foundation::math::{Pinhole, Vec2, Vec3, approach, depth_fog_alpha, rotate_y};
use foundation::math::precision::stable_total_cmp_f64;
use foundation::time::Clock;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use surface::{DrawList, Glow, Paint, RadialGradient, Viewport};

use crate::config::{FieldConfig, FieldPalette};

/// Display mode supplied by the owning UI each frame.
///
/// The mode only changes rotation speed. There is no internal transition:
/// the caller decides when the globe counts as assembled, and the engine is
/// unmounted rather than reverted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldMode {
    Forming,
    Assembled,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// Fired exactly once, after the configured frame count, signaling that
    /// the caller may transition UI state.
    Ready,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColorTag {
    Primary,
    Accent,
}

/// One point-mass visual element with a resting position on the sphere.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Particle {
    /// Azimuth on the unit sphere; fixed for the particle's lifetime.
    pub azimuth: f64,
    /// Polar angle drawn so targets are uniform over the sphere's area.
    pub polar: f64,
    pub current: Vec3,
    pub target: Vec3,
    pub size_px: f64,
    pub tag: ColorTag,
}

/// Output of one engine frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFrame {
    pub draw_list: DrawList,
    pub event: Option<FieldEvent>,
}

/// The assembling-globe particle engine.
///
/// Owns a fixed-size particle array allocated at construction and mutated in
/// place every frame; no per-particle allocation happens after init. All
/// randomness comes from one seeded generator so runs are reproducible.
#[derive(Debug, Clone)]
pub struct ParticleField {
    config: FieldConfig,
    palette: FieldPalette,
    camera: Pinhole,
    clock: Clock,
    particles: Vec<Particle>,
    rng: StdRng,
    frames: u64,
    ready_emitted: bool,
}

impl ParticleField {
    pub fn new(config: FieldConfig) -> Self {
        Self::with_palette(config, FieldPalette::default())
    }

    pub fn with_palette(config: FieldConfig, palette: FieldPalette) -> Self {
        let mut rng = StdRng::seed_from_u64(config.rng_seed);
        let particles = spawn_particles(&config, &mut rng);
        Self {
            camera: Pinhole::new(config.focal_length, config.near_margin),
            clock: Clock::new(config.time_step),
            particles,
            rng,
            frames: 0,
            ready_emitted: false,
            config,
            palette,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Simulates and draws one frame.
    ///
    /// Per-frame order: advance time, clear to the background gradient, draw
    /// the drifting grid, depth-sort far to near, rotate by the mode's spin,
    /// pull every particle toward its target, sweep the shockwave band,
    /// project, fog, and occasionally draw a connection line toward center.
    pub fn advance(&mut self, viewport: Viewport, mode: FieldMode) -> FieldFrame {
        let time = self.clock.tick().0;
        self.frames += 1;

        let mut list = DrawList::new();
        if viewport.is_degenerate() {
            return FieldFrame {
                draw_list: list,
                event: self.take_ready(),
            };
        }

        let center = Vec2::new(
            viewport.width_px / 2.0,
            viewport.height_px / 2.0 - self.config.center_lift_px,
        );

        self.draw_background(&mut list, viewport, center);
        self.draw_grid(&mut list, viewport, time);

        // Far to near, so nearer particles composite over farther ones.
        self.particles
            .sort_by(|a, b| stable_total_cmp_f64(b.current.z, a.current.z));

        let spin = match mode {
            FieldMode::Forming => self.config.forming_spin,
            FieldMode::Assembled => self.config.assembled_spin,
        };
        let rotation = time * spin;

        let band = self.config.shockwave_band;
        let pulse_y = (time * self.config.shockwave_frequency).sin() * self.config.globe_radius;

        for i in 0..self.particles.len() {
            let (current, size_px, tag, band_distance) = {
                let p = &mut self.particles[i];
                p.current = approach(p.current, p.target, self.config.approach_fraction);
                (p.current, p.size_px, p.tag, (p.current.y - pulse_y).abs())
            };

            let mut point = rotate_y(current, rotation);
            let in_band = band_distance < band;
            if in_band {
                // The pulse sweeping through the globe bulges nearby particles.
                point = point * (1.0 + (band - band_distance) / 100.0);
            }

            let Some(projected) = self.camera.project(point) else {
                continue;
            };
            let position = center + projected.offset;
            let radius_px = size_px * projected.scale;

            if in_band {
                list.glow_circle(
                    position,
                    radius_px,
                    self.palette.shockwave_fill,
                    Glow {
                        color: self.palette.shockwave_glow,
                        blur_px: 10.0,
                    },
                );
            } else {
                let alpha = depth_fog_alpha(point.z, self.config.globe_radius, self.config.fog_floor);
                let color = match tag {
                    ColorTag::Primary => self.palette.primary,
                    ColorTag::Accent => self.palette.accent,
                };
                list.circle(position, radius_px, color.with_alpha(alpha as f32));
            }

            // Stateless cosmetic coin-flip; nothing about these lines persists.
            if self.rng.r#gen::<f64>() < self.config.link_chance {
                let jitter = self.config.link_jitter_px;
                let endpoint = center
                    + Vec2::new(
                        (self.rng.r#gen::<f64>() - 0.5) * jitter,
                        (self.rng.r#gen::<f64>() - 0.5) * jitter,
                    );
                let alpha = 0.1 * projected.scale;
                list.line(position, endpoint, self.palette.link.with_alpha(alpha as f32), 1.0);
            }
        }

        FieldFrame {
            draw_list: list,
            event: self.take_ready(),
        }
    }

    fn draw_background(&self, list: &mut DrawList, viewport: Viewport, center: Vec2) {
        let gradient = RadialGradient::new(center, 0.0, viewport.height_px)
            .stop(0.0, self.palette.background_center)
            .stop(1.0, self.palette.background_edge);
        list.clear_with(Paint::Radial(gradient));
    }

    fn draw_grid(&self, list: &mut DrawList, viewport: Viewport, time: f64) {
        let spacing = self.config.grid_spacing_px;
        let offset = (time * self.config.grid_drift) % spacing;

        let mut x = 0.0;
        while x < viewport.width_px {
            list.line(
                Vec2::new(x, 0.0),
                Vec2::new(x, viewport.height_px),
                self.palette.grid,
                1.0,
            );
            x += spacing;
        }
        let mut y = 0.0;
        while y < viewport.height_px {
            list.line(
                Vec2::new(0.0, y + offset),
                Vec2::new(viewport.width_px, y + offset),
                self.palette.grid,
                1.0,
            );
            y += spacing;
        }
    }

    fn take_ready(&mut self) -> Option<FieldEvent> {
        if !self.ready_emitted && self.frames >= self.config.ready_after_frames {
            self.ready_emitted = true;
            return Some(FieldEvent::Ready);
        }
        None
    }
}

fn spawn_particles(config: &FieldConfig, rng: &mut StdRng) -> Vec<Particle> {
    let mut particles = Vec::with_capacity(config.particle_count);
    for _ in 0..config.particle_count {
        let azimuth = rng.gen_range(0.0..std::f64::consts::TAU);
        // arccos of a uniform draw keeps the area density uniform; a uniform
        // polar angle would crowd the poles.
        let polar = f64::acos(rng.gen_range(-1.0..1.0));

        let r = config.globe_radius;
        let target = Vec3::new(
            r * polar.sin() * azimuth.cos(),
            r * polar.sin() * azimuth.sin(),
            r * polar.cos(),
        );
        let extent = config.explosion_extent;
        let current = Vec3::new(
            (rng.r#gen::<f64>() - 0.5) * extent,
            (rng.r#gen::<f64>() - 0.5) * extent,
            (rng.r#gen::<f64>() - 0.5) * extent,
        );

        particles.push(Particle {
            azimuth,
            polar,
            current,
            target,
            size_px: rng.gen_range(config.particle_size_min_px..config.particle_size_max_px),
            tag: if rng.r#gen::<f64>() < config.accent_ratio {
                ColorTag::Accent
            } else {
                ColorTag::Primary
            },
        });
    }
    particles
}

#[cfg(test)]
mod tests {
    use super::{ColorTag, FieldEvent, FieldMode, ParticleField};
    use crate::config::FieldConfig;
    use surface::{DrawCommand, Paint, Viewport};

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0, 1.0)
    }

    #[test]
    fn targets_lie_on_the_sphere_surface() {
        let field = ParticleField::new(FieldConfig::default());
        let radius = field.config().globe_radius;
        for particle in field.particles() {
            assert!((particle.target.length() - radius).abs() < 1e-9);
        }
    }

    #[test]
    fn approach_is_monotonic_and_never_arrives() {
        let mut field = ParticleField::new(FieldConfig {
            particle_count: 8,
            ..FieldConfig::default()
        });
        let mut previous: Vec<f64> = field
            .particles()
            .iter()
            .map(|p| p.current.distance(p.target))
            .collect();

        for _ in 0..60 {
            field.advance(viewport(), FieldMode::Forming);
            for (p, prev) in field.particles().iter().zip(&previous) {
                let d = p.current.distance(p.target);
                assert!(d < *prev);
                assert!(d > 0.0);
            }
            previous = field
                .particles()
                .iter()
                .map(|p| p.current.distance(p.target))
                .collect();
        }
    }

    #[test]
    fn frame_starts_with_radial_clear_then_grid() {
        let mut field = ParticleField::new(FieldConfig::default());
        let frame = field.advance(viewport(), FieldMode::Forming);
        let commands = &frame.draw_list.commands;
        assert!(matches!(
            commands[0],
            DrawCommand::Clear {
                paint: Paint::Radial(_)
            }
        ));
        let grid_lines = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count();
        // 14 vertical + 10 horizontal at 60px spacing on 800x600, plus
        // whatever cosmetic links the coin flips produced.
        assert!(grid_lines >= 24);
    }

    #[test]
    fn ready_fires_exactly_once_at_the_configured_frame() {
        let mut field = ParticleField::new(FieldConfig {
            ready_after_frames: 3,
            particle_count: 4,
            ..FieldConfig::default()
        });
        let mut fired_at = Vec::new();
        for frame in 1..=6u64 {
            if field.advance(viewport(), FieldMode::Forming).event == Some(FieldEvent::Ready) {
                fired_at.push(frame);
            }
        }
        assert_eq!(fired_at, vec![3]);
    }

    #[test]
    fn same_seed_reproduces_identical_frames() {
        let mut a = ParticleField::new(FieldConfig::default());
        let mut b = ParticleField::new(FieldConfig::default());
        for _ in 0..3 {
            let fa = a.advance(viewport(), FieldMode::Forming);
            let fb = b.advance(viewport(), FieldMode::Forming);
            assert_eq!(fa, fb);
        }
    }

    #[test]
    fn assembled_mode_spins_faster_than_forming() {
        let mut forming = ParticleField::new(FieldConfig::default());
        let mut assembled = ParticleField::new(FieldConfig::default());
        // Identical first frame state; only the rotation angle differs.
        let fa = forming.advance(viewport(), FieldMode::Forming);
        let fb = assembled.advance(viewport(), FieldMode::Assembled);
        assert_ne!(fa.draw_list, fb.draw_list);
    }

    #[test]
    fn accent_particles_are_a_minority() {
        let field = ParticleField::new(FieldConfig::default());
        let accents = field
            .particles()
            .iter()
            .filter(|p| p.tag == ColorTag::Accent)
            .count();
        assert!(accents > 0);
        assert!(accents < field.particles().len() / 2);
    }

    #[test]
    fn degenerate_viewport_produces_an_empty_frame() {
        let mut field = ParticleField::new(FieldConfig::default());
        let frame = field.advance(Viewport::new(0.0, 0.0, 1.0), FieldMode::Forming);
        assert!(frame.draw_list.is_empty());
    }
}
