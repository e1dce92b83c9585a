use catalog::{EntityRecord, MapCoordinates};
use foundation::math::Vec2;
use surface::Viewport;

use crate::renderer::Holomap;

/// Outcome of a pointer press on the map.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// The click landed on a marker while not in targeting mode.
    EntitySelected(EntityRecord),
    /// The click names a spot on the map, in normalized 0..100 coordinates.
    LocationPicked { x: f64, y: f64 },
}

impl Holomap {
    /// Resolves a click at `point` (viewport pixels) against the markers
    /// that `render_frame` would draw for the same inputs.
    ///
    /// Marker hits are tried in input order and win over the location pick,
    /// except in targeting mode where clicks always pick a location. This is
    /// a pure function of its arguments; it never advances the clock.
    pub fn hit_test(
        &self,
        viewport: Viewport,
        entities: &[EntityRecord],
        point: Vec2,
        targeting: bool,
    ) -> Option<MapEvent> {
        if viewport.is_degenerate() {
            return None;
        }

        if !targeting {
            let hit = entities.iter().find(|entity| {
                entity.coordinates.is_some_and(|c| {
                    point.distance(marker_position(c, viewport)) <= self.config().hit_radius_px
                })
            });
            if let Some(entity) = hit {
                return Some(MapEvent::EntitySelected(entity.clone()));
            }
        }

        Some(MapEvent::LocationPicked {
            x: point.x / viewport.width_px * 100.0,
            y: point.y / viewport.height_px * 100.0,
        })
    }
}

fn marker_position(coordinates: MapCoordinates, viewport: Viewport) -> Vec2 {
    Vec2::new(
        coordinates.x / 100.0 * viewport.width_px,
        coordinates.y / 100.0 * viewport.height_px,
    )
}

#[cfg(test)]
mod tests {
    use super::MapEvent;
    use crate::config::MapConfig;
    use crate::renderer::Holomap;
    use catalog::{
        ContainmentClass, EntityKind, EntityRecord, Faction, HazardLevel, MapCoordinates,
    };
    use foundation::math::Vec2;
    use surface::Viewport;

    fn entity(id: &str, x: f64, y: f64) -> EntityRecord {
        EntityRecord {
            id: id.to_string(),
            name: id.to_uppercase(),
            kind: EntityKind::Location,
            faction: Faction::Union,
            containment_class: ContainmentClass::Euclid,
            hazard_level: HazardLevel::C,
            status: "active".to_string(),
            resonance: 60.0,
            coordinates: Some(MapCoordinates::new(x, y)),
            description: String::new(),
            secret_data: None,
            is_verified: None,
        }
    }

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0, 1.0)
    }

    #[test]
    fn click_near_marker_selects_the_entity() {
        let map = Holomap::new(MapConfig::default());
        // Marker at pixel (100, 100) on the 800x600 surface.
        let rows = vec![entity("r1", 12.5, 100.0 / 6.0)];
        let event = map.hit_test(viewport(), &rows, Vec2::new(105.0, 103.0), false);
        assert_eq!(event, Some(MapEvent::EntitySelected(rows[0].clone())));
    }

    #[test]
    fn targeting_mode_picks_the_location_even_over_a_marker() {
        let map = Holomap::new(MapConfig::default());
        let rows = vec![entity("r1", 12.5, 100.0 / 6.0)];
        let event = map.hit_test(viewport(), &rows, Vec2::new(105.0, 103.0), true);
        assert_eq!(
            event,
            Some(MapEvent::LocationPicked {
                x: 105.0 / 800.0 * 100.0,
                y: 103.0 / 600.0 * 100.0,
            })
        );
    }

    #[test]
    fn first_entity_in_input_order_wins_overlapping_markers() {
        let map = Holomap::new(MapConfig::default());
        let rows = vec![entity("near", 50.0, 50.0), entity("also", 50.5, 50.0)];
        let event = map.hit_test(viewport(), &rows, Vec2::new(402.0, 300.0), false);
        match event {
            Some(MapEvent::EntitySelected(selected)) => assert_eq!(selected.id, "near"),
            other => panic!("expected a selection, got {other:?}"),
        }
    }

    #[test]
    fn miss_reports_normalized_location_at_the_corners() {
        let map = Holomap::new(MapConfig::default());
        let origin = map.hit_test(viewport(), &[], Vec2::new(0.0, 0.0), false);
        assert_eq!(origin, Some(MapEvent::LocationPicked { x: 0.0, y: 0.0 }));
        let far = map.hit_test(viewport(), &[], Vec2::new(800.0, 600.0), false);
        assert_eq!(far, Some(MapEvent::LocationPicked { x: 100.0, y: 100.0 }));
    }

    #[test]
    fn entities_without_coordinates_cannot_be_hit() {
        let map = Holomap::new(MapConfig::default());
        let mut unlocated = entity("u", 50.0, 50.0);
        unlocated.coordinates = None;
        let event = map.hit_test(viewport(), &[unlocated], Vec2::new(400.0, 300.0), false);
        assert_eq!(
            event,
            Some(MapEvent::LocationPicked { x: 50.0, y: 50.0 })
        );
    }

    #[test]
    fn hit_testing_is_repeatable_without_advancing_time() {
        let map = Holomap::new(MapConfig::default());
        let rows = vec![entity("r1", 25.0, 25.0)];
        let point = Vec2::new(200.0, 150.0);
        let first = map.hit_test(viewport(), &rows, point, false);
        let second = map.hit_test(viewport(), &rows, point, false);
        assert_eq!(first, second);
    }

    #[test]
    fn degenerate_viewport_yields_no_event() {
        let map = Holomap::new(MapConfig::default());
        let flat = Viewport::new(800.0, 0.0, 1.0);
        let event = map.hit_test(flat, &[entity("r1", 50.0, 50.0)], Vec2::new(1.0, 1.0), false);
        assert_eq!(event, None);
    }
}
