use foundation::color::Rgba;
use foundation::math::Vec2;

/// One color stop of a gradient, offset in [0, 1].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Rgba,
}

/// Radial gradient between two concentric circles, in surface pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub inner_radius_px: f64,
    pub outer_radius_px: f64,
    pub stops: Vec<GradientStop>,
}

impl RadialGradient {
    pub fn new(center: Vec2, inner_radius_px: f64, outer_radius_px: f64) -> Self {
        Self {
            center,
            inner_radius_px,
            outer_radius_px,
            stops: Vec::new(),
        }
    }

    pub fn stop(mut self, offset: f64, color: Rgba) -> Self {
        self.stops.push(GradientStop { offset, color });
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Radial(RadialGradient),
}

/// Soft halo rendered behind a shape (canvas `shadowBlur` analogue).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Glow {
    pub color: Rgba,
    pub blur_px: f64,
}

/// One immediate-mode drawing operation in surface pixel space.
///
/// Commands are interpreted strictly in list order; later commands composite
/// over earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface, discarding previous contents.
    Clear { paint: Paint },
    FillRect { min: Vec2, size: Vec2, paint: Paint },
    Line {
        from: Vec2,
        to: Vec2,
        color: Rgba,
        width_px: f64,
    },
    Circle {
        center: Vec2,
        radius_px: f64,
        color: Rgba,
        glow: Option<Glow>,
    },
    Text {
        anchor: Vec2,
        text: String,
        color: Rgba,
        size_px: f64,
    },
}

/// An ordered frame's worth of draw commands.
///
/// Renderers rebuild the list from scratch every frame; nothing is retained
/// between frames.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear_with(&mut self, paint: Paint) {
        self.commands.push(DrawCommand::Clear { paint });
    }

    pub fn fill_rect(&mut self, min: Vec2, size: Vec2, paint: Paint) {
        self.commands.push(DrawCommand::FillRect { min, size, paint });
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, color: Rgba, width_px: f64) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width_px,
        });
    }

    pub fn circle(&mut self, center: Vec2, radius_px: f64, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius_px,
            color,
            glow: None,
        });
    }

    pub fn glow_circle(&mut self, center: Vec2, radius_px: f64, color: Rgba, glow: Glow) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius_px,
            color,
            glow: Some(glow),
        });
    }

    pub fn text(&mut self, anchor: Vec2, text: impl Into<String>, color: Rgba, size_px: f64) {
        self.commands.push(DrawCommand::Text {
            anchor,
            text: text.into(),
            color,
            size_px,
        });
    }

    /// Count of circle commands; markers and particles render as circles.
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    /// Text payloads in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{DrawCommand, DrawList, Paint, RadialGradient};
    use foundation::color::Rgba;
    use foundation::math::Vec2;

    #[test]
    fn builder_preserves_command_order() {
        let mut list = DrawList::new();
        list.clear_with(Paint::Solid(Rgba::BLACK));
        list.line(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Rgba::WHITE, 1.0);
        list.circle(Vec2::new(5.0, 5.0), 3.0, Rgba::WHITE);
        list.text(Vec2::new(8.0, 8.0), "R1", Rgba::WHITE, 10.0);

        assert_eq!(list.len(), 4);
        assert!(matches!(list.commands[0], DrawCommand::Clear { .. }));
        assert!(matches!(list.commands[3], DrawCommand::Text { .. }));
        assert_eq!(list.circle_count(), 1);
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["R1"]);
    }

    #[test]
    fn gradient_stops_accumulate_in_order() {
        let g = RadialGradient::new(Vec2::new(0.0, 0.0), 0.0, 100.0)
            .stop(0.0, Rgba::WHITE)
            .stop(1.0, Rgba::BLACK);
        assert_eq!(g.stops.len(), 2);
        assert_eq!(g.stops[0].offset, 0.0);
        assert_eq!(g.stops[1].color, Rgba::BLACK);
    }
}
