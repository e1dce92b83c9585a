/// Time primitives
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Time(pub f64); // engine time units, not wall-clock

/// Fixed-step animation clock owned by one renderer instance.
///
/// The clock advances exactly once per rendered frame and is never reset
/// while the owner is mounted. Keeping the counter per instance (instead of a
/// process-wide global) means two renderers mounted at the same time cannot
/// perturb each other's periodic effects.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Clock {
    time: f64,
    step: f64,
}

impl Clock {
    pub fn new(step: f64) -> Self {
        Self { time: 0.0, step }
    }

    /// Advances by one fixed step and returns the new time.
    pub fn tick(&mut self) -> Time {
        self.time += self.step;
        Time(self.time)
    }

    pub fn now(&self) -> Time {
        Time(self.time)
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}
