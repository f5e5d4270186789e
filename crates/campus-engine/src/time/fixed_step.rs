use std::time::Duration;

/// Accumulates frame time and releases it as whole fixed-length ticks.
///
/// Animation rules are written per tick (e.g. "the sun moves 0.08° per tick"),
/// so their speed must not depend on the display refresh rate. Time that does
/// not fill a whole tick carries over to the next frame. After a long stall at
/// most `max_ticks_per_frame` ticks run and the rest of the backlog is dropped.
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    max_ticks_per_frame: u32,
    accumulated: f32,
}

impl FixedStep {
    pub const DEFAULT_STEP: Duration = Duration::from_millis(16);
    pub const DEFAULT_MAX_TICKS: u32 = 8;

    pub fn new(step: Duration, max_ticks_per_frame: u32) -> Self {
        Self {
            step: step.as_secs_f32().max(f32::EPSILON),
            max_ticks_per_frame: max_ticks_per_frame.max(1),
            accumulated: 0.0,
        }
    }

    /// Adds `dt` seconds and returns how many ticks to run this frame.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if dt.is_finite() && dt > 0.0 {
            self.accumulated += dt;
        }

        let whole = (self.accumulated / self.step).floor();
        let ticks = (whole as u32).min(self.max_ticks_per_frame);
        if whole as u32 > self.max_ticks_per_frame {
            log::debug!("dropping {} animation ticks after a stall", whole as u32 - ticks);
            self.accumulated = 0.0;
        } else {
            self.accumulated -= ticks as f32 * self.step;
        }
        ticks
    }

    /// Time carried over towards the next tick, in seconds.
    #[inline]
    pub fn remainder(&self) -> f32 {
        self.accumulated
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEP, Self::DEFAULT_MAX_TICKS)
    }
}
