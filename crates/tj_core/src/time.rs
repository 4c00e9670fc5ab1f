//! Fixed-step clock. Real frame time feeds an accumulator; the simulation
//! consumes it in constant `fixed_dt` slices so movement speed does not
//! depend on the display refresh rate.

use std::time::Instant;

pub struct TimeState {
    pub fixed_dt: f64,
    pub max_frame_dt: f64,
    accumulator: f64,
    /// Simulated seconds, advanced only by fixed steps.
    pub total_time: f64,
    pub fixed_step_count: u64,
    pub frame_count: u64,
    pub steps_this_frame: u32,
    pub real_dt: f64,
    last_instant: Instant,
}

impl TimeState {
    pub fn new() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_frame_dt: 0.25,
            accumulator: 0.0,
            total_time: 0.0,
            fixed_step_count: 0,
            frame_count: 0,
            steps_this_frame: 0,
            real_dt: 0.0,
            last_instant: Instant::now(),
        }
    }

    pub fn begin_frame(&mut self) {
        let now = Instant::now();
        let real_dt = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;
        self.advance(real_dt);
    }

    /// Feeds an explicit frame delta. `begin_frame` uses this with the
    /// measured wall-clock time.
    pub fn advance(&mut self, real_dt: f64) {
        self.real_dt = real_dt.max(0.0);

        // Spiral-of-death cap
        if self.real_dt > self.max_frame_dt {
            log::warn!(
                "Frame took {:.1}ms, capping to {}ms",
                self.real_dt * 1000.0,
                self.max_frame_dt * 1000.0
            );
            self.real_dt = self.max_frame_dt;
        }

        self.accumulator += self.real_dt;
        self.steps_this_frame = 0;
        self.frame_count += 1;
    }

    pub fn should_step(&mut self) -> bool {
        if self.accumulator >= self.fixed_dt {
            self.accumulator -= self.fixed_dt;
            self.total_time += self.fixed_dt;
            self.fixed_step_count += 1;
            self.steps_this_frame += 1;
            true
        } else {
            false
        }
    }
}

impl Default for TimeState {
    fn default() -> Self {
        Self::new()
    }
}
