//! Simulated measurement device run.
//!
//! Purely cosmetic progress driven by the UI frame clock. Leaving the
//! measurement screen resets the run; nothing else depends on it.

use std::time::Duration;

/// Step names shown while a run advances, in order.
pub const STEPS: [&str; 6] = [
    "Preparation",
    "Calibration",
    "Image Capture",
    "Automated Analysis",
    "Validation",
    "Finalizing",
];

/// Run phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Paused,
    Complete,
}

/// State of one simulated measurement.
#[derive(Debug, Clone)]
pub struct MeasurementRun {
    phase: Phase,
    /// Progress in percent, 0.0..=100.0.
    progress: f32,
    elapsed: Duration,
    /// Percent gained per second while running.
    rate: f32,
}

impl MeasurementRun {
    /// A run that takes `duration_secs` seconds from start to completion.
    pub fn new(duration_secs: u32) -> Self {
        Self {
            phase: Phase::Idle,
            progress: 0.0,
            elapsed: Duration::ZERO,
            rate: 100.0 / duration_secs.max(1) as f32,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Whether the run needs frame ticks to make progress.
    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Running | Phase::Paused)
    }

    /// Current step name derived from progress.
    pub fn current_step(&self) -> &'static str {
        if self.phase == Phase::Complete {
            return "Complete";
        }
        let index = (self.progress / (100.0 / STEPS.len() as f32)) as usize;
        STEPS[index.min(STEPS.len() - 1)]
    }

    /// Start from idle, or restart after completion.
    pub fn start(&mut self) {
        if self.phase == Phase::Running {
            return;
        }
        if self.phase != Phase::Paused {
            self.progress = 0.0;
            self.elapsed = Duration::ZERO;
        }
        self.phase = Phase::Running;
    }

    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            other => other,
        };
    }

    /// Stop and discard all progress.
    pub fn stop(&mut self) {
        *self = Self {
            rate: self.rate,
            ..Self::new(1)
        };
    }

    /// Advance by one frame. No-op unless running.
    pub fn tick(&mut self, dt: Duration) {
        if self.phase != Phase::Running {
            return;
        }
        self.elapsed += dt;
        self.progress += self.rate * dt.as_secs_f32();
        if self.progress >= 100.0 {
            self.progress = 100.0;
            self.phase = Phase::Complete;
        }
    }

    /// Elapsed time as `mm:ss`.
    pub fn elapsed_label(&self) -> String {
        let secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_until_started() {
        let mut run = MeasurementRun::new(10);
        run.tick(Duration::from_secs(5));
        assert_eq!(run.phase(), Phase::Idle);
        assert_eq!(run.progress(), 0.0);
    }

    #[test]
    fn test_tick_advances_at_configured_rate() {
        let mut run = MeasurementRun::new(10);
        run.start();
        run.tick(Duration::from_secs(1));
        assert!((run.progress() - 10.0).abs() < 0.01);
        assert_eq!(run.elapsed().as_secs(), 1);
    }

    #[test]
    fn test_pause_holds_progress() {
        let mut run = MeasurementRun::new(10);
        run.start();
        run.tick(Duration::from_secs(2));
        run.toggle_pause();
        assert!(run.is_paused());

        let before = run.progress();
        run.tick(Duration::from_secs(5));
        assert_eq!(run.progress(), before);

        run.toggle_pause();
        assert!(run.is_running());
    }

    #[test]
    fn test_stop_resets() {
        let mut run = MeasurementRun::new(10);
        run.start();
        run.tick(Duration::from_secs(4));
        run.stop();

        assert_eq!(run.phase(), Phase::Idle);
        assert_eq!(run.progress(), 0.0);
        assert_eq!(run.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_completes_and_pins_at_100() {
        let mut run = MeasurementRun::new(10);
        run.start();
        run.tick(Duration::from_secs(30));

        assert!(run.is_complete());
        assert_eq!(run.progress(), 100.0);
        assert_eq!(run.current_step(), "Complete");

        // Further ticks change nothing.
        run.tick(Duration::from_secs(1));
        assert_eq!(run.progress(), 100.0);
    }

    #[test]
    fn test_steps_follow_progress() {
        let mut run = MeasurementRun::new(60);
        run.start();
        assert_eq!(run.current_step(), "Preparation");

        run.tick(Duration::from_secs(30));
        assert_eq!(run.current_step(), "Automated Analysis");

        run.tick(Duration::from_secs(28));
        assert_eq!(run.current_step(), "Finalizing");
    }

    #[test]
    fn test_elapsed_label() {
        let mut run = MeasurementRun::new(600);
        run.start();
        run.tick(Duration::from_secs(75));
        assert_eq!(run.elapsed_label(), "01:15");
    }
}
