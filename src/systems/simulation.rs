//! Field simulation system
//!
//! Owns the [`Simulation`] and paces it:
//! - Frame scheduling at the configured rate
//! - Ticking the simulation into a canvas
//! - Forwarding resize notifications
//! - Periodic frame statistics

use std::time::{Duration, Instant};
use gridmarch_core::{Canvas, RngSource, SetupError, Simulation};
use crate::config::AppConfig;

/// Frame rate report produced every statistics interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Average frames per second over the interval
    pub fps: f32,
    /// Figures on the field
    pub figures: usize,
}

/// Counts frames and reports the rate periodically
#[derive(Debug, Clone)]
pub struct FrameStats {
    interval: Option<Duration>,
    window_start: Instant,
    frames: u32,
}

impl FrameStats {
    /// Report every `interval_secs` seconds (never if not positive)
    pub fn new(interval_secs: f32, now: Instant) -> Self {
        let interval = (interval_secs.is_finite() && interval_secs > 0.0)
            .then(|| Duration::from_secs_f32(interval_secs));
        Self {
            interval,
            window_start: now,
            frames: 0,
        }
    }

    /// Count a frame; returns a report when the interval has elapsed
    pub fn record(&mut self, now: Instant, figures: usize) -> Option<FrameReport> {
        self.frames += 1;
        let interval = self.interval?;
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < interval {
            return None;
        }

        let report = FrameReport {
            fps: self.frames as f32 / elapsed.as_secs_f32(),
            figures,
        };
        self.window_start = now;
        self.frames = 0;
        Some(report)
    }
}

/// Manages the field simulation loop
pub struct SimulationSystem {
    simulation: Simulation,
    frame_interval: Duration,
    next_frame: Instant,
    stats: FrameStats,
}

impl SimulationSystem {
    /// Wrap a simulation ticking at `target_fps` (0 is treated as 1)
    pub fn new(simulation: Simulation, target_fps: u32, stats_interval_secs: f32) -> Self {
        let now = Instant::now();
        Self {
            simulation,
            frame_interval: frame_interval(target_fps),
            next_frame: now,
            stats: FrameStats::new(stats_interval_secs, now),
        }
    }

    /// Build the field for a `width` x `height` canvas from config
    ///
    /// Uses `field.seed` when set, otherwise a fresh entropy seed.
    pub fn from_config(config: &AppConfig, width: u32, height: u32) -> Result<Self, SetupError> {
        let mut random = match config.field.seed {
            Some(seed) => {
                log::info!("Seeding field with {}", seed);
                RngSource::seeded(seed)
            }
            None => RngSource::from_entropy(),
        };

        let simulation = Simulation::setup(
            width,
            height,
            config.field.to_field_params(),
            &config.field.palette(),
            &mut random,
        )?
        .with_background(config.rendering.background());

        Ok(Self::new(
            simulation,
            config.window.target_fps,
            config.debug.stats_interval_secs,
        ))
    }

    /// Whether the next tick is due
    pub fn frame_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// When the next tick should run
    pub fn next_frame_at(&self) -> Instant {
        self.next_frame
    }

    /// Run one tick into `canvas` and schedule the next one
    ///
    /// Late frames are not caught up: the schedule restarts from `now`.
    pub fn step<C: Canvas + ?Sized>(&mut self, canvas: &mut C, now: Instant) -> Option<FrameReport> {
        self.simulation.tick(canvas);

        self.next_frame += self.frame_interval;
        if self.next_frame < now {
            self.next_frame = now + self.frame_interval;
        }

        let report = self.stats.record(now, self.simulation.figure_count());
        if let Some(report) = report {
            log::debug!(
                "{:.1} fps, {} figures, frame {}",
                report.fps,
                report.figures,
                self.simulation.frame_counter()
            );
        }
        report
    }

    /// Forward a canvas resize to the simulation
    pub fn resize(&mut self, width: u32, height: u32) {
        self.simulation.resize(width, height);
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }
}

fn frame_interval(target_fps: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / target_fps.max(1) as u64)
}
