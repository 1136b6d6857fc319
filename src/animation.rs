use std::time::{
    Duration,
    Instant,
};

use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AnimationError {
    #[error("No wave packets have been added.")]
    EmptyRegistry,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Time between two frames, in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl AnimationConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

fn default_interval_ms() -> u64 {
    50
}

/// Idle/running state machine for the frame timer.
///
/// The clock is passed in, so the UI polls it with `Instant::now()` on every
/// update and tests can step it by hand.
#[derive(Clone, Debug)]
pub struct Animator {
    interval: Duration,
    running: Option<RunningState>,
}

#[derive(Clone, Copy, Debug)]
struct RunningState {
    next_tick: Instant,
}

impl Animator {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            running: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Starts ticking. The first tick is due one interval after `now`.
    ///
    /// Refuses to start without any packets to animate. Starting while
    /// running restarts the schedule.
    pub fn start(&mut self, now: Instant, num_packets: usize) -> Result<(), AnimationError> {
        if num_packets == 0 {
            return Err(AnimationError::EmptyRegistry);
        }

        self.running = Some(RunningState {
            next_tick: now + self.interval,
        });

        Ok(())
    }

    /// Stops ticking. Returns whether the animation was running.
    pub fn stop(&mut self) -> bool {
        self.running.take().is_some()
    }

    /// Returns the number of ticks due at `now`, which is 0 or 1.
    ///
    /// If the caller fell behind by several intervals, the missed ticks are
    /// dropped and the schedule continues from `now`.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(running) = &mut self.running
        else {
            return 0;
        };

        if now < running.next_tick {
            return 0;
        }

        running.next_tick += self.interval;
        if running.next_tick <= now {
            running.next_tick = now + self.interval;
        }

        1
    }

    /// How long until the next tick is due, or `None` if idle.
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.running
            .as_ref()
            .map(|running| running.next_tick.saturating_duration_since(now))
    }
}
