// ABOUTME: Simulated slide generation driven by explicit clock ticks
// Advances a fixed list of progress indicators and then reports completion

use serde::Serialize;
use std::time::{Duration, Instant};

/// Progress indicators shown while generating
pub const PROGRESS_STEPS: [&str; 6] = [
    "Connecting to workspace",
    "Loading template",
    "Analyzing performance data",
    "Generating insights",
    "Building slides",
    "Applying brand formatting",
];

/// Indicators that are already complete when the generating step opens
pub const PRECOMPLETED_STEPS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IndicatorStatus {
    Pending,
    Active,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressIndicator {
    pub label: &'static str,
    pub status: IndicatorStatus,
}

/// Interval between indicator advances and the pause before finishing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationTiming {
    pub step_interval: Duration,
    pub finish_delay: Duration,
}

impl Default for GenerationTiming {
    fn default() -> Self {
        Self {
            step_interval: Duration::from_millis(1200),
            finish_delay: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPoll {
    Running,
    Finished,
}

/// One in-flight generation. Dropping it cancels the run.
#[derive(Debug, Clone)]
pub struct GenerationSimulator {
    indicators: Vec<ProgressIndicator>,
    /// Index of the next indicator to complete
    cursor: usize,
    timing: GenerationTiming,
    next_tick: Instant,
    finish_at: Option<Instant>,
}

impl GenerationSimulator {
    pub fn new(timing: GenerationTiming, started_at: Instant) -> Self {
        let indicators = PROGRESS_STEPS
            .iter()
            .enumerate()
            .map(|(idx, &label)| ProgressIndicator {
                label,
                status: match idx {
                    i if i < PRECOMPLETED_STEPS => IndicatorStatus::Completed,
                    i if i == PRECOMPLETED_STEPS => IndicatorStatus::Active,
                    _ => IndicatorStatus::Pending,
                },
            })
            .collect();

        Self {
            indicators,
            cursor: PRECOMPLETED_STEPS,
            timing,
            next_tick: started_at + timing.step_interval,
            finish_at: None,
        }
    }

    pub fn indicators(&self) -> &[ProgressIndicator] {
        &self.indicators
    }

    pub fn completed_count(&self) -> usize {
        self.cursor
    }

    pub fn is_all_completed(&self) -> bool {
        self.cursor >= self.indicators.len()
    }

    /// Fraction of indicators completed, for the gauge
    pub fn ratio(&self) -> f64 {
        if self.indicators.is_empty() {
            1.0
        } else {
            self.cursor as f64 / self.indicators.len() as f64
        }
    }

    /// Catch up with the clock. Several intervals may elapse between polls.
    pub fn poll(&mut self, now: Instant) -> GenerationPoll {
        while self.finish_at.is_none() && now >= self.next_tick {
            self.advance();
            self.next_tick += self.timing.step_interval;
        }

        match self.finish_at {
            Some(finish_at) if now >= finish_at => GenerationPoll::Finished,
            _ => GenerationPoll::Running,
        }
    }

    fn advance(&mut self) {
        if self.cursor < self.indicators.len() {
            self.indicators[self.cursor].status = IndicatorStatus::Completed;
            self.cursor += 1;
            if let Some(next) = self.indicators.get_mut(self.cursor) {
                next.status = IndicatorStatus::Active;
            }
            tracing::debug!(completed = self.cursor, "Generation step completed");
        } else {
            // All indicators done on the previous tick; wait once more before finishing
            self.finish_at = Some(self.next_tick + self.timing.finish_delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_first_two_start_completed() {
        let sim = GenerationSimulator::new(GenerationTiming::default(), Instant::now());
        let statuses: Vec<_> = sim.indicators().iter().map(|i| i.status).collect();
        assert_eq!(
            statuses,
            vec![
                IndicatorStatus::Completed,
                IndicatorStatus::Completed,
                IndicatorStatus::Active,
                IndicatorStatus::Pending,
                IndicatorStatus::Pending,
                IndicatorStatus::Pending,
            ]
        );
        assert_eq!(sim.completed_count(), 2);
    }

    #[test]
    fn test_one_indicator_per_interval() {
        let start = Instant::now();
        let mut sim = GenerationSimulator::new(GenerationTiming::default(), start);

        assert_eq!(sim.poll(start + ms(1199)), GenerationPoll::Running);
        assert_eq!(sim.completed_count(), 2);

        assert_eq!(sim.poll(start + ms(1200)), GenerationPoll::Running);
        assert_eq!(sim.completed_count(), 3);
        assert_eq!(sim.indicators()[3].status, IndicatorStatus::Active);
    }

    #[test]
    fn test_finishes_after_final_delay() {
        let start = Instant::now();
        let mut sim = GenerationSimulator::new(GenerationTiming::default(), start);

        // 4 remaining indicators, one extra tick, then the finish delay
        assert_eq!(sim.poll(start + ms(4800)), GenerationPoll::Running);
        assert!(sim.is_all_completed());
        assert_eq!(sim.poll(start + ms(6000)), GenerationPoll::Running);
        assert_eq!(sim.poll(start + ms(6499)), GenerationPoll::Running);
        assert_eq!(sim.poll(start + ms(6500)), GenerationPoll::Finished);
        assert!((sim.ratio() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_single_late_poll_catches_up() {
        let start = Instant::now();
        let mut sim = GenerationSimulator::new(GenerationTiming::default(), start);
        assert_eq!(sim.poll(start + ms(60_000)), GenerationPoll::Finished);
        assert!(sim
            .indicators()
            .iter()
            .all(|i| i.status == IndicatorStatus::Completed));
    }

    #[test]
    fn test_custom_timing() {
        let start = Instant::now();
        let timing = GenerationTiming {
            step_interval: ms(10),
            finish_delay: ms(0),
        };
        let mut sim = GenerationSimulator::new(timing, start);
        assert_eq!(sim.poll(start + ms(49)), GenerationPoll::Running);
        assert_eq!(sim.poll(start + ms(50)), GenerationPoll::Finished);
    }
}
