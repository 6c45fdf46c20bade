//! Timed obstacle spawning
//!
//! Spawning runs on simulated time: the caller advances the timer by the
//! fixed tick duration, so tests can drive it without a wall clock.

use std::rc::Rc;
use std::time::Duration;

use rand::Rng;

use super::obstacle::{Obstacle, PipePair};
use crate::consts::{GAP_MARGIN, SCREEN_HEIGHT, SCREEN_WIDTH, SPAWN_INTERVAL};

/// Repeating interval timer
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    interval: Duration,
    elapsed: Duration,
    running: bool,
}

impl IntervalTimer {
    /// Running timer; a zero interval never fires
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
            running: true,
        }
    }

    /// Advance by `dt` and return how many times the interval elapsed
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if !self.running || self.interval.is_zero() {
            return 0;
        }
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            fired += 1;
        }
        fired
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

/// Range the gap center is drawn from: `[margin, screen_height - floor_height - margin]`
pub fn gap_bounds(screen_height: f32, floor_height: f32, margin: f32) -> (f32, f32) {
    (margin, screen_height - floor_height - margin)
}

/// Emits one obstacle at the right screen edge per interval
#[derive(Debug)]
pub struct ObstacleSpawner {
    timer: IntervalTimer,
    pipes: Rc<PipePair>,
    spawn_x: f32,
    min_y: f32,
    max_y: f32,
}

impl ObstacleSpawner {
    pub fn new(pipes: Rc<PipePair>, floor_height: f32) -> Self {
        let (min_y, max_y) = gap_bounds(SCREEN_HEIGHT as f32, floor_height, GAP_MARGIN);
        Self {
            timer: IntervalTimer::new(SPAWN_INTERVAL),
            pipes,
            spawn_x: SCREEN_WIDTH as f32,
            min_y,
            max_y,
        }
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.min_y, self.max_y)
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Stop spawning for good
    pub fn stop(&mut self) {
        self.timer.stop();
    }

    /// One obstacle with its gap center drawn uniformly from the bounds
    pub fn spawn<R: Rng + ?Sized>(&self, rng: &mut R) -> Obstacle {
        let center = if self.max_y > self.min_y {
            rng.random_range(self.min_y..=self.max_y)
        } else {
            self.min_y
        };
        log::debug!("Spawning obstacle with gap center {:.1}", center);
        Obstacle::new(Rc::clone(&self.pipes), self.spawn_x, center)
    }

    /// Advance the spawn timer and return the obstacles that came due
    pub fn advance<R: Rng + ?Sized>(&mut self, dt: Duration, rng: &mut R) -> Vec<Obstacle> {
        let due = self.timer.advance(dt);
        (0..due).map(|_| self.spawn(rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Sprite;
    use crate::consts::PIPE_GAP;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn spawner(floor_height: f32) -> ObstacleSpawner {
        let pipe = Rc::new(Sprite::from_rgba("pipe-green", 4, 20, vec![255; 4 * 20 * 4]).unwrap());
        ObstacleSpawner::new(Rc::new(PipePair::new(pipe, PIPE_GAP)), floor_height)
    }

    #[test]
    fn test_timer_fires_on_interval() {
        let mut timer = IntervalTimer::new(Duration::from_millis(1500));
        assert_eq!(timer.advance(Duration::from_millis(500)), 0);
        assert_eq!(timer.advance(Duration::from_millis(999)), 0);
        assert_eq!(timer.advance(Duration::from_millis(1)), 1);
        assert_eq!(timer.advance(Duration::from_millis(3000)), 2);
    }

    #[test]
    fn test_timer_is_frame_rate_independent() {
        let mut at_60 = IntervalTimer::new(SPAWN_INTERVAL);
        let mut at_30 = IntervalTimer::new(SPAWN_INTERVAL);
        let fired_60: u32 = (0..600).map(|_| at_60.advance(Duration::from_millis(10))).sum();
        let fired_30: u32 = (0..300).map(|_| at_30.advance(Duration::from_millis(20))).sum();
        assert_eq!(fired_60, 4);
        assert_eq!(fired_30, 4);
    }

    #[test]
    fn test_stopped_timer_never_fires() {
        let mut timer = IntervalTimer::new(Duration::from_millis(10));
        timer.stop();
        assert_eq!(timer.advance(Duration::from_secs(10)), 0);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_gap_bounds() {
        assert_eq!(gap_bounds(512.0, 50.0, 100.0), (100.0, 362.0));
        assert_eq!(spawner(112.0).bounds(), (100.0, 300.0));
    }

    #[test]
    fn test_spawns_inside_bounds_at_right_edge() {
        let spawner = spawner(112.0);
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let obstacle = spawner.spawn(&mut rng);
            let center = obstacle.gap_center();
            assert!((100.0..=300.0).contains(&center), "center {}", center);
            assert_eq!(obstacle.position.x, SCREEN_WIDTH as f32);
            assert!(!obstacle.passed());
        }
    }

    #[test]
    fn test_same_seed_same_gaps() {
        let spawner = spawner(112.0);
        let mut a = Pcg32::seed_from_u64(99);
        let mut b = Pcg32::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(spawner.spawn(&mut a).position, spawner.spawn(&mut b).position);
        }
    }

    #[test]
    fn test_advance_emits_one_per_interval() {
        let mut spawner = spawner(112.0);
        let mut rng = Pcg32::seed_from_u64(1);
        let tick = Duration::from_millis(16);
        let mut spawned = Vec::new();
        for i in 1..=200 {
            for obstacle in spawner.advance(tick, &mut rng) {
                spawned.push((i, obstacle));
            }
        }
        // 1500ms / 16ms: due on ticks 94 and 188
        let ticks: Vec<u32> = spawned.iter().map(|(i, _)| *i).collect();
        assert_eq!(ticks, [94, 188]);
    }

    #[test]
    fn test_stopped_spawner_is_silent() {
        let mut spawner = spawner(112.0);
        let mut rng = Pcg32::seed_from_u64(1);
        spawner.stop();
        assert!(spawner.advance(Duration::from_secs(60), &mut rng).is_empty());
    }

    #[test]
    fn test_degenerate_bounds_use_margin() {
        // Floor so tall the range is empty
        let spawner = spawner(400.0);
        let mut rng = Pcg32::seed_from_u64(3);
        assert_eq!(spawner.spawn(&mut rng).gap_center(), 100.0);
    }
}
