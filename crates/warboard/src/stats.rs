use std::time::{Duration, Instant};

const WINDOW: Duration = Duration::from_secs(1);

/// Frames-per-second counter averaged over one-second windows.
#[derive(Debug, Default)]
pub struct FrameStats {
    window_start: Option<Instant>,
    frames: u32,
}

impl FrameStats {
    /// Counts one frame presented at `now`. Returns the average rate once a
    /// full window has elapsed, then starts the next window.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        let Some(start) = self.window_start else {
            self.window_start = Some(now);
            self.frames = 0;
            return None;
        };

        self.frames += 1;
        let elapsed = now.saturating_duration_since(start);
        if elapsed < WINDOW {
            return None;
        }

        let fps = self.frames as f32 / elapsed.as_secs_f32();
        self.window_start = Some(now);
        self.frames = 0;
        Some(fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_only_starts_window() {
        let mut s = FrameStats::default();
        assert_eq!(s.tick(Instant::now()), None);
    }

    #[test]
    fn reports_after_one_second() {
        let t0 = Instant::now();
        let mut s = FrameStats::default();
        s.tick(t0);
        for i in 1..60 {
            assert_eq!(s.tick(t0 + Duration::from_millis(i * 16)), None);
        }
        let fps = s.tick(t0 + Duration::from_secs(1)).unwrap();
        assert!((fps - 60.0).abs() < 1e-3);
    }

    #[test]
    fn window_restarts_after_report() {
        let t0 = Instant::now();
        let mut s = FrameStats::default();
        s.tick(t0);
        s.tick(t0 + Duration::from_secs(2));
        assert_eq!(s.tick(t0 + Duration::from_millis(2500)), None);
        let fps = s.tick(t0 + Duration::from_secs(3)).unwrap();
        assert!((fps - 2.0).abs() < 1e-3);
    }
}
