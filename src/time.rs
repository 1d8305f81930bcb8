//! Frame clock: turns draw-frame timestamps into whole ticks.
//!
//! Every delayed behaviour on the site (simulated submission, notice expiry,
//! typewriter, counters) counts ticks, so it can be driven directly in tests.
//!
//! Ticks are derived from the time elapsed since the first frame, minus any
//! time skipped while the page was hidden, so rounding never accumulates.

/// Longest gap honoured between two frames, e.g. after a background tab.
const MAX_FRAME_GAP_MS: f64 = 500.0;

pub struct SiteClock {
    ms_per_tick: f64,
    /// First frame timestamp and the latest one, once running.
    span: Option<(f64, f64)>,
    /// Wall time excluded from the elapsed total: the excess of long gaps,
    /// and any backwards jump.
    skipped_ms: f64,
    pub total_ticks: u64,
}

impl SiteClock {
    pub fn new(ticks_per_sec: u32) -> Self {
        Self {
            ms_per_tick: 1000.0 / ticks_per_sec.max(1) as f64,
            span: None,
            skipped_ms: 0.0,
            total_ticks: 0,
        }
    }

    /// Feed the frame timestamp (`performance.now()`), get the ticks elapsed
    /// since the previous call.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        let Some((origin, last)) = self.span else {
            self.span = Some((now_ms, now_ms));
            return 0;
        };
        let gap = now_ms - last;
        self.skipped_ms += gap - gap.clamp(0.0, MAX_FRAME_GAP_MS);
        self.span = Some((origin, now_ms));

        let elapsed = (now_ms - origin - self.skipped_ms).max(0.0);
        let ticks_so_far = (elapsed / self.ms_per_tick) as u64;
        let delta = ticks_so_far.saturating_sub(self.total_ticks);
        self.total_ticks = self.total_ticks.max(ticks_so_far);
        delta.min(u32::MAX as u64) as u32
    }
}
