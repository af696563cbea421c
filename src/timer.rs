// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Two-slot rolling accumulator for the fps readout.
//!
//! Samples land in the active slot. Once that slot holds a full window
//! (FPS_WINDOW_MS or more) the other slot is zeroed and becomes active, while
//! the filled one keeps its totals until its own next turn. The estimate
//! always sums both slots, which smooths single-frame jitter without keeping
//! a sample history.

use crate::FPS_WINDOW_MS;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Slot {
    pub frames: u32,
    pub elapsed_ms: f32,
}

#[derive(Debug, Clone, Default)]
pub struct FrameTimer {
    slots: [Slot; 2],
    active: usize,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one frame of `dt_ms` to the active slot, rolling over when the
    /// window is full.
    pub fn sample(&mut self, dt_ms: f32) {
        let slot = &mut self.slots[self.active];
        slot.frames += 1;
        slot.elapsed_ms += dt_ms;
        if slot.elapsed_ms >= FPS_WINDOW_MS {
            self.active ^= 1;
            self.slots[self.active] = Slot::default();
        }
    }

    /// frames / ms * 1000 over both slots. NaN before any time has been
    /// sampled, use `fps()` for display.
    pub fn estimate_fps(&self) -> f32 {
        let frames: u32 = self.slots.iter().map(|s| s.frames).sum();
        let elapsed: f32 = self.slots.iter().map(|s| s.elapsed_ms).sum();
        frames as f32 * 1000.0 / elapsed
    }

    /// Truncated estimate, None while it is not a finite number.
    pub fn fps(&self) -> Option<u32> {
        let f = self.estimate_fps();
        if f.is_finite() {
            Some(f as u32)
        } else {
            None
        }
    }

    pub fn active_slot(&self) -> usize {
        self.active
    }

    pub fn slot(&self, i: usize) -> Slot {
        self.slots[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_timer_has_no_estimate() {
        let t = FrameTimer::new();
        assert!(t.estimate_fps().is_nan());
        assert_eq!(t.fps(), None);
    }

    #[test]
    fn zero_length_frame_has_no_estimate() {
        let mut t = FrameTimer::new();
        t.sample(0.0);
        assert!(t.estimate_fps().is_infinite());
        assert_eq!(t.fps(), None);
    }

    #[test]
    fn steady_frames_give_steady_rate() {
        let mut t = FrameTimer::new();
        for _ in 0..30 {
            t.sample(20.0);
        }
        assert_eq!(t.fps(), Some(50));
    }

    #[test]
    fn rollover_zeros_the_newly_active_slot() {
        let mut t = FrameTimer::new();
        t.sample(600.0);
        assert_eq!(t.active_slot(), 0);
        t.sample(400.0);
        assert_eq!(t.active_slot(), 1);
        assert_eq!(t.slot(1), Slot::default());
        // the filled slot keeps its totals
        assert_eq!(t.slot(0), Slot { frames: 2, elapsed_ms: 1000.0 });

        t.sample(1000.0);
        assert_eq!(t.active_slot(), 0);
        assert_eq!(t.slot(0), Slot::default());
        assert_eq!(t.slot(1), Slot { frames: 1, elapsed_ms: 1000.0 });
    }

    #[test]
    fn estimate_blends_both_windows() {
        let mut t = FrameTimer::new();
        // 10 frames over the first second
        for _ in 0..10 {
            t.sample(100.0);
        }
        assert_eq!(t.active_slot(), 1);
        // 20 frames over half a second in the new window
        for _ in 0..20 {
            t.sample(25.0);
        }
        // 30 frames / 1500ms
        assert_eq!(t.fps(), Some(20));
    }

    proptest! {
        #[test]
        fn n_even_samples_fill_one_window(n in 1u32..500) {
            let mut t = FrameTimer::new();
            let dt = FPS_WINDOW_MS / n as f32;
            // float sums may land a hair short of the threshold, so the
            // last sample carries the remainder
            let mut sum = 0.0f32;
            for i in 0..n {
                let d = if i + 1 == n { (FPS_WINDOW_MS - sum).max(dt) } else { dt };
                prop_assert_eq!(t.active_slot(), 0);
                t.sample(d);
                sum += d;
            }
            prop_assert_eq!(t.active_slot(), 1);
            prop_assert_eq!(t.slot(1), Slot::default());
            prop_assert_eq!(t.slot(0).frames, n);
            let fps = t.estimate_fps();
            prop_assert!((fps - n as f32).abs() <= n as f32 * 1e-3, "fps {} n {}", fps, n);
        }

        #[test]
        fn active_slot_alternates(dts in proptest::collection::vec(1.0f32..700.0, 1..200)) {
            let mut t = FrameTimer::new();
            for dt in dts {
                let before = t.active_slot();
                let filled = t.slot(before).elapsed_ms + dt >= FPS_WINDOW_MS;
                t.sample(dt);
                if filled {
                    prop_assert_eq!(t.active_slot(), before ^ 1);
                    prop_assert_eq!(t.slot(t.active_slot()), Slot::default());
                } else {
                    prop_assert_eq!(t.active_slot(), before);
                }
            }
        }
    }
}
