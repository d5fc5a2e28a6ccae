//=========================================================================
// Frame Scheduler
//
// Paces the main loop to a fixed time step.
//
// Each call measures the wall-clock time elapsed since the previous
// call, sleeps off the remainder of the target step, and reports the
// measured delta to the caller. The caller simulates with true elapsed
// time while presentation stays paced at the fixed step.
//
// Pacing discipline:
// - The internal deadline advances by exactly one target step per call
//   while the loop keeps pace (optimistic pacing).
// - When a call arrives late (elapsed > target), no sleep is issued and
//   the deadline is resynchronized to "now". Without the resync, a
//   single stall would be followed by a burst of unpaced iterations as
//   the scheduler tried to pay back the backlog.
//
// There are no failure modes here: clock reads and sleeps are treated
// as unconditionally successful (spec'd fail-fast setup is the
// backend's concern).
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::platform::Platform;

//=== Constants ===========================================================

const INV_MILLIS: f64 = 1.0 / 1000.0;

//=== FrameScheduler ======================================================

/// Fixed-step pacer over the platform's millisecond clock.
///
/// Owns nothing but its deadline; the clock and the sleep primitive are
/// borrowed from the platform on every call.
#[derive(Debug)]
pub(crate) struct FrameScheduler {
    /// Clock reading (seconds) the previous frame was scheduled against.
    last: f64,
}

impl FrameScheduler {
    /// Creates a scheduler with its deadline at the clock epoch.
    pub fn new() -> Self {
        Self { last: 0.0 }
    }

    //--- pace() -----------------------------------------------------------

    /// Runs one pacing step and returns the measured elapsed time in
    /// seconds.
    ///
    /// Sleeps whatever remains of `target_step` seconds since the
    /// previous call, or nothing when the loop is running behind. The
    /// returned value is the true measured delta, not the target.
    pub fn pace<P: Platform>(&mut self, platform: &mut P, target_step: f64) -> f64 {
        let now = platform.now_ms() as f64 * INV_MILLIS;
        let delta = now - self.last;
        let wait = target_step - delta;

        // Optimistic: assume the step lands on the deadline
        self.last += target_step;

        if wait > 0.0 {
            platform.delay(Duration::from_secs_f64(wait));
        } else {
            // Running behind: rebase on "now" so one stall does not turn
            // into a burst of unpaced catch-up iterations
            self.last = now;
        }

        delta
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::testing::ScriptedPlatform;

    const TARGET: f64 = 0.016;
    const EPSILON: f64 = 1e-6;

    fn approx(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < EPSILON
    }

    /// Tests that a fast frame sleeps off the remainder of the step and
    /// reports the measured elapsed time, not the target.
    #[test]
    fn fast_frame_sleeps_remainder_and_reports_measured_delta() {
        let mut platform = ScriptedPlatform::new();
        let mut scheduler = FrameScheduler::new();

        // Warm-up step from the epoch
        scheduler.pace(&mut platform, TARGET);

        // The frame's work takes 10 ms
        platform.advance_ms(10);
        let delta = scheduler.pace(&mut platform, TARGET);

        assert!(approx(delta, 0.010), "Expected 0.010 s elapsed, got {}", delta);

        let slept = platform.slept.last().copied().map(|d| d.as_secs_f64());
        assert!(
            slept.is_some_and(|s| approx(s, 0.006)),
            "Expected a ~0.006 s sleep, got {:?}",
            slept
        );
    }

    /// Tests that an exactly on-time frame does not oversleep.
    #[test]
    fn on_pace_frames_keep_fixed_cadence() {
        let mut platform = ScriptedPlatform::new();
        let mut scheduler = FrameScheduler::new();

        scheduler.pace(&mut platform, TARGET);

        // Three consecutive frames each taking 4 ms of work
        for _ in 0..3 {
            platform.advance_ms(4);
            let delta = scheduler.pace(&mut platform, TARGET);
            assert!(approx(delta, 0.004), "Unexpected delta {}", delta);
        }

        // Every paced frame slept 16 - 4 = 12 ms (plus the warm-up sleep)
        for slept in &platform.slept[1..] {
            assert!(approx(slept.as_secs_f64(), 0.012));
        }
    }

    /// Tests that a stalled frame skips the sleep entirely.
    #[test]
    fn stalled_frame_does_not_sleep() {
        let mut platform = ScriptedPlatform::new();
        let mut scheduler = FrameScheduler::new();

        scheduler.pace(&mut platform, TARGET);
        let sleeps_before = platform.slept.len();

        // Simulate a 50 ms stall against a 16 ms target
        platform.advance_ms(50);
        let delta = scheduler.pace(&mut platform, TARGET);

        assert!(approx(delta, 0.050), "Expected 0.050 s elapsed, got {}", delta);
        assert_eq!(platform.slept.len(), sleeps_before, "Stalled frame must not sleep");
    }

    /// Tests that the deadline is rebased after a stall: the following
    /// frame paces normally instead of burning down a backlog.
    #[test]
    fn deadline_resynchronized_after_stall() {
        let mut platform = ScriptedPlatform::new();
        let mut scheduler = FrameScheduler::new();

        scheduler.pace(&mut platform, TARGET);

        // Stall, then a normal 10 ms frame
        platform.advance_ms(50);
        scheduler.pace(&mut platform, TARGET);

        platform.advance_ms(10);
        let delta = scheduler.pace(&mut platform, TARGET);

        assert!(approx(delta, 0.010), "Post-stall delta should be clean, got {}", delta);

        let slept = platform.slept.last().copied().map(|d| d.as_secs_f64());
        assert!(
            slept.is_some_and(|s| approx(s, 0.006)),
            "Post-stall frame should pace normally, got {:?}",
            slept
        );
    }

    /// Tests that back-to-back stalls never accumulate a sleep debt.
    #[test]
    fn repeated_stalls_do_not_compound() {
        let mut platform = ScriptedPlatform::new();
        let mut scheduler = FrameScheduler::new();

        scheduler.pace(&mut platform, TARGET);
        let sleeps_before = platform.slept.len();

        for _ in 0..10 {
            platform.advance_ms(40);
            let delta = scheduler.pace(&mut platform, TARGET);
            assert!(approx(delta, 0.040), "Each stall reports its own delta");
        }

        assert_eq!(platform.slept.len(), sleeps_before);
    }
}
