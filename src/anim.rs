// The stickman's sense of rhythm: when to blink, sway, and tap its foot.
//
// Two independent clocks run here. The state machine decides what the
// stickman is "doing" (a beat counter picks the next move each time a dwell
// runs out), while the pose cycle flips through the four drawn grids on its
// own fixed schedule. The two are deliberately not synchronized; the
// character reads as fidgety rather than metronomic.

use crate::sprite::Pose;
use std::time::{Duration, Instant};

/// What the stickman is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimState {
    Idle,
    Blinking,
    SwayingLeft,
    SwayingRight,
    FootTapping,
}

const BLINK_DWELL: Duration = Duration::from_millis(150);
const SWAY_DWELL: Duration = Duration::from_millis(800);
const TAP_DWELL: Duration = Duration::from_millis(300);

/// Idle dwells are 2000ms plus up to this much extra, rolled per entry.
const IDLE_BASE_MS: u64 = 2000;
const IDLE_SPREAD_MS: u32 = 1000;

/// Where the next move comes from, given the beat counter.
///
/// Checks run in this exact order, and only the first match fires: a beat
/// divisible by both 8 and 12 blinks, it does not sway.
pub fn transition(state: AnimState, counter: u64) -> AnimState {
    match state {
        AnimState::Idle => {
            if counter % 8 == 0 {
                AnimState::Blinking
            } else if counter % 12 == 0 {
                AnimState::SwayingLeft
            } else if counter % 15 == 0 {
                AnimState::FootTapping
            } else {
                AnimState::Idle
            }
        }
        AnimState::Blinking => AnimState::Idle,
        AnimState::SwayingLeft => AnimState::SwayingRight,
        AnimState::SwayingRight => AnimState::Idle,
        AnimState::FootTapping => {
            if counter % 2 == 0 {
                AnimState::Idle
            } else {
                AnimState::FootTapping
            }
        }
    }
}

/// Supplies the randomized Idle dwell. Production uses [`JitteredIdle`];
/// tests plug in a fixed duration to stay deterministic.
pub trait IdleDwell {
    fn next_dwell(&mut self) -> Duration;
}

// ----------------------------- tiny RNG (no external crate) -----------------------------

/// Deterministic xorshift32 RNG for lightweight randomness.
/// Visual: keeps the idle pauses from feeling like clockwork.
#[derive(Clone)]
struct Rng32 {
    state: u32,
}

impl Rng32 {
    fn from_seed(seed: u32) -> Self {
        Self { state: seed | 1 }
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        // Xorshift—fast and good enough for dwell jitter
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

/// The production idle dwell: 2000–3000ms, re-rolled on each Idle entry.
pub struct JitteredIdle {
    rng: Rng32,
}

impl JitteredIdle {
    pub fn new() -> Self {
        Self { rng: Rng32::from_seed(0x57AC_C4A7) }
    }
}

impl IdleDwell for JitteredIdle {
    fn next_dwell(&mut self) -> Duration {
        Duration::from_millis(IDLE_BASE_MS + u64::from(self.rng.next_u32() % IDLE_SPREAD_MS))
    }
}

/// The state machine itself: current move, beat counter, and the clock for
/// the move's dwell. Owned by the tick loop; no globals.
pub struct AnimationContext {
    state: AnimState,
    counter: u64,
    entered_at: Instant,
    dwell: Duration,
}

impl AnimationContext {
    pub fn new(now: Instant, idle: &mut impl IdleDwell) -> Self {
        Self {
            state: AnimState::Idle,
            counter: 0,
            entered_at: now,
            dwell: idle.next_dwell(),
        }
    }

    pub fn state(&self) -> AnimState {
        self.state
    }

    /// Beats completed since startup. Only ever grows.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Run one tick of the state machine. Returns true when the dwell
    /// expired and a transition was evaluated (even one that lands back in
    /// the same state; re-entry restarts the dwell).
    pub fn advance(&mut self, now: Instant, idle: &mut impl IdleDwell) -> bool {
        if now.duration_since(self.entered_at) <= self.dwell {
            return false;
        }
        self.counter += 1;
        self.state = transition(self.state, self.counter);
        self.entered_at = now;
        self.dwell = match self.state {
            AnimState::Idle => idle.next_dwell(),
            AnimState::Blinking => BLINK_DWELL,
            AnimState::SwayingLeft | AnimState::SwayingRight => SWAY_DWELL,
            AnimState::FootTapping => TAP_DWELL,
        };
        true
    }
}

// ----------------------------- pose cycle --------------------------------

/// Draw order and per-slot hold times for the pose cycle.
/// Visual: long stretches of the base pose, a quick blink, then two sways.
const POSE_ORDER: [Pose; 4] = [Pose::Normal, Pose::Blink, Pose::SwayLeft, Pose::SwayRight];
const SLOT_HOLD_MS: [u64; 4] = [2200, 120, 400, 400];

/// Fixed-schedule timer selecting which grid gets drawn. Runs beside the
/// state machine without consulting it.
pub struct PoseCycle {
    slot: usize,
    advanced_at: Instant,
}

impl PoseCycle {
    pub fn new(now: Instant) -> Self {
        Self { slot: 0, advanced_at: now }
    }

    /// Move to the next slot once the current one's hold time is spent.
    pub fn advance(&mut self, now: Instant) {
        let hold = Duration::from_millis(SLOT_HOLD_MS[self.slot]);
        if now.duration_since(self.advanced_at) > hold {
            self.slot = (self.slot + 1) % POSE_ORDER.len();
            self.advanced_at = now;
        }
    }

    pub fn pose(&self) -> Pose {
        POSE_ORDER[self.slot]
    }

    /// Current slot index, always in 0..4.
    pub fn slot(&self) -> usize {
        self.slot
    }
}
