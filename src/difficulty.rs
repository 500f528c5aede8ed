use std::time::Duration;

/// One difficulty tier: level plus the tick interval it imposes.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SpeedSetting {
    pub level: u32,
    pub tick_interval: Duration,
}

/// (level, minimum score, tick interval in ms), ascending by score.
///
/// The interval floor of 40 ms is reached at level 7 and held through
/// level 10.
const LADDER: [(u32, u32, u64); 10] = [
    (1, 0, 100),
    (2, 50, 85),
    (3, 100, 70),
    (4, 150, 60),
    (5, 200, 50),
    (6, 250, 45),
    (7, 300, 40),
    (8, 350, 40),
    (9, 400, 40),
    (10, 500, 40),
];

/// Returns the highest tier whose score threshold is at or below `score`.
///
/// Pure table lookup; monotonic in `score`, so level never decreases and the
/// interval never increases over the life of one game.
#[must_use]
pub fn level_for(score: u32) -> SpeedSetting {
    let (level, _, interval_ms) = LADDER
        .iter()
        .rev()
        .copied()
        .find(|&(_, threshold, _)| score >= threshold)
        .unwrap_or(LADDER[0]);

    SpeedSetting {
        level,
        tick_interval: Duration::from_millis(interval_ms),
    }
}
