use std::time::{SystemTime, UNIX_EPOCH};

/// 100-nanosecond ticks from year 1, day 1 to the Unix epoch. The save
/// format timestamps count ticks from the earlier epoch.
pub const UNIX_EPOCH_TICKS: i64 = 621_355_968_000_000_000;

/// One millisecond in 100-nanosecond ticks.
pub const TICKS_PER_MILLISECOND: i64 = 10_000;

/// Source of "now", injected so timestamp encoding is deterministic under
/// test.
pub trait Clock {
    /// Whole milliseconds since the Unix epoch. Negative before 1970.
    fn now_unix_millis(&self) -> i64;
}

/// Wall-clock time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix_millis(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_millis() as i64,
            Err(before_epoch) => -(before_epoch.duration().as_millis() as i64),
        }
    }
}

/// Encode the clock's current reading as the save format expects: a signed
/// 64-bit tick count in little-endian byte order.
///
/// Integer arithmetic only; the low-order ticks do not survive a round trip
/// through floating point. The multiply cannot overflow for any reachable
/// clock value (it would take a reading around the year 29000).
pub fn encode_save_time<C: Clock>(clock: &C) -> [u8; 8] {
    unix_millis_to_ticks(clock.now_unix_millis()).to_le_bytes()
}

/// Milliseconds since the Unix epoch to ticks since year 1.
pub fn unix_millis_to_ticks(millis: i64) -> i64 {
    millis * TICKS_PER_MILLISECOND + UNIX_EPOCH_TICKS
}

/// Inverse of [`unix_millis_to_ticks`], exact for whole-millisecond inputs.
pub fn ticks_to_unix_millis(ticks: i64) -> i64 {
    (ticks - UNIX_EPOCH_TICKS) / TICKS_PER_MILLISECOND
}
