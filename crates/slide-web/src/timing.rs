use std::time::Duration;

/// Delay argument for `setTimeout`, which takes a signed 32-bit millisecond
/// count. Longer windows saturate instead of wrapping negative.
#[inline]
pub fn timeout_millis(delay: Duration) -> i32 {
    delay.as_millis().min(i32::MAX as u128) as i32
}
