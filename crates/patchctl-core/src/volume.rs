//! Volume level rules.

/// Highest accepted volume percentage (100 = unity gain, above = software
/// amplification).
pub const VOLUME_MAX: u32 = 153;

/// Clamp a requested volume percentage into `[0, VOLUME_MAX]`.
///
/// Out-of-range requests are clamped, never rejected.
#[must_use]
pub fn clamp_percent(value: i32) -> u32 {
    value.clamp(0, VOLUME_MAX as i32) as u32
}
