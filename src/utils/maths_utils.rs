/// Round to 2 decimal places. Stored sample values are rounded with this
/// before anything downstream sees them, so the rounding is authoritative
/// rather than cosmetic.
#[inline]
pub fn round_2dp(val: f64) -> f64 {
    (val * 100.0).round() / 100.0
}

#[inline]
pub fn round_1dp(val: f64) -> f64 {
    (val * 10.0).round() / 10.0
}

/// "1.5M" / "12.3K" style counts for the leaderboard display.
pub fn format_compact_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}
