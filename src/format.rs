//! Countdown display formatting

/// Format a seconds count as "MM:SS".
///
/// Minutes are not clamped to two digits, so 125 minutes renders as "125:00".
pub fn format_clock(seconds: u64) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}
