use std::fmt;

use super::Timestamp;

/// What a timer shows after every operation: total run time, the current
/// instance label, and time spent in the current instance. Fields are empty
/// until they have a meaningful value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayTriple {
    pub total: String,
    pub label: String,
    pub instance: String,
}

impl fmt::Display for DisplayTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.total, self.label, self.instance)
    }
}

/// Format `end - start` as `H:MM:SS`, prefixed with a day count past 24h.
/// Negative spans (clock moved backwards) show as zero.
pub fn format_elapsed(start: Timestamp, end: Timestamp) -> String {
    format_duration(end.saturating_sub(start))
}

pub fn format_duration(secs: i64) -> String {
    let secs = secs.max(0);
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;
    let seconds = secs % 60;

    match days {
        0 => format!("{hours}:{minutes:02}:{seconds:02}"),
        1 => format!("1 day, {hours}:{minutes:02}:{seconds:02}"),
        _ => format!("{days} days, {hours}:{minutes:02}:{seconds:02}"),
    }
}
