//! Time formatting and parsing helpers.
//!
//! All durations in a workout are whole seconds.

use chrono::Duration;

/// Format seconds as MM:SS.
///
/// Minutes are zero-padded to two digits and overflow naturally past 99
/// (`6000` seconds formats as `"100:00"`).
#[must_use]
pub fn format_time(seconds: u64) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format a duration as a human-readable string.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let total_seconds = d.num_seconds().max(0);

    if total_seconds < 60 {
        return format!(
            "{} second{}",
            total_seconds,
            if total_seconds == 1 { "" } else { "s" }
        );
    }

    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{} hour{}", hours, if hours == 1 { "" } else { "s" }));
    }
    if minutes > 0 {
        parts.push(format!(
            "{} minute{}",
            minutes,
            if minutes == 1 { "" } else { "s" }
        ));
    }
    if seconds > 0 {
        parts.push(format!(
            "{} second{}",
            seconds,
            if seconds == 1 { "" } else { "s" }
        ));
    }

    parts.join(", ")
}

/// Parse a duration string like "45", "90s", "1m30s", "2m" or "01:30".
///
/// A bare number is taken as seconds. Returns the number of seconds, or
/// `None` if the input is not a duration. Zero is a valid duration.
#[must_use]
pub fn parse_duration(s: &str) -> Option<u32> {
    let s = s.trim().to_lowercase();
    if s.is_empty() {
        return None;
    }

    if let Ok(seconds) = s.parse::<u32>() {
        return Some(seconds);
    }

    // MM:SS
    if let Some((m, sec)) = s.split_once(':') {
        let minutes: u32 = m.parse().ok()?;
        let seconds: u32 = sec.parse().ok()?;
        if seconds >= 60 {
            return None;
        }
        return minutes.checked_mul(60)?.checked_add(seconds);
    }

    let mut total_seconds: u32 = 0;
    let mut current_num = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            current_num.push(c);
        } else {
            if current_num.is_empty() {
                return None;
            }
            let num: u32 = current_num.parse().ok()?;
            current_num.clear();

            let unit = match c {
                'h' => 3600,
                'm' => 60,
                's' => 1,
                _ => return None,
            };
            total_seconds = total_seconds.checked_add(num.checked_mul(unit)?)?;
        }
    }

    // Trailing number without unit counts as seconds ("1m30")
    if !current_num.is_empty() {
        let num: u32 = current_num.parse().ok()?;
        total_seconds = total_seconds.checked_add(num)?;
    }

    Some(total_seconds)
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0)) * width as f64) as usize;
    let empty = width.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(5), "00:05");
        assert_eq!(format_time(90), "01:30");
        assert_eq!(format_time(180), "03:00");
        assert_eq!(format_time(5999), "99:59");
    }

    #[test]
    fn test_format_time_overflows_minutes() {
        assert_eq!(format_time(6000), "100:00");
    }

    #[test]
    fn test_parse_duration_seconds() {
        assert_eq!(parse_duration("45"), Some(45));
        assert_eq!(parse_duration("90s"), Some(90));
        assert_eq!(parse_duration("0"), Some(0));
    }

    #[test]
    fn test_parse_duration_minutes() {
        assert_eq!(parse_duration("2m"), Some(120));
        assert_eq!(parse_duration("1m30s"), Some(90));
        assert_eq!(parse_duration("1m30"), Some(90));
        assert_eq!(parse_duration("1h"), Some(3600));
    }

    #[test]
    fn test_parse_duration_clock() {
        assert_eq!(parse_duration("01:30"), Some(90));
        assert_eq!(parse_duration("0:05"), Some(5));
        assert!(parse_duration("1:75").is_none());
    }

    #[test]
    fn test_parse_duration_invalid() {
        assert!(parse_duration("").is_none());
        assert!(parse_duration("abc").is_none());
        assert!(parse_duration("-5").is_none());
        assert!(parse_duration("5x").is_none());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::seconds(45)), "45 seconds");
        assert_eq!(format_duration(Duration::seconds(1)), "1 second");
        assert_eq!(format_duration(Duration::minutes(3)), "3 minutes");
        assert_eq!(format_duration(Duration::seconds(90)), "1 minute, 30 seconds");
        assert_eq!(format_duration(Duration::minutes(61)), "1 hour, 1 minute");
    }

    #[test]
    fn test_render_progress_bar() {
        let bar = render_progress_bar(0.5, 10);
        assert!(bar.contains("█████"));
        assert!(bar.contains("░░░░░"));
        assert_eq!(render_progress_bar(2.0, 4), "[████]");
    }
}
