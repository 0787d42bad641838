use chrono::{Datelike, NaiveDate};

/// ISO week id in the form the journal pipeline uses: "2025-W24".
pub fn week_id(date: NaiveDate) -> String {
    let week = date.iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}

/// Round to one decimal place, matching the pipeline's percentages.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Format a percentage, dropping the ".0" on whole numbers.
pub fn format_percent(value: f64) -> String {
    let rounded = round1(value);
    if rounded == rounded.floor() {
        format!("{}%", rounded as i64)
    } else {
        format!("{:.1}%", rounded)
    }
}

/// Long human date, e.g. "Sunday, Jun 15, 2025".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %b %d, %Y").to_string()
}

/// Create a simple ASCII progress bar
pub fn progress_bar(filled: u32, total: u32, width: usize) -> String {
    if total == 0 {
        return "░".repeat(width);
    }
    let ratio = (filled as f64 / total as f64).min(1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_ids_use_iso_weeks() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(week_id(date), "2025-W24");
        // Dec 29, 2025 falls in the first ISO week of 2026.
        let rollover = NaiveDate::from_ymd_opt(2025, 12, 29).unwrap();
        assert_eq!(week_id(rollover), "2026-W01");
    }

    #[test]
    fn rounding_and_percent_formatting() {
        assert_eq!(round1(66.666), 66.7);
        assert_eq!(round1(20.338), 20.3);
        assert_eq!(round1(0.0), 0.0);
        assert_eq!(format_percent(62.5), "62.5%");
        assert_eq!(format_percent(50.0), "50%");
    }

    #[test]
    fn progress_bar_widths() {
        assert_eq!(progress_bar(0, 0, 4), "░░░░");
        assert_eq!(progress_bar(2, 4, 4), "██░░");
        assert_eq!(progress_bar(9, 4, 4), "████");
    }
}
