//! Display numbers derived from record fields at render time.
//!
//! Degenerate inputs have fixed answers: a zero goal is 0% funded, anything
//! over the goal is 100% funded, and a deadline in the past has 0 days left.

use chrono::NaiveDate;

/// `round(part / whole * 100)` clamped to `0..=100`.
///
/// Halves round up, matching what backers see on the listing cards
/// (`66.5%` shows as `67%`). A zero `whole` yields `0`.
pub fn progress_percent(part: u64, whole: u64) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = u128::from(part);
    let whole = u128::from(whole);
    let rounded = (part * 200 + whole) / (whole * 2);
    rounded.min(100) as u8
}

/// Whole days from `today` until `deadline`, never negative
pub fn days_left(deadline: NaiveDate, today: NaiveDate) -> u32 {
    let days = (deadline - today).num_days();
    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}

/// Time remaining before a deadline, as shown on cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    DaysLeft(u32),
    LastDay,
    Closed,
}

impl Countdown {
    pub fn between(deadline: NaiveDate, today: NaiveDate) -> Self {
        if deadline < today {
            Countdown::Closed
        } else if deadline == today {
            Countdown::LastDay
        } else {
            Countdown::DaysLeft(days_left(deadline, today))
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Countdown::Closed)
    }
}

impl std::fmt::Display for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Countdown::DaysLeft(1) => write!(f, "1 day left"),
            Countdown::DaysLeft(n) => write!(f, "{n} days left"),
            Countdown::LastDay => write!(f, "Last day"),
            Countdown::Closed => write!(f, "Funding closed"),
        }
    }
}

/// `$` plus the amount with comma thousands separators (`$150,000`)
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// First letter of each word, uppercased (`"Dr. Sarah Chen"` -> `"DSC"`)
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_progress_percent_basic() {
        assert_eq!(progress_percent(75_000, 150_000), 50);
        assert_eq!(progress_percent(42_000, 100_000), 42);
        assert_eq!(progress_percent(28_000, 80_000), 35);
        assert_eq!(progress_percent(95_000, 120_000), 79);
        assert_eq!(progress_percent(18_000, 60_000), 30);
        assert_eq!(progress_percent(67_000, 90_000), 74);
    }

    #[test]
    fn test_progress_percent_rounds_half_up() {
        assert_eq!(progress_percent(1, 8), 13); // 12.5
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(2, 3), 67);
    }

    #[test]
    fn test_progress_percent_degenerate() {
        assert_eq!(progress_percent(0, 0), 0);
        assert_eq!(progress_percent(500, 0), 0);
        assert_eq!(progress_percent(300, 100), 100);
        assert_eq!(progress_percent(u64::MAX, 1), 100);
        assert_eq!(progress_percent(u64::MAX, u64::MAX), 100);
    }

    #[test]
    fn test_days_left() {
        assert_eq!(days_left(date(2024, 8, 15), date(2024, 7, 31)), 15);
        assert_eq!(days_left(date(2024, 8, 15), date(2024, 8, 15)), 0);
        assert_eq!(days_left(date(2024, 8, 15), date(2025, 1, 1)), 0);
    }

    #[test]
    fn test_countdown_display() {
        let today = date(2024, 7, 31);
        assert_eq!(
            Countdown::between(date(2024, 8, 15), today).to_string(),
            "15 days left"
        );
        assert_eq!(
            Countdown::between(date(2024, 8, 1), today).to_string(),
            "1 day left"
        );
        assert_eq!(Countdown::between(today, today), Countdown::LastDay);
        let closed = Countdown::between(date(2024, 7, 1), today);
        assert!(closed.is_closed());
        assert_eq!(closed.to_string(), "Funding closed");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(999), "$999");
        assert_eq!(format_usd(2_500), "$2,500");
        assert_eq!(format_usd(150_000), "$150,000");
        assert_eq!(format_usd(1_234_567), "$1,234,567");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Sarah Chen"), "SC");
        assert_eq!(initials("  lisa   wang "), "LW");
        assert_eq!(initials(""), "");
    }
}
