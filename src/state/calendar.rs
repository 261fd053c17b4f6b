//! Calendar View State
//!
//! Pure date-grid arithmetic for the month calendar. All rollover and
//! leap-year handling is delegated to chrono; nothing here re-implements
//! calendar math by hand.

use chrono::{Datelike, NaiveDate};

/// The (year, month) currently displayed by the calendar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    /// 1-based month (1 = January)
    pub month: u32,
}

impl MonthView {
    /// The month containing today
    pub fn current() -> Self {
        let today = chrono::Utc::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    fn first_day(&self) -> NaiveDate {
        // Month is always 1..=12 by construction, so this never fails for
        // years chrono can represent.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    /// Previous month, rolling January back to December
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Next month, rolling December forward to January
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Weekday index of the 1st of this month (Sunday = 0), which is also
    /// the number of leading blank cells in the grid.
    pub fn leading_blanks(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    /// Number of days in this month
    pub fn day_count(&self) -> u32 {
        let next = self.next();
        next.first_day().pred_opt().map(|d| d.day()).unwrap_or(31)
    }

    /// `YYYY-MM-DD` key for a day of this month, matching the date prefix
    /// of the API's `date_time` field
    pub fn date_key(&self, day: u32) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, day)
    }

    /// Header label, e.g. "January 2024"
    pub fn label(&self) -> String {
        let name = match self.month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => "Unknown",
        };
        format!("{} {}", name, self.year)
    }
}

/// Toggle the expanded day: clicking the already-expanded day collapses it,
/// clicking any other day expands that one (collapsing the previous).
pub fn toggle_day(expanded: Option<u32>, day: u32) -> Option<u32> {
    if expanded == Some(day) {
        None
    } else {
        Some(day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feb_2024_leap_year() {
        let view = MonthView {
            year: 2024,
            month: 2,
        };
        assert_eq!(view.day_count(), 29);
        // Feb 1 2024 was a Thursday
        assert_eq!(view.leading_blanks(), 4);
    }

    #[test]
    fn test_feb_2023_non_leap() {
        let view = MonthView {
            year: 2023,
            month: 2,
        };
        assert_eq!(view.day_count(), 28);
    }

    #[test]
    fn test_month_rollover() {
        let dec = MonthView {
            year: 2024,
            month: 12,
        };
        assert_eq!(
            dec.next(),
            MonthView {
                year: 2025,
                month: 1
            }
        );

        let jan = MonthView {
            year: 2024,
            month: 1,
        };
        assert_eq!(
            jan.prev(),
            MonthView {
                year: 2023,
                month: 12
            }
        );
        assert_eq!(jan.prev().next(), jan);
    }

    #[test]
    fn test_date_key_zero_padded() {
        let view = MonthView {
            year: 2024,
            month: 1,
        };
        assert_eq!(view.date_key(5), "2024-01-05");
        assert_eq!(view.date_key(15), "2024-01-15");
    }

    #[test]
    fn test_label() {
        let view = MonthView {
            year: 2024,
            month: 1,
        };
        assert_eq!(view.label(), "January 2024");
    }

    #[test]
    fn test_toggle_day() {
        // expand, then collapse on the second click of the same day
        assert_eq!(toggle_day(None, 5), Some(5));
        assert_eq!(toggle_day(Some(5), 5), None);
        // selecting a new day collapses the previous one
        assert_eq!(toggle_day(Some(5), 9), Some(9));
    }
}
