use chrono::{DateTime, TimeZone, Utc};

const MONTH_DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A card's month/year expiry pair.
///
/// A card stays usable through the last instant of its expiry month, so the
/// expiration instant is 23:59:59 UTC on the last calendar day of that month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryDate {
    month: u32,
    year: i32,
}

impl ExpiryDate {
    pub fn new(month: u32, year: i32) -> Self {
        Self { month, year }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// The last valid instant of the expiry month, or `None` when the month
    /// is not a calendar month.
    pub fn expiration_instant(&self) -> Option<DateTime<Utc>> {
        if !(1..=12).contains(&self.month) {
            return None;
        }
        let day = Self::last_day(self.month, self.year);
        Utc.with_ymd_and_hms(self.year, self.month, day, 23, 59, 59)
            .single()
    }

    /// True iff `now` is strictly after the expiration instant. A pair with
    /// no expiration instant counts as expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expiration_instant() {
            Some(instant) => now > instant,
            None => true,
        }
    }

    fn last_day(month: u32, year: i32) -> u32 {
        if month == 2 && Self::is_leap_year(year) {
            return 29;
        }
        MONTH_DAYS[(month - 1) as usize]
    }

    // Proleptic Gregorian rule, computed arithmetically.
    fn is_leap_year(year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }
}
