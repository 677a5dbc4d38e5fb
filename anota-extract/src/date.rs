//! Date resolution against a reference day.
//!
//! Precedence: "ontem", "amanhã", an explicit `D/M[/Y]` date, "dia N", then
//! the reference day itself. Impossible dates fall back to the reference day.

use anota_core::{checked_ymd, shift_days};
use chrono::{Datelike, NaiveDate};
use regex::{Captures, Regex};
use tracing::debug;

use crate::error::Result;
use crate::lexicon::{TOMORROW, YESTERDAY};

#[derive(Debug, Clone)]
pub struct DateResolver {
    explicit_re: Regex,
    day_re: Regex,
}

impl DateResolver {
    pub fn new() -> Result<Self> {
        let explicit_re = Regex::new(concat!(
            r"(?P<day>[0-9]{1,2})[/-](?P<month>[0-9]{1,2})",
            r"(?:[/-](?P<year>[0-9]{2,4}))?"
        ))?;
        let day_re = Regex::new(r"dia\s+(?P<day>[0-9]{1,2})")?;
        Ok(Self {
            explicit_re,
            day_re,
        })
    }

    pub fn resolve(&self, text: &str, today: NaiveDate) -> NaiveDate {
        if text.contains(YESTERDAY) {
            debug!("relative date: yesterday");
            return shift_days(today, -1);
        }
        if text.contains(TOMORROW) {
            debug!("relative date: tomorrow");
            return shift_days(today, 1);
        }

        if let Some(caps) = self.explicit_re.captures(text) {
            let date = explicit_date(&caps, today);
            debug!(matched = &caps[0], ?date, "explicit date");
            return date.unwrap_or(today);
        }

        if let Some(caps) = self.day_re.captures(text) {
            let date = caps["day"]
                .parse()
                .ok()
                .and_then(|d| checked_ymd(today.year(), today.month(), d));
            debug!(matched = &caps[0], ?date, "day of current month");
            return date.unwrap_or(today);
        }

        today
    }
}

/// Two-digit years are used as written, not expanded to 20xx.
fn explicit_date(caps: &Captures<'_>, today: NaiveDate) -> Option<NaiveDate> {
    let day: u32 = caps["day"].parse().ok()?;
    let month: u32 = caps["month"].parse().ok()?;
    let year: i32 = match caps.name("year") {
        Some(y) => y.as_str().parse().ok()?,
        None => today.year(),
    };
    checked_ymd(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn resolve(text: &str) -> NaiveDate {
        DateResolver::new().unwrap().resolve(text, ymd(2025, 3, 1))
    }

    #[test]
    fn test_relative_keywords() {
        assert_eq!(resolve("paguei ontem"), ymd(2025, 2, 28));
        assert_eq!(resolve("pago amanhã"), ymd(2025, 3, 2));
        // yesterday is checked first
        assert_eq!(resolve("ontem ou amanhã"), ymd(2025, 2, 28));
    }

    #[test]
    fn test_relative_beats_explicit() {
        assert_eq!(resolve("ontem, 10/06/2024"), ymd(2025, 2, 28));
    }

    #[test]
    fn test_explicit_date() {
        assert_eq!(resolve("gastei 10/06/2025 20 no mercado"), ymd(2025, 6, 10));
        assert_eq!(resolve("em 5-7-2024"), ymd(2024, 7, 5));
        assert_eq!(resolve("em 25/12"), ymd(2025, 12, 25));
        assert_eq!(resolve("em 10/06/25"), ymd(25, 6, 10));
    }

    #[test]
    fn test_invalid_explicit_date_falls_back() {
        assert_eq!(resolve("31/02/2025"), ymd(2025, 3, 1));
        assert_eq!(resolve("10/13"), ymd(2025, 3, 1));
        assert_eq!(resolve("1/1/00"), ymd(2025, 3, 1));
    }

    #[test]
    fn test_explicit_beats_day_number() {
        assert_eq!(resolve("dia 3, ou 4/5"), ymd(2025, 5, 4));
    }

    #[test]
    fn test_day_number() {
        assert_eq!(resolve("vence dia 15"), ymd(2025, 3, 15));
        assert_eq!(resolve("vence dia  7 de novo"), ymd(2025, 3, 7));
    }

    #[test]
    fn test_invalid_day_number_falls_back() {
        let resolver = DateResolver::new().unwrap();
        assert_eq!(resolver.resolve("dia 31", ymd(2025, 4, 10)), ymd(2025, 4, 10));
        assert_eq!(resolver.resolve("dia 0", ymd(2025, 4, 10)), ymd(2025, 4, 10));
    }

    #[test]
    fn test_only_ascii_digits_are_read() {
        assert_eq!(resolve("em ٥/٦/٢٠٢٤"), ymd(2025, 3, 1));
        assert_eq!(resolve("vence dia ٧"), ymd(2025, 3, 1));
    }

    #[test]
    fn test_default_is_reference_day() {
        assert_eq!(resolve("comprei pizza"), ymd(2025, 3, 1));
    }
}
