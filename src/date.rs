//! Service Date Conversions
//!
//! Canonical `yyyy-mm-dd` strings for storage, pt-BR long form for display,
//! and the month grid the calendar renders. Dates are naive calendar dates:
//! no timezone is involved anywhere.

use chrono::{Datelike, NaiveDate};

use crate::error::DateError;

const CANONICAL_FORMAT: &str = "%Y-%m-%d";

pub const MONTH_NAMES: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho",
    "julho", "agosto", "setembro", "outubro", "novembro", "dezembro",
];

/// Calendar header, week starts on Sunday
pub const WEEKDAY_INITIALS: [&str; 7] = ["dom", "seg", "ter", "qua", "qui", "sex", "sáb"];

pub fn to_canonical(date: NaiveDate) -> String {
    date.format(CANONICAL_FORMAT).to_string()
}

/// Strict parse: the input must be exactly what `to_canonical` produces.
pub fn parse_canonical(value: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(value, CANONICAL_FORMAT)
        .ok()
        .filter(|date| to_canonical(*date) == value)
        .ok_or_else(|| DateError::Invalid(value.to_string()))
}

/// `10 de março de 2024`
pub fn to_display(date: NaiveDate) -> String {
    format!(
        "{:02} de {} de {:04}",
        date.day(),
        MONTH_NAMES[date.month0() as usize],
        date.year()
    )
}

pub fn parse_display(value: &str) -> Result<NaiveDate, DateError> {
    let invalid = || DateError::Invalid(value.to_string());
    let parts: Vec<&str> = value.trim().split(" de ").collect();
    let &[day, month, year] = parts.as_slice() else {
        return Err(invalid());
    };
    let day: u32 = day.parse().map_err(|_| invalid())?;
    let month = MONTH_NAMES
        .iter()
        .position(|name| name.eq_ignore_ascii_case(month))
        .ok_or_else(invalid)? as u32
        + 1;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Button text for the date selector. Missing and invalid dates both show
/// the placeholder.
pub fn display_label(value: Option<&str>, placeholder: &str) -> String {
    value
        .and_then(|v| parse_canonical(v).ok())
        .map(to_display)
        .unwrap_or_else(|| placeholder.to_string())
}

/// Year and month shown by the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    /// 1-based
    pub month: u32,
}

impl MonthView {
    pub fn of(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { month: self.month - 1, ..self }
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { month: self.month + 1, ..self }
        }
    }

    /// `março de 2024`
    pub fn title(self) -> String {
        let name = MONTH_NAMES
            .get(self.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or_default();
        format!("{} de {}", name, self.year)
    }

    /// Weeks of the month, Sunday first, padded with `None` outside it.
    /// Empty when the month is out of chrono's range.
    pub fn weeks(self) -> Vec<[Option<NaiveDate>; 7]> {
        let Some(first) = NaiveDate::from_ymd_opt(self.year, self.month, 1) else {
            return Vec::new();
        };
        let offset = first.weekday().num_days_from_sunday() as usize;

        let mut cells: Vec<Option<NaiveDate>> = vec![None; offset];
        cells.extend(
            first
                .iter_days()
                .take_while(|d| d.month() == self.month)
                .map(Some),
        );
        while cells.len() % 7 != 0 {
            cells.push(None);
        }

        cells
            .chunks(7)
            .map(|week| {
                let mut row = [None; 7];
                row.copy_from_slice(week);
                row
            })
            .collect()
    }
}

/// Today's date from the browser clock
pub fn today() -> Option<NaiveDate> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_canonical_round_trip() {
        let date = ymd(2024, 3, 10);
        assert_eq!(to_canonical(date), "2024-03-10");
        assert_eq!(parse_canonical("2024-03-10"), Ok(date));
    }

    #[test]
    fn test_parse_canonical_rejects_loose_forms() {
        for value in ["", "2024-3-10", "2024-02-30", "10/03/2024", "2024-03-10T00:00", "abc"] {
            assert!(parse_canonical(value).is_err(), "accepted {:?}", value);
        }
    }

    #[test]
    fn test_display_form() {
        assert_eq!(to_display(ymd(2024, 3, 10)), "10 de março de 2024");
        assert_eq!(to_display(ymd(2025, 1, 5)), "05 de janeiro de 2025");
    }

    #[test]
    fn test_display_round_trip_over_a_leap_year() {
        let mut date = ymd(2024, 1, 1);
        while date.year() == 2024 {
            let canonical = to_canonical(date);
            let parsed = parse_canonical(&canonical).unwrap();
            assert_eq!(parse_display(&to_display(parsed)), Ok(date));
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_parse_display_rejects_garbage() {
        assert!(parse_display("31 de fevereiro de 2024").is_err());
        assert!(parse_display("10 de marco de 2024").is_err());
        assert!(parse_display("10 março 2024").is_err());
    }

    #[test]
    fn test_display_label_placeholder() {
        assert_eq!(display_label(None, "Selecione"), "Selecione");
        assert_eq!(display_label(Some("2024-13-01"), "Selecione"), "Selecione");
        assert_eq!(display_label(Some("2024-12-25"), "Selecione"), "25 de dezembro de 2024");
    }

    #[test]
    fn test_month_navigation_wraps_years() {
        let jan = MonthView { year: 2024, month: 1 };
        assert_eq!(jan.previous(), MonthView { year: 2023, month: 12 });
        assert_eq!(jan.previous().next(), jan);
        assert_eq!(MonthView { year: 2024, month: 12 }.next(), MonthView { year: 2025, month: 1 });
        assert_eq!(MonthView::of(ymd(2024, 3, 10)).title(), "março de 2024");
    }

    #[test]
    fn test_month_grid_layout() {
        // March 2024 starts on a Friday and has 31 days
        let weeks = MonthView { year: 2024, month: 3 }.weeks();
        assert_eq!(weeks.len(), 6);
        assert_eq!(weeks[0][..5], [None::<NaiveDate>; 5]);
        assert_eq!(weeks[0][5], Some(ymd(2024, 3, 1)));
        assert_eq!(weeks[2][0], Some(ymd(2024, 3, 10)));
        assert_eq!(weeks[5][0], Some(ymd(2024, 3, 31)));
        let days = weeks.iter().flatten().filter(|d| d.is_some()).count();
        assert_eq!(days, 31);
    }

    #[test]
    fn test_month_grid_out_of_range() {
        assert!(MonthView { year: 2024, month: 13 }.weeks().is_empty());
    }
}
