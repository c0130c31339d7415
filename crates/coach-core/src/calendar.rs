//! Four-week content calendar.
//!
//! Each day gets a pillar, a content format and a call-to-action. Pillars
//! cycle in order; formats rotate weekly (seven of them) while CTAs rotate on
//! a shorter cycle, so the same weekday gets a different CTA from week to
//! week.

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::phrases;
use crate::pillars::Pillar;

/// Number of days in a generated calendar.
pub const CALENDAR_DAYS: usize = 28;

/// Date format used for calendar entries and start-date parsing.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inputs to [`generate_calendar`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarInput<'a> {
    /// `YYYY-MM-DD`; empty or unparseable means today.
    pub start_date: &'a str,
    pub pillars: &'a [Pillar],
}

/// One day of the content calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntry {
    /// `YYYY-MM-DD`.
    pub date: String,
    pub pillar: String,
    pub format: String,
    #[serde(rename = "CTA")]
    pub cta: String,
}

/// Generate the calendar starting at `start_date`, or today (local time).
pub fn generate_calendar(input: &CalendarInput<'_>) -> Vec<CalendarEntry> {
    generate_calendar_on(input, Local::now().date_naive())
}

/// Generate the calendar with an explicit value for "today".
///
/// `today` is only used when `input.start_date` is blank or invalid.
pub fn generate_calendar_on(input: &CalendarInput<'_>, today: NaiveDate) -> Vec<CalendarEntry> {
    let phrases = &phrases::library().calendar;
    let start = resolve_start_date(input.start_date, today);

    (0..CALENDAR_DAYS)
        .map(|i| {
            // resolve_start_date guarantees the whole range is representable.
            let date = start + Days::new(i as u64);
            let pillar = if input.pillars.is_empty() {
                phrases.fallback_pillar.clone()
            } else {
                input.pillars[i % input.pillars.len()].name.clone()
            };
            CalendarEntry {
                date: date.format(DATE_FORMAT).to_string(),
                pillar,
                format: phrases.formats[i % phrases.formats.len()].clone(),
                cta: phrases.ctas[i % phrases.ctas.len()].clone(),
            }
        })
        .collect()
}

/// Parse `start_date`, falling back to `today`.
///
/// Blank and unparseable dates fall back silently, as do dates so close to
/// the end of the supported range that the calendar would overflow it.
pub fn resolve_start_date(start_date: &str, today: NaiveDate) -> NaiveDate {
    let trimmed = start_date.trim();
    if trimmed.is_empty() {
        return today;
    }

    match NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        Ok(date) if date.checked_add_days(Days::new(CALENDAR_DAYS as u64)).is_some() => date,
        Ok(date) => {
            tracing::debug!(%date, "start date too close to the end of the calendar range, using today");
            today
        }
        Err(e) => {
            tracing::debug!(start_date = trimmed, error = %e, "unparseable start date, using today");
            today
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn abc() -> Vec<Pillar> {
        vec![
            Pillar::new("A", "ga"),
            Pillar::new("B", "gb"),
            Pillar::new("C", "gc"),
        ]
    }

    #[test]
    fn produces_28_consecutive_days() {
        let pillars = abc();
        let cal = generate_calendar_on(
            &CalendarInput {
                start_date: "2026-02-20",
                pillars: &pillars,
            },
            day(2030, 1, 1),
        );
        assert_eq!(cal.len(), CALENDAR_DAYS);
        assert_eq!(cal[0].date, "2026-02-20");
        // Crosses the end of February (non-leap year).
        assert_eq!(cal[8].date, "2026-02-28");
        assert_eq!(cal[9].date, "2026-03-01");
        assert_eq!(cal[27].date, "2026-03-19");
    }

    #[test]
    fn pillars_cycle_in_order() {
        let pillars = abc();
        let cal = generate_calendar_on(
            &CalendarInput {
                start_date: "2026-01-01",
                pillars: &pillars,
            },
            day(2026, 1, 1),
        );
        for (i, entry) in cal.iter().enumerate() {
            assert_eq!(entry.pillar, pillars[i % 3].name, "day {i}");
        }
    }

    #[test]
    fn single_pillar_fills_every_day() {
        let pillars = vec![Pillar::new("Authority", "g")];
        let cal = generate_calendar_on(
            &CalendarInput {
                start_date: "",
                pillars: &pillars,
            },
            day(2026, 1, 1),
        );
        assert!(cal.iter().all(|e| e.pillar == "Authority"));
    }

    #[test]
    fn empty_pillars_use_fallback_label() {
        let cal = generate_calendar_on(&CalendarInput::default(), day(2026, 1, 1));
        assert_eq!(cal.len(), CALENDAR_DAYS);
        assert!(cal.iter().all(|e| e.pillar == "General"));
    }

    #[test]
    fn blank_start_uses_today() {
        let cal = generate_calendar_on(&CalendarInput::default(), day(2026, 10, 19));
        assert_eq!(cal[0].date, "2026-10-19");
    }

    #[test]
    fn invalid_start_uses_today() {
        let today = day(2026, 10, 19);
        assert_eq!(resolve_start_date("next tuesday", today), today);
        assert_eq!(resolve_start_date("2026-13-40", today), today);
        assert_eq!(resolve_start_date("19/10/2026", today), today);
    }

    #[test]
    fn start_near_end_of_date_range_falls_back() {
        let today = day(2026, 10, 19);
        let last_fit = NaiveDate::MAX
            .checked_sub_days(Days::new(CALENDAR_DAYS as u64))
            .unwrap();
        assert_eq!(last_fit, day(262142, 12, 3));

        assert_eq!(resolve_start_date("+262142-12-03", today), last_fit);
        assert_eq!(resolve_start_date("+262142-12-04", today), today);
        assert_eq!(resolve_start_date("+262142-12-31", today), today);

        let cal = generate_calendar_on(
            &CalendarInput {
                start_date: "+262142-12-03",
                pillars: &[],
            },
            today,
        );
        assert_eq!(cal.len(), CALENDAR_DAYS);
        assert_eq!(cal[27].date, "+262142-12-30");
    }

    #[test]
    fn start_date_is_trimmed() {
        let today = day(2026, 10, 19);
        assert_eq!(resolve_start_date(" 2027-01-05 ", today), day(2027, 1, 5));
    }

    #[test]
    fn formats_repeat_weekly_and_ctas_stagger() {
        let pillars = abc();
        let cal = generate_calendar_on(
            &CalendarInput {
                start_date: "2026-01-05",
                pillars: &pillars,
            },
            day(2026, 1, 1),
        );
        for i in 0..CALENDAR_DAYS - 7 {
            assert_eq!(cal[i].format, cal[i + 7].format);
        }
        assert_ne!(cal[0].cta, cal[7].cta);
        assert_eq!(cal[0].cta, cal[4].cta);
    }

    #[test]
    fn cta_serializes_uppercase() {
        let entry = CalendarEntry {
            date: "2026-01-01".into(),
            pillar: "A".into(),
            format: "Carousel".into(),
            cta: "Save this".into(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["CTA"], "Save this");
    }
}
