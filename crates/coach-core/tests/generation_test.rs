//! End-to-end properties of the generation engine.
//!
//! These exercise the public API only: determinism, calendar invariants,
//! fallback behavior for blank input, and formatter coverage of every
//! section shape.

use chrono::{Days, Local, NaiveDate};

use coach_core::{
    CALENDAR_DAYS, CalendarInput, CoachError, MarketingPlan, OfferInput, Pillar, PlanInputs,
    Section, SectionKind, derive_audience_segments, format_section, format_section_json,
    generate_calendar, generate_calendar_on, generate_ideas, generate_offer,
};
use coach_test_utils::{abc_pillars, blank_inputs, fitness_inputs, fixed_today};

// -----------------------------------------------------------------------
// Determinism
// -----------------------------------------------------------------------

#[test]
fn plans_are_deterministic() {
    for inputs in [PlanInputs::starter(), fitness_inputs(), blank_inputs()] {
        let a = MarketingPlan::generate_on(&inputs, fixed_today());
        let b = MarketingPlan::generate_on(&inputs, fixed_today());
        assert_eq!(a, b);
        assert_eq!(a.export_document(), b.export_document());
    }
}

// -----------------------------------------------------------------------
// Calendar
// -----------------------------------------------------------------------

#[test]
fn calendar_has_28_consecutive_dates() {
    let pillars = abc_pillars();
    let cal = generate_calendar_on(
        &CalendarInput {
            start_date: "2026-12-20",
            pillars: &pillars,
        },
        fixed_today(),
    );
    assert_eq!(cal.len(), CALENDAR_DAYS);

    let start = NaiveDate::from_ymd_opt(2026, 12, 20).unwrap();
    for (i, entry) in cal.iter().enumerate() {
        let expected = start + Days::new(i as u64);
        assert_eq!(entry.date, expected.format("%Y-%m-%d").to_string());
    }
}

#[test]
fn calendar_cycles_pillars() {
    let pillars = abc_pillars();
    let cal = generate_calendar_on(
        &CalendarInput {
            start_date: "",
            pillars: &pillars,
        },
        fixed_today(),
    );
    for (i, entry) in cal.iter().enumerate() {
        assert_eq!(entry.pillar, pillars[i % 3].name);
    }
}

#[test]
fn calendar_without_pillars_uses_fallback() {
    let cal = generate_calendar_on(
        &CalendarInput {
            start_date: "2026-01-01",
            pillars: &[],
        },
        fixed_today(),
    );
    assert_eq!(cal.len(), CALENDAR_DAYS);
    assert!(cal.iter().all(|e| e.pillar == "General"));
}

#[test]
fn calendar_single_pillar() {
    let pillars = vec![Pillar::new("Authority", "g")];
    let cal = generate_calendar_on(
        &CalendarInput {
            start_date: "2026-01-01",
            pillars: &pillars,
        },
        fixed_today(),
    );
    assert!(cal.iter().all(|e| e.pillar == "Authority"));
}

#[test]
fn blank_start_date_uses_system_clock() {
    let pillars = abc_pillars();
    let before = Local::now().date_naive();
    let cal = generate_calendar(&CalendarInput {
        start_date: "",
        pillars: &pillars,
    });
    let after = Local::now().date_naive();

    // Tolerate a midnight rollover between the two clock reads.
    let accepted = [before, after].map(|d| d.format("%Y-%m-%d").to_string());
    assert!(
        accepted.contains(&cal[0].date),
        "first date {} not in {accepted:?}",
        cal[0].date
    );
}

#[test]
fn unparseable_start_date_falls_back_to_today() {
    let plan = MarketingPlan::generate_on(
        &coach_core::PlanInputs {
            start_date: "soon".into(),
            ..fitness_inputs()
        },
        fixed_today(),
    );
    assert_eq!(plan.calendar[0].date, "2026-10-19");
}

// -----------------------------------------------------------------------
// Ideas, offer, segments
// -----------------------------------------------------------------------

#[test]
fn ideas_map_one_to_one_onto_pillars() {
    let pillars = abc_pillars();
    let ideas = generate_ideas(&pillars, "ecom");
    assert_eq!(ideas.len(), pillars.len());
    for (group, pillar) in ideas.iter().zip(&pillars) {
        assert_eq!(group.pillar, pillar.name);
    }
}

#[test]
fn offer_lists_never_empty_for_blank_input() {
    let offer = generate_offer(&OfferInput {
        niche: "",
        product: "  ",
        transformation: "",
        price_range: "",
    });
    assert!(!offer.value_stack.is_empty());
    assert!(!offer.bonuses.is_empty());
    assert!(!offer.guarantees.is_empty());
    assert!(!offer.urgency.is_empty());
}

#[test]
fn fitness_coaching_matches_keywords() {
    let segs = derive_audience_segments("busy professionals", "fitness coaching");
    let fallback = derive_audience_segments("", "");
    assert_ne!(segs, fallback);
    assert!(
        segs.iter()
            .any(|s| s.to_lowercase().contains("coach") || s.to_lowercase().contains("fitness")),
        "segments: {segs:?}"
    );
}

// -----------------------------------------------------------------------
// Formatter coverage
// -----------------------------------------------------------------------

#[test]
fn formatter_covers_every_section() {
    let plan = MarketingPlan::generate_on(&PlanInputs::starter(), fixed_today());
    for kind in SectionKind::ALL {
        let name = format!("Custom {}", kind.title());
        let text = format_section(&name, &plan.section(kind));
        let first = text.lines().next().unwrap_or_default();
        assert!(first.starts_with("## "), "kind {kind}");
        assert!(first.contains(&name), "kind {kind}");
        assert!(text.lines().count() > 1, "kind {kind} rendered no body");
    }
}

#[test]
fn json_roundtrip_formats_identically() {
    let plan = MarketingPlan::generate_on(&fitness_inputs(), fixed_today());
    for kind in SectionKind::ALL {
        let section = plan.section(kind);
        let value = serde_json::to_value(&section).unwrap();
        let from_json = format_section_json(kind.title(), &value).unwrap();
        assert_eq!(from_json, format_section(kind.title(), &section), "kind {kind}");
    }
}

#[test]
fn unrecognized_shape_is_an_error() {
    let value = serde_json::json!({ "rows": [1, 2, 3] });
    let err = format_section_json("Budget", &value).unwrap_err();
    assert!(matches!(err, CoachError::InvalidSectionShape { .. }));
    assert!(err.to_string().contains("Budget"));
}

#[test]
fn typed_sections_need_no_shape_check() {
    // Exhaustive dispatch: every typed section formats without a Result.
    let text = format_section("Segments", &Section::Segments(vec!["Only".into()]));
    assert_eq!(text, "## Segments\n- Only");
}
