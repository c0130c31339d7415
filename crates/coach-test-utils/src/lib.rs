//! Shared fixtures for coach integration tests.
//!
//! Provides canonical plan inputs and fixed dates so tests never depend on
//! the wall clock unless they mean to.

use chrono::NaiveDate;

use coach_core::{Pillar, PlanInputs};

/// A fixed "today" used wherever tests need a deterministic clock.
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid fixture date")
}

/// A fitness-coaching scenario with an explicit start date.
pub fn fitness_inputs() -> PlanInputs {
    PlanInputs {
        niche: "fitness coaching".to_string(),
        audience: "busy professionals".to_string(),
        product: "program".to_string(),
        transformation: "drop two sizes without giving up weekends".to_string(),
        price_range: "12 weeks, $1.5k".to_string(),
        goals: "waitlist, booked calls".to_string(),
        start_date: "2026-11-02".to_string(),
    }
}

/// Inputs with every field blank.
pub fn blank_inputs() -> PlanInputs {
    PlanInputs::default()
}

/// Three single-letter pillars for cycling checks.
pub fn abc_pillars() -> Vec<Pillar> {
    ["A", "B", "C"]
        .into_iter()
        .map(|name| Pillar::new(name, format!("goal {name}")))
        .collect()
}
