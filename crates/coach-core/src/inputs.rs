//! Plan inputs and fallback-default resolution.
//!
//! Inputs are free text. They are never validated; blank values are replaced
//! by the phrase library's defaults at interpolation time.

use serde::{Deserialize, Serialize};

use crate::phrases::{self, Defaults};

/// The full set of business parameters a plan is generated from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanInputs {
    pub niche: String,
    pub audience: String,
    pub product: String,
    pub transformation: String,
    /// Timeframe or price context, e.g. "8-12 weeks" or "$3k-$6k".
    pub price_range: String,
    /// Comma-separated growth goals.
    pub goals: String,
    /// `YYYY-MM-DD`, or empty to start from today.
    #[serde(default)]
    pub start_date: String,
}

impl PlanInputs {
    /// The starting values of the interactive app, used when nothing else is
    /// configured.
    pub fn starter() -> Self {
        Self {
            niche: "marketing".to_string(),
            audience: "coaches and consultants (B2B)".to_string(),
            product: "accelerator".to_string(),
            transformation: "book 20-40 qualified calls / month".to_string(),
            price_range: "8-12 weeks".to_string(),
            goals: "grow pipeline, increase booked calls, webinar push".to_string(),
            start_date: String::new(),
        }
    }
}

/// Return `value` trimmed, or `default` when the trimmed value is empty.
pub fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() { default } else { trimmed }
}

/// Split a goals string into individual goals.
///
/// Goals are separated by commas or semicolons. Blank entries are dropped;
/// if nothing remains the default goal is returned as the only entry.
pub fn split_goals(goals: &str) -> Vec<String> {
    let parts: Vec<String> = goals
        .split([',', ';'])
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_owned)
        .collect();

    if parts.is_empty() {
        vec![defaults().goals.clone()]
    } else {
        parts
    }
}

pub(crate) fn defaults() -> &'static Defaults {
    &phrases::library().defaults
}
