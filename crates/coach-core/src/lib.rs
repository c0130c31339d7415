//! Marketing-plan generation engine.
//!
//! Pure, deterministic generators that turn a handful of free-text business
//! inputs into audience segments, pain points, dreams, content pillars, post
//! ideas, a four-week calendar and an offer, plus a formatter that renders
//! any of those sections as plain text. Nothing here performs I/O; the only
//! clock access is the "today" fallback for the calendar start.

pub mod audience;
pub mod calendar;
pub mod error;
pub mod ideas;
pub mod inputs;
pub mod insights;
pub mod offer;
pub mod phrases;
pub mod pillars;
pub mod plan;
pub mod section;

pub use audience::{Segment, derive_audience_segments};
pub use calendar::{
    CALENDAR_DAYS, CalendarEntry, CalendarInput, generate_calendar, generate_calendar_on,
    resolve_start_date,
};
pub use error::CoachError;
pub use ideas::{IdeaGroup, generate_ideas};
pub use inputs::PlanInputs;
pub use insights::{
    CategoryList, DreamInput, PainInput, ThemeList, generate_dreams, generate_pain_points,
};
pub use offer::{Offer, OfferInput, generate_offer};
pub use pillars::{Pillar, PillarInput, generate_pillars};
pub use plan::{EXPORT_TITLE, MarketingPlan, PlanCache};
pub use section::{
    Section, SectionKind, format_section, format_section_json, format_section_json_str,
};
