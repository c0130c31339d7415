//! Whole-plan generation, export, and memoization.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::audience::{Segment, derive_audience_segments};
use crate::calendar::{CalendarEntry, CalendarInput, generate_calendar_on};
use crate::ideas::{IdeaGroup, generate_ideas};
use crate::inputs::PlanInputs;
use crate::insights::{
    CategoryList, DreamInput, PainInput, ThemeList, generate_dreams, generate_pain_points,
};
use crate::offer::{Offer, OfferInput, generate_offer};
use crate::pillars::{Pillar, PillarInput, generate_pillars};
use crate::section::{Section, SectionKind, format_section};

/// Title line of an exported plan document.
pub const EXPORT_TITLE: &str = "# Marketing Coach Agent - Plan";

/// Every generated artifact for one set of inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketingPlan {
    pub inputs: PlanInputs,
    pub segments: Vec<Segment>,
    pub pain_points: Vec<CategoryList>,
    pub dreams: Vec<ThemeList>,
    pub pillars: Vec<Pillar>,
    pub ideas: Vec<IdeaGroup>,
    pub calendar: Vec<CalendarEntry>,
    pub offer: Offer,
}

impl MarketingPlan {
    /// Generate a plan, resolving "today" from the local clock.
    pub fn generate(inputs: &PlanInputs) -> Self {
        Self::generate_on(inputs, Local::now().date_naive())
    }

    /// Generate a plan with an explicit value for "today".
    pub fn generate_on(inputs: &PlanInputs, today: NaiveDate) -> Self {
        let pillars = generate_pillars(&PillarInput {
            niche: &inputs.niche,
            goals: &inputs.goals,
        });
        let ideas = generate_ideas(&pillars, &inputs.niche);
        let calendar = generate_calendar_on(
            &CalendarInput {
                start_date: &inputs.start_date,
                pillars: &pillars,
            },
            today,
        );

        Self {
            segments: derive_audience_segments(&inputs.audience, &inputs.niche),
            pain_points: generate_pain_points(&PainInput {
                audience: &inputs.audience,
                niche: &inputs.niche,
                product: &inputs.product,
            }),
            dreams: generate_dreams(&DreamInput {
                audience: &inputs.audience,
                niche: &inputs.niche,
            }),
            offer: generate_offer(&OfferInput {
                niche: &inputs.niche,
                product: &inputs.product,
                transformation: &inputs.transformation,
                price_range: &inputs.price_range,
            }),
            pillars,
            ideas,
            calendar,
            inputs: inputs.clone(),
        }
    }

    /// Return one section of the plan as typed data.
    pub fn section(&self, kind: SectionKind) -> Section {
        match kind {
            SectionKind::Segments => Section::Segments(self.segments.clone()),
            SectionKind::PainPoints => Section::PainPoints(self.pain_points.clone()),
            SectionKind::Dreams => Section::Dreams(self.dreams.clone()),
            SectionKind::Pillars => Section::Pillars(self.pillars.clone()),
            SectionKind::Ideas => Section::Ideas(self.ideas.clone()),
            SectionKind::Calendar => Section::Calendar(self.calendar.clone()),
            SectionKind::Offer => Section::Offer(self.offer.clone()),
        }
    }

    /// Render one section under its export title.
    pub fn format_section(&self, kind: SectionKind) -> String {
        format_section(kind.title(), &self.section(kind))
    }

    /// Render the whole plan as a single document.
    ///
    /// The document starts with the title and the niche, audience, product
    /// and transformation exactly as entered, followed by every section in
    /// [`SectionKind::ALL`] order. Each block is followed by a blank line.
    pub fn export_document(&self) -> String {
        let mut lines = vec![
            EXPORT_TITLE.to_string(),
            String::new(),
            format!("Niche: {}", self.inputs.niche),
            format!("Audience: {}", self.inputs.audience),
            format!("Product: {}", self.inputs.product),
            format!("Transformation: {}", self.inputs.transformation),
            String::new(),
        ];
        for kind in SectionKind::ALL {
            lines.push(self.format_section(kind));
            lines.push(String::new());
        }
        lines.join("\n")
    }
}

/// Single-entry memo for [`MarketingPlan`].
///
/// Keyed by the full input tuple plus the resolved "today", so a blank start
/// date still regenerates when the day rolls over.
#[derive(Debug, Default)]
pub struct PlanCache {
    entry: Option<(PlanInputs, NaiveDate, MarketingPlan)>,
    hits: u64,
    misses: u64,
}

impl PlanCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached plan for `inputs`, generating it with the local date.
    pub fn get_or_generate(&mut self, inputs: &PlanInputs) -> &MarketingPlan {
        self.get_or_generate_on(inputs, Local::now().date_naive())
    }

    /// Return the cached plan for `(inputs, today)`, regenerating on any change.
    pub fn get_or_generate_on(&mut self, inputs: &PlanInputs, today: NaiveDate) -> &MarketingPlan {
        let fresh = matches!(&self.entry, Some((cached, day, _)) if cached == inputs && *day == today);
        if fresh {
            self.hits += 1;
            tracing::debug!(hits = self.hits, "plan cache hit");
        } else {
            self.misses += 1;
            tracing::debug!(misses = self.misses, "plan cache miss, regenerating");
            self.entry = None;
        }

        let (_, _, plan) = self.entry.get_or_insert_with(|| {
            (
                inputs.clone(),
                today,
                MarketingPlan::generate_on(inputs, today),
            )
        });
        plan
    }

    /// Drop the cached plan.
    pub fn clear(&mut self) {
        self.entry = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
