//! Offer builder: headline plus value stack, bonuses, guarantees, urgency.

use serde::{Deserialize, Serialize};

use crate::inputs::{defaults, or_default};
use minijinja::context;

use crate::phrases::{self, render, render_bank};

/// Inputs to [`generate_offer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OfferInput<'a> {
    pub niche: &'a str,
    pub product: &'a str,
    pub transformation: &'a str,
    /// Timeframe or price context.
    pub price_range: &'a str,
}

/// A complete sales offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub headline: String,
    pub value_stack: Vec<String>,
    #[serde(default)]
    pub bonuses: Vec<String>,
    #[serde(default)]
    pub guarantees: Vec<String>,
    #[serde(default)]
    pub urgency: Vec<String>,
}

/// Build an offer from the product and transformation.
///
/// List lengths are fixed by the phrase library, so no list is ever empty,
/// even when every input is blank.
pub fn generate_offer(input: &OfferInput<'_>) -> Offer {
    let d = defaults();
    let ctx = context! {
        niche => or_default(input.niche, &d.niche),
        product => or_default(input.product, &d.product),
        transformation => or_default(input.transformation, &d.transformation),
        price_range => or_default(input.price_range, &d.price_range),
    };
    let phrases = &phrases::library().offer;

    Offer {
        headline: render("offer.headline", &ctx),
        value_stack: render_bank("offer.value_stack", phrases.value_stack.len(), &ctx),
        bonuses: render_bank("offer.bonuses", phrases.bonuses.len(), &ctx),
        guarantees: render_bank("offer.guarantees", phrases.guarantees.len(), &ctx),
        urgency: render_bank("offer.urgency", phrases.urgency.len(), &ctx),
    }
}
