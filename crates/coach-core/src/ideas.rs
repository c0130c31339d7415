//! Post ideas grouped by content pillar.

use minijinja::context;
use serde::{Deserialize, Serialize};

use crate::inputs::{defaults, or_default};
use crate::phrases::{self, render_bank};
use crate::pillars::Pillar;

/// Post ideas for one pillar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaGroup {
    /// Name of the pillar these ideas belong to.
    pub pillar: String,
    pub ideas: Vec<String>,
}

/// Generate one idea group per pillar, preserving pillar order.
pub fn generate_ideas(pillars: &[Pillar], niche: &str) -> Vec<IdeaGroup> {
    let niche = or_default(niche, &defaults().niche);
    let count = phrases::library().ideas.templates.len();

    pillars
        .iter()
        .map(|p| IdeaGroup {
            pillar: p.name.clone(),
            ideas: render_bank("ideas", count, &context! { pillar => p.name, niche => niche }),
        })
        .collect()
}
