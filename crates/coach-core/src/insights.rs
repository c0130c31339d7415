//! Pain points and dreams: the two halves of audience insight.

use minijinja::context;
use serde::{Deserialize, Serialize};

use crate::inputs::{defaults, or_default};
use crate::phrases::{self, render_bank};

/// Inputs to [`generate_pain_points`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PainInput<'a> {
    pub audience: &'a str,
    pub niche: &'a str,
    pub product: &'a str,
}

/// Inputs to [`generate_dreams`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DreamInput<'a> {
    pub audience: &'a str,
    pub niche: &'a str,
}

/// A pain-point category with its statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryList {
    pub category: String,
    pub items: Vec<String>,
}

/// A desire theme with its aspirational statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeList {
    pub theme: String,
    pub statements: Vec<String>,
}

/// Generate categorized pain statements for the audience.
///
/// The category set is fixed by the phrase library; only the interpolated
/// audience, niche and product text varies.
pub fn generate_pain_points(input: &PainInput<'_>) -> Vec<CategoryList> {
    let d = defaults();
    let ctx = context! {
        audience => or_default(input.audience, &d.audience),
        niche => or_default(input.niche, &d.niche),
        product => or_default(input.product, &d.product),
    };

    phrases::library()
        .pain_points
        .iter()
        .enumerate()
        .map(|(i, c)| CategoryList {
            category: c.category.clone(),
            items: render_bank(&format!("pain_points.{i}"), c.templates.len(), &ctx),
        })
        .collect()
}

/// Generate themed aspirational statements for the audience.
pub fn generate_dreams(input: &DreamInput<'_>) -> Vec<ThemeList> {
    let d = defaults();
    let ctx = context! {
        audience => or_default(input.audience, &d.audience),
        niche => or_default(input.niche, &d.niche),
    };

    phrases::library()
        .dreams
        .iter()
        .enumerate()
        .map(|(i, t)| ThemeList {
            theme: t.theme.clone(),
            statements: render_bank(&format!("dreams.{i}"), t.templates.len(), &ctx),
        })
        .collect()
}
