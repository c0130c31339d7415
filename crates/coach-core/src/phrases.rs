//! Embedded phrase library and template rendering.
//!
//! Every generator is table-driven: fixed phrase banks live in
//! `phrases.toml`, which is embedded in the binary at compile time and parsed
//! once on first use. Each template string is registered in a single
//! minijinja [`Environment`] under a dotted name (`offer.headline`,
//! `pain_points.0.2`, `ideas.4`). Generators only pick a bank and supply a
//! context.

use std::sync::LazyLock;

use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value};
use serde::Deserialize;

/// The embedded phrase library TOML.
static PHRASES_TOML: &str = include_str!("phrases.toml");

static LIBRARY: LazyLock<PhraseLibrary> = LazyLock::new(|| {
    toml::from_str(PHRASES_TOML).expect("embedded phrases.toml is invalid")
});

static TEMPLATES: LazyLock<Environment<'static>> = LazyLock::new(|| {
    build_environment(library()).expect("embedded phrase template failed to compile")
});

/// Parsed contents of `phrases.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PhraseLibrary {
    pub defaults: Defaults,
    pub segments: SegmentPhrases,
    pub pain_points: Vec<CategoryPhrases>,
    pub dreams: Vec<ThemePhrases>,
    pub pillars: Vec<PillarPhrases>,
    pub ideas: IdeaPhrases,
    pub calendar: CalendarPhrases,
    pub offer: OfferPhrases,
}

/// Fallback values substituted for blank inputs.
#[derive(Debug, Clone, Deserialize)]
pub struct Defaults {
    pub niche: String,
    pub audience: String,
    pub product: String,
    pub transformation: String,
    pub price_range: String,
    pub goals: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SegmentPhrases {
    /// Returned when no keyword rule matches.
    pub fallback: Vec<String>,
    pub rules: Vec<SegmentRule>,
}

/// Keyword rule: any keyword found in the lower-cased text adds the labels.
#[derive(Debug, Clone, Deserialize)]
pub struct SegmentRule {
    pub keywords: Vec<String>,
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryPhrases {
    pub category: String,
    pub templates: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThemePhrases {
    pub theme: String,
    pub templates: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PillarPhrases {
    pub name: String,
    pub goal: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdeaPhrases {
    pub templates: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarPhrases {
    pub fallback_pillar: String,
    pub formats: Vec<String>,
    pub ctas: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OfferPhrases {
    pub headline: String,
    pub value_stack: Vec<String>,
    pub bonuses: Vec<String>,
    pub guarantees: Vec<String>,
    pub urgency: Vec<String>,
}

/// Return the process-wide phrase library.
///
/// # Panics
///
/// Panics if the embedded TOML is malformed. This is a compile-time invariant
/// -- if the binary was built, the TOML is valid.
pub fn library() -> &'static PhraseLibrary {
    &LIBRARY
}

/// Register every template in `lib` under its dotted name.
///
/// Undefined variables are strict errors so a template naming a variable its
/// generator does not supply fails loudly instead of rendering blank text.
/// Values are inserted verbatim; nothing is escaped or re-expanded.
fn build_environment(lib: &PhraseLibrary) -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);

    for (i, category) in lib.pain_points.iter().enumerate() {
        add_bank(&mut env, &format!("pain_points.{i}"), &category.templates)?;
    }
    for (i, theme) in lib.dreams.iter().enumerate() {
        add_bank(&mut env, &format!("dreams.{i}"), &theme.templates)?;
    }
    for (i, pillar) in lib.pillars.iter().enumerate() {
        env.add_template_owned(format!("pillars.{i}"), pillar.goal.clone())?;
    }
    add_bank(&mut env, "ideas", &lib.ideas.templates)?;
    env.add_template_owned("offer.headline", lib.offer.headline.clone())?;
    add_bank(&mut env, "offer.value_stack", &lib.offer.value_stack)?;
    add_bank(&mut env, "offer.bonuses", &lib.offer.bonuses)?;
    add_bank(&mut env, "offer.guarantees", &lib.offer.guarantees)?;
    add_bank(&mut env, "offer.urgency", &lib.offer.urgency)?;

    Ok(env)
}

fn add_bank(
    env: &mut Environment<'static>,
    bank: &str,
    templates: &[String],
) -> Result<(), minijinja::Error> {
    for (i, template) in templates.iter().enumerate() {
        env.add_template_owned(format!("{bank}.{i}"), template.clone())?;
    }
    Ok(())
}

/// Render the template registered as `name`.
///
/// # Panics
///
/// Panics if `name` is not registered or the template uses a variable that
/// `ctx` does not define. Both are fixed by the embedded library and the
/// generator code, and every template is rendered by the test suite.
pub fn render(name: &str, ctx: &Value) -> String {
    TEMPLATES
        .get_template(name)
        .and_then(|template| template.render(ctx))
        .unwrap_or_else(|err| panic!("phrase template {name:?} failed to render: {err:#}"))
}

/// Render the `len` templates of `bank` in order with the same context.
pub fn render_bank(bank: &str, len: usize, ctx: &Value) -> Vec<String> {
    (0..len).map(|i| render(&format!("{bank}.{i}"), ctx)).collect()
}
