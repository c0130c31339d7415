//! Plain-text rendering of generated sections.
//!
//! Typed callers hold a [`Section`] and get exhaustive dispatch. Callers with
//! untyped JSON (for example a file written by `coach section --json`) go
//! through [`format_section_json`], which detects the shape by its fields
//! and rejects anything it does not recognize.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::audience::Segment;
use crate::calendar::CalendarEntry;
use crate::error::CoachError;
use crate::ideas::IdeaGroup;
use crate::insights::{CategoryList, ThemeList};
use crate::offer::Offer;
use crate::pillars::Pillar;

/// Output of one generator.
///
/// Serializes as the bare shape (no tag). Deserialization picks the variant
/// from a discriminating field, see [`Section::from_json`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Section {
    Segments(Vec<Segment>),
    PainPoints(Vec<CategoryList>),
    Dreams(Vec<ThemeList>),
    Pillars(Vec<Pillar>),
    Ideas(Vec<IdeaGroup>),
    Calendar(Vec<CalendarEntry>),
    Offer(Offer),
}

impl Section {
    /// The kind of section this data belongs to.
    pub fn kind(&self) -> SectionKind {
        match self {
            Section::Segments(_) => SectionKind::Segments,
            Section::PainPoints(_) => SectionKind::PainPoints,
            Section::Dreams(_) => SectionKind::Dreams,
            Section::Pillars(_) => SectionKind::Pillars,
            Section::Ideas(_) => SectionKind::Ideas,
            Section::Calendar(_) => SectionKind::Calendar,
            Section::Offer(_) => SectionKind::Offer,
        }
    }

    /// Decode untyped JSON, choosing the variant by field presence.
    ///
    /// Arrays are classified by their first element: strings are segments,
    /// objects by the first key found of `items`, `statements`, `goal`,
    /// `ideas`, `CTA`. An object with `valueStack` is an offer. An empty
    /// array is an empty segment list. Extra fields are ignored.
    ///
    /// `name` is only used to label the error.
    pub fn from_json(name: &str, value: &Value) -> Result<Section, CoachError> {
        let invalid = || CoachError::InvalidSectionShape {
            section: name.to_string(),
        };
        let Some(kind) = detect_kind(value) else {
            tracing::debug!(section = name, "section data has no discriminating field");
            return Err(invalid());
        };
        decode(kind, value).map_err(|e| {
            tracing::debug!(section = name, %kind, error = %e, "section data is malformed");
            invalid()
        })
    }
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let kind = detect_kind(&value)
            .ok_or_else(|| <D::Error as de::Error>::custom("unrecognized section shape"))?;
        decode(kind, &value).map_err(<D::Error as de::Error>::custom)
    }
}

/// Discriminating keys for arrays of objects, checked in order.
const ELEMENT_KEYS: [(&str, SectionKind); 5] = [
    ("items", SectionKind::PainPoints),
    ("statements", SectionKind::Dreams),
    ("goal", SectionKind::Pillars),
    ("ideas", SectionKind::Ideas),
    ("CTA", SectionKind::Calendar),
];

fn detect_kind(value: &Value) -> Option<SectionKind> {
    match value {
        Value::Array(items) => match items.first() {
            None | Some(Value::String(_)) => Some(SectionKind::Segments),
            Some(Value::Object(first)) => ELEMENT_KEYS
                .iter()
                .find(|(key, _)| first.contains_key(*key))
                .map(|(_, kind)| *kind),
            Some(_) => None,
        },
        Value::Object(fields) if fields.contains_key("valueStack") => Some(SectionKind::Offer),
        _ => None,
    }
}

fn decode(kind: SectionKind, value: &Value) -> Result<Section, serde_json::Error> {
    Ok(match kind {
        SectionKind::Segments => Section::Segments(Vec::deserialize(value)?),
        SectionKind::PainPoints => Section::PainPoints(Vec::deserialize(value)?),
        SectionKind::Dreams => Section::Dreams(Vec::deserialize(value)?),
        SectionKind::Pillars => Section::Pillars(Vec::deserialize(value)?),
        SectionKind::Ideas => Section::Ideas(Vec::deserialize(value)?),
        SectionKind::Calendar => Section::Calendar(Vec::deserialize(value)?),
        SectionKind::Offer => Section::Offer(Offer::deserialize(value)?),
    })
}

/// Identifies one of the seven sections of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Segments,
    PainPoints,
    Dreams,
    Pillars,
    Ideas,
    Calendar,
    Offer,
}

impl SectionKind {
    /// All sections, in export order.
    pub const ALL: [SectionKind; 7] = [
        SectionKind::Segments,
        SectionKind::PainPoints,
        SectionKind::Dreams,
        SectionKind::Offer,
        SectionKind::Pillars,
        SectionKind::Ideas,
        SectionKind::Calendar,
    ];

    /// Short identifier used on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Segments => "segments",
            SectionKind::PainPoints => "pains",
            SectionKind::Dreams => "dreams",
            SectionKind::Pillars => "pillars",
            SectionKind::Ideas => "ideas",
            SectionKind::Calendar => "calendar",
            SectionKind::Offer => "offer",
        }
    }

    /// Header title used when the section is exported.
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Segments => "Audience Segments",
            SectionKind::PainPoints => "Pain Points",
            SectionKind::Dreams => "Dreams and Desires",
            SectionKind::Pillars => "Pillars",
            SectionKind::Ideas => "Ideas",
            SectionKind::Calendar => "Calendar (4 weeks)",
            SectionKind::Offer => "Offer",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKind {
    type Err = CoachError;

    /// Accepts the short identifier or the export title, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SectionKind::ALL
            .into_iter()
            .find(|k| {
                k.as_str().eq_ignore_ascii_case(wanted) || k.title().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| CoachError::UnknownSection(s.to_string()))
    }
}

/// Render a section as a plain-text block headed by `## {name}`.
///
/// The block has no trailing newline.
pub fn format_section(name: &str, section: &Section) -> String {
    let mut lines = vec![format!("## {name}")];

    match section {
        Section::Segments(segments) => push_bullets(&mut lines, segments),
        Section::PainPoints(categories) => {
            push_groups(&mut lines, categories.iter().map(|c| (&c.category, &c.items)));
        }
        Section::Dreams(themes) => {
            push_groups(&mut lines, themes.iter().map(|t| (&t.theme, &t.statements)));
        }
        Section::Pillars(pillars) => {
            lines.extend(pillars.iter().map(|p| format!("- {}: {}", p.name, p.goal)));
        }
        Section::Ideas(groups) => {
            push_groups(&mut lines, groups.iter().map(|g| (&g.pillar, &g.ideas)));
        }
        Section::Calendar(entries) => {
            lines.extend(entries.iter().map(|e| {
                format!("- {} | {} | {} | CTA: {}", e.date, e.pillar, e.format, e.cta)
            }));
        }
        Section::Offer(offer) => {
            lines.push(format!("Headline: {}", offer.headline));
            let titled = [
                ("Value Stack", &offer.value_stack),
                ("Bonuses", &offer.bonuses),
                ("Guarantees", &offer.guarantees),
                ("Urgency", &offer.urgency),
            ];
            for (title, items) in titled {
                lines.push(String::new());
                lines.push(format!("### {title}"));
                push_bullets(&mut lines, items);
            }
        }
    }

    lines.join("\n")
}

/// Render untyped section data, detecting its shape from the fields present.
///
/// Returns [`CoachError::InvalidSectionShape`] when the value matches none of
/// the seven generator outputs, or carries a discriminating field but lacks
/// one the shape requires.
pub fn format_section_json(name: &str, value: &Value) -> Result<String, CoachError> {
    let section = Section::from_json(name, value)?;
    Ok(format_section(name, &section))
}

/// Parse JSON text and render it with [`format_section_json`].
pub fn format_section_json_str(name: &str, json: &str) -> Result<String, CoachError> {
    let value: Value = serde_json::from_str(json)?;
    format_section_json(name, &value)
}

fn push_bullets(lines: &mut Vec<String>, items: &[String]) {
    lines.extend(items.iter().map(|i| format!("- {i}")));
}

fn push_groups<'a, I>(lines: &mut Vec<String>, groups: I)
where
    I: Iterator<Item = (&'a String, &'a Vec<String>)>,
{
    for (i, (heading, items)) in groups.enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(format!("### {heading}"));
        push_bullets(lines, items);
    }
}
