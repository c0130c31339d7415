//! Content pillars: the recurring themes that organize ideas and the calendar.

use minijinja::context;
use serde::{Deserialize, Serialize};

use crate::inputs::{defaults, or_default, split_goals};
use crate::phrases::{self, render};

/// Inputs to [`generate_pillars`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PillarInput<'a> {
    pub niche: &'a str,
    pub goals: &'a str,
}

/// A named content pillar. `name` is the join key used by ideas and the
/// calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pillar {
    pub name: String,
    pub goal: String,
}

impl Pillar {
    pub fn new(name: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            goal: goal.into(),
        }
    }
}

/// Generate the fixed set of content pillars.
///
/// Pillar names come straight from the phrase library and never depend on
/// the inputs. Goals interpolate the niche and one growth goal each; the
/// comma-separated goals are assigned to pillars cyclically so every goal
/// shows up at least once when there are no more goals than pillars.
pub fn generate_pillars(input: &PillarInput<'_>) -> Vec<Pillar> {
    let niche = or_default(input.niche, &defaults().niche);
    let goals = split_goals(input.goals);

    phrases::library()
        .pillars
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let goal = goals[i % goals.len()].as_str();
            Pillar {
                name: p.name.clone(),
                goal: render(&format!("pillars.{i}"), &context! { niche => niche, goal => goal }),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pillar_names_are_stable() {
        let a = generate_pillars(&PillarInput {
            niche: "marketing",
            goals: "webinar push",
        });
        let b = generate_pillars(&PillarInput {
            niche: "pottery",
            goals: "",
        });
        let names_a: Vec<&str> = a.iter().map(|p| p.name.as_str()).collect();
        let names_b: Vec<&str> = b.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names_a, names_b);
        assert_eq!(
            names_a,
            vec![
                "Authority",
                "Education",
                "Social Proof",
                "Behind the Scenes",
                "Conversion"
            ]
        );
    }

    #[test]
    fn goals_rotate_across_pillars() {
        let pillars = generate_pillars(&PillarInput {
            niche: "marketing",
            goals: "grow pipeline, increase booked calls, webinar push",
        });
        assert!(pillars[0].goal.contains("grow pipeline"));
        assert!(pillars[1].goal.contains("increase booked calls"));
        assert!(pillars[2].goal.contains("webinar push"));
        assert!(pillars[3].goal.contains("grow pipeline"));
        assert!(pillars.iter().all(|p| p.goal.contains("marketing")));
    }

    #[test]
    fn blank_inputs_use_defaults() {
        let pillars = generate_pillars(&PillarInput::default());
        assert_eq!(pillars.len(), 5);
        for p in &pillars {
            assert!(p.goal.contains("your niche"), "goal: {}", p.goal);
            assert!(p.goal.contains("consistent growth"), "goal: {}", p.goal);
        }
    }
}
