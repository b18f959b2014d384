use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::types::{Difficulty, ImprovementSuggestion, SubScores};

pub const MAX_SUGGESTIONS: usize = 3;
/// Områder med score på eller over denne grensen får ingen forslag.
pub const SUGGESTION_CUTOFF: f64 = 80.0;

#[derive(Debug, Clone, Copy)]
struct Template {
    issue: &'static str,
    drill: &'static str,
    expected_improvement: &'static str,
    difficulty: Difficulty,
}

/// Nøkkel: (område, klassifiseringslabel). Tom label = standardvariant.
type Key = (&'static str, &'static str);

static SUGGESTIONS: Lazy<HashMap<Key, Template>> = Lazy::new(|| {
    HashMap::from([
        (
            ("Tempo", ""),
            Template {
                issue: "Backswing and downswing timing are out of balance.",
                drill: "Swing to a metronome with a 3:1 count: three beats to the top, one beat to impact.",
                expected_improvement: "+5-10 points in tempo within 2 weeks",
                difficulty: Difficulty::Easy,
            },
        ),
        (
            ("Swing Plane", ""),
            Template {
                issue: "The club wanders off plane during the swing.",
                drill: "Place an alignment stick along the shaft angle at address and swing under it without touching.",
                expected_improvement: "+5-12 points in plane within 3 weeks",
                difficulty: Difficulty::Moderate,
            },
        ),
        (
            ("Swing Plane", "too_steep"),
            Template {
                issue: "The downswing comes in too steep (over the top).",
                drill: "Headcover drill: put a headcover just outside the ball and swing from the inside without hitting it.",
                expected_improvement: "+8-15 points in plane within 3 weeks",
                difficulty: Difficulty::Moderate,
            },
        ),
        (
            ("Swing Plane", "too_flat"),
            Template {
                issue: "The swing is too flat and the club gets stuck behind the body.",
                drill: "Wall drill: take the club back with your trail side near a wall so the club rises more vertically.",
                expected_improvement: "+8-15 points in plane within 3 weeks",
                difficulty: Difficulty::Moderate,
            },
        ),
        (
            ("Kinematics", ""),
            Template {
                issue: "Hips, shoulders, arms and club do not start the downswing in order.",
                drill: "Step-through drill: start the downswing by stepping toward the target with the lead foot before the arms move.",
                expected_improvement: "+10-15 points in kinematics within 4 weeks",
                difficulty: Difficulty::Advanced,
            },
        ),
        (
            ("Impact", ""),
            Template {
                issue: "Energy transfer at impact is low (off-centre contact).",
                drill: "Spray foot powder on the clubface and hit 20 balls, checking the strike mark after each shot.",
                expected_improvement: "+5-10 points in impact within 2 weeks",
                difficulty: Difficulty::Easy,
            },
        ),
        (
            ("Consistency", ""),
            Template {
                issue: "The swing pattern varies between repetitions.",
                drill: "Build a fixed pre-shot routine and hit 10-ball blocks to the same target, scoring each block.",
                expected_improvement: "+5-8 points in consistency within 4 weeks",
                difficulty: Difficulty::Moderate,
            },
        ),
    ])
});

fn lookup(area: &str, label: &str) -> Option<Template> {
    SUGGESTIONS
        .get(&(area, label))
        .or_else(|| SUGGESTIONS.get(&(area, "")))
        .copied()
}

/// De (inntil) tre svakeste områdene under grensen, svakeste først.
pub fn weakest_areas(scores: &SubScores) -> Vec<(&'static str, f64)> {
    let mut named = scores.named().to_vec();
    // stabil sortering: likhet beholder fast komponent-rekkefølge
    named.sort_by(|a, b| a.1.total_cmp(&b.1));
    named
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .filter(|(_, s)| *s < SUGGESTION_CUTOFF)
        .collect()
}

/// Forslag for de svakeste områdene. `label` velger variant for "Swing Plane".
pub fn generate_suggestions(scores: &SubScores, label: &str) -> Vec<ImprovementSuggestion> {
    weakest_areas(scores)
        .into_iter()
        .filter_map(|(area, _)| {
            lookup(area, label).map(|t| ImprovementSuggestion {
                area: area.to_string(),
                issue: t.issue.to_string(),
                drill: t.drill.to_string(),
                expected_improvement: t.expected_improvement.to_string(),
                difficulty: t.difficulty,
            })
        })
        .collect()
}
