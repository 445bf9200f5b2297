//! Post-response validation. Checks a parsed plan against the context it was
//! generated from. Required fields must be filled. Optional fields may only
//! carry facts the context supports, and must be absent otherwise.

use serde::Serialize;

use crate::advice::context::{crop_aliases, mentions, species_aliases, KnowledgeContext};
use crate::advice::schema::{AiPlan, FarmingTask, FishingTask};
use crate::almanac::models::MarineStatusEntry;

/// Values that are nothing but a placeholder, alone or leading the value.
const ABSENCE_MARKERS: &[&str] = &["n/a", "none", "nil"];

/// Phrases that state absence wherever they occur in the value.
const ABSENCE_PHRASES: &[&str] = &[
    "not available",
    "unavailable",
    "no data",
    "no guidance",
    "not found",
    "no information",
    "no specific",
    "unknown",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanViolation {
    /// A required string is empty or whitespace.
    BlankRequired { field: String },
    /// An optional field is present but blank, or says the data is missing.
    AbsenceStatement { field: String, value: String },
    /// An optional field has no supporting row in the context.
    Ungrounded { field: String, task: String },
    /// A recommendation that does not name an abundant alternative.
    BadRecommendation { task: String, value: String },
}

impl std::fmt::Display for PlanViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanViolation::BlankRequired { field } => write!(f, "{field} is blank"),
            PlanViolation::AbsenceStatement { field, value } => {
                write!(f, "{field} states absence ({value:?}) instead of being omitted")
            }
            PlanViolation::Ungrounded { field, task } => {
                write!(f, "{field} on task {task:?} has no supporting context row")
            }
            PlanViolation::BadRecommendation { task, value } => write!(
                f,
                "recommendation {value:?} on task {task:?} names no abundant alternative"
            ),
        }
    }
}

/// Validates every task in `plan`. Returns all violations found.
pub fn validate_plan(plan: &AiPlan, context: &KnowledgeContext) -> Result<(), Vec<PlanViolation>> {
    let mut violations = Vec::new();

    require("introduction", &plan.introduction, &mut violations);

    for (i, task) in plan.farming_plan.iter().enumerate() {
        validate_farming_task(i, task, context, &mut violations);
    }
    for (i, task) in plan.fishing_plan.iter().enumerate() {
        validate_fishing_task(i, task, context, &mut violations);
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn require(field: &str, value: &str, violations: &mut Vec<PlanViolation>) {
    if value.trim().is_empty() {
        violations.push(PlanViolation::BlankRequired {
            field: field.to_string(),
        });
    }
}

/// True when `value` says the data is missing instead of carrying it.
fn states_absence(value: &str) -> bool {
    let normalized = value.trim().trim_end_matches('.').to_lowercase();
    normalized.is_empty()
        || ABSENCE_MARKERS
            .iter()
            .any(|m| normalized == *m || normalized.starts_with(&format!("{m} ")))
        || ABSENCE_PHRASES.iter().any(|p| mentions(&normalized, p))
}

/// True when an optional value is usable, pushing a violation otherwise.
fn check_optional(field: &str, value: &str, violations: &mut Vec<PlanViolation>) -> bool {
    if states_absence(value) {
        violations.push(PlanViolation::AbsenceStatement {
            field: field.to_string(),
            value: value.to_string(),
        });
        return false;
    }
    true
}

fn validate_farming_task(
    index: usize,
    task: &FarmingTask,
    context: &KnowledgeContext,
    violations: &mut Vec<PlanViolation>,
) {
    let prefix = format!("farmingPlan[{index}]");
    require(&format!("{prefix}.timing"), &task.timing, violations);
    require(&format!("{prefix}.task"), &task.task, violations);
    require(&format!("{prefix}.details"), &task.details, violations);

    let Some(note) = &task.seasonal_note else {
        return;
    };
    let field = format!("{prefix}.seasonalNote");
    if !check_optional(&field, note, violations) {
        return;
    }

    let text = format!("{} {}", task.task, task.details);
    let grounded = context
        .crops
        .iter()
        .any(|c| crop_aliases(c).iter().any(|name| mentions(&text, name)));
    if !grounded {
        violations.push(PlanViolation::Ungrounded {
            field,
            task: task.task.clone(),
        });
    }
}

/// The month's status row for the species a fishing task is about, if any.
fn target_of(task: &FishingTask, context: &KnowledgeContext) -> Option<&'static MarineStatusEntry> {
    let text = format!("{} {}", task.task, task.details);
    context
        .marine
        .iter()
        .copied()
        .find(|m| species_aliases(m).iter().any(|name| mentions(&text, name)))
}

fn validate_fishing_task(
    index: usize,
    task: &FishingTask,
    context: &KnowledgeContext,
    violations: &mut Vec<PlanViolation>,
) {
    let prefix = format!("fishingPlan[{index}]");
    require(&format!("{prefix}.timing"), &task.timing, violations);
    require(&format!("{prefix}.task"), &task.task, violations);
    require(&format!("{prefix}.details"), &task.details, violations);

    let target = target_of(task, context);

    if let Some(abundance) = &task.abundance {
        let field = format!("{prefix}.abundance");
        if check_optional(&field, abundance, violations) && target.is_none() {
            violations.push(PlanViolation::Ungrounded {
                field,
                task: task.task.clone(),
            });
        }
    }

    if let Some(recommendation) = &task.recommendation {
        let field = format!("{prefix}.recommendation");
        if !check_optional(&field, recommendation, violations) {
            return;
        }

        // No status row for the species means nothing to substitute for
        let Some(target) = target else {
            violations.push(PlanViolation::Ungrounded {
                field,
                task: task.task.clone(),
            });
            return;
        };

        let names_alternative = context
            .abundant_alternatives(target.species_name_en)
            .iter()
            .any(|alt| species_aliases(alt).iter().any(|name| mentions(recommendation, name)));
        if !names_alternative {
            violations.push(PlanViolation::BadRecommendation {
                task: task.task.clone(),
                value: recommendation.clone(),
            });
        }
    }
}
