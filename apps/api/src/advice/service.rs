//! Advice Service: turns a planner request into a plan.
//!
//! Flow: build_context → build_prompt → generator (one attempt) →
//!       strip fences → parse → validate_plan → plan.
//!
//! Every failure resolves to a sentinel plan; callers never see an error.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::advice::context::{build_context, build_prompt, Language};
use crate::advice::prompts::{FAILURE_MESSAGE, UNCONFIGURED_MESSAGE};
use crate::advice::schema::{response_schema, AiPlan};
use crate::advice::validation::{validate_plan, PlanViolation};
use crate::llm_client::{strip_json_fences, LlmError, TextGenerator};

/// The external generator, or the explicit absence of one.
#[derive(Clone)]
pub enum Generator {
    Available(Arc<dyn TextGenerator>),
    Unavailable,
}

impl Generator {
    pub fn is_available(&self) -> bool {
        matches!(self, Generator::Available(_))
    }
}

#[derive(Debug, Error)]
pub enum AdviceError {
    #[error("generator is not configured")]
    Unconfigured,

    #[error("generator call failed: {0}")]
    Transport(#[from] LlmError),

    #[error("generator response is not valid plan JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("generator response violates the plan contract: {}", format_violations(.0))]
    SchemaViolation(Vec<PlanViolation>),
}

fn format_violations(violations: &[PlanViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Request body for plan generation.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanRequest {
    /// English month name, the dataset's join key.
    pub month: String,
    #[serde(default)]
    pub crops: Vec<String>,
    #[serde(default)]
    pub marine_species: Vec<String>,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub goals: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    Generated,
    Unconfigured,
    Failed,
}

/// A plan plus how it came to be. Sentinel plans carry a non-`Generated` status.
#[derive(Debug, Clone, Serialize)]
pub struct PlanOutcome {
    pub status: PlanStatus,
    pub plan: AiPlan,
}

pub struct AdviceService {
    generator: Generator,
}

impl AdviceService {
    pub fn new(generator: Generator) -> Self {
        Self { generator }
    }

    pub fn generator_available(&self) -> bool {
        self.generator.is_available()
    }

    /// Generates a plan. Never fails: configuration problems and generator
    /// failures become sentinel plans, with root causes logged.
    pub async fn generate_plan(&self, request: &PlanRequest) -> PlanOutcome {
        match self.try_generate_plan(request).await {
            Ok(plan) => PlanOutcome {
                status: PlanStatus::Generated,
                plan,
            },
            Err(AdviceError::Unconfigured) => {
                warn!("Plan requested for {} but no generator is configured", request.month);
                PlanOutcome {
                    status: PlanStatus::Unconfigured,
                    plan: AiPlan::sentinel(UNCONFIGURED_MESSAGE),
                }
            }
            Err(e) => {
                error!("Plan generation failed for {}: {e}", request.month);
                PlanOutcome {
                    status: PlanStatus::Failed,
                    plan: AiPlan::sentinel(FAILURE_MESSAGE),
                }
            }
        }
    }

    /// One attempt, no retry. Distinguishes transport, parse and contract failures.
    pub async fn try_generate_plan(&self, request: &PlanRequest) -> Result<AiPlan, AdviceError> {
        let Generator::Available(generator) = &self.generator else {
            return Err(AdviceError::Unconfigured);
        };

        let context = build_context(&request.month, &request.crops, &request.marine_species);
        let prompt = build_prompt(&context, request.language, &request.goals);

        info!(
            "Generating plan for {} (crops={}, marine={}, model={})",
            request.month,
            context.selected_crops.len(),
            context.selected_marine.len(),
            generator.model()
        );

        let raw = generator.generate(&prompt, &response_schema()).await?;
        let plan: AiPlan = serde_json::from_str(strip_json_fences(&raw))?;

        validate_plan(&plan, &context).map_err(AdviceError::SchemaViolation)?;

        info!(
            "Plan generated for {}: {} farming tasks, {} fishing tasks",
            request.month,
            plan.farming_plan.len(),
            plan.fishing_plan.len()
        );
        Ok(plan)
    }
}
