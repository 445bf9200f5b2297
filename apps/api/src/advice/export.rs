use std::fmt::Write;

use crate::advice::schema::AiPlan;

/// Marker for optional fields the generator left out.
pub const NOT_AVAILABLE: &str = "N/A";

pub const EXPORT_FILENAME: &str = "volau-plan.txt";

fn or_na(value: Option<&str>) -> &str {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(NOT_AVAILABLE)
}

/// Plain-text rendering of a plan for download. Populated fields appear
/// verbatim and absent optional fields as `N/A`.
pub fn plan_to_text(month_name: &str, plan: &AiPlan) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = write!(
        out,
        "VOLAU PLAN - {month_name}\n\nINTRODUCTION:\n{}\n\n",
        plan.introduction
    );

    if !plan.farming_plan.is_empty() {
        out.push_str("--- FARMING PLAN ---\n");
        for task in &plan.farming_plan {
            let _ = write!(
                out,
                "Timing: {}\nTask: {}\nDetails: {}\nSeasonal Note: {}\n\n",
                task.timing,
                task.task,
                task.details,
                or_na(task.seasonal_note.as_deref())
            );
        }
    }

    if !plan.fishing_plan.is_empty() {
        out.push_str("--- FISHING PLAN ---\n");
        for task in &plan.fishing_plan {
            let _ = write!(
                out,
                "Timing: {}\nTask: {}\nDetails: {}\nAbundance: {}\nRecommendation: {}\n\n",
                task.timing,
                task.task,
                task.details,
                or_na(task.abundance.as_deref()),
                or_na(task.recommendation.as_deref())
            );
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advice::schema::{FarmingTask, FishingTask};

    fn sample_plan() -> AiPlan {
        AiPlan {
            introduction: "Bula! December is for patience.".to_string(),
            farming_plan: vec![FarmingTask {
                timing: "Week 1".to_string(),
                task: "Check Breadfruit".to_string(),
                details: "Look for yellowing skin.".to_string(),
                seasonal_note: Some("Maturity".to_string()),
            }],
            fishing_plan: vec![FishingTask {
                timing: "Dusk".to_string(),
                task: "Net Rabbitfish".to_string(),
                details: "Take only what you need.".to_string(),
                abundance: Some("Low supply".to_string()),
                recommendation: None,
            }],
        }
    }

    #[test]
    fn test_populated_fields_appear_verbatim() {
        let text = plan_to_text("December", &sample_plan());
        assert!(text.starts_with("VOLAU PLAN - December\n\nINTRODUCTION:\nBula! December is for patience.\n"));
        assert!(text.contains("Task: Check Breadfruit\n"));
        assert!(text.contains("Seasonal Note: Maturity\n"));
        assert!(text.contains("Abundance: Low supply\n"));
    }

    #[test]
    fn test_omitted_optional_fields_render_na() {
        let text = plan_to_text("December", &sample_plan());
        assert!(text.contains("Recommendation: N/A\n"));
        assert!(!text.lines().any(|l| l.ends_with(": ")), "no blank field values");
    }

    #[test]
    fn test_empty_sections_are_left_out() {
        let plan = AiPlan::sentinel("Nothing planned.");
        let text = plan_to_text("June", &plan);
        assert!(!text.contains("FARMING PLAN"));
        assert!(!text.contains("FISHING PLAN"));
        assert_eq!(text, "VOLAU PLAN - June\n\nINTRODUCTION:\nNothing planned.\n\n");
    }

    #[test]
    fn test_blank_optional_value_renders_na() {
        let mut plan = sample_plan();
        plan.farming_plan[0].seasonal_note = Some("  ".to_string());
        let text = plan_to_text("December", &plan);
        assert!(text.contains("Seasonal Note: N/A\n"));
    }
}
