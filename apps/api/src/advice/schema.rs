//! The plan shape the generator must return, and the schema descriptor sent
//! with every request so the generator is constrained to it.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};

/// Optional fields are either absent or a string. An explicit `null` is an error.
fn present_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

/// A single farming task. `seasonal_note` is present only when the month's
/// crop calendar supports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FarmingTask {
    pub timing: String,
    pub task: String,
    pub details: String,
    #[serde(
        default,
        deserialize_with = "present_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub seasonal_note: Option<String>,
}

/// A single fishing task. `abundance` and `recommendation` are present only
/// when the month's marine-status rows support them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FishingTask {
    pub timing: String,
    pub task: String,
    pub details: String,
    #[serde(
        default,
        deserialize_with = "present_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub abundance: Option<String>,
    #[serde(
        default,
        deserialize_with = "present_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub recommendation: Option<String>,
}

/// The structured plan. Both lists must be present, possibly empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AiPlan {
    pub introduction: String,
    pub farming_plan: Vec<FarmingTask>,
    pub fishing_plan: Vec<FishingTask>,
}

impl AiPlan {
    /// A well-formed plan carrying only a user-facing message.
    pub fn sentinel(message: &str) -> Self {
        Self {
            introduction: message.to_string(),
            farming_plan: Vec::new(),
            fishing_plan: Vec::new(),
        }
    }
}

/// Schema descriptor in the generator's OpenAPI subset (upper-case type names).
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "introduction": {
                "type": "STRING",
                "description": "A short, encouraging introduction to the plan in the requested language, grounded in Fijian seasonal practice."
            },
            "farmingPlan": {
                "type": "ARRAY",
                "description": "Timetable of farming tasks. Empty when no crops were selected.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "timing": { "type": "STRING", "description": "When to do it, e.g. Week 1, Daily, Mid-Month." },
                        "task": { "type": "STRING", "description": "The farming task, e.g. Soil Preparation, Planting Taro." },
                        "details": { "type": "STRING", "description": "Instructions or tips for the task." },
                        "seasonalNote": { "type": "STRING", "description": "Seasonal suitability taken ONLY from the Traditional Knowledge Context, e.g. Ideal Planting Season, Harvest Time. Omit when the context has nothing for this crop." }
                    },
                    "required": ["timing", "task", "details"]
                }
            },
            "fishingPlan": {
                "type": "ARRAY",
                "description": "Timetable of fishing tasks. Empty when no marine species were selected.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "timing": { "type": "STRING", "description": "Best time to fish, e.g. High Tide, Full Moon, Early Morning." },
                        "task": { "type": "STRING", "description": "The fishing activity or target, e.g. Trolling for Walu." },
                        "details": { "type": "STRING", "description": "Techniques, safety tips or traditional knowledge." },
                        "abundance": { "type": "STRING", "description": "Status of the target species this month, taken ONLY from the Traditional Knowledge Context. Omit when the context has nothing for this species." },
                        "recommendation": { "type": "STRING", "description": "When the target is in low supply, an alternative species the Traditional Knowledge Context lists as abundant. Omit when there is none." }
                    },
                    "required": ["timing", "task", "details"]
                }
            }
        },
        "required": ["introduction", "farmingPlan", "fishingPlan"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_requires_both_lists() {
        let missing_fishing = r#"{"introduction": "Bula", "farmingPlan": []}"#;
        assert!(serde_json::from_str::<AiPlan>(missing_fishing).is_err());

        let both_empty = r#"{"introduction": "Bula", "farmingPlan": [], "fishingPlan": []}"#;
        let plan: AiPlan = serde_json::from_str(both_empty).unwrap();
        assert!(plan.farming_plan.is_empty() && plan.fishing_plan.is_empty());
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let extra_top_level =
            r#"{"introduction": "Bula", "farmingPlan": [], "fishingPlan": [], "extraTopLevel": 42}"#;
        assert!(serde_json::from_str::<AiPlan>(extra_top_level).is_err());

        let extra_task_field = r#"{"timing": "Dawn", "task": "Net", "details": "Reef", "bogus": "y"}"#;
        assert!(serde_json::from_str::<FishingTask>(extra_task_field).is_err());
        assert!(serde_json::from_str::<FarmingTask>(extra_task_field).is_err());
    }

    #[test]
    fn test_null_optional_field_is_rejected() {
        let json = r#"{"timing": "Dawn", "task": "Net", "details": "Reef", "abundance": null}"#;
        assert!(serde_json::from_str::<FishingTask>(json).is_err());

        let json = r#"{"timing": "Week 1", "task": "Plant", "details": "Mound", "seasonalNote": null}"#;
        assert!(serde_json::from_str::<FarmingTask>(json).is_err());
    }

    #[test]
    fn test_present_optional_field_is_kept() {
        let json = r#"{"timing": "Week 1", "task": "Plant", "details": "Mound", "seasonalNote": "Harvest Time"}"#;
        let task: FarmingTask = serde_json::from_str(json).unwrap();
        assert_eq!(task.seasonal_note.as_deref(), Some("Harvest Time"));
    }

    #[test]
    fn test_task_requires_details() {
        let json = r#"{"timing": "Week 1", "task": "Plant taro"}"#;
        assert!(serde_json::from_str::<FarmingTask>(json).is_err());
    }

    #[test]
    fn test_absent_optional_fields_are_not_serialized() {
        let task = FishingTask {
            timing: "Dawn".to_string(),
            task: "Net near the reef".to_string(),
            details: "Go with the outgoing tide".to_string(),
            abundance: Some("Abundant".to_string()),
            recommendation: None,
        };
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["abundance"], "Abundant");
        assert!(value.get("recommendation").is_none());
    }

    #[test]
    fn test_schema_required_fields_match_types() {
        let schema = response_schema();
        assert_eq!(
            schema["required"],
            json!(["introduction", "farmingPlan", "fishingPlan"])
        );
        let farming = &schema["properties"]["farmingPlan"]["items"];
        assert_eq!(farming["required"], json!(["timing", "task", "details"]));
        assert!(farming["properties"]["seasonalNote"].is_object());
        let fishing = &schema["properties"]["fishingPlan"]["items"];
        assert!(fishing["properties"]["recommendation"].is_object());
    }

    #[test]
    fn test_sentinel_has_empty_lists() {
        let plan = AiPlan::sentinel("Try again later.");
        assert_eq!(plan.introduction, "Try again later.");
        assert!(plan.farming_plan.is_empty());
        assert!(plan.fishing_plan.is_empty());
    }
}
