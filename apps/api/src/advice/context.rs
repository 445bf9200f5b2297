//! Traditional Knowledge Context: the restatement of the month's reference
//! rows that bounds what the generator may claim, and the prompt built on it.

use serde::{Deserialize, Serialize};

use crate::advice::prompts::{
    GOALS_SECTION_TEMPLATE, LANGUAGE_EN, LANGUAGE_FJ, NO_CROP_DATA, NO_MARINE_DATA,
    PLANNER_PROMPT_TEMPLATE, SUBSTITUTION_HEADER,
};
use crate::almanac::dataset::{CROP_CALENDAR, CROP_DB, MARINE_SPECIES_DB, MARINE_STATUS};
use crate::almanac::join::rows_for_month;
use crate::almanac::models::{CropCalendarEntry, MarineStatusEntry};

/// Response language requested by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    En,
    Fj,
}

impl Language {
    fn instruction(self) -> &'static str {
        match self {
            Language::En => LANGUAGE_EN,
            Language::Fj => LANGUAGE_FJ,
        }
    }
}

/// The reference rows for one month plus the user's selections.
#[derive(Debug, Clone)]
pub struct KnowledgeContext {
    pub month_name: String,
    pub crops: Vec<&'static CropCalendarEntry>,
    pub marine: Vec<&'static MarineStatusEntry>,
    pub selected_crops: Vec<String>,
    pub selected_marine: Vec<String>,
}

/// Gathers the crop-calendar and marine-status rows for `month_name`.
pub fn build_context(
    month_name: &str,
    selected_crops: &[String],
    selected_marine: &[String],
) -> KnowledgeContext {
    KnowledgeContext {
        month_name: month_name.to_string(),
        crops: rows_for_month(CROP_CALENDAR, month_name),
        marine: rows_for_month(MARINE_STATUS, month_name),
        selected_crops: clean_list(selected_crops),
        selected_marine: clean_list(selected_marine),
    }
}

fn clean_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

impl KnowledgeContext {
    pub fn crop_lines(&self) -> Vec<String> {
        self.crops
            .iter()
            .map(|c| format!("- {}: {}", c.crop_name_en, c.recommendation))
            .collect()
    }

    pub fn marine_lines(&self) -> Vec<String> {
        self.marine
            .iter()
            .map(|m| {
                format!("- {}: Status is '{}'. {}", m.species_name_en, m.status, m.note)
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    /// The context block embedded in the prompt. Empty tables render a fixed
    /// placeholder sentence instead of an empty section.
    pub fn render(&self) -> String {
        let crop_block = match self.crop_lines() {
            lines if lines.is_empty() => NO_CROP_DATA.to_string(),
            lines => lines.join("\n"),
        };
        let marine_block = match self.marine_lines() {
            lines if lines.is_empty() => NO_MARINE_DATA.to_string(),
            lines => lines.join("\n"),
        };

        format!(
            "**Traditional Knowledge for {}:**\n*Available Crops & Recommendations:*\n{}\n\n*Marine Species Activity:*\n{}",
            self.month_name, crop_block, marine_block
        )
    }

    pub fn crop_list(&self) -> String {
        join_or_none(&self.selected_crops)
    }

    pub fn marine_list(&self) -> String {
        join_or_none(&self.selected_marine)
    }

    /// The month's status row for a species, matched loosely on name.
    pub fn marine_status_of(&self, species: &str) -> Option<&'static MarineStatusEntry> {
        self.marine
            .iter()
            .copied()
            .find(|m| same_species(species, m.species_name_en))
    }

    /// Species of this month with an abundance-type status, other than `species`.
    pub fn abundant_alternatives(&self, species: &str) -> Vec<&'static MarineStatusEntry> {
        self.marine
            .iter()
            .copied()
            .filter(|m| m.is_abundant() && !same_species(species, m.species_name_en))
            .collect()
    }

    /// Selected species whose status this month is `low_supply`.
    pub fn low_supply_selections(&self) -> Vec<&'static MarineStatusEntry> {
        self.selected_marine
            .iter()
            .filter_map(|s| self.marine_status_of(s))
            .filter(|m| m.is_low_supply())
            .collect()
    }
}

/// Case-insensitive match that also accepts a parenthesised qualifier,
/// so "Kawakawa (Grouper)" matches "Kawakawa".
pub fn same_species(a: &str, b: &str) -> bool {
    let base = |s: &str| {
        s.split(" (")
            .next()
            .unwrap_or(s)
            .trim()
            .to_lowercase()
    };
    base(a) == base(b)
}

/// English and Fijian names a task may use for a marine-status row.
pub fn species_aliases(entry: &MarineStatusEntry) -> Vec<&'static str> {
    let mut names = vec![entry.species_name_en];
    for info in MARINE_SPECIES_DB
        .iter()
        .filter(|s| same_species(s.name_en, entry.species_name_en))
    {
        names.push(info.name_en);
        names.push(info.name_fj);
    }
    names.dedup();
    names
}

/// English and Fijian names a task may use for a crop-calendar row.
pub fn crop_aliases(entry: &CropCalendarEntry) -> Vec<&'static str> {
    let mut names = vec![entry.crop_name_en];
    for info in CROP_DB
        .iter()
        .filter(|c| c.name_en.eq_ignore_ascii_case(entry.crop_name_en))
    {
        names.push(info.name_fj);
    }
    names
}

/// True when `name` occurs in `text` as a whole word, ignoring case.
pub fn mentions(text: &str, name: &str) -> bool {
    let text = text.to_lowercase();
    let name = name.to_lowercase();
    if name.is_empty() {
        return false;
    }

    text.match_indices(&name).any(|(start, _)| {
        let before = text[..start].chars().next_back();
        let after = text[start + name.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// Fills the planner template for one request.
pub fn build_prompt(context: &KnowledgeContext, language: Language, goals: &[String]) -> String {
    let goals = clean_list(goals);
    let goals_section = if goals.is_empty() {
        String::new()
    } else {
        GOALS_SECTION_TEMPLATE.replace("{goals}", &goals.join(", "))
    };

    PLANNER_PROMPT_TEMPLATE
        .replace("{month}", &context.month_name)
        .replace("{crop_list}", &context.crop_list())
        .replace("{marine_list}", &context.marine_list())
        .replace("{goals_section}", &goals_section)
        .replace("{language_instruction}", language.instruction())
        .replace("{substitution_section}", &substitution_section(context))
        .replace("{context}", &context.render())
}

fn substitution_section(context: &KnowledgeContext) -> String {
    let low = context.low_supply_selections();
    if low.is_empty() {
        return String::new();
    }

    let mut section = SUBSTITUTION_HEADER.to_string();
    for entry in low {
        let alternatives: Vec<&str> = context
            .abundant_alternatives(entry.species_name_en)
            .iter()
            .map(|m| m.species_name_en)
            .collect();
        if alternatives.is_empty() {
            section.push_str(&format!(
                "\n- {} is in low supply. No abundant alternative is listed, so omit 'recommendation' for it.",
                entry.species_name_en
            ));
        } else {
            section.push_str(&format!(
                "\n- {} is in low supply. Recommend one of: {}.",
                entry.species_name_en,
                alternatives.join(", ")
            ));
        }
    }
    section.push('\n');
    section
}
