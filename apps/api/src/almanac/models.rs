use std::borrow::Cow;

use serde::Serialize;

/// A month of the Fijian lunar calendar. `name_en` is the join key for every
/// month-scoped table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Month {
    pub number: u8,
    pub name_en: Cow<'static, str>,
    pub name_fj: Cow<'static, str>,
}

impl Month {
    pub const fn new(number: u8, name_en: &'static str, name_fj: &'static str) -> Self {
        Self {
            number,
            name_en: Cow::Borrowed(name_en),
            name_fj: Cow::Borrowed(name_fj),
        }
    }

    /// A month that is not in the registry. Number 0 marks it as unlisted.
    pub fn unlisted(name_en: &str) -> Self {
        Self {
            number: 0,
            name_en: Cow::Owned(name_en.to_string()),
            name_fj: Cow::Borrowed(""),
        }
    }
}

/// Rows keyed by the English month name.
pub trait MonthScoped {
    fn month_name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonalTitle {
    pub month_name_en: &'static str,
    pub title_en: &'static str,
    pub title_fj: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CropCalendarEntry {
    pub month_name_en: &'static str,
    pub crop_name_en: &'static str,
    pub recommendation: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorType {
    Maritime,
    Freshwater,
    Crop,
    NativePlants,
}

/// A categorized observational note for a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub month_name_en: &'static str,
    pub indicator_type: IndicatorType,
    pub note_en: &'static str,
    pub note_fj: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarineStatusEntry {
    pub month_name_en: &'static str,
    pub species_name_en: &'static str,
    /// Free-form short code: "abundance", "spawning", "low_supply", ...
    pub status: &'static str,
    pub note: &'static str,
}

impl MarineStatusEntry {
    pub fn is_low_supply(&self) -> bool {
        self.status == "low_supply"
    }

    /// Both spellings occur in the dataset.
    pub fn is_abundant(&self) -> bool {
        matches!(self.status, "abundance" | "abundant")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeStatus {
    Flowering,
    Fruiting,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreePhenologyEntry {
    pub month_name_en: &'static str,
    pub tree_name_en: &'static str,
    pub status: TreeStatus,
    pub note: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CropInfo {
    pub name_en: &'static str,
    pub name_fj: &'static str,
    pub latin_name: Option<&'static str>,
    pub crop_type: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarineSpeciesInfo {
    pub name_en: &'static str,
    pub name_fj: &'static str,
    pub taxonomic_name: Option<&'static str>,
    pub species_class: &'static str,
}

macro_rules! month_scoped {
    ($($ty:ty),+) => {
        $(impl MonthScoped for $ty {
            fn month_name(&self) -> &str {
                self.month_name_en
            }
        })+
    };
}

month_scoped!(
    SeasonalTitle,
    CropCalendarEntry,
    Indicator,
    MarineStatusEntry,
    TreePhenologyEntry
);

/// Everything the almanac knows about one month. Computed on demand.
#[derive(Debug, Clone, Serialize)]
pub struct MonthRecord {
    pub month: Month,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seasonal_title: Option<&'static SeasonalTitle>,
    pub crops: Vec<&'static CropCalendarEntry>,
    pub indicators: Vec<&'static Indicator>,
    pub marine_status: Vec<&'static MarineStatusEntry>,
    pub trees: Vec<&'static TreePhenologyEntry>,
}

impl MonthRecord {
    pub fn indicators_of(&self, indicator_type: IndicatorType) -> Vec<&'static Indicator> {
        self.indicators
            .iter()
            .copied()
            .filter(|i| i.indicator_type == indicator_type)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.seasonal_title.is_none()
            && self.crops.is_empty()
            && self.indicators.is_empty()
            && self.marine_status.is_empty()
            && self.trees.is_empty()
    }
}
