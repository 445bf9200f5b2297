//! Month Join: denormalizes the month-scoped tables into one `MonthRecord`.
//!
//! Every lookup by month goes through `rows_for_month`, including the planner
//! context, so the calendar view and the planner can never disagree.

use super::dataset::{
    CROP_CALENDAR, CROP_DB, INDICATORS, MARINE_SPECIES_DB, MARINE_STATUS, MONTHS,
    SEASONAL_TITLES, TREE_PHENOLOGY,
};
use super::models::{CropInfo, MarineSpeciesInfo, Month, MonthRecord, MonthScoped};

/// Rows of `table` whose month key equals `month_name`, in declaration order.
pub fn rows_for_month<T: MonthScoped>(table: &'static [T], month_name: &str) -> Vec<&'static T> {
    table
        .iter()
        .filter(|row| row.month_name() == month_name)
        .collect()
}

/// Joins all month-scoped tables for `month`. Never fails: a month with no
/// matching rows yields empty lists and no seasonal title.
pub fn get_month_record(month: &Month) -> MonthRecord {
    let name = month.name_en.as_ref();

    MonthRecord {
        month: month.clone(),
        seasonal_title: SEASONAL_TITLES.iter().find(|t| t.month_name() == name),
        crops: rows_for_month(CROP_CALENDAR, name),
        indicators: rows_for_month(INDICATORS, name),
        marine_status: rows_for_month(MARINE_STATUS, name),
        trees: rows_for_month(TREE_PHENOLOGY, name),
    }
}

/// Same as `get_month_record`, keyed by English name. Unknown names produce
/// an unlisted month with an empty record.
pub fn get_month_record_by_name(name: &str) -> MonthRecord {
    match month_by_name(name) {
        Some(month) => get_month_record(month),
        None => get_month_record(&Month::unlisted(name)),
    }
}

/// All twelve records in calendar order.
pub fn get_all_month_records() -> Vec<MonthRecord> {
    MONTHS.iter().map(get_month_record).collect()
}

pub fn list_crops() -> &'static [CropInfo] {
    CROP_DB
}

pub fn list_marine_species() -> &'static [MarineSpeciesInfo] {
    MARINE_SPECIES_DB
}

pub fn month_by_number(number: u8) -> Option<&'static Month> {
    MONTHS.iter().find(|m| m.number == number)
}

pub fn month_by_name(name: &str) -> Option<&'static Month> {
    MONTHS.iter().find(|m| m.name_en == name)
}
