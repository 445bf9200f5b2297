use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::advice::context::Language;
use crate::almanac::join::{
    get_all_month_records, get_month_record, get_month_record_by_name, list_crops,
    list_marine_species, month_by_number,
};
use crate::almanac::models::{CropInfo, MarineSpeciesInfo, Month, MonthRecord};
use crate::almanac::moon::{moon_phase, MoonPhase};
use crate::errors::AppError;
use crate::state::AppState;
use crate::weather::sea_safety::{assess_sea_safety, SeaSafetyReport};
use crate::weather::{weather_label, WeatherReading, WeatherSource};

/// Fiji standard time. No daylight saving.
const FIJI_UTC_OFFSET_HOURS: i64 = 12;

#[derive(Deserialize)]
pub struct LanguageQuery {
    #[serde(default)]
    pub language: Language,
}

#[derive(Serialize)]
pub struct MoonInfo {
    pub phase: MoonPhase,
    pub name: &'static str,
    pub icon: &'static str,
}

impl From<MoonPhase> for MoonInfo {
    fn from(phase: MoonPhase) -> Self {
        Self {
            phase,
            name: phase.name(),
            icon: phase.icon(),
        }
    }
}

#[derive(Serialize)]
pub struct WeatherInfo {
    #[serde(flatten)]
    pub reading: WeatherReading,
    pub label: &'static str,
}

#[derive(Serialize)]
pub struct ConditionsResponse {
    pub date: NaiveDate,
    pub month: &'static Month,
    pub moon: MoonInfo,
    pub weather: Option<WeatherInfo>,
}

/// Resolves a path segment to a record. All digits means a month number,
/// anything else an English month name.
fn resolve_month(key: &str) -> Result<MonthRecord, AppError> {
    if !key.is_empty() && key.chars().all(|c| c.is_ascii_digit()) {
        let month = key
            .parse::<u8>()
            .ok()
            .and_then(month_by_number)
            .ok_or_else(|| AppError::Validation(format!("month number must be 1-12, got {key}")))?;
        return Ok(get_month_record(month));
    }

    let record = get_month_record_by_name(key);
    if record.is_empty() {
        debug!("No almanac rows for month name {key:?}");
    }
    Ok(record)
}

fn fiji_today(now: DateTime<Utc>) -> NaiveDate {
    (now + Duration::hours(FIJI_UTC_OFFSET_HOURS)).date_naive()
}

/// Weather is optional everywhere it is shown, so failures only get logged.
async fn current_weather(source: &dyn WeatherSource) -> Option<WeatherReading> {
    match source.current().await {
        Ok(reading) => reading,
        Err(e) => {
            warn!("Weather lookup failed: {e}");
            None
        }
    }
}

/// GET /api/v1/months
pub async fn handle_list_months() -> Json<Vec<MonthRecord>> {
    Json(get_all_month_records())
}

/// GET /api/v1/months/:month
pub async fn handle_get_month(Path(month): Path<String>) -> Result<Json<MonthRecord>, AppError> {
    Ok(Json(resolve_month(&month)?))
}

/// GET /api/v1/months/:month/sea-safety
pub async fn handle_sea_safety(
    State(state): State<AppState>,
    Path(month): Path<String>,
    Query(params): Query<LanguageQuery>,
) -> Result<Json<SeaSafetyReport>, AppError> {
    let record = resolve_month(&month)?;
    let weather = current_weather(state.weather.as_ref()).await;
    Ok(Json(assess_sea_safety(
        weather.as_ref(),
        &record,
        params.language,
    )))
}

/// GET /api/v1/crops
pub async fn handle_list_crops() -> Json<&'static [CropInfo]> {
    Json(list_crops())
}

/// GET /api/v1/marine-species
pub async fn handle_list_marine_species() -> Json<&'static [MarineSpeciesInfo]> {
    Json(list_marine_species())
}

/// GET /api/v1/conditions
pub async fn handle_conditions(
    State(state): State<AppState>,
) -> Result<Json<ConditionsResponse>, AppError> {
    let date = fiji_today(Utc::now());
    let month = month_by_number(date.month() as u8)
        .ok_or_else(|| anyhow::anyhow!("no registry entry for month {}", date.month()))?;
    let weather = current_weather(state.weather.as_ref())
        .await
        .map(|reading| WeatherInfo {
            label: weather_label(reading.weather_code),
            reading,
        });

    Ok(Json(ConditionsResponse {
        date,
        month,
        moon: moon_phase(date).into(),
        weather,
    }))
}
