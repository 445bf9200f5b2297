use serde::Serialize;

use crate::advice::context::Language;
use crate::almanac::models::{IndicatorType, MonthRecord};
use crate::weather::WeatherReading;

const STORM_CODE: u16 = 95;
const RAIN_CODE: u16 = 61;
const UNSAFE_WIND_KMH: f64 = 40.0;
const CAUTION_WIND_KMH: f64 = 25.0;

/// Words in the month's maritime notes that call for caution.
const WARNING_WORDS: &[&str] = &["rough", "poisonous"];

pub const REASON_NORMAL: &str = "Conditions appear normal.";
pub const REASON_STORM: &str = "High winds or storm detected.";
pub const REASON_RAIN: &str = "Rain or moderate winds detected.";
pub const REASON_HISTORICAL: &str = "Historical data warns of rough seas or poisonous fish.";
pub const NO_MARINE_WARNINGS: &str = "No specific marine warnings.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeaSafetyStatus {
    Safe,
    Caution,
    Unsafe,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeaSafetyReport {
    pub status: SeaSafetyStatus,
    pub reason: &'static str,
    pub indicator_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherReading>,
}

/// Combines current weather (when known) with the month's maritime notes.
/// Weather sets the baseline. Historical warnings can raise it to caution but
/// never lower an unsafe reading.
pub fn assess_sea_safety(
    weather: Option<&WeatherReading>,
    record: &MonthRecord,
    language: Language,
) -> SeaSafetyReport {
    let maritime = record.indicators_of(IndicatorType::Maritime);

    let (mut status, mut reason) = match weather {
        Some(w) if w.weather_code >= STORM_CODE || w.windspeed > UNSAFE_WIND_KMH => {
            (SeaSafetyStatus::Unsafe, REASON_STORM)
        }
        Some(w) if w.weather_code >= RAIN_CODE || w.windspeed > CAUTION_WIND_KMH => {
            (SeaSafetyStatus::Caution, REASON_RAIN)
        }
        _ => (SeaSafetyStatus::Safe, REASON_NORMAL),
    };

    // Keywords are English, so always match against the English notes
    let warned = maritime.iter().any(|i| {
        let note = i.note_en.to_lowercase();
        WARNING_WORDS.iter().any(|w| note.contains(w))
    });
    if warned && status != SeaSafetyStatus::Unsafe {
        status = SeaSafetyStatus::Caution;
        reason = REASON_HISTORICAL;
    }

    let notes: Vec<&str> = maritime
        .iter()
        .map(|i| match language {
            Language::En => i.note_en,
            Language::Fj => i.note_fj,
        })
        .collect();
    let indicator_text = if notes.is_empty() {
        NO_MARINE_WARNINGS.to_string()
    } else {
        notes.join(". ")
    };

    SeaSafetyReport {
        status,
        reason,
        indicator_text,
        weather: weather.cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::almanac::join::get_month_record_by_name;
    use crate::almanac::models::Indicator;

    fn reading(weather_code: u16, windspeed: f64) -> WeatherReading {
        WeatherReading {
            temperature: 27.0,
            weather_code,
            windspeed,
        }
    }

    static ROUGH_SEAS: Indicator = Indicator {
        month_name_en: "Stormmonth",
        indicator_type: IndicatorType::Maritime,
        note_en: "Rough seas, stay near the reef",
        note_fj: "Ca na waitui",
    };

    fn rough_record() -> MonthRecord {
        let mut record = get_month_record_by_name("Stormmonth");
        record.indicators.push(&ROUGH_SEAS);
        record
    }

    #[test]
    fn test_calm_weather_is_safe() {
        let record = get_month_record_by_name("July");
        let report = assess_sea_safety(Some(&reading(1, 10.0)), &record, Language::En);
        assert_eq!(report.status, SeaSafetyStatus::Safe);
        assert_eq!(report.reason, REASON_NORMAL);
        assert_eq!(report.indicator_text, "Octopus abundant");
    }

    #[test]
    fn test_storm_code_or_high_wind_is_unsafe() {
        let record = get_month_record_by_name("July");
        for w in [reading(95, 5.0), reading(0, 40.1)] {
            let report = assess_sea_safety(Some(&w), &record, Language::En);
            assert_eq!(report.status, SeaSafetyStatus::Unsafe);
            assert_eq!(report.reason, REASON_STORM);
        }
    }

    #[test]
    fn test_rain_or_moderate_wind_is_caution() {
        let record = get_month_record_by_name("July");
        for w in [reading(61, 5.0), reading(0, 25.5), reading(0, 40.0)] {
            let report = assess_sea_safety(Some(&w), &record, Language::En);
            assert_eq!(report.status, SeaSafetyStatus::Caution);
            assert_eq!(report.reason, REASON_RAIN);
        }
    }

    #[test]
    fn test_thresholds_are_exclusive_for_wind() {
        let record = get_month_record_by_name("July");
        let report = assess_sea_safety(Some(&reading(0, 25.0)), &record, Language::En);
        assert_eq!(report.status, SeaSafetyStatus::Safe);
    }

    #[test]
    fn test_historical_warning_raises_to_caution() {
        let report = assess_sea_safety(Some(&reading(0, 5.0)), &rough_record(), Language::En);
        assert_eq!(report.status, SeaSafetyStatus::Caution);
        assert_eq!(report.reason, REASON_HISTORICAL);
    }

    #[test]
    fn test_historical_warning_never_lowers_unsafe() {
        let report = assess_sea_safety(Some(&reading(96, 5.0)), &rough_record(), Language::En);
        assert_eq!(report.status, SeaSafetyStatus::Unsafe);
        assert_eq!(report.reason, REASON_STORM);
    }

    #[test]
    fn test_fijian_display_still_checks_english_keywords() {
        let report = assess_sea_safety(None, &rough_record(), Language::Fj);
        assert_eq!(report.status, SeaSafetyStatus::Caution);
        assert_eq!(report.indicator_text, "Ca na waitui");
    }

    #[test]
    fn test_no_weather_and_no_notes() {
        let record = get_month_record_by_name("Nowhere");
        let report = assess_sea_safety(None, &record, Language::En);
        assert_eq!(report.status, SeaSafetyStatus::Safe);
        assert_eq!(report.indicator_text, NO_MARINE_WARNINGS);
        assert!(report.weather.is_none());
    }

    #[test]
    fn test_fijian_indicator_text() {
        let record = get_month_record_by_name("December");
        let report = assess_sea_safety(None, &record, Language::Fj);
        assert_eq!(report.indicator_text, "Levu na Nuqa Lailai");
    }
}
