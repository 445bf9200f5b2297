use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Mean synodic month in days.
const SYNODIC_MONTH_DAYS: f64 = 29.530_588_2;
/// Day count offset that puts a known new moon at phase zero.
const EPOCH_OFFSET_DAYS: f64 = 694_039.09;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    const ORDER: [MoonPhase; 8] = [
        MoonPhase::NewMoon,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
        MoonPhase::FullMoon,
        MoonPhase::WaningGibbous,
        MoonPhase::LastQuarter,
        MoonPhase::WaningCrescent,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::FullMoon => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::LastQuarter => "Last Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "🌑",
            MoonPhase::WaxingCrescent => "🌒",
            MoonPhase::FirstQuarter => "🌓",
            MoonPhase::WaxingGibbous => "🌔",
            MoonPhase::FullMoon => "🌕",
            MoonPhase::WaningGibbous => "🌖",
            MoonPhase::LastQuarter => "🌗",
            MoonPhase::WaningCrescent => "🌘",
        }
    }
}

/// Approximate phase for a calendar date, rounded to the nearest eighth of
/// the synodic month. Accurate to about a day, which is enough for display.
pub fn moon_phase(date: NaiveDate) -> MoonPhase {
    let (mut year, mut month) = (date.year() as f64, date.month() as f64);
    if month < 3.0 {
        year -= 1.0;
        month += 12.0;
    }
    month += 1.0;

    let days = 365.25 * year + 30.6 * month + date.day() as f64 - EPOCH_OFFSET_DAYS;
    let cycles = days / SYNODIC_MONTH_DAYS;
    let fraction = cycles - cycles.trunc();

    // 8 wraps back to new moon
    let index = ((fraction * 8.0).round() as usize) % 8;
    MoonPhase::ORDER[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_moon_on_2024_eclipse() {
        assert_eq!(moon_phase(date(2024, 4, 8)), MoonPhase::NewMoon);
    }

    #[test]
    fn test_full_moon_two_weeks_later() {
        assert_eq!(moon_phase(date(2024, 4, 23)), MoonPhase::FullMoon);
    }

    #[test]
    fn test_january_uses_previous_year_shift() {
        assert_eq!(moon_phase(date(2025, 1, 13)), MoonPhase::FullMoon);
    }

    #[test]
    fn test_phases_advance_through_a_cycle() {
        let start = date(2024, 4, 8);
        let mut seen = std::collections::HashSet::new();
        for offset in 0..30 {
            seen.insert(moon_phase(start + chrono::Duration::days(offset)));
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_phase_labels() {
        assert_eq!(MoonPhase::FullMoon.name(), "Full Moon");
        assert_eq!(MoonPhase::WaxingCrescent.icon(), "🌒");
        assert_eq!(
            serde_json::to_value(MoonPhase::LastQuarter).unwrap(),
            "last_quarter"
        );
    }
}
