use std::sync::Arc;

use crate::advice::service::AdviceService;
use crate::config::Config;
use crate::weather::WeatherSource;

/// Shared application state injected into all route handlers via Axum extractors.
/// The almanac dataset is static and needs no slot here.
#[derive(Clone)]
pub struct AppState {
    /// Planner, with the generator it was constructed with.
    pub advice: Arc<AdviceService>,
    /// Pluggable weather source. Default: OpenMeteoClient.
    pub weather: Arc<dyn WeatherSource>,
    pub config: Config,
}
