pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::advice::handlers as planner;
use crate::almanac::handlers as almanac;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Almanac API
        .route("/api/v1/months", get(almanac::handle_list_months))
        .route("/api/v1/months/:month", get(almanac::handle_get_month))
        .route(
            "/api/v1/months/:month/sea-safety",
            get(almanac::handle_sea_safety),
        )
        .route("/api/v1/crops", get(almanac::handle_list_crops))
        .route(
            "/api/v1/marine-species",
            get(almanac::handle_list_marine_species),
        )
        .route("/api/v1/conditions", get(almanac::handle_conditions))
        // Planner API
        .route(
            "/api/v1/planner/generate",
            post(planner::handle_generate_plan),
        )
        .route("/api/v1/planner/export", post(planner::handle_export_plan))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::advice::service::tests::FakeGenerator;
    use crate::advice::service::{AdviceService, Generator};
    use crate::config::Config;
    use crate::weather::{WeatherError, WeatherReading, WeatherSource};

    struct FixedWeather(Option<WeatherReading>);

    #[async_trait]
    impl WeatherSource for FixedWeather {
        async fn current(&self) -> Result<Option<WeatherReading>, WeatherError> {
            Ok(self.0.clone())
        }
    }

    struct BrokenWeather;

    #[async_trait]
    impl WeatherSource for BrokenWeather {
        async fn current(&self) -> Result<Option<WeatherReading>, WeatherError> {
            Err(WeatherError::Status(502))
        }
    }

    fn app_with(generator: Generator, weather: Arc<dyn WeatherSource>) -> Router {
        let config = Config::from_lookup(|_| None).unwrap();
        build_router(AppState {
            advice: Arc::new(AdviceService::new(generator)),
            weather,
            config,
        })
    }

    fn app() -> Router {
        app_with(Generator::Unavailable, Arc::new(FixedWeather(None)))
    }

    async fn get(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> axum::response::Response {
        app.oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_generator_availability() {
        let response = get(app(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["generator"]["available"], false);
        assert!(json["generator"]["model"].is_null());
    }

    #[tokio::test]
    async fn test_list_months_in_calendar_order() {
        let json = body_json(get(app(), "/api/v1/months").await).await;
        let months = json.as_array().unwrap();
        assert_eq!(months.len(), 12);
        assert_eq!(months[0]["month"]["name_en"], "January");
        assert_eq!(months[11]["month"]["name_fj"], "Tiseba");
    }

    #[tokio::test]
    async fn test_get_month_by_number_and_name() {
        let by_number = body_json(get(app(), "/api/v1/months/10").await).await;
        let by_name = body_json(get(app(), "/api/v1/months/October").await).await;
        assert_eq!(by_number, by_name);
        assert_eq!(by_number["crops"][0]["crop_name_en"], "Breadfruit");
    }

    #[tokio::test]
    async fn test_month_number_out_of_range_is_400() {
        let response = get(app(), "/api/v1/months/13").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_month_name_is_empty_record() {
        let response = get(app(), "/api/v1/months/Smarch").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json.get("seasonal_title").is_none());
        assert_eq!(json["crops"], json!([]));
        assert_eq!(json["marine_status"], json!([]));
    }

    #[tokio::test]
    async fn test_catalogs() {
        let crops = body_json(get(app(), "/api/v1/crops").await).await;
        assert!(!crops.as_array().unwrap().is_empty());
        let species = body_json(get(app(), "/api/v1/marine-species").await).await;
        assert!(!species.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sea_safety_uses_weather() {
        let storm = WeatherReading {
            temperature: 24.0,
            weather_code: 95,
            windspeed: 60.0,
        };
        let app = app_with(Generator::Unavailable, Arc::new(FixedWeather(Some(storm))));
        let json = body_json(get(app, "/api/v1/months/July/sea-safety").await).await;
        assert_eq!(json["status"], "unsafe");
        assert_eq!(json["weather"]["weather_code"], 95);
    }

    #[tokio::test]
    async fn test_sea_safety_degrades_without_weather() {
        let app = app_with(Generator::Unavailable, Arc::new(BrokenWeather));
        let response = get(app, "/api/v1/months/12/sea-safety?language=fj").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "safe");
        assert_eq!(json["indicator_text"], "Levu na Nuqa Lailai");
        assert!(json.get("weather").is_none());
    }

    #[tokio::test]
    async fn test_conditions() {
        let clear = WeatherReading {
            temperature: 29.5,
            weather_code: 0,
            windspeed: 8.0,
        };
        let app = app_with(Generator::Unavailable, Arc::new(FixedWeather(Some(clear))));
        let json = body_json(get(app, "/api/v1/conditions").await).await;
        assert!(json["date"].is_string());
        assert!(json["moon"]["name"].is_string());
        assert_eq!(json["weather"]["label"], "Clear");
        assert_eq!(json["weather"]["temperature"], 29.5);
    }

    #[tokio::test]
    async fn test_generate_without_generator_returns_sentinel() {
        let response = post_json(
            app(),
            "/api/v1/planner/generate",
            json!({"month": "June", "crops": ["Taro"]}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "unconfigured");
        assert_eq!(json["plan"]["farmingPlan"], json!([]));
        assert_eq!(json["plan"]["fishingPlan"], json!([]));
    }

    #[tokio::test]
    async fn test_generate_with_generator() {
        let fake = FakeGenerator::replying(
            r#"{"introduction": "Bula!", "farmingPlan": [], "fishingPlan": [
                {"timing": "Night", "task": "Gather Balolo", "details": "Bring a scoop net.", "abundance": "First appearance"}
            ]}"#,
        );
        let app = app_with(
            Generator::Available(fake.clone()),
            Arc::new(FixedWeather(None)),
        );
        let json = body_json(
            post_json(
                app,
                "/api/v1/planner/generate",
                json!({"month": "October", "marine_species": ["Balolo"]}),
            )
            .await,
        )
        .await;
        assert_eq!(json["status"], "generated");
        assert_eq!(json["plan"]["fishingPlan"][0]["abundance"], "First appearance");
        assert!(json["plan"]["fishingPlan"][0].get("recommendation").is_none());
        assert_eq!(fake.prompts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_generate_rejects_blank_month() {
        let response = post_json(app(), "/api/v1/planner/generate", json!({"month": " "})).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_export_plan_as_attachment() {
        let plan = json!({
            "introduction": "Bula!",
            "farmingPlan": [{"timing": "Week 1", "task": "Plant Taro", "details": "Mound the beds."}],
            "fishingPlan": []
        });
        let response = post_json(
            app(),
            "/api/v1/planner/export",
            json!({"month": "July", "plan": plan}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"volau-plan.txt\""
        );
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));

        let text = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(text.starts_with("VOLAU PLAN - July\n"));
        assert!(text.contains("Seasonal Note: N/A\n"));
        assert!(!text.contains("FISHING PLAN"));
    }
}
