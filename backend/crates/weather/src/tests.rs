//! HTTP-level tests for the weather crate

#[cfg(test)]
mod http_tests {
    use crate::WeatherCondition;
    use crate::models::WeatherResponse;
    use crate::weather_router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use chrono::NaiveDate;
    use kernel::clock::{FixedClock, SystemClock};
    use tower::ServiceExt; // for oneshot

    fn friday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn request() -> Request<Body> {
        Request::builder()
            .uri("/weather")
            .header(header::ACCEPT, "application/json")
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_weather_response_shape() {
        let app = weather_router(FixedClock::new(friday()));
        let response = app.oneshot(request()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );

        let body = body_json(response).await;
        assert!(body["current"]["temperature"].is_i64());
        assert!(body["current"]["condition"].is_string());
        assert!(body["current"]["description"].is_string());

        let forecast = body["forecast"].as_array().unwrap();
        assert_eq!(forecast.len(), 5);
        let first = &forecast[0];
        assert_eq!(first["date"], "2026-10-17");
        assert!(first["temperatureHigh"].is_i64());
        assert!(first["temperatureLow"].is_i64());
        assert!(first["condition"].is_string());
        assert!(first["description"].is_string());
    }

    #[tokio::test]
    async fn test_weather_values_for_fixed_date() {
        let app = weather_router(FixedClock::new(friday()));
        let response = app.oneshot(request()).await.unwrap();

        let body = body_json(response).await;
        assert_eq!(body["current"]["temperature"], 13);
        assert_eq!(body["current"]["condition"], "PARTLY_CLOUDY");
        assert_eq!(body["current"]["description"], "Partly Cloudy");
        assert_eq!(body["forecast"][2]["date"], "2026-10-19");
        assert_eq!(body["forecast"][2]["temperatureHigh"], 16);
        assert_eq!(body["forecast"][2]["temperatureLow"], 8);
        assert_eq!(body["forecast"][2]["condition"], "SUNNY");
    }

    #[tokio::test]
    async fn test_weather_with_system_clock() {
        let app = weather_router(SystemClock);
        let response = app.oneshot(request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let weather: WeatherResponse = serde_json::from_slice(&body).unwrap();

        assert!(WeatherCondition::ALL.contains(&weather.current.condition));
        assert!((-50..=50).contains(&weather.current.temperature));
        assert_eq!(weather.forecast.len(), 5);
    }
}
