//! Mock weather payload
//!
//! Static current conditions plus a five-day forecast. No upstream is
//! queried; the HTTP handler adds the artificial latency and timestamp.

use serde::{Deserialize, Serialize};

pub const FORECAST_DAYS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub location: String,
    /// Degrees Fahrenheit
    pub temperature: i32,
    pub feels_like: i32,
    pub condition: String,
    /// Relative humidity, percent
    pub humidity: u8,
    /// Miles per hour
    pub wind_speed: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub day: String,
    pub high: i32,
    pub low: i32,
    pub condition: String,
}

impl ForecastDay {
    fn new(day: &str, high: i32, low: i32, condition: &str) -> Self {
        Self {
            day: day.to_string(),
            high,
            low,
            condition: condition.to_string(),
        }
    }
}

/// Hardcoded report served by `/api/weather`.
pub fn mock_report() -> WeatherReport {
    WeatherReport {
        current: CurrentConditions {
            location: "Washington, DC".to_string(),
            temperature: 72,
            feels_like: 74,
            condition: "Partly Cloudy".to_string(),
            humidity: 65,
            wind_speed: 8,
        },
        forecast: vec![
            ForecastDay::new("Monday", 75, 62, "Sunny"),
            ForecastDay::new("Tuesday", 78, 64, "Partly Cloudy"),
            ForecastDay::new("Wednesday", 73, 60, "Rain"),
            ForecastDay::new("Thursday", 70, 58, "Cloudy"),
            ForecastDay::new("Friday", 76, 63, "Sunny"),
        ],
    }
}

/// Envelope returned by the weather endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<WeatherReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WeatherResponse {
    pub fn ok(data: WeatherReport, timestamp: String) -> Self {
        Self {
            success: true,
            data: Some(data),
            timestamp: Some(timestamp),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            timestamp: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_has_five_days() {
        let report = mock_report();
        assert_eq!(report.forecast.len(), FORECAST_DAYS);
        for day in &report.forecast {
            assert!(day.high >= day.low, "{} high below low", day.day);
        }
    }

    #[test]
    fn test_report_is_constant() {
        assert_eq!(mock_report(), mock_report());
    }

    #[test]
    fn test_response_shapes() {
        let ok = serde_json::to_value(WeatherResponse::ok(mock_report(), "2024-01-01T00:00:00Z".into()))
            .unwrap();
        assert_eq!(ok["success"], true);
        assert_eq!(ok["data"]["current"]["feelsLike"], 74);
        assert_eq!(ok["data"]["current"]["windSpeed"], 8);
        assert!(ok.get("error").is_none());

        let failed = serde_json::to_value(WeatherResponse::failure("boom")).unwrap();
        assert_eq!(failed["success"], false);
        assert_eq!(failed["error"], "boom");
        assert!(failed.get("data").is_none());
        assert!(failed.get("timestamp").is_none());
    }
}
