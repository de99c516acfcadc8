//! Third-party forecast widget. Structural: takes no content input.

use askama::Template;

const WIDGET_SCRIPT: &str = "https://weatherwidget.io/js/widget.min.js";
const WIDGET_FORECAST_URL: &str = "https://forecast7.com/en/38d91n77d04/washington/?unit=us";

#[derive(Template)]
#[template(path = "sections/weather_widget.html")]
struct WeatherWidgetTemplate {
    forecast_url: &'static str,
    script_src: &'static str,
}

pub fn render() -> askama::Result<String> {
    WeatherWidgetTemplate {
        forecast_url: WIDGET_FORECAST_URL,
        script_src: WIDGET_SCRIPT,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_markup() {
        let html = render().unwrap();
        assert!(html.contains("weatherwidget-io"));
        assert!(html.contains("<script"));
        assert!(html.contains("data-weather-endpoint"));
    }
}
