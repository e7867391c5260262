//! Crowd forecast display

use super::progress_bar;
use crate::classify::crowd_level;
use crate::models::CrowdForecast;

/// Format a crowd forecast with hourly bars
pub fn format_crowd_forecast(forecast: &CrowdForecast) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} - {} crowd ({}%)",
        forecast.attraction,
        crowd_level(forecast.current_level),
        forecast.current_level
    ));
    if !forecast.wait_time.is_empty() {
        output.push_str(&format!(", wait {}", forecast.wait_time));
    }
    output.push('\n');

    for slot in &forecast.hourly {
        output.push_str(&format!(
            "  {:<6} {} {:>3}% {}\n",
            slot.hour,
            progress_bar(f64::from(slot.level), 20),
            slot.level,
            crowd_level(slot.level)
        ));
    }

    if let Some(best) = forecast.quietest_slot() {
        output.push_str(&format!("Best time to visit: {}\n", best.hour));
    }
    if let Some(peak) = forecast.peak_slot() {
        output.push_str(&format!("Busiest: {}\n", peak.hour));
    }
    if !forecast.recommendation.is_empty() {
        output.push_str(&format!("{}\n", forecast.recommendation));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HourlyCrowd;

    #[test]
    fn test_forecast_output() {
        let forecast = CrowdForecast {
            attraction: "Taj Mahal".into(),
            current_level: 75,
            wait_time: "45-60 min".into(),
            hourly: vec![
                HourlyCrowd::new("6 AM", 15),
                HourlyCrowd::new("2 PM", 90),
            ],
            recommendation: "Visit early morning".into(),
        };
        let output = format_crowd_forecast(&forecast);

        assert!(output.starts_with("Taj Mahal - high crowd (75%), wait 45-60 min"));
        assert!(output.contains("6 AM"));
        assert!(output.contains("very-high"));
        assert!(output.contains("Best time to visit: 6 AM"));
        assert!(output.contains("Busiest: 2 PM"));
        assert!(output.contains("Visit early morning"));
    }
}
