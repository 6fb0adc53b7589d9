use serde::{Deserialize, Serialize};

/// Current conditions for the farm's city.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub description: String,
}

/// A forecast temperature; the provider sends `"-"` when it has none.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Temperature {
    Value(f64),
    Text(String),
}

impl Temperature {
    pub fn is_known(&self) -> bool {
        match self {
            Temperature::Value(_) => true,
            Temperature::Text(t) => t.trim() != "-",
        }
    }
}

impl std::fmt::Display for Temperature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Temperature::Value(v) => write!(f, "{}", v),
            Temperature::Text(t) => write!(f, "{}", t),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: String,
    pub min_temp: Temperature,
    pub max_temp: Temperature,
    #[serde(default)]
    pub description: String,
}

/// Body of `GET /api/weather?city=`.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct WeatherReport {
    #[serde(default)]
    pub weather: Option<CurrentWeather>,
    #[serde(default)]
    pub two_day: Vec<ForecastDay>,
}

impl WeatherReport {
    /// True when at least one of the next two days has a real forecast.
    pub fn has_forecast(&self) -> bool {
        self.two_day.iter().any(|d| d.min_temp.is_known())
    }
}

/// Pick an icon for a (Korean) weather description.
pub fn weather_icon(description: &str) -> &'static str {
    const ICONS: [(&str, &str); 7] = [
        ("비", "🌧️"),
        ("눈", "❄️"),
        ("구름", "☁️"),
        ("맑", "☀️"),
        ("흐림", "🌥️"),
        ("번개", "⛈️"),
        ("안개", "🌫️"),
    ];
    let desc = description.to_lowercase();
    ICONS
        .iter()
        .find(|(keyword, _)| desc.contains(keyword))
        .map(|(_, icon)| *icon)
        .unwrap_or("🌤️")
}
