//! Weather and sensor summary, shown when no bar is selected.

use crate::state::AppState;
use dioxus::prelude::*;
use sfh_core::sensor::format_timestamp;
use sfh_core::weather::weather_icon;
use sfh_presenter::SensorState;

const CARD_STYLE: &str = "padding: 16px; margin-bottom: 12px; background: white; border-radius: 8px; box-shadow: 0 1px 4px rgba(0,0,0,0.1);";

fn reading_text(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{:.1}{}", v, unit),
        None => "-".to_string(),
    }
}

#[component]
pub fn SummaryPanel() -> Element {
    let state = use_context::<AppState>();
    let (location, weather, sensor) = {
        let farm = state.farm.read();
        (
            farm.farm().map(|f| f.location.clone()).unwrap_or_default(),
            farm.weather().cloned(),
            farm.sensor().clone(),
        )
    };

    let current = weather.as_ref().and_then(|w| w.weather.clone());
    let forecast: Vec<(String, String, String)> = weather
        .as_ref()
        .filter(|w| w.has_forecast())
        .map(|w| {
            w.two_day
                .iter()
                .map(|day| {
                    (
                        day.date.clone(),
                        weather_icon(&day.description).to_string(),
                        format!("{}° / {}°", day.min_temp, day.max_temp),
                    )
                })
                .collect()
        })
        .unwrap_or_default();

    rsx! {
        div {
            div {
                style: CARD_STYLE,
                h3 { style: "margin: 0 0 8px 0; color: #2E4B26;", "날씨" }
                match current {
                    Some(now) => {
                        let icon = weather_icon(&now.description);
                        let temperature = reading_text(now.temperature, "°C");
                        let place = format!("{} · {}", location, now.description);
                        rsx! {
                            div {
                                style: "display: flex; align-items: center; gap: 12px;",
                                span { style: "font-size: 36px;", "{icon}" }
                                div {
                                    div { style: "font-size: 22px; font-weight: bold;", "{temperature}" }
                                    div { style: "color: #666;", "{place}" }
                                }
                            }
                        }
                    }
                    None => rsx! {
                        p { style: "color: #888;", "날씨 정보를 불러올 수 없습니다." }
                    },
                }
                if forecast.is_empty() {
                    p { style: "color: #888; font-size: 13px;", "예보 정보가 없습니다." }
                } else {
                    div {
                        style: "display: flex; gap: 12px; margin-top: 12px;",
                        for (date, icon, range) in forecast {
                            div {
                                key: "{date}",
                                style: "flex: 1; padding: 8px; background: #F5F8F2; border-radius: 6px; text-align: center;",
                                div { style: "font-size: 13px; color: #666;", "{date}" }
                                div { style: "font-size: 22px;", "{icon}" }
                                div { style: "font-size: 13px;", "{range}" }
                            }
                        }
                    }
                }
            }
            div {
                style: CARD_STYLE,
                h3 { style: "margin: 0 0 8px 0; color: #2E4B26;", "센서" }
                match sensor {
                    SensorState::Loading => rsx! {
                        p { style: "color: #888;", "센서 데이터를 불러오는 중..." }
                    },
                    SensorState::Unavailable(message) => {
                        let text = message.unwrap_or_else(|| "센서 데이터가 없습니다.".to_string());
                        rsx! {
                            p { style: "color: #888;", "{text}" }
                        }
                    }
                    SensorState::Reading(reading) => {
                        let temperature = reading_text(reading.temperature, "°C");
                        let humidity = reading_text(reading.humidity, "%");
                        let measured = reading
                            .timestamp
                            .as_deref()
                            .map(format_timestamp)
                            .unwrap_or_else(|| "-".to_string());
                        rsx! {
                            div { style: "display: flex; justify-content: space-between; padding: 4px 0;", span { "온도" } strong { "{temperature}" } }
                            div { style: "display: flex; justify-content: space-between; padding: 4px 0;", span { "습도" } strong { "{humidity}" } }
                            div { style: "color: #888; font-size: 12px; margin-top: 6px;", "측정 시각 {measured}" }
                        }
                    }
                }
            }
        }
    }
}
