//! The single search screen: prompt for a city (or re-pick one from the
//! history), fetch, render the card, repeat until the user quits.

use std::fmt;

use anyhow::Context;
use chrono::{DateTime, Datelike, Local, Weekday};
use inquire::{InquireError, Select, Text};
use owo_colors::{OwoColorize, Rgb};

use hava_core::{
    Config, HistoryStore, Phase, QueryState, SearchController, WeatherApiClient, WeatherSnapshot,
    presentation::{DEFAULT_GRADIENT, Gradient},
    presentation_for,
};

const TITLE: &str = "Hava Durumu";
const CITY_PROMPT: &str = "Şehir adı girin...";

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    if !config.has_own_key() {
        tracing::debug!("no API key configured, using the built-in demo key");
    }
    let store = HistoryStore::open_default()?;
    let client = WeatherApiClient::new(config.resolved_api_key().to_string());
    let mut controller = SearchController::new(Box::new(client), store);

    println!("{}", TITLE.bold().color(rgb(DEFAULT_GRADIENT[2])));

    loop {
        render(controller.state());

        match next_action(&controller)? {
            Action::Search(city) => {
                let city = city.trim();
                if city.is_empty() {
                    continue;
                }
                println!("\n{}", "Yükleniyor...".dimmed());
                controller.submit(city).await;
            }
            Action::Quit => break,
        }
    }

    Ok(())
}

enum Action {
    Search(String),
    Quit,
}

/// One pickable row of the screen's menu.
enum MenuChoice {
    NewSearch,
    Entry { city: String, time: String },
    Quit,
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuChoice::NewSearch => write!(f, "🔍 Yeni arama"),
            MenuChoice::Entry { city, time } => write!(f, "🕒 {city}  ({time})"),
            MenuChoice::Quit => write!(f, "Çıkış"),
        }
    }
}

/// With no history yet, go straight to the text prompt; otherwise the menu
/// doubles as the history list, and picking a remembered city re-runs it.
fn next_action(controller: &SearchController) -> anyhow::Result<Action> {
    if controller.history().is_empty() {
        return prompt_city(controller.state());
    }

    let mut choices = vec![MenuChoice::NewSearch];
    choices.extend(controller.history().iter().map(|entry| MenuChoice::Entry {
        city: entry.city.clone(),
        time: entry.time.clone(),
    }));
    choices.push(MenuChoice::Quit);

    match Select::new("Arama Geçmişi", choices).prompt() {
        Ok(MenuChoice::NewSearch) => prompt_city(controller.state()),
        Ok(MenuChoice::Entry { city, .. }) => Ok(Action::Search(city)),
        Ok(MenuChoice::Quit) => Ok(Action::Quit),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            Ok(Action::Quit)
        }
        Err(err) => Err(err).context("Failed to show the history menu"),
    }
}

fn prompt_city(state: &QueryState) -> anyhow::Result<Action> {
    match Text::new(CITY_PROMPT).with_initial_value(&state.input).prompt() {
        Ok(city) => Ok(Action::Search(city)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            Ok(Action::Quit)
        }
        Err(err) => Err(err).context("Failed to read city input"),
    }
}

fn render(state: &QueryState) {
    match state.phase() {
        Phase::Failed => {
            if let Some(message) = state.error.as_deref() {
                println!("\n{}", message.red().bold());
            }
        }
        Phase::Success => {
            if let Some(snapshot) = &state.snapshot {
                weather_card(snapshot);
            }
        }
        Phase::Idle | Phase::Loading => {}
    }
}

fn weather_card(snapshot: &WeatherSnapshot) {
    let look = presentation_for(&snapshot.condition);

    println!();
    gradient_bar(look.gradient);
    println!("{}", snapshot.display_name().bold());
    println!("{}", turkish_date(Local::now()).dimmed());
    println!();
    println!("  {}  {}", look.emoji, format!("{}°C", snapshot.temp_c.round()).bold());
    println!("  {}", snapshot.condition);
    println!();
    println!("  💨 Rüzgar      {} km/s", snapshot.wind_kph);
    println!("  💧 Nem         {}%", snapshot.humidity);
    println!("  👁️ Görüş       {} km", snapshot.vis_km);
    println!("  🌡️ Hissedilen  {}°C", snapshot.feelslike_c.round());
    gradient_bar(look.gradient);
}

/// Thin three-stop strip standing in for the app background gradient.
fn gradient_bar(gradient: Gradient) {
    for stop in gradient {
        print!("{}", "██████████".color(rgb(stop)));
    }
    println!();
}

fn rgb(hex: &str) -> Rgb {
    let value = u32::from_str_radix(hex.trim_start_matches('#'), 16).unwrap_or(0x3182ce);
    Rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

/// "7 Ağustos Perşembe"-style long date.
fn turkish_date(now: DateTime<Local>) -> String {
    format!(
        "{} {} {}",
        now.day(),
        turkish_month(now.month()),
        turkish_weekday(now.weekday())
    )
}

fn turkish_month(month: u32) -> &'static str {
    match month {
        1 => "Ocak",
        2 => "Şubat",
        3 => "Mart",
        4 => "Nisan",
        5 => "Mayıs",
        6 => "Haziran",
        7 => "Temmuz",
        8 => "Ağustos",
        9 => "Eylül",
        10 => "Ekim",
        11 => "Kasım",
        12 => "Aralık",
        _ => "",
    }
}

fn turkish_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Pazartesi",
        Weekday::Tue => "Salı",
        Weekday::Wed => "Çarşamba",
        Weekday::Thu => "Perşembe",
        Weekday::Fri => "Cuma",
        Weekday::Sat => "Cumartesi",
        Weekday::Sun => "Pazar",
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn channels(color: Rgb) -> (u8, u8, u8) {
        (color.0, color.1, color.2)
    }

    #[test]
    fn hex_stops_parse_to_their_channels() {
        assert_eq!(channels(rgb("#4299e1")), (0x42, 0x99, 0xe1));
        assert_eq!(channels(rgb("#000000")), (0, 0, 0));
    }

    #[test]
    fn bad_hex_falls_back_to_the_default_blue() {
        assert_eq!(channels(rgb("not-a-color")), (0x31, 0x82, 0xce));
    }

    #[test]
    fn long_date_reads_day_month_weekday() {
        let date = Local.with_ymd_and_hms(2024, 8, 7, 12, 0, 0).unwrap();
        assert_eq!(turkish_date(date), "7 Ağustos Çarşamba");
    }

    #[test]
    fn every_month_has_a_name() {
        for month in 1..=12 {
            assert!(!turkish_month(month).is_empty());
        }
    }

    #[test]
    fn menu_rows_render_their_labels() {
        let entry = MenuChoice::Entry { city: "Paris".into(), time: "07.08 14:32".into() };
        assert_eq!(entry.to_string(), "🕒 Paris  (07.08 14:32)");
        assert_eq!(MenuChoice::NewSearch.to_string(), "🔍 Yeni arama");
        assert_eq!(MenuChoice::Quit.to_string(), "Çıkış");
    }
}
