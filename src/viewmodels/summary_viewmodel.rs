// ============================================================================
// SUMMARY VIEWMODEL - GlobalStats -> eleven display cards
// ============================================================================
// Pure data shaping, no state. Cards are independent of each other.
// ============================================================================

use crate::models::GlobalStats;
use crate::utils::number_format::{format_decimal, NumberLocale};

/// One rendered card
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryCard {
    pub label: &'static str,
    /// Emoji shown until the animation has loaded
    pub icon: &'static str,
    /// Lottie file name under the animation base URL
    pub animation: &'static str,
    pub value: String,
    /// Text color of the value
    pub text_class: &'static str,
    /// Card background on hover
    pub hover_class: &'static str,
    /// "+1,234 today" for the daily counters, when non-zero
    pub today: Option<String>,
}

struct CardLayout {
    label: &'static str,
    icon: &'static str,
    animation: &'static str,
    text_class: &'static str,
    hover_class: &'static str,
    metric: fn(&GlobalStats) -> f64,
    today: Option<fn(&GlobalStats) -> f64>,
}

pub const CARD_COUNT: usize = 11;

const CARD_LAYOUT: [CardLayout; CARD_COUNT] = [
    CardLayout {
        label: "Total Cases",
        icon: "🦠",
        animation: "coronavirus.json",
        text_class: "text-gray-600",
        hover_class: "hover:bg-gray-600",
        metric: |s| s.cases,
        today: Some(|s| s.today_cases),
    },
    CardLayout {
        label: "Total Deaths",
        icon: "💀",
        animation: "skull.json",
        text_class: "text-red-600",
        hover_class: "hover:bg-red-500",
        metric: |s| s.deaths,
        today: Some(|s| s.today_deaths),
    },
    CardLayout {
        label: "Total Recovered",
        icon: "❤️",
        animation: "HeartBeatRed.json",
        text_class: "text-green-500",
        hover_class: "hover:bg-green-500",
        metric: |s| s.recovered,
        today: Some(|s| s.today_recovered),
    },
    CardLayout {
        label: "Active Cases",
        icon: "🩺",
        animation: "ActiveCase.json",
        text_class: "text-yellow-600",
        hover_class: "hover:bg-yellow-600",
        metric: |s| s.active,
        today: None,
    },
    CardLayout {
        label: "Critical Cases",
        icon: "🫁",
        animation: "lung.json",
        text_class: "text-pink-700",
        hover_class: "hover:bg-pink-700",
        metric: |s| s.critical,
        today: None,
    },
    CardLayout {
        label: "Tests Conducted",
        icon: "🧪",
        animation: "TestsConducted.json",
        text_class: "text-blue-700",
        hover_class: "hover:bg-blue-700",
        metric: |s| s.tests,
        today: None,
    },
    CardLayout {
        label: "Affected Countries",
        icon: "🗺️",
        animation: "CountryAffected.json",
        text_class: "text-red-500",
        hover_class: "hover:bg-red-500",
        metric: |s| s.affected_countries,
        today: None,
    },
    CardLayout {
        label: "Tests per Million",
        icon: "📊",
        animation: "TestsPerMillion.json",
        text_class: "text-blue-400",
        hover_class: "hover:bg-blue-400",
        metric: |s| s.tests_per_one_million,
        today: None,
    },
    CardLayout {
        label: "Cases per Million",
        icon: "📈",
        animation: "CasesPerMillion.json",
        text_class: "text-pink-500",
        hover_class: "hover:bg-pink-500",
        metric: |s| s.cases_per_one_million,
        today: None,
    },
    CardLayout {
        label: "Deaths per Million",
        icon: "📉",
        animation: "skull.json",
        text_class: "text-red-700",
        hover_class: "hover:bg-red-700",
        metric: |s| s.deaths_per_one_million,
        today: None,
    },
    CardLayout {
        label: "Global Population",
        icon: "🌍",
        animation: "Globe.json",
        text_class: "text-green-800",
        hover_class: "hover:bg-green-800",
        metric: |s| s.population,
        today: None,
    },
];

pub struct SummaryViewModel;

impl SummaryViewModel {
    /// Always `CARD_COUNT` cards, in display order
    pub fn cards(stats: &GlobalStats, locale: NumberLocale) -> Vec<SummaryCard> {
        CARD_LAYOUT
            .iter()
            .map(|layout| {
                let value = format_decimal((layout.metric)(stats), locale);
                let today = layout
                    .today
                    .map(|get| get(stats))
                    .filter(|delta| *delta != 0.0)
                    .map(|delta| today_label(delta, locale));

                SummaryCard {
                    label: layout.label,
                    icon: layout.icon,
                    animation: layout.animation,
                    value,
                    text_class: layout.text_class,
                    hover_class: layout.hover_class,
                    today,
                }
            })
            .collect()
    }

    pub fn last_updated_label(stats: &GlobalStats) -> Option<String> {
        stats
            .updated_at()
            .map(|at| format!("Last updated {}", at.format("%d %b %Y %H:%M UTC")))
    }
}

fn today_label(delta: f64, locale: NumberLocale) -> String {
    let sign = if delta > 0.0 { "+" } else { "" };
    format!("{}{} today", sign, format_decimal(delta, locale))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GlobalStats {
        GlobalStats {
            cases: 1_000_000.0,
            deaths: 5_000.0,
            recovered: 900_000.0,
            active: 95_000.0,
            critical: 1_234.0,
            tests: 12_345_678.0,
            affected_countries: 231.0,
            tests_per_one_million: 890_613.8,
            cases_per_one_million: 88_783.0,
            deaths_per_one_million: 887.4,
            population: 7_900_000_000.0,
            ..GlobalStats::default()
        }
    }

    fn value_of<'a>(cards: &'a [SummaryCard], label: &str) -> &'a str {
        cards
            .iter()
            .find(|card| card.label == label)
            .map(|card| card.value.as_str())
            .unwrap()
    }

    #[test]
    fn eleven_cards_in_order() {
        let cards = SummaryViewModel::cards(&sample(), NumberLocale::EnIn);
        assert_eq!(cards.len(), CARD_COUNT);
        let labels: Vec<&str> = cards.iter().map(|card| card.label).collect();
        assert_eq!(
            labels,
            vec![
                "Total Cases",
                "Total Deaths",
                "Total Recovered",
                "Active Cases",
                "Critical Cases",
                "Tests Conducted",
                "Affected Countries",
                "Tests per Million",
                "Cases per Million",
                "Deaths per Million",
                "Global Population",
            ]
        );
    }

    #[test]
    fn indian_locale_values() {
        let cards = SummaryViewModel::cards(&sample(), NumberLocale::EnIn);
        assert_eq!(value_of(&cards, "Total Cases"), "10,00,000");
        assert_eq!(value_of(&cards, "Total Deaths"), "5,000");
        assert_eq!(value_of(&cards, "Total Recovered"), "9,00,000");
        assert_eq!(value_of(&cards, "Active Cases"), "95,000");
        assert_eq!(value_of(&cards, "Critical Cases"), "1,234");
        assert_eq!(value_of(&cards, "Tests Conducted"), "1,23,45,678");
        assert_eq!(value_of(&cards, "Affected Countries"), "231");
        assert_eq!(value_of(&cards, "Tests per Million"), "8,90,613.8");
        assert_eq!(value_of(&cards, "Cases per Million"), "88,783");
        assert_eq!(value_of(&cards, "Deaths per Million"), "887.4");
        assert_eq!(value_of(&cards, "Global Population"), "7,90,00,00,000");
    }

    #[test]
    fn western_locale_values() {
        let cards = SummaryViewModel::cards(&sample(), NumberLocale::EnUs);
        assert_eq!(value_of(&cards, "Total Cases"), "1,000,000");
        assert_eq!(value_of(&cards, "Tests Conducted"), "12,345,678");
    }

    #[test]
    fn today_deltas_only_when_non_zero() {
        let stats = GlobalStats {
            today_cases: 12_345.0,
            today_deaths: 0.0,
            today_recovered: -3.0,
            ..sample()
        };
        let cards = SummaryViewModel::cards(&stats, NumberLocale::EnIn);
        assert_eq!(cards[0].today.as_deref(), Some("+12,345 today"));
        assert_eq!(cards[1].today, None);
        assert_eq!(cards[2].today.as_deref(), Some("-3 today"));
        assert!(cards[3..].iter().all(|card| card.today.is_none()));
    }

    #[test]
    fn values_render_as_received() {
        let stats = GlobalStats {
            active: -5.0,
            cases: 42.9,
            ..sample()
        };
        let cards = SummaryViewModel::cards(&stats, NumberLocale::EnIn);
        assert_eq!(value_of(&cards, "Active Cases"), "-5");
        assert_eq!(value_of(&cards, "Total Cases"), "42.9");
    }

    #[test]
    fn every_card_has_an_animation() {
        let cards = SummaryViewModel::cards(&sample(), NumberLocale::EnIn);
        assert!(cards.iter().all(|card| card.animation.ends_with(".json")));
        assert_eq!(cards[0].animation, "coronavirus.json");
    }

    #[test]
    fn last_updated() {
        let mut stats = sample();
        assert_eq!(SummaryViewModel::last_updated_label(&stats), None);

        // 2023-11-14 22:13:20 UTC
        stats.updated = Some(1_700_000_000_000);
        assert_eq!(
            SummaryViewModel::last_updated_label(&stats).as_deref(),
            Some("Last updated 14 Nov 2023 22:13 UTC")
        );
    }
}
