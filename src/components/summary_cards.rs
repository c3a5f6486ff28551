// ============================================================================
// SUMMARY CARD GRID
// ============================================================================

use std::rc::Rc;
use yew::prelude::*;
use crate::config::CONFIG;
use crate::models::GlobalStats;
use crate::utils::NumberLocale;
use crate::viewmodels::{SummaryCard, SummaryViewModel};
use super::loading::LoadingPlaceholder;
use super::lottie_icon::LottieIcon;

const CARD_ICON_SIZE: u32 = 100;

fn default_locale() -> NumberLocale {
    CONFIG.locale()
}

#[derive(Properties, PartialEq)]
pub struct SummaryCardGridProps {
    /// `None` while the payload is still in flight
    pub stats: Option<Rc<GlobalStats>>,
    #[prop_or_else(default_locale)]
    pub locale: NumberLocale,
}

#[function_component(SummaryCardGrid)]
pub fn summary_card_grid(props: &SummaryCardGridProps) -> Html {
    let Some(stats) = props.stats.as_ref() else {
        return html! { <LoadingPlaceholder text="Loading..." /> };
    };

    let cards = SummaryViewModel::cards(stats, props.locale);

    html! {
        <>
            if let Some(updated) = SummaryViewModel::last_updated_label(stats) {
                <p class="text-center text-sm text-gray-500 mb-4">{updated}</p>
            }
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8 w-full sm:p-8">
                { for cards.into_iter().enumerate().map(|(index, card)| card_view(index, card)) }
            </div>
        </>
    }
}

fn card_view(index: usize, card: SummaryCard) -> Html {
    html! {
        <div class={classes!(
            "card-container", "group", "bg-white", "p-12", "rounded-lg", "shadow-md",
            "flex", "flex-col", "items-center", "transition-colors", "duration-300",
            "ease-in-out", card.hover_class
        )}>
            <LottieIcon
                id={format!("card-icon-{}", index)}
                animation={card.animation}
                fallback={card.icon}
                size={CARD_ICON_SIZE}
                class={classes!("card-icon")}
            />
            <p class="text-center text-2xl pt-8 font-extrabold tracking-tight font-custom group-hover:text-white">
                {card.label}
            </p>
            <p class={classes!(
                "text-center", "text-2xl", "font-extrabold", "tracking-tight", "font-custom",
                "mt-3", "group-hover:text-white", card.text_class
            )}>
                {card.value}
            </p>
            if let Some(today) = card.today {
                <p class="text-sm text-gray-500 group-hover:text-white mt-1">{today}</p>
            }
        </div>
    }
}
