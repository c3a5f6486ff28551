// ============================================================================
// LOTTIE ICON - looping animation with an emoji fallback
// ============================================================================

use yew::prelude::*;
use crate::config::CONFIG;
use crate::utils::lottie_ffi::{destroy_lottie, play_lottie};

#[derive(Properties, PartialEq)]
pub struct LottieIconProps {
    /// DOM id of the container, unique on the page
    pub id: AttrValue,
    /// File name under `CONFIG.animation_base_url`
    pub animation: AttrValue,
    pub fallback: AttrValue,
    /// Square size in px
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(LottieIcon)]
pub fn lottie_icon(props: &LottieIconProps) -> Html {
    use_effect_with((props.id.clone(), props.animation.clone()), |(id, animation)| {
        let id = id.clone();
        play_lottie(&id, &CONFIG.animation_url(animation));
        move || destroy_lottie(&id)
    });

    let style = format!("width: {0}px; height: {0}px;", props.size);

    html! {
        <div id={props.id.clone()} class={classes!("lottie-icon", props.class.clone())} style={style}>
            <span class="icon-fallback" aria-hidden="true">{props.fallback.clone()}</span>
        </div>
    }
}
