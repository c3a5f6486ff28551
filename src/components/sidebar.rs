// ============================================================================
// NAVIGATION SHELL + SIDEBAR
// ============================================================================
// The shell owns the minimized flag; the sidebar is a pure render of it.
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;
use crate::hooks::use_sidebar;
use crate::routes::{NavItem, Route, NAV_ITEMS};
use crate::stores::SidebarState;
use super::lottie_icon::LottieIcon;

const NAV_ICON_SIZE: u32 = 80;
const MINIMIZED_NAV_ICON_SIZE: u32 = 48;

#[derive(Properties, PartialEq)]
pub struct NavigationShellProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(NavigationShell)]
pub fn navigation_shell(props: &NavigationShellProps) -> Html {
    let sidebar = use_sidebar();
    let active = use_route::<Route>().unwrap_or(Route::NotFound);

    html! {
        <div class="flex min-h-screen">
            <Sidebar state={sidebar.state} active={active} on_toggle={sidebar.toggle.clone()} />
            <main class="flex-1 min-w-0">
                { for props.children.iter() }
            </main>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub state: SidebarState,
    pub active: Route,
    pub on_toggle: Callback<()>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let state = props.state;
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };
    let toggle_label = if state.minimized { "Expand sidebar" } else { "Collapse sidebar" };

    html! {
        <aside class={classes!("sidebar", "bg-gray-800", "transition-all", state.width_class())}>
            <div class="flex flex-col h-full p-4">
                <div class="flex items-center justify-between">
                    <span class={classes!("text-xl", "font-semibold", "text-white", (!state.shows_labels()).then_some("hidden"))}>
                        {"Dashboard"}
                    </span>
                    <button class="block p-2 focus:outline-none" aria-label={toggle_label} onclick={onclick}>
                        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" class="h-6 w-6 fill-current text-white">
                            <path d="M2 6H22V8H2zM2 11H22V13H2zM2 16H22V18H2z" />
                        </svg>
                    </button>
                </div>

                <ul class="mt-5">
                    { for NAV_ITEMS.iter().map(|item| nav_item(item, state, props.active)) }
                </ul>

                <div class={classes!("avatar", "mx-auto", "mt-20", (!state.shows_labels()).then_some("hidden"))}>
                    {"👤"}
                </div>
            </div>
        </aside>
    }
}

fn nav_item(item: &NavItem, state: SidebarState, active: Route) -> Html {
    let classes = classes!(
        "nav-item",
        "flex",
        "items-center",
        "gap-3",
        "font-bold",
        "transition-colors",
        "hover:bg-gray-700",
        if state.minimized { "text-white" } else { item.accent_class },
        (!state.minimized).then_some("hover:border"),
        (!state.minimized).then_some("rounded-lg"),
        (active == item.route).then_some("active"),
    );

    html! {
        <li class="mt-2">
            <Link<Route> to={item.route} classes={classes}>
                <LottieIcon
                    id={format!("nav-icon-{}", item.animation.trim_end_matches(".json"))}
                    animation={item.animation}
                    fallback={item.icon}
                    size={if state.minimized { MINIMIZED_NAV_ICON_SIZE } else { NAV_ICON_SIZE }}
                    class={classes!("nav-icon", state.minimized.then_some("minimized-icon"))}
                />
                if state.shows_labels() {
                    <span>{item.label}</span>
                }
            </Link<Route>>
        </li>
    }
}
