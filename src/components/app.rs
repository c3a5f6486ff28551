use yew::prelude::*;
use yew_router::prelude::*;
use crate::routes::Route;
use crate::utils::theme::{apply_color_scheme, prefers_dark_mode};
use super::charts_and_maps::ChartsAndMaps;
use super::dashboard::Dashboard;
use super::sidebar::NavigationShell;
use super::static_pages::{Contacts, NotFound};

#[function_component(App)]
pub fn app() -> Html {
    // Follow the OS color scheme on mount
    use_effect_with((), |_| {
        let dark = prefers_dark_mode();
        log::info!("🎨 Dark mode: {}", dark);
        apply_color_scheme(dark);
        || ()
    });

    html! {
        <BrowserRouter>
            <NavigationShell>
                <Switch<Route> render={switch} />
            </NavigationShell>
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Dashboard => html! { <Dashboard /> },
        Route::Contacts => html! { <Contacts /> },
        Route::ChartsAndMaps => html! {
            <div class="p-4 sm:p-8">
                <ChartsAndMaps />
            </div>
        },
        Route::NotFound => html! { <NotFound /> },
    }
}
