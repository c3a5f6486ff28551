// Pages without data dependencies

use yew::prelude::*;
use yew_router::prelude::Link;
use crate::config::CONFIG;
use crate::routes::Route;

#[function_component(Contacts)]
pub fn contacts() -> Html {
    html! {
        <div class="p-4 max-w-2xl mx-auto">
            <h1 class="text-3xl font-extrabold tracking-tight mb-6 text-center font-custom">{"Contacts"}</h1>
            <div class="bg-white p-8 rounded-lg shadow-md space-y-4">
                <p>
                    {"Statistics are provided by "}
                    <a class="text-blue-600 underline" href={CONFIG.api_base_url.clone()} target="_blank" rel="noopener noreferrer">
                        {"disease.sh - Open Disease Data API"}
                    </a>
                    {"."}
                </p>
                <p>
                    {"Map data © "}
                    <a class="text-blue-600 underline" href="https://www.openstreetmap.org/copyright" target="_blank" rel="noopener noreferrer">
                        {"OpenStreetMap contributors"}
                    </a>
                    {"."}
                </p>
                <p class="text-sm text-gray-500">
                    {"Figures are aggregated upstream and shown as received."}
                </p>
            </div>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="p-4 text-center">
            <h1 class="text-3xl font-extrabold mb-4">{"Page not found"}</h1>
            <Link<Route> to={Route::Dashboard} classes="text-blue-600 underline">
                {"Back to the dashboard"}
            </Link<Route>>
        </div>
    }
}
