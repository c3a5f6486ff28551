//! Static routes of the dashboard.
use yew_router::prelude::*;

#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/contacts")]
    Contacts,
    #[at("/charts-and-maps")]
    ChartsAndMaps,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Sidebar entry
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
    /// Emoji shown until the animation has loaded
    pub icon: &'static str,
    /// Lottie file name under the animation base URL
    pub animation: &'static str,
    /// Link color while the sidebar is expanded
    pub accent_class: &'static str,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        route: Route::Dashboard,
        label: "Dashboard",
        icon: "🏠",
        animation: "DashboardIcon.json",
        accent_class: "text-red-500",
    },
    NavItem {
        route: Route::Contacts,
        label: "Contacts",
        icon: "📇",
        animation: "ContactsBook.json",
        accent_class: "text-green-500",
    },
    NavItem {
        route: Route::ChartsAndMaps,
        label: "Charts & Maps",
        icon: "📊",
        animation: "ChartGraph.json",
        accent_class: "text-blue-500",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        assert_eq!(Route::Dashboard.to_path(), "/");
        assert_eq!(Route::Contacts.to_path(), "/contacts");
        assert_eq!(Route::ChartsAndMaps.to_path(), "/charts-and-maps");
    }

    #[test]
    fn nav_lists_the_three_pages() {
        let routes: Vec<Route> = NAV_ITEMS.iter().map(|item| item.route).collect();
        assert_eq!(routes, vec![Route::Dashboard, Route::Contacts, Route::ChartsAndMaps]);
        assert!(!routes.contains(&Route::NotFound));

        let animations: Vec<&str> = NAV_ITEMS.iter().map(|item| item.animation).collect();
        assert_eq!(animations, vec!["DashboardIcon.json", "ContactsBook.json", "ChartGraph.json"]);
    }
}
