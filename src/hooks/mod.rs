pub mod use_remote;
pub mod use_sidebar;

pub use use_remote::{use_countries, use_global_stats, use_historical, use_remote};
pub use use_sidebar::{use_sidebar, UseSidebarHandle};
