pub mod fetch_store;
pub mod sidebar_store;

pub use fetch_store::FetchState;
pub use sidebar_store::SidebarState;
