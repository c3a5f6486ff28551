// ============================================================================
// COVID-19 DASHBOARD - Yew + WASM
// ============================================================================
// MVVM layout:
// - Components: render only
// - Hooks: component-local state, fetch lifetime
// - ViewModels: pure data shaping
// - Services: HTTP + response cache
// - Models: upstream payloads
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod stores;
pub mod viewmodels;
pub mod hooks;
pub mod utils;
pub mod routes;
pub mod components;

pub use components::App;
