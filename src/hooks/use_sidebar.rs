// ============================================================================
// USE SIDEBAR HOOK - Collapsed/expanded state of the navigation shell
// ============================================================================

use yew::prelude::*;
use crate::stores::SidebarState;

#[derive(Clone)]
pub struct UseSidebarHandle {
    pub state: SidebarState,
    pub toggle: Callback<()>,
}

#[hook]
pub fn use_sidebar() -> UseSidebarHandle {
    let state = use_state(SidebarState::default);

    // No debounce: every click flips the flag
    let toggle = {
        let state = state.clone();
        Callback::from(move |_| {
            let next = (*state).toggled();
            log::debug!("☰ Sidebar minimized: {}", next.minimized);
            state.set(next);
        })
    };

    UseSidebarHandle {
        state: *state,
        toggle,
    }
}
