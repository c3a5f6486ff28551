// ============================================================================
// SIDEBAR STORE - Navigation shell UI state
// ============================================================================
// Owned by the shell, not persisted across reloads.
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SidebarState {
    pub minimized: bool,
}

impl SidebarState {
    pub fn toggled(self) -> Self {
        Self { minimized: !self.minimized }
    }

    /// Tailwind width class for the panel
    pub fn width_class(&self) -> &'static str {
        if self.minimized { "w-20" } else { "w-64" }
    }

    pub fn shows_labels(&self) -> bool {
        !self.minimized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_expanded() {
        let state = SidebarState::default();
        assert!(!state.minimized);
        assert!(state.shows_labels());
        assert_eq!(state.width_class(), "w-64");
    }

    #[test]
    fn toggle_flips() {
        let state = SidebarState::default().toggled();
        assert!(state.minimized);
        assert!(!state.shows_labels());
        assert_eq!(state.width_class(), "w-20");
    }

    #[test]
    fn double_toggle_round_trips() {
        for start in [SidebarState { minimized: false }, SidebarState { minimized: true }] {
            assert_eq!(start.toggled().toggled(), start);
        }
    }
}
