use web_sys::window;

/// `prefers-color-scheme: dark` on the current window
pub fn prefers_dark_mode() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Tailwind is configured with `darkMode: 'class'`, so the root element
/// carries the `dark` class.
pub fn apply_color_scheme(dark: bool) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());

    if let Some(root) = root {
        let result = if dark {
            root.class_list().add_1("dark")
        } else {
            root.class_list().remove_1("dark")
        };
        if let Err(e) = result {
            log::warn!("⚠️ Could not update color scheme: {:?}", e);
        }
    }
}
