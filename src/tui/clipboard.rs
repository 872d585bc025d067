//! Clipboard access for copying OSM links.
//!
//! Never fails: when no clipboard is reachable (SSH, headless) the returned
//! status message says so and the explorer carries on.

/// Copy `text` and return the status line to show.
pub fn copy_to_clipboard(text: &str, description: &str) -> String {
    use arboard::Clipboard;

    match Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text) {
            Ok(()) => format!("Copied {description} to clipboard"),
            Err(e) => format!("Clipboard error: {e}"),
        },
        Err(e) => format!("Clipboard not available: {e}"),
    }
}
