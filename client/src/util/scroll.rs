//! Page scrolling.

/// Smoothly scroll the window to the bottom of the page, where the edit form
/// sits below a long table.
pub fn scroll_to_bottom() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let height = window
            .document()
            .and_then(|doc| doc.body())
            .map_or(0, |body| body.scroll_height());
        let options = web_sys::ScrollToOptions::new();
        options.set_top(f64::from(height));
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
