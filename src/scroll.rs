use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scrolls to the element with `section_id`. Returns false when the
/// page has no such element.
pub fn scroll_to_section(section_id: &str) -> bool {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(section_id));

    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => {
            log::debug!("No section with id {}", section_id);
            false
        }
    }
}
