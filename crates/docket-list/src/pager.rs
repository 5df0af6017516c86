//! Page-number window calculation for pagination controls

/// Compute the window of page numbers to render as clickable controls.
///
/// At most five pages, always containing `current_page`, pinned so the
/// window never slides past either end of the page range. `max_page == 0`
/// yields an empty window.
///
/// `current_page` must lie in `[1, max_page]` when `max_page > 0`; a page
/// outside that range is a caller error (callers clamp before invoking).
pub fn page_window(current_page: u64, max_page: u64) -> Vec<u64> {
    if max_page == 0 {
        return Vec::new();
    }
    debug_assert!(
        (1..=max_page).contains(&current_page),
        "current_page {current_page} outside [1, {max_page}]"
    );

    if max_page <= 5 || current_page <= 3 {
        (1..=max_page.min(5)).collect()
    } else if current_page >= max_page - 2 {
        (max_page - 4..=max_page).collect()
    } else {
        (current_page - 2..=current_page + 2).collect()
    }
}
