use serde::Serialize;

pub const PREV_LABEL: &str = "← Prev";
pub const NEXT_LABEL: &str = "Next →";
pub const ELLIPSIS_LABEL: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    Prev,
    Next,
    Page,
    Ellipsis,
}

/// One entry of the pagination bar.
///
/// `target` is the page a click navigates to; ellipses have none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageControl {
    pub kind: ControlKind,
    pub label: String,
    pub target: Option<usize>,
    pub active: bool,
}

impl PageControl {
    pub fn prev(target: usize) -> Self {
        Self {
            kind: ControlKind::Prev,
            label: PREV_LABEL.to_string(),
            target: Some(target),
            active: false,
        }
    }

    pub fn next(target: usize) -> Self {
        Self {
            kind: ControlKind::Next,
            label: NEXT_LABEL.to_string(),
            target: Some(target),
            active: false,
        }
    }

    pub fn page(number: usize, active: bool) -> Self {
        Self {
            kind: ControlKind::Page,
            label: number.to_string(),
            target: Some(number),
            active,
        }
    }

    pub fn ellipsis() -> Self {
        Self {
            kind: ControlKind::Ellipsis,
            label: ELLIPSIS_LABEL.to_string(),
            target: None,
            active: false,
        }
    }
}

/// Build the pagination bar for `current_page` of `total_pages`.
///
/// Layout: optional prev, first page + ellipsis when the window has moved
/// away from the start, a window of two pages either side of the current one,
/// ellipsis + last page when the window ends early, optional next.
/// A single page (or none) yields no controls.
pub fn build_pagination(current_page: usize, total_pages: usize) -> Vec<PageControl> {
    let mut controls = Vec::new();

    if total_pages <= 1 {
        return controls;
    }

    // Thresholds below compare against total - 2 / total - 3, keep them signed.
    let current = current_page as i64;
    let total = total_pages as i64;

    if current > 1 {
        controls.push(PageControl::prev(current_page - 1));
    }

    if current > 3 {
        controls.push(PageControl::page(1, false));
        if current > 4 {
            controls.push(PageControl::ellipsis());
        }
    }

    let start = (current - 2).max(1);
    let end = (current + 2).min(total);
    for page in start..=end {
        controls.push(PageControl::page(page as usize, page == current));
    }

    if current < total - 2 {
        if current < total - 3 {
            controls.push(PageControl::ellipsis());
        }
        controls.push(PageControl::page(total_pages, false));
    }

    if current < total {
        controls.push(PageControl::next(current_page + 1));
    }

    controls
}
