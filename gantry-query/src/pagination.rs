//! Cursor-based windowing over ordered sequences
//!
//! The window function never re-orders its input; `reverse` only
//! selects which end of the window the cursor and limit anchor.

/// A caller-supplied pagination request.
///
/// The cursor is an opaque token equal to the value of the last-seen
/// element. Forward iteration resumes after the cursor; reverse
/// iteration ends before it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageWindow {
    pub cursor: Option<String>,
    pub limit: Option<usize>,
    pub reverse: bool,
}

impl PageWindow {
    /// The whole sequence: no cursor, no limit, forward.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(cursor: Option<String>, limit: Option<usize>, reverse: bool) -> Self {
        Self {
            cursor,
            limit,
            reverse,
        }
    }
}

/// Window `items` by cursor, limit, and direction.
///
/// - Forward: the window starts after the cursor and takes `limit`
///   elements from its lower end.
/// - Reverse: the window ends before the cursor and takes `limit`
///   elements from its upper end.
/// - A cursor that matches no element leaves the window untouched: the
///   sequence may have changed since the cursor was handed out, and
///   restarting from the full window degrades to visible duplication
///   rather than silently dropping the remainder.
/// - `limit == Some(0)` is a present limit and yields an empty window.
///
/// Bounds are clamped to the sequence; the result is always an
/// in-bounds contiguous subslice in the original element order.
pub fn apply_page_window<'a, T: AsRef<str>>(items: &'a [T], window: &PageWindow) -> &'a [T] {
    let mut start = 0;
    let mut end = items.len();

    if let Some(cursor) = &window.cursor {
        if let Some(index) = items.iter().position(|item| item.as_ref() == cursor) {
            if window.reverse {
                end = index;
            } else {
                start = index + 1;
            }
        }
    }

    if let Some(limit) = window.limit {
        if window.reverse {
            start = end.saturating_sub(limit);
        } else {
            end = start.saturating_add(limit).min(items.len());
        }
    }

    if start >= end {
        return &items[..0];
    }
    &items[start..end]
}
