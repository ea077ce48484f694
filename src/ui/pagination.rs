//! Page arithmetic and the pager control.

use iced::widget::{button, row, text};
use iced::{Alignment, Element};

use crate::Message;

/// Number of pages needed for `total_count` items at `limit` per page.
pub fn total_pages(total_count: u64, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }
    (total_count as usize).div_ceil(limit)
}

/// Backend offset of a zero-based page index.
pub fn offset(page: usize, limit: usize) -> usize {
    page.saturating_mul(limit)
}

/// Previous/next pager. Buttons at either end of the range are disabled.
pub fn pager(page: usize, total_pages: usize) -> Element<'static, Message> {
    let prev =
        button(text("< prev")).on_press_maybe((page > 0).then(|| Message::GoToPage(page - 1)));
    let next = button(text("next >"))
        .on_press_maybe((page + 1 < total_pages).then(|| Message::GoToPage(page + 1)));

    row![
        prev,
        text(format!("page {} of {}", page + 1, total_pages.max(1))),
        next,
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(23, 9), 3);
        assert_eq!(total_pages(27, 9), 3);
        assert_eq!(total_pages(28, 9), 4);
    }

    #[test]
    fn test_total_pages_edge_cases() {
        assert_eq!(total_pages(0, 9), 0);
        assert_eq!(total_pages(1, 9), 1);
        assert_eq!(total_pages(9, 9), 1);
        assert_eq!(total_pages(10, 9), 2);
    }

    #[test]
    fn test_offset_is_page_times_limit() {
        assert_eq!(offset(0, 9), 0);
        assert_eq!(offset(2, 9), 18);
    }
}
