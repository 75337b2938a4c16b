//! Screen layout shared by the renderer and mouse hit-testing.
//!
//! Rows and columns are 1-indexed, matching ANSI cursor positioning. The same
//! [`BoardLayout`] is used to draw the board and to map a mouse position back to
//! a form field or list row, so clicks always land on what was drawn.
//!
//! ```text
//! row 1            (blank)
//! row 2            header
//! row 3            border
//! rows 4-6         form fields (title, description, man-days)
//! row 7            border
//! row 8            list headings      Active │ Finished
//! rows 9..=end     list items, ITEM_HEIGHT rows each
//! rows-2           notice
//! rows-1           border
//! rows             footer
//! ```

use crate::app::modes::FormField;
use crate::domain::ProjectStatus;
use std::ops::Range;

/// Rows used by one list item (title line + description line).
pub const ITEM_HEIGHT: usize = 2;

const HEADER_ROW: usize = 2;
const FORM_START_ROW: usize = 4;
const LIST_HEADING_ROW: usize = 8;
const LIST_START_ROW: usize = 9;
/// Notice, border and footer rows below the lists.
const BOTTOM_CHROME_ROWS: usize = 3;

/// What lies under a screen position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A form input field.
    Field(FormField),
    /// A list item, by index into the full (unwindowed) list.
    Item { list: ProjectStatus, index: usize },
    /// Somewhere inside a list panel that is not an item.
    List(ProjectStatus),
}

/// Row and column geometry of the board for one terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub rows: usize,
    pub cols: usize,
}

impl BoardLayout {
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    #[must_use]
    pub const fn header_row(&self) -> usize {
        HEADER_ROW
    }

    #[must_use]
    pub const fn form_border_row(&self) -> usize {
        HEADER_ROW + 1
    }

    /// Row on which a form field is drawn.
    #[must_use]
    pub const fn field_row(&self, field: FormField) -> usize {
        match field {
            FormField::Title => FORM_START_ROW,
            FormField::Description => FORM_START_ROW + 1,
            FormField::Manday => FORM_START_ROW + 2,
        }
    }

    #[must_use]
    pub const fn lists_border_row(&self) -> usize {
        LIST_HEADING_ROW - 1
    }

    #[must_use]
    pub const fn list_heading_row(&self) -> usize {
        LIST_HEADING_ROW
    }

    #[must_use]
    pub const fn list_start_row(&self) -> usize {
        LIST_START_ROW
    }

    /// Last row available to list items.
    #[must_use]
    pub const fn list_end_row(&self) -> usize {
        self.rows.saturating_sub(BOTTOM_CHROME_ROWS)
    }

    #[must_use]
    pub const fn notice_row(&self) -> usize {
        self.rows.saturating_sub(2)
    }

    #[must_use]
    pub const fn footer_border_row(&self) -> usize {
        self.rows.saturating_sub(1)
    }

    #[must_use]
    pub const fn footer_row(&self) -> usize {
        self.rows
    }

    /// Number of items that fit in a list panel.
    #[must_use]
    pub const fn item_capacity(&self) -> usize {
        let end = self.list_end_row();
        if end < LIST_START_ROW {
            return 0;
        }
        (end - LIST_START_ROW + 1) / ITEM_HEIGHT
    }

    /// Column of the vertical separator between the two panels.
    #[must_use]
    pub const fn separator_col(&self) -> usize {
        self.cols / 2 + 1
    }

    /// First column of a panel.
    #[must_use]
    pub const fn panel_start_col(&self, list: ProjectStatus) -> usize {
        match list {
            ProjectStatus::Active => 1,
            ProjectStatus::Finished => self.separator_col() + 1,
        }
    }

    /// Width of a panel in columns.
    #[must_use]
    pub const fn panel_width(&self, list: ProjectStatus) -> usize {
        match list {
            ProjectStatus::Active => self.separator_col().saturating_sub(1),
            ProjectStatus::Finished => self.cols.saturating_sub(self.separator_col()),
        }
    }

    /// Panel containing `col`, or `None` on the separator or outside the screen.
    #[must_use]
    pub const fn panel_at(&self, col: usize) -> Option<ProjectStatus> {
        let separator = self.separator_col();
        if col == 0 || col > self.cols || col == separator {
            None
        } else if col < separator {
            Some(ProjectStatus::Active)
        } else {
            Some(ProjectStatus::Finished)
        }
    }

    /// Maps a screen position to what is drawn there.
    ///
    /// `window_start` returns the index of the first visible item of a list, as
    /// produced by [`visible_window`] during rendering.
    pub fn hit_test<F>(&self, row: usize, col: usize, window_start: F) -> Option<HitTarget>
    where
        F: Fn(ProjectStatus) -> usize,
    {
        if let Some(field) = FormField::ALL.into_iter().find(|f| self.field_row(*f) == row) {
            return Some(HitTarget::Field(field));
        }

        let list = self.panel_at(col)?;
        if row == LIST_HEADING_ROW {
            return Some(HitTarget::List(list));
        }
        if row < LIST_START_ROW || row > self.list_end_row() {
            return None;
        }

        let slot = (row - LIST_START_ROW) / ITEM_HEIGHT;
        if slot >= self.item_capacity() {
            return Some(HitTarget::List(list));
        }
        Some(HitTarget::Item {
            list,
            index: window_start(list) + slot,
        })
    }
}

/// Computes which items of a list are visible.
///
/// Keeps the selected item near the middle of the window, and fills the window
/// when the selection is near either end.
#[must_use]
pub fn visible_window(selected: usize, len: usize, capacity: usize) -> Range<usize> {
    if capacity == 0 || len == 0 {
        return 0..0;
    }
    if len <= capacity {
        return 0..len;
    }

    let start = selected.saturating_sub(capacity / 2).min(len - capacity);
    start..start + capacity
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn capacity_accounts_for_chrome() {
        let layout = BoardLayout::new(24, 80);
        assert_eq!(layout.list_end_row(), 21);
        assert_eq!(layout.item_capacity(), 6);
        assert_eq!(BoardLayout::new(10, 80).item_capacity(), 0);
    }

    #[rstest]
    #[case(1, Some(ProjectStatus::Active))]
    #[case(40, Some(ProjectStatus::Active))]
    #[case(41, None)]
    #[case(42, Some(ProjectStatus::Finished))]
    #[case(80, Some(ProjectStatus::Finished))]
    #[case(81, None)]
    fn panels_split_at_the_separator(#[case] col: usize, #[case] expected: Option<ProjectStatus>) {
        assert_eq!(BoardLayout::new(24, 80).panel_at(col), expected);
    }

    #[test]
    fn hit_test_finds_form_fields() {
        let layout = BoardLayout::new(24, 80);
        assert_eq!(layout.hit_test(4, 10, |_| 0), Some(HitTarget::Field(FormField::Title)));
        assert_eq!(layout.hit_test(6, 70, |_| 0), Some(HitTarget::Field(FormField::Manday)));
    }

    #[test]
    fn hit_test_maps_both_item_lines_to_one_item() {
        let layout = BoardLayout::new(24, 80);
        let expected = Some(HitTarget::Item { list: ProjectStatus::Finished, index: 1 });
        assert_eq!(layout.hit_test(11, 50, |_| 0), expected);
        assert_eq!(layout.hit_test(12, 50, |_| 0), expected);
    }

    #[test]
    fn hit_test_offsets_by_window_start() {
        let layout = BoardLayout::new(24, 80);
        let start = |list| if list == ProjectStatus::Active { 4 } else { 0 };
        assert_eq!(
            layout.hit_test(9, 5, start),
            Some(HitTarget::Item { list: ProjectStatus::Active, index: 4 })
        );
    }

    #[test]
    fn hit_test_heading_and_chrome() {
        let layout = BoardLayout::new(24, 80);
        assert_eq!(layout.hit_test(8, 5, |_| 0), Some(HitTarget::List(ProjectStatus::Active)));
        assert_eq!(layout.hit_test(2, 5, |_| 0), None);
        assert_eq!(layout.hit_test(24, 5, |_| 0), None);
        assert_eq!(layout.hit_test(10, 41, |_| 0), None);
    }

    #[rstest]
    #[case(0, 3, 5, 0..3)]
    #[case(0, 10, 4, 0..4)]
    #[case(5, 10, 4, 3..7)]
    #[case(9, 10, 4, 6..10)]
    #[case(0, 0, 4, 0..0)]
    #[case(2, 5, 0, 0..0)]
    fn window_keeps_selection_visible(
        #[case] selected: usize,
        #[case] len: usize,
        #[case] capacity: usize,
        #[case] expected: Range<usize>,
    ) {
        assert_eq!(visible_window(selected, len, capacity), expected);
    }
}
