//! List panel renderer.
//!
//! Each list occupies one half of the screen below the form. Items take two
//! rows: the title with its effort label, then the dimmed description. A panel
//! that a drag is hovering over is painted with the droppable background.

use crate::domain::ProjectStatus;
use crate::ui::helpers::{fit, position_cursor};
use crate::ui::layout::{BoardLayout, ITEM_HEIGHT};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ItemView, ListView};

/// Renders one list panel.
pub fn render_list(list: &ListView, status: ProjectStatus, layout: &BoardLayout, theme: &Theme) {
    let col = layout.panel_start_col(status);
    let width = layout.panel_width(status);
    let accent = match status {
        ProjectStatus::Active => &theme.colors.active_list_fg,
        ProjectStatus::Finished => &theme.colors.finished_list_fg,
    };

    position_cursor(layout.list_heading_row(), col);
    print!("{}{}", Theme::bold(), Theme::fg(accent));
    if list.is_droppable {
        print!("{}", Theme::bg(&theme.colors.droppable_bg));
    }
    let marker = if list.is_focused { "▸ " } else { "  " };
    print!("{}", fit(&format!("{marker}{}", list.title), width));
    print!("{}", Theme::reset());

    let mut row = layout.list_start_row();
    if let Some(message) = list.empty_message.as_ref().filter(|_| row <= layout.list_end_row()) {
        position_cursor(row, col);
        paint_panel_bg(list, theme);
        print!("{}", Theme::fg(&theme.colors.empty_state_fg));
        print!("{}", fit(&format!("  {message}"), width));
        print!("{}", Theme::reset());
        row += 1;
    }

    for item in &list.items {
        render_item(row, col, width, item, list, theme);
        row += ITEM_HEIGHT;
    }

    while row <= layout.list_end_row() {
        position_cursor(row, col);
        paint_panel_bg(list, theme);
        print!("{}", " ".repeat(width));
        print!("{}", Theme::reset());
        row += 1;
    }
}

/// Draws the vertical separator between the two panels.
pub fn render_separator(layout: &BoardLayout, theme: &Theme) {
    print!("{}", Theme::fg(&theme.colors.border));
    for row in layout.list_heading_row()..=layout.list_end_row() {
        position_cursor(row, layout.separator_col());
        print!("│");
    }
    print!("{}", Theme::reset());
}

fn paint_panel_bg(list: &ListView, theme: &Theme) {
    if list.is_droppable {
        print!("{}", Theme::bg(&theme.colors.droppable_bg));
    }
}

fn render_item(row: usize, col: usize, width: usize, item: &ItemView, list: &ListView, theme: &Theme) {
    let highlighted = item.is_selected && list.is_focused;

    let style = |dim: bool| {
        if item.is_dragging {
            print!("{}", Theme::fg(&theme.colors.drag_fg));
        } else if highlighted {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
        } else if dim {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        if highlighted {
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            paint_panel_bg(list, theme);
        }
    };

    position_cursor(row, col);
    style(false);
    let grip = if item.is_dragging { "≡ " } else { "  " };
    print!("{}", fit(&format!("{grip}{} · {}", item.title, item.effort), width));
    print!("{}", Theme::reset());

    position_cursor(row + 1, col);
    style(true);
    print!("{}", Theme::dim());
    print!("{}", fit(&format!("    {}", item.description), width));
    print!("{}", Theme::reset());
}
