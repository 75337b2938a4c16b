//! Footer component renderer: the notice line and keybinding hints.

use crate::ui::helpers::{center, fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, NoticeInfo};

/// Renders the footer help bar at the specified row.
///
/// Keybinding hints are centered and dimmed; text wider than the terminal is
/// truncated so it never wraps into the next line.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", center(&footer.keybindings, cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the notice line, or clears it when there is no notice.
pub fn render_notice(row: usize, notice: Option<&NoticeInfo>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    match notice {
        Some(notice) => {
            let color = if notice.is_error {
                &theme.colors.error_fg
            } else {
                &theme.colors.text_normal
            };
            print!("{}", Theme::fg(color));
            print!("{}", fit(&format!(" {}", notice.message), cols));
            print!("{}", Theme::reset());
        }
        None => print!("{}", " ".repeat(cols)),
    }
    row + 1
}
