//! Composable UI component renderers.
//!
//! Each component renders one part of the board at the rows the
//! [`BoardLayout`] assigns to it.
//!
//! # Components
//!
//! - [`header`]: Title bar with the project count
//! - [`form`]: New-project input fields
//! - [`list`]: The two project list panels and their separator
//! - [`footer`]: Notice line and keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Form - 3 lines]
//! [Border]
//! [Active heading      │ Finished heading]
//! [Active items        │ Finished items  ]
//! [Notice]
//! [Border]
//! [Footer]
//! ```

mod footer;
mod form;
mod header;
mod list;

use crate::domain::ProjectStatus;
use crate::ui::helpers::position_cursor;
use crate::ui::layout::BoardLayout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use footer::{render_footer, render_notice};
use form::render_form;
use header::render_header;
use list::{render_list, render_separator};

/// Renders a horizontal border line at the specified row.
fn render_border(row: usize, color: &str, cols: usize) {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
}

/// Renders the whole board.
pub fn render_board(vm: &UIViewModel, theme: &Theme, layout: &BoardLayout) {
    let cols = layout.cols;

    render_header(layout.header_row(), &vm.header, theme, cols);
    render_border(layout.form_border_row(), &theme.colors.border, cols);
    render_form(&vm.form, layout, theme);
    render_border(layout.lists_border_row(), &theme.colors.border, cols);

    render_list(&vm.active, ProjectStatus::Active, layout, theme);
    render_list(&vm.finished, ProjectStatus::Finished, layout, theme);
    render_separator(layout, theme);

    render_notice(layout.notice_row(), vm.notice.as_ref(), theme, cols);
    render_border(layout.footer_border_row(), &theme.colors.border, cols);
    render_footer(layout.footer_row(), &vm.footer, theme, cols);
}
