//! Form component renderer.
//!
//! One line per field:
//!
//! ```text
//!  Title        │ Build Bridge█
//!  Description  │ Construct a bridge over river
//!  Man-days     │ 30
//! ```

use crate::app::modes::FormField;
use crate::ui::helpers::{fit, position_cursor};
use crate::ui::layout::BoardLayout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FieldView, FormView};

const LABEL_WIDTH: usize = 13;
const CURSOR: char = '█';

/// Renders every form field on the row the layout assigns to it.
pub fn render_form(form: &FormView, layout: &BoardLayout, theme: &Theme) {
    let rows = FormField::ALL.map(|f| layout.field_row(f));
    for (field, row) in form.fields.iter().zip(rows) {
        render_field(row, field, theme, layout.cols);
    }
}

fn render_field(row: usize, field: &FieldView, theme: &Theme, cols: usize) {
    position_cursor(row, 1);

    if field.is_editing {
        print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.field_focus));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!(" {}", fit(&field.label, LABEL_WIDTH - 1));
    print!("{}", Theme::reset());

    print!("{}│ ", Theme::fg(&theme.colors.field_border));
    print!("{}", Theme::fg(&theme.colors.text_normal));

    let value_width = cols.saturating_sub(LABEL_WIDTH + 2);
    let value = if field.is_editing {
        format!("{}{CURSOR}", field.value)
    } else {
        field.value.clone()
    };
    // Keep the tail visible while typing past the edge.
    let visible: String = if value.chars().count() > value_width {
        let skip = value.chars().count() - value_width;
        value.chars().skip(skip).collect()
    } else {
        value
    };
    print!("{}", fit(&visible, value_width));
    print!("{}", Theme::reset());
}
