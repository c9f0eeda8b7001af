use gpui::{div, Div, FontWeight, Styled};

/// Horizontal flex layout with centered items.
pub fn h_flex() -> Div {
    div().h_flex()
}

/// Vertical flex layout.
pub fn v_flex() -> Div {
    div().v_flex()
}

pub trait StyledExt: Styled + Sized {
    fn h_flex(self) -> Self {
        self.flex().flex_row().items_center()
    }

    fn v_flex(self) -> Self {
        self.flex().flex_col()
    }

    fn font_semibold(self) -> Self {
        self.font_weight(FontWeight::SEMIBOLD)
    }
}

impl<E: Styled> StyledExt for E {}
