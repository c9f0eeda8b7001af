//! The demo's child panels: a section menu that emits selection events, a
//! content page per section, and a header line.

use gpui::{
    div, prelude::FluentBuilder, App, Context, EventEmitter, FocusHandle, Focusable,
    IntoElement, InteractiveElement, MouseButton, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window,
};
use tracing::debug;
use ui::{h_flex, v_flex, ActiveTheme, Panel, StyledExt as _};

/// Sections the demo menu offers.
pub const SECTIONS: [&str; 5] = ["Overview", "Inbox", "Projects", "Calendar", "Archive"];

/// Emitted when the user picks a menu entry. The host reacts by swapping
/// the content and header panels; the sliding menu itself never sees this.
#[derive(Clone, Debug)]
pub struct SectionSelected(pub usize);

pub struct DemoMenu {
    focus_handle: FocusHandle,
    selected: usize,
}

impl DemoMenu {
    pub fn new(cx: &mut Context<Self>) -> Self {
        Self {
            focus_handle: cx.focus_handle(),
            selected: 0,
        }
    }
}

impl EventEmitter<SectionSelected> for DemoMenu {}

impl Focusable for DemoMenu {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Panel for DemoMenu {
    fn panel_name(&self) -> SharedString {
        "DemoMenu".into()
    }

    fn on_removed(&mut self, _cx: &mut Context<Self>) {
        debug!("menu panel removed");
    }
}

impl Render for DemoMenu {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .size_full()
            .p_2()
            .gap_1()
            .children(SECTIONS.iter().enumerate().map(|(ix, name)| {
                let is_selected = ix == self.selected;
                h_flex()
                    .px_3()
                    .py_1()
                    .rounded(cx.theme().radius)
                    .cursor_pointer()
                    .text_sm()
                    .text_color(cx.theme().foreground)
                    .when(is_selected, |this| this.bg(cx.theme().accent))
                    .hover(|this| this.bg(cx.theme().accent))
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(move |this, _, _window, cx| {
                            this.selected = ix;
                            cx.emit(SectionSelected(ix));
                            cx.notify();
                        }),
                    )
                    .child(*name)
            }))
    }
}

pub struct DemoContent {
    focus_handle: FocusHandle,
    section: SharedString,
}

impl DemoContent {
    pub fn new(section: impl Into<SharedString>, cx: &mut Context<Self>) -> Self {
        Self {
            focus_handle: cx.focus_handle(),
            section: section.into(),
        }
    }
}

impl Focusable for DemoContent {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Panel for DemoContent {
    fn panel_name(&self) -> SharedString {
        "DemoContent".into()
    }

    fn on_removed(&mut self, _cx: &mut Context<Self>) {
        debug!(section = %self.section, "content panel removed");
    }
}

impl Render for DemoContent {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let section = self.section.clone();

        v_flex()
            .size_full()
            .p_4()
            .gap_2()
            .child(
                div()
                    .text_lg()
                    .font_semibold()
                    .text_color(cx.theme().foreground)
                    .child(section.clone()),
            )
            .child(
                v_flex()
                    .id("content-rows")
                    .flex_1()
                    .w_full()
                    .gap_2()
                    .overflow_y_scroll()
                    .children((0..40).map(|ix| {
                        div()
                            .p_2()
                            .rounded(cx.theme().radius)
                            .border_1()
                            .border_color(cx.theme().border)
                            .text_sm()
                            .text_color(cx.theme().muted_foreground)
                            .child(format!("{}: row {}", section, ix))
                    })),
            )
    }
}

pub struct DemoHeader {
    focus_handle: FocusHandle,
    title: SharedString,
}

impl DemoHeader {
    pub fn new(title: impl Into<SharedString>, cx: &mut Context<Self>) -> Self {
        Self {
            focus_handle: cx.focus_handle(),
            title: title.into(),
        }
    }
}

impl Focusable for DemoHeader {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Panel for DemoHeader {
    fn panel_name(&self) -> SharedString {
        "DemoHeader".into()
    }
}

impl Render for DemoHeader {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        h_flex()
            .w_full()
            .justify_between()
            .child(
                div()
                    .text_sm()
                    .font_semibold()
                    .text_color(cx.theme().foreground)
                    .child(self.title.clone()),
            )
            .child(
                div()
                    .text_xs()
                    .text_color(cx.theme().muted_foreground)
                    .child("sliding menu demo"),
            )
    }
}
