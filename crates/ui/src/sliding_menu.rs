//! A sliding drawer menu: a menu panel revealed by translating the
//! header/content column to the right, driven by taps and drags on the
//! burger affordance or by the public open/close API.

use std::sync::Arc;
use std::time::Duration;

use gpui::{
    div, point, prelude::FluentBuilder, px, Animation, AnimationExt as _, App,
    Context, FocusHandle, Focusable, IntoElement, InteractiveElement, MouseButton,
    MouseDownEvent, MouseMoveEvent, MouseUpEvent, ParentElement, Pixels, Point, Render,
    SharedString, Styled, Window,
};
use tracing::debug;

use crate::{h_flex, menu_state::MenuState, v_flex, ActiveTheme, PanelView};

/// Default width of the opened menu, in pixels.
pub const DEFAULT_MENU_WIDTH: f32 = 300.0;

const SLIDE_DURATION: Duration = Duration::from_millis(200);

gpui::actions!(sliding_menu, [ToggleMenu]);

/// An animated slide between two offsets. `seq` keys the animation element
/// so every transition restarts the clock.
#[derive(Debug, Clone, Copy)]
struct Slide {
    from: f32,
    seq: usize,
}

/// Container composing a menu panel, a content panel and an optional
/// header panel, with a gesture-driven open/close state machine.
///
/// The menu sits behind the header/content column; opening translates the
/// column right by the menu width. The burger in the header row is both a
/// tap target and a drag handle; hosts that hide it drive the menu through
/// [`SlidingMenu::toggle_menu`] and friends, or the [`ToggleMenu`] action.
pub struct SlidingMenu {
    focus_handle: FocusHandle,
    menu: Arc<dyn PanelView>,
    content: Arc<dyn PanelView>,
    header: Option<Arc<dyn PanelView>>,
    hide_burger: bool,
    state: MenuState,
    slide: Option<Slide>,
    removed: bool,
}

impl SlidingMenu {
    /// Both the menu and the content panel are required; the header and all
    /// other options are supplied through the builder methods.
    pub fn new(
        menu: Arc<dyn PanelView>,
        content: Arc<dyn PanelView>,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        Self {
            focus_handle: cx.focus_handle(),
            menu,
            content,
            header: None,
            hide_burger: false,
            state: MenuState::new(DEFAULT_MENU_WIDTH, false),
            slide: None,
            removed: false,
        }
    }

    /// The panel that appears in the header area, next to the burger.
    pub fn with_header(mut self, header: Arc<dyn PanelView>) -> Self {
        self.header = Some(header);
        self
    }

    /// Width of the opened menu. Defaults to [`DEFAULT_MENU_WIDTH`].
    pub fn menu_width(mut self, width: Pixels) -> Self {
        self.state = MenuState::new(width.as_f32(), self.state.is_open());
        self
    }

    /// Whether the menu starts open. The initial position is applied
    /// without animation.
    pub fn menu_open(mut self, open: bool) -> Self {
        self.state = MenuState::new(self.state.menu_width(), open);
        self
    }

    /// Suppress the built-in burger affordance. The host is then
    /// responsible for providing its own open/close trigger.
    pub fn hide_burger(mut self, hide: bool) -> Self {
        self.hide_burger = hide;
        self
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn toggle_menu(&mut self, cx: &mut Context<Self>) {
        if self.state.is_open() {
            self.close_menu(false, false, cx);
        } else {
            self.open_menu(false, false, cx);
        }
    }

    /// Open the menu. No-op when already open, unless `force`; `immediate`
    /// skips the slide animation.
    pub fn open_menu(&mut self, immediate: bool, force: bool, cx: &mut Context<Self>) {
        let from = self.state.offset();
        if !self.state.open(force) {
            return;
        }
        self.start_slide(from, immediate);
        cx.notify();
    }

    /// Close the menu. No-op when already closed, unless `force`;
    /// `immediate` skips the slide animation.
    pub fn close_menu(&mut self, immediate: bool, force: bool, cx: &mut Context<Self>) {
        let from = self.state.offset();
        if !self.state.close(force) {
            return;
        }
        self.start_slide(from, immediate);
        cx.notify();
    }

    /// Replace the menu panel. The previous occupant is torn down unless it
    /// is the same entity.
    pub fn set_menu(&mut self, panel: Arc<dyn PanelView>, cx: &mut Context<Self>) {
        debug!(panel = %panel.panel_name(cx), "menu panel replaced");
        Self::replace(&mut self.menu, panel, cx);
        cx.notify();
    }

    /// Replace the content panel. Closes the menu unless `keep_open`.
    pub fn set_content(&mut self, panel: Arc<dyn PanelView>, keep_open: bool, cx: &mut Context<Self>) {
        debug!(panel = %panel.panel_name(cx), keep_open, "content panel replaced");
        Self::replace(&mut self.content, panel, cx);
        if !keep_open {
            self.close_menu(false, false, cx);
        }
        cx.notify();
    }

    /// Replace the header panel. Passing `None` keeps the current header.
    pub fn set_header(&mut self, panel: Option<Arc<dyn PanelView>>, cx: &mut Context<Self>) {
        let Some(panel) = panel else {
            return;
        };
        debug!(panel = %panel.panel_name(cx), "header panel replaced");
        match self.header.as_mut() {
            Some(slot) => Self::replace(slot, panel, cx),
            None => self.header = Some(panel),
        }
        cx.notify();
    }

    /// Tear down the container: drop any live gesture, stop rendering, and
    /// run the panels' removal hooks. Safe to call more than once.
    pub fn remove(&mut self, cx: &mut Context<Self>) {
        if self.removed {
            return;
        }
        self.state.cancel_drag();
        self.removed = true;
        self.menu.removed(cx);
        self.content.removed(cx);
        if let Some(header) = self.header.as_ref() {
            header.removed(cx);
        }
        cx.notify();
    }

    fn replace(slot: &mut Arc<dyn PanelView>, panel: Arc<dyn PanelView>, cx: &mut App) {
        if *slot != panel {
            slot.removed(cx);
        }
        *slot = panel;
    }

    fn start_slide(&mut self, from: f32, immediate: bool) {
        if immediate || from == self.state.offset() {
            self.slide = None;
        } else {
            let seq = self.slide.map_or(0, |slide| slide.seq + 1);
            self.slide = Some(Slide { from, seq });
        }
    }

    fn on_toggle_menu(&mut self, _: &ToggleMenu, _window: &mut Window, cx: &mut Context<Self>) {
        self.toggle_menu(cx);
    }

    fn on_burger_mouse_down(
        &mut self,
        event: &MouseDownEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.state.begin_drag(pointer_position(event.position));
        cx.stop_propagation();
        cx.notify();
    }

    fn on_mouse_move(&mut self, event: &MouseMoveEvent, _window: &mut Window, cx: &mut Context<Self>) {
        if self.state.drag_to(pointer_position(event.position)).is_some() {
            // Live offset tracks the pointer directly, never animated.
            self.slide = None;
            cx.notify();
        }
    }

    fn on_mouse_up(&mut self, _event: &MouseUpEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let from = self.state.offset();
        let Some(outcome) = self.state.end_drag() else {
            return;
        };
        debug!(?outcome, "gesture finished");
        self.start_slide(from, false);
        cx.notify();
    }

    fn render_burger(&self, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .px_2()
            .py_1()
            .rounded(cx.theme().radius)
            .cursor_pointer()
            .text_color(cx.theme().foreground)
            .hover(|this| this.bg(cx.theme().accent))
            .on_mouse_down(MouseButton::Left, cx.listener(Self::on_burger_mouse_down))
            .child("☰")
    }
}

impl Focusable for SlidingMenu {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for SlidingMenu {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if self.removed {
            return div().into_any_element();
        }

        let offset = px(self.state.offset());
        let menu_width = px(self.state.menu_width());

        let header_bar = h_flex()
            .w_full()
            .px_2()
            .py_2()
            .gap_2()
            .bg(cx.theme().secondary)
            .border_b_1()
            .border_color(cx.theme().border)
            .when(!self.hide_burger, |this| this.child(self.render_burger(cx)))
            .when_some(self.header.clone(), |this, header| {
                this.child(div().flex_1().overflow_hidden().child(header.view()))
            });

        let column = v_flex()
            .absolute()
            .top_0()
            .bottom_0()
            .w_full()
            .left(offset)
            .bg(cx.theme().background)
            .border_l_1()
            .border_color(cx.theme().border)
            .child(header_bar)
            .child(
                div()
                    .flex_1()
                    .w_full()
                    .overflow_hidden()
                    .child(self.content.view()),
            );

        let column = match self.slide {
            Some(slide) if slide.from != self.state.offset() => {
                let from = px(slide.from);
                let id = SharedString::from(format!("menu-slide-{}", slide.seq));
                column
                    .with_animation(id, Animation::new(SLIDE_DURATION), move |this, delta| {
                        this.left(from + delta * (offset - from))
                    })
                    .into_any_element()
            }
            _ => column.into_any_element(),
        };

        div()
            .size_full()
            .relative()
            .overflow_hidden()
            .bg(cx.theme().background)
            .track_focus(&self.focus_handle)
            .when(self.state.is_dragging(), |this| this.cursor_grab())
            .on_action(cx.listener(Self::on_toggle_menu))
            .on_mouse_move(cx.listener(Self::on_mouse_move))
            .on_mouse_up(MouseButton::Left, cx.listener(Self::on_mouse_up))
            .child(
                div()
                    .absolute()
                    .top_0()
                    .bottom_0()
                    .left_0()
                    .w(menu_width)
                    .bg(cx.theme().sidebar)
                    .child(self.menu.view()),
            )
            .child(column)
            .into_any_element()
    }
}

fn pointer_position(position: Point<Pixels>) -> Point<f32> {
    point(position.x.as_f32(), position.y.as_f32())
}
