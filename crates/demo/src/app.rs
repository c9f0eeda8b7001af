use gpui::{
    div, px, App, Context, Entity, Focusable as _, IntoElement, InteractiveElement, MouseButton,
    MouseDownEvent, ParentElement, Render, SharedString, Styled, Window,
};
use tracing::warn;
use ui::{h_flex, panel_view, v_flex, ActiveTheme, SlidingMenu, Theme, ThemeMode, ToggleMenu};

use crate::panels::{DemoContent, DemoHeader, DemoMenu, SectionSelected, SECTIONS};
use crate::settings::Settings;

/// Hosts the sliding menu and wires its child panels together: menu
/// selections swap the content and header panels, the footer exercises the
/// public toggle API and switches themes.
pub struct DemoApp {
    sliding_menu: Entity<SlidingMenu>,
    settings: Settings,
}

impl DemoApp {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let settings = Settings::load().unwrap_or_else(|err| {
            warn!(%err, "settings unavailable, using defaults");
            Settings::default()
        });
        Theme::change(settings.theme, cx);

        let menu = cx.new(DemoMenu::new);
        let content = cx.new(|cx| DemoContent::new(SECTIONS[0], cx));
        let header = cx.new(|cx| DemoHeader::new(SECTIONS[0], cx));

        let sliding_menu = cx.new(|cx| {
            SlidingMenu::new(panel_view(menu.clone()), panel_view(content), window, cx)
                .with_header(panel_view(header))
                .menu_width(px(320.))
        });

        cx.subscribe(&menu, Self::on_section_selected).detach();

        // Key dispatch walks up from the focused element; focus the
        // container so ctrl-m reaches its ToggleMenu handler.
        sliding_menu.read(cx).focus_handle(cx).focus(window);

        Self {
            sliding_menu,
            settings,
        }
    }

    fn on_section_selected(
        &mut self,
        _menu: Entity<DemoMenu>,
        event: &SectionSelected,
        cx: &mut Context<Self>,
    ) {
        let name = SECTIONS[event.0];
        let content = cx.new(|cx| DemoContent::new(name, cx));
        let header = cx.new(|cx| DemoHeader::new(name, cx));
        self.sliding_menu.update(cx, |menu, cx| {
            menu.set_content(panel_view(content), false, cx);
            menu.set_header(Some(panel_view(header)), cx);
        });
    }

    fn toggle_theme(&mut self, cx: &mut Context<Self>) {
        let mode = if cx.theme().mode.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        };
        Theme::change(mode, cx);
        self.settings.theme = mode;
        if let Err(err) = self.settings.save() {
            warn!(%err, "failed to persist settings");
        }
    }

    fn footer_button(
        &self,
        label: impl Into<SharedString>,
        on_click: impl Fn(&MouseDownEvent, &mut Window, &mut App) + 'static,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        div()
            .px_2()
            .py_1()
            .rounded(cx.theme().radius)
            .text_xs()
            .cursor_pointer()
            .text_color(cx.theme().foreground)
            .hover(|this| this.bg(cx.theme().accent))
            .on_mouse_down(MouseButton::Left, on_click)
            .child(label.into())
    }

    fn render_footer(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let is_dark = cx.theme().mode.is_dark();
        let is_open = self.sliding_menu.read(cx).is_open();

        h_flex()
            .w_full()
            .h(px(32.))
            .px_2()
            .justify_between()
            .bg(cx.theme().secondary)
            .border_t_1()
            .border_color(cx.theme().border)
            .child(
                div()
                    .text_xs()
                    .text_color(cx.theme().muted_foreground)
                    .child(if is_open { "menu open" } else { "menu closed" }),
            )
            .child(
                h_flex()
                    .gap_2()
                    .child(self.footer_button(
                        "Toggle menu (ctrl-m)",
                        cx.listener(|this, _, _window, cx| {
                            this.sliding_menu.update(cx, |menu, cx| menu.toggle_menu(cx));
                        }),
                        cx,
                    ))
                    .child(self.footer_button(
                        if is_dark { "Light theme" } else { "Dark theme" },
                        cx.listener(|this, _, _window, cx| this.toggle_theme(cx)),
                        cx,
                    )),
            )
    }
}

impl Render for DemoApp {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .size_full()
            .bg(cx.theme().background)
            .on_action(cx.listener(|this: &mut Self, _: &ToggleMenu, _window, cx| {
                this.sliding_menu.update(cx, |menu, cx| menu.toggle_menu(cx));
            }))
            .child(div().flex_1().relative().child(self.sliding_menu.clone()))
            .child(self.render_footer(cx))
    }
}
