use gpui::{px, size, App, Application, Bounds, KeyBinding, WindowBounds, WindowOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};
use ui::ToggleMenu;

mod app;
mod panels;
mod settings;

use app::DemoApp;

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    Registry::default()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() {
    init_logging();

    Application::new().run(|cx: &mut App| {
        ui::init(cx);

        cx.bind_keys([KeyBinding::new("ctrl-m", ToggleMenu, None)]);

        let bounds = Bounds::centered(None, size(px(1024.), px(720.)), cx);
        cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                ..Default::default()
            },
            |window, cx| cx.new(|cx| DemoApp::new(window, cx)),
        )
        .expect("failed to open the demo window");

        cx.activate(true);
    });
}
