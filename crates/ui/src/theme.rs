use gpui::{hsla, px, App, Global, Hsla, Pixels};
use serde::{Deserialize, Serialize};

/// Light or dark palette selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Global color theme for the components.
#[derive(Debug, Clone)]
pub struct Theme {
    pub mode: ThemeMode,
    pub background: Hsla,
    pub foreground: Hsla,
    pub muted_foreground: Hsla,
    pub border: Hsla,
    pub secondary: Hsla,
    pub sidebar: Hsla,
    pub accent: Hsla,
    pub primary: Hsla,
    pub primary_foreground: Hsla,
    pub radius: Pixels,
}

impl Global for Theme {}

impl Theme {
    fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            background: hsla(0.0, 0.0, 1.0, 1.0),
            foreground: hsla(240.0 / 360.0, 0.10, 0.04, 1.0),
            muted_foreground: hsla(240.0 / 360.0, 0.04, 0.46, 1.0),
            border: hsla(240.0 / 360.0, 0.06, 0.90, 1.0),
            secondary: hsla(240.0 / 360.0, 0.05, 0.96, 1.0),
            sidebar: hsla(240.0 / 360.0, 0.05, 0.98, 1.0),
            accent: hsla(240.0 / 360.0, 0.05, 0.93, 1.0),
            primary: hsla(240.0 / 360.0, 0.06, 0.10, 1.0),
            primary_foreground: hsla(0.0, 0.0, 0.98, 1.0),
            radius: px(4.0),
        }
    }

    fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            background: hsla(0.0, 0.0, 0.06, 1.0),
            foreground: hsla(0.0, 0.0, 0.98, 1.0),
            muted_foreground: hsla(240.0 / 360.0, 0.05, 0.65, 1.0),
            border: hsla(240.0 / 360.0, 0.04, 0.16, 1.0),
            secondary: hsla(240.0 / 360.0, 0.04, 0.10, 1.0),
            sidebar: hsla(240.0 / 360.0, 0.06, 0.08, 1.0),
            accent: hsla(240.0 / 360.0, 0.04, 0.16, 1.0),
            primary: hsla(0.0, 0.0, 0.98, 1.0),
            primary_foreground: hsla(240.0 / 360.0, 0.06, 0.10, 1.0),
            radius: px(4.0),
        }
    }

    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn global(cx: &App) -> &Theme {
        cx.global::<Theme>()
    }

    /// Switch the active theme and repaint every window.
    pub fn change(mode: ThemeMode, cx: &mut App) {
        *cx.global_mut::<Theme>() = Self::from_mode(mode);
        cx.refresh_windows();
    }
}

/// Convenient `cx.theme()` accessor, mirroring how views read colors.
pub trait ActiveTheme {
    fn theme(&self) -> &Theme;
}

impl ActiveTheme for App {
    fn theme(&self) -> &Theme {
        Theme::global(self)
    }
}

pub(crate) fn init(cx: &mut App) {
    cx.set_global(Theme::from_mode(ThemeMode::default()));
}
