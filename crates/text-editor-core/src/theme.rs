use std::collections::HashMap;
use std::fmt;

/// Plain sRGB color, kept independent of any GUI toolkit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn hex(value: u32) -> Self {
        Self((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

pub const MENU_ACTIVE_BG: Rgb = Rgb::hex(0x555555);
pub const MENU_ACTIVE_FG: Rgb = Rgb::hex(0xFFFFFF);
pub const STATUS_FG: Rgb = Rgb::hex(0xD4D4D4);
pub const FIND_HIGHLIGHT_BG: Rgb = Rgb::hex(0xFFFF00);

pub const TEXT_FONT_SIZE: f32 = 12.0;
pub const STATUS_FONT_SIZE: f32 = 10.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }
}

/// The five colors a theme mode maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub bg: Rgb,
    pub text_bg: Rgb,
    pub text_fg: Rgb,
    pub menu_bg: Rgb,
    pub highlight: Rgb,
}

static LIGHT: Palette = Palette {
    bg: Rgb::hex(0xFFFFFF),
    text_bg: Rgb::hex(0x87CEEB),
    text_fg: Rgb::hex(0x000000),
    menu_bg: Rgb::hex(0xEEEEEE),
    highlight: Rgb::hex(0x000000),
};

static DARK: Palette = Palette {
    bg: Rgb::hex(0x000000),
    text_bg: Rgb::hex(0x000000),
    text_fg: Rgb::hex(0x00FF00),
    menu_bg: Rgb::hex(0x333333),
    highlight: Rgb::hex(0xFFFFFF),
};

/// Every widget of the window whose colors follow the theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidgetId {
    MenuBar,
    TextArea,
    StatusBar,
    Label,
}

/// Colors and font size applied to a single widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidgetStyle {
    pub background: Rgb,
    pub foreground: Rgb,
    pub selection_bg: Rgb,
    pub selection_fg: Rgb,
    pub cursor: Rgb,
    pub active_bg: Rgb,
    pub active_fg: Rgb,
    pub font_size: f32,
}

impl WidgetStyle {
    fn plain(background: Rgb, foreground: Rgb) -> Self {
        Self {
            background,
            foreground,
            selection_bg: foreground,
            selection_fg: background,
            cursor: foreground,
            active_bg: background,
            active_fg: foreground,
            font_size: TEXT_FONT_SIZE,
        }
    }
}

pub type StyleSetter = fn(&Palette) -> WidgetStyle;

fn menu_bar_style(palette: &Palette) -> WidgetStyle {
    WidgetStyle {
        active_bg: MENU_ACTIVE_BG,
        active_fg: MENU_ACTIVE_FG,
        ..WidgetStyle::plain(palette.menu_bg, palette.text_fg)
    }
}

fn text_area_style(palette: &Palette) -> WidgetStyle {
    WidgetStyle {
        selection_bg: palette.highlight,
        selection_fg: palette.text_bg,
        cursor: palette.text_fg,
        ..WidgetStyle::plain(palette.text_bg, palette.text_fg)
    }
}

fn status_bar_style(palette: &Palette) -> WidgetStyle {
    WidgetStyle {
        font_size: STATUS_FONT_SIZE,
        ..WidgetStyle::plain(palette.menu_bg, STATUS_FG)
    }
}

fn label_style(palette: &Palette) -> WidgetStyle {
    WidgetStyle::plain(palette.bg, palette.text_fg)
}

/// Fixed mapping of widget to style setter, built once at start-up.
#[derive(Clone, Debug)]
pub struct ThemeRegistry {
    bindings: Vec<(WidgetId, StyleSetter)>,
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self {
            bindings: vec![
                (WidgetId::MenuBar, menu_bar_style as StyleSetter),
                (WidgetId::TextArea, text_area_style as StyleSetter),
                (WidgetId::StatusBar, status_bar_style as StyleSetter),
                (WidgetId::Label, label_style as StyleSetter),
            ],
        }
    }

    /// Runs every setter against `palette`.
    pub fn render(&self, palette: &Palette) -> StyleSheet {
        StyleSheet {
            styles: self
                .bindings
                .iter()
                .map(|(widget, setter)| (*widget, setter(palette)))
                .collect(),
        }
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Styles of all registered widgets for the active mode.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleSheet {
    styles: HashMap<WidgetId, WidgetStyle>,
}

impl StyleSheet {
    pub fn get(&self, widget: WidgetId) -> Option<&WidgetStyle> {
        self.styles.get(&widget)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// Owns the active mode and the style sheet derived from it.
#[derive(Clone, Debug)]
pub struct ThemeManager {
    mode: ThemeMode,
    registry: ThemeRegistry,
    sheet: StyleSheet,
}

impl ThemeManager {
    pub fn new(mode: ThemeMode) -> Self {
        let registry = ThemeRegistry::new();
        let sheet = registry.render(mode.palette());
        Self {
            mode,
            registry,
            sheet,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    fn palette(&self) -> &'static Palette {
        self.mode.palette()
    }

    pub fn sheet(&self) -> &StyleSheet {
        &self.sheet
    }

    /// Style for `widget`. Every [`WidgetId`] is registered, so a miss
    /// falls back to the label style rather than failing.
    pub fn style(&self, widget: WidgetId) -> WidgetStyle {
        self.sheet
            .get(widget)
            .copied()
            .unwrap_or_else(|| label_style(self.palette()))
    }

    pub fn apply(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.sheet = self.registry.render(mode.palette());
        tracing::info!(theme = mode.name(), "applied theme");
    }

    pub fn toggle(&mut self) {
        self.apply(self.mode.toggled());
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_dark() {
        let manager = ThemeManager::default();
        assert_eq!(manager.mode(), ThemeMode::Dark);
        assert_eq!(manager.style(WidgetId::TextArea).foreground, Rgb::hex(0x00FF00));
    }

    #[test]
    fn toggling_twice_restores_every_color() {
        let mut manager = ThemeManager::default();
        let original = manager.sheet().clone();

        manager.toggle();
        assert_eq!(manager.mode(), ThemeMode::Light);
        assert_ne!(manager.sheet(), &original);

        manager.toggle();
        assert_eq!(manager.mode(), ThemeMode::Dark);
        assert_eq!(manager.sheet(), &original);
    }

    #[test]
    fn every_registered_widget_is_styled() {
        let registry = ThemeRegistry::new();
        let sheet = registry.render(ThemeMode::Light.palette());
        assert_eq!(sheet.len(), 4);
        for widget in [
            WidgetId::MenuBar,
            WidgetId::TextArea,
            WidgetId::StatusBar,
            WidgetId::Label,
        ] {
            assert!(sheet.get(widget).is_some(), "{widget:?} has no style");
        }
    }

    #[test]
    fn text_area_uses_highlight_for_selection() {
        let manager = ThemeManager::new(ThemeMode::Light);
        let style = manager.style(WidgetId::TextArea);
        assert_eq!(style.background, Rgb::hex(0x87CEEB));
        assert_eq!(style.selection_bg, Rgb::hex(0x000000));
        assert_eq!(style.selection_fg, Rgb::hex(0x87CEEB));
        assert_eq!(style.cursor, Rgb::hex(0x000000));
    }

    #[test]
    fn status_bar_keeps_fixed_foreground_and_small_font() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let style = ThemeManager::new(mode).style(WidgetId::StatusBar);
            assert_eq!(style.foreground, STATUS_FG);
            assert_eq!(style.background, mode.palette().menu_bg);
            assert_eq!(style.font_size, STATUS_FONT_SIZE);
        }
    }

    #[test]
    fn formats_colors_as_hex() {
        assert_eq!(Rgb::hex(0x87CEEB).to_string(), "#87CEEB");
    }
}
