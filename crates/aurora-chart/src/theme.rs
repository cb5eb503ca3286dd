// File: crates/aurora-chart/src/theme.rs
// Summary: Light/Dark theme presets, custom-property lookup, and persisted mode.

use crate::store::PrefStore;

/// Preference key under which the active mode is persisted.
pub const THEME_KEY: &str = "auroraflow-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// A saved value is honored only if it is exactly `light` or `dark`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// A named set of custom properties the renderer reads fresh every pass.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub mode: ThemeMode,
    pub bg_primary: &'static str,
    pub bg_tertiary: &'static str,
    pub text_tertiary: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            mode: ThemeMode::Dark,
            bg_primary: "#0B0E14",
            bg_tertiary: "#1F2430",
            text_tertiary: "#8A93A6",
            primary: "#6366F1",
            secondary: "#22D3EE",
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            mode: ThemeMode::Light,
            bg_primary: "#FFFFFF",
            bg_tertiary: "#E8EBF2",
            text_tertiary: "#667085",
            primary: "#4F46E5",
            secondary: "#0891B2",
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Look up a named custom property on this theme context.
    pub fn property(&self, name: &str) -> Option<&'static str> {
        match name {
            "--bg-primary" => Some(self.bg_primary),
            "--bg-tertiary" => Some(self.bg_tertiary),
            "--text-tertiary" => Some(self.text_tertiary),
            "--primary" => Some(self.primary),
            "--secondary" => Some(self.secondary),
            _ => None,
        }
    }
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}

/// Resolves the active mode from the injected store on construction and
/// persists every change back through it.
pub struct ThemeManager {
    store: Box<dyn PrefStore>,
    mode: ThemeMode,
}

impl ThemeManager {
    /// A saved preference wins if valid; otherwise the system preference
    /// decides.
    pub fn new(store: Box<dyn PrefStore>, system_prefers_dark: bool) -> Self {
        let saved = store.get(THEME_KEY);
        let mode = saved
            .as_deref()
            .and_then(ThemeMode::parse)
            .unwrap_or(if system_prefers_dark { ThemeMode::Dark } else { ThemeMode::Light });
        Self { store, mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn theme(&self) -> Theme {
        Theme::for_mode(self.mode)
    }

    pub fn toggle(&mut self) -> ThemeMode {
        let next = self.mode.toggled();
        self.set_mode(next);
        next
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.store.set(THEME_KEY, mode.as_str());
    }

    pub fn store(&self) -> &dyn PrefStore {
        self.store.as_ref()
    }
}
