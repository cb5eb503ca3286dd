// File: crates/aurora-chart/tests/theme_store.rs
// Purpose: Theme preference resolution, persistence, and palette fallback.

use aurora_chart::theme::{self, Theme};
use aurora_chart::{
    Color, MemoryStore, NoopStore, Palette, PrefStore, ThemeManager, ThemeMode, THEME_KEY,
};

#[test]
fn saved_mode_wins_over_system_preference() {
    let mut store = MemoryStore::new();
    store.set(THEME_KEY, "light");
    let mgr = ThemeManager::new(Box::new(store), true);
    assert_eq!(mgr.mode(), ThemeMode::Light);
}

#[test]
fn garbage_saved_value_falls_back_to_system() {
    let mut store = MemoryStore::new();
    store.set(THEME_KEY, "blue");
    let mgr = ThemeManager::new(Box::new(store), true);
    assert_eq!(mgr.mode(), ThemeMode::Dark);

    let mut store = MemoryStore::new();
    store.set(THEME_KEY, "Dark"); // only exact "light"/"dark" are honored
    let mgr = ThemeManager::new(Box::new(store), false);
    assert_eq!(mgr.mode(), ThemeMode::Light);
}

#[test]
fn toggle_persists_the_new_mode() {
    let mut mgr = ThemeManager::new(Box::new(MemoryStore::new()), true);
    assert_eq!(mgr.mode(), ThemeMode::Dark);

    assert_eq!(mgr.toggle(), ThemeMode::Light);
    assert_eq!(mgr.store().get(THEME_KEY).as_deref(), Some("light"));

    assert_eq!(mgr.toggle(), ThemeMode::Dark);
    assert_eq!(mgr.store().get(THEME_KEY).as_deref(), Some("dark"));
}

#[test]
fn noop_store_remembers_nothing() {
    let mut mgr = ThemeManager::new(Box::new(NoopStore), true);
    mgr.toggle();
    assert_eq!(mgr.store().get(THEME_KEY), None);
}

#[test]
fn find_is_case_insensitive_with_dark_fallback() {
    assert_eq!(theme::find("LIGHT").name, "light");
    assert_eq!(theme::find("no-such-theme").name, "dark");
}

#[test]
fn palette_resolves_theme_properties() {
    let t = Theme::dark();
    let palette = Palette::resolve(&t);
    assert_eq!(palette.primary, Color::from_hex(t.primary).unwrap());
    assert_eq!(palette.background, Color::from_hex(t.bg_tertiary).unwrap());
    assert_eq!(palette.background_primary, Color::from_hex(t.bg_primary).unwrap());
}

#[test]
fn palette_substitutes_role_defaults_for_bad_hex() {
    let broken = Theme { primary: "#nothex", secondary: "oops", ..Theme::light() };
    let palette = Palette::resolve(&broken);
    let defaults = Palette::resolve(&Theme::dark());
    // Role defaults match the dark preset.
    assert_eq!(palette.primary, defaults.primary);
    assert_eq!(palette.secondary, defaults.secondary);
    // Untouched roles still come from the given theme.
    assert_eq!(palette.text, Color::from_hex(Theme::light().text_tertiary).unwrap());
}
