use super::*;
use crate::state::theme::{EffectiveTheme, ThemePreference};

#[test]
fn toggle_markup_carries_icon_and_screen_reader_label() {
    let view = ThemeView::new(ThemePreference::System, EffectiveTheme::Dark);
    let markup = toggle_markup(&view);
    assert!(markup.starts_with(AUTO_ICON));
    assert!(markup.ends_with(r#"<span class="sr-only">Automatic (dark)</span>"#));
}

#[test]
fn explicit_themes_use_moon_and_sun() {
    assert_eq!(icon_markup(ToggleIcon::Moon), MOON_ICON);
    assert_eq!(icon_markup(ToggleIcon::Sun), SUN_ICON);
    let view = ThemeView::new(ThemePreference::Light, EffectiveTheme::Light);
    assert!(toggle_markup(&view).starts_with(SUN_ICON));
}

#[test]
fn active_option_classes_cover_both_schemes() {
    assert!(ACTIVE_OPTION_CLASSES.contains(&"bg-slate-100"));
    assert!(ACTIVE_OPTION_CLASSES.contains(&"dark:bg-slate-800"));
}

#[test]
fn sun_icon_draws_all_eight_rays() {
    for segment in ["zm8.36-4.11", "zm-6.78 6.78", "zm7.48 1.76", "zM7.14 6.3"] {
        assert!(SUN_ICON.contains(segment), "missing ray {segment}");
    }
}
