use super::*;
use crate::state::theme::ToggleIcon;
use crate::util::theme_store::{LEGACY_STORAGE_KEY, MemoryStore, STORAGE_KEY};

#[derive(Default)]
struct RecordingSurface {
    renders: Vec<ThemeView>,
    menu_calls: Vec<bool>,
    menu_shown: bool,
}

impl RecordingSurface {
    fn last(&self) -> &ThemeView {
        self.renders.last().expect("at least one render")
    }

    fn dark(&self) -> bool {
        self.last().dark()
    }
}

impl ThemeSurface for RecordingSurface {
    fn render(&mut self, view: &ThemeView) {
        self.renders.push(view.clone());
    }

    fn set_menu_open(&mut self, open: bool) {
        self.menu_calls.push(open);
        self.menu_shown = open;
    }

    fn menu_open(&self) -> bool {
        self.menu_shown
    }
}

fn controller(store: MemoryStore, system_dark: bool) -> ThemeController<MemoryStore, RecordingSurface> {
    ThemeController::new(store, RecordingSurface::default(), StorageKeys::default(), system_dark)
}

fn controller_with_menu_shown() -> ThemeController<MemoryStore, RecordingSurface> {
    let surface = RecordingSurface { menu_shown: true, ..RecordingSurface::default() };
    ThemeController::new(MemoryStore::default(), surface, StorageKeys::default(), false)
}

// =============================================================
// Preference storage
// =============================================================

#[test]
fn set_then_get_round_trips() {
    let mut ctl = controller(MemoryStore::default(), false);
    for pref in ThemePreference::ALL {
        ctl.set_preference(pref);
        assert_eq!(ctl.get_preference(), pref);
    }
}

#[test]
fn set_preference_does_not_render() {
    let mut ctl = controller(MemoryStore::default(), false);
    ctl.set_preference(ThemePreference::Dark);
    assert!(ctl.surface().renders.is_empty());
    assert_eq!(ctl.state().preference, ThemePreference::Dark);
}

#[test]
fn set_preference_value_rejects_unknown_values() {
    let mut ctl = controller(MemoryStore::default(), false);
    assert!(ctl.set_preference_value("sepia").is_err());
    assert_eq!(ctl.store().get_item(STORAGE_KEY).unwrap(), None);
    assert!(ctl.set_preference_value("auto").is_ok());
    assert_eq!(ctl.store().get_item(STORAGE_KEY).unwrap().as_deref(), Some("system"));
}

#[test]
fn write_failure_still_applies_in_memory() {
    let mut ctl = controller(MemoryStore::unavailable(), false);
    ctl.select_preference(ThemePreference::Dark);
    assert!(ctl.surface().dark());
    assert_eq!(ctl.state().preference, ThemePreference::Dark);
    assert_eq!(ctl.get_preference(), ThemePreference::System);
}

#[test]
fn init_reads_legacy_key() {
    let mut ctl = controller(MemoryStore::with_items([(LEGACY_STORAGE_KEY, "light")]), true);
    ctl.init();
    assert_eq!(ctl.state().preference, ThemePreference::Light);
    assert!(!ctl.surface().dark());
    assert_eq!(ctl.surface().renders.len(), 1);
}

#[test]
fn init_defaults_to_system() {
    let mut ctl = controller(MemoryStore::default(), true);
    ctl.init();
    let view = ctl.surface().last();
    assert_eq!(view.preference, ThemePreference::System);
    assert_eq!(view.icon, ToggleIcon::Auto);
    assert_eq!(view.label, "Automatic (dark)");
}

// =============================================================
// Effective theme and OS signal
// =============================================================

#[test]
fn compute_effective_follows_os_only_for_system() {
    let dark_os = controller(MemoryStore::default(), true);
    assert_eq!(dark_os.compute_effective(ThemePreference::System), EffectiveTheme::Dark);
    assert_eq!(dark_os.compute_effective(ThemePreference::Light), EffectiveTheme::Light);

    let light_os = controller(MemoryStore::default(), false);
    assert_eq!(light_os.compute_effective(ThemePreference::System), EffectiveTheme::Light);
    assert_eq!(light_os.compute_effective(ThemePreference::Dark), EffectiveTheme::Dark);
}

#[test]
fn system_preference_tracks_os_changes() {
    let mut ctl = controller(MemoryStore::default(), true);
    ctl.apply(ThemePreference::System);
    assert!(ctl.surface().dark());

    ctl.handle_system_change(false);
    assert!(!ctl.surface().dark());
    assert_eq!(ctl.surface().last().label, "Automatic (light)");
}

#[test]
fn explicit_preference_is_sticky_across_os_changes() {
    let mut ctl = controller(MemoryStore::default(), false);
    ctl.set_preference(ThemePreference::Dark);
    ctl.apply(ThemePreference::Dark);
    let renders = ctl.surface().renders.len();

    ctl.handle_system_change(true);
    ctl.handle_system_change(false);
    assert_eq!(ctl.surface().renders.len(), renders);
    assert!(ctl.surface().dark());
}

#[test]
fn os_signal_is_remembered_for_later_system_selection() {
    let mut ctl = controller(MemoryStore::default(), false);
    ctl.select_preference(ThemePreference::Light);
    ctl.handle_system_change(true);
    ctl.select_preference(ThemePreference::System);
    assert!(ctl.surface().dark());
}

// =============================================================
// Cycling
// =============================================================

#[test]
fn cycle_advances_and_wraps() {
    let mut ctl = controller(MemoryStore::default(), false);
    ctl.init();
    assert_eq!(ctl.cycle_preference(), ThemePreference::Light);
    assert_eq!(ctl.cycle_preference(), ThemePreference::Dark);
    assert_eq!(ctl.cycle_preference(), ThemePreference::System);
    assert_eq!(ctl.get_preference(), ThemePreference::System);
}

#[test]
fn cycle_persists_and_renders_each_step() {
    let mut ctl = controller(MemoryStore::default(), false);
    ctl.init();
    ctl.cycle_preference();
    assert_eq!(ctl.store().get_item(STORAGE_KEY).unwrap().as_deref(), Some("light"));
    ctl.cycle_preference();
    assert!(ctl.surface().dark());
    assert_eq!(ctl.surface().renders.len(), 3);
}

#[test]
fn cycle_mode_toggle_click_cycles_instead_of_opening_menu() {
    let mut ctl = controller(MemoryStore::default(), false).with_selection(SelectionMode::Cycle);
    ctl.init();
    ctl.activate_toggle();
    assert_eq!(ctl.state().preference, ThemePreference::Light);
    assert!(!ctl.state().menu_open);
    assert!(ctl.surface().menu_calls.is_empty());
}

// =============================================================
// Menu interaction
// =============================================================

#[test]
fn toggle_click_opens_and_closes_menu() {
    let mut ctl = controller(MemoryStore::default(), false);
    ctl.activate_toggle();
    assert!(ctl.state().menu_open);
    ctl.activate_toggle();
    assert!(!ctl.state().menu_open);
    assert_eq!(ctl.surface().menu_calls, vec![true, false]);
}

#[test]
fn selecting_an_option_persists_applies_and_closes() {
    let mut ctl = controller(MemoryStore::default(), false);
    ctl.init();
    ctl.toggle_menu();
    ctl.select_preference_value("dark").unwrap();
    assert!(!ctl.state().menu_open);
    assert!(ctl.surface().dark());
    assert_eq!(ctl.surface().last().preference, ThemePreference::Dark);
    assert_eq!(ctl.get_preference(), ThemePreference::Dark);
}

#[test]
fn unknown_option_value_leaves_menu_open() {
    let mut ctl = controller(MemoryStore::default(), false);
    ctl.init();
    ctl.toggle_menu();
    assert!(ctl.select_preference_value("high-contrast").is_err());
    assert!(ctl.state().menu_open);
    assert_eq!(ctl.surface().renders.len(), 1);
}

#[test]
fn outside_pointer_closes_menu() {
    let mut ctl = controller(MemoryStore::default(), false);
    ctl.toggle_menu();
    ctl.handle_pointer(true);
    assert!(ctl.state().menu_open);
    ctl.handle_pointer(false);
    assert!(!ctl.state().menu_open);
}

#[test]
fn escape_closes_menu_and_other_keys_do_not() {
    let mut ctl = controller(MemoryStore::default(), false);
    ctl.toggle_menu();
    ctl.handle_key("Enter");
    assert!(ctl.state().menu_open);
    ctl.handle_key("Escape");
    assert!(!ctl.state().menu_open);
}

#[test]
fn closing_a_closed_menu_is_a_noop() {
    let mut ctl = controller(MemoryStore::default(), false);
    ctl.close_menu();
    ctl.handle_key("Escape");
    ctl.handle_pointer(false);
    assert!(ctl.surface().menu_calls.is_empty());
}

// =============================================================
// Menu shown by the page at load
// =============================================================

#[test]
fn init_adopts_menu_already_shown_by_page() {
    let mut ctl = controller_with_menu_shown();
    ctl.init();
    assert!(ctl.state().menu_open);
    assert!(ctl.surface().menu_calls.is_empty());
}

#[test]
fn escape_hides_menu_rendered_open() {
    let mut ctl = controller_with_menu_shown();
    ctl.init();
    ctl.handle_key("Escape");
    assert_eq!(ctl.surface().menu_calls, vec![false]);
    assert!(!ctl.surface().menu_open());
}

#[test]
fn outside_pointer_hides_menu_rendered_open() {
    let mut ctl = controller_with_menu_shown();
    ctl.init();
    ctl.handle_pointer(false);
    assert_eq!(ctl.surface().menu_calls, vec![false]);
}

#[test]
fn first_toggle_click_closes_menu_rendered_open() {
    let mut ctl = controller_with_menu_shown();
    ctl.init();
    ctl.activate_toggle();
    assert!(!ctl.state().menu_open);
    assert_eq!(ctl.surface().menu_calls, vec![false]);
}
