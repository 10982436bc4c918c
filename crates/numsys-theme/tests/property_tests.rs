use std::cell::RefCell;
use std::rc::Rc;

use numsys_theme::{
    FixedColorScheme, ManualColorScheme, MemoryStore, Theme, ThemeController, ThemeStore,
    watch_color_scheme,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Event {
    Toggle,
    OsChange(bool),
}

fn event() -> impl Strategy<Value = Event> {
    prop_oneof![
        Just(Event::Toggle),
        any::<bool>().prop_map(Event::OsChange),
    ]
}

proptest! {
    #[test]
    fn persisted_value_always_matches_last_toggle(
        stored in proptest::option::of(any::<bool>()),
        os_dark in any::<bool>(),
        events in proptest::collection::vec(event(), 0..30),
    ) {
        let store = match stored {
            Some(dark) => MemoryStore::with_theme(Theme::from_prefers_dark(dark)),
            None => MemoryStore::new(),
        };
        let applied = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&applied);
        let mut controller = ThemeController::init(
            store,
            move |theme: Theme| sink.borrow_mut().push(theme),
            &FixedColorScheme::new(os_dark),
        );

        let mut last_toggle = None;
        for event in events {
            match event {
                Event::Toggle => last_toggle = Some(controller.toggle()),
                Event::OsChange(dark) => {
                    let adopted = controller.os_preference_changed(dark);
                    prop_assert_eq!(adopted, stored.is_none() && last_toggle.is_none());
                }
            }

            // The root always shows the current theme.
            prop_assert_eq!(applied.borrow().last().copied(), Some(controller.current()));
        }

        let expected = last_toggle.or(stored.map(Theme::from_prefers_dark));
        prop_assert_eq!(controller.store().load().unwrap(), expected);
    }

    #[test]
    fn os_changes_are_followed_without_preference(changes in proptest::collection::vec(any::<bool>(), 1..20)) {
        let os = ManualColorScheme::new(false);
        let controller = Rc::new(RefCell::new(ThemeController::init(
            MemoryStore::new(),
            |_: Theme| {},
            &os,
        )));
        let _subscription = watch_color_scheme(&controller, &os);

        for dark in &changes {
            os.set_prefers_dark(*dark);
            prop_assert_eq!(controller.borrow().current(), Theme::from_prefers_dark(*dark));
        }
        prop_assert!(!controller.borrow().has_explicit_preference());
    }
}

#[test]
fn reload_rederives_identically() {
    let mut store = MemoryStore::new();
    let first = ThemeController::init(store.clone(), |_: Theme| {}, &FixedColorScheme::new(true));
    let second = ThemeController::init(store.clone(), |_: Theme| {}, &FixedColorScheme::new(true));
    assert_eq!(first.current(), second.current());

    store.save(Theme::Light).unwrap();
    let reloaded = ThemeController::init(store, |_: Theme| {}, &FixedColorScheme::new(true));
    assert_eq!(reloaded.current(), Theme::Light);
}
