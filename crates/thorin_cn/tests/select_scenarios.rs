//! End-to-end interaction scenarios for the select component

use std::sync::{Arc, Mutex};

use thorin_cn::prelude::*;
use thorin_platform::{DocumentClick, DocumentListeners, Key, KeyboardEvent};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("thorin_cn=trace,thorin_platform=trace"));
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(filter)
        .try_init();
}

#[derive(Default)]
struct Recorder {
    changes: Mutex<Vec<ChangeEvent>>,
    created: Mutex<Vec<String>>,
}

fn recorded(
    definition: &str,
    listeners: &DocumentListeners,
) -> (SelectController, Arc<Recorder>) {
    let recorder = Arc::new(Recorder::default());
    let on_change = recorder.clone();
    let on_create = recorder.clone();
    let definition = SelectDefinition::from_toml(definition).unwrap();
    let controller = SelectController::from_definition(definition, listeners)
        .unwrap()
        .on_change(move |event| on_change.changes.lock().unwrap().push(event.clone()))
        .on_create(move |query| on_create.created.lock().unwrap().push(query.to_string()));
    (controller, recorder)
}

const FRUITS: &str = r#"
name = "fruit"
createable = true

[[options]]
value = "a"
label = "Apple"

[[options]]
value = "b"
label = "Banana"
"#;

fn press(select: &mut SelectController, key: Key) -> KeyOutcome {
    select.key_down(&KeyboardEvent::pressed(key))
}

fn type_query(select: &mut SelectController, text: &str) {
    assert!(select.set_query(text));
}

#[test]
fn test_createable_enter_on_create_row() {
    init_tracing();
    let listeners = DocumentListeners::new();
    let (mut select, recorder) = recorded(FRUITS, &listeners);

    assert_eq!(press(&mut select, Key::Char('C')), KeyOutcome::Opened);
    type_query(&mut select, "Cherry");

    let view = select.view();
    let labels: Vec<_> = view.rows.iter().map(|row| row.label().to_string()).collect();
    assert_eq!(labels, vec!["Add \"Cherry\"".to_string()]);
    assert!(view.rows[0].row.is_create());

    press(&mut select, Key::Down);
    assert_eq!(select.state().highlighted, Some(0));
    press(&mut select, Key::Enter);

    assert_eq!(*recorder.created.lock().unwrap(), vec!["Cherry".to_string()]);
    assert!(recorder.changes.lock().unwrap().is_empty());
    assert_eq!(select.selected_value(), "");
    assert_eq!(select.phase(), SelectPhase::Closed);
}

#[test]
fn test_exact_match_suppresses_create_row() {
    let listeners = DocumentListeners::new();
    let (mut select, _recorder) = recorded(FRUITS, &listeners);
    select.toggle();
    type_query(&mut select, "BANANA");

    let list = select.visible_options();
    assert_eq!(list.len(), 1);
    assert!(!list.has_create_row());
    assert_eq!(list.get(0).and_then(|row| row.value()), Some("b"));
}

#[test]
fn test_select_commits_change_with_name() {
    let listeners = DocumentListeners::new();
    let (mut select, recorder) = recorded(FRUITS, &listeners);
    select.toggle();
    type_query(&mut select, "an");
    assert_eq!(select.visible_options().len(), 2);

    assert!(select.click_row(0));
    assert_eq!(select.selected_value(), "b");
    assert_eq!(
        *recorder.changes.lock().unwrap(),
        vec![ChangeEvent {
            value: "b".to_string(),
            name: Some("fruit".to_string()),
        }]
    );
}

#[test]
fn test_close_resets_filter_for_next_open() {
    let listeners = DocumentListeners::new();
    let (mut select, _recorder) = recorded(FRUITS, &listeners);

    // Close by outside click
    select.toggle();
    type_query(&mut select, "app");
    press(&mut select, Key::Down);
    for owner in listeners.dispatch_click(&DocumentClick::background()) {
        assert_eq!(&owner, select.id());
        select.outside_click();
    }
    assert_eq!(select.phase(), SelectPhase::Closed);
    select.toggle();
    assert_eq!(select.state().query, "");
    assert_eq!(select.state().display_text, "");
    assert_eq!(select.state().highlighted, None);
    assert_eq!(select.visible_options().len(), 2);

    // Close by Escape
    type_query(&mut select, "ban");
    press(&mut select, Key::Escape);
    select.toggle();
    assert_eq!(select.visible_options().len(), 2);

    // Close by selection
    type_query(&mut select, "ban");
    select.click_row(0);
    select.toggle();
    assert_eq!(select.visible_options().len(), 2);
}

#[test]
fn test_click_inside_does_not_dismiss() {
    let listeners = DocumentListeners::new();
    let (mut select, _recorder) = recorded(FRUITS, &listeners);
    select.toggle();

    let fired = listeners.dispatch_click(&DocumentClick::on(select.id().clone()));
    assert!(fired.is_empty());
    assert!(select.is_open());
}

#[test]
fn test_two_selects_share_document() {
    let listeners = DocumentListeners::new();
    let (mut first, _r1) = recorded(FRUITS, &listeners);
    let (mut second, _r2) = recorded(FRUITS, &listeners);
    first.toggle();
    second.toggle();
    assert_eq!(listeners.len(), 2);

    // Clicking the second select dismisses only the first
    let fired = listeners.dispatch_click(&DocumentClick::on(second.id().clone()));
    assert_eq!(fired.as_slice(), &[first.id().clone()]);
    first.outside_click();
    assert!(!first.is_open());
    assert!(second.is_open());
    assert_eq!(listeners.len(), 1);
}

#[test]
fn test_external_value_sync_is_silent() {
    let listeners = DocumentListeners::new();
    let (mut select, recorder) = recorded(FRUITS, &listeners);

    select.sync_value(Some("a"));
    assert_eq!(select.selected_value(), "a");
    select.sync_value(Some("b"));
    assert_eq!(select.selected_value(), "b");
    assert_eq!(select.view().selected.map(|o| o.display_label()), Some("Banana"));
    assert!(recorder.changes.lock().unwrap().is_empty());
}

#[test]
fn test_definition_value_selects_on_mount() {
    init_tracing();
    let listeners = DocumentListeners::new();
    let definition = format!("value = \"b\"\n{}", FRUITS);
    let (mut select, recorder) = recorded(&definition, &listeners);

    assert_eq!(select.selected_value(), "b");
    assert_eq!(select.selected_option().map(|o| o.display_label()), Some("Banana"));
    assert!(recorder.changes.lock().unwrap().is_empty());

    // Host re-renders with the same value: not a change, user choice stands
    select.toggle();
    select.click_row(0);
    select.sync_value(Some("b"));
    assert_eq!(select.selected_value(), "a");
}

#[test]
fn test_navigation_cycle_over_enabled_options() {
    let listeners = DocumentListeners::new();
    let definition = SelectDefinition::from_json(
        r#"{
            "options": [
                {"value": "1", "disabled": true},
                {"value": "2"},
                {"value": "3", "disabled": true},
                {"value": "4"},
                {"value": "5"}
            ]
        }"#,
    )
    .unwrap();
    let mut select = SelectController::from_definition(definition, &listeners).unwrap();
    select.toggle();
    assert_eq!(select.phase(), SelectPhase::Browsing);

    let enabled = select.options().iter().filter(|o| !o.disabled).count();
    press(&mut select, Key::Down);
    assert_eq!(select.state().highlighted, Some(1));

    let mut visited = vec![select.state().highlighted];
    for _ in 0..enabled {
        press(&mut select, Key::Down);
        visited.push(select.state().highlighted);
    }
    assert_eq!(visited, vec![Some(1), Some(3), Some(4), None]);
}

#[test]
fn test_view_accessibility_attributes() {
    let listeners = DocumentListeners::new();
    let definition = SelectDefinition::from_toml(
        r#"
        id = "country"
        error = "Pick a country"

        [[options]]
        value = "nz"
        label = "New Zealand"
        "#,
    )
    .unwrap();
    let mut select = SelectController::from_definition(definition, &listeners).unwrap();
    select.toggle();
    select.hover_row(0);

    let view = select.view();
    let attrs = view.combobox.attributes();
    assert!(attrs.contains(&("id", "combo-country".to_string())));
    assert!(attrs.contains(&("aria-controls", "listbox-country".to_string())));
    assert!(attrs.contains(&("aria-expanded", "true".to_string())));
    assert!(attrs.contains(&("aria-invalid", "true".to_string())));
    assert_eq!(view.listbox.id, "listbox-country");
    assert!(view.rows[0]
        .aria
        .attributes()
        .contains(&("role", "option".to_string())));
}
