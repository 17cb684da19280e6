use gpui::{Bounds, Pixels, SharedString, point, px, size};

use super::option::SelectOption;
use super::placement::PlacementDirection;
use super::select_state::{SelectConfig, SelectState};
use crate::error::SelectError;
use crate::id::ComponentId;

fn fruits() -> Vec<SelectOption> {
    ["Apple", "Banana", "Cherry"]
        .into_iter()
        .map(SelectOption::new)
        .collect()
}

fn state(config: SelectConfig) -> SelectState {
    SelectState::new(ComponentId::from("fruit"), fruits(), config)
}

fn bounds(x: f32, y: f32, width: f32, height: f32) -> Bounds<Pixels> {
    Bounds::new(point(px(x), px(y)), size(px(width), px(height)))
}

fn selection(state: &SelectState) -> Vec<&str> {
    state.selection().iter().map(|value| value.as_ref()).collect()
}

#[test]
fn multiple_mode_reports_joined_value_in_click_order() {
    let mut state = state(SelectConfig::new().multiple(true));
    state.set_opened(true);

    let first = state.select_value("Apple").expect("known label");
    assert_eq!(first.value_changed, Some(SharedString::from("Apple")));
    assert_eq!(first.open_changed, None);

    let second = state.select_value("Banana").expect("known label");
    assert_eq!(second.value_changed, Some(SharedString::from("Apple, Banana")));
    assert!(state.opened());
}

#[test]
fn multiple_mode_toggle_twice_restores_selection() {
    let mut state = state(SelectConfig::new().multiple(true).default_value(["Cherry"]));
    let before = selection(&state).join("|");

    state.select_value("Apple").expect("known label");
    state.select_value("Apple").expect("known label");

    assert_eq!(selection(&state).join("|"), before);
    assert_eq!(state.joined_value(), SharedString::from("Cherry"));
}

#[test]
fn single_mode_commit_replaces_selection_and_closes() {
    for (prior, opened) in [(vec![], false), (vec!["Banana"], true), (vec!["Apple"], true)] {
        let mut state = state(SelectConfig::new().default_value(prior));
        state.set_opened(opened);

        let effects = state.select_value("Apple").expect("known label");

        assert_eq!(selection(&state), vec!["Apple"]);
        assert!(!state.opened());
        assert_eq!(effects.value_changed, Some(SharedString::from("Apple")));
        assert_eq!(effects.open_changed, opened.then_some(false));
    }
}

#[test]
fn single_mode_keeps_only_the_first_default_value() {
    let state = state(SelectConfig::new().default_value(["Banana", "Apple", "Banana"]));
    assert_eq!(selection(&state), vec!["Banana"]);

    let multiple = SelectState::new(
        ComponentId::from("fruit"),
        fruits(),
        SelectConfig::new()
            .multiple(true)
            .default_value(["Banana", "Apple", "Banana"]),
    );
    assert_eq!(selection(&multiple), vec!["Banana", "Apple"]);
}

#[test]
fn trigger_toggles_open_and_clears_the_filter() {
    let mut state = state(SelectConfig::new().default_value(["Apple"]).searchable(true));

    let opened = state.toggle_from_trigger();
    assert_eq!(opened.open_changed, Some(true));
    assert!(state.opened());

    state.set_filter("ban");
    assert_eq!(state.filter(), "ban");

    let closed = state.toggle_from_trigger();
    assert_eq!(closed.open_changed, Some(false));
    assert!(!state.opened());
    assert_eq!(state.filter(), "");
    assert_eq!(selection(&state), vec!["Apple"]);
}

#[test]
fn disabled_trigger_is_a_no_op() {
    let mut state = state(SelectConfig::new().disabled(true));
    let effects = state.toggle_from_trigger();
    assert!(effects.is_empty());
    assert!(!state.opened());
}

#[test]
fn search_highlights_matching_prefix() {
    let mut state = state(SelectConfig::new().searchable(true));
    state.set_opened(true);
    state.edit_search(|search| {
        search.insert_text("che");
    });

    let visible = state.visible_options();
    assert_eq!(visible.len(), 1);
    let segments = visible[0].label.segments();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].text.as_ref(), "Che");
    assert!(segments[0].matched);
    assert_eq!(segments[1].text.as_ref(), "rry");
    assert!(!segments[1].matched);
    assert_eq!(visible[0].label.original().as_ref(), "Cherry");
}

#[test]
fn removing_the_only_chip_reports_empty_value_without_toggling() {
    let mut state = state(SelectConfig::new().multiple(true).default_value(["Apple"]));

    let effects = state.remove_selected("Apple");

    assert_eq!(effects.value_changed, Some(SharedString::default()));
    assert_eq!(effects.open_changed, None);
    assert!(!state.opened());
    assert!(state.selection().is_empty());
}

#[test]
fn removing_a_chip_keeps_an_open_panel_open() {
    let mut state = state(
        SelectConfig::new()
            .multiple(true)
            .default_value(["Apple", "Banana"]),
    );
    state.set_opened(true);

    let effects = state.remove_selected("Apple");

    assert_eq!(effects.value_changed, Some(SharedString::from("Banana")));
    assert_eq!(effects.open_changed, None);
    assert!(state.opened());
}

#[test]
fn dismiss_closes_and_clears_the_filter() {
    let mut state = state(SelectConfig::new().searchable(true));
    state.set_opened(true);
    state.set_filter("an");

    let effects = state.dismiss();

    assert_eq!(effects.open_changed, Some(false));
    assert!(!state.opened());
    assert_eq!(state.filter(), "");
}

#[test]
fn outside_hit_test_covers_root_and_panel() {
    let mut state = state(SelectConfig::new());
    state.set_opened(true);
    state.record_root_bounds(bounds(10.0, 10.0, 200.0, 40.0));
    state.record_panel_bounds(bounds(10.0, 54.0, 200.0, 120.0), 800.0);

    assert!(state.contains_point(&point(px(20.0), px(20.0))));
    assert!(state.contains_point(&point(px(20.0), px(100.0))));
    assert!(!state.contains_point(&point(px(400.0), px(20.0))));
    assert!(!state.contains_point(&point(px(20.0), px(300.0))));
}

#[test]
fn closing_forgets_the_panel_bounds() {
    let mut state = state(SelectConfig::new());
    state.set_opened(true);
    state.record_panel_bounds(bounds(10.0, 54.0, 200.0, 120.0), 800.0);
    state.set_opened(false);

    assert_eq!(state.metrics().bounds.panel, None);
    assert_eq!(state.metrics().panel_height, None);
    assert!(!state.record_panel_bounds(bounds(10.0, 54.0, 200.0, 120.0), 800.0));
}

#[test]
fn placement_flips_upward_near_the_bottom_edge() {
    let mut state = state(SelectConfig::new());
    state.set_opened(true);
    state.record_trigger_bounds(bounds(0.0, 700.0, 200.0, 40.0), 800.0);

    let flipped = state.record_panel_bounds(bounds(0.0, 744.0, 200.0, 200.0), 800.0);

    assert!(flipped);
    assert_eq!(state.placement(), PlacementDirection::Upward);
}

#[test]
fn placement_stays_downward_when_neither_side_fits() {
    let mut state = state(SelectConfig::new());
    state.set_opened(true);
    state.record_trigger_bounds(bounds(0.0, 100.0, 200.0, 40.0), 300.0);

    let flipped = state.record_panel_bounds(bounds(0.0, 144.0, 200.0, 250.0), 300.0);

    assert!(!flipped);
    assert_eq!(state.placement(), PlacementDirection::Downward);
}

#[test]
fn unknown_label_is_rejected_without_side_effects() {
    let mut state = state(SelectConfig::new().multiple(true));

    let error = state.select_value("Kiwi").expect_err("unknown label");

    assert_eq!(
        error,
        SelectError::UnknownOption {
            id: "fruit".into(),
            label: "Kiwi".into(),
        }
    );
    assert!(state.selection().is_empty());
}

#[test]
fn redundant_open_requests_emit_nothing() {
    let mut state = state(SelectConfig::new());
    assert!(state.set_opened(false).is_empty());
    state.set_opened(true);
    assert!(state.set_opened(true).is_empty());
}

#[test]
fn label_width_change_is_reported_once() {
    let mut state = state(SelectConfig::new());
    assert!(state.record_label_width(64.0));
    assert!(!state.record_label_width(64.0));
    assert!(state.record_label_width(72.0));
}

#[test]
fn chips_stay_removable_while_disabled() {
    let mut state = state(
        SelectConfig::new()
            .multiple(true)
            .disabled(true)
            .default_value(["Apple"]),
    );

    let effects = state.remove_selected("Apple");

    assert_eq!(effects.value_changed, Some(SharedString::default()));
    assert_eq!(effects.open_changed, None);
    assert!(state.selection().is_empty());
}

#[test]
fn replacing_options_keeps_a_selection_that_is_no_longer_offered() {
    let mut state = state(SelectConfig::new().multiple(true));
    state.select_value("Apple").expect("known label");

    let effects = state.set_options(
        ["Banana", "Cherry"]
            .into_iter()
            .map(SelectOption::new)
            .collect(),
    );

    assert!(effects.redraw);
    assert_eq!(effects.value_changed, None);
    assert!(state.is_selected("Apple"));
    assert_eq!(state.joined_value(), SharedString::from("Apple"));
    assert!(
        state
            .visible_options()
            .iter()
            .all(|option| option.label.original().as_ref() != "Apple")
    );
    assert!(matches!(
        state.select_value("Apple"),
        Err(SelectError::UnknownOption { .. })
    ));

    let removed = state.remove_selected("Apple");
    assert_eq!(removed.value_changed, Some(SharedString::default()));
    assert!(state.selection().is_empty());
}
