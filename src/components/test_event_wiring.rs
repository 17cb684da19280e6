use std::cell::RefCell;
use std::rc::Rc;

use gpui::{
    Bounds, Context, IntoElement, Modifiers, ParentElement, Pixels, Render, SharedString, Styled,
    TestAppContext, VisualTestContext, Window, point, px,
};

use super::*;

type Log<T> = Rc<RefCell<Vec<T>>>;

struct Harness {
    handle: SelectHandle,
    trigger_clicks: Log<bool>,
}

impl Render for Harness {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let reader = self.handle.clone();
        let trigger_clicks = self.trigger_clicks.clone();
        Select::new(&self.handle)
            .w(px(320.0))
            .child(
                SelectTrigger::new(&self.handle)
                    .on_click(move |_, _, _| trigger_clicks.borrow_mut().push(reader.opened()))
                    .child(SelectValue::new(&self.handle).placeholder("Pick a fruit")),
            )
            .child(SelectContent::new(&self.handle))
    }
}

fn fruits(config: SelectConfig) -> SelectHandle {
    SelectHandle::new(["Apple", "Banana", "Cherry"].map(SelectOption::new), config)
        .with_id("wired")
}

fn mount<'a>(
    cx: &'a mut TestAppContext,
    handle: &SelectHandle,
) -> (Log<bool>, &'a mut VisualTestContext) {
    let trigger_clicks: Log<bool> = Rc::default();
    let (_view, cx) = cx.add_window_view({
        let handle = handle.clone();
        let trigger_clicks = trigger_clicks.clone();
        move |_window, _cx| Harness {
            handle,
            trigger_clicks,
        }
    });
    cx.run_until_parked();
    (trigger_clicks, cx)
}

fn root_bounds(handle: &SelectHandle) -> Bounds<Pixels> {
    handle
        .read(|state| state.metrics().bounds.root)
        .expect("root bounds recorded while painting")
}

/// Records every reported value with the selection read back inside the callback.
fn record_values(handle: SelectHandle) -> (SelectHandle, Log<(SharedString, Vec<SharedString>)>) {
    let seen: Log<(SharedString, Vec<SharedString>)> = Rc::default();
    let reader = handle.clone();
    let handle = handle.on_value_change({
        let seen = seen.clone();
        move |value, _, _| seen.borrow_mut().push((value, reader.selection()))
    });
    (handle, seen)
}

fn values(seen: &Log<(SharedString, Vec<SharedString>)>) -> Vec<String> {
    seen.borrow()
        .iter()
        .map(|(value, _)| value.to_string())
        .collect()
}

fn click_remove(cx: &mut VisualTestContext, selector: &'static str) {
    let remove = cx
        .debug_bounds(selector)
        .expect("chip remove control painted");
    cx.simulate_click(remove.center(), Modifiers::none());
    cx.run_until_parked();
}

#[gpui::test]
async fn value_callbacks_can_read_the_handle(cx: &mut TestAppContext) {
    let (handle, seen) = record_values(fruits(SelectConfig::new().multiple(true)));
    let opened_seen: Log<(bool, usize)> = Rc::default();
    let reader = handle.clone();
    let handle = handle.on_open_change({
        let opened_seen = opened_seen.clone();
        move |opened, _, _| {
            let visible = reader.read(|state| state.visible_options().len());
            opened_seen.borrow_mut().push((opened, visible));
        }
    });
    let (_, cx) = mount(cx, &handle);

    cx.update(|window, cx| {
        handle.set_opened(true, window, cx);
        handle
            .select_value("Apple", window, cx)
            .expect("known label");
        handle
            .select_value("Banana", window, cx)
            .expect("known label");
    });

    assert_eq!(values(&seen), vec!["Apple", "Apple, Banana"]);
    assert_eq!(
        seen.borrow()[1].1,
        vec![SharedString::from("Apple"), SharedString::from("Banana")]
    );
    assert_eq!(*opened_seen.borrow(), vec![(true, 3)]);
    assert!(handle.opened());
}

#[gpui::test]
async fn outside_pointer_dismisses_only_beyond_the_root(cx: &mut TestAppContext) {
    let handle = fruits(SelectConfig::new());
    let (_, cx) = mount(cx, &handle);

    cx.update(|window, cx| handle.set_opened(true, window, cx));
    cx.run_until_parked();

    let root = root_bounds(&handle);
    let inside = root.center();
    let outside = point(root.origin.x - px(10.0), root.origin.y - px(10.0));

    cx.update(|window, cx| handle.dismiss_if_outside(&inside, window, cx));
    assert!(handle.opened());

    cx.update(|window, cx| handle.dismiss_if_outside(&outside, window, cx));
    assert!(!handle.opened());
}

#[gpui::test]
async fn trigger_click_handler_runs_before_the_toggle(cx: &mut TestAppContext) {
    let handle = fruits(SelectConfig::new());
    let (trigger_clicks, cx) = mount(cx, &handle);

    cx.simulate_click(root_bounds(&handle).center(), Modifiers::none());
    cx.run_until_parked();
    assert_eq!(*trigger_clicks.borrow(), vec![false]);
    assert!(handle.opened());

    cx.simulate_click(root_bounds(&handle).center(), Modifiers::none());
    cx.run_until_parked();
    assert_eq!(*trigger_clicks.borrow(), vec![false, true]);
    assert!(!handle.opened());
}

#[gpui::test]
async fn chip_remove_click_leaves_the_open_state_alone(cx: &mut TestAppContext) {
    let (handle, seen) = record_values(fruits(
        SelectConfig::new()
            .multiple(true)
            .default_value(["Apple", "Banana"]),
    ));
    let (trigger_clicks, cx) = mount(cx, &handle);

    click_remove(cx, "wired-remove-Apple");
    assert!(!handle.opened());
    assert_eq!(values(&seen), vec!["Banana"]);

    cx.update(|window, cx| handle.set_opened(true, window, cx));
    cx.run_until_parked();

    click_remove(cx, "wired-remove-Banana");
    assert!(handle.opened());
    assert_eq!(values(&seen), vec!["Banana", ""]);
    assert!(trigger_clicks.borrow().is_empty());
}

#[gpui::test]
async fn chip_remove_click_works_while_disabled(cx: &mut TestAppContext) {
    let (handle, seen) = record_values(fruits(
        SelectConfig::new()
            .multiple(true)
            .disabled(true)
            .default_value(["Apple"]),
    ));
    let (trigger_clicks, cx) = mount(cx, &handle);

    click_remove(cx, "wired-remove-Apple");

    assert_eq!(values(&seen), vec![""]);
    assert!(handle.selection().is_empty());
    assert!(!handle.opened());
    assert!(trigger_clicks.borrow().is_empty());
}

#[gpui::test]
async fn replacing_options_keeps_the_selection(cx: &mut TestAppContext) {
    let (handle, seen) = record_values(fruits(SelectConfig::new().multiple(true)));
    let (_, cx) = mount(cx, &handle);

    cx.update(|window, cx| {
        handle
            .select_value("Apple", window, cx)
            .expect("known label");
        handle.set_options(["Banana", "Cherry"].map(SelectOption::new), window, cx);
    });
    cx.run_until_parked();

    assert_eq!(handle.selection(), vec![SharedString::from("Apple")]);
    assert!(
        handle
            .visible_options()
            .iter()
            .all(|option| option.label.original().as_ref() != "Apple")
    );

    click_remove(cx, "wired-remove-Apple");
    assert_eq!(values(&seen), vec!["Apple", ""]);
}
