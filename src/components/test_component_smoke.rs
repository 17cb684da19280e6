use super::*;
use crate::icon;
use gpui::{AnyElement, IntoElement, ParentElement, Styled, div, px};

fn into_any(element: impl IntoElement) -> AnyElement {
    element.into_any_element()
}

fn handle(config: SelectConfig) -> SelectHandle {
    SelectHandle::new(
        ["Apple", "Banana", "Cherry"].map(SelectOption::new),
        config,
    )
    .with_id("smoke-select")
}

#[test]
fn smoke_parts_render_into_any_element() {
    let handle = handle(SelectConfig::new());

    let _ = into_any(SelectLabel::new(&handle, "Fruit"));
    let _ = into_any(SelectTrigger::new(&handle));
    let _ = into_any(SelectValue::new(&handle).placeholder("Pick a fruit"));
    let _ = into_any(SelectContent::new(&handle));
    let _ = into_any(SelectItem::new(&handle, "Apple"));
    let _ = into_any(SearchInput::new(&handle).placeholder("Filter"));
    let _ = into_any(Icon::named(icon::CHECK).size(px(12.0)));
    let _ = into_any(HighlightedText::new(&HighlightedLabel::new("Cherry".into(), "che")));
}

#[test]
fn smoke_full_composition_with_root_renderer() {
    let handle = handle(SelectConfig::new().multiple(true).default_value(["Apple"]));

    let _ = into_any(
        Select::new(&handle)
            .w(px(320.0))
            .child(SelectLabel::new(&handle, "Fruit"))
            .child(
                SelectTrigger::new(&handle)
                    .on_click(|_, _, _| {})
                    .child(SelectValue::new(&handle)),
            )
            .render_options(|handle, options, _, _| {
                div()
                    .children(
                        options
                            .iter()
                            .map(|option| SelectItem::for_option(handle, option)),
                    )
                    .into_any_element()
            }),
    );
}

#[test]
fn smoke_content_with_children_and_renderer() {
    let handle = handle(SelectConfig::new().searchable(true));

    let _ = into_any(
        SelectContent::new(&handle)
            .p(px(4.0))
            .child(div().child("Fruits"))
            .render_options(|handle, options, _, _| {
                div()
                    .children(options.iter().map(|option| {
                        SelectItem::for_option(handle, option)
                            .selected_indicator(false)
                            .child(div().child(option.label.original().clone()))
                    }))
                    .into_any_element()
            }),
    );
}

#[test]
fn smoke_payload_options_flow_through_the_handle() {
    let handle = SelectHandle::new(
        [
            SelectOption::with_payload("Apple", 1_u32),
            SelectOption::with_payload("Banana", 2_u32),
        ],
        SelectConfig::new(),
    );

    let payloads = handle
        .visible_options()
        .into_iter()
        .map(|option| option.payload)
        .collect::<Vec<_>>();
    assert_eq!(payloads, vec![1, 2]);
    let _ = into_any(SelectItem::for_option(&handle, &handle.visible_options()[0]));
}

#[test]
fn smoke_handle_clones_share_state() {
    let handle = handle(SelectConfig::new().default_value(["Banana"]));
    let clone = handle.clone();

    assert_eq!(clone.selection(), vec![gpui::SharedString::from("Banana")]);
    assert_eq!(clone.id().as_str(), "smoke-select");
    assert!(!clone.opened());
}
