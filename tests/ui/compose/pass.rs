use calmui_select::prelude::*;
use gpui::{AnyElement, IntoElement, ParentElement, div};

#[derive(Clone, Debug)]
struct Fruit {
    color: &'static str,
}

fn build(handle: &SelectHandle<Fruit>) -> AnyElement {
    Select::new(handle)
        .child(SelectLabel::new(handle, "Fruit"))
        .child(SelectTrigger::new(handle).child(SelectValue::new(handle).placeholder("Pick one")))
        .child(
            SelectContent::new(handle).render_options(|handle, options, _window, _cx| {
                div()
                    .children(options.iter().map(|option| {
                        SelectItem::for_option(handle, option)
                            .child(div().child(option.label.original().clone()))
                            .child(div().child(option.payload.color))
                    }))
                    .into_any_element()
            }),
        )
        .into_any_element()
}

fn main() {
    let handle = SelectHandle::new(
        [
            SelectOption::with_payload("Apple", Fruit { color: "red" }),
            SelectOption::with_payload("Banana", Fruit { color: "yellow" }),
        ],
        SelectConfig::new().multiple(true).searchable(true),
    )
    .with_id("fruit")
    .on_value_change(|value, _window, _cx| {
        let _: gpui::SharedString = value;
    })
    .on_open_change(|opened, _window, _cx| {
        let _: bool = opened;
    });

    let _ = build(&handle);
}
