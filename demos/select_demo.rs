use calmui_select::prelude::*;
use gpui::{
    AppContext, Context, IntoElement, ParentElement, Render, SharedString, Styled, Window,
    WindowOptions, div, px,
};

struct DemoView {
    single: SelectHandle,
    multiple: SelectHandle<&'static str>,
}

impl DemoView {
    fn new() -> Self {
        let single = SelectHandle::new(
            ["Apple", "Banana", "Cherry", "Pineapple"].map(SelectOption::new),
            SelectConfig::new().default_value(["Apple"]),
        )
        .with_id("demo-single")
        .on_value_change(|value, _window, _cx| tracing::info!(%value, "single select changed"));

        let multiple = SelectHandle::new(
            [
                SelectOption::with_payload("Rust", "systems"),
                SelectOption::with_payload("TypeScript", "web"),
                SelectOption::with_payload("Go", "services"),
                SelectOption::with_payload("C++ (legacy)", "systems"),
            ],
            SelectConfig::new().multiple(true).searchable(true),
        )
        .with_id("demo-multiple")
        .on_value_change(|value: SharedString, _window, _cx| {
            tracing::info!(%value, "multiple select changed");
        })
        .on_open_change(|opened, _window, _cx| tracing::info!(opened, "panel toggled"));

        Self { single, multiple }
    }
}

impl Render for DemoView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let single = &self.single;
        let multiple = &self.multiple;

        div()
            .size_full()
            .flex()
            .flex_col()
            .gap(px(24.0))
            .p(px(32.0))
            .child(
                Select::new(single)
                    .child(SelectLabel::new(single, "Fruit"))
                    .child(
                        SelectTrigger::new(single)
                            .w(px(240.0))
                            .child(SelectValue::new(single).placeholder("Pick a fruit")),
                    )
                    .child(
                        SelectContent::new(single)
                            .child(SelectItem::new(single, "Apple"))
                            .child(SelectItem::new(single, "Banana"))
                            .child(SelectItem::new(single, "Cherry"))
                            .child(SelectItem::new(single, "Pineapple")),
                    ),
            )
            .child(
                Select::new(multiple)
                    .child(SelectLabel::new(multiple, "Languages"))
                    .child(
                        SelectTrigger::new(multiple)
                            .w(px(320.0))
                            .child(SelectValue::new(multiple).placeholder("Any")),
                    )
                    .child(SelectContent::new(multiple).render_options(
                        |handle, options, _window, _cx| {
                            div()
                                .flex()
                                .flex_col()
                                .children(options.iter().map(|option| {
                                    SelectItem::for_option(handle, option).child(
                                        div()
                                            .flex()
                                            .gap(px(8.0))
                                            .child(HighlightedText::new(&option.label))
                                            .child(div().opacity(0.6).child(option.payload)),
                                    )
                                }))
                                .into_any_element()
                        },
                    )),
            )
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    CalmApplication::new()
        .set_theme(|_| Theme::light())
        .run(|cx| {
            if let Err(error) =
                cx.open_window(WindowOptions::default(), |_window, cx| cx.new(|_| DemoView::new()))
            {
                tracing::error!(%error, "failed to open demo window");
            }
        });
}
