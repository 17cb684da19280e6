use std::rc::Rc;

use gpui::{
    Component, InteractiveElement, IntoElement, ParentElement, Refineable, RenderOnce,
    SharedString, Styled, Window, div,
};

use crate::icon;
use crate::provider::CalmProvider;

use super::icon::Icon;
use super::interaction_adapter::{ActivateHandler, PressAdapter, bind_press_adapter};
use super::select_handle::SelectHandle;

/// Shows the current selection as chips, or the placeholder when nothing is selected.
pub struct SelectValue<P: Clone + 'static = ()> {
    handle: SelectHandle<P>,
    placeholder: Option<SharedString>,
    style: gpui::StyleRefinement,
}

impl<P: Clone + 'static> SelectValue<P> {
    pub fn new(handle: &SelectHandle<P>) -> Self {
        Self {
            handle: handle.clone(),
            placeholder: None,
            style: gpui::StyleRefinement::default(),
        }
    }

    pub fn placeholder(mut self, value: impl Into<SharedString>) -> Self {
        self.placeholder = Some(value.into());
        self
    }

    fn render_chip(
        handle: &SelectHandle<P>,
        label: SharedString,
        tokens: &crate::theme::SelectTokens,
    ) -> gpui::AnyElement {
        let id = handle.id();
        let handle = handle.clone();
        let value = label.clone();
        let remove_handler: ActivateHandler =
            Rc::new(move |window: &mut Window, cx: &mut gpui::App| {
                handle.remove_selected(&value, window, cx);
            });
        // The chip sits inside the trigger; the click must not reach it.
        let remove = bind_press_adapter(
            div()
                .id(id.slot_index("remove", &label))
                .flex()
                .items_center()
                .justify_center()
                .flex_none()
                .cursor_pointer()
                .child(
                    Icon::named(icon::CIRCLE_X)
                        .size(tokens.tag_remove_size)
                        .color(tokens.tag_fg),
                ),
            PressAdapter::new()
                .on_activate(Some(remove_handler))
                .stop_propagation(true),
        );

        #[cfg(test)]
        let remove = remove.debug_selector({
            let selector = id.slot_index("remove", &label).to_string();
            move || selector
        });

        div()
            .id(id.slot_index("selected", &label))
            .flex()
            .items_center()
            .gap(tokens.tag_gap)
            .px(tokens.tag_padding_x)
            .py(tokens.tag_padding_y)
            .rounded(tokens.control_radius)
            .bg(tokens.tag_bg)
            .text_color(tokens.tag_fg)
            .text_size(tokens.tag_size)
            .child(div().whitespace_nowrap().child(label))
            .child(remove)
            .into_any_element()
    }
}

impl<P: Clone + 'static> RenderOnce for SelectValue<P> {
    fn render(self, _window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = CalmProvider::theme(cx);
        let tokens = &theme.select;
        let selection = self.handle.selection();

        let mut root = div()
            .id(self.handle.id().slot("value"))
            .flex()
            .flex_wrap()
            .items_center()
            .gap(tokens.tag_gap)
            .min_w_0();

        if selection.is_empty() {
            root = root.child(
                div()
                    .truncate()
                    .text_color(tokens.placeholder)
                    .child(self.placeholder.clone().unwrap_or_default()),
            );
        } else {
            root = root.children(
                selection
                    .into_iter()
                    .map(|label| Self::render_chip(&self.handle, label, tokens)),
            );
        }
        root.style().refine(&self.style);

        root
    }
}

impl<P: Clone + 'static> IntoElement for SelectValue<P> {
    type Element = Component<Self>;

    fn into_element(self) -> Self::Element {
        Component::new(self)
    }
}

impl<P: Clone + 'static> Styled for SelectValue<P> {
    fn style(&mut self) -> &mut gpui::StyleRefinement {
        &mut self.style
    }
}
