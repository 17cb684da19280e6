use std::rc::Rc;

use gpui::{
    AnyElement, Component, InteractiveElement, IntoElement, ParentElement, Refineable, RenderOnce,
    SharedString, Styled, Window, div,
};

use crate::icon;
use crate::provider::CalmProvider;

use super::highlighted_text::HighlightedText;
use super::icon::Icon;
use super::interaction_adapter::{ActivateHandler, PressAdapter, bind_press_adapter};
use super::option::{HighlightedLabel, HighlightedOption};
use super::select_handle::SelectHandle;
use super::utils::{InteractionStyles, apply_interaction_styles};

/// One clickable option row.
///
/// Without children the row paints its label, highlighted against the current
/// search. Clicking always selects the original label.
pub struct SelectItem<P: Clone + 'static = ()> {
    handle: SelectHandle<P>,
    label: HighlightedLabel,
    children: Vec<AnyElement>,
    selected_indicator: bool,
    style: gpui::StyleRefinement,
}

impl<P: Clone + 'static> SelectItem<P> {
    pub fn new(handle: &SelectHandle<P>, label: impl Into<SharedString>) -> Self {
        let label = label.into();
        let search = handle.filter();
        Self::from_label(handle, HighlightedLabel::new(label, &search))
    }

    pub fn for_option(handle: &SelectHandle<P>, option: &HighlightedOption<P>) -> Self {
        Self::from_label(handle, option.label.clone())
    }

    fn from_label(handle: &SelectHandle<P>, label: HighlightedLabel) -> Self {
        Self {
            handle: handle.clone(),
            label,
            children: Vec::new(),
            selected_indicator: true,
            style: gpui::StyleRefinement::default(),
        }
    }

    /// Whether a check mark is painted on selected rows.
    pub fn selected_indicator(mut self, value: bool) -> Self {
        self.selected_indicator = value;
        self
    }
}

impl<P: Clone + 'static> RenderOnce for SelectItem<P> {
    fn render(self, _window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = CalmProvider::theme(cx);
        let tokens = &theme.select;
        let id = self.handle.id();
        let original = self.label.original().clone();
        let selected = self.handle.is_selected(&original);

        let content = if self.children.is_empty() {
            HighlightedText::new(&self.label).into_any_element()
        } else {
            div()
                .flex()
                .items_center()
                .min_w_0()
                .children(self.children)
                .into_any_element()
        };

        let check_slot = div()
            .flex()
            .items_center()
            .justify_center()
            .flex_none()
            .w(tokens.option_check_size)
            .h(tokens.option_check_size)
            .children((selected && self.selected_indicator).then(|| {
                Icon::named(icon::CHECK)
                    .size(tokens.option_check_size)
                    .color(tokens.icon)
            }));

        let row_bg = if selected {
            tokens.option_selected_bg
        } else {
            gpui::transparent_black()
        };

        let handle = self.handle.clone();
        let value = original.clone();
        let activate: ActivateHandler = Rc::new(move |window: &mut Window, cx: &mut gpui::App| {
            if let Err(error) = handle.select_value(&value, window, cx) {
                tracing::warn!(id = %handle.id(), label = %value, %error, "select ignored option");
            }
        });

        let mut root = div()
            .id(id.slot_index("option", original.to_lowercase()))
            .flex()
            .items_center()
            .justify_between()
            .gap(tokens.tag_gap)
            .w_full()
            .px(tokens.option_padding_x)
            .py(tokens.option_padding_y)
            .rounded_sm()
            .bg(row_bg)
            .text_size(tokens.option_size)
            .text_color(tokens.option_fg)
            .cursor_pointer()
            .child(content)
            .child(check_slot);
        root = apply_interaction_styles(
            root,
            InteractionStyles::pressable_surface(tokens.option_hover_bg),
        );
        root = bind_press_adapter(root, PressAdapter::new().on_activate(Some(activate)));
        root.style().refine(&self.style);

        root
    }
}

impl<P: Clone + 'static> ParentElement for SelectItem<P> {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl<P: Clone + 'static> IntoElement for SelectItem<P> {
    type Element = Component<Self>;

    fn into_element(self) -> Self::Element {
        Component::new(self)
    }
}

impl<P: Clone + 'static> Styled for SelectItem<P> {
    fn style(&mut self) -> &mut gpui::StyleRefinement {
        &mut self.style
    }
}
