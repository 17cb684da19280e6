use gpui::{
    Component, InteractiveElement, IntoElement, ParentElement, Refineable, RenderOnce,
    SharedString, Styled, Window, div,
};

use crate::provider::CalmProvider;

use super::select_handle::SelectHandle;
use super::utils::bounds_probe;

/// Field label. Its measured width becomes the horizontal offset of the content panel.
pub struct SelectLabel<P: Clone + 'static = ()> {
    handle: SelectHandle<P>,
    text: SharedString,
    style: gpui::StyleRefinement,
}

impl<P: Clone + 'static> SelectLabel<P> {
    pub fn new(handle: &SelectHandle<P>, text: impl Into<SharedString>) -> Self {
        Self {
            handle: handle.clone(),
            text: text.into(),
            style: gpui::StyleRefinement::default(),
        }
    }
}

impl<P: Clone + 'static> RenderOnce for SelectLabel<P> {
    fn render(self, _window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = CalmProvider::theme(cx);
        let tokens = &theme.select;
        let handle = self.handle.clone();

        let mut root = div()
            .id(self.handle.id().slot("label"))
            .relative()
            .flex_none()
            .text_size(tokens.label_size)
            .font_weight(tokens.label_weight)
            .text_color(tokens.label)
            .whitespace_nowrap()
            .child(self.text)
            .child(bounds_probe(move |bounds, window, _cx| {
                handle.record_label_width(f32::from(bounds.size.width), window);
            }));
        root.style().refine(&self.style);

        root
    }
}

impl<P: Clone + 'static> IntoElement for SelectLabel<P> {
    type Element = Component<Self>;

    fn into_element(self) -> Self::Element {
        Component::new(self)
    }
}

impl<P: Clone + 'static> Styled for SelectLabel<P> {
    fn style(&mut self) -> &mut gpui::StyleRefinement {
        &mut self.style
    }
}
