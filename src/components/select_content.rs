use std::rc::Rc;

use gpui::{
    AnyElement, App, Component, InteractiveElement, IntoElement, ParentElement, Refineable,
    RenderOnce, StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::icon;
use crate::provider::CalmProvider;

use super::icon::Icon;
use super::option::HighlightedOption;
use super::popup::{AnchorPlacement, anchored_host};
use super::search_input::SearchInput;
use super::select_handle::{OptionsRenderer, SelectHandle};
use super::utils::{bounds_probe, quantized_stroke_px};

/// The floating panel. Renders nothing while the select is closed.
///
/// Must be a direct child of [`super::Select`] so it can anchor to the root.
pub struct SelectContent<P: Clone + 'static = ()> {
    handle: SelectHandle<P>,
    children: Vec<AnyElement>,
    render_options: Option<OptionsRenderer<P>>,
    style: gpui::StyleRefinement,
}

impl<P: Clone + 'static> SelectContent<P> {
    pub fn new(handle: &SelectHandle<P>) -> Self {
        Self {
            handle: handle.clone(),
            children: Vec::new(),
            render_options: None,
            style: gpui::StyleRefinement::default(),
        }
    }

    /// Renders the filtered options after the panel's children.
    pub fn render_options(
        mut self,
        renderer: impl Fn(&SelectHandle<P>, Vec<HighlightedOption<P>>, &mut Window, &mut App) -> AnyElement
        + 'static,
    ) -> Self {
        self.render_options = Some(Rc::new(renderer));
        self
    }

    fn render_search_row(&self, tokens: &crate::theme::SelectTokens) -> AnyElement {
        div()
            .id(self.handle.id().slot("search-row"))
            .flex()
            .items_center()
            .gap(tokens.tag_gap)
            .p(tokens.search_padding)
            .child(
                Icon::named(icon::SEARCH)
                    .size(tokens.search_icon_size)
                    .color(tokens.icon),
            )
            .child(SearchInput::new(&self.handle))
            .into_any_element()
    }
}

impl<P: Clone + 'static> RenderOnce for SelectContent<P> {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let id = self.handle.id();
        let (opened, searchable, placement, label_width) = self.handle.read(|state| {
            (
                state.opened(),
                state.config().searchable,
                state.placement(),
                state.metrics().label_width,
            )
        });
        if !opened {
            return div().id(id.slot("content")).absolute().into_any_element();
        }

        let theme = CalmProvider::theme(cx);
        let tokens = &theme.select;

        let mut panel = div()
            .id(id.slot("content"))
            .relative()
            .flex()
            .flex_col()
            .min_w(tokens.dropdown_min_width)
            .max_h(tokens.dropdown_max_height)
            .overflow_y_scroll()
            .p(tokens.dropdown_padding)
            .rounded(tokens.dropdown_radius)
            .border(quantized_stroke_px(window, 1.0))
            .border_color(tokens.dropdown_border)
            .bg(tokens.dropdown_bg)
            .shadow_md();
        if searchable {
            panel = panel.child(self.render_search_row(tokens));
        }
        panel = panel.children(self.children);
        if let Some(renderer) = self.render_options.as_ref() {
            let visible = self.handle.visible_options();
            panel = panel.child((renderer)(&self.handle, visible, window, cx));
        }
        let handle = self.handle.clone();
        panel = panel.child(bounds_probe(move |bounds, window, _cx| {
            handle.record_panel_bounds(bounds, window);
        }));
        panel.style().refine(&self.style);

        let offset_x = label_width
            .map(|width| px(width) + tokens.root_gap)
            .unwrap_or(px(0.0));
        anchored_host(
            &id,
            AnchorPlacement {
                direction: placement,
                offset_x,
                offset_y: tokens.dropdown_anchor_offset,
                snap_margin: tokens.dropdown_padding,
            },
            panel.into_any_element(),
        )
    }
}

impl<P: Clone + 'static> ParentElement for SelectContent<P> {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl<P: Clone + 'static> IntoElement for SelectContent<P> {
    type Element = Component<Self>;

    fn into_element(self) -> Self::Element {
        Component::new(self)
    }
}

impl<P: Clone + 'static> Styled for SelectContent<P> {
    fn style(&mut self) -> &mut gpui::StyleRefinement {
        &mut self.style
    }
}
