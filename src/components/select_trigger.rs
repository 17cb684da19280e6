use std::rc::Rc;

use gpui::{
    AnyElement, ClickEvent, Component, InteractiveElement, IntoElement, ParentElement, Refineable,
    RenderOnce, Styled, Window, div, px,
};

use crate::icon;
use crate::provider::CalmProvider;

use super::icon::Icon;
use super::interaction_adapter::{
    ActivateHandler, ClickActivateHandler, PressAdapter, bind_press_adapter,
};
use super::select_handle::SelectHandle;
use super::utils::{
    InteractionStyles, apply_interaction_styles, bounds_probe, interaction_style,
    quantized_stroke_px,
};

/// The clickable control that opens and closes the panel.
pub struct SelectTrigger<P: Clone + 'static = ()> {
    handle: SelectHandle<P>,
    children: Vec<AnyElement>,
    on_click: Option<ClickActivateHandler>,
    style: gpui::StyleRefinement,
}

impl<P: Clone + 'static> SelectTrigger<P> {
    pub fn new(handle: &SelectHandle<P>) -> Self {
        Self {
            handle: handle.clone(),
            children: Vec::new(),
            on_click: None,
            style: gpui::StyleRefinement::default(),
        }
    }

    /// Runs before the built-in toggle on every enabled click, so the handler
    /// still sees the previous open state.
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }
}

impl<P: Clone + 'static> RenderOnce for SelectTrigger<P> {
    fn render(self, window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = CalmProvider::theme(cx);
        let tokens = &theme.select;
        let id = self.handle.id();
        let (opened, disabled) = self
            .handle
            .read(|state| (state.opened(), state.config().disabled));

        let border = if opened {
            tokens.border_focus
        } else {
            tokens.border
        };
        let chevron = if opened {
            icon::CHEVRON_UP
        } else {
            icon::CHEVRON_DOWN
        };

        let handle = self.handle.clone();
        let mut root = div()
            .id(id.slot("trigger"))
            .relative()
            .flex()
            .items_center()
            .gap(tokens.tag_gap)
            .flex_1()
            .min_w_0()
            .min_h(tokens.control_min_height)
            .px(tokens.control_padding_x)
            .py(tokens.control_padding_y)
            .rounded(tokens.control_radius)
            .border(quantized_stroke_px(window, 1.0))
            .border_color(border)
            .text_size(tokens.text_size)
            .text_color(tokens.fg)
            .child(
                div()
                    .flex()
                    .flex_1()
                    .flex_wrap()
                    .items_center()
                    .gap(tokens.tag_gap)
                    .min_w_0()
                    .children(self.children),
            )
            .child(
                Icon::named(chevron)
                    .size(tokens.icon_size)
                    .color(tokens.icon),
            )
            .child(bounds_probe(move |bounds, window, _cx| {
                handle.record_trigger_bounds(bounds, window);
            }));

        if disabled {
            root = root.bg(tokens.disabled_bg).opacity(0.6).cursor_default();
        } else {
            let handle = self.handle.clone();
            let toggle: ActivateHandler = Rc::new(move |window: &mut Window, cx: &mut gpui::App| {
                handle.toggle_from_trigger(window, cx);
            });
            root = apply_interaction_styles(
                root.bg(tokens.bg).cursor_pointer(),
                InteractionStyles::new().hover({
                    let hover_border = tokens.border_focus;
                    interaction_style(move |style| style.border_color(hover_border))
                }),
            );
            root = bind_press_adapter(
                root,
                PressAdapter::new()
                    .on_activate(Some(toggle))
                    .on_click(self.on_click),
            );
        }
        if opened {
            root = root.shadow(vec![gpui::BoxShadow {
                color: tokens.focus_ring,
                offset: gpui::point(px(0.), px(0.)),
                blur_radius: px(0.),
                spread_radius: px(2.0),
            }]);
        }
        root.style().refine(&self.style);

        root
    }
}

impl<P: Clone + 'static> ParentElement for SelectTrigger<P> {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl<P: Clone + 'static> IntoElement for SelectTrigger<P> {
    type Element = Component<Self>;

    fn into_element(self) -> Self::Element {
        Component::new(self)
    }
}

impl<P: Clone + 'static> Styled for SelectTrigger<P> {
    fn style(&mut self) -> &mut gpui::StyleRefinement {
        &mut self.style
    }
}
