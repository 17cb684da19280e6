use std::rc::Rc;

use gpui::{
    AnyElement, App, Component, InteractiveElement, IntoElement, ParentElement, Refineable,
    RenderOnce, Styled, Window, div,
};

use super::option::HighlightedOption;
use super::select_handle::{OptionsRenderer, SelectHandle};
use super::utils::bounds_probe;

/// Root of a select: lays its parts out in a row and owns outside-click dismissal.
///
/// ```ignore
/// let handle = SelectHandle::new(options, SelectConfig::new().searchable(true));
/// Select::new(&handle)
///     .child(SelectLabel::new(&handle, "Fruit"))
///     .child(SelectTrigger::new(&handle).child(SelectValue::new(&handle)))
///     .child(SelectContent::new(&handle).render_options(|handle, options, _, _| {
///         div()
///             .children(options.iter().map(|option| SelectItem::for_option(handle, option)))
///             .into_any_element()
///     }))
/// ```
pub struct Select<P: Clone + 'static = ()> {
    handle: SelectHandle<P>,
    children: Vec<AnyElement>,
    render_options: Option<OptionsRenderer<P>>,
    style: gpui::StyleRefinement,
}

impl<P: Clone + 'static> Select<P> {
    pub fn new(handle: &SelectHandle<P>) -> Self {
        Self {
            handle: handle.clone(),
            children: Vec::new(),
            render_options: None,
            style: gpui::StyleRefinement::default(),
        }
    }

    /// Renders the filtered options after the children while the select is open.
    pub fn render_options(
        mut self,
        renderer: impl Fn(&SelectHandle<P>, Vec<HighlightedOption<P>>, &mut Window, &mut App) -> AnyElement
        + 'static,
    ) -> Self {
        self.render_options = Some(Rc::new(renderer));
        self
    }
}

impl<P: Clone + 'static> RenderOnce for Select<P> {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = crate::provider::CalmProvider::theme(cx);
        let id = self.handle.id();
        let opened = self.handle.opened();

        let probe_handle = self.handle.clone();
        let dismiss_handle = self.handle.clone();
        let mut root = div()
            .id(id.clone())
            .relative()
            .flex()
            .items_center()
            .gap(theme.select.root_gap)
            .children(self.children)
            .child(bounds_probe(move |bounds, _window, _cx| {
                probe_handle.record_root_bounds(bounds);
            }))
            .on_mouse_down_out(move |event, window, cx| {
                dismiss_handle.dismiss_if_outside(&event.position, window, cx);
            });

        if opened && let Some(renderer) = self.render_options.as_ref() {
            let visible = self.handle.visible_options();
            root = root.child((renderer)(&self.handle, visible, window, cx));
        }
        root.style().refine(&self.style);

        root
    }
}

impl<P: Clone + 'static> ParentElement for Select<P> {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl<P: Clone + 'static> IntoElement for Select<P> {
    type Element = Component<Self>;

    fn into_element(self) -> Self::Element {
        Component::new(self)
    }
}

impl<P: Clone + 'static> Styled for Select<P> {
    fn style(&mut self) -> &mut gpui::StyleRefinement {
        &mut self.style
    }
}
