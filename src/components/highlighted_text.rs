use gpui::{
    Component, IntoElement, ParentElement, Refineable, RenderOnce, Styled, Window, div,
};

use crate::provider::CalmProvider;

use super::highlight::HighlightSegment;
use super::option::HighlightedLabel;

/// Paints a label segment by segment, marking the parts that matched the search.
pub struct HighlightedText {
    segments: Vec<HighlightSegment>,
    style: gpui::StyleRefinement,
}

impl HighlightedText {
    pub fn new(label: &HighlightedLabel) -> Self {
        Self {
            segments: label.segments().to_vec(),
            style: gpui::StyleRefinement::default(),
        }
    }
}

impl RenderOnce for HighlightedText {
    fn render(self, _window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = CalmProvider::theme(cx);
        let tokens = &theme.select;

        let mut root = div().flex().items_center().whitespace_nowrap().min_w_0();
        for segment in self.segments {
            root = if segment.matched {
                root.child(
                    div()
                        .bg(tokens.highlight_bg)
                        .text_color(tokens.highlight_fg)
                        .font_weight(tokens.highlight_weight)
                        .child(segment.text),
                )
            } else {
                root.child(div().child(segment.text))
            };
        }
        root.style().refine(&self.style);

        root
    }
}

impl IntoElement for HighlightedText {
    type Element = Component<Self>;

    fn into_element(self) -> Self::Element {
        Component::new(self)
    }
}

impl Styled for HighlightedText {
    fn style(&mut self) -> &mut gpui::StyleRefinement {
        &mut self.style
    }
}
