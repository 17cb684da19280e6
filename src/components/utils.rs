use gpui::{
    AnyElement, Bounds, Hsla, IntoElement, Pixels, StatefulInteractiveElement, Styled, Window,
    canvas, px,
};

#[derive(Clone, Default)]
pub struct InteractionStyles {
    pub hover: Option<gpui::StyleRefinement>,
    pub active: Option<gpui::StyleRefinement>,
}

impl InteractionStyles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hover(mut self, value: gpui::StyleRefinement) -> Self {
        self.hover = Some(value);
        self
    }

    pub fn active(mut self, value: gpui::StyleRefinement) -> Self {
        self.active = Some(value);
        self
    }

    /// Hover paints `hover_bg`; press darkens it slightly.
    pub fn pressable_surface(hover_bg: Hsla) -> Self {
        let active_bg = hover_bg.blend(gpui::black().opacity(0.08));
        Self::new()
            .hover(interaction_style(move |style| style.bg(hover_bg)))
            .active(interaction_style(move |style| style.bg(active_bg)))
    }
}

pub fn interaction_style(
    apply: impl FnOnce(gpui::StyleRefinement) -> gpui::StyleRefinement,
) -> gpui::StyleRefinement {
    apply(gpui::StyleRefinement::default())
}

pub fn apply_interaction_styles<T>(mut node: T, styles: InteractionStyles) -> T
where
    T: StatefulInteractiveElement,
{
    if let Some(hover_style) = styles.hover {
        node = node.hover(move |_| hover_style);
    }
    if let Some(active_style) = styles.active {
        node = node.active(move |_| active_style);
    }
    node
}

/// An invisible layer covering its parent that reports the parent's window bounds
/// every time it is prepainted. The parent must be positioned.
pub fn bounds_probe(
    report: impl FnOnce(Bounds<Pixels>, &mut Window, &mut gpui::App) + 'static,
) -> AnyElement {
    canvas(report, |_, _, _, _| {})
        .absolute()
        .top_0()
        .left_0()
        .size_full()
        .into_any_element()
}

fn scale_factor(window: &Window) -> f32 {
    window.scale_factor().max(f32::EPSILON)
}

pub fn quantized_stroke_px(window: &Window, logical_px: f32) -> Pixels {
    if !logical_px.is_finite() || logical_px <= 0.0 {
        return px(0.0);
    }
    let scale = scale_factor(window);
    let snapped = (logical_px * scale).round() / scale;
    if snapped > 0.0 {
        px(snapped)
    } else {
        px(1.0 / scale)
    }
}
