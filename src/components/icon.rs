use gpui::{
    Component, Hsla, IntoElement, ParentElement, Pixels, RenderOnce, Styled, div, px, svg,
};

use crate::icon::IconRegistry;

pub struct Icon {
    name: &'static str,
    size: Pixels,
    color: Option<Hsla>,
    registry: IconRegistry,
}

impl Icon {
    pub fn named(name: &'static str) -> Self {
        Self {
            name,
            size: px(16.0),
            color: None,
            registry: IconRegistry::shared(),
        }
    }

    pub fn size(mut self, size: Pixels) -> Self {
        self.size = px(f32::from(size).max(8.0));
        self
    }

    pub fn color(mut self, value: Hsla) -> Self {
        self.color = Some(value);
        self
    }

    fn fallback_glyph(&self) -> &'static str {
        match self.name {
            crate::icon::CHEVRON_DOWN => "▾",
            crate::icon::CHEVRON_UP => "▴",
            crate::icon::CIRCLE_X => "×",
            crate::icon::CHECK => "✓",
            _ => "?",
        }
    }
}

impl RenderOnce for Icon {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        if let Some(path) = self.registry.resolve(self.name) {
            let mut icon = svg()
                .external_path(path.to_string_lossy().to_string())
                .flex_none()
                .w(self.size)
                .h(self.size);
            if let Some(color) = self.color {
                icon = icon.text_color(color);
            }
            return icon.into_any_element();
        }

        let mut fallback = div()
            .flex_none()
            .w(self.size)
            .h(self.size)
            .text_size(self.size)
            .line_height(self.size)
            .child(self.fallback_glyph());
        if let Some(color) = self.color {
            fallback = fallback.text_color(color);
        }
        fallback.into_any_element()
    }
}

impl IntoElement for Icon {
    type Element = Component<Self>;

    fn into_element(self) -> Self::Element {
        Component::new(self)
    }
}
