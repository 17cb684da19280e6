use std::rc::Rc;

use gpui::{ClickEvent, StatefulInteractiveElement, Window};

pub type ActivateHandler = Rc<dyn Fn(&mut Window, &mut gpui::App)>;
pub type ClickActivateHandler = Rc<dyn Fn(&ClickEvent, &mut Window, &mut gpui::App)>;

#[derive(Clone, Default)]
pub struct PressAdapter {
    pub on_activate: Option<ActivateHandler>,
    pub on_click: Option<ClickActivateHandler>,
    pub stop_propagation: bool,
}

impl PressAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_activate(mut self, value: Option<ActivateHandler>) -> Self {
        self.on_activate = value;
        self
    }

    pub fn on_click(mut self, value: Option<ClickActivateHandler>) -> Self {
        self.on_click = value;
        self
    }

    /// Keeps the click from reaching pressable ancestors.
    pub fn stop_propagation(mut self, value: bool) -> Self {
        self.stop_propagation = value;
        self
    }
}

/// Runs `on_click` and then `on_activate` for every click on `node`.
pub fn bind_press_adapter<T>(node: T, adapter: PressAdapter) -> T
where
    T: StatefulInteractiveElement,
{
    if adapter.on_activate.is_none() && adapter.on_click.is_none() && !adapter.stop_propagation {
        return node;
    }

    node.on_click(move |event, window, cx| {
        if adapter.stop_propagation {
            cx.stop_propagation();
        }
        if let Some(handler) = adapter.on_click.as_ref() {
            (handler)(event, window, cx);
        }
        if let Some(handler) = adapter.on_activate.as_ref() {
            (handler)(window, cx);
        }
    })
}
