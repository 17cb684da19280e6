use std::cell::RefCell;
use std::rc::Rc;

use gpui::{AnyElement, App, Bounds, FocusHandle, Pixels, Point, SharedString, Window};

use crate::error::Result;
use crate::id::ComponentId;

use super::option::{HighlightedOption, SelectOption};
use super::placement::PlacementDirection;
use super::search_input_state::SearchInputState;
use super::select_state::{SelectConfig, SelectEffects, SelectState};

pub type ValueChangeHandler = Rc<dyn Fn(SharedString, &mut Window, &mut App)>;
pub type OpenChangeHandler = Rc<dyn Fn(bool, &mut Window, &mut App)>;
pub type OptionsRenderer<P> =
    Rc<dyn Fn(&SelectHandle<P>, Vec<HighlightedOption<P>>, &mut Window, &mut App) -> AnyElement>;

#[derive(Clone, Default)]
struct SelectCallbacks {
    on_value_change: Option<ValueChangeHandler>,
    on_open_change: Option<OpenChangeHandler>,
}

struct SelectInner<P> {
    state: RefCell<SelectState<P>>,
    callbacks: RefCell<SelectCallbacks>,
    search_focus: RefCell<Option<FocusHandle>>,
}

/// Shared state of one select, handed to every part that belongs to it.
///
/// Keep the handle in the view that renders the select; clones are cheap and
/// all point at the same state. Parts cannot be built without one.
pub struct SelectHandle<P = ()> {
    inner: Rc<SelectInner<P>>,
}

impl<P> Clone for SelectHandle<P> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<P: Clone + 'static> SelectHandle<P> {
    #[track_caller]
    pub fn new(options: impl IntoIterator<Item = SelectOption<P>>, config: SelectConfig) -> Self {
        let state = SelectState::new(
            ComponentId::default(),
            options.into_iter().collect(),
            config,
        );
        Self {
            inner: Rc::new(SelectInner {
                state: RefCell::new(state),
                callbacks: RefCell::new(SelectCallbacks::default()),
                search_focus: RefCell::new(None),
            }),
        }
    }

    pub fn with_id(self, id: impl Into<ComponentId>) -> Self {
        self.inner.state.borrow_mut().set_id(id.into());
        self
    }

    pub fn on_value_change(
        self,
        handler: impl Fn(SharedString, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.inner.callbacks.borrow_mut().on_value_change = Some(Rc::new(handler));
        self
    }

    pub fn on_open_change(self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.inner.callbacks.borrow_mut().on_open_change = Some(Rc::new(handler));
        self
    }

    pub fn read<R>(&self, read: impl FnOnce(&SelectState<P>) -> R) -> R {
        read(&self.inner.state.borrow())
    }

    pub fn id(&self) -> ComponentId {
        self.read(|state| state.id().clone())
    }

    pub fn config(&self) -> SelectConfig {
        self.read(|state| state.config().clone())
    }

    pub fn opened(&self) -> bool {
        self.read(SelectState::opened)
    }

    pub fn filter(&self) -> String {
        self.read(|state| state.filter().to_string())
    }

    pub fn selection(&self) -> Vec<SharedString> {
        self.read(|state| state.selection().to_vec())
    }

    pub fn is_selected(&self, label: &str) -> bool {
        self.read(|state| state.is_selected(label))
    }

    pub fn placement(&self) -> PlacementDirection {
        self.read(SelectState::placement)
    }

    pub fn visible_options(&self) -> Vec<HighlightedOption<P>> {
        self.read(SelectState::visible_options)
    }

    pub fn select_value(&self, label: &str, window: &mut Window, cx: &mut App) -> Result<()> {
        let effects = self.inner.state.borrow_mut().select_value(label)?;
        self.dispatch(effects, window, cx);
        Ok(())
    }

    pub fn remove_selected(&self, label: &str, window: &mut Window, cx: &mut App) {
        let effects = self.inner.state.borrow_mut().remove_selected(label);
        self.dispatch(effects, window, cx);
    }

    pub fn set_opened(&self, opened: bool, window: &mut Window, cx: &mut App) {
        let effects = self.inner.state.borrow_mut().set_opened(opened);
        self.dispatch(effects, window, cx);
    }

    pub fn set_options(
        &self,
        options: impl IntoIterator<Item = SelectOption<P>>,
        window: &mut Window,
        cx: &mut App,
    ) {
        let effects = self
            .inner
            .state
            .borrow_mut()
            .set_options(options.into_iter().collect());
        self.dispatch(effects, window, cx);
    }

    pub fn set_filter(&self, filter: impl Into<String>, window: &mut Window, cx: &mut App) {
        let effects = self.inner.state.borrow_mut().set_filter(filter);
        self.dispatch(effects, window, cx);
    }

    pub fn edit_search(
        &self,
        edit: impl FnOnce(&mut SearchInputState),
        window: &mut Window,
        cx: &mut App,
    ) {
        let effects = self.inner.state.borrow_mut().edit_search(edit);
        self.dispatch(effects, window, cx);
    }

    pub fn toggle_from_trigger(&self, window: &mut Window, cx: &mut App) {
        let (effects, searchable) = {
            let mut state = self.inner.state.borrow_mut();
            (state.toggle_from_trigger(), state.config().searchable)
        };
        if searchable && effects.open_changed == Some(true) {
            let focus_handle = self.search_focus_handle(cx);
            window.focus(&focus_handle, cx);
        }
        self.dispatch(effects, window, cx);
    }

    pub fn dismiss(&self, window: &mut Window, cx: &mut App) {
        let effects = self.inner.state.borrow_mut().dismiss();
        self.dispatch(effects, window, cx);
    }

    /// Dismisses an open select when `position` falls outside the root and the panel.
    pub fn dismiss_if_outside(&self, position: &Point<Pixels>, window: &mut Window, cx: &mut App) {
        let outside = self.read(|state| state.opened() && !state.contains_point(position));
        if outside {
            tracing::debug!(id = %self.id(), "select dismissed by outside pointer");
            self.dismiss(window, cx);
        }
    }

    pub(crate) fn search_focus_handle(&self, cx: &mut App) -> FocusHandle {
        self.inner
            .search_focus
            .borrow_mut()
            .get_or_insert_with(|| cx.focus_handle())
            .clone()
    }

    pub(crate) fn record_root_bounds(&self, bounds: Bounds<Pixels>) {
        self.inner.state.borrow_mut().record_root_bounds(bounds);
    }

    pub(crate) fn record_label_width(&self, width: f32, window: &mut Window) {
        if self.inner.state.borrow_mut().record_label_width(width) {
            Self::refresh_next_frame(window);
        }
    }

    pub(crate) fn record_trigger_bounds(&self, bounds: Bounds<Pixels>, window: &mut Window) {
        let viewport_height = f32::from(window.viewport_size().height);
        if self
            .inner
            .state
            .borrow_mut()
            .record_trigger_bounds(bounds, viewport_height)
        {
            Self::refresh_next_frame(window);
        }
    }

    pub(crate) fn record_panel_bounds(&self, bounds: Bounds<Pixels>, window: &mut Window) {
        let viewport_height = f32::from(window.viewport_size().height);
        if self
            .inner
            .state
            .borrow_mut()
            .record_panel_bounds(bounds, viewport_height)
        {
            Self::refresh_next_frame(window);
        }
    }

    // Measurements arrive while the window is drawing, where a plain refresh is ignored.
    fn refresh_next_frame(window: &mut Window) {
        window.on_next_frame(|window, _cx| window.refresh());
    }

    fn dispatch(&self, effects: SelectEffects, window: &mut Window, cx: &mut App) {
        if effects.is_empty() {
            return;
        }
        window.refresh();

        let callbacks = self.inner.callbacks.borrow().clone();
        if let Some(value) = effects.value_changed
            && let Some(handler) = callbacks.on_value_change.as_ref()
        {
            (handler)(value, window, cx);
        }
        if let Some(opened) = effects.open_changed
            && let Some(handler) = callbacks.on_open_change.as_ref()
        {
            (handler)(opened, window, cx);
        }
    }
}
