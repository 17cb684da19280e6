use gpui::{
    Component, InteractiveElement, IntoElement, MouseButton, ParentElement, Refineable,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div,
};

use crate::provider::CalmProvider;

use super::search_actions::{
    DeleteBackward, DeleteForward, MoveEnd, MoveHome, MoveLeft, MoveRight, SEARCH_KEY_CONTEXT,
    ensure_search_keybindings,
};
use super::search_input_state::SearchInputState;
use super::select_handle::SelectHandle;

/// Single-line query field bound to a select's filter.
pub struct SearchInput<P: Clone + 'static = ()> {
    handle: SelectHandle<P>,
    placeholder: SharedString,
    style: gpui::StyleRefinement,
}

impl<P: Clone + 'static> SearchInput<P> {
    pub fn new(handle: &SelectHandle<P>) -> Self {
        Self {
            handle: handle.clone(),
            placeholder: SharedString::from("Search"),
            style: gpui::StyleRefinement::default(),
        }
    }

    pub fn placeholder(mut self, value: impl Into<SharedString>) -> Self {
        self.placeholder = value.into();
        self
    }

    fn edit_action<A: gpui::Action>(
        handle: &SelectHandle<P>,
        edit: fn(&mut SearchInputState),
    ) -> impl Fn(&A, &mut Window, &mut gpui::App) + 'static {
        let handle = handle.clone();
        move |_: &A, window, cx| handle.edit_search(edit, window, cx)
    }
}

impl<P: Clone + 'static> RenderOnce for SearchInput<P> {
    fn render(self, window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        ensure_search_keybindings(cx);
        let theme = CalmProvider::theme(cx);
        let tokens = &theme.select;
        let id = self.handle.id();
        let focus_handle = self.handle.search_focus_handle(cx);
        let focused = focus_handle.is_focused(window);
        let search = self.handle.read(|state| state.search().clone());

        let mut content = div().flex().items_center().whitespace_nowrap();
        if search.is_empty() && !focused {
            content = content
                .text_color(tokens.placeholder)
                .child(self.placeholder.clone());
        } else {
            let (before, after) = search.split_at_caret();
            content = content
                .text_color(tokens.fg)
                .child(before.to_string());
            if focused {
                content = content.child(
                    div()
                        .flex_none()
                        .w(tokens.search_caret_width)
                        .h(tokens.text_size)
                        .bg(tokens.fg),
                );
            }
            content = content.child(after.to_string());
        }

        let mut root = div()
            .id(id.slot("search"))
            .key_context(SEARCH_KEY_CONTEXT)
            .track_focus(&focus_handle)
            .flex_1()
            .min_w_0()
            .overflow_hidden()
            .text_size(tokens.text_size)
            .cursor_text()
            .child(content)
            .on_mouse_down(MouseButton::Left, {
                let focus_handle = focus_handle.clone();
                move |_, window, cx| {
                    window.focus(&focus_handle, cx);
                    cx.stop_propagation();
                }
            })
            .on_click(|_, _, cx| cx.stop_propagation())
            .on_action(Self::edit_action::<MoveLeft>(&self.handle, SearchInputState::move_left))
            .on_action(Self::edit_action::<MoveRight>(&self.handle, SearchInputState::move_right))
            .on_action(Self::edit_action::<MoveHome>(&self.handle, SearchInputState::move_home))
            .on_action(Self::edit_action::<MoveEnd>(&self.handle, SearchInputState::move_end))
            .on_action(Self::edit_action::<DeleteBackward>(&self.handle, |state| {
                state.delete_backward();
            }))
            .on_action(Self::edit_action::<DeleteForward>(&self.handle, |state| {
                state.delete_forward();
            }))
            .on_key_down({
                let handle = self.handle.clone();
                move |event, window, cx| {
                    let modifiers = &event.keystroke.modifiers;
                    if modifiers.control || modifiers.platform || modifiers.function || modifiers.alt
                    {
                        return;
                    }
                    let Some(text) = event.keystroke.key_char.as_ref() else {
                        return;
                    };
                    if text.chars().any(char::is_control) {
                        return;
                    }
                    let text = text.clone();
                    handle.edit_search(
                        move |state| {
                            state.insert_text(&text);
                        },
                        window,
                        cx,
                    );
                    cx.stop_propagation();
                }
            });
        root.style().refine(&self.style);

        root
    }
}

impl<P: Clone + 'static> IntoElement for SearchInput<P> {
    type Element = Component<Self>;

    fn into_element(self) -> Self::Element {
        Component::new(self)
    }
}

impl<P: Clone + 'static> Styled for SearchInput<P> {
    fn style(&mut self) -> &mut gpui::StyleRefinement {
        &mut self.style
    }
}
