use std::sync::Once;

use gpui::{App, KeyBinding, actions};

pub const SEARCH_KEY_CONTEXT: &str = "calmui_select_search";

actions!(
    calmui_select_search,
    [
        MoveLeft,
        MoveRight,
        MoveHome,
        MoveEnd,
        DeleteBackward,
        DeleteForward,
    ]
);

static BINDINGS_INIT: Once = Once::new();

pub fn ensure_search_keybindings(cx: &mut App) {
    BINDINGS_INIT.call_once(|| {
        cx.bind_keys(search_bindings());
    });
}

fn search_bindings() -> Vec<KeyBinding> {
    let context = Some(SEARCH_KEY_CONTEXT);
    vec![
        KeyBinding::new("left", MoveLeft, context),
        KeyBinding::new("right", MoveRight, context),
        KeyBinding::new("home", MoveHome, context),
        KeyBinding::new("end", MoveEnd, context),
        KeyBinding::new("backspace", DeleteBackward, context),
        KeyBinding::new("delete", DeleteForward, context),
    ]
}
