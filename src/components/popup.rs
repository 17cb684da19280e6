use gpui::{
    AnyElement, Corner, InteractiveElement, IntoElement, ParentElement, Pixels, Styled, anchored,
    deferred, div, point, px,
};

use crate::id::ComponentId;

use super::placement::PlacementDirection;

/// Paint order of the panel relative to other deferred layers.
pub const PANEL_PRIORITY: usize = 24;

/// Where the floating panel hangs off its positioned parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorPlacement {
    pub direction: PlacementDirection,
    pub offset_x: Pixels,
    pub offset_y: Pixels,
    pub snap_margin: Pixels,
}

/// Zero-height host pinned to the top or bottom edge of the parent, holding
/// `floating` in a deferred anchored layer so it paints above siblings.
pub fn anchored_host(id: &ComponentId, anchor: AnchorPlacement, floating: AnyElement) -> AnyElement {
    let offset_y = f32::from(anchor.offset_y).max(0.0);
    let (anchor_corner, offset) = match anchor.direction {
        PlacementDirection::Upward => (Corner::BottomLeft, point(px(0.0), px(-offset_y))),
        PlacementDirection::Downward => (Corner::TopLeft, point(px(0.0), px(offset_y))),
    };
    let anchored_panel = anchored()
        .anchor(anchor_corner)
        .offset(offset)
        .snap_to_window_with_margin(anchor.snap_margin)
        .child(floating);

    let host = match anchor.direction {
        PlacementDirection::Upward => div().id(id.slot("anchor-host")).absolute().top_0(),
        PlacementDirection::Downward => div().id(id.slot("anchor-host")).absolute().bottom_0(),
    };
    host.left(anchor.offset_x)
        .w(px(0.0))
        .h(px(0.0))
        .child(deferred(anchored_panel).priority(PANEL_PRIORITY))
        .into_any_element()
}
