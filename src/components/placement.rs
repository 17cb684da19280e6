use gpui::{Bounds, Pixels, Point};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PlacementDirection {
    #[default]
    Downward,
    Upward,
}

/// Vertical extent of the trigger in window coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TriggerMetrics {
    pub top: f32,
    pub bottom: f32,
}

impl TriggerMetrics {
    pub fn from_bounds(bounds: Bounds<Pixels>) -> Self {
        let top = f32::from(bounds.origin.y);
        Self {
            top,
            bottom: top + f32::from(bounds.size.height),
        }
    }
}

/// Opens upward only when the panel does not fit below the trigger and does fit above it.
pub fn resolve_placement(
    trigger: TriggerMetrics,
    viewport_height: f32,
    panel_height: f32,
) -> PlacementDirection {
    let space_below = viewport_height - trigger.bottom;
    let space_above = trigger.top;
    if space_below < panel_height && space_above > panel_height {
        PlacementDirection::Upward
    } else {
        PlacementDirection::Downward
    }
}

/// Areas that belong to the widget: the root row and, while open, the panel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WidgetBounds {
    pub root: Option<Bounds<Pixels>>,
    pub panel: Option<Bounds<Pixels>>,
}

impl WidgetBounds {
    pub fn contains(&self, position: &Point<Pixels>) -> bool {
        [self.root, self.panel]
            .into_iter()
            .flatten()
            .any(|bounds| bounds.contains(position))
    }
}
