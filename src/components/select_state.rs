use gpui::{Bounds, Pixels, SharedString};

use crate::error::{Result, SelectError};
use crate::id::ComponentId;

use super::option::{HighlightedOption, SelectOption, filter_options};
use super::placement::{PlacementDirection, TriggerMetrics, WidgetBounds, resolve_placement};
use super::search_input_state::SearchInputState;

pub const VALUE_SEPARATOR: &str = ", ";

/// Behavior flags fixed for the lifetime of one select.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SelectConfig {
    pub multiple: bool,
    pub searchable: bool,
    pub disabled: bool,
    pub default_value: Vec<SharedString>,
}

impl SelectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn multiple(mut self, value: bool) -> Self {
        self.multiple = value;
        self
    }

    pub fn searchable(mut self, value: bool) -> Self {
        self.searchable = value;
        self
    }

    pub fn disabled(mut self, value: bool) -> Self {
        self.disabled = value;
        self
    }

    pub fn default_value<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SharedString>,
    {
        self.default_value = values.into_iter().map(Into::into).collect();
        self
    }
}

/// What a mutation asks the handle to broadcast.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SelectEffects {
    pub value_changed: Option<SharedString>,
    pub open_changed: Option<bool>,
    pub redraw: bool,
}

impl SelectEffects {
    fn value(value: SharedString) -> Self {
        Self {
            value_changed: Some(value),
            redraw: true,
            ..Self::default()
        }
    }

    fn merge(mut self, other: Self) -> Self {
        self.value_changed = other.value_changed.or(self.value_changed);
        self.open_changed = other.open_changed.or(self.open_changed);
        self.redraw |= other.redraw;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.value_changed.is_none() && self.open_changed.is_none() && !self.redraw
    }
}

/// Layout measurements collected while painting.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SelectMetrics {
    pub trigger: Option<TriggerMetrics>,
    pub panel_height: Option<f32>,
    pub label_width: Option<f32>,
    pub bounds: WidgetBounds,
}

pub struct SelectState<P = ()> {
    id: ComponentId,
    config: SelectConfig,
    options: Vec<SelectOption<P>>,
    opened: bool,
    search: SearchInputState,
    selection: Vec<SharedString>,
    placement: PlacementDirection,
    metrics: SelectMetrics,
}

impl<P: Clone> SelectState<P> {
    pub fn new(id: ComponentId, options: Vec<SelectOption<P>>, config: SelectConfig) -> Self {
        let mut selection = Vec::with_capacity(config.default_value.len());
        for value in &config.default_value {
            if !selection.contains(value) {
                selection.push(value.clone());
            }
        }
        if !config.multiple {
            selection.truncate(1);
        }

        Self {
            id,
            config,
            options,
            opened: false,
            search: SearchInputState::default(),
            selection,
            placement: PlacementDirection::default(),
            metrics: SelectMetrics::default(),
        }
    }

    pub fn id(&self) -> &ComponentId {
        &self.id
    }

    pub(crate) fn set_id(&mut self, id: ComponentId) {
        self.id = id;
    }

    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    pub fn options(&self) -> &[SelectOption<P>] {
        &self.options
    }

    pub fn opened(&self) -> bool {
        self.opened
    }

    pub fn filter(&self) -> &str {
        &self.search.value
    }

    pub fn search(&self) -> &SearchInputState {
        &self.search
    }

    pub fn selection(&self) -> &[SharedString] {
        &self.selection
    }

    pub fn is_selected(&self, label: &str) -> bool {
        self.selection.iter().any(|value| value.as_ref() == label)
    }

    pub fn placement(&self) -> PlacementDirection {
        self.placement
    }

    pub fn metrics(&self) -> &SelectMetrics {
        &self.metrics
    }

    /// The value string reported to `on_value_change` for the current selection.
    pub fn joined_value(&self) -> SharedString {
        self.selection
            .iter()
            .map(|value| value.as_ref())
            .collect::<Vec<&str>>()
            .join(VALUE_SEPARATOR)
            .into()
    }

    pub fn visible_options(&self) -> Vec<HighlightedOption<P>> {
        filter_options(&self.options, self.filter())
    }

    pub fn select_value(&mut self, label: &str) -> Result<SelectEffects> {
        let Some(option) = self.options.iter().find(|option| option.label.as_ref() == label)
        else {
            return Err(SelectError::UnknownOption {
                id: self.id.as_str().to_string().into(),
                label: label.to_string().into(),
            });
        };
        let label = option.label.clone();

        if self.config.multiple {
            if let Some(index) = self.selection.iter().position(|value| *value == label) {
                self.selection.remove(index);
            } else {
                self.selection.push(label);
            }
            tracing::debug!(id = %self.id, selection = ?self.selection, "select toggled value");
            return Ok(SelectEffects::value(self.joined_value()));
        }

        self.selection = vec![label.clone()];
        tracing::debug!(id = %self.id, %label, "select committed value");
        Ok(SelectEffects::value(label).merge(self.set_opened(false)))
    }

    pub fn remove_selected(&mut self, label: &str) -> SelectEffects {
        self.selection.retain(|value| value.as_ref() != label);
        tracing::debug!(id = %self.id, %label, "select removed value");
        SelectEffects::value(self.joined_value())
    }

    pub fn set_opened(&mut self, opened: bool) -> SelectEffects {
        if self.opened == opened {
            return SelectEffects::default();
        }
        self.opened = opened;
        self.search.clear();
        if !opened {
            self.metrics.panel_height = None;
            self.metrics.bounds.panel = None;
        }
        tracing::debug!(id = %self.id, opened, "select open state changed");
        SelectEffects {
            open_changed: Some(opened),
            redraw: true,
            ..SelectEffects::default()
        }
    }

    /// Replaces the option set. The selection is kept as is, including labels
    /// that are no longer offered.
    pub fn set_options(&mut self, options: Vec<SelectOption<P>>) -> SelectEffects {
        tracing::debug!(id = %self.id, count = options.len(), "select options replaced");
        self.options = options;
        self.redraw()
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) -> SelectEffects {
        let filter = filter.into();
        if self.search.value == filter {
            return SelectEffects::default();
        }
        self.search.replace(filter);
        self.redraw()
    }

    /// Applies an in-place edit to the search field and reports whether the filter changed.
    pub fn edit_search(&mut self, edit: impl FnOnce(&mut SearchInputState)) -> SelectEffects {
        let before = self.search.clone();
        edit(&mut self.search);
        if self.search == before {
            SelectEffects::default()
        } else {
            self.redraw()
        }
    }

    pub fn toggle_from_trigger(&mut self) -> SelectEffects {
        if self.config.disabled {
            return SelectEffects::default();
        }
        self.set_opened(!self.opened)
    }

    /// Closes after a pointer-down outside the widget.
    pub fn dismiss(&mut self) -> SelectEffects {
        let had_filter = !self.search.is_empty();
        let effects = self.set_opened(false);
        self.search.clear();
        if had_filter {
            effects.merge(self.redraw())
        } else {
            effects
        }
    }

    pub fn contains_point(&self, position: &gpui::Point<Pixels>) -> bool {
        self.metrics.bounds.contains(position)
    }

    pub fn record_root_bounds(&mut self, bounds: Bounds<Pixels>) {
        self.metrics.bounds.root = Some(bounds);
    }

    pub fn record_label_width(&mut self, width: f32) -> bool {
        let changed = self.metrics.label_width != Some(width);
        self.metrics.label_width = Some(width);
        changed
    }

    pub fn record_trigger_bounds(&mut self, bounds: Bounds<Pixels>, viewport_height: f32) -> bool {
        self.metrics.trigger = Some(TriggerMetrics::from_bounds(bounds));
        self.update_placement(viewport_height)
    }

    pub fn record_panel_bounds(&mut self, bounds: Bounds<Pixels>, viewport_height: f32) -> bool {
        if !self.opened {
            return false;
        }
        self.metrics.bounds.panel = Some(bounds);
        self.metrics.panel_height = Some(f32::from(bounds.size.height));
        self.update_placement(viewport_height)
    }

    /// Recomputes the open direction; returns true when it flipped.
    fn update_placement(&mut self, viewport_height: f32) -> bool {
        if !self.opened {
            return false;
        }
        let (Some(trigger), Some(panel_height)) = (self.metrics.trigger, self.metrics.panel_height)
        else {
            return false;
        };

        let next = resolve_placement(trigger, viewport_height, panel_height);
        if next == self.placement {
            return false;
        }
        tracing::trace!(
            id = %self.id,
            placement = ?next,
            trigger_top = trigger.top,
            trigger_bottom = trigger.bottom,
            panel_height,
            viewport_height,
            "select placement changed"
        );
        self.placement = next;
        true
    }

    fn redraw(&self) -> SelectEffects {
        SelectEffects {
            redraw: true,
            ..SelectEffects::default()
        }
    }
}
