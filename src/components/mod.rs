mod highlight;
mod highlighted_text;
mod icon;
mod interaction_adapter;
mod option;
mod placement;
mod popup;
mod search_actions;
mod search_input;
mod search_input_state;
mod select;
mod select_content;
mod select_handle;
mod select_item;
mod select_label;
mod select_state;
mod select_trigger;
mod select_value;
mod utils;

pub use highlight::{HighlightSegment, contains_ignore_case, highlight};
pub use highlighted_text::HighlightedText;
pub use icon::Icon;
pub use option::{HighlightedLabel, HighlightedOption, SelectOption, filter_options};
pub use placement::{PlacementDirection, TriggerMetrics, WidgetBounds, resolve_placement};
pub use search_actions::SEARCH_KEY_CONTEXT;
pub use search_input::SearchInput;
pub use search_input_state::SearchInputState;
pub use select::Select;
pub use select_content::SelectContent;
pub use select_handle::{OpenChangeHandler, OptionsRenderer, SelectHandle, ValueChangeHandler};
pub use select_item::SelectItem;
pub use select_label::SelectLabel;
pub use select_state::{SelectConfig, SelectEffects, SelectMetrics, SelectState, VALUE_SEPARATOR};
pub use select_trigger::SelectTrigger;
pub use select_value::SelectValue;

#[cfg(test)]
mod test_component_smoke;
#[cfg(test)]
mod test_event_wiring;
#[cfg(test)]
mod test_state_logic;
