pub use crate::components::{
    HighlightSegment, HighlightedLabel, HighlightedOption, HighlightedText, Icon,
    PlacementDirection, SearchInput, Select, SelectConfig, SelectContent, SelectHandle, SelectItem,
    SelectLabel, SelectOption, SelectTrigger, SelectValue,
};
pub use crate::error::{Result, SelectError};
pub use crate::theme::{ColorScheme, SelectTokens, Theme};
pub use crate::{CalmApplication, CalmProvider};
