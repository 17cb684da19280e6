use gpui::SharedString;

use super::highlight::{HighlightSegment, contains_ignore_case, highlight};

/// A selectable entry. The label identifies the option; the payload travels
/// with it untouched so custom renderers can show icons, descriptions, etc.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SelectOption<P = ()> {
    pub label: SharedString,
    pub payload: P,
}

impl SelectOption<()> {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            payload: (),
        }
    }
}

impl<P> SelectOption<P> {
    pub fn with_payload(label: impl Into<SharedString>, payload: P) -> Self {
        Self {
            label: label.into(),
            payload,
        }
    }

    pub fn matches(&self, filter: &str) -> bool {
        contains_ignore_case(&self.label, filter)
    }
}

/// Display form of a label: the original text plus the segments to paint.
///
/// Only [`HighlightedLabel::original`] may flow back into selection state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HighlightedLabel {
    original: SharedString,
    segments: Vec<HighlightSegment>,
}

impl HighlightedLabel {
    pub fn new(label: SharedString, search: &str) -> Self {
        let segments = highlight(&label, Some(search));
        Self {
            original: label,
            segments,
        }
    }

    pub fn original(&self) -> &SharedString {
        &self.original
    }

    pub fn segments(&self) -> &[HighlightSegment] {
        &self.segments
    }

    pub fn has_match(&self) -> bool {
        self.segments.iter().any(|segment| segment.matched)
    }
}

/// An option that survived filtering, ready for a custom renderer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HighlightedOption<P = ()> {
    pub label: HighlightedLabel,
    pub payload: P,
}

/// Keeps the options whose label contains `filter`, in their original order,
/// and pairs each with its highlighted label.
pub fn filter_options<P: Clone>(
    options: &[SelectOption<P>],
    filter: &str,
) -> Vec<HighlightedOption<P>> {
    options
        .iter()
        .filter(|option| option.matches(filter))
        .map(|option| HighlightedOption {
            label: HighlightedLabel::new(option.label.clone(), filter),
            payload: option.payload.clone(),
        })
        .collect()
}
