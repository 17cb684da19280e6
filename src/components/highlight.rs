use std::ops::Range;

use gpui::SharedString;

/// One run of a label, either matching the active search or not.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HighlightSegment {
    pub text: SharedString,
    pub matched: bool,
}

impl HighlightSegment {
    pub fn plain(text: impl Into<SharedString>) -> Self {
        Self {
            text: text.into(),
            matched: false,
        }
    }

    pub fn marked(text: impl Into<SharedString>) -> Self {
        Self {
            text: text.into(),
            matched: true,
        }
    }
}

/// Splits `label` around every case-insensitive occurrence of `search`.
///
/// The search text is matched literally. Segments keep the label's original
/// casing and order; empty runs between adjacent matches are dropped.
pub fn highlight(label: &str, search: Option<&str>) -> Vec<HighlightSegment> {
    let Some(search) = search.filter(|value| !value.is_empty()) else {
        return vec![HighlightSegment::plain(label.to_string())];
    };

    let ranges = match_ranges(label, search);
    if ranges.is_empty() {
        return vec![HighlightSegment::plain(label.to_string())];
    }

    let mut segments = Vec::with_capacity(ranges.len() * 2 + 1);
    let mut cursor = 0;
    for range in ranges {
        if range.start > cursor {
            segments.push(HighlightSegment::plain(label[cursor..range.start].to_string()));
        }
        segments.push(HighlightSegment::marked(label[range.clone()].to_string()));
        cursor = range.end;
    }
    if cursor < label.len() {
        segments.push(HighlightSegment::plain(label[cursor..].to_string()));
    }
    segments
}

/// Case-insensitive literal substring test shared by filtering and highlighting.
///
/// Both sides are lowercased as whole strings, so context-sensitive folds such as
/// a word-final `Σ` behave exactly like `str::to_lowercase`.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Byte ranges of `haystack` covering the non-overlapping occurrences of
/// `needle` in its lowercased form, left to right.
pub(crate) fn match_ranges(haystack: &str, needle: &str) -> Vec<Range<usize>> {
    let needle = needle.to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let folded = FoldedText::new(haystack);
    let mut ranges: Vec<Range<usize>> = Vec::new();
    for (lowered_start, matched) in folded.lowered.match_indices(needle.as_str()) {
        let first = folded.source_of(lowered_start);
        let last = folded.source_of(lowered_start + matched.len() - 1);
        let mut range = first.start..last.end;
        if let Some(previous) = ranges.last() {
            range.start = range.start.max(previous.end);
        }
        if !range.is_empty() {
            ranges.push(range);
        }
    }
    ranges
}

/// The lowercased text plus, for every lowered byte, the source char it came from.
struct FoldedText {
    lowered: String,
    sources: Vec<Range<usize>>,
}

impl FoldedText {
    fn new(text: &str) -> Self {
        // Per-char lowering has the same byte length as whole-string lowering;
        // only the choice between `σ` and `ς` depends on context.
        let lowered = text.to_lowercase();
        let mut sources = Vec::with_capacity(lowered.len());
        for (start, ch) in text.char_indices() {
            let width = ch.to_lowercase().map(char::len_utf8).sum::<usize>();
            let source = start..start + ch.len_utf8();
            sources.extend(std::iter::repeat_n(source, width));
        }
        Self { lowered, sources }
    }

    fn source_of(&self, lowered_byte: usize) -> Range<usize> {
        self.sources[lowered_byte].clone()
    }
}
