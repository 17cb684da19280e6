/// Editing model behind the search field: the query text and a caret counted in chars.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SearchInputState {
    pub value: String,
    pub caret: usize,
}

impl SearchInputState {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let caret = value.chars().count();
        Self { value, caret }
    }

    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replaces the whole query and parks the caret at its end.
    pub fn replace(&mut self, value: impl Into<String>) {
        *self = Self::new(value);
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.caret = 0;
    }

    pub fn move_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.caret = (self.caret + 1).min(self.len());
    }

    pub fn move_home(&mut self) {
        self.caret = 0;
    }

    pub fn move_end(&mut self) {
        self.caret = self.len();
    }

    pub fn insert_text(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let byte = Self::byte_index_at_char(&self.value, self.caret);
        self.value.insert_str(byte, text);
        self.caret += text.chars().count();
        true
    }

    pub fn delete_backward(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        self.remove_char_at(self.caret - 1);
        self.caret -= 1;
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        if self.caret >= self.len() {
            return false;
        }
        self.remove_char_at(self.caret);
        true
    }

    /// Text before and after the caret, for painting.
    pub fn split_at_caret(&self) -> (&str, &str) {
        self.value
            .split_at(Self::byte_index_at_char(&self.value, self.caret))
    }

    fn remove_char_at(&mut self, char_index: usize) {
        let start = Self::byte_index_at_char(&self.value, char_index);
        let end = Self::byte_index_at_char(&self.value, char_index + 1);
        self.value.replace_range(start..end, "");
    }

    fn byte_index_at_char(value: &str, char_index: usize) -> usize {
        value
            .char_indices()
            .nth(char_index)
            .map(|(index, _)| index)
            .unwrap_or(value.len())
    }
}
