//! The uncommitted prompt line.

/// Text the user is currently composing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    value: String,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Append a typed character.
    pub fn push(&mut self, ch: char) {
        self.value.push(ch);
    }

    /// Delete the last character, if any.
    pub fn backspace(&mut self) {
        self.value.pop();
    }

    /// Overwrite the whole buffer (history recall).
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Take the current value, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.value)
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}
