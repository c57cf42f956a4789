//! Input draft for the active conversation view.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

/// Local, ephemeral text the user is typing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposerState {
    pub draft: String,
}

impl ComposerState {
    /// Replace the draft with the latest input value.
    pub fn update_input(&mut self, value: String) {
        self.draft = value;
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    /// Take the trimmed draft for sending and clear the input.
    ///
    /// Returns `None` and keeps the draft when it is blank.
    pub fn submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        let text = self.draft.trim().to_owned();
        self.draft.clear();
        Some(text)
    }
}

/// Whether a keydown in the input should submit the draft.
///
/// Enter submits and Shift+Enter does not. Nothing submits while an input
/// method is still composing, because the Enter keydown commits the pending
/// syllable rather than ending the message.
#[must_use]
pub fn should_submit(key: &str, shift: bool, composing: bool) -> bool {
    !composing && key == "Enter" && !shift
}
