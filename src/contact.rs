/// Delay between the pointer leaving a preview and the preview hiding.
pub const PREVIEW_HIDE_DELAY_MS: f64 = 140.0;
/// How long "Copied!" stays up after a successful write.
pub const COPIED_RESET_MS: f64 = 1600.0;

pub const COPIED_LABEL: &str = "Copied!";
pub const COPY_PROMPT_LABEL: &str = "Copy the email address";

/// What the email preview says about the last copy.
///
/// Only a successful clipboard write turns the confirmation on. A denied
/// write leaves the preview unchanged and is otherwise swallowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    copied: bool,
}

impl CopyFeedback {
    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn write_finished(&mut self, succeeded: bool) {
        if succeeded {
            self.copied = true;
        } else {
            log::debug!("clipboard write denied");
        }
    }

    /// The confirmation window ran out.
    pub fn reset_elapsed(&mut self) {
        self.copied = false;
    }

    pub fn preview_hidden(&mut self) {
        self.copied = false;
    }

    pub fn label(&self) -> &'static str {
        if self.copied {
            COPIED_LABEL
        } else {
            COPY_PROMPT_LABEL
        }
    }
}
