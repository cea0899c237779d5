pub const REMOVE_AFTER_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    pub fn class(self) -> &'static str {
        match self {
            FeedbackKind::Success => "form-message success",
            FeedbackKind::Error => "form-message error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormFeedback {
    pub seq: u32,
    pub kind: FeedbackKind,
    pub text: &'static str,
}

/// Owns the single feedback slot under the contact form. Each shown
/// message gets a sequence number; the removal timer keeps the number
/// it was scheduled with, so a timer that outlives its message never
/// deletes a replacement.
#[derive(Default)]
pub struct FeedbackBoard {
    next_seq: u32,
    current: Option<FormFeedback>,
}

impl FeedbackBoard {
    /// Replaces any existing message and returns the sequence number
    /// the caller should hand to the removal timer.
    pub fn show(&mut self, kind: FeedbackKind, text: &'static str) -> u32 {
        self.next_seq += 1;
        self.current = Some(FormFeedback {
            seq: self.next_seq,
            kind,
            text,
        });
        self.next_seq
    }

    /// Removes the current message only if it is still the instance the
    /// timer was scheduled for.
    pub fn expire(&mut self, seq: u32) {
        if self.current.as_ref().map(|message| message.seq) == Some(seq) {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&FormFeedback> {
        self.current.as_ref()
    }
}
