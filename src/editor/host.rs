// src/editor/host.rs

/// UI shell the editor reports to
pub trait EditorHost {
    /// Transient, non-blocking notification
    fn notify_error(&mut self, message: &str);

    /// Interactive yes/no question; false means the user declined
    fn confirm(&mut self, question: &str) -> bool;

    /// The editor is done and should be dismissed
    fn close(&mut self);
}

/// Host for non-interactive callers: answers confirmations from a preset flag
/// and records what the editor asked for.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingHost {
    pub confirm_answer: bool,
    pub notifications: Vec<String>,
    pub questions: Vec<String>,
    pub closed: bool,
}

impl RecordingHost {
    pub fn confirming(answer: bool) -> Self {
        Self {
            confirm_answer: answer,
            ..Self::default()
        }
    }
}

impl EditorHost for RecordingHost {
    fn notify_error(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }

    fn confirm(&mut self, question: &str) -> bool {
        self.questions.push(question.to_string());
        self.confirm_answer
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
