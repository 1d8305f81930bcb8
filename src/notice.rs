//! Toast notifications: success / error messages that expire on their own.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    pub remaining_ticks: u32,
}

/// Newest notice last. Every notice has the same lifetime.
pub struct NoticeBoard {
    notices: Vec<Notice>,
    lifetime_ticks: u32,
}

impl NoticeBoard {
    pub fn new(lifetime_ticks: u32) -> Self {
        Self {
            notices: Vec::new(),
            lifetime_ticks,
        }
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(text.into(), NoticeKind::Success);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(text.into(), NoticeKind::Error);
    }

    fn push(&mut self, text: String, kind: NoticeKind) {
        self.notices.push(Notice {
            text,
            kind,
            remaining_ticks: self.lifetime_ticks,
        });
    }

    pub fn tick(&mut self, delta_ticks: u32) {
        for n in &mut self.notices {
            n.remaining_ticks = n.remaining_ticks.saturating_sub(delta_ticks);
        }
        self.notices.retain(|n| n.remaining_ticks > 0);
    }

    /// Close the newest notice. Returns false when there was none.
    pub fn dismiss_latest(&mut self) -> bool {
        self.notices.pop().is_some()
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.notices.last()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.notices.len()
    }
}
