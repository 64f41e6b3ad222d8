use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::time::Instant;
use vivo_login::{Notice, Notifier, NotifyError, NotifyResult};

/// Keeps every notice with the (paused) time it arrived at.
#[derive(Default)]
pub struct RecordingNotifier {
    received: Mutex<Vec<(Instant, Notice)>>,
    pub fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.received.lock().iter().map(|(_, n)| n.clone()).collect()
    }

    pub fn received(&self) -> Vec<(Instant, Notice)> {
        self.received.lock().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, notice: Notice) -> NotifyResult<()> {
        self.received.lock().push((Instant::now(), notice));
        if self.fail {
            return Err(NotifyError::Unavailable);
        }
        Ok(())
    }
}
