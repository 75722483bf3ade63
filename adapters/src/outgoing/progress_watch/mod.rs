use tokio::sync::watch::Sender;

use domain::progress::UploadProgress;
use imgconsole_application::ports::outgoing::progress::ProgressSinkPort;

/// Broadcasts upload progress over a tokio watch channel so the terminal
/// progress bar can observe it while the submission task runs.
pub struct WatchProgressAdapter {
    tx: Sender<UploadProgress>,
}

impl WatchProgressAdapter {
    #[must_use]
    pub fn new(tx: Sender<UploadProgress>) -> Self {
        Self { tx }
    }
}

impl ProgressSinkPort for WatchProgressAdapter {
    fn report(&self, percent: u8) {
        self.tx.send(UploadProgress::Sending(percent)).ok();
    }

    fn finish(&self) {
        self.tx.send(UploadProgress::Done).ok();
    }
}
