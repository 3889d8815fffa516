//! The generic error alert.

use super::Notifier;
use rfd::{AsyncMessageDialog, MessageButtons, MessageLevel};
use tokio::runtime::Handle;

pub const ERROR_TITLE: &str = "Error";
pub const ERROR_BODY: &str = "Sorry, something went wrong :(";

/// Shows a native message box with a fixed title and body.
///
/// The box is driven on the runtime, so `notify_error` returns immediately.
#[derive(Debug, Clone)]
pub struct AlertNotifier {
    runtime: Handle,
}

impl AlertNotifier {
    pub fn new(runtime: Handle) -> Self {
        Self { runtime }
    }
}

impl Notifier for AlertNotifier {
    fn notify_error(&self) {
        self.runtime.spawn(async {
            AsyncMessageDialog::new()
                .set_level(MessageLevel::Error)
                .set_title(ERROR_TITLE)
                .set_description(ERROR_BODY)
                .set_buttons(MessageButtons::Ok)
                .show()
                .await;
        });
    }
}
