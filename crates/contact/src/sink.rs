use std::time::Duration;

use async_trait::async_trait;

use crate::ContactMessage;

/// Delivery mechanism a valid message is handed to.
///
/// Opaque to the core: no transport, authentication or retry policy is
/// assumed. The sink eventually resolves to success or a human-readable
/// failure reason.
#[async_trait]
pub trait MessageSink: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<(), String>;
}

/// Sink that resolves after an artificial delay instead of touching the
/// network, mirroring the site's out-of-the-box behavior. Can be configured
/// to fail with a fixed reason to exercise the failure path.
pub struct SimulatedSink {
    delay: Duration,
    fail_with: Option<String>,
}

impl SimulatedSink {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            fail_with: None,
        }
    }

    pub fn failing(delay: Duration, reason: impl Into<String>) -> Self {
        Self {
            delay,
            fail_with: Some(reason.into()),
        }
    }
}

#[async_trait]
impl MessageSink for SimulatedSink {
    async fn send(&self, message: &ContactMessage) -> Result<(), String> {
        tokio::time::sleep(self.delay).await;

        match &self.fail_with {
            Some(reason) => Err(reason.clone()),
            None => {
                tracing::info!(
                    name = %message.name,
                    email = %message.email,
                    "contact message delivered (simulated)"
                );
                Ok(())
            }
        }
    }
}
