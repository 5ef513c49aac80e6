//! Screenshot attachment extension point.
//!
//! Flight log submissions may carry a `screenshot` part. Whether the proxy reads it at all is
//! controlled by `ATTACHMENTS_ENABLED`; when enabled, the bytes are handed to an
//! `AttachmentSink`. The shipped sink only logs and drops them: the upstream API has no
//! screenshot endpoint.

use async_trait::async_trait;
use std::sync::Arc;

use crate::server::{error::AppError, model::flight_log::Attachment};

/// Multipart field name of the screenshot part.
pub const SCREENSHOT_FIELD: &str = "screenshot";

/// Destination for accepted screenshot attachments.
#[async_trait]
pub trait AttachmentSink: Send + Sync {
    /// Takes ownership of an attachment belonging to a successfully logged flight.
    async fn accept(&self, callsign: &str, attachment: Attachment) -> Result<(), AppError>;
}

/// Sink that logs the attachment's metadata and discards the bytes.
pub struct DiscardAttachments;

#[async_trait]
impl AttachmentSink for DiscardAttachments {
    async fn accept(&self, callsign: &str, attachment: Attachment) -> Result<(), AppError> {
        tracing::info!(
            "Discarding screenshot {} ({} bytes) for flight {}",
            attachment.file_name.as_deref().unwrap_or("<unnamed>"),
            attachment.bytes.len(),
            callsign
        );
        Ok(())
    }
}

/// Attachment handling toggle and sink.
#[derive(Clone)]
pub struct AttachmentPolicy {
    /// When false, screenshot parts are skipped without being buffered.
    pub enabled: bool,
    pub sink: Arc<dyn AttachmentSink>,
}

impl AttachmentPolicy {
    /// Policy using `DiscardAttachments`.
    pub fn discard(enabled: bool) -> Self {
        Self {
            enabled,
            sink: Arc::new(DiscardAttachments),
        }
    }
}
