use crate::server::{
    error::AppError,
    model::flight_log::FlightLogSubmission,
    service::{attachment::AttachmentPolicy, upstream::UpstreamClient},
};

/// Service submitting flight logs upstream.
///
/// Forwards the submission to the upstream create endpoint and, once the upstream accepted
/// it, hands any screenshot to the configured attachment sink.
pub struct FlightLogService<'a> {
    upstream: &'a UpstreamClient,
    attachments: &'a AttachmentPolicy,
}

impl<'a> FlightLogService<'a> {
    pub fn new(upstream: &'a UpstreamClient, attachments: &'a AttachmentPolicy) -> Self {
        Self {
            upstream,
            attachments,
        }
    }

    /// Logs a flight.
    ///
    /// The upstream response body is not relayed; the caller answers with its own envelope.
    ///
    /// # Arguments
    /// - `submission` - Flight log with all required fields present
    ///
    /// # Returns
    /// - `Ok(())` - Upstream accepted the entry
    /// - `Err(AppError::UpstreamErr(_))` - Upstream unavailable; the attachment is dropped
    pub async fn log(&self, mut submission: FlightLogSubmission) -> Result<(), AppError> {
        self.upstream.submit_flight_log(&submission).await?;

        tracing::info!(
            "Logged flight {} {} -> {}",
            submission.callsign,
            submission.origin,
            submission.destination
        );

        if let Some(attachment) = submission.attachment.take() {
            if self.attachments.enabled {
                self.attachments
                    .sink
                    .accept(&submission.callsign, attachment)
                    .await?;
            }
        }

        Ok(())
    }
}
