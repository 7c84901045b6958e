use anyhow::Context as _;
use aws_sdk_sesv2::Client as SesClient;
use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};

use crate::domain::repository::OrderMailer;
use crate::domain::types::OrderEmail;
use crate::error::WebServiceError;

/// Order mail transport backed by Amazon SES.
#[derive(Clone)]
pub struct SesMailer {
    pub client: SesClient,
    pub from: String,
}

impl OrderMailer for SesMailer {
    async fn send(&self, email: &OrderEmail) -> Result<(), WebServiceError> {
        let subject = Content::builder()
            .data(&email.subject)
            .build()
            .context("build email subject")?;
        let body = Body::builder()
            .text(
                Content::builder()
                    .data(&email.body)
                    .build()
                    .context("build email body")?,
            )
            .build();
        let message = Message::builder().subject(subject).body(body).build();

        self.client
            .send_email()
            .from_email_address(&self.from)
            .destination(Destination::builder().to_addresses(&email.to).build())
            .content(EmailContent::builder().simple(message).build())
            .send()
            .await
            .context("send order email")?;

        tracing::info!(to = %email.to, "order confirmation sent");
        Ok(())
    }
}
