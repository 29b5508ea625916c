//! Notification envelope formatting and delivery.

use std::fmt::Display;

use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use serde::Serialize;
use tracing::info;

use crate::places::PlaceDetails;

pub const SUBJECT: &str = "Restaurant Recommendation";
const TITLE: &str = "Restaurant Recommendation from the New Yorker";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationEnvelope {
    pub topic: String,
    pub subject: String,
    pub body: String,
}

/// Compose the notification for `details`. Values are interpolated verbatim;
/// absent optional fields render as an empty string.
pub fn format_envelope(topic: &str, details: &PlaceDetails) -> NotificationEnvelope {
    let body = format!(
        "{TITLE}\n\
         \n\
         Name: {}\n\
         Address: {}\n\
         Price Level: {}\n\
         Rating: {}\n\
         Map: {}\n\
         New Yorker Url: {}\n\
         Website: {}",
        details.name,
        details.formatted_address,
        or_empty(details.price_level),
        or_empty(details.rating),
        or_empty(details.maps_url.as_deref()),
        details.source_article_url,
        or_empty(details.website.as_deref()),
    );

    NotificationEnvelope {
        topic: topic.to_string(),
        subject: SUBJECT.to_string(),
        body,
    }
}

fn or_empty<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Fire-and-forget delivery of one envelope. Returns the backend's message id
/// when it reports one.
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, envelope: &NotificationEnvelope) -> Result<Option<String>>;
}

pub struct SnsPublisher {
    client: aws_sdk_sns::Client,
}

impl SnsPublisher {
    pub async fn from_region(region: &str) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;
        Self {
            client: aws_sdk_sns::Client::new(&config),
        }
    }
}

#[async_trait]
impl Publisher for SnsPublisher {
    async fn publish(&self, envelope: &NotificationEnvelope) -> Result<Option<String>> {
        let output = self
            .client
            .publish()
            .topic_arn(&envelope.topic)
            .subject(&envelope.subject)
            .message(&envelope.body)
            .send()
            .await
            .with_context(|| format!("SNS publish to {} failed", envelope.topic))?;
        Ok(output.message_id().map(str::to_string))
    }
}

/// Logs the envelope instead of delivering it (`run --dry-run`).
pub struct LogPublisher;

#[async_trait]
impl Publisher for LogPublisher {
    async fn publish(&self, envelope: &NotificationEnvelope) -> Result<Option<String>> {
        info!(
            topic = %envelope.topic,
            subject = %envelope.subject,
            "Dry run, not publishing:\n{}",
            envelope.body
        );
        Ok(None)
    }
}
