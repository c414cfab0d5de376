use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use serde::Serialize;
use thiserror::Error;

use crate::config;
use crate::forms::validation::{CheckoutField, ContactField, FieldValues};
use crate::shop::pricing::{Amount, PackageTier};

/// What a real order/contact endpoint may answer with. The simulated
/// submission never produces these yet.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("The request timed out. Please try again.")]
    Timeout,
    #[error("{0}")]
    Rejected(String),
    #[error("This request was already received.")]
    Duplicate,
}

#[derive(Serialize, Clone, Debug)]
pub struct OrderRequest {
    pub fields: FieldValues<CheckoutField>,
    pub tier: PackageTier,
    pub image_count: u32,
    pub total: Amount,
}

#[derive(Serialize, Clone, Debug)]
pub struct AttachmentSummary {
    pub name: String,
    pub size: u64,
    pub media_type: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct ContactRequest {
    pub fields: FieldValues<ContactField>,
    pub attachments: Vec<AttachmentSummary>,
}

async fn simulate_round_trip<T: Serialize>(kind: &str, payload: &T) -> Result<(), SubmitError> {
    match serde_json::to_string(payload) {
        Ok(body) => debug!("{} payload: {}", kind, body),
        Err(e) => debug!("{} payload not serializable: {}", kind, e),
    }
    TimeoutFuture::new(config::SUBMIT_DELAY_MS).await;
    info!("{} submitted", kind);
    Ok(())
}

pub async fn submit_order(request: &OrderRequest) -> Result<(), SubmitError> {
    simulate_round_trip("Order", request).await
}

pub async fn submit_contact(request: &ContactRequest) -> Result<(), SubmitError> {
    simulate_round_trip("Contact message", request).await
}
