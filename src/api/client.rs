use super::UpdateResponse;
use anyhow::Result;
use async_trait::async_trait;

/// Sends one dynamic DNS update for a fixed record.
///
/// An `Err` means no HTTP response was received at all. Provider-side rejections
/// come back as an `Ok` response and are classified by the caller.
#[async_trait]
pub trait DnsUpdateClient: Send + Sync {
    async fn send_update(&self) -> Result<UpdateResponse>;
}
