pub mod paypal;

use async_trait::async_trait;

pub use paypal::PayPalGateway;

/// Third-party checkout, reduced to the one thing the views need: run an
/// order for the given amount and come back with the captured order id.
/// The provider's own protocol stays behind this seam.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// `amount` is a decimal string, e.g. "40" for a $40 fee.
    async fn checkout(&self, amount: &str) -> anyhow::Result<String>;
}
