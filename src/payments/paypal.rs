use anyhow::Context;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::json;

use super::PaymentGateway;

const CURRENCY_CODE: &str = "USD";

/// PayPal Orders v2 gateway. Creates a single-purchase-unit order for the
/// doctor's fee and captures it immediately; the captured order id goes
/// back to the backend for authoritative confirmation.
pub struct PayPalGateway {
    client_id: String,
    secret: String,
    base_url: String,
    client: reqwest::Client,
}

impl PayPalGateway {
    pub fn new(client_id: String, secret: String, base_url: String) -> Self {
        Self {
            client_id,
            secret,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    async fn access_token(&self) -> anyhow::Result<String> {
        anyhow::ensure!(
            !self.client_id.is_empty(),
            "PAYPAL_CLIENT_ID is not configured"
        );

        let basic = STANDARD.encode(format!("{}:{}", self.client_id, self.secret));
        let resp = self
            .client
            .post(format!("{}/v1/oauth2/token", self.base_url))
            .header("Authorization", format!("Basic {basic}"))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .context("failed to reach PayPal token endpoint")?;

        let status = resp.status();
        let data: serde_json::Value = resp
            .json()
            .await
            .context("failed to parse PayPal token response")?;

        if !status.is_success() {
            anyhow::bail!("PayPal auth error ({status}): {data}");
        }

        data["access_token"]
            .as_str()
            .map(String::from)
            .context("PayPal token response missing access_token")
    }

    async fn create_order(&self, token: &str, amount: &str) -> anyhow::Result<String> {
        let body = json!({
            "intent": "CAPTURE",
            "purchase_units": [
                { "amount": { "currency_code": CURRENCY_CODE, "value": amount } }
            ],
        });

        let resp = self
            .client
            .post(format!("{}/v2/checkout/orders", self.base_url))
            .bearer_auth(token)
            .header("PayPal-Request-Id", uuid::Uuid::new_v4().to_string())
            .json(&body)
            .send()
            .await
            .context("failed to create PayPal order")?;

        let status = resp.status();
        let data: serde_json::Value = resp
            .json()
            .await
            .context("failed to parse PayPal order response")?;

        if !status.is_success() {
            anyhow::bail!("PayPal order error ({status}): {data}");
        }

        data["id"]
            .as_str()
            .map(String::from)
            .context("PayPal order response missing id")
    }

    async fn capture_order(&self, token: &str, order_id: &str) -> anyhow::Result<String> {
        let resp = self
            .client
            .post(format!(
                "{}/v2/checkout/orders/{order_id}/capture",
                self.base_url
            ))
            .bearer_auth(token)
            .header("Content-Type", "application/json")
            .body("{}")
            .send()
            .await
            .context("failed to capture PayPal order")?;

        let status = resp.status();
        let data: serde_json::Value = resp
            .json()
            .await
            .context("failed to parse PayPal capture response")?;

        if !status.is_success() {
            anyhow::bail!("PayPal capture error ({status}): {data}");
        }

        data["id"]
            .as_str()
            .map(String::from)
            .context("PayPal capture response missing id")
    }
}

#[async_trait::async_trait]
impl PaymentGateway for PayPalGateway {
    async fn checkout(&self, amount: &str) -> anyhow::Result<String> {
        let token = self.access_token().await?;
        let order_id = self.create_order(&token, amount).await?;
        tracing::debug!(%order_id, %amount, "created PayPal order, capturing");
        self.capture_order(&token, &order_id).await
    }
}
