use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub backend_url: String,
    pub user_token: Option<String>,
    pub admin_token: Option<String>,
    pub doctor_token: Option<String>,
    pub currency: String,
    pub paypal_client_id: String,
    pub paypal_secret: String,
    pub paypal_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            backend_url: env::var("BACKEND_URL")
                .unwrap_or_else(|_| "http://localhost:4000".to_string()),
            user_token: env::var("USER_TOKEN").ok().filter(|t| !t.is_empty()),
            admin_token: env::var("ADMIN_TOKEN").ok().filter(|t| !t.is_empty()),
            doctor_token: env::var("DOCTOR_TOKEN").ok().filter(|t| !t.is_empty()),
            currency: env::var("CURRENCY").unwrap_or_else(|_| "$".to_string()),
            paypal_client_id: env::var("PAYPAL_CLIENT_ID").unwrap_or_default(),
            paypal_secret: env::var("PAYPAL_SECRET").unwrap_or_default(),
            paypal_base_url: env::var("PAYPAL_BASE_URL")
                .unwrap_or_else(|_| "https://api-m.sandbox.paypal.com".to_string()),
        }
    }
}
