use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::BackendApi;
use crate::errors::AppError;
use crate::models::{AdminDashboard, Appointment, Doctor, DoctorDashboard, DoctorProfile};

/// reqwest-backed [`BackendApi`] implementation. Timeouts and connection
/// reuse stay on the client's defaults.
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        header: Option<(&str, &str)>,
    ) -> Result<T, AppError> {
        let mut req = self.client.get(self.url(path));
        if let Some((name, value)) = header {
            req = req.header(name, value);
        }
        Ok(req.send().await?.error_for_status()?.json::<T>().await?)
    }

    async fn post<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        header: (&str, &str),
        body: serde_json::Value,
    ) -> Result<T, AppError> {
        Ok(self
            .client
            .post(self.url(path))
            .header(header.0, header.1)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?)
    }
}

/// `{ success, message }` envelope for mutation endpoints.
#[derive(Debug, Deserialize)]
struct MessageResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

impl MessageResponse {
    fn into_result(self) -> Result<String, AppError> {
        let message = self.message.unwrap_or_default();
        if self.success {
            Ok(message)
        } else {
            Err(AppError::Api(message))
        }
    }
}

/// `{ success, message, <payload> }` envelope for fetch endpoints.
#[derive(Debug, Deserialize)]
struct PayloadResponse<T> {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(
        alias = "appointments",
        alias = "doctors",
        alias = "dashData",
        alias = "profileData"
    )]
    payload: Option<T>,
}

impl<T> PayloadResponse<T> {
    fn into_result(self, what: &str) -> Result<T, AppError> {
        if !self.success {
            return Err(AppError::Api(self.message.unwrap_or_default()));
        }
        self.payload
            .ok_or_else(|| AppError::UnexpectedResponse(format!("missing {what}")))
    }
}

#[async_trait]
impl BackendApi for HttpBackend {
    async fn user_appointments(&self, token: &str) -> Result<Vec<Appointment>, AppError> {
        self.get::<PayloadResponse<Vec<Appointment>>>(
            "/api/user/appointments",
            Some(("token", token)),
        )
        .await?
        .into_result("appointments")
    }

    async fn cancel_appointment(
        &self,
        token: &str,
        appointment_id: &str,
    ) -> Result<String, AppError> {
        self.post::<MessageResponse>(
            "/api/user/cancel-appointment",
            ("token", token),
            json!({ "appointmentId": appointment_id }),
        )
        .await?
        .into_result()
    }

    async fn complete_payment(
        &self,
        token: &str,
        appointment_id: &str,
        order_id: &str,
    ) -> Result<String, AppError> {
        self.post::<MessageResponse>(
            "/api/user/complete-payment",
            ("token", token),
            json!({ "appointmentId": appointment_id, "orderId": order_id }),
        )
        .await?
        .into_result()
    }

    async fn doctor_list(&self) -> Result<Vec<Doctor>, AppError> {
        self.get::<PayloadResponse<Vec<Doctor>>>("/api/doctor/list", None)
            .await?
            .into_result("doctors")
    }

    async fn admin_dashboard(&self, atoken: &str) -> Result<AdminDashboard, AppError> {
        self.get::<PayloadResponse<AdminDashboard>>(
            "/api/admin/dashboard",
            Some(("atoken", atoken)),
        )
        .await?
        .into_result("dashData")
    }

    async fn admin_appointments(&self, atoken: &str) -> Result<Vec<Appointment>, AppError> {
        self.get::<PayloadResponse<Vec<Appointment>>>(
            "/api/admin/appointments",
            Some(("atoken", atoken)),
        )
        .await?
        .into_result("appointments")
    }

    async fn admin_cancel_appointment(
        &self,
        atoken: &str,
        appointment_id: &str,
    ) -> Result<String, AppError> {
        self.post::<MessageResponse>(
            "/api/admin/cancel-appointment",
            ("atoken", atoken),
            json!({ "appointmentId": appointment_id }),
        )
        .await?
        .into_result()
    }

    async fn change_availability(&self, atoken: &str, doc_id: &str) -> Result<String, AppError> {
        self.post::<MessageResponse>(
            "/api/admin/change-availability",
            ("atoken", atoken),
            json!({ "docId": doc_id }),
        )
        .await?
        .into_result()
    }

    async fn doctor_dashboard(&self, dtoken: &str) -> Result<DoctorDashboard, AppError> {
        self.get::<PayloadResponse<DoctorDashboard>>(
            "/api/doctor/dashboard",
            Some(("dtoken", dtoken)),
        )
        .await?
        .into_result("dashData")
    }

    async fn doctor_appointments(&self, dtoken: &str) -> Result<Vec<Appointment>, AppError> {
        self.get::<PayloadResponse<Vec<Appointment>>>(
            "/api/doctor/appointments",
            Some(("dtoken", dtoken)),
        )
        .await?
        .into_result("appointments")
    }

    async fn doctor_complete_appointment(
        &self,
        dtoken: &str,
        appointment_id: &str,
    ) -> Result<String, AppError> {
        self.post::<MessageResponse>(
            "/api/doctor/complete-appointment",
            ("dtoken", dtoken),
            json!({ "appointmentId": appointment_id }),
        )
        .await?
        .into_result()
    }

    async fn doctor_cancel_appointment(
        &self,
        dtoken: &str,
        appointment_id: &str,
    ) -> Result<String, AppError> {
        self.post::<MessageResponse>(
            "/api/doctor/cancel-appointment",
            ("dtoken", dtoken),
            json!({ "appointmentId": appointment_id }),
        )
        .await?
        .into_result()
    }

    async fn doctor_profile(&self, dtoken: &str) -> Result<DoctorProfile, AppError> {
        self.get::<PayloadResponse<DoctorProfile>>("/api/doctor/profile", Some(("dtoken", dtoken)))
            .await?
            .into_result("profileData")
    }
}
