pub mod http;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::{AdminDashboard, Appointment, Doctor, DoctorDashboard, DoctorProfile};

pub use http::HttpBackend;

/// The REST backend, as seen from this client. One method per endpoint;
/// mutation methods resolve to the backend's success message.
#[async_trait]
pub trait BackendApi: Send + Sync {
    // Patient surface (header `token`)
    async fn user_appointments(&self, token: &str) -> Result<Vec<Appointment>, AppError>;
    async fn cancel_appointment(&self, token: &str, appointment_id: &str)
        -> Result<String, AppError>;
    async fn complete_payment(
        &self,
        token: &str,
        appointment_id: &str,
        order_id: &str,
    ) -> Result<String, AppError>;

    // Public
    async fn doctor_list(&self) -> Result<Vec<Doctor>, AppError>;

    // Admin console (header `atoken`)
    async fn admin_dashboard(&self, atoken: &str) -> Result<AdminDashboard, AppError>;
    async fn admin_appointments(&self, atoken: &str) -> Result<Vec<Appointment>, AppError>;
    async fn admin_cancel_appointment(
        &self,
        atoken: &str,
        appointment_id: &str,
    ) -> Result<String, AppError>;
    async fn change_availability(&self, atoken: &str, doc_id: &str) -> Result<String, AppError>;

    // Doctor console (header `dtoken`)
    async fn doctor_dashboard(&self, dtoken: &str) -> Result<DoctorDashboard, AppError>;
    async fn doctor_appointments(&self, dtoken: &str) -> Result<Vec<Appointment>, AppError>;
    async fn doctor_complete_appointment(
        &self,
        dtoken: &str,
        appointment_id: &str,
    ) -> Result<String, AppError>;
    async fn doctor_cancel_appointment(
        &self,
        dtoken: &str,
        appointment_id: &str,
    ) -> Result<String, AppError>;
    async fn doctor_profile(&self, dtoken: &str) -> Result<DoctorProfile, AppError>;
}
