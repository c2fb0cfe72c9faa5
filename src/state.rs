use std::sync::Mutex;

use crate::api::BackendApi;
use crate::config::AppConfig;
use crate::models::Doctor;
use crate::notify::Notifier;
use crate::payments::PaymentGateway;

/// Shared application context, passed by reference to every view. The
/// doctor list is the one piece of shared mutable data; everything else
/// is read-only after startup.
pub struct AppContext {
    pub config: AppConfig,
    pub backend: Box<dyn BackendApi>,
    pub payments: Box<dyn PaymentGateway>,
    pub notify: Box<dyn Notifier>,
    pub doctors: Mutex<Vec<Doctor>>,
}

impl AppContext {
    /// Refetches the public doctor list; a successful cancel frees the
    /// slot, so dependent availability views want fresh data. Failure is
    /// notified and the cached list kept.
    pub async fn refresh_doctors(&self) {
        match self.backend.doctor_list().await {
            Ok(doctors) => {
                *self.doctors.lock().unwrap() = doctors;
            }
            Err(e) => self.notify.error(&e.user_message()),
        }
    }

    pub fn doctors(&self) -> Vec<Doctor> {
        self.doctors.lock().unwrap().clone()
    }
}
