use serde::Deserialize;

use super::appointment::{Address, Appointment};

/// Admin dashboard payload (`dashData`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    #[serde(default)]
    pub doctors: u64,
    #[serde(default)]
    pub appointments: u64,
    #[serde(default)]
    pub patients: u64,
    #[serde(default)]
    pub latest_appointments: Vec<Appointment>,
}

/// Doctor dashboard payload (`dashData`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorDashboard {
    #[serde(default)]
    pub earnings: f64,
    #[serde(default)]
    pub appointments: u64,
    #[serde(default)]
    pub patients: u64,
    #[serde(default)]
    pub latest_appointments: Vec<Appointment>,
}

/// Doctor profile payload (`profileData`).
#[derive(Debug, Clone, Deserialize)]
pub struct DoctorProfile {
    pub name: String,
    #[serde(default)]
    pub speciality: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub fees: f64,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub available: bool,
}
