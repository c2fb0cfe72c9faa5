use serde::Deserialize;

/// Entry in the public doctor listing. Availability flips when an
/// appointment slot is booked or freed, which is why views refetch this
/// list after a successful cancel.
#[derive(Debug, Clone, Deserialize)]
pub struct Doctor {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub speciality: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub fees: f64,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}
