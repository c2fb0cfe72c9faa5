pub mod admin;
pub mod appointments;
pub mod doctor;

pub use admin::AdminPanel;
pub use appointments::{AppointmentsView, Control};
pub use doctor::DoctorPanel;
