pub mod appointment;
pub mod dashboard;
pub mod doctor;

pub use appointment::{Address, Appointment, AppointmentStatus, DoctorSnapshot, PatientSnapshot};
pub use dashboard::{AdminDashboard, DoctorDashboard, DoctorProfile};
pub use doctor::Doctor;
