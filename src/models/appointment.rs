use serde::Deserialize;

/// One appointment as the backend returns it, with the doctor data
/// denormalized into the record at fetch time.
///
/// The wire format carries two independent booleans (`cancelled`,
/// `isCompleted`); deserialization folds them into a single
/// [`AppointmentStatus`] so the contradictory combination cannot exist in
/// the model.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "AppointmentRecord")]
pub struct Appointment {
    pub id: String,
    pub doctor: DoctorSnapshot,
    pub patient: Option<PatientSnapshot>,
    pub slot_date: String,
    pub slot_time: String,
    pub amount: f64,
    pub paid: bool,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    Pending,
    Cancelled,
    Completed,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Completed => "completed",
        }
    }
}

/// Doctor attributes embedded in each appointment; a snapshot, not a live
/// reference.
#[derive(Debug, Clone, Deserialize)]
pub struct DoctorSnapshot {
    pub name: String,
    #[serde(default)]
    pub speciality: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub fees: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub line1: String,
    #[serde(default)]
    pub line2: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatientSnapshot {
    pub name: String,
    #[serde(default)]
    pub dob: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppointmentRecord {
    #[serde(rename = "_id")]
    id: String,
    doc_data: DoctorSnapshot,
    #[serde(default)]
    user_data: Option<PatientSnapshot>,
    slot_date: String,
    slot_time: String,
    #[serde(default)]
    amount: f64,
    #[serde(default)]
    payment: bool,
    #[serde(default)]
    cancelled: bool,
    #[serde(default)]
    is_completed: bool,
}

impl From<AppointmentRecord> for Appointment {
    fn from(rec: AppointmentRecord) -> Self {
        // Completed takes precedence; both flags set at once means the
        // backend stored contradictory state.
        let status = match (rec.cancelled, rec.is_completed) {
            (_, true) => {
                if rec.cancelled {
                    tracing::warn!(
                        appointment_id = %rec.id,
                        "appointment marked both cancelled and completed"
                    );
                }
                AppointmentStatus::Completed
            }
            (true, false) => AppointmentStatus::Cancelled,
            (false, false) => AppointmentStatus::Pending,
        };

        Appointment {
            id: rec.id,
            doctor: rec.doc_data,
            patient: rec.user_data,
            slot_date: rec.slot_date,
            slot_time: rec.slot_time,
            amount: rec.amount,
            paid: rec.payment,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Appointment {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_pending_from_wire() {
        let appt = parse(
            r#"{"_id":"a1","docData":{"name":"Dr. Patel","speciality":"Dermatologist","fees":40.0},
                "slotDate":"05_3_2024","slotTime":"10:00 AM","amount":40.0,
                "cancelled":false,"isCompleted":false}"#,
        );
        assert_eq!(appt.status, AppointmentStatus::Pending);
        assert_eq!(appt.doctor.name, "Dr. Patel");
        assert_eq!(appt.slot_date, "05_3_2024");
    }

    #[test]
    fn test_cancelled_from_wire() {
        let appt = parse(
            r#"{"_id":"a2","docData":{"name":"Dr. Patel"},"slotDate":"05_3_2024",
                "slotTime":"10:00 AM","cancelled":true,"isCompleted":false}"#,
        );
        assert_eq!(appt.status, AppointmentStatus::Cancelled);
    }

    #[test]
    fn test_completed_wins_over_cancelled() {
        let appt = parse(
            r#"{"_id":"a3","docData":{"name":"Dr. Patel"},"slotDate":"05_3_2024",
                "slotTime":"10:00 AM","cancelled":true,"isCompleted":true}"#,
        );
        assert_eq!(appt.status, AppointmentStatus::Completed);
    }

    #[test]
    fn test_missing_flags_default_to_pending() {
        let appt = parse(
            r#"{"_id":"a4","docData":{"name":"Dr. Patel"},"slotDate":"05_3_2024",
                "slotTime":"10:00 AM"}"#,
        );
        assert_eq!(appt.status, AppointmentStatus::Pending);
        assert!(!appt.paid);
    }
}
