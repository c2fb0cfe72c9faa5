use chrono::Utc;

use crate::format;
use crate::models::{Appointment, DoctorDashboard, DoctorProfile};
use crate::state::AppContext;
use crate::views::appointments::{control_for, Control};

/// Doctor console: the doctor's own dashboard, appointment list with
/// complete/cancel actions, and profile.
pub struct DoctorPanel {
    token: String,
    dashboard: Option<DoctorDashboard>,
    appointments: Vec<Appointment>,
    profile: Option<DoctorProfile>,
}

impl DoctorPanel {
    pub fn new(token: String) -> Self {
        Self {
            token,
            dashboard: None,
            appointments: Vec::new(),
            profile: None,
        }
    }

    pub fn dashboard(&self) -> Option<&DoctorDashboard> {
        self.dashboard.as_ref()
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn profile(&self) -> Option<&DoctorProfile> {
        self.profile.as_ref()
    }

    pub async fn refresh_dashboard(&mut self, ctx: &AppContext) {
        match ctx.backend.doctor_dashboard(&self.token).await {
            Ok(dash) => self.dashboard = Some(dash),
            Err(e) => ctx.notify.error(&e.user_message()),
        }
    }

    pub async fn refresh_appointments(&mut self, ctx: &AppContext) {
        match ctx.backend.doctor_appointments(&self.token).await {
            Ok(mut list) => {
                list.reverse();
                self.appointments = list;
            }
            Err(e) => ctx.notify.error(&e.user_message()),
        }
    }

    pub async fn refresh_profile(&mut self, ctx: &AppContext) {
        match ctx.backend.doctor_profile(&self.token).await {
            Ok(profile) => self.profile = Some(profile),
            Err(e) => ctx.notify.error(&e.user_message()),
        }
    }

    pub async fn complete(&mut self, ctx: &AppContext, appointment_id: &str) {
        match ctx
            .backend
            .doctor_complete_appointment(&self.token, appointment_id)
            .await
        {
            Ok(message) => {
                ctx.notify.success(&message);
                self.refresh_appointments(ctx).await;
            }
            Err(e) => ctx.notify.error(&e.user_message()),
        }
    }

    pub async fn cancel(&mut self, ctx: &AppContext, appointment_id: &str) {
        match ctx
            .backend
            .doctor_cancel_appointment(&self.token, appointment_id)
            .await
        {
            Ok(message) => {
                ctx.notify.success(&message);
                self.refresh_appointments(ctx).await;
            }
            Err(e) => ctx.notify.error(&e.user_message()),
        }
    }

    pub fn render_dashboard(&self, ctx: &AppContext) -> Vec<String> {
        let Some(dash) = &self.dashboard else {
            return vec!["Doctor dashboard (no data)".to_string()];
        };
        let mut lines = vec![
            "Doctor dashboard".to_string(),
            format!(
                "  earnings: {}",
                format::fee(&ctx.config.currency, dash.earnings)
            ),
            format!("  appointments: {}", dash.appointments),
            format!("  patients: {}", dash.patients),
            "Latest bookings".to_string(),
        ];
        for appt in &dash.latest_appointments {
            let patient = appt
                .patient
                .as_ref()
                .map(|p| p.name.as_str())
                .unwrap_or("-");
            lines.push(format!(
                "  {}  {}  {}",
                patient,
                format::slot_date(&appt.slot_date),
                appt.status.as_str(),
            ));
        }
        lines
    }

    pub fn render_appointments(&self, ctx: &AppContext) -> Vec<String> {
        let today = Utc::now().date_naive();
        let mut lines = vec!["Appointments".to_string()];
        for appt in &self.appointments {
            let patient = appt
                .patient
                .as_ref()
                .map(|p| {
                    let age = format::age(&p.dob, today)
                        .map(|a| a.to_string())
                        .unwrap_or_else(|| "-".to_string());
                    format!("{} ({})", p.name, age)
                })
                .unwrap_or_else(|| "-".to_string());
            let payment = if appt.paid { "paid" } else { "unpaid" };
            let action = match control_for(appt.status) {
                Control::PayAndCancel => "[ complete ] [ cancel ]",
                Control::CancelledNotice => "Cancelled",
                Control::CompletedNotice => "Completed",
            };
            lines.push(format!(
                "{}  {}  {} | {}  {}  {}  {}",
                appt.id,
                patient,
                format::slot_date(&appt.slot_date),
                appt.slot_time,
                format::fee(&ctx.config.currency, appt.amount),
                payment,
                action,
            ));
        }
        lines
    }

    pub fn render_profile(&self, ctx: &AppContext) -> Vec<String> {
        let Some(p) = &self.profile else {
            return vec!["Profile (no data)".to_string()];
        };
        vec![
            format!("{} — {} ({})", p.name, p.speciality, p.degree),
            format!("  experience: {}", p.experience),
            format!("  about: {}", p.about),
            format!("  fee: {}", format::fee(&ctx.config.currency, p.fees)),
            format!("  address: {}, {}", p.address.line1, p.address.line2),
            format!(
                "  available: {}",
                if p.available { "yes" } else { "no" }
            ),
        ]
    }
}
