use chrono::Utc;

use crate::format;
use crate::models::{AdminDashboard, Appointment};
use crate::state::AppContext;
use crate::views::appointments::{control_for, Control};

/// Admin console: platform-wide dashboard, the full appointment list,
/// admin-side cancellation, and the doctor availability toggle.
pub struct AdminPanel {
    token: String,
    dashboard: Option<AdminDashboard>,
    appointments: Vec<Appointment>,
}

impl AdminPanel {
    pub fn new(token: String) -> Self {
        Self {
            token,
            dashboard: None,
            appointments: Vec::new(),
        }
    }

    pub fn dashboard(&self) -> Option<&AdminDashboard> {
        self.dashboard.as_ref()
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub async fn refresh_dashboard(&mut self, ctx: &AppContext) {
        match ctx.backend.admin_dashboard(&self.token).await {
            Ok(dash) => self.dashboard = Some(dash),
            Err(e) => ctx.notify.error(&e.user_message()),
        }
    }

    pub async fn refresh_appointments(&mut self, ctx: &AppContext) {
        match ctx.backend.admin_appointments(&self.token).await {
            Ok(mut list) => {
                list.reverse();
                self.appointments = list;
            }
            Err(e) => ctx.notify.error(&e.user_message()),
        }
    }

    pub async fn cancel(&mut self, ctx: &AppContext, appointment_id: &str) {
        match ctx
            .backend
            .admin_cancel_appointment(&self.token, appointment_id)
            .await
        {
            Ok(message) => {
                ctx.notify.success(&message);
                self.refresh_appointments(ctx).await;
            }
            Err(e) => ctx.notify.error(&e.user_message()),
        }
    }

    /// Flips a doctor's availability flag, then refetches the shared
    /// doctor list so dependent views see the change.
    pub async fn toggle_availability(&self, ctx: &AppContext, doc_id: &str) {
        match ctx.backend.change_availability(&self.token, doc_id).await {
            Ok(message) => {
                ctx.notify.success(&message);
                ctx.refresh_doctors().await;
            }
            Err(e) => ctx.notify.error(&e.user_message()),
        }
    }

    pub fn render_dashboard(&self) -> Vec<String> {
        let Some(dash) = &self.dashboard else {
            return vec!["Admin dashboard (no data)".to_string()];
        };
        let mut lines = vec![
            "Admin dashboard".to_string(),
            format!("  doctors: {}", dash.doctors),
            format!("  appointments: {}", dash.appointments),
            format!("  patients: {}", dash.patients),
            "Latest bookings".to_string(),
        ];
        for appt in &dash.latest_appointments {
            lines.push(format!(
                "  {}  {}  {}",
                appt.doctor.name,
                format::slot_date(&appt.slot_date),
                appt.status.as_str(),
            ));
        }
        lines
    }

    pub fn render_appointments(&self, ctx: &AppContext) -> Vec<String> {
        let today = Utc::now().date_naive();
        let mut lines = vec!["All appointments".to_string()];
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
            let action = match control_for(appt.status) {
                Control::PayAndCancel => "[ cancel ]",
                Control::CancelledNotice => "Cancelled",
                Control::CompletedNotice => "Completed",
            };
            lines.push(format!(
                "{}  {}  {}, {} | {}  {}  {}",
                appt.id,
                patient,
                appt.doctor.name,
                format::slot_date(&appt.slot_date),
                appt.slot_time,
                format::fee(&ctx.config.currency, appt.amount),
                action,
            ));
        }
        lines
    }
}
