use crate::errors::AppError;
use crate::format;
use crate::models::{Appointment, AppointmentStatus};
use crate::state::AppContext;

/// Which actions render next to an appointment. Exactly one variant per
/// status; the flag table collapses to the status enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Pay button plus cancel button.
    PayAndCancel,
    /// Disabled "Appointment Cancelled" notice.
    CancelledNotice,
    /// Disabled "Completed" notice, regardless of any cancel flag.
    CompletedNotice,
}

pub fn control_for(status: AppointmentStatus) -> Control {
    match status {
        AppointmentStatus::Pending => Control::PayAndCancel,
        AppointmentStatus::Cancelled => Control::CancelledNotice,
        AppointmentStatus::Completed => Control::CompletedNotice,
    }
}

/// The patient's "My appointments" view. Owns its own list state; every
/// action round-trips to the backend and refetches rather than patching
/// locally.
#[derive(Default)]
pub struct AppointmentsView {
    appointments: Vec<Appointment>,
}

impl AppointmentsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent first, i.e. the reverse of wire order.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Refetches the list. No token means no fetch at all. A transport
    /// failure is notified and the previous list stays displayed; a
    /// `success:false` answer on this endpoint is ignored outright.
    pub async fn refresh(&mut self, ctx: &AppContext) {
        let Some(token) = ctx.config.user_token.as_deref() else {
            return;
        };

        match ctx.backend.user_appointments(token).await {
            Ok(mut list) => {
                list.reverse();
                self.appointments = list;
            }
            Err(AppError::Api(message)) => {
                tracing::debug!(%message, "appointment fetch rejected");
            }
            Err(e) => ctx.notify.error(&e.user_message()),
        }
    }

    /// Cancels an appointment, then refetches both the list and the
    /// shared doctor list (cancelling frees the slot). A rejected cancel
    /// notifies the backend's message and mutates nothing.
    pub async fn cancel(&mut self, ctx: &AppContext, appointment_id: &str) {
        let Some(token) = ctx.config.user_token.as_deref() else {
            ctx.notify.error("not logged in");
            return;
        };

        match ctx.backend.cancel_appointment(token, appointment_id).await {
            Ok(message) => {
                ctx.notify.success(&message);
                self.refresh(ctx).await;
                ctx.refresh_doctors().await;
            }
            Err(e) => ctx.notify.error(&e.user_message()),
        }
    }

    /// Runs the gateway checkout for the doctor's fee, then reports the
    /// captured order id to the backend. A gateway failure is logged and
    /// surfaced generically without touching the backend; there is no
    /// reconciliation of a captured-but-unconfirmed payment.
    pub async fn pay(&mut self, ctx: &AppContext, appointment_id: &str) {
        let Some(token) = ctx.config.user_token.as_deref() else {
            ctx.notify.error("not logged in");
            return;
        };

        let Some(appt) = self.appointments.iter().find(|a| a.id == appointment_id) else {
            ctx.notify.error("appointment not found");
            return;
        };
        if appt.status != AppointmentStatus::Pending {
            ctx.notify
                .error(&format!("appointment is {}", appt.status.as_str()));
            return;
        }

        let amount = format::decimal(appt.doctor.fees);
        let order_id = match ctx.payments.checkout(&amount).await {
            Ok(id) => id,
            Err(e) => {
                tracing::error!(error = %e, %appointment_id, "payment checkout failed");
                ctx.notify.error("Payment failed. Please try again.");
                return;
            }
        };

        match ctx
            .backend
            .complete_payment(token, appointment_id, &order_id)
            .await
        {
            Ok(message) => {
                ctx.notify.success(&message);
                self.refresh(ctx).await;
            }
            Err(e) => ctx.notify.error(&e.user_message()),
        }
    }

    pub fn render(&self, ctx: &AppContext) -> Vec<String> {
        let mut lines = vec!["My appointments".to_string()];
        for appt in &self.appointments {
            lines.push(format!(
                "{}  {} ({})  {} | {}  fee {}",
                appt.id,
                appt.doctor.name,
                appt.doctor.speciality,
                format::slot_date(&appt.slot_date),
                appt.slot_time,
                format::fee(&ctx.config.currency, appt.doctor.fees),
            ));
            lines.push(match control_for(appt.status) {
                Control::PayAndCancel => "    [ pay ] [ cancel ]".to_string(),
                Control::CancelledNotice => "    Appointment Cancelled".to_string(),
                Control::CompletedNotice => "    Completed".to_string(),
            });
        }
        lines
    }
}
