use std::sync::Mutex;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use clinicdesk::api::HttpBackend;
use clinicdesk::config::AppConfig;
use clinicdesk::format;
use clinicdesk::notify::ConsoleNotifier;
use clinicdesk::payments::PayPalGateway;
use clinicdesk::session::Session;
use clinicdesk::state::AppContext;
use clinicdesk::views::{AdminPanel, AppointmentsView, DoctorPanel};

#[derive(Parser)]
#[command(name = "clinicdesk", about = "Console client for the clinic booking backend")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List your appointments
    Appointments,
    /// Cancel one of your appointments
    Cancel { appointment_id: String },
    /// Pay for an appointment through the payment gateway
    Pay { appointment_id: String },
    /// List doctors and their availability
    Doctors,
    /// Open the management console for whichever session is configured
    Console,
    /// Admin actions (requires ADMIN_TOKEN)
    #[command(subcommand)]
    Admin(AdminCommand),
    /// Doctor actions (requires DOCTOR_TOKEN)
    #[command(subcommand)]
    Doctor(DoctorCommand),
}

#[derive(Subcommand)]
enum AdminCommand {
    /// Platform dashboard
    Dashboard,
    /// All appointments across the platform
    Appointments,
    /// Cancel any appointment
    Cancel { appointment_id: String },
    /// Toggle a doctor's availability
    Availability { doc_id: String },
}

#[derive(Subcommand)]
enum DoctorCommand {
    /// Your dashboard
    Dashboard,
    /// Your appointments
    Appointments,
    /// Mark an appointment completed
    Complete { appointment_id: String },
    /// Cancel an appointment
    Cancel { appointment_id: String },
    /// Your profile
    Profile,
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    let ctx = AppContext {
        backend: Box::new(HttpBackend::new(config.backend_url.clone())),
        payments: Box::new(PayPalGateway::new(
            config.paypal_client_id.clone(),
            config.paypal_secret.clone(),
            config.paypal_base_url.clone(),
        )),
        notify: Box::new(ConsoleNotifier),
        doctors: Mutex::new(Vec::new()),
        config,
    };

    match cli.command {
        Command::Appointments => {
            if ctx.config.user_token.is_none() {
                println!("Not logged in. Set USER_TOKEN to see your appointments.");
                return Ok(());
            }
            let mut view = AppointmentsView::new();
            view.refresh(&ctx).await;
            print_lines(&view.render(&ctx));
        }
        Command::Cancel { appointment_id } => {
            let mut view = AppointmentsView::new();
            view.cancel(&ctx, &appointment_id).await;
        }
        Command::Pay { appointment_id } => {
            let mut view = AppointmentsView::new();
            // The pay action needs the fetched fee for the gateway order.
            view.refresh(&ctx).await;
            view.pay(&ctx, &appointment_id).await;
        }
        Command::Doctors => {
            ctx.refresh_doctors().await;
            for doc in ctx.doctors() {
                println!(
                    "{}  {} ({})  {}  {}",
                    doc.id,
                    doc.name,
                    doc.speciality,
                    format::fee(&ctx.config.currency, doc.fees),
                    if doc.available { "available" } else { "unavailable" },
                );
            }
        }
        Command::Console => match Session::resolve(&ctx.config) {
            Session::LoggedOut => {
                println!("No console session. Set ADMIN_TOKEN or DOCTOR_TOKEN to log in.");
            }
            Session::Admin { token } => {
                let mut panel = AdminPanel::new(token);
                panel.refresh_dashboard(&ctx).await;
                print_lines(&panel.render_dashboard());
            }
            Session::Doctor { token } => {
                let mut panel = DoctorPanel::new(token);
                panel.refresh_dashboard(&ctx).await;
                print_lines(&panel.render_dashboard(&ctx));
            }
        },
        Command::Admin(cmd) => {
            let Some(token) = ctx.config.admin_token.clone() else {
                println!("Admin session required. Set ADMIN_TOKEN.");
                return Ok(());
            };
            let mut panel = AdminPanel::new(token);
            match cmd {
                AdminCommand::Dashboard => {
                    panel.refresh_dashboard(&ctx).await;
                    print_lines(&panel.render_dashboard());
                }
                AdminCommand::Appointments => {
                    panel.refresh_appointments(&ctx).await;
                    print_lines(&panel.render_appointments(&ctx));
                }
                AdminCommand::Cancel { appointment_id } => {
                    panel.cancel(&ctx, &appointment_id).await;
                }
                AdminCommand::Availability { doc_id } => {
                    panel.toggle_availability(&ctx, &doc_id).await;
                }
            }
        }
        Command::Doctor(cmd) => {
            let Some(token) = ctx.config.doctor_token.clone() else {
                println!("Doctor session required. Set DOCTOR_TOKEN.");
                return Ok(());
            };
            let mut panel = DoctorPanel::new(token);
            match cmd {
                DoctorCommand::Dashboard => {
                    panel.refresh_dashboard(&ctx).await;
                    print_lines(&panel.render_dashboard(&ctx));
                }
                DoctorCommand::Appointments => {
                    panel.refresh_appointments(&ctx).await;
                    print_lines(&panel.render_appointments(&ctx));
                }
                DoctorCommand::Complete { appointment_id } => {
                    panel.complete(&ctx, &appointment_id).await;
                }
                DoctorCommand::Cancel { appointment_id } => {
                    panel.cancel(&ctx, &appointment_id).await;
                }
                DoctorCommand::Profile => {
                    panel.refresh_profile(&ctx).await;
                    print_lines(&panel.render_profile(&ctx));
                }
            }
        }
    }

    Ok(())
}
