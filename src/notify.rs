/// Sink for user-visible notifications, the console stand-in for the web
/// client's toast popups. Views report every outcome here and never
/// retry or escalate.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Prints notifications to the terminal.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        tracing::info!(%message, "notification");
        println!("ok: {message}");
    }

    fn error(&self, message: &str) {
        tracing::warn!(%message, "notification");
        eprintln!("error: {message}");
    }
}
