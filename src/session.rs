use crate::config::AppConfig;

/// Which console surface the current credentials grant. Resolved fresh on
/// every invocation from the configured tokens; there is no intermediate
/// state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    LoggedOut,
    Admin { token: String },
    Doctor { token: String },
}

impl Session {
    /// Admin wins when both tokens are present; first match is the
    /// tie-break, same as the original console.
    pub fn resolve(config: &AppConfig) -> Self {
        if let Some(token) = &config.admin_token {
            return Session::Admin {
                token: token.clone(),
            };
        }
        if let Some(token) = &config.doctor_token {
            return Session::Doctor {
                token: token.clone(),
            };
        }
        Session::LoggedOut
    }
}
