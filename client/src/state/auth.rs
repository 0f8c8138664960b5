//! Login/registration modal state.
//!
//! ERROR HANDLING
//! ==============
//! Both submissions resolve into an inline alert. A `success: false` envelope
//! shows the server's message verbatim; transport or decode failures show a
//! fixed generic message. There is no retry.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::catalog::PRODUCT_NAME;
use crate::net::types::AuthResponse;

/// Delay between a successful submission and the page reload.
pub const RELOAD_DELAY_MS: u32 = 1_500;
pub const TRANSPORT_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// `(value, label)` pairs for the registration gender select.
pub const GENDER_OPTIONS: [(&str, &str); 2] = [("male", "Male"), ("female", "Female")];
pub const COUNTRY_OPTIONS: [&str; 6] = ["Indonesia", "Malaysia", "Singapore", "Philippines", "Thailand", "Other"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    #[must_use]
    pub fn title(self) -> String {
        match self {
            Self::Login => format!("Login to {PRODUCT_NAME}"),
            Self::Register => format!("Register to {PRODUCT_NAME}"),
        }
    }

    #[must_use]
    pub fn title_icon(self) -> &'static str {
        match self {
            Self::Login => "fas fa-sign-in-alt me-2 text-accent",
            Self::Register => "fas fa-user-plus me-2 text-accent",
        }
    }

    /// Text of the button that switches to the other form.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Login => "Create new account",
            Self::Register => "Already have an account? Login here",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormAlert {
    pub kind: AlertKind,
    pub message: String,
}

impl FormAlert {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.kind {
            AlertKind::Success => "alert alert-success",
            AlertKind::Danger => "alert alert-danger",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub alert: Option<FormAlert>,
    pub busy: bool,
}

impl AuthForm {
    /// Switch between the login and register forms; hides any alert.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.alert = None;
    }

    /// Mark a submission in flight. Returns `false` if one already is.
    pub fn begin_submit(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    /// Fold a submission result into the alert. Returns the reload delay when
    /// the page should refresh.
    pub fn apply_response(&mut self, result: Result<AuthResponse, String>) -> Option<u32> {
        self.busy = false;
        let (alert, reload) = match result {
            Ok(AuthResponse { success: true, message }) => {
                (FormAlert { kind: AlertKind::Success, message }, Some(RELOAD_DELAY_MS))
            }
            Ok(AuthResponse { success: false, message }) => (FormAlert { kind: AlertKind::Danger, message }, None),
            Err(_) => (
                FormAlert { kind: AlertKind::Danger, message: TRANSPORT_ERROR_MESSAGE.to_owned() },
                None,
            ),
        };
        self.alert = Some(alert);
        reload
    }
}
