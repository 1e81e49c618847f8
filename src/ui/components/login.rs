// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Login / sign-up card.
//!
//! The component only validates; persisting the session is left to the root
//! update function, which reacts to [`LoginEvent::Authenticated`].

use eframe::egui;

use crate::logic::credentials::{validate_login, validate_signup};
use crate::models::credentials::DEMO_CREDENTIAL;
use crate::ui::components::toggle_switch;

/// Notice shown after the simulated account creation.
pub const SIGNUP_NOTICE: &str = "Account created successfully! Please login.";

/// Which form the card currently shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

/// Form state for the card.
#[derive(Debug, Default)]
pub struct LoginModel {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub confirm: String,
    pub show_password: bool,
    /// Inline validation error.
    pub error: Option<String>,
}

/// Messages emitted by the login view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginMsg {
    EmailChanged(String),
    PasswordChanged(String),
    ConfirmChanged(String),
    SetShowPassword(bool),
    ToggleMode,
    Submit,
    ForgotPassword,
}

/// Outcomes the root update must act on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginEvent {
    /// Credentials matched; the session should be started for `email`.
    Authenticated { email: String },
    /// Sign-up passed validation. No account exists afterwards.
    SignedUp,
    /// The user asked for the password-reset dialog.
    ForgotRequested,
}

/// Apply a message to the form.
pub fn update(model: &mut LoginModel, msg: LoginMsg) -> Option<LoginEvent> {
    match msg {
        LoginMsg::EmailChanged(text) => model.email = text,
        LoginMsg::PasswordChanged(text) => model.password = text,
        LoginMsg::ConfirmChanged(text) => model.confirm = text,
        LoginMsg::SetShowPassword(on) => model.show_password = on,
        LoginMsg::ToggleMode => {
            model.mode = match model.mode {
                AuthMode::Login => AuthMode::Signup,
                AuthMode::Signup => AuthMode::Login,
            };
            model.error = None;
        }
        LoginMsg::ForgotPassword => return Some(LoginEvent::ForgotRequested),
        LoginMsg::Submit => return submit(model),
    }
    None
}

fn submit(model: &mut LoginModel) -> Option<LoginEvent> {
    match model.mode {
        AuthMode::Login => match validate_login(&model.email, &model.password) {
            Ok(()) => {
                model.error = None;
                Some(LoginEvent::Authenticated {
                    email: model.email.clone(),
                })
            }
            Err(err) => {
                model.error = Some(err.to_string());
                None
            }
        },
        AuthMode::Signup => {
            match validate_signup(&model.email, &model.password, &model.confirm) {
                Ok(()) => {
                    *model = LoginModel {
                        show_password: model.show_password,
                        ..Default::default()
                    };
                    Some(LoginEvent::SignedUp)
                }
                Err(err) => {
                    model.error = Some(err.to_string());
                    None
                }
            }
        }
    }
}

/// Render the card and return any messages triggered by user interaction.
pub fn view(ui: &mut egui::Ui, model: &LoginModel) -> Vec<LoginMsg> {
    let mut msgs = Vec::new();
    let signup = model.mode == AuthMode::Signup;

    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(egui_phosphor::regular::USER_CIRCLE).size(56.0));
        ui.heading(if signup { "Create Account" } else { "Login" });
    });
    ui.add_space(10.0);

    let mut email = model.email.clone();
    let email_resp = ui.add(
        egui::TextEdit::singleline(&mut email)
            .hint_text("Email")
            .desired_width(f32::INFINITY),
    );
    if email_resp.changed() {
        msgs.push(LoginMsg::EmailChanged(email));
    }

    let mut password = model.password.clone();
    let password_resp = ui.add(
        egui::TextEdit::singleline(&mut password)
            .hint_text("Password")
            .password(!model.show_password)
            .desired_width(f32::INFINITY),
    );
    if password_resp.changed() {
        msgs.push(LoginMsg::PasswordChanged(password));
    }

    let mut show = model.show_password;
    ui.horizontal(|ui| {
        if toggle_switch(ui, &mut show).changed() {
            msgs.push(LoginMsg::SetShowPassword(show));
        }
        ui.label("Show password");
    });

    let mut submitted_by_enter = password_resp.lost_focus() || email_resp.lost_focus();
    if signup {
        let mut confirm = model.confirm.clone();
        let confirm_resp = ui.add(
            egui::TextEdit::singleline(&mut confirm)
                .hint_text("Confirm Password")
                .password(true)
                .desired_width(f32::INFINITY),
        );
        if confirm_resp.changed() {
            msgs.push(LoginMsg::ConfirmChanged(confirm));
        }
        submitted_by_enter |= confirm_resp.lost_focus();
    }
    submitted_by_enter &= ui.input(|i| i.key_pressed(egui::Key::Enter));

    if let Some(error) = &model.error {
        ui.label(egui::RichText::new(error).color(egui::Color32::from_rgb(220, 53, 69)));
    }

    ui.add_space(6.0);
    let submit_label = if signup { "Sign Up" } else { "Login" };
    let submit = ui.add_sized(
        [ui.available_width(), 28.0],
        egui::Button::new(submit_label),
    );
    if submit.clicked() || submitted_by_enter {
        msgs.push(LoginMsg::Submit);
    }

    if !signup {
        ui.add_space(4.0);
        ui.vertical_centered(|ui| {
            if ui.link("Forgot Password?").clicked() {
                msgs.push(LoginMsg::ForgotPassword);
            }
            ui.label(
                egui::RichText::new(format!(
                    "Demo: {} / {}",
                    DEMO_CREDENTIAL.email, DEMO_CREDENTIAL.password
                ))
                .small()
                .color(egui::Color32::from_gray(120)),
            );
        });
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label(if signup {
            "Already have an account?"
        } else {
            "Don't have an account?"
        });
        if ui.link(if signup { "Login" } else { "Sign up" }).clicked() {
            msgs.push(LoginMsg::ToggleMode);
        }
    });

    msgs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(email: &str, password: &str) -> LoginModel {
        LoginModel {
            email: email.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    #[test]
    fn demo_credentials_authenticate() {
        let mut model = filled("intern@demo.com", "pass123");
        let event = update(&mut model, LoginMsg::Submit);
        assert_eq!(
            event,
            Some(LoginEvent::Authenticated {
                email: "intern@demo.com".into()
            })
        );
        assert!(model.error.is_none());
    }

    #[test]
    fn failures_set_inline_error() {
        let mut model = filled("intern@demo.com", "wrong-pass");
        assert_eq!(update(&mut model, LoginMsg::Submit), None);
        assert_eq!(model.error.as_deref(), Some("Invalid email or password!"));

        let mut model = filled("intern", "pass123");
        update(&mut model, LoginMsg::Submit);
        assert_eq!(
            model.error.as_deref(),
            Some("Please enter a valid email address!")
        );

        let mut model = filled("intern@demo.com", "pass");
        update(&mut model, LoginMsg::Submit);
        assert_eq!(
            model.error.as_deref(),
            Some("Password must be at least 6 characters long!")
        );
    }

    #[test]
    fn toggling_mode_clears_error_but_keeps_fields() {
        let mut model = filled("intern@demo.com", "nope");
        update(&mut model, LoginMsg::Submit);
        assert!(model.error.is_some());

        update(&mut model, LoginMsg::ToggleMode);
        assert_eq!(model.mode, AuthMode::Signup);
        assert!(model.error.is_none());
        assert_eq!(model.email, "intern@demo.com");
    }

    #[test]
    fn signup_mismatch_reports_error() {
        let mut model = filled("new@demo.com", "secret1");
        model.mode = AuthMode::Signup;
        update(&mut model, LoginMsg::ConfirmChanged("secret2".into()));

        assert_eq!(update(&mut model, LoginMsg::Submit), None);
        assert_eq!(model.error.as_deref(), Some("Passwords do not match!"));
        assert_eq!(model.mode, AuthMode::Signup);
    }

    #[test]
    fn signup_success_resets_form_and_returns_to_login() {
        let mut model = filled("new@demo.com", "secret1");
        model.mode = AuthMode::Signup;
        model.confirm = "secret1".into();

        assert_eq!(update(&mut model, LoginMsg::Submit), Some(LoginEvent::SignedUp));
        assert_eq!(model.mode, AuthMode::Login);
        assert!(model.email.is_empty());
        assert!(model.password.is_empty());
        assert!(model.confirm.is_empty());
        assert!(model.error.is_none());
    }

    #[test]
    fn signed_up_account_cannot_log_in() {
        let mut model = filled("new@demo.com", "secret1");
        model.mode = AuthMode::Signup;
        model.confirm = "secret1".into();
        update(&mut model, LoginMsg::Submit);

        update(&mut model, LoginMsg::EmailChanged("new@demo.com".into()));
        update(&mut model, LoginMsg::PasswordChanged("secret1".into()));
        assert_eq!(update(&mut model, LoginMsg::Submit), None);
        assert_eq!(model.error.as_deref(), Some("Invalid email or password!"));
    }

    #[test]
    fn forgot_link_requests_dialog() {
        let mut model = LoginModel::default();
        assert_eq!(
            update(&mut model, LoginMsg::ForgotPassword),
            Some(LoginEvent::ForgotRequested)
        );
    }
}
