//! Demo login form hosted in the terminal.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use morsetouch_core::{Button, Field, Form, HostPorts};

/// Input targets of the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginTarget {
    Username,
    Password,
    LoginButton,
}

/// What the host has received so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    pub submitted: usize,
    pub navigated_back: usize,
}

pub fn login_form() -> Form<LoginTarget> {
    Form::new(vec![
        Field::new("username", LoginTarget::Username).with_description("account name"),
        Field::new("password", LoginTarget::Password),
    ])
    .with_buttons(vec![Button::new("login", LoginTarget::LoginButton)])
}

/// Host side of the login form: owns the field values.
#[derive(Debug, Clone, Default)]
pub struct LoginHost {
    state: Rc<RefCell<LoginState>>,
}

impl LoginHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ports writing into this host's state.
    pub fn ports(&self) -> HostPorts<LoginTarget> {
        let fields = self.state.clone();
        let submit = self.state.clone();
        let back = self.state.clone();

        HostPorts::new()
            .on_update_field(move |target: &LoginTarget, text: &str| {
                tracing::info!(?target, text, "field updated");
                let mut state = fields.borrow_mut();
                match target {
                    LoginTarget::Username => state.username = text.to_string(),
                    LoginTarget::Password => state.password = text.to_string(),
                    LoginTarget::LoginButton => {}
                }
            })
            .on_submit_form(move || {
                let mut state = submit.borrow_mut();
                state.submitted += 1;
                tracing::info!(username = %state.username, "login submitted");
            })
            .on_navigate_back(move || {
                back.borrow_mut().navigated_back += 1;
                tracing::info!("navigate back");
            })
    }

    pub fn state(&self) -> Ref<'_, LoginState> {
        self.state.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form_shape() {
        let form = login_form();
        assert_eq!(form.len(), 2);
        assert_eq!(form.fields()[0].name, "username");
        assert_eq!(form.buttons()[0].target, LoginTarget::LoginButton);
    }

    #[test]
    fn test_new_host_is_empty() {
        let host = LoginHost::new();
        let ports = host.ports();
        assert!(ports.has_update_field());
        assert!(ports.has_submit_form());
        assert!(ports.has_navigate_back());
        assert_eq!(*host.state(), LoginState::default());
    }
}
