//! HTML rendering of the login screen.
//!
//! The markup is a snapshot of one [`FormState`]; re-render after every event.

use crate::form::FormState;
use minijinja::Environment;
use serde::Serialize;
use thiserror::Error;

const TEMPLATE_NAME: &str = "login.html";
const TEMPLATE: &str = include_str!("../templates/login.html");

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Failed to render the login page")]
    Template(#[from] minijinja::Error),
    #[error("Base path {0:?} cannot be placed in an HTML attribute")]
    UnsafeBasePath(String),
}

/// Page-level values that are not part of the form itself.
#[derive(Clone, Debug)]
pub struct PageContext {
    /// Shown in the copyright line.
    pub year: i32,
    /// Prefix for the page's own asset links, without a trailing slash.
    pub base_path: String,
}

#[derive(Serialize)]
struct LoginPage<'a> {
    email: &'a str,
    email_error: Option<String>,
    show_password: bool,
    password_error: Option<String>,
    remember_me: bool,
    can_submit: bool,
    submitting: bool,
    year: i32,
    base_path: &'a str,
}

pub fn render(state: &FormState, page: &PageContext) -> Result<String, ViewError> {
    // Inserted unescaped so the URL keeps its slashes.
    if page.base_path.contains(['"', '\'', '<', '>', '&']) {
        return Err(ViewError::UnsafeBasePath(page.base_path.clone()));
    }

    let mut env = Environment::new();
    // The `.html` name switches on HTML auto-escaping for every interpolation.
    env.add_template(TEMPLATE_NAME, TEMPLATE)?;

    let context = LoginPage {
        email: &state.email,
        email_error: state.email_error().map(|e| e.to_string()),
        show_password: state.show_password,
        password_error: state.password_error().map(|e| e.to_string()),
        remember_me: state.remember_me,
        can_submit: state.can_submit(),
        submitting: state.submitting,
        year: page.year,
        base_path: &page.base_path,
    };

    Ok(env.get_template(TEMPLATE_NAME)?.render(context)?)
}
