use maud::{html, Markup};

use super::{field_errors, layout};
use crate::{app::forms::Credentials, database::models::user::User};

pub const WRONG_CREDENTIALS: &str = "Username/Password is wrong";

fn credentials_form(action: &str, submit: &str, creds: &Credentials) -> Markup {
    html! {
        form method="post" action=(action) {
            label for="username" { "Username" }
            input type="text" id="username" name="username" value=(creds.username) minlength="5" maxlength="15" required;
            (field_errors(creds.errors.get("username")))
            label for="password" { "Password" }
            input type="password" id="password" name="password" minlength="8" maxlength="80" required;
            (field_errors(creds.errors.get("password")))
            p { button type="submit" { (submit) } }
        }
    }
}

pub fn signup(user: Option<&User>, creds: &Credentials) -> Markup {
    layout("Sign up", user, html! {
        h1 { "Sign up" }
        (credentials_form("/signup", "Create account", creds))
        p { "Already registered? " a href="/login" { "Log in" } }
    })
}

pub fn login(user: Option<&User>, creds: &Credentials, message: Option<&str>) -> Markup {
    layout("Log in", user, html! {
        h1 { "Log in" }
        @if let Some(message) = message {
            p class="error" { (message) }
        }
        (credentials_form("/login", "Log in", creds))
        p { "No account yet? " a href="/signup" { "Sign up" } }
    })
}
