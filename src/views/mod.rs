//! HTML pages, rendered with maud so every dynamic value is escaped.

pub mod account;
pub mod blog;
pub mod dog;

pub use account::{login, signup};
pub use blog::{about, add_post_form, index, post};
pub use dog::{access_denied, add_dog_form, dog_result};

use actix_web::http::StatusCode;
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::database::models::user::User;

const STYLE: &str = r#"
body { font-family: Georgia, serif; max-width: 48rem; margin: 0 auto; padding: 0 1rem; color: #222; }
nav { display: flex; gap: 1rem; padding: 1rem 0; border-bottom: 1px solid #ddd; }
nav .spacer { flex: 1; }
article { margin: 2rem 0; }
.subtitle { color: #555; margin-top: -0.5rem; }
.meta { color: #888; font-size: 0.9rem; }
.content { white-space: pre-wrap; }
.pager { display: flex; justify-content: space-between; margin: 2rem 0; }
.error { color: #b00020; font-size: 0.9rem; }
form label { display: block; margin-top: 1rem; }
form input, form textarea { width: 100%; }
img.dog { max-width: 100%; }
"#;

/// Page skeleton shared by all pages, the navigation depends on the session.
pub fn layout(title: &str, user: Option<&User>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | Dog Blog" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                nav {
                    a href="/" { "Home" }
                    a href="/about" { "About" }
                    span class="spacer" {}
                    @match user {
                        Some(user) => {
                            a href="/addpost" { "New post" }
                            @if user.admin {
                                a href="/adddog" { "New breed" }
                            }
                            span class="meta" { (user.username) }
                            a href="/logout" { "Log out" }
                        },
                        None => {
                            a href="/login" { "Log in" }
                            a href="/signup" { "Sign up" }
                        },
                    }
                }
                main { (content) }
            }
        }
    }
}

/// Breed search box, shown on the listing and the result page.
pub fn dog_search(query: &str) -> Markup {
    html! {
        form method="post" action="/dogs" {
            label for="dog-name" { "Look up a dog breed" }
            input type="text" id="dog-name" name="dog-name" value=(query) placeholder="e.g. Golden Retriever" required;
            button type="submit" { "Search" }
        }
    }
}

pub fn field_errors(messages: &[String]) -> Markup {
    html! {
        @for message in messages {
            p class="error" { (message) }
        }
    }
}

/// Page used for error responses. `ResponseError` never sees the request,
/// so the navigation is always the anonymous one, even for a logged in
/// visitor. The links still work and the session cookie is left alone.
pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let reason = status.canonical_reason().unwrap_or("Error");
    layout(reason, None, html! {
        h1 { (status.as_u16()) " " (reason) }
        p { (message) }
        p { a href="/" { "Back to the front page" } }
    })
}
