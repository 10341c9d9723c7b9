use std::collections::HashMap;

use actix_session::Session;
use actix_web::{get, post, web::{self, Data}, HttpResponse};

use super::{html, redirect};
use crate::{
    app::{forms::{Credentials, FormFields}, AppError, AppState},
    auth::{login_user, logout_user, password::{hash_password, verify_password}, CurrentUser, MaybeUser},
    database::models::user::NewUser,
    views::{self, account::WRONG_CREDENTIALS},
};

type OptionalForm = Option<web::Form<HashMap<String, String>>>;

fn credentials_from(form: OptionalForm) -> Credentials {
    let fields = FormFields::new(form.map(|form| form.into_inner()).unwrap_or_default());
    Credentials::from_form(&fields)
}

#[get("/signup")]
pub async fn signup_form(user: MaybeUser) -> HttpResponse {
    html(views::signup(user.as_ref(), &Credentials::default()))
}

/// Pipe for creating an user, the new user is logged in right away
/// - url: `{domain}/signup`
///
/// # HTTP request requirements
/// ## body
/// - url-encoded form with `username` (5 to 15 characters) and `password`
///   (8 to 80 characters)
///
/// # Response
/// ## Ok
/// - redirect to the front page with the session cookie set
/// - the form again with the validation errors, nothing is stored. A taken
///   username is one of them, the unique column decides races between signups.
#[post("/signup")]
pub async fn signup(
    session: Session,
    user: MaybeUser,
    form: OptionalForm,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let mut creds = credentials_from(form);
    if !creds.is_valid() {
        return Ok(html(views::signup(user.as_ref(), &creds)));
    }

    let new_user = NewUser::new(&creds.username, hash_password(&creds.password));
    let new_user = match app_state.db.insert_user(&new_user) {
        Ok(new_user) => new_user,
        Err(AppError::Conflict) => {
            creds.errors.add("username", "That username is already taken.");
            return Ok(html(views::signup(user.as_ref(), &creds)));
        },
        Err(err) => return Err(err),
    };
    login_user(&session, &new_user)?;
    log::info!("New user {} signed up", new_user.username);

    Ok(redirect("/"))
}

#[get("/login")]
pub async fn login_form(user: MaybeUser) -> HttpResponse {
    html(views::login(user.as_ref(), &Credentials::default(), None))
}

/// Pipe for logging in as user
/// - url: `{domain}/login`
///
/// # HTTP request requirements
/// ## body
/// - url-encoded form with `username` and `password`
///
/// # Response
/// ## Ok
/// - redirect to the front page with the session cookie set
/// - the form again, either with validation errors or with a message that
///   doesn't tell whether the username or the password was wrong
#[post("/login")]
pub async fn login(
    session: Session,
    user: MaybeUser,
    form: OptionalForm,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let creds = credentials_from(form);
    if !creds.is_valid() {
        return Ok(html(views::login(user.as_ref(), &creds, None)));
    }

    if let Some(found) = app_state.db.user_by_username(&creds.username)? {
        if verify_password(&found.password, &creds.password) {
            login_user(&session, &found)?;
            log::info!("{} logged in", found.username);
            return Ok(redirect("/"));
        }
    }

    log::info!("Failed login for {}", creds.username);
    Ok(html(views::login(user.as_ref(), &creds, Some(WRONG_CREDENTIALS))))
}

#[get("/logout")]
pub async fn logout(user: CurrentUser, session: Session) -> HttpResponse {
    logout_user(&session);
    log::info!("{} logged out", user.0.username);

    redirect("/")
}
