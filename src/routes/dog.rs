use std::collections::HashMap;

use actix_web::{get, post, web::{self, Data}, HttpResponse};

use super::{html, html_with_status, redirect};
use crate::{
    app::{forms::FormFields, AppError, AppState},
    auth::{CurrentUser, MaybeUser},
    database::models::dog::NewDogRecord,
    views,
};

/// Pipe for looking up a dog breed by name
/// - url: `{domain}/dogs`
///
/// # HTTP request requirements
/// ## body
/// - url-encoded form with `dog-name`, spaces and letter case are ignored
///
/// # Response
/// ## Ok
/// - rendered breed, or a "no breed found" page. This never fails, a
///   malformed form is treated like an unknown breed.
#[post("/dogs")]
pub async fn lookup_dog(
    app_state: Data<AppState>,
    user: MaybeUser,
    form: Option<web::Form<HashMap<String, String>>>,
) -> HttpResponse {
    let fields = FormFields::new(form.map(|form| form.into_inner()).unwrap_or_default());
    let query = fields.optional("dog-name").unwrap_or_default();

    let lookup = app_state.db.lookup_dog(query);

    html(views::dog_result(user.as_ref(), query, &lookup))
}

fn denied(user: &CurrentUser) -> HttpResponse {
    log::warn!("{} tried to add a dog breed without being an admin", user.0.username);
    html_with_status(HttpResponse::Forbidden(), views::access_denied(&user.0))
}

#[get("/adddog")]
pub async fn add_dog_form(user: CurrentUser) -> HttpResponse {
    if !user.0.admin {
        return denied(&user);
    }

    html(views::add_dog_form(&user.0))
}

/// Pipe for adding a dog breed, admins only
/// - url: `{domain}/adddog`
///
/// # HTTP request requirements
/// ## header
/// - session cookie of an admin
/// ## body
/// - url-encoded form with `code`, `name`, `image_link` and `information`
///
/// # Response
/// ## Ok
/// - redirect to the front page
/// ## Error
/// - Redirect to the login page
/// - Forbidden, the user is not an admin, whatever the body holds
/// - Bad request, the body is not a form or a form field is missing
#[post("/adddog")]
pub async fn add_dog(
    user: CurrentUser,
    form: Option<web::Form<HashMap<String, String>>>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    if !user.0.admin {
        return Ok(denied(&user));
    }

    let form = form.ok_or(AppError::BadRequest)?;
    let fields = FormFields::new(form.into_inner());
    let dog = NewDogRecord::new(
        &fields.required("code")?,
        fields.required("name")?,
        fields.required("image_link")?,
        fields.required("information")?,
    );

    let dog = app_state.db.insert_dog(&dog)?;
    log::info!("{} added dog breed '{}'", user.0.username, dog.code);

    Ok(redirect("/"))
}
