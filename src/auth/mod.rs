pub mod password;

use actix_session::{
    config::CookieContentSecurity, storage::CookieSessionStore, Session, SessionExt,
    SessionMiddleware,
};
use actix_web::{cookie::Key, dev::Payload, web::Data, FromRequest, HttpRequest};
use futures::future::{ready, Ready};

use crate::{
    app::{AppError, AppState},
    database::models::user::User,
};

pub const SESSION_COOKIE: &str = "blogsite_session";
const USER_ID_KEY: &str = "user_id";

/// Signed cookie sessions, the cookie only carries the logged in user id.
pub fn session_middleware(key: Key, secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(SESSION_COOKIE.to_string())
        .cookie_secure(secure)
        .cookie_content_security(CookieContentSecurity::Signed)
        .build()
}

/** Moves the session into the authenticated state for `user` */
pub fn login_user(session: &Session, user: &User) -> Result<(), AppError> {
    session.renew();
    session.insert(USER_ID_KEY, user.id).map_err(|err| {
        log::error!("Could not store the session: {}", err);
        AppError::InternalServerError
    })
}

pub fn logout_user(session: &Session) {
    session.purge();
}

/// Loads the user the session points at. A session whose user no longer
/// exists counts as anonymous.
fn session_user(req: &HttpRequest) -> Result<Option<User>, AppError> {
    let app_state = req
        .app_data::<Data<AppState>>()
        .ok_or(AppError::InternalServerError)?;

    let user_id = req.get_session().get::<i32>(USER_ID_KEY).map_err(|err| {
        log::warn!("Unreadable session: {}", err);
        AppError::UnauthorizedError
    })?;

    match user_id {
        Some(user_id) => app_state.db.user_by_id(user_id),
        None => Ok(None),
    }
}

/// Extractor for routes that need a logged in user.
/// Anonymous requests are redirected to the login page.
pub struct CurrentUser(pub User);

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            session_user(req)
                .and_then(|user| user.map(CurrentUser).ok_or(AppError::UnauthorizedError)),
        )
    }
}

/// Extractor for public routes, used to render the navigation for the visitor.
pub struct MaybeUser(pub Option<User>);

impl MaybeUser {
    pub fn as_ref(&self) -> Option<&User> {
        self.0.as_ref()
    }
}

impl FromRequest for MaybeUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = session_user(req).unwrap_or_else(|err| {
            log::warn!("Could not load the session user: {}", err);
            None
        });

        ready(Ok(MaybeUser(user)))
    }
}
