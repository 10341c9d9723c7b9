use actix_web::{http::header, web, HttpResponse};
use maud::Markup;

#[cfg(test)]
macro_rules! init_test_app {
    ($db:expr) => {
        init_test_app!($db, actix_web::cookie::Key::generate())
    };
    ($db:expr, $key:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap($crate::auth::session_middleware($key, false))
                .app_data(actix_web::web::Data::new($crate::app::AppState::with_database($db)))
                .configure($crate::routes::configure),
        )
        .await
    };
}

/// Logs in through the login form and evaluates to the session cookie.
#[cfg(test)]
macro_rules! login_as {
    ($app:expr, $username:expr, $password:expr) => {{
        let req = actix_web::test::TestRequest::post()
            .uri("/login")
            .set_form(&[("username", $username), ("password", $password)])
            .to_request();
        let resp = actix_web::test::call_service(&$app, req).await;
        $crate::routes::session_cookie(&resp).expect("login should set the session cookie")
    }};
}

pub mod blog;
pub mod dog;
pub mod user;

/// Registers every route of the site.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        //Blog routes
        .service(blog::index)
        .service(blog::index_page)
        .service(blog::show_post)
        .service(blog::about)
        .service(blog::add_post_form)
        .service(blog::add_post)
        //Dog routes
        .service(dog::lookup_dog)
        .service(dog::add_dog_form)
        .service(dog::add_dog)
        //User routes
        .service(user::signup_form)
        .service(user::signup)
        .service(user::login_form)
        .service(user::login)
        .service(user::logout);
}

pub(crate) fn html(markup: Markup) -> HttpResponse {
    html_with_status(HttpResponse::Ok(), markup)
}

pub(crate) fn html_with_status(mut builder: actix_web::HttpResponseBuilder, markup: Markup) -> HttpResponse {
    builder
        .content_type("text/html; charset=utf-8")
        .body(markup.into_string())
}

pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

#[cfg(test)]
pub(crate) fn session_cookie<B>(
    resp: &actix_web::dev::ServiceResponse<B>,
) -> Option<actix_web::cookie::Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|cookie| cookie.name() == crate::auth::SESSION_COOKIE)
        .map(|cookie| cookie.into_owned())
}

#[cfg(test)]
pub(crate) fn location<B>(resp: &actix_web::dev::ServiceResponse<B>) -> Option<String> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(String::from)
}
