use std::collections::HashMap;

use actix_web::{get, post, web::{self, Data}, HttpResponse};

use super::{html, redirect};
use crate::{
    app::{forms::FormFields, AppError, AppState},
    auth::{CurrentUser, MaybeUser},
    database::models::post::NewBlogPost,
    views,
};

fn listing(app_state: &AppState, user: &MaybeUser, page: i64) -> Result<HttpResponse, AppError> {
    let post_page = app_state.db.list_posts(page)?;

    Ok(html(views::index(user.as_ref(), &post_page)))
}

/// Pipe for the front page, the first page of the post listing
/// - url: `{domain}/`
#[get("/")]
pub async fn index(app_state: Data<AppState>, user: MaybeUser) -> Result<HttpResponse, AppError> {
    listing(&app_state, &user, 1)
}

/// Pipe for a page of the post listing, newest posts first, 4 per page
/// - url: `{domain}/{page}`
///
/// # HTTP request requirements
/// - `{page}` as a parameter, 1-based
///
/// # Response
/// ## Ok
/// - rendered listing page
/// ## Error
/// - Not found, the page is past the last one
#[get("/{page:\\d+}")]
pub async fn index_page(
    path: web::Path<i64>,
    app_state: Data<AppState>,
    user: MaybeUser,
) -> Result<HttpResponse, AppError> {
    listing(&app_state, &user, path.into_inner())
}

/// Pipe for reading a single post
/// - url: `{domain}/blogs/{post_id}`
///
/// # Response
/// ## Ok
/// - rendered post
/// ## Error
/// - Not found
#[get("/blogs/{post_id}")]
pub async fn show_post(
    path: web::Path<i32>,
    app_state: Data<AppState>,
    user: MaybeUser,
) -> Result<HttpResponse, AppError> {
    let post = app_state.db.post_by_id(path.into_inner())?;
    let date_posted = post.long_date();

    Ok(html(views::post(user.as_ref(), &post, &date_posted)))
}

#[get("/about")]
pub async fn about(user: MaybeUser) -> HttpResponse {
    html(views::about(user.as_ref()))
}

#[get("/addpost")]
pub async fn add_post_form(user: CurrentUser) -> HttpResponse {
    html(views::add_post_form(&user.0))
}

/// Pipe for publishing a post, any logged in user may post
/// - url: `{domain}/addpost`
///
/// # HTTP request requirements
/// ## header
/// - session cookie of a logged in user
/// ## body
/// - url-encoded form with `title`, `subtitle`, `author` and `content`
///
/// # Response
/// ## Ok
/// - redirect to the front page
/// ## Error
/// - Redirect to the login page
/// - Bad request, a form field is missing
#[post("/addpost")]
pub async fn add_post(
    user: CurrentUser,
    form: web::Form<HashMap<String, String>>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let fields = FormFields::new(form.into_inner());
    let post = NewBlogPost::new(
        fields.required("title")?,
        fields.required("subtitle")?,
        fields.required("author")?,
        fields.required("content")?,
    );

    let post = app_state.db.insert_post(&post)?;
    log::info!("{} published post {}", user.0.username, post.id);

    Ok(redirect("/"))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test::{self, call_service}};
    use chrono::{Duration, NaiveDate};

    use crate::{
        auth::password::hash_password,
        database::{models::user::NewUser, Database, MemoryDatabase},
        routes::location,
    };
    use super::*;

    fn seed_posts(db: &MemoryDatabase, count: i64) {
        let start = NaiveDate::from_ymd(2022, 8, 1).and_hms(12, 0, 0);
        for i in 0..count {
            db.insert_post(&NewBlogPost {
                title: format!("Post {}", i),
                subtitle: format!("Subtitle {}", i),
                author: "tester".to_string(),
                date_posted: start + Duration::hours(i),
                content: format!("Content {}", i),
            })
            .unwrap();
        }
    }

    fn seed_user(db: &MemoryDatabase) {
        db.insert_user(&NewUser::new("writer1", hash_password("password123"))).unwrap();
    }

    #[actix_rt::test]
    async fn test_front_page_lists_newest_posts() {
        let db = Arc::new(MemoryDatabase::default());
        seed_posts(&db, 6);
        let app = init_test_app!(db.clone());

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = call_service(&app, req).await;
        pretty_assertions::assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let body = std::str::from_utf8(&body).unwrap();
        for shown in ["Post 5", "Post 4", "Post 3", "Post 2"].iter() {
            assert!(body.contains(shown), "{} missing from the first page", shown);
        }
        assert!(!body.contains("Post 1<"));
        assert!(body.contains("Page 1 of 2"));
    }

    #[actix_rt::test]
    async fn test_second_page() {
        let db = Arc::new(MemoryDatabase::default());
        seed_posts(&db, 6);
        let app = init_test_app!(db.clone());

        let req = test::TestRequest::get().uri("/2").to_request();
        let resp = call_service(&app, req).await;
        pretty_assertions::assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let body = std::str::from_utf8(&body).unwrap();
        assert!(body.contains("Post 1<"));
        assert!(body.contains("Post 0<"));
        assert!(!body.contains("Post 2<"));
    }

    #[actix_rt::test]
    async fn test_page_out_of_range() {
        let db = Arc::new(MemoryDatabase::default());
        seed_posts(&db, 6);
        let app = init_test_app!(db.clone());

        for uri in ["/3", "/0", "/99"].iter() {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = call_service(&app, req).await;
            pretty_assertions::assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
        }
    }

    #[actix_rt::test]
    async fn test_empty_front_page() {
        let db = Arc::new(MemoryDatabase::default());
        let app = init_test_app!(db.clone());

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = call_service(&app, req).await;
        pretty_assertions::assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_rt::test]
    async fn test_show_post() {
        let db = Arc::new(MemoryDatabase::default());
        seed_posts(&db, 1);
        let app = init_test_app!(db.clone());

        let req = test::TestRequest::get().uri("/blogs/1").to_request();
        let resp = call_service(&app, req).await;
        pretty_assertions::assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let body = std::str::from_utf8(&body).unwrap();
        assert!(body.contains("Post 0"));
        assert!(body.contains("August 01, 2022"));

        let req = test::TestRequest::get().uri("/blogs/2").to_request();
        let resp = call_service(&app, req).await;
        pretty_assertions::assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_rt::test]
    async fn test_post_content_is_escaped() {
        let db = Arc::new(MemoryDatabase::default());
        db.insert_post(&NewBlogPost::new(
            "<script>alert(1)</script>".to_string(),
            "sub".to_string(),
            "me".to_string(),
            "body".to_string(),
        ))
        .unwrap();
        let app = init_test_app!(db.clone());

        let req = test::TestRequest::get().uri("/blogs/1").to_request();
        let body = test::read_body(call_service(&app, req).await).await;
        let body = std::str::from_utf8(&body).unwrap();

        assert!(!body.contains("<script>alert(1)</script>"));
        assert!(body.contains("&lt;script&gt;"));
    }

    #[actix_rt::test]
    async fn test_about() {
        let db = Arc::new(MemoryDatabase::default());
        let app = init_test_app!(db.clone());

        let req = test::TestRequest::get().uri("/about").to_request();
        let resp = call_service(&app, req).await;
        pretty_assertions::assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_rt::test]
    async fn test_add_post_requires_login() {
        let db = Arc::new(MemoryDatabase::default());
        let app = init_test_app!(db.clone());

        let req = test::TestRequest::get().uri("/addpost").to_request();
        let resp = call_service(&app, req).await;
        pretty_assertions::assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        pretty_assertions::assert_eq!(location(&resp).as_deref(), Some("/login"));

        let req = test::TestRequest::post()
            .uri("/addpost")
            .set_form(&[("title", "t"), ("subtitle", "s"), ("author", "a"), ("content", "c")])
            .to_request();
        let resp = call_service(&app, req).await;
        pretty_assertions::assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert!(db.posts().is_empty());
    }

    #[actix_rt::test]
    async fn test_add_post() {
        let db = Arc::new(MemoryDatabase::default());
        seed_user(&db);
        let app = init_test_app!(db.clone());
        let cookie = login_as!(app, "writer1", "password123");

        let req = test::TestRequest::get().uri("/addpost").cookie(cookie.clone()).to_request();
        let resp = call_service(&app, req).await;
        pretty_assertions::assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::post()
            .uri("/addpost")
            .cookie(cookie)
            .set_form(&[
                ("title", "Hello"),
                ("subtitle", "First post"),
                ("author", "writer1"),
                ("content", "Some words"),
            ])
            .to_request();
        let resp = call_service(&app, req).await;
        pretty_assertions::assert_eq!(resp.status(), StatusCode::FOUND);
        pretty_assertions::assert_eq!(location(&resp).as_deref(), Some("/"));

        let posts = db.posts();
        pretty_assertions::assert_eq!(posts.len(), 1);
        pretty_assertions::assert_eq!(posts[0].title, "Hello");
        pretty_assertions::assert_eq!(posts[0].content, "Some words");
    }

    #[actix_rt::test]
    async fn test_add_post_missing_field() {
        let db = Arc::new(MemoryDatabase::default());
        seed_user(&db);
        let app = init_test_app!(db.clone());
        let cookie = login_as!(app, "writer1", "password123");

        let req = test::TestRequest::post()
            .uri("/addpost")
            .cookie(cookie)
            .set_form(&[("title", "Hello"), ("subtitle", "First post"), ("author", "writer1")])
            .to_request();
        let resp = call_service(&app, req).await;
        pretty_assertions::assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(db.posts().is_empty());
    }
}
