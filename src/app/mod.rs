pub mod config;
pub mod forms;

use std::{fmt::Display, sync::Arc};
use actix_web::{ResponseError, HttpResponse, http::{header, StatusCode}};
use diesel::result::DatabaseErrorKind;

use crate::{database::{Database, MemoryDatabase, PgDatabase}, views};
use self::config::Config;

/** Used for sharing the persistence layer between request handlers */
#[derive(Clone)]
pub struct AppState{
    pub db: Arc<dyn Database>
}

impl AppState {
    /// Connects to Postgres when the config names a database, otherwise
    /// falls back to the in-memory store.
    pub fn new(config: &Config) -> Result<AppState, AppError> {
        match &config.database_url {
            Some(url) => {
                let db = PgDatabase::connect(url, config.pool_size)?;
                Ok(Self::with_database(Arc::new(db)))
            },
            None => {
                log::warn!("DATABASE_URL not set, using the in-memory store; nothing will be persisted");
                Ok(Self::with_database(Arc::new(MemoryDatabase::default())))
            }
        }
    }

    pub fn with_database(db: Arc<dyn Database>) -> AppState {
        Self { db }
    }
}

/** Holds the errors we will used during request processing */
#[derive(Debug, PartialEq)]
pub enum AppError{
    /// No session, the visitor is sent to the login page
    UnauthorizedError,
    NotFound,
    BadRequest,
    MissingField(&'static str),
    /// A unique column already holds the value
    Conflict,
    InternalServerError,
}

impl Display for AppError{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self{
            AppError::UnauthorizedError => f.write_str("Unauthorized"),
            AppError::NotFound => f.write_str("Not found"),
            AppError::BadRequest => f.write_str("Bad request"),
            AppError::MissingField(field) => write!(f, "Missing form field `{}`", field),
            AppError::Conflict => f.write_str("Already exists"),
            AppError::InternalServerError => f.write_str("Internal server error"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnauthorizedError => StatusCode::SEE_OTHER,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest | AppError::MissingField(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict => StatusCode::CONFLICT,
            AppError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::UnauthorizedError = self {
            return HttpResponse::SeeOther()
                .insert_header((header::LOCATION, "/login"))
                .finish();
        }

        HttpResponse::build(self.status_code())
            .content_type("text/html; charset=utf-8")
            .body(views::error_page(self.status_code(), &self.to_string()).into_string())
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => AppError::NotFound,
            diesel::result::Error::InvalidCString(_) => AppError::BadRequest,
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => AppError::Conflict,
            err => {
                log::error!("Database error: {}", err);
                AppError::InternalServerError
            }
        }
    }
}
impl From<diesel::r2d2::PoolError> for AppError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        log::error!("Could not get a database connection: {}", err);
        AppError::InternalServerError
    }
}

impl std::error::Error for AppError{}
