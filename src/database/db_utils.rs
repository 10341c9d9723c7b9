use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

use crate::app::AppError;

pub type PgPool = Pool<ConnectionManager<PgConnection>>;

embed_migrations!("migrations");

/// Return a pool of connections to the hosted database, with the
/// tables created if they didn't exist yet.
///
/// # Example
/// ```
/// let pool = psql_connect_to_db("postgres://blog@localhost/blog", 10)?;
/// ```
pub fn psql_connect_to_db(database_url: &str, pool_size: u32) -> Result<PgPool, AppError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder().max_size(pool_size).build(manager)?;

    let conn = pool.get()?;
    embedded_migrations::run(&*conn).map_err(|err| {
        log::error!("Could not run migrations: {}", err);
        AppError::InternalServerError
    })?;
    log::info!("Connected to the database, migrations are up to date");

    Ok(pool)
}
