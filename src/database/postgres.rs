use diesel::{
    r2d2::{ConnectionManager, PooledConnection},
    PgConnection,
};

use super::{
    db_utils::{psql_connect_to_db, PgPool},
    models::{
        dog::{DogRecord, NewDogRecord},
        post::{BlogPost, NewBlogPost},
        user::{NewUser, User},
    },
    pagination::Pagination,
    Database,
};
use crate::app::AppError;

/** Postgres backed store, every call checks a connection out of the pool */
#[derive(Clone)]
pub struct PgDatabase {
    pool: PgPool,
}

impl PgDatabase {
    pub fn connect(database_url: &str, pool_size: u32) -> Result<PgDatabase, AppError> {
        Ok(PgDatabase {
            pool: psql_connect_to_db(database_url, pool_size)?,
        })
    }

    fn conn(&self) -> Result<PooledConnection<ConnectionManager<PgConnection>>, AppError> {
        Ok(self.pool.get()?)
    }
}

impl Database for PgDatabase {
    fn count_posts(&self) -> Result<i64, AppError> {
        let conn = self.conn()?;
        BlogPost::count(&conn)
    }

    fn posts_page(&self, pagination: &Pagination) -> Result<Vec<BlogPost>, AppError> {
        let conn = self.conn()?;
        BlogPost::get_page(&conn, pagination)
    }

    fn post_by_id(&self, id: i32) -> Result<BlogPost, AppError> {
        let conn = self.conn()?;
        BlogPost::get_by_id(&conn, id)
    }

    fn insert_post(&self, post: &NewBlogPost) -> Result<BlogPost, AppError> {
        let conn = self.conn()?;
        BlogPost::insert(&conn, post)
    }

    fn dogs_by_code(&self, code: &str) -> Result<Vec<DogRecord>, AppError> {
        let conn = self.conn()?;
        DogRecord::find_by_code(&conn, code)
    }

    fn insert_dog(&self, dog: &NewDogRecord) -> Result<DogRecord, AppError> {
        let conn = self.conn()?;
        DogRecord::insert(&conn, dog)
    }

    fn insert_user(&self, user: &NewUser) -> Result<User, AppError> {
        let conn = self.conn()?;
        User::insert(&conn, user)
    }

    fn user_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let conn = self.conn()?;
        User::find_by_id(&conn, id)
    }

    fn user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let conn = self.conn()?;
        User::find_by_username(&conn, username)
    }
}
