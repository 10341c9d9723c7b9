//! In-memory store with the same behaviour as the Postgres one.
//! Used when no `DATABASE_URL` is configured and by the handler tests.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{
    models::{
        dog::{DogRecord, NewDogRecord},
        post::{BlogPost, NewBlogPost},
        user::{NewUser, User},
    },
    pagination::Pagination,
    Database,
};
use crate::app::AppError;

#[derive(Default)]
struct Tables {
    posts: Vec<BlogPost>,
    dogs: Vec<DogRecord>,
    users: Vec<User>,
}

#[derive(Default)]
pub struct MemoryDatabase {
    tables: RwLock<Tables>,
}

impl MemoryDatabase {
    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, AppError> {
        self.tables.read().map_err(|_| AppError::InternalServerError)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, AppError> {
        self.tables.write().map_err(|_| AppError::InternalServerError)
    }

    #[cfg(test)]
    pub fn users(&self) -> Vec<User> {
        self.read().map(|tables| tables.users.clone()).unwrap_or_default()
    }

    #[cfg(test)]
    pub fn dogs(&self) -> Vec<DogRecord> {
        self.read().map(|tables| tables.dogs.clone()).unwrap_or_default()
    }

    #[cfg(test)]
    pub fn posts(&self) -> Vec<BlogPost> {
        self.read().map(|tables| tables.posts.clone()).unwrap_or_default()
    }
}

// Rows are never deleted, so the next id is always one past the row count.
fn next_id(len: usize) -> i32 {
    len as i32 + 1
}

impl Database for MemoryDatabase {
    fn count_posts(&self) -> Result<i64, AppError> {
        Ok(self.read()?.posts.len() as i64)
    }

    fn posts_page(&self, pagination: &Pagination) -> Result<Vec<BlogPost>, AppError> {
        let mut posts = self.read()?.posts.clone();
        posts.sort_by(|a, b| b.date_posted.cmp(&a.date_posted).then(b.id.cmp(&a.id)));

        Ok(posts
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.per_page as usize)
            .collect())
    }

    fn post_by_id(&self, id: i32) -> Result<BlogPost, AppError> {
        self.read()?
            .posts
            .iter()
            .find(|post| post.id == id)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    fn insert_post(&self, post: &NewBlogPost) -> Result<BlogPost, AppError> {
        let mut tables = self.write()?;
        let row = BlogPost {
            id: next_id(tables.posts.len()),
            title: post.title.clone(),
            subtitle: post.subtitle.clone(),
            author: post.author.clone(),
            date_posted: post.date_posted,
            content: post.content.clone(),
        };
        tables.posts.push(row.clone());

        Ok(row)
    }

    fn dogs_by_code(&self, code: &str) -> Result<Vec<DogRecord>, AppError> {
        Ok(self
            .read()?
            .dogs
            .iter()
            .filter(|dog| dog.code == code)
            .take(2)
            .cloned()
            .collect())
    }

    fn insert_dog(&self, dog: &NewDogRecord) -> Result<DogRecord, AppError> {
        let mut tables = self.write()?;
        let row = DogRecord {
            id: next_id(tables.dogs.len()),
            code: dog.code.clone(),
            name: dog.name.clone(),
            image_link: dog.image_link.clone(),
            information: dog.information.clone(),
        };
        tables.dogs.push(row.clone());

        Ok(row)
    }

    fn insert_user(&self, user: &NewUser) -> Result<User, AppError> {
        let mut tables = self.write()?;
        if tables.users.iter().any(|row| row.username == user.username) {
            return Err(AppError::Conflict);
        }
        let row = User {
            id: next_id(tables.users.len()),
            username: user.username.clone(),
            password: user.password.clone(),
            admin: user.admin,
        };
        tables.users.push(row.clone());

        Ok(row)
    }

    fn user_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(self.read()?.users.iter().find(|user| user.id == id).cloned())
    }

    fn user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .read()?
            .users
            .iter()
            .find(|user| user.username == username)
            .cloned())
    }
}
