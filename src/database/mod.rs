pub mod db_utils;
pub mod memory;
pub mod models;
pub mod pagination;
pub mod postgres;

pub use memory::MemoryDatabase;
pub use postgres::PgDatabase;

use crate::app::AppError;
use models::{
    dog::{normalize_code, DogLookup, DogRecord, NewDogRecord},
    post::{BlogPost, NewBlogPost},
    user::{NewUser, User},
};
use pagination::{Pagination, POSTS_PER_PAGE};

/// One page of the post listing.
#[derive(Debug)]
pub struct PostPage {
    pub posts: Vec<BlogPost>,
    pub pagination: Pagination,
}

/// The persistence layer shared by all request handlers.
///
/// Every method is a single read or a single insert; there are no updates
/// or deletes.
pub trait Database: Send + Sync {
    fn count_posts(&self) -> Result<i64, AppError>;
    /// Posts of the page, ordered by `date_posted` newest first
    fn posts_page(&self, pagination: &Pagination) -> Result<Vec<BlogPost>, AppError>;
    fn post_by_id(&self, id: i32) -> Result<BlogPost, AppError>;
    fn insert_post(&self, post: &NewBlogPost) -> Result<BlogPost, AppError>;

    /// At most two records with exactly this code
    fn dogs_by_code(&self, code: &str) -> Result<Vec<DogRecord>, AppError>;
    fn insert_dog(&self, dog: &NewDogRecord) -> Result<DogRecord, AppError>;

    /// Fails with `Conflict` when the username is taken
    fn insert_user(&self, user: &NewUser) -> Result<User, AppError>;
    fn user_by_id(&self, id: i32) -> Result<Option<User>, AppError>;
    fn user_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Returns the requested page of the listing, pages out of range are `NotFound`.
    fn list_posts(&self, page: i64) -> Result<PostPage, AppError> {
        let total = self.count_posts()?;
        let pagination = Pagination::new(page, POSTS_PER_PAGE, total)?;
        let posts = self.posts_page(&pagination)?;

        Ok(PostPage { posts, pagination })
    }

    /// Looks a breed up by free text. Never fails, errors are logged and
    /// reported as `NotFound`.
    fn lookup_dog(&self, query: &str) -> DogLookup {
        let code = normalize_code(query);
        if code.is_empty() {
            return DogLookup::NotFound;
        }

        match self.dogs_by_code(&code) {
            Ok(matches) => {
                if matches.len() > 1 {
                    log::warn!("Dog code '{}' matches more than one record", code);
                }
                DogLookup::from_matches(matches)
            },
            Err(err) => {
                log::warn!("Dog lookup for '{}' failed: {}", code, err);
                DogLookup::NotFound
            }
        }
    }
}
