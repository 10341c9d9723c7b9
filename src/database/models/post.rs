use chrono::{NaiveDateTime, Utc};
use diesel::{PgConnection, prelude::*};

use crate::{app::AppError, database::pagination::Pagination, schema::{blogpost, self}};

#[derive(Debug, PartialEq, Eq)]
#[derive(Queryable)]
#[derive(Clone)]
pub struct BlogPost {
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub date_posted: NaiveDateTime,
    pub content: String,
}

#[derive(Insertable, Debug, Clone)]
#[table_name = "blogpost"]
pub struct NewBlogPost {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub date_posted: NaiveDateTime,
    pub content: String,
}

impl NewBlogPost {
    /// The post date is stamped here and never changes afterwards.
    pub fn new(title: String, subtitle: String, author: String, content: String) -> NewBlogPost {
        NewBlogPost {
            title,
            subtitle,
            author,
            date_posted: Utc::now().naive_utc(),
            content,
        }
    }
}

impl BlogPost {
    /// Date shown on the post page, e.g. `August 04, 2022`
    pub fn long_date(&self) -> String {
        self.date_posted.format("%B %d, %Y").to_string()
    }

    pub fn insert(conn: &PgConnection, post: &NewBlogPost) -> Result<BlogPost, AppError> {
        let ret_post: BlogPost = diesel::insert_into(schema::blogpost::table)
            .values(post)
            .get_result(conn)?;

        Ok(ret_post)
    }

    pub fn count(conn: &PgConnection) -> Result<i64, AppError> {
        use crate::schema::blogpost::dsl::*;

        Ok(blogpost.count().get_result::<i64>(conn)?)
    }

    /** Returns the posts of one page, newest first */
    pub fn get_page(conn: &PgConnection, pagination: &Pagination) -> Result<Vec<BlogPost>, AppError> {
        use crate::schema::blogpost::dsl::*;

        let posts = blogpost
            .order(date_posted.desc())
            .then_order_by(id.desc())
            .limit(pagination.per_page)
            .offset(pagination.offset())
            .load::<BlogPost>(conn)?;

        Ok(posts)
    }

    pub fn get_by_id(conn: &PgConnection, post_id: i32) -> Result<BlogPost, AppError> {
        use crate::schema::blogpost::dsl::*;

        Ok(blogpost.find(post_id).first::<BlogPost>(conn)?)
    }
}
