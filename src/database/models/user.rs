use diesel::{PgConnection, prelude::*};

use crate::{app::AppError, schema::{users, self}};

#[derive(Debug, Queryable, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    /// Salted hash of the password, see [crate::auth::password]
    pub password: String,
    pub admin: bool,
}

#[derive(Insertable, Debug, Clone)]
#[table_name = "users"]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub admin: bool,
}

impl NewUser {
    /// New accounts are never admins, the flag is granted in the database.
    pub fn new(username: &str, password_hash: String) -> NewUser {
        NewUser {
            username: username.to_string(),
            password: password_hash,
            admin: false,
        }
    }
}

impl User {
    /// Pushes a new user row in the database and returns it
    ///
    /// # Example
    /// ```
    /// let user = User::insert(
    ///     &conn,
    ///     &NewUser::new("username", hash_password("password")));
    /// ```
    pub fn insert(conn: &PgConnection, user: &NewUser) -> Result<User, AppError> {
        let ret_user: User = diesel::insert_into(schema::users::table)
            .values(user)
            .get_result(conn)?;

        Ok(ret_user)
    }

    /** Returns an user with the id specified */
    pub fn find_by_id(conn: &PgConnection, user_id: i32) -> Result<Option<User>, AppError> {
        use crate::schema::users::dsl::*;

        Ok(users.find(user_id).first::<User>(conn).optional()?)
    }

    /// Returns the first `User` found with the specified username.
    /// # Example
    /// ```
    /// match User::find_by_username(&conn, "username")? {
    ///     Some(user) => println!("{:?}", user),
    ///     None => println!("No user found"),
    /// }
    /// ```
    pub fn find_by_username(conn: &PgConnection, uname: &str) -> Result<Option<User>, AppError> {
        use crate::schema::users::dsl::*;

        let user_found = users
            .filter(username.eq(uname))
            .order(id.asc())
            .first::<User>(conn)
            .optional()?;

        Ok(user_found)
    }
}
