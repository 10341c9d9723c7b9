pub mod dog;
pub mod post;
pub mod user;
