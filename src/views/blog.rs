use maud::{html, Markup};

use super::{dog_search, layout};
use crate::database::{models::{post::BlogPost, user::User}, PostPage};

pub fn index(user: Option<&User>, page: &PostPage) -> Markup {
    let pagination = &page.pagination;

    layout("Home", user, html! {
        h1 { "Latest posts" }
        (dog_search(""))
        @if page.posts.is_empty() {
            p { "Nothing has been posted yet." }
        }
        @for post in &page.posts {
            article {
                h2 { a href=(format!("/blogs/{}", post.id)) { (post.title) } }
                p class="subtitle" { (post.subtitle) }
                p class="meta" { "Posted by " (post.author) " on " (post.long_date()) }
            }
        }
        @if pagination.pages() > 1 {
            div class="pager" {
                @if let Some(prev) = pagination.prev() {
                    a href=(format!("/{}", prev)) { "← Newer posts" }
                } @else {
                    span {}
                }
                span class="meta" { "Page " (pagination.page) " of " (pagination.pages()) }
                @if let Some(next) = pagination.next() {
                    a href=(format!("/{}", next)) { "Older posts →" }
                    a href=(format!("/{}", pagination.pages())) { "Oldest" }
                } @else {
                    span {}
                }
            }
        }
    })
}

pub fn post(user: Option<&User>, post: &BlogPost, date_posted: &str) -> Markup {
    layout(&post.title, user, html! {
        article {
            h1 { (post.title) }
            p class="subtitle" { (post.subtitle) }
            p class="meta" { "Posted by " (post.author) " on " (date_posted) }
            div class="content" { (post.content) }
        }
        p { a href="/" { "← All posts" } }
    })
}

pub fn about(user: Option<&User>) -> Markup {
    layout("About", user, html! {
        h1 { "About" }
        p {
            "A small personal blog. Posts are written by registered members, "
            "and the breed lookup on the front page answers questions about dogs."
        }
        p { "Sign up to write posts of your own." }
    })
}

pub fn add_post_form(user: &User) -> Markup {
    layout("New post", Some(user), html! {
        h1 { "New post" }
        form method="post" action="/addpost" {
            label for="title" { "Title" }
            input type="text" id="title" name="title" maxlength="50" required;
            label for="subtitle" { "Subtitle" }
            input type="text" id="subtitle" name="subtitle" maxlength="50" required;
            label for="author" { "Author" }
            input type="text" id="author" name="author" maxlength="20" value=(user.username) required;
            label for="content" { "Content" }
            textarea id="content" name="content" rows="12" required {}
            p { button type="submit" { "Publish" } }
        }
    })
}
