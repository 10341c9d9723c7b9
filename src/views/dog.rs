use maud::{html, Markup};

use super::{dog_search, layout};
use crate::database::models::{dog::DogLookup, user::User};

pub const ACCESS_DENIED: &str = "You do not have access";

pub fn dog_result(user: Option<&User>, query: &str, lookup: &DogLookup) -> Markup {
    layout("Dog breeds", user, html! {
        (dog_search(query))
        @match lookup {
            DogLookup::Found(dog) => {
                article {
                    h1 { (dog.name) }
                    @if let Some(src) = dog.safe_image_link() {
                        img class="dog" src=(src) alt=(dog.name);
                    }
                    div class="content" { (dog.information) }
                }
            },
            DogLookup::NotFound => {
                h1 { "No breed found" }
                p { "We don't know a breed called “" (query) "”. Check the spelling and try again." }
            },
        }
    })
}

pub fn add_dog_form(user: &User) -> Markup {
    layout("New breed", Some(user), html! {
        h1 { "New breed" }
        form method="post" action="/adddog" {
            label for="code" { "Code" }
            input type="text" id="code" name="code" maxlength="50" required;
            label for="name" { "Name" }
            input type="text" id="name" name="name" maxlength="100" required;
            label for="image_link" { "Image link" }
            input type="url" id="image_link" name="image_link" required;
            label for="information" { "Information" }
            textarea id="information" name="information" rows="8" required {}
            p { button type="submit" { "Save" } }
        }
    })
}

pub fn access_denied(user: &User) -> Markup {
    layout("Access denied", Some(user), html! {
        h1 { "Access denied" }
        p { (ACCESS_DENIED) }
    })
}
