table! {
    blogpost (id) {
        id -> Int4,
        title -> Varchar,
        subtitle -> Varchar,
        author -> Varchar,
        date_posted -> Timestamp,
        content -> Text,
    }
}

table! {
    dogdata (id) {
        id -> Int4,
        code -> Varchar,
        name -> Varchar,
        image_link -> Text,
        information -> Text,
    }
}

table! {
    users (id) {
        id -> Int4,
        username -> Varchar,
        password -> Varchar,
        admin -> Bool,
    }
}

allow_tables_to_appear_in_same_query!(
    blogpost,
    dogdata,
    users,
);
