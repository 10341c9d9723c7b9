use diesel::{PgConnection, prelude::*};

use crate::{app::AppError, schema::{dogdata, self}};

#[derive(Debug, PartialEq, Eq)]
#[derive(Queryable)]
#[derive(Clone)]
pub struct DogRecord {
    pub id: i32,
    /// Lookup key, lowercase without whitespace
    pub code: String,
    pub name: String,
    pub image_link: String,
    pub information: String,
}

#[derive(Insertable, Debug, Clone)]
#[table_name = "dogdata"]
pub struct NewDogRecord {
    pub code: String,
    pub name: String,
    pub image_link: String,
    pub information: String,
}

/// Outcome of a breed lookup. Every failure collapses into `NotFound`.
#[derive(Debug, PartialEq, Eq)]
pub enum DogLookup {
    Found(DogRecord),
    NotFound,
}

/// Turns free text into a lookup code: `" Golden Retriever"` -> `"goldenretriever"`
pub fn normalize_code(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

impl NewDogRecord {
    pub fn new(code: &str, name: String, image_link: String, information: String) -> NewDogRecord {
        NewDogRecord {
            code: normalize_code(code),
            name,
            image_link,
            information,
        }
    }
}

impl DogLookup {
    /// Only a single match counts as found, codes are not unique in the table.
    pub fn from_matches(mut matches: Vec<DogRecord>) -> DogLookup {
        if matches.len() == 1 {
            matches.pop().map(DogLookup::Found).unwrap_or(DogLookup::NotFound)
        } else {
            DogLookup::NotFound
        }
    }
}

impl DogRecord {
    /// The image link if it can go into a `src` attribute (http or https only)
    pub fn safe_image_link(&self) -> Option<&str> {
        let link = self.image_link.trim();
        if link.starts_with("https://") || link.starts_with("http://") {
            Some(link)
        } else {
            None
        }
    }

    pub fn insert(conn: &PgConnection, dog: &NewDogRecord) -> Result<DogRecord, AppError> {
        let ret_dog: DogRecord = diesel::insert_into(schema::dogdata::table)
            .values(dog)
            .get_result(conn)?;

        Ok(ret_dog)
    }

    /** Returns up to two records with the code, enough to tell if the code is ambiguous */
    pub fn find_by_code(conn: &PgConnection, the_code: &str) -> Result<Vec<DogRecord>, AppError> {
        use crate::schema::dogdata::dsl::*;

        let dogs = dogdata
            .filter(code.eq(the_code))
            .order(id.asc())
            .limit(2)
            .load::<DogRecord>(conn)?;

        Ok(dogs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dog(id: i32, code: &str) -> DogRecord {
        DogRecord {
            id,
            code: code.to_string(),
            name: "Labrador Retriever".to_string(),
            image_link: "https://example.com/lab.jpg".to_string(),
            information: "Friendly".to_string(),
        }
    }

    #[test]
    fn test_normalize_code() {
        for input in ["Labrador", "labrador", " l a b r a d o r ", "LABRA\tDOR\n"].iter() {
            pretty_assertions::assert_eq!(normalize_code(input), "labrador");
        }
        pretty_assertions::assert_eq!(normalize_code("Golden Retriever"), "goldenretriever");
        pretty_assertions::assert_eq!(normalize_code("   "), "");
    }

    #[test]
    fn test_new_record_normalizes_code() {
        let record = NewDogRecord::new(" Golden Retriever", "Golden".into(), "x".into(), "y".into());
        pretty_assertions::assert_eq!(record.code, "goldenretriever");
    }

    #[test]
    fn test_lookup_needs_exactly_one_match() {
        pretty_assertions::assert_eq!(DogLookup::from_matches(vec![]), DogLookup::NotFound);
        pretty_assertions::assert_eq!(
            DogLookup::from_matches(vec![dog(1, "labrador")]),
            DogLookup::Found(dog(1, "labrador"))
        );
        pretty_assertions::assert_eq!(
            DogLookup::from_matches(vec![dog(1, "labrador"), dog(2, "labrador")]),
            DogLookup::NotFound
        );
    }

    #[test]
    fn test_safe_image_link() {
        let mut record = dog(1, "labrador");
        pretty_assertions::assert_eq!(record.safe_image_link(), Some("https://example.com/lab.jpg"));

        record.image_link = "javascript:alert(1)".to_string();
        pretty_assertions::assert_eq!(record.safe_image_link(), None);
    }
}
