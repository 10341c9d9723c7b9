use std::collections::{BTreeMap, HashMap};

use super::AppError;

pub const USERNAME_LENGTH: (usize, usize) = (5, 15);
pub const PASSWORD_LENGTH: (usize, usize) = (8, 80);

/// Url-encoded form body, keyed by field name.
pub struct FormFields(HashMap<String, String>);

impl FormFields {
    pub fn new(fields: HashMap<String, String>) -> FormFields {
        FormFields(fields)
    }

    /** Returns the field value, a missing key fails the request */
    pub fn required(&self, name: &'static str) -> Result<String, AppError> {
        self.0.get(name).cloned().ok_or(AppError::MissingField(name))
    }

    pub fn optional(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

/// Validation messages per field name, rendered next to the inputs.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FieldErrors(BTreeMap<&'static str, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Username and password as submitted on the login and signup pages.
#[derive(Debug, Default, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub errors: FieldErrors,
}

impl Credentials {
    /// Reads both fields and checks the length bounds, problems land in `errors`.
    pub fn from_form(fields: &FormFields) -> Credentials {
        let mut errors = FieldErrors::default();
        let username = fields.optional("username").unwrap_or_default().to_string();
        let password = fields.optional("password").unwrap_or_default().to_string();

        check_length(&mut errors, "username", &username, USERNAME_LENGTH);
        check_length(&mut errors, "password", &password, PASSWORD_LENGTH);

        Credentials { username, password, errors }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

fn check_length(errors: &mut FieldErrors, field: &'static str, value: &str, (min, max): (usize, usize)) {
    let length = value.chars().count();
    if length == 0 {
        errors.add(field, "This field is required.");
    } else if length < min || length > max {
        errors.add(field, format!("Must be between {} and {} characters long.", min, max));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> FormFields {
        FormFields::new(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
    }

    #[test]
    fn test_required_field() {
        let fields = form(&[("title", "Hello")]);

        pretty_assertions::assert_eq!(fields.required("title"), Ok("Hello".to_string()));
        pretty_assertions::assert_eq!(fields.required("content"), Err(AppError::MissingField("content")));
    }

    #[test]
    fn test_valid_credentials() {
        let creds = Credentials::from_form(&form(&[("username", "alice123"), ("password", "hunter22")]));

        assert!(creds.is_valid());
        pretty_assertions::assert_eq!(creds.username, "alice123");
    }

    #[test]
    fn test_length_bounds() {
        let too_long = "p".repeat(81);
        let longest = "p".repeat(80);
        let cases: [(&str, &str, Option<&str>); 6] = [
            ("abcd", "password1", Some("username")),
            ("abcde", "password", None),
            ("abcdefghijklmnop", "password1", Some("username")),
            ("abcdefghijklmno", "pass123", Some("password")),
            ("abcde", too_long.as_str(), Some("password")),
            ("abcde", longest.as_str(), None),
        ];

        for &(username, password, failing) in cases.iter() {
            let creds = Credentials::from_form(&form(&[("username", username), ("password", password)]));
            match failing {
                Some(field) => {
                    assert!(!creds.is_valid(), "{} / {} should fail", username, password);
                    assert!(!creds.errors.get(field).is_empty());
                }
                None => assert!(creds.is_valid(), "{} / {} should pass", username, password),
            }
        }
    }

    #[test]
    fn test_lengths_count_characters() {
        let creds = Credentials::from_form(&form(&[("username", "ééééé"), ("password", "ünïcödé!")]));
        assert!(creds.is_valid());
    }

    #[test]
    fn test_missing_fields_are_required() {
        let creds = Credentials::from_form(&form(&[]));

        pretty_assertions::assert_eq!(creds.errors.get("username"), &["This field is required.".to_string()]);
        pretty_assertions::assert_eq!(creds.errors.get("password"), &["This field is required.".to_string()]);
    }
}
