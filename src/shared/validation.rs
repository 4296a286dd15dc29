use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating username fields
    /// Must start with letter or underscore and contain only alphanumeric characters and underscores
    /// - Valid: "john_doe", "user123", "_admin", "JohnDoe"
    /// - Invalid: "123user", "-user", "user-name", "user name"
    pub static ref USERNAME_REGEX: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();

    /// Regex for category titles: printable text without leading/trailing whitespace
    /// - Valid: "Books", "Home & Garden", "Toys (vintage)"
    /// - Invalid: " Books", "Books ", "", "Line\nbreak"
    pub static ref CATEGORY_TITLE_REGEX: Regex = Regex::new(r"^\S(?:[^\r\n\t]*\S)?$").unwrap();
}
