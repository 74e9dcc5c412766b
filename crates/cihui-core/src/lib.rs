pub mod error;
pub mod prompt;
pub mod response;
pub mod schema;

pub use error::ResponseError;
pub use prompt::build_prompt;
pub use response::parse_entries;
pub use schema::vocabulary_schema;
