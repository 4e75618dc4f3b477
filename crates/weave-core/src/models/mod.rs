pub mod query;
pub mod suggestion;

pub use query::SuggestionQuery;
pub use suggestion::{Suggestion, SuggestionPage};
