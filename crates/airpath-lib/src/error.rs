use thiserror::Error;

/// Convenient result alias for the airpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// An unreachable goal is not an error; searches report it through
/// [`crate::path::SearchResult::NotFound`]. The only failure mode in the core
/// is a reference to an airport code that was never added to the map, which
/// always indicates bad input from the data-loading or selection collaborator.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an operation references an airport code absent from the map.
    #[error("unknown airport code: {code}{}", format_suggestions(.suggestions))]
    UnknownAirport {
        code: String,
        suggestions: Vec<String>,
    },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
