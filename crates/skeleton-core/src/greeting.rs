//! Generation-time project constants.
//!
//! These were template parameters when the project was scaffolded; here they
//! are plain build-time constants.

/// Human-readable project name.
pub const PROJECT_NAME: &str = "Skeleton";

/// Line written by [`crate::Library::hello`]. Always `greet(PROJECT_NAME)`.
pub const GREETING: &str = "Hello, Skeleton!";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops;

    #[test]
    fn greeting_is_greet_of_project_name() {
        assert_eq!(GREETING, ops::greet(PROJECT_NAME));
    }

    #[test]
    fn greeting_is_single_line() {
        assert!(!GREETING.contains('\n'));
    }
}
