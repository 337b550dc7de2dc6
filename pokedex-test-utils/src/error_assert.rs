use std::fmt::Display;

/// [`assert`]s that the result is an error with the given message.
///
/// The message is compared against the full error chain (`{:#}`).
#[track_caller]
pub fn assert_error_message<T, E>(result: Result<T, E>, message: &str)
where
    E: Display,
{
    match result {
        Ok(_) => panic!("expected error \"{message}\", got Ok"),
        Err(err) => pretty_assertions::assert_eq!(format!("{err:#}"), message),
    }
}

/// [`assert`]s that the result is an error that contains the given message.
#[track_caller]
pub fn assert_error_message_contains<T, E>(result: Result<T, E>, message: &str)
where
    E: Display,
{
    match result {
        Ok(_) => panic!("expected error containing \"{message}\", got Ok"),
        Err(err) => {
            let err = format!("{err:#}");
            assert!(
                err.contains(message),
                "expected error containing \"{message}\", got \"{err}\""
            );
        }
    }
}
