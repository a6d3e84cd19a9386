pub mod env_args;
pub mod error;
pub mod web;

use std::fmt::Debug;

/// Build a closure which logs the error it receives with some context, then returns the given value.
/// Handy with `map_err` to replace a technical error with a domain one.
pub fn log_message_and_return<E: Debug, T>(
    message: &str,
    value_to_return: T,
) -> impl FnOnce(E) -> T {
    move |e| {
        error!("{message}\n{e:#?}");
        value_to_return
    }
}
