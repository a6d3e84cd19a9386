#[cfg(test)]
use std::cell::RefCell;
#[cfg(not(test))]
use std::env;

/// Retrieve the value of a `--name=value` arg passed to the app.
/// The first matching name wins, so aliases can be passed together (e.g. `["-o", "--api-origin"]`).
///
/// /!\ This reads the process args, which makes callers tricky to test.
/// In a test context, wrap the call with `with_env_args(args, fn)`.
pub fn retrieve_arg_value(arg_names: &[&str]) -> Option<String> {
    get_env_args().into_iter().find_map(|arg| {
        arg_names.iter().find_map(|arg_name| {
            arg.strip_prefix(*arg_name)
                .and_then(|rest| rest.strip_prefix('='))
                .map(str::to_owned)
        })
    })
}

/// Retrieve an arg value, falling back to `default_value` when the arg is absent or empty.
pub fn retrieve_arg_value_or(arg_names: &[&str], default_value: &str) -> String {
    retrieve_arg_value(arg_names)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default_value.to_owned())
}

#[cfg(not(test))]
fn get_env_args() -> Vec<String> {
    env::args().collect()
}

#[cfg(test)]
thread_local! {
    /// Args seen by `retrieve_arg_value` while a test runs inside `with_env_args`.
    static ENV_ARGS: RefCell<Vec<String>> = const { RefCell::new(vec![]) };
}

#[cfg(test)]
fn get_env_args() -> Vec<String> {
    ENV_ARGS.with(|args| args.borrow().clone())
}

#[cfg(test)]
/// Run `function` as if the app had been started with `args`.
/// Previous args are restored afterward.
pub fn with_env_args<F, T>(args: Vec<String>, function: F) -> T
where
    F: FnOnce() -> T,
{
    let old_value = ENV_ARGS.with(|refcell| refcell.replace(args));
    let result = function();
    ENV_ARGS.with(|refcell| refcell.replace(old_value));
    result
}
