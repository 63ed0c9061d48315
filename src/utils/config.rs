/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The value used when the variable is missing or unparsable
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Gets an environment variable and parses it, returning None if not found or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.trim().parse::<T>().ok(),
        Err(_) => None,
    }
}

/// Gets a comma separated environment variable as a list
///
/// Returns `None` when the variable is missing, empty, or any item fails to parse.
///
/// # Example
/// ```ignore
/// // UBIDOTS_AUTH_FAILURE_CODES=401,403
/// let codes: Option<Vec<u16>> = get_env_list("UBIDOTS_AUTH_FAILURE_CODES");
/// ```
pub fn get_env_list<T: FromStr>(env_var: &str) -> Option<Vec<T>>
where
    <T as FromStr>::Err: Debug,
{
    let raw = env::var(env_var).ok()?;
    let items = raw
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| item.parse::<T>())
        .collect::<Result<Vec<T>, _>>();

    match items {
        Ok(list) if !list.is_empty() => Some(list),
        Ok(_) => None,
        Err(e) => {
            error!("Failed to parse {}: {}: {:?}", env_var, raw, e);
            None
        }
    }
}
