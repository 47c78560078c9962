/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads and parses an environment variable, falling back to `default`
/// when it is unset or does not parse
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|e| {
            error!("Failed to parse {}={:?}: {:?}, using default", env_var, val, e);
            default
        }),
        Err(_) => default,
    }
}

/// Reads and parses an environment variable, `None` when unset or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T> {
    env::var(env_var).ok().and_then(|val| val.parse::<T>().ok())
}

/// Reads a string variable the client cannot work without.
///
/// Missing or blank values fall back to `default` and are reported at
/// error level so a misconfigured deployment shows up in the logs.
pub fn get_required_env(env_var: &str, default: &str) -> String {
    match env::var(env_var) {
        Ok(val) if !val.trim().is_empty() => val,
        _ => {
            error!("{} not found in environment variables or .env file", env_var);
            default.to_string()
        }
    }
}
