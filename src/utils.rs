use std::env::var;

/// Get the value of an ENV var, or a default
///
/// The default is used when the variable is not set, or set to an empty
/// string
pub fn env_var_or_else(var_name: &'static str, or_else: fn() -> String) -> String {
    match var(var_name) {
        Ok(value) if !value.is_empty() => value,
        _ => or_else(),
    }
}
