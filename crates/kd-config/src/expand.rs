//! `${VAR}` and `${VAR:-default}` expansion for `kd.toml` values.

use crate::ConfigError;

/// Expand variable references in a config value in place.
///
/// Values without `${` are left untouched, so a literal `$` in a host name or
/// directory survives. `field` names the value in the error message.
pub(crate) fn expand_field(value: &mut String, field: &str) -> Result<(), ConfigError> {
    if !value.contains("${") {
        return Ok(());
    }

    let expanded = shellexpand::env_with_context(value.as_str(), |var| -> Result<Option<String>, UnsetVar> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(UnsetVar(var.to_owned())),
        }
    })
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })?
    .into_owned();

    *value = expanded;
    Ok(())
}

struct UnsetVar(String);
