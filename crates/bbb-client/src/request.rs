//! Signed request-URL construction.
//!
//! One routine covers every operation: check the operation's required
//! parameters, serialize the mapping, compute the checksum over the result
//! and emit the final URL. Validation failures surface here, before any
//! network action.

use crate::checksum;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::operation::Operation;
use crate::params::Parameters;
use crate::secret::ExposeSecret;

/// Builds the fully qualified, checksum-authenticated URL for one request.
///
/// The URL has the form
/// `{server_url}api/{operation}?{query}&checksum={digest}`. When the
/// mapping serializes to nothing the query segment disappears and the URL
/// becomes `{server_url}api/{operation}?checksum={digest}`, with the digest
/// computed over the empty string.
///
/// # Errors
///
/// Returns [`ApiError::MissingParameter`] when a parameter required by
/// `operation` is absent or trims to the empty string.
pub fn signed_url(
    config: &ClientConfig,
    operation: Operation,
    params: &Parameters,
) -> Result<String, ApiError> {
    validate(operation, params)?;

    let query = params.to_query_string();
    let digest = checksum::compute(
        operation.as_str(),
        &query,
        config.shared_secret.expose_secret(),
    );

    let url = if query.is_empty() {
        format!("{}api/{}?checksum={}", config.server_url, operation, digest)
    } else {
        format!(
            "{}api/{}?{}&checksum={}",
            config.server_url, operation, query, digest
        )
    };
    Ok(url)
}

/// Checks `params` against the operation's required-key table.
fn validate(operation: Operation, params: &Parameters) -> Result<(), ApiError> {
    for &name in operation.required_parameters() {
        match params.get(name) {
            Some(value) if !value.trim().is_empty() => {}
            _ => return Err(ApiError::MissingParameter { name }),
        }
    }
    Ok(())
}
