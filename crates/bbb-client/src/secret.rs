//! Secret handling for the shared secret.
//!
//! The shared secret signs every request this crate builds, so it must
//! never leak through `Debug` output, log lines or error messages. This
//! module re-exports the [`secrecy`] crate types the rest of the crate
//! uses for it:
//!
//! - [`SecretString`] wraps the secret, prints `[REDACTED]` from any
//!   derived `Debug` impl and zeroizes the value on drop.
//! - [`ExposeSecret`] gates every read behind an explicit
//!   `expose_secret()` call, which keeps each use grep-able.
//!
//! The secret itself stays on the caller's side: it is checksum input,
//! never a transmitted parameter.
//!
//! # Example
//!
//! ```
//! use bbb_client::secret::{ExposeSecret, SecretString};
//!
//! let secret = SecretString::from("s3cr3t");
//! assert_eq!(secret.expose_secret(), "s3cr3t");
//! assert!(format!("{secret:?}").contains("REDACTED"));
//! ```

pub use secrecy::{ExposeSecret, SecretString};

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_output_is_redacted() {
        let secret = SecretString::from("super-secret-value");
        let debug = format!("{secret:?}");

        assert!(!debug.contains("super-secret-value"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_expose_secret_returns_inner_value() {
        let secret = SecretString::from("super-secret-value");
        assert_eq!(secret.expose_secret(), "super-secret-value");
    }
}
