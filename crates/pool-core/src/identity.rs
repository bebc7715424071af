//! Worker identity material.

use secrecy::SecretString;

/// Opaque identity material presented to gateways.
///
/// The pool never inspects the secret; it is threaded through to the
/// transport, which signs or attaches it at the wire level. The public
/// `id` is safe to log.
#[derive(Debug, Clone)]
pub struct Credential {
    id: String,
    secret: SecretString,
}

impl Credential {
    /// Create a credential from a public identifier and its secret material.
    #[must_use]
    pub fn new(id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            secret: SecretString::new(secret.into()),
        }
    }

    /// Public identifier of the holder.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The secret material, still wrapped. Transports expose it only at
    /// the point of signing.
    #[must_use]
    pub fn secret(&self) -> &SecretString {
        &self.secret
    }
}
