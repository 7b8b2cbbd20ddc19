use std::fmt;

use aws_sdk_sts::config::Credentials;

const PROVIDER_NAME: &str = "sts-whoami";

/// Static access key / secret pair taken from the command line.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialPair {
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl CredentialPair {
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
        }
    }
}

// The secret never shows up in logs or panic messages.
impl fmt::Debug for CredentialPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialPair")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .finish()
    }
}

impl From<&CredentialPair> for Credentials {
    fn from(pair: &CredentialPair) -> Self {
        Credentials::new(
            pair.access_key_id.clone(),
            pair.secret_access_key.clone(),
            None,
            None,
            PROVIDER_NAME,
        )
    }
}
