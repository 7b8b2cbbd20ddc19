use anyhow::{Context as _, Result};
use aws_sdk_sts as sts;
use aws_sdk_sts::config::Credentials;
use aws_sdk_sts::operation::get_caller_identity::{
    GetCallerIdentityError, GetCallerIdentityOutput,
};
use tracing::debug;

#[allow(unused_imports)]
use mockall::automock;

use crate::types::{CallerIdentity, CredentialPair};

pub struct StsImpl {
    config: sts::Config,
}

#[cfg(test)]
pub use MockStsImpl as Sts;
#[cfg(not(test))]
pub use StsImpl as Sts;

#[cfg_attr(test, automock)]
impl StsImpl {
    pub fn new(config: sts::Config) -> Self {
        Self { config }
    }

    /// Builds a client bound to `credentials` and sends one GetCallerIdentity request.
    pub async fn get_caller_identity(
        &self,
        credentials: &CredentialPair,
    ) -> Result<GetCallerIdentityOutput, sts::error::SdkError<GetCallerIdentityError>> {
        let config = self
            .config
            .to_builder()
            .credentials_provider(Credentials::from(credentials))
            .build();

        sts::Client::from_conf(config)
            .get_caller_identity()
            .send()
            .await
    }
}

pub async fn get_caller_identity(
    client: &Sts,
    credentials: &CredentialPair,
) -> Result<CallerIdentity> {
    debug!(access_key_id = %credentials.access_key_id, "calling sts:GetCallerIdentity");

    let output = client
        .get_caller_identity(credentials)
        .await
        .context("failed to get caller identity")?;
    let caller_identity = CallerIdentity::try_from(output)?;

    debug!(
        account = %caller_identity.account,
        user_id = ?caller_identity.user_id,
        "resolved caller identity"
    );

    Ok(caller_identity)
}
