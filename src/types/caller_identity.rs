use anyhow::anyhow;
use aws_sdk_sts::operation::get_caller_identity::GetCallerIdentityOutput;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    pub account: String,
    pub arn: String,
    pub user_id: Option<String>,
}

impl TryFrom<GetCallerIdentityOutput> for CallerIdentity {
    type Error = anyhow::Error;

    fn try_from(output: GetCallerIdentityOutput) -> Result<Self, Self::Error> {
        Ok(Self {
            account: output
                .account
                .ok_or_else(|| anyhow!("caller identity response has no account"))?,
            arn: output
                .arn
                .ok_or_else(|| anyhow!("caller identity response has no arn"))?,
            user_id: output.user_id,
        })
    }
}
