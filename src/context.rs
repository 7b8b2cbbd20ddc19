use crate::sts::Sts;

/// STS is a global service; requests without an explicit region go to us-east-1.
pub const STS_REGION: &str = "us-east-1";

pub struct Context {
    pub sts_client: Sts,
}

impl Context {
    #[cfg(not(test))]
    pub fn new() -> Self {
        use aws_config::BehaviorVersion;
        use aws_sdk_sts::config::Region;

        // Everything is set here so nothing is read from profiles or AWS_* env.
        let sts_config = aws_sdk_sts::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::from_static(STS_REGION))
            .build();

        Self {
            sts_client: Sts::new(sts_config),
        }
    }

    #[cfg(test)]
    pub fn new() -> Self {
        use crate::sts::MockStsImpl;

        Self {
            sts_client: MockStsImpl::default(),
        }
    }
}
