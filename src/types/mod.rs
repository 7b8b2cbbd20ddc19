mod caller_identity;
mod credential_pair;

pub use caller_identity::*;
pub use credential_pair::*;
