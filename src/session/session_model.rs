use serde::{Deserialize, Serialize};

/// Authenticated identity handed back by the external identity provider.
/// The core uses `email` purely as the storage partition key.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub email: String,
    pub display_name: String,
}
