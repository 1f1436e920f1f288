use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to rank candidates for a casting
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "casting_id", rename = "castingId")]
    pub casting_id: String,
    /// Identity of the Pro issuing the request, as resolved by the session
    /// provider in the calling layer. Ownership is re-verified in-engine.
    #[validate(length(min = 1))]
    #[serde(alias = "caller_id", rename = "callerId")]
    pub caller_id: String,
    #[serde(default)]
    pub limit: Option<u16>,
}
