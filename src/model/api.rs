use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON body returned for every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// Human-readable message naming the offending field or id.
    pub error: String,
}
