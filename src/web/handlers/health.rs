//! # Health Check Handlers
//!
//! Constant liveness response for platform port-bind checks.

use crate::constants::LIVENESS_BODY;

/// Liveness probe: GET / and GET /health
///
/// Always answers with the same text.
pub async fn liveness() -> &'static str {
    LIVENESS_BODY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness_is_constant() {
        assert_eq!(liveness().await, "KSP monitor is running");
        assert_eq!(liveness().await, liveness().await);
    }
}
