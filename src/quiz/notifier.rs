use async_trait::async_trait;

use super::lead::LeadRecord;
use crate::core::error::AppResult;

/// Delivers a finished lead to the operator.
///
/// Implementations report failure; callers decide what to do with it.
#[async_trait]
pub trait LeadNotifier: Send + Sync {
    async fn notify(&self, record: &LeadRecord) -> AppResult<()>;
}
