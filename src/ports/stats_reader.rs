//! Platform statistics reader (read side).

use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// Platform-wide counts for the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdminStats {
    pub total_businesses: u64,
    /// Businesses owning at least one active survey.
    pub active_businesses: u64,
    pub total_participants: u64,
    pub total_surveys: u64,
    /// Surveys whose status is `active`.
    pub active_surveys: u64,
}

#[async_trait]
pub trait StatsReader: Send + Sync {
    async fn get_admin_stats(&self) -> Result<AdminStats, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn StatsReader) {}
    }
}
