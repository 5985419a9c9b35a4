use estatedesk_core::AppResult;
use estatedesk_domain::{DealRecord, LeadRecord, PropertyRecord, UserRecord};

/// Read-only access to the collections covered by global search.
///
/// Every method returns its collection in natural order.
pub trait EntityCollectionRepository: Send + Sync {
    /// Lists property listings.
    fn list_properties(&self) -> AppResult<Vec<PropertyRecord>>;

    /// Lists dashboard users.
    fn list_users(&self) -> AppResult<Vec<UserRecord>>;

    /// Lists leads.
    fn list_leads(&self) -> AppResult<Vec<LeadRecord>>;

    /// Lists deals.
    fn list_deals(&self) -> AppResult<Vec<DealRecord>>;
}
