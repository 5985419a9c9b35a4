use estatedesk_application::EntityCollectionRepository;
use estatedesk_core::AppResult;
use estatedesk_domain::{DealRecord, LeadRecord, PropertyRecord, UserRecord};

/// Read-only in-memory entity collections for global search.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEntityRepository {
    properties: Vec<PropertyRecord>,
    users: Vec<UserRecord>,
    leads: Vec<LeadRecord>,
    deals: Vec<DealRecord>,
}

impl InMemoryEntityRepository {
    /// Creates a repository serving the given collections in the given order.
    #[must_use]
    pub fn new(
        properties: Vec<PropertyRecord>,
        users: Vec<UserRecord>,
        leads: Vec<LeadRecord>,
        deals: Vec<DealRecord>,
    ) -> Self {
        Self {
            properties,
            users,
            leads,
            deals,
        }
    }

    /// Returns the total number of records across every collection.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.properties.len() + self.users.len() + self.leads.len() + self.deals.len()
    }
}

impl EntityCollectionRepository for InMemoryEntityRepository {
    fn list_properties(&self) -> AppResult<Vec<PropertyRecord>> {
        Ok(self.properties.clone())
    }

    fn list_users(&self) -> AppResult<Vec<UserRecord>> {
        Ok(self.users.clone())
    }

    fn list_leads(&self) -> AppResult<Vec<LeadRecord>> {
        Ok(self.leads.clone())
    }

    fn list_deals(&self) -> AppResult<Vec<DealRecord>> {
        Ok(self.deals.clone())
    }
}
