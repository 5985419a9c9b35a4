use estatedesk_core::{AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

/// Placeholder rendered when a referenced record cannot be resolved.
pub const UNRESOLVED_REFERENCE_PLACEHOLDER: &str = "Not assigned";

/// Token replaced with the record id inside route templates.
pub const ROUTE_ID_PLACEHOLDER: &str = "{id}";

/// Business record type eligible for cross-entity search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    /// Property listing.
    Property,
    /// Dashboard user.
    User,
    /// Sales or rental lead.
    Lead,
    /// Deal.
    Deal,
}

impl EntityType {
    /// Returns a stable token for this entity type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Property => "property",
            Self::User => "user",
            Self::Lead => "lead",
            Self::Deal => "deal",
        }
    }

    /// Returns the label shown beside results of this type.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Property => "Property",
            Self::User => "User",
            Self::Lead => "Lead",
            Self::Deal => "Deal",
        }
    }

    /// Returns the detail route template for records of this type.
    #[must_use]
    pub fn route_template(&self) -> &'static str {
        match self {
            Self::Property => "/properties/{id}",
            Self::User => "/users/{id}",
            Self::Lead => "/leads/{id}",
            Self::Deal => "/deals/{id}",
        }
    }
}

/// Kind of deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealType {
    /// Property sale.
    Sale,
    /// Rental agreement.
    Rental,
}

impl DealType {
    /// Returns the human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sale => "Sale",
            Self::Rental => "Rental",
        }
    }
}

/// Pipeline status of a deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealStatus {
    /// Parties are negotiating.
    Negotiation,
    /// A formal proposal was sent.
    Proposal,
    /// Deal was signed.
    Closed,
    /// Deal fell through.
    Cancelled,
}

impl DealStatus {
    /// Returns the human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Negotiation => "Negotiation",
            Self::Proposal => "Proposal",
            Self::Closed => "Closed",
            Self::Cancelled => "Cancelled",
        }
    }
}

fn optional_reference(value: Option<String>) -> Option<String> {
    value.and_then(|value| {
        let trimmed = value.trim().to_owned();
        (!trimmed.is_empty()).then_some(trimmed)
    })
}

/// Property listing as exposed by the data-access layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyRecord {
    id: NonEmptyString,
    title: NonEmptyString,
    neighborhood: String,
    city: String,
    owner_name: String,
    responsible_agent_id: Option<String>,
}

impl PropertyRecord {
    /// Creates a validated property record.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        neighborhood: impl Into<String>,
        city: impl Into<String>,
        owner_name: impl Into<String>,
        responsible_agent_id: Option<String>,
    ) -> AppResult<Self> {
        Ok(Self {
            id: NonEmptyString::new(id)?,
            title: NonEmptyString::new(title)?,
            neighborhood: neighborhood.into(),
            city: city.into(),
            owner_name: owner_name.into(),
            responsible_agent_id: optional_reference(responsible_agent_id),
        })
    }

    /// Returns the record id.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the listing title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Returns the neighborhood.
    #[must_use]
    pub fn neighborhood(&self) -> &str {
        self.neighborhood.as_str()
    }

    /// Returns the city.
    #[must_use]
    pub fn city(&self) -> &str {
        self.city.as_str()
    }

    /// Returns the owner's name.
    #[must_use]
    pub fn owner_name(&self) -> &str {
        self.owner_name.as_str()
    }

    /// Returns the responsible agent's user id.
    #[must_use]
    pub fn responsible_agent_id(&self) -> Option<&str> {
        self.responsible_agent_id.as_deref()
    }
}

/// Dashboard user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    id: NonEmptyString,
    name: NonEmptyString,
    email: String,
}

impl UserRecord {
    /// Creates a validated user record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> AppResult<Self> {
        Ok(Self {
            id: NonEmptyString::new(id)?,
            name: NonEmptyString::new(name)?,
            email: email.into(),
        })
    }

    /// Returns the record id.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the user's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the user's email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

/// Prospective client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadRecord {
    id: NonEmptyString,
    name: NonEmptyString,
    email: String,
    assigned_agent_id: Option<String>,
}

impl LeadRecord {
    /// Creates a validated lead record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        assigned_agent_id: Option<String>,
    ) -> AppResult<Self> {
        Ok(Self {
            id: NonEmptyString::new(id)?,
            name: NonEmptyString::new(name)?,
            email: email.into(),
            assigned_agent_id: optional_reference(assigned_agent_id),
        })
    }

    /// Returns the record id.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the lead's name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the lead's email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Returns the assigned agent's user id.
    #[must_use]
    pub fn assigned_agent_id(&self) -> Option<&str> {
        self.assigned_agent_id.as_deref()
    }
}

/// Sale or rental deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealRecord {
    id: NonEmptyString,
    deal_type: DealType,
    status: DealStatus,
    agent_id: Option<String>,
}

impl DealRecord {
    /// Creates a validated deal record.
    pub fn new(
        id: impl Into<String>,
        deal_type: DealType,
        status: DealStatus,
        agent_id: Option<String>,
    ) -> AppResult<Self> {
        Ok(Self {
            id: NonEmptyString::new(id)?,
            deal_type,
            status,
            agent_id: optional_reference(agent_id),
        })
    }

    /// Returns the record id.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the deal type.
    #[must_use]
    pub fn deal_type(&self) -> DealType {
        self.deal_type
    }

    /// Returns the deal status.
    #[must_use]
    pub fn status(&self) -> DealStatus {
        self.status
    }

    /// Returns the responsible agent's user id.
    #[must_use]
    pub fn agent_id(&self) -> Option<&str> {
        self.agent_id.as_deref()
    }
}

/// Searchable business record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchableEntity<'a> {
    /// Property listing.
    Property(&'a PropertyRecord),
    /// Dashboard user.
    User(&'a UserRecord),
    /// Lead.
    Lead(&'a LeadRecord),
    /// Deal.
    Deal(&'a DealRecord),
}

impl SearchableEntity<'_> {
    /// Returns the entity type tag.
    #[must_use]
    pub fn entity_type(&self) -> EntityType {
        match self {
            Self::Property(_) => EntityType::Property,
            Self::User(_) => EntityType::User,
            Self::Lead(_) => EntityType::Lead,
            Self::Deal(_) => EntityType::Deal,
        }
    }

    /// Returns the record id.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Property(record) => record.id(),
            Self::User(record) => record.id(),
            Self::Lead(record) => record.id(),
            Self::Deal(record) => record.id(),
        }
    }

    /// Returns the user id this record references as its agent.
    #[must_use]
    pub fn agent_reference(&self) -> Option<&str> {
        match self {
            Self::Property(record) => record.responsible_agent_id(),
            Self::User(_) => None,
            Self::Lead(record) => record.assigned_agent_id(),
            Self::Deal(record) => record.agent_id(),
        }
    }

    /// Builds the searchable projection given the resolved agent name.
    #[must_use]
    pub fn document(&self, agent_name: &str) -> SearchDocument {
        let (title, subtitle, matchable_fields) = match self {
            Self::Property(record) => (
                record.title().to_owned(),
                format!("{}, {}", record.neighborhood(), record.city()),
                vec![
                    record.title().to_owned(),
                    record.neighborhood().to_owned(),
                    record.city().to_owned(),
                    record.owner_name().to_owned(),
                    agent_name.to_owned(),
                ],
            ),
            Self::User(record) => (
                record.name().to_owned(),
                record.email().to_owned(),
                vec![record.name().to_owned(), record.email().to_owned()],
            ),
            Self::Lead(record) => (
                record.name().to_owned(),
                record.email().to_owned(),
                vec![
                    record.name().to_owned(),
                    record.email().to_owned(),
                    agent_name.to_owned(),
                ],
            ),
            Self::Deal(record) => (
                format!("{} #{}", record.deal_type().label(), record.id()),
                format!("{} · {}", record.status().label(), agent_name),
                vec![
                    record.deal_type().label().to_owned(),
                    record.status().label().to_owned(),
                    agent_name.to_owned(),
                ],
            ),
        };

        SearchDocument {
            id: self.id().to_owned(),
            entity_type: self.entity_type(),
            title,
            subtitle,
            matchable_fields,
        }
    }
}

/// Display and match projection of one searchable record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDocument {
    /// Record id.
    pub id: String,
    /// Entity type tag.
    pub entity_type: EntityType,
    /// Display title.
    pub title: String,
    /// Display subtitle.
    pub subtitle: String,
    /// Raw field values eligible for matching.
    pub matchable_fields: Vec<String>,
}

impl SearchDocument {
    /// Returns whether any field contains the already lower-cased needle.
    #[must_use]
    pub fn matches(&self, lowercase_needle: &str) -> bool {
        self.matchable_fields
            .iter()
            .any(|field| field.to_lowercase().contains(lowercase_needle))
    }

    /// Converts the document into a ranked result.
    #[must_use]
    pub fn into_result(self, rank: usize) -> SearchResult {
        SearchResult {
            id: self.id,
            entity_type: self.entity_type,
            title: self.title,
            subtitle: self.subtitle,
            route: self.entity_type.route_template().to_owned(),
            rank,
        }
    }
}

/// One search hit, rebuilt for every query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Record id.
    pub id: String,
    /// Entity type tag.
    pub entity_type: EntityType,
    /// Display title.
    pub title: String,
    /// Display subtitle.
    pub subtitle: String,
    /// Route template containing `{id}`.
    pub route: String,
    /// 1-based position in the result list.
    pub rank: usize,
}

impl SearchResult {
    /// Returns the detail route with the record id interpolated.
    #[must_use]
    pub fn destination(&self) -> String {
        self.route.replace(ROUTE_ID_PLACEHOLDER, self.id.as_str())
    }
}
