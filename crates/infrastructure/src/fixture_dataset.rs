//! Seed records served to global search while no data-access layer is wired.

use estatedesk_core::AppResult;
use estatedesk_domain::{DealRecord, DealStatus, DealType, LeadRecord, PropertyRecord, UserRecord};

use crate::InMemoryEntityRepository;

/// Builds the standard fixture dataset.
pub fn standard_dataset() -> AppResult<InMemoryEntityRepository> {
    let users = vec![
        UserRecord::new("u-1", "Marina Costa", "marina.costa@estatedesk.local")?,
        UserRecord::new("u-2", "Rafael Lima", "rafael.lima@estatedesk.local")?,
        UserRecord::new("u-3", "Beatriz Rocha", "beatriz.rocha@estatedesk.local")?,
        UserRecord::new("u-4", "Thiago Alves", "thiago.alves@estatedesk.local")?,
        UserRecord::new("u-5", "Patrícia Mendes", "patricia.mendes@estatedesk.local")?,
        UserRecord::new("u-6", "Carlos Nogueira", "carlos.nogueira@estatedesk.local")?,
    ];

    let properties = vec![
        PropertyRecord::new(
            "p-101",
            "Garden apartment with balcony",
            "Moema",
            "São Paulo",
            "Helena Prado",
            Some("u-3".to_owned()),
        )?,
        PropertyRecord::new(
            "p-102",
            "Penthouse with sea view",
            "Boa Viagem",
            "Recife",
            "Otávio Ramos",
            Some("u-4".to_owned()),
        )?,
        PropertyRecord::new(
            "p-103",
            "Family house near the park",
            "Batel",
            "Curitiba",
            "Lúcia Martins",
            Some("u-3".to_owned()),
        )?,
        PropertyRecord::new(
            "p-104",
            "Commercial room downtown",
            "Centro",
            "Belo Horizonte",
            "Grupo Horizonte",
            Some("u-9".to_owned()),
        )?,
        PropertyRecord::new(
            "p-105",
            "Studio close to the subway",
            "Pinheiros",
            "São Paulo",
            "Fernanda Dias",
            None,
        )?,
    ];

    let leads = vec![
        LeadRecord::new(
            "l-201",
            "João Silva",
            "joao.silva@mail.com",
            Some("u-3".to_owned()),
        )?,
        LeadRecord::new(
            "l-202",
            "Maria Oliveira",
            "maria.oliveira@mail.com",
            Some("u-4".to_owned()),
        )?,
        LeadRecord::new(
            "l-203",
            "Pedro Santos",
            "pedro.santos@mail.com",
            Some("u-42".to_owned()),
        )?,
        LeadRecord::new("l-204", "Ana Ribeiro", "ana.ribeiro@mail.com", None)?,
    ];

    let deals = vec![
        DealRecord::new(
            "d-301",
            DealType::Sale,
            DealStatus::Negotiation,
            Some("u-3".to_owned()),
        )?,
        DealRecord::new(
            "d-302",
            DealType::Rental,
            DealStatus::Closed,
            Some("u-4".to_owned()),
        )?,
        DealRecord::new(
            "d-303",
            DealType::Sale,
            DealStatus::Proposal,
            Some("u-2".to_owned()),
        )?,
        DealRecord::new("d-304", DealType::Rental, DealStatus::Cancelled, None)?,
    ];

    let repository = InMemoryEntityRepository::new(properties, users, leads, deals);
    Ok(repository)
}
