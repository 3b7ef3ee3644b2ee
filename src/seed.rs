//! Demo catalog for an otherwise empty database, behind `SEED_DEMO_DATA`.

use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

use crate::{
    catalog::Catalog,
    entities::{cinema, movie, show_time},
    error::AppResult,
    models::SaleStatus,
};

pub async fn seed_if_empty(catalog: &Catalog) -> AppResult<()> {
    let db = catalog.db();
    if movie::Entity::find().count(db).await? > 0 {
        return Ok(());
    }

    tracing::info!("seeding demo catalog");

    let separation = movie::ActiveModel {
        title: Set("A Separation".to_string()),
        director: Set(Some("Asghar Farhadi".to_string())),
        year: Set(Some(2011)),
        length_min: Set(Some(123)),
        description: Set(Some(
            "A married couple are faced with a difficult decision about their future together."
                .to_string(),
        )),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let children = movie::ActiveModel {
        title: Set("Children of Heaven".to_string()),
        director: Set(Some("Majid Majidi".to_string())),
        year: Set(Some(1997)),
        length_min: Set(Some(89)),
        description: Set(Some(
            "A boy loses his sister's shoes and the siblings scheme to share his pair."
                .to_string(),
        )),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let azadi = cinema::ActiveModel {
        code: Set(101),
        name: Set("Azadi Cineplex".to_string()),
        city: Set("Tehran".to_string()),
        capacity: Set(Some(580)),
        phone: Set(Some("02188555555".to_string())),
        address: Set(Some("Beheshti St, Tehran".to_string())),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let mellat = cinema::ActiveModel {
        code: Set(102),
        name: Set("Mellat Gallery".to_string()),
        city: Set("Tehran".to_string()),
        capacity: Set(Some(300)),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let base = jiff::Timestamp::now().as_second();
    let shows = [
        (separation.id, azadi.code, base + 2 * 3600, SaleStatus::SaleOpen, 12),
        (separation.id, mellat.code, base + 5 * 3600, SaleStatus::SaleNotStarted, 300),
        (children.id, azadi.code, base + 26 * 3600, SaleStatus::SaleOpen, 0),
    ];

    for (movie_id, cinema_code, start_time, status, free_seats) in shows {
        show_time::ActiveModel {
            movie_id: Set(movie_id),
            cinema_code: Set(cinema_code),
            start_time: Set(start_time),
            price: Set(600_000),
            salable_seats: Set(300),
            free_seats: Set(free_seats),
            status: Set(status.as_code()),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    Ok(())
}
