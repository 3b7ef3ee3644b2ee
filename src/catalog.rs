use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, sea_query::Expr,
};

use crate::{
    entities::{cinema, movie, show_time},
    error::{AppError, AppResult},
    models::SaleStatus,
};

/// A showtime joined with the movie and cinema it references, for listings.
#[derive(Clone, Debug)]
pub struct ShowtimeListing {
    pub show: show_time::Model,
    pub movie: movie::Model,
    pub cinema: cinema::Model,
}

#[derive(Clone)]
pub struct Catalog {
    db: DatabaseConnection,
}

impl Catalog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn movies(&self) -> AppResult<Vec<movie::Model>> {
        Ok(movie::Entity::find().all(&self.db).await?)
    }

    pub async fn movie(&self, id: i32) -> AppResult<movie::Model> {
        movie::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("movie {id}")))
    }

    pub async fn cinemas(&self) -> AppResult<Vec<cinema::Model>> {
        Ok(cinema::Entity::find().all(&self.db).await?)
    }

    pub async fn cinema(&self, code: i32) -> AppResult<cinema::Model> {
        cinema::Entity::find_by_id(code)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("cinema {code}")))
    }

    pub async fn showtime(&self, id: i32) -> AppResult<show_time::Model> {
        show_time::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("showtime {id}")))
    }

    /// All showtimes ordered by start time, joined with their movie and
    /// cinema. Rows whose references cannot be resolved are skipped.
    pub async fn showtimes(&self) -> AppResult<Vec<ShowtimeListing>> {
        let shows = show_time::Entity::find()
            .order_by_asc(show_time::Column::StartTime)
            .all(&self.db)
            .await?;

        let movies: HashMap<i32, movie::Model> =
            self.movies().await?.into_iter().map(|m| (m.id, m)).collect();
        let cinemas: HashMap<i32, cinema::Model> =
            self.cinemas().await?.into_iter().map(|c| (c.code, c)).collect();

        let mut listings = Vec::with_capacity(shows.len());
        for show in shows {
            let Some(movie) = movies.get(&show.movie_id).cloned() else {
                continue;
            };
            let Some(cinema) = cinemas.get(&show.cinema_code).cloned() else {
                continue;
            };
            listings.push(ShowtimeListing { show, movie, cinema });
        }

        Ok(listings)
    }

    /// Opens ticket sale. Fails if sale has already started.
    pub async fn open_sale(&self, show: show_time::Model) -> AppResult<show_time::Model> {
        self.transition(show, SaleStatus::open_sale).await
    }

    /// Closes an open ticket sale.
    pub async fn close_sale(&self, show: show_time::Model) -> AppResult<show_time::Model> {
        self.transition(show, SaleStatus::close_sale).await
    }

    /// Expires the showtime as played, or as canceled when `canceled` is set.
    pub async fn expire_showtime(
        &self,
        show: show_time::Model,
        canceled: bool,
    ) -> AppResult<show_time::Model> {
        self.transition(show, |s| s.expire(canceled)).await
    }

    /// The status write is conditional on the status the caller read; a
    /// concurrent change in between surfaces as [`AppError::Conflict`] and
    /// nothing is persisted.
    async fn transition<F>(&self, show: show_time::Model, f: F) -> AppResult<show_time::Model>
    where
        F: FnOnce(SaleStatus) -> Result<SaleStatus, AppError>,
    {
        let current = SaleStatus::from_code(show.status)
            .ok_or_else(|| anyhow::anyhow!("unknown sale status code {}", show.status))?;
        let next = f(current)?;

        let result = show_time::Entity::update_many()
            .col_expr(show_time::Column::Status, Expr::value(next.as_code()))
            .filter(show_time::Column::Id.eq(show.id))
            .filter(show_time::Column::Status.eq(current.as_code()))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::Conflict);
        }

        tracing::debug!(
            showtime = show.id,
            from = current.label(),
            to = next.label(),
            "status transition"
        );

        Ok(show_time::Model { status: next.as_code(), ..show })
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{ActiveModelTrait, Set};

    use super::*;
    use crate::db;

    async fn test_catalog() -> Catalog {
        let db = db::connect_and_migrate("sqlite::memory:").await.unwrap();
        Catalog::new(db)
    }

    async fn seed_refs(catalog: &Catalog) -> (i32, i32) {
        let movie = movie::ActiveModel {
            title: Set("Children of Heaven".to_string()),
            director: Set(Some("Majid Majidi".to_string())),
            year: Set(Some(1997)),
            ..Default::default()
        }
        .insert(catalog.db())
        .await
        .unwrap();

        let cinema = cinema::ActiveModel {
            code: Set(101),
            name: Set("Azadi".to_string()),
            city: Set("Tehran".to_string()),
            ..Default::default()
        }
        .insert(catalog.db())
        .await
        .unwrap();

        (movie.id, cinema.code)
    }

    async fn add_show(
        catalog: &Catalog,
        movie_id: i32,
        cinema_code: i32,
        start_time: i64,
        status: SaleStatus,
    ) -> show_time::Model {
        show_time::ActiveModel {
            movie_id: Set(movie_id),
            cinema_code: Set(cinema_code),
            start_time: Set(start_time),
            price: Set(500_000),
            salable_seats: Set(50),
            free_seats: Set(50),
            status: Set(status.as_code()),
            ..Default::default()
        }
        .insert(catalog.db())
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn full_sale_lifecycle() {
        let catalog = test_catalog().await;
        let (movie_id, cinema_code) = seed_refs(&catalog).await;
        let show =
            add_show(&catalog, movie_id, cinema_code, 1_750_000_000, SaleStatus::SaleNotStarted)
                .await;
        let id = show.id;

        let show = catalog.open_sale(show).await.unwrap();
        assert_eq!(show.sale_status(), Some(SaleStatus::SaleOpen));

        let err = catalog.open_sale(show.clone()).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidTransition("sale already started")));
        assert_eq!(catalog.showtime(id).await.unwrap().status, SaleStatus::SaleOpen.as_code());

        let show = catalog.close_sale(show).await.unwrap();
        assert_eq!(show.sale_status(), Some(SaleStatus::SaleClosed));

        let show = catalog.expire_showtime(show, false).await.unwrap();
        assert_eq!(show.sale_status(), Some(SaleStatus::MoviePlayed));

        let err = catalog.expire_showtime(show, true).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidTransition("show already expired")));
        assert_eq!(catalog.showtime(id).await.unwrap().status, SaleStatus::MoviePlayed.as_code());
    }

    #[tokio::test]
    async fn close_sale_rejected_outside_open() {
        let catalog = test_catalog().await;
        let (movie_id, cinema_code) = seed_refs(&catalog).await;

        for status in
            [SaleStatus::SaleNotStarted, SaleStatus::TicketsSold, SaleStatus::MoviePlayed]
        {
            let show = add_show(&catalog, movie_id, cinema_code, 1_750_000_000, status).await;
            let id = show.id;

            let err = catalog.close_sale(show).await.unwrap_err();
            assert!(matches!(err, AppError::InvalidTransition("sale not open")));
            assert_eq!(catalog.showtime(id).await.unwrap().status, status.as_code());
        }
    }

    #[tokio::test]
    async fn expire_cancels_when_asked() {
        let catalog = test_catalog().await;
        let (movie_id, cinema_code) = seed_refs(&catalog).await;
        let show =
            add_show(&catalog, movie_id, cinema_code, 1_750_000_000, SaleStatus::SaleOpen).await;

        let show = catalog.expire_showtime(show, true).await.unwrap();
        assert_eq!(show.sale_status(), Some(SaleStatus::ShowCanceled));
    }

    #[tokio::test]
    async fn stale_reader_loses_the_race() {
        let catalog = test_catalog().await;
        let (movie_id, cinema_code) = seed_refs(&catalog).await;
        let show =
            add_show(&catalog, movie_id, cinema_code, 1_750_000_000, SaleStatus::SaleNotStarted)
                .await;
        let id = show.id;
        let stale = show.clone();

        catalog.open_sale(show).await.unwrap();

        // The stale copy still believes the sale has not started.
        let err = catalog.open_sale(stale).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict));
        assert_eq!(catalog.showtime(id).await.unwrap().status, SaleStatus::SaleOpen.as_code());
    }

    #[tokio::test]
    async fn lookups_signal_not_found() {
        let catalog = test_catalog().await;

        assert!(matches!(catalog.movie(999).await.unwrap_err(), AppError::NotFound(_)));
        assert!(matches!(catalog.cinema(999).await.unwrap_err(), AppError::NotFound(_)));
        assert!(matches!(catalog.showtime(999).await.unwrap_err(), AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn showtimes_ordered_by_start_time() {
        let catalog = test_catalog().await;
        let (movie_id, cinema_code) = seed_refs(&catalog).await;

        for start in [1_750_300_000_i64, 1_750_100_000, 1_750_200_000] {
            add_show(&catalog, movie_id, cinema_code, start, SaleStatus::SaleNotStarted).await;
        }

        let listings = catalog.showtimes().await.unwrap();
        assert_eq!(listings.len(), 3);
        let starts: Vec<i64> = listings.iter().map(|l| l.show.start_time).collect();
        assert!(starts.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(listings[0].movie.title, "Children of Heaven");
        assert_eq!(listings[0].cinema.name, "Azadi");
    }
}
