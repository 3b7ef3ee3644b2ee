use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Html,
};

use crate::{AppState, error::AppResult, templates};

pub async fn index() -> Html<String> {
    Html(templates::index_page())
}

pub async fn movie_list(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let movies = state.catalog.movies().await?;
    Ok(Html(templates::movie_list_page(&movies)))
}

pub async fn movie_detail(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<i32>,
) -> AppResult<Html<String>> {
    let movie = state.catalog.movie(movie_id).await?;
    Ok(Html(templates::movie_detail_page(&movie)))
}

pub async fn cinema_list(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let cinemas = state.catalog.cinemas().await?;
    Ok(Html(templates::cinema_list_page(&cinemas)))
}

pub async fn cinema_detail(
    State(state): State<Arc<AppState>>,
    Path(cinema_code): Path<i32>,
) -> AppResult<Html<String>> {
    let cinema = state.catalog.cinema(cinema_code).await?;
    Ok(Html(templates::cinema_detail_page(&cinema)))
}

pub async fn showtime_list(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let showtimes = state.catalog.showtimes().await?;
    Ok(Html(templates::showtime_list_page(&showtimes)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::{AppState, catalog::Catalog, db, router, seed};

    async fn test_app() -> axum::Router {
        let db = db::connect_and_migrate("sqlite::memory:").await.unwrap();
        let catalog = Catalog::new(db);
        seed::seed_if_empty(&catalog).await.unwrap();

        router(Arc::new(AppState { catalog }))
    }

    async fn get(app: axum::Router, uri: &str) -> StatusCode {
        let response =
            app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap();
        response.status()
    }

    #[tokio::test]
    async fn listing_pages_respond() {
        let app = test_app().await;

        assert_eq!(get(app.clone(), "/").await, StatusCode::OK);
        assert_eq!(get(app.clone(), "/movies").await, StatusCode::OK);
        assert_eq!(get(app.clone(), "/cinemas").await, StatusCode::OK);
        assert_eq!(get(app, "/showtimes").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn detail_pages_resolve_by_identity() {
        let app = test_app().await;

        assert_eq!(get(app.clone(), "/movie/1").await, StatusCode::OK);
        assert_eq!(get(app.clone(), "/cinema/101").await, StatusCode::OK);
        assert_eq!(get(app.clone(), "/movie/9999").await, StatusCode::NOT_FOUND);
        assert_eq!(get(app, "/cinema/9999").await, StatusCode::NOT_FOUND);
    }
}
