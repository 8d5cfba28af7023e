use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Director {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub isbn: String,
    #[serde(default)]
    pub director: Option<Director>,
}

/// Body accepted by create and update. Ids sent by clients are ignored —
/// the server assigns them.
#[derive(Deserialize)]
pub struct MovieBody {
    pub title: String,
    pub isbn: String,
    #[serde(default)]
    pub director: Option<Director>,
}

// A Vec, not a map: the catalog lists in insertion order.
pub type Db = Arc<RwLock<Vec<Movie>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .route(
            "/movies/{id}",
            get(get_movie).put(update_movie).delete(delete_movie),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_movies(State(db): State<Db>) -> Json<Vec<Movie>> {
    let movies = db.read().await;
    Json(movies.clone())
}

async fn create_movie(
    State(db): State<Db>,
    Json(body): Json<MovieBody>,
) -> (StatusCode, Json<Movie>) {
    let movie = Movie {
        id: Uuid::new_v4().to_string(),
        title: body.title,
        isbn: body.isbn,
        director: body.director,
    };
    db.write().await.push(movie.clone());
    (StatusCode::CREATED, Json(movie))
}

async fn get_movie(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, StatusCode> {
    let movies = db.read().await;
    movies
        .iter()
        .find(|m| m.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_movie(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(body): Json<MovieBody>,
) -> Result<Json<Movie>, StatusCode> {
    let mut movies = db.write().await;
    let movie = movies
        .iter_mut()
        .find(|m| m.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    movie.title = body.title;
    movie.isbn = body.isbn;
    movie.director = body.director;
    Ok(Json(movie.clone()))
}

async fn delete_movie(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut movies = db.write().await;
    let index = movies
        .iter()
        .position(|m| m.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    movies.remove(index);
    Ok(StatusCode::NO_CONTENT)
}
