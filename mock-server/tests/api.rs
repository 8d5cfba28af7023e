use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Movie};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_movies_empty() {
    let app = app();
    let resp = app
        .oneshot(Request::builder().uri("/movies").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let movies: Vec<Movie> = body_json(resp).await;
    assert!(movies.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_movie_returns_201_with_server_assigned_id() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/movies",
            r#"{"title":"Inception","isbn":"111","director":{"firstname":"Chris","lastname":"Nolan"}}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let movie: Movie = body_json(resp).await;
    assert!(!movie.id.is_empty());
    assert_eq!(movie.title, "Inception");
    assert_eq!(movie.isbn, "111");
    assert_eq!(movie.director.unwrap().lastname, "Nolan");
}

#[tokio::test]
async fn create_movie_without_director() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/movies",
            r#"{"title":"Dune","isbn":"222"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let movie: Movie = body_json(resp).await;
    assert!(movie.director.is_none());
}

#[tokio::test]
async fn create_movie_malformed_json_returns_422() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/movies", r#"{"not_title":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get ---

#[tokio::test]
async fn get_movie_not_found() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/movies/no-such-id")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- update ---

#[tokio::test]
async fn update_movie_not_found() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "PUT",
            "/movies/no-such-id",
            r#"{"title":"Nope","isbn":"000"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- delete ---

#[tokio::test]
async fn delete_movie_not_found() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/movies/no-such-id")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle_preserves_order() {
    use tower::Service;

    let mut app = app().into_service();

    // create two movies
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/movies",
            r#"{"title":"Movie One","isbn":"4328","director":{"firstname":"John","lastname":"Doe"}}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let first: Movie = body_json(resp).await;

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/movies",
            r#"{"title":"Movie Two","isbn":"4323","director":{"firstname":"Mervic","lastname":"Devis"}}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let second: Movie = body_json(resp).await;
    assert_ne!(first.id, second.id);

    // list — insertion order
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(Request::builder().uri("/movies").body(String::new()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let movies: Vec<Movie> = body_json(resp).await;
    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].id, first.id);
    assert_eq!(movies[1].id, second.id);

    // get
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .uri(&format!("/movies/{}", first.id))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Movie = body_json(resp).await;
    assert_eq!(fetched.id, first.id);
    assert_eq!(fetched.title, "Movie One");

    // update the first movie — id and list position survive
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/movies/{}", first.id),
            r#"{"title":"Movie One Remastered","isbn":"4328","director":{"firstname":"John","lastname":"Doe"}}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Movie = body_json(resp).await;
    assert_eq!(updated.id, first.id);
    assert_eq!(updated.title, "Movie One Remastered");

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(Request::builder().uri("/movies").body(String::new()).unwrap())
        .await
        .unwrap();
    let movies: Vec<Movie> = body_json(resp).await;
    assert_eq!(movies[0].title, "Movie One Remastered");
    assert_eq!(movies[1].title, "Movie Two");

    // delete the first movie
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("DELETE")
                .uri(&format!("/movies/{}", first.id))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let body = body_bytes(resp).await;
    assert!(body.is_empty());

    // get after delete — 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .uri(&format!("/movies/{}", first.id))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list after delete — only the second movie remains
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(Request::builder().uri("/movies").body(String::new()).unwrap())
        .await
        .unwrap();
    let movies: Vec<Movie> = body_json(resp).await;
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].id, second.id);
}
