use axum::{extract::{Path, State}, Json};
use models::author;
use service::{
    dto::{CreateAuthorInput, EditAuthorInput},
    Envelope,
};

use crate::routes::ServerState;

#[utoipa::path(
    get, path = "/api/authors", tag = "authors",
    responses((status = 200, description = "Every author", body = crate::openapi::AuthorListEnvelope))
)]
pub async fn list(State(state): State<ServerState>) -> Json<Envelope<Vec<author::Model>>> {
    Json(state.authors.list_all(&state.db).await.into())
}

#[utoipa::path(
    get, path = "/api/authors/{id}", tag = "authors",
    params(("id" = i32, Path, description = "Author id")),
    responses((status = 200, description = "Author or empty payload", body = crate::openapi::AuthorEnvelope))
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Json<Envelope<author::Model>> {
    Json(state.authors.find_by_id(&state.db, id).await.into())
}

#[utoipa::path(
    get, path = "/api/authors/by-book/{book_id}", tag = "authors",
    params(("book_id" = i32, Path, description = "Book id")),
    responses((status = 200, description = "Author owning the book", body = crate::openapi::AuthorEnvelope))
)]
pub async fn by_book(State(state): State<ServerState>, Path(book_id): Path<i32>) -> Json<Envelope<author::Model>> {
    Json(state.authors.find_by_book_id(&state.db, book_id).await.into())
}

#[utoipa::path(
    post, path = "/api/authors", tag = "authors",
    request_body = crate::openapi::CreateAuthorDoc,
    responses((status = 200, description = "Every author after the insert", body = crate::openapi::AuthorListEnvelope))
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<CreateAuthorInput>) -> Json<Envelope<Vec<author::Model>>> {
    Json(state.authors.create(&state.db, input).await.into())
}

#[utoipa::path(
    put, path = "/api/authors", tag = "authors",
    request_body = crate::openapi::EditAuthorDoc,
    responses((status = 200, description = "Every author after the update", body = crate::openapi::AuthorListEnvelope))
)]
pub async fn edit(State(state): State<ServerState>, Json(input): Json<EditAuthorInput>) -> Json<Envelope<Vec<author::Model>>> {
    Json(state.authors.edit(&state.db, input).await.into())
}

#[utoipa::path(
    delete, path = "/api/authors/{id}", tag = "authors",
    params(("id" = i32, Path, description = "Author id")),
    responses((status = 200, description = "Remaining authors", body = crate::openapi::AuthorListEnvelope))
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Json<Envelope<Vec<author::Model>>> {
    Json(state.authors.delete(&state.db, id).await.into())
}
