use axum::{extract::{Path, State}, Json};
use models::book::BookWithAuthor;
use service::{
    dto::{CreateBookInput, EditBookInput},
    Envelope,
};

use crate::routes::ServerState;

#[utoipa::path(
    get, path = "/api/books", tag = "books",
    responses((status = 200, description = "Every book with its author", body = crate::openapi::BookListEnvelope))
)]
pub async fn list(State(state): State<ServerState>) -> Json<Envelope<Vec<BookWithAuthor>>> {
    Json(state.books.list_all(&state.db).await.into())
}

#[utoipa::path(
    get, path = "/api/books/{id}", tag = "books",
    params(("id" = i32, Path, description = "Book id")),
    responses((status = 200, description = "Book or empty payload", body = crate::openapi::BookEnvelope))
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Json<Envelope<BookWithAuthor>> {
    Json(state.books.find_by_id(&state.db, id).await.into())
}

#[utoipa::path(
    get, path = "/api/books/by-author/{author_id}", tag = "books",
    params(("author_id" = i32, Path, description = "Author id")),
    responses((status = 200, description = "Books of the author, possibly empty", body = crate::openapi::BookListEnvelope))
)]
pub async fn by_author(State(state): State<ServerState>, Path(author_id): Path<i32>) -> Json<Envelope<Vec<BookWithAuthor>>> {
    Json(state.books.find_by_author_id(&state.db, author_id).await.into())
}

#[utoipa::path(
    post, path = "/api/books", tag = "books",
    request_body = crate::openapi::CreateBookDoc,
    responses((status = 200, description = "Every book after the insert, or empty payload for an unknown author", body = crate::openapi::BookListEnvelope))
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<CreateBookInput>) -> Json<Envelope<Vec<BookWithAuthor>>> {
    Json(state.books.create(&state.db, input).await.into())
}

#[utoipa::path(
    put, path = "/api/books", tag = "books",
    request_body = crate::openapi::EditBookDoc,
    responses((status = 200, description = "Every book after the update", body = crate::openapi::BookListEnvelope))
)]
pub async fn edit(State(state): State<ServerState>, Json(input): Json<EditBookInput>) -> Json<Envelope<Vec<BookWithAuthor>>> {
    Json(state.books.edit(&state.db, input).await.into())
}

#[utoipa::path(
    delete, path = "/api/books/{id}", tag = "books",
    params(("id" = i32, Path, description = "Book id")),
    responses((status = 200, description = "Remaining books", body = crate::openapi::BookListEnvelope))
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Json<Envelope<Vec<BookWithAuthor>>> {
    Json(state.books.delete(&state.db, id).await.into())
}
