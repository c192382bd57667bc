//! OpenAPI document. The schema structs mirror the JSON shapes of the models
//! and envelopes; they are never constructed at runtime.

use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDoc { pub id: i32, pub first_name: String, pub last_name: String }

#[derive(Serialize, ToSchema)]
pub struct BookDoc {
    pub id: i32,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub author: Option<AuthorDoc>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthorDoc { pub first_name: String, pub last_name: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditAuthorDoc { pub id: i32, pub first_name: String, pub last_name: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookDoc {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub author_id: i32,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditBookDoc {
    pub id: i32,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub author_id: i32,
}

#[derive(Serialize, ToSchema)]
pub struct AuthorEnvelope { pub data: Option<AuthorDoc>, pub message: String, pub success: bool }

#[derive(Serialize, ToSchema)]
pub struct AuthorListEnvelope { pub data: Option<Vec<AuthorDoc>>, pub message: String, pub success: bool }

#[derive(Serialize, ToSchema)]
pub struct BookEnvelope { pub data: Option<BookDoc>, pub message: String, pub success: bool }

#[derive(Serialize, ToSchema)]
pub struct BookListEnvelope { pub data: Option<Vec<BookDoc>>, pub message: String, pub success: bool }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::authors::list,
        crate::routes::authors::get,
        crate::routes::authors::by_book,
        crate::routes::authors::create,
        crate::routes::authors::edit,
        crate::routes::authors::delete,
        crate::routes::books::list,
        crate::routes::books::get,
        crate::routes::books::by_author,
        crate::routes::books::create,
        crate::routes::books::edit,
        crate::routes::books::delete,
    ),
    components(
        schemas(
            HealthResponse,
            AuthorDoc,
            BookDoc,
            CreateAuthorDoc,
            EditAuthorDoc,
            CreateBookDoc,
            EditBookDoc,
            AuthorEnvelope,
            AuthorListEnvelope,
            BookEnvelope,
            BookListEnvelope,
        )
    ),
    tags(
        (name = "health"),
        (name = "authors"),
        (name = "books")
    )
)]
pub struct ApiDoc;
