use sea_orm::{entity::prelude::*, NotSet, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::{author, errors};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "book")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    /// Null once the owning author has been deleted.
    pub author_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Author,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Author => Entity::belongs_to(author::Entity)
                .from(Column::AuthorId)
                .to(author::Column::Id)
                .into(),
        }
    }
}

impl Related<author::Entity> for Entity {
    fn to() -> RelationDef { Relation::Author.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Book row with its author relation resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookWithAuthor {
    pub id: i32,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub author: Option<author::Model>,
}

impl From<(Model, Option<author::Model>)> for BookWithAuthor {
    fn from((book, author): (Model, Option<author::Model>)) -> Self {
        Self { id: book.id, title: book.title, kind: book.kind, author }
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, title: &str, kind: &str, author_id: i32) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: NotSet,
        title: Set(title.to_string()),
        kind: Set(kind.to_string()),
        author_id: Set(Some(author_id)),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find_with_author<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<BookWithAuthor>, errors::ModelError> {
    let row = Entity::find_by_id(id)
        .find_also_related(author::Entity)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(row.map(BookWithAuthor::from))
}

/// Every book with its author, ordered by id.
pub async fn list_with_author<C: ConnectionTrait>(db: &C) -> Result<Vec<BookWithAuthor>, errors::ModelError> {
    let rows = Entity::find()
        .find_also_related(author::Entity)
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(rows.into_iter().map(BookWithAuthor::from).collect())
}

pub async fn list_by_author<C: ConnectionTrait>(db: &C, author_id: i32) -> Result<Vec<BookWithAuthor>, errors::ModelError> {
    let rows = Entity::find()
        .filter(Column::AuthorId.eq(author_id))
        .find_also_related(author::Entity)
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(rows.into_iter().map(BookWithAuthor::from).collect())
}

pub async fn update<C: ConnectionTrait>(db: &C, found: Model, title: &str, kind: &str, author_id: i32) -> Result<Model, errors::ModelError> {
    let mut am: ActiveModel = found.into();
    am.title = Set(title.to_string());
    am.kind = Set(kind.to_string());
    am.author_id = Set(Some(author_id));
    am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<u64, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected)
}
