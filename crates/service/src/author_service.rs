use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::instrument;

use models::{author, book};
use crate::{
    audit::Auditor,
    dto::{CreateAuthorInput, EditAuthorInput},
    outcome::{Outcome, ServiceResult},
};

const FIND: &str = "Find Author";
const CREATE: &str = "Create Author";
const EDIT: &str = "Edit Author";
const DELETE: &str = "Delete Author";
const LIST: &str = "List Authors";

/// CRUD over authors. Holds no state besides the audit sink; the store
/// handle is passed to every call.
#[derive(Clone, Default)]
pub struct AuthorService {
    audit: Auditor,
}

impl AuthorService {
    pub fn new(audit: Auditor) -> Self { Self { audit } }

    /// Get author by id.
    #[instrument(skip(self, db))]
    pub async fn find_by_id(&self, db: &DatabaseConnection, id: i32) -> ServiceResult<author::Model> {
        let res: ServiceResult<author::Model> = async {
            let Some(found) = author::find(db, id).await? else {
                self.audit.warning(FIND, &format!("Author Id {id} not found."));
                return Ok(Outcome::absent("No record found!"));
            };
            self.audit.success(FIND, &format!("Author Id {} found: {}", found.id, found.full_name()));
            Ok(Outcome::found(found, "Author located!"))
        }
        .await;
        self.audit.settle(FIND, res)
    }

    /// Get the author owning a book.
    #[instrument(skip(self, db))]
    pub async fn find_by_book_id(&self, db: &DatabaseConnection, book_id: i32) -> ServiceResult<author::Model> {
        self.audit.access(FIND, &format!("Find author by book Id {book_id}"));
        let res: ServiceResult<author::Model> = async {
            let Some(found) = book::find_with_author(db, book_id).await? else {
                self.audit.warning(FIND, &format!("Book Id {book_id} not found."));
                return Ok(Outcome::absent("No record found!"));
            };
            let Some(owner) = found.author else {
                self.audit.warning(FIND, &format!("Book Id {book_id} has no author."));
                return Ok(Outcome::absent("No record found!"));
            };
            self.audit.success(FIND, &format!("Author found for book Id {book_id}: {}", owner.full_name()));
            Ok(Outcome::found(owner, "Author located!"))
        }
        .await;
        self.audit.settle(FIND, res)
    }

    /// Create an author; returns every author.
    #[instrument(skip(self, db))]
    pub async fn create(&self, db: &DatabaseConnection, input: CreateAuthorInput) -> ServiceResult<Vec<author::Model>> {
        let res: ServiceResult<Vec<author::Model>> = async {
            let txn = db.begin().await?;
            let created = author::create(&txn, &input.first_name, &input.last_name).await?;
            let all = author::list_all(&txn).await?;
            txn.commit().await?;
            self.audit.success(CREATE, &format!("Author Id {} created successfully!", created.id));
            Ok(Outcome::found(all, "Author created successfully!"))
        }
        .await;
        self.audit.settle(CREATE, res)
    }

    /// Overwrite both names; returns every author.
    #[instrument(skip(self, db), fields(id = input.id))]
    pub async fn edit(&self, db: &DatabaseConnection, input: EditAuthorInput) -> ServiceResult<Vec<author::Model>> {
        self.audit.access(EDIT, &format!("Attempt to edit author Id {}", input.id));
        let res: ServiceResult<Vec<author::Model>> = async {
            let txn = db.begin().await?;
            let Some(found) = author::find(&txn, input.id).await? else {
                self.audit.warning(EDIT, &format!("Author Id {} not found.", input.id));
                return Ok(Outcome::absent("No author found!"));
            };
            let updated = author::rename(&txn, found, &input.first_name, &input.last_name).await?;
            let all = author::list_all(&txn).await?;
            txn.commit().await?;
            self.audit.success(EDIT, &format!("Author Id {} edited: {}", updated.id, updated.full_name()));
            Ok(Outcome::found(all, "Data updated successfully!"))
        }
        .await;
        self.audit.settle(EDIT, res)
    }

    /// Remove an author; its books stay with no author. Returns every author.
    #[instrument(skip(self, db))]
    pub async fn delete(&self, db: &DatabaseConnection, id: i32) -> ServiceResult<Vec<author::Model>> {
        let res: ServiceResult<Vec<author::Model>> = async {
            let txn = db.begin().await?;
            if author::find(&txn, id).await?.is_none() {
                self.audit.warning(DELETE, &format!("Author Id {id} not found."));
                return Ok(Outcome::absent("No author found!"));
            }
            author::delete(&txn, id).await?;
            let all = author::list_all(&txn).await?;
            txn.commit().await?;
            self.audit.success(DELETE, &format!("Author Id {id} deleted successfully!"));
            Ok(Outcome::found(all, "Author removed successfully!"))
        }
        .await;
        self.audit.settle(DELETE, res)
    }

    #[instrument(skip(self, db))]
    pub async fn list_all(&self, db: &DatabaseConnection) -> ServiceResult<Vec<author::Model>> {
        self.audit.access(LIST, "Attempt to list all authors.");
        let res: ServiceResult<Vec<author::Model>> = async {
            let all = author::list_all(db).await?;
            self.audit.success(LIST, &format!("Authors listed successfully! Total: {}", all.len()));
            Ok(Outcome::found(all, "All authors listed successfully!"))
        }
        .await;
        self.audit.settle(LIST, res)
    }
}
