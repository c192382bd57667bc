use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::instrument;

use models::{author, book::{self, BookWithAuthor}};
use crate::{
    audit::Auditor,
    dto::{CreateBookInput, EditBookInput},
    outcome::{Outcome, ServiceResult},
};

const FIND: &str = "Find Book";
const CREATE: &str = "Create Book";
const EDIT: &str = "Edit Book";
const DELETE: &str = "Delete Book";
const LIST: &str = "List Books";

const NO_AUTHOR: &str = "No author record found!";

/// CRUD over books. Create and edit refuse to point a book at an author that
/// does not exist; the store does not check this at this boundary.
#[derive(Clone, Default)]
pub struct BookService {
    audit: Auditor,
}

impl BookService {
    pub fn new(audit: Auditor) -> Self { Self { audit } }

    #[instrument(skip(self, db))]
    pub async fn find_by_id(&self, db: &DatabaseConnection, id: i32) -> ServiceResult<BookWithAuthor> {
        let res: ServiceResult<BookWithAuthor> = async {
            let Some(found) = book::find_with_author(db, id).await? else {
                self.audit.warning(FIND, &format!("Book Id {id} not found."));
                return Ok(Outcome::absent("No record found!"));
            };
            self.audit.success(FIND, &format!("Book Id {} found: {} {}", found.id, found.title, found.kind));
            Ok(Outcome::found(found, "Book located successfully!"))
        }
        .await;
        self.audit.settle(FIND, res)
    }

    /// Books owned by an author; an empty list when there are none.
    #[instrument(skip(self, db))]
    pub async fn find_by_author_id(&self, db: &DatabaseConnection, author_id: i32) -> ServiceResult<Vec<BookWithAuthor>> {
        self.audit.access(FIND, &format!("Attempt to find books of author Id {author_id}"));
        let res: ServiceResult<Vec<BookWithAuthor>> = async {
            let books = book::list_by_author(db, author_id).await?;
            self.audit.success(FIND, &format!("Books found for author Id {author_id}: {} books.", books.len()));
            Ok(Outcome::found(books, "Books located!"))
        }
        .await;
        self.audit.settle(FIND, res)
    }

    /// Create a book under an existing author; returns every book.
    #[instrument(skip(self, db))]
    pub async fn create(&self, db: &DatabaseConnection, input: CreateBookInput) -> ServiceResult<Vec<BookWithAuthor>> {
        let res: ServiceResult<Vec<BookWithAuthor>> = async {
            let txn = db.begin().await?;
            if author::find(&txn, input.author_id).await?.is_none() {
                self.audit.warning(CREATE, &format!("Author Id {} not found.", input.author_id));
                return Ok(Outcome::absent(NO_AUTHOR));
            }
            let created = book::create(&txn, &input.title, &input.kind, input.author_id).await?;
            let all = book::list_with_author(&txn).await?;
            txn.commit().await?;
            self.audit.success(CREATE, &format!("Book Id {} created: {}, {}", created.id, created.title, created.kind));
            Ok(Outcome::found(all, "Book created successfully!"))
        }
        .await;
        self.audit.settle(CREATE, res)
    }

    /// Overwrite title, type and author. The author is checked before the book.
    #[instrument(skip(self, db), fields(id = input.id))]
    pub async fn edit(&self, db: &DatabaseConnection, input: EditBookInput) -> ServiceResult<Vec<BookWithAuthor>> {
        self.audit.access(EDIT, &format!("Attempt to edit book Id {}", input.id));
        let res: ServiceResult<Vec<BookWithAuthor>> = async {
            let txn = db.begin().await?;
            if author::find(&txn, input.author_id).await?.is_none() {
                self.audit.warning(EDIT, &format!("Author Id {} not found.", input.author_id));
                return Ok(Outcome::absent(NO_AUTHOR));
            }
            let Some(found) = book::find(&txn, input.id).await? else {
                self.audit.warning(EDIT, &format!("Book Id {} not found.", input.id));
                return Ok(Outcome::absent("No book record found!"));
            };
            let updated = book::update(&txn, found, &input.title, &input.kind, input.author_id).await?;
            let all = book::list_with_author(&txn).await?;
            txn.commit().await?;
            self.audit.success(EDIT, &format!("Book Id {} edited: {}, {}", updated.id, updated.title, updated.kind));
            Ok(Outcome::found(all, "Data updated successfully!"))
        }
        .await;
        self.audit.settle(EDIT, res)
    }

    #[instrument(skip(self, db))]
    pub async fn delete(&self, db: &DatabaseConnection, id: i32) -> ServiceResult<Vec<BookWithAuthor>> {
        let res: ServiceResult<Vec<BookWithAuthor>> = async {
            let txn = db.begin().await?;
            if book::find(&txn, id).await?.is_none() {
                self.audit.warning(DELETE, &format!("Book Id {id} not found."));
                return Ok(Outcome::absent("No book found!"));
            }
            book::delete(&txn, id).await?;
            let all = book::list_with_author(&txn).await?;
            txn.commit().await?;
            self.audit.success(DELETE, &format!("Book Id {id} deleted successfully!"));
            Ok(Outcome::found(all, "Book removed successfully!"))
        }
        .await;
        self.audit.settle(DELETE, res)
    }

    /// Every book with its author resolved.
    #[instrument(skip(self, db))]
    pub async fn list_all(&self, db: &DatabaseConnection) -> ServiceResult<Vec<BookWithAuthor>> {
        self.audit.access(LIST, "Attempt to list all books.");
        let res: ServiceResult<Vec<BookWithAuthor>> = async {
            let all = book::list_with_author(db).await?;
            self.audit.success(LIST, &format!("Books listed successfully! Total: {}", all.len()));
            Ok(Outcome::found(all, "All books listed successfully!"))
        }
        .await;
        self.audit.settle(LIST, res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        author_service::AuthorService,
        dto::CreateAuthorInput,
        envelope::Envelope,
        test_support::{failing_db, file_db, get_db, recording_auditor, remove_db_files},
    };
    use std::sync::Arc;

    fn emma(author_id: i32) -> CreateBookInput {
        CreateBookInput { title: "Emma".into(), kind: "Novel".into(), author_id }
    }

    async fn book_count(db: &DatabaseConnection) -> Result<usize, anyhow::Error> {
        Ok(book::list_with_author(db).await?.len())
    }

    #[tokio::test]
    async fn austen_scenario() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let authors = AuthorService::default();
        let books = BookService::default();

        let listed = authors
            .create(&db, CreateAuthorInput { first_name: "Jane".into(), last_name: "Austen".into() })
            .await?
            .into_data()
            .unwrap();
        assert_eq!(listed.len(), 1);
        let jane = listed[0].clone();
        assert_eq!((jane.first_name.as_str(), jane.last_name.as_str()), ("Jane", "Austen"));

        books.create(&db, emma(jane.id)).await?;
        let owned = books.find_by_author_id(&db, jane.id).await?.into_data().unwrap();
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].title, "Emma");
        let book_id = owned[0].id;

        books
            .edit(&db, EditBookInput { id: book_id, title: "Emma (Revised)".into(), kind: "Novel".into(), author_id: jane.id })
            .await?;
        let found = books.find_by_id(&db, book_id).await?.into_data().unwrap();
        assert_eq!(found.title, "Emma (Revised)");

        books.delete(&db, book_id).await?;
        let owned = books.find_by_author_id(&db, jane.id).await?;
        assert_eq!(owned.data(), Some(&vec![]));

        authors.delete(&db, jane.id).await?;
        let env: Envelope<author::Model> = authors.find_by_id(&db, jane.id).await.into();
        assert!(env.success);
        assert!(env.data.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn create_with_unknown_author_changes_nothing() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (auditor, log) = recording_auditor();
        let svc = BookService::new(auditor);

        let res = svc.create(&db, emma(99)).await?;
        assert_eq!(res, Outcome::absent(NO_AUTHOR));
        assert_eq!(book_count(&db).await?, 0);
        assert!(log.contains("Create Book - Warning"));
        Ok(())
    }

    #[tokio::test]
    async fn edit_checks_author_before_book() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = BookService::default();
        let a = author::create(&db, "Jane", "Austen").await?;
        let b = book::create(&db, "Emma", "Novel", a.id).await?;

        // both missing: the author check wins
        let res = svc
            .edit(&db, EditBookInput { id: 500, title: "X".into(), kind: "Y".into(), author_id: 77 })
            .await?;
        assert_eq!(res.message(), NO_AUTHOR);

        let res = svc
            .edit(&db, EditBookInput { id: b.id, title: "X".into(), kind: "Y".into(), author_id: 77 })
            .await?;
        assert_eq!(res.message(), NO_AUTHOR);
        let unchanged = book::find(&db, b.id).await?.unwrap();
        assert_eq!(unchanged.title, "Emma");

        let res = svc
            .edit(&db, EditBookInput { id: 500, title: "X".into(), kind: "Y".into(), author_id: a.id })
            .await?;
        assert_eq!(res.message(), "No book record found!");
        Ok(())
    }

    #[tokio::test]
    async fn edit_can_move_book_to_another_author() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = BookService::default();
        let jane = author::create(&db, "Jane", "Austen").await?;
        let mary = author::create(&db, "Mary", "Shelley").await?;
        let b = book::create(&db, "Emma", "Novel", jane.id).await?;

        let all = svc
            .edit(&db, EditBookInput { id: b.id, title: "Frankenstein".into(), kind: "Gothic".into(), author_id: mary.id })
            .await?
            .into_data()
            .unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].kind, "Gothic");
        assert_eq!(all[0].author.as_ref().map(|a| a.id), Some(mary.id));

        assert!(svc.find_by_author_id(&db, jane.id).await?.into_data().unwrap().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn list_all_resolves_every_author() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = BookService::default();
        let jane = author::create(&db, "Jane", "Austen").await?;
        let mary = author::create(&db, "Mary", "Shelley").await?;
        svc.create(&db, emma(jane.id)).await?;
        let all = svc.create(&db, emma(mary.id)).await?.into_data().unwrap();
        assert_eq!(all.len(), 2);

        let listed = svc.list_all(&db).await?;
        assert_eq!(listed.message(), "All books listed successfully!");
        let listed = listed.into_data().unwrap();
        assert!(listed.iter().all(|b| b.author.is_some()));
        assert_eq!(listed, all);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_book_is_absent() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = BookService::default();

        assert_eq!(svc.find_by_id(&db, 3).await?.message(), "No record found!");
        let env: Envelope<Vec<BookWithAuthor>> = svc.delete(&db, 3).await.into();
        assert!(env.success);
        assert!(env.data.is_none());
        assert_eq!(env.message, "No book found!");
        Ok(())
    }

    #[tokio::test]
    async fn store_failure_during_author_check_is_reported() -> Result<(), anyhow::Error> {
        let db = failing_db("disk I/O error");
        let (auditor, log) = recording_auditor();
        let svc = BookService::new(auditor);

        let env: Envelope<Vec<BookWithAuthor>> = svc.create(&db, emma(1)).await.into();
        assert!(!env.success);
        assert!(env.message.contains("disk I/O error"), "{}", env.message);
        assert!(log.contains("Create Book - Error"));
        assert!(!log.contains("Create Book - Success"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_on_file_database_all_succeed() -> Result<(), anyhow::Error> {
        let (db, path) = file_db("concurrent-book-creates").await?;
        let db = Arc::new(db);
        let author_id = author::create(db.as_ref(), "Jane", "Austen").await?.id;
        let svc = BookService::default();

        let mut handles = Vec::new();
        for i in 0..40 {
            let db = Arc::clone(&db);
            let svc = svc.clone();
            handles.push(tokio::spawn(async move {
                let input = CreateBookInput { title: format!("Volume {i}"), kind: "Novel".into(), author_id };
                let env: Envelope<Vec<BookWithAuthor>> = svc.create(&db, input).await.into();
                env
            }));
        }
        for handle in handles {
            let env = handle.await?;
            assert!(env.success, "{}", env.message);
            assert_eq!(env.message, "Book created successfully!");
        }
        assert_eq!(book_count(&db).await?, 40);

        drop(db);
        remove_db_files(&path);
        Ok(())
    }
}
