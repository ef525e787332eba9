//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Ogni repository gestisce le operazioni di database per una specifica entità.
//! Le query sono scritte esplicitamente (niente derivazione dal nome del metodo).

// ************************* NOTA SU SQLX ************************* //

/*
   Le query usano le funzioni runtime `sqlx::query` / `sqlx::query_as` con
   `#[derive(sqlx::FromRow)]` sulle entity, così la compilazione non richiede
   un database raggiungibile.
   Numero di righe attese -> metodo da chiamare:
   nessuna (INSERT/UPDATE/DELETE)   .execute(...)        -> QueryResult (rows_affected, last_insert_rowid)
   zero o una                       .fetch_optional(...)  -> Option<T>
   esattamente una                  .fetch_one(...)       -> T, RowNotFound se manca
   molte                            .fetch_all(...)       -> Vec<T>
   Gli errori risalgono con `?` fino al service, che li converte in AppError.
*/

// ************************* MODULI REPOSITORY ************************* //

pub mod author;
pub mod traits;
pub mod user;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, Read, ReadMany, Update};

pub use author::AuthorRepository;
pub use user::UserRepository;
