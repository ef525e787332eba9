//! AuthorRepository - Repository per la gestione degli autori

use super::{Create, Delete, Read, ReadMany, Update};
use crate::dtos::{CreateAuthorDTO, UpdateAuthorDTO};
use crate::entities::Author;
use sqlx::{Error, QueryBuilder, Sqlite, SqlitePool};
use tracing::{debug, info, instrument};

const AUTHOR_COLUMNS: &str =
    "author_id, first_name, last_name, birth_date, birth_year, distinguished";

// AUTHOR REPOSITORY
pub struct AuthorRepository {
    connection_pool: SqlitePool,
}

impl AuthorRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Tutti gli autori ordinati per id
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Author>, Error> {
        debug!("Listing all authors");
        let authors = sqlx::query_as::<_, Author>(&format!(
            "SELECT {} FROM authors ORDER BY author_id",
            AUTHOR_COLUMNS
        ))
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(authors)
    }

    /// Solo gli autori con il flag `distinguished`
    #[instrument(skip(self))]
    pub async fn find_distinguished(&self) -> Result<Vec<Author>, Error> {
        debug!("Listing distinguished authors");
        let authors = sqlx::query_as::<_, Author>(&format!(
            "SELECT {} FROM authors WHERE distinguished = 1 ORDER BY author_id",
            AUTHOR_COLUMNS
        ))
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(authors)
    }
}

impl Create<Author, CreateAuthorDTO> for AuthorRepository {
    #[instrument(skip(self, data), fields(last_name = %data.last_name))]
    async fn create(&self, data: &CreateAuthorDTO) -> Result<Author, Error> {
        debug!("Creating new author");
        let result = sqlx::query(
            r#"
            INSERT INTO authors (first_name, last_name, birth_date, birth_year, distinguished)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(data.birth_date)
        .bind(data.birth_year)
        .bind(data.distinguished)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_rowid();
        info!("Author created with id {}", new_id);

        Ok(Author {
            author_id: new_id,
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            birth_date: data.birth_date,
            birth_year: data.birth_year,
            distinguished: data.distinguished,
        })
    }
}

impl Read<Author, i64> for AuthorRepository {
    #[instrument(skip(self), fields(author_id = %id))]
    async fn read(&self, id: &i64) -> Result<Option<Author>, Error> {
        debug!("Reading author by id");
        let author = sqlx::query_as::<_, Author>(&format!(
            "SELECT {} FROM authors WHERE author_id = ?",
            AUTHOR_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(author)
    }
}

impl ReadMany<Author, i64> for AuthorRepository {
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn read_many(&self, ids: &[i64]) -> Result<Vec<Author>, Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {} FROM authors WHERE author_id IN (",
            AUTHOR_COLUMNS
        ));
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(") ORDER BY author_id");

        let authors = builder
            .build_query_as::<Author>()
            .fetch_all(&self.connection_pool)
            .await?;

        debug!("Found {} authors", authors.len());
        Ok(authors)
    }
}

impl Update<Author, UpdateAuthorDTO, i64> for AuthorRepository {
    #[instrument(skip(self, data), fields(author_id = %id))]
    async fn update(&self, id: &i64, data: &UpdateAuthorDTO) -> Result<Author, Error> {
        debug!("Updating author");
        // COALESCE lascia invariati i campi non forniti
        let result = sqlx::query(
            r#"
            UPDATE authors SET
                first_name = COALESCE(?, first_name),
                last_name = COALESCE(?, last_name),
                birth_date = COALESCE(?, birth_date),
                birth_year = COALESCE(?, birth_year),
                distinguished = COALESCE(?, distinguished)
            WHERE author_id = ?
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(data.birth_date)
        .bind(data.birth_year)
        .bind(data.distinguished)
        .bind(id)
        .execute(&self.connection_pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        info!("Author updated");
        self.read(id).await?.ok_or(Error::RowNotFound)
    }
}

impl Delete<i64> for AuthorRepository {
    #[instrument(skip(self), fields(author_id = %id))]
    async fn delete(&self, id: &i64) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM authors WHERE author_id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        info!("Author deleted");
        Ok(())
    }
}
