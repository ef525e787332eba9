//! UserRepository - Repository per la gestione degli utenti

use super::{Create, Read};
use crate::dtos::CreateUserDTO;
use crate::entities::User;
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument};

// USER REPO
pub struct UserRepository {
    connection_pool: SqlitePool,
}

impl UserRepository {
    pub fn new(connection_pool: SqlitePool) -> UserRepository {
        Self { connection_pool }
    }

    /// Lo username e' univoco (vincolo UNIQUE sulla tabella)
    #[instrument(skip(self))]
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, Error> {
        debug!("Finding user by username");
        let user = sqlx::query_as::<_, User>(
            "SELECT user_id, username, password FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(user)
    }
}

impl Create<User, CreateUserDTO> for UserRepository {
    /// `data.password` deve essere gia' l'hash bcrypt
    #[instrument(skip(self, data), fields(username = %data.username))]
    async fn create(&self, data: &CreateUserDTO) -> Result<User, Error> {
        let result = sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
            .bind(&data.username)
            .bind(&data.password)
            .execute(&self.connection_pool)
            .await?;

        let new_id = result.last_insert_rowid();
        info!("User created with id {}", new_id);

        Ok(User {
            user_id: new_id,
            username: data.username.clone(),
            password: data.password.clone(),
        })
    }
}

impl Read<User, i64> for UserRepository {
    async fn read(&self, id: &i64) -> Result<Option<User>, Error> {
        let user = sqlx::query_as::<_, User>(
            "SELECT user_id, username, password FROM users WHERE user_id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(user)
    }
}
