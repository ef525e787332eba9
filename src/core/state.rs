//! Application State - composition root dell'applicazione
//!
//! Tutti i componenti vengono costruiti qui esplicitamente e condivisi
//! tramite `Arc<AppState>` tra route e middleware.

use crate::core::beans::BeanRegistry;
use crate::quiz::{QuizSourceConfig, TaggedFileQuestionReader};
use crate::repositories::{AuthorRepository, UserRepository};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Apre il pool sqlite e applica le migrations in `migrations/`.
///
/// Un database `:memory:` esiste solo finché vive la sua connessione, quindi
/// in quel caso il pool usa una sola connessione che non scade mai.
#[instrument(skip(database_url))]
pub async fn connect_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let in_memory = database_url.contains(":memory:");
    let mut options = SqlitePoolOptions::new();
    options = if in_memory {
        options
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        options.max_connections(max_connections.max(1))
    };

    let pool = options.connect(database_url).await?;
    debug!("Running migrations");
    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Database ready");
    Ok(pool)
}

/// Stato globale dell'applicazione condiviso tra tutte le route e middleware
pub struct AppState {
    /// Repository per la gestione degli utenti
    pub user: UserRepository,

    /// Repository per la gestione degli autori
    pub author: AuthorRepository,

    /// Secret key per JWT token
    pub jwt_secret: String,

    /// Configurazione immutabile della sorgente quiz
    pub quiz: Arc<QuizSourceConfig>,

    /// Reader delle domande, condivide la stessa configurazione
    pub questions: TaggedFileQuestionReader,

    /// Componenti costruiti da `new`
    pub beans: BeanRegistry,
}

impl AppState {
    /// Crea una nuova istanza di AppState
    ///
    /// # Arguments
    /// * `pool` - Pool di connessioni sqlite condiviso
    /// * `jwt_secret` - Chiave segreta per la firma dei token JWT
    /// * `quiz` - Configurazione della sorgente delle domande
    pub fn new(pool: SqlitePool, jwt_secret: String, quiz: QuizSourceConfig) -> Self {
        let quiz = Arc::new(quiz);

        let mut beans = BeanRegistry::new();
        beans
            .register::<SqlitePool>("connectionPool")
            .register::<UserRepository>("userRepository")
            .register::<AuthorRepository>("authorRepository")
            .register::<QuizSourceConfig>("quizSourceConfig")
            .register::<TaggedFileQuestionReader>("questionReader");

        Self {
            user: UserRepository::new(pool.clone()),
            author: AuthorRepository::new(pool),
            jwt_secret,
            questions: TaggedFileQuestionReader::new(quiz.clone()),
            quiz,
            beans,
        }
    }
}
