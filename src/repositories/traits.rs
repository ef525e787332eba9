//! Storage traits
//!
//! Capability set of an explicit storage interface: each repository
//! implements only the operations its entity supports.

/// Insert a new entity
///
/// * `Entity` - stored entity, with the key assigned by the database
/// * `CreateDTO` - input without key
pub trait Create<Entity, CreateDTO> {
    /// Returns the stored entity with its new key
    async fn create(&self, data: &CreateDTO) -> Result<Entity, sqlx::Error>;
}

/// Lookup of a single entity by primary key
pub trait Read<Entity, Id> {
    /// * `Ok(None)` - no entity with that key
    async fn read(&self, id: &Id) -> Result<Option<Entity>, sqlx::Error>;
}

/// Lookup of several entities by primary key
pub trait ReadMany<Entity, Id> {
    /// Missing keys are skipped. Results are ordered by key, not by the
    /// order of `ids`.
    async fn read_many(&self, ids: &[Id]) -> Result<Vec<Entity>, sqlx::Error>;
}

/// Partial update of an existing entity
///
/// * `UpdateDTO` - only `Some(_)` fields are written
pub trait Update<Entity, UpdateDTO, Id> {
    /// * `Err(sqlx::Error::RowNotFound)` - no entity with that key
    async fn update(&self, id: &Id, data: &UpdateDTO) -> Result<Entity, sqlx::Error>;
}

/// Removal by primary key
pub trait Delete<Id> {
    /// * `Err(sqlx::Error::RowNotFound)` - nothing was deleted
    async fn delete(&self, id: &Id) -> Result<(), sqlx::Error>;
}
