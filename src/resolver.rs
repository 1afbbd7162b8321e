//! Generic entity resolver: id/slug validation and slug-to-id translation,
//! implemented once and parameterized by entity kind instead of repeated per
//! table.

use rusqlite::{OptionalExtension, params};

use crate::db::Database;
use crate::db::models::EntityRecord;
use crate::error::{Error, Result};

/// The entity kinds that share the name/slug table shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Host,
    Scorekeeper,
    Panelist,
    Guest,
}

impl Entity {
    fn table(self) -> &'static str {
        match self {
            Entity::Host => "hosts",
            Entity::Scorekeeper => "scorekeepers",
            Entity::Panelist => "panelists",
            Entity::Guest => "guests",
        }
    }
}

/// Reject empty or whitespace-only slugs before any query runs.
fn require_slug(slug: &str) -> Result<&str> {
    let trimmed = slug.trim();
    if trimmed.is_empty() {
        return Err(Error::BadRequest("slug must not be empty".to_string()));
    }
    Ok(trimmed)
}

/// Reject non-positive ids before any query runs.
fn require_id(id: i64) -> Result<i64> {
    if id < 1 {
        return Err(Error::BadRequest(format!("id must be positive, got {id}")));
    }
    Ok(id)
}

impl Database {
    /// Whether an entity with this id exists.
    pub fn id_exists(&self, entity: Entity, id: i64) -> Result<bool> {
        let id = require_id(id)?;
        let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = ?1)", entity.table());
        Ok(self.conn.query_row(&sql, params![id], |row| row.get(0))?)
    }

    /// Whether an entity with this slug exists.
    pub fn slug_exists(&self, entity: Entity, slug: &str) -> Result<bool> {
        let slug = require_slug(slug)?;
        let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE slug = ?1)", entity.table());
        Ok(self.conn.query_row(&sql, params![slug], |row| row.get(0))?)
    }

    /// Translate a slug to its canonical id, if recorded.
    pub fn slug_to_id(&self, entity: Entity, slug: &str) -> Result<Option<i64>> {
        let slug = require_slug(slug)?;
        let sql = format!("SELECT id FROM {} WHERE slug = ?1", entity.table());
        Ok(self
            .conn
            .query_row(&sql, params![slug], |row| row.get(0))
            .optional()?)
    }

    /// Fetch the minimal id/name/slug record for an entity.
    pub fn retrieve_by_id(&self, entity: Entity, id: i64) -> Result<Option<EntityRecord>> {
        let id = require_id(id)?;
        let sql = format!("SELECT id, name, slug FROM {} WHERE id = ?1", entity.table());
        Ok(self
            .conn
            .query_row(&sql, params![id], |row| {
                Ok(EntityRecord {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    slug: row.get(2)?,
                })
            })
            .optional()?)
    }
}
