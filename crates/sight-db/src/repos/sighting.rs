//! Sighting repository: CRUD with lifecycle events.

use chrono::Utc;

use sight_core::entities::{NewSighting, Sighting};
use sight_core::ids::PREFIX_SIGHTING;
use sight_core::responses::SightingRecord;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::service::SightingService;
use crate::updates::sighting::SightingUpdate;

const SELECT_COLS: &str = "id, description, created_at, updated_at";

fn row_to_sighting(row: &libsql::Row) -> Result<Sighting, DatabaseError> {
    Ok(Sighting {
        id: row.get(0)?,
        description: row.get(1)?,
        created_at: parse_datetime(&row.get::<String>(2)?)?,
        updated_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl SightingService {
    /// Create a sighting from a raw request body.
    ///
    /// `new` carries the attributes the primary store owns; `body` is handed
    /// to the create-request hook untouched so it can stage the location.
    /// The row is committed before `on_create_committed` runs, so a failing
    /// hook leaves the record in place and surfaces as `DatabaseError::Hook`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the insert fails or the post-commit hook
    /// rejects the record.
    pub async fn create_sighting(
        &self,
        new: &NewSighting,
        body: &[u8],
    ) -> Result<SightingRecord, DatabaseError> {
        let pending = self.hooks().on_create_request(body);

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_SIGHTING).await?;

        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO sightings ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4)"),
                libsql::params![
                    id.as_str(),
                    new.description.as_str(),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        let sighting = Sighting {
            id: id.clone(),
            description: new.description.clone(),
            created_at: now,
            updated_at: now,
        };
        tracing::debug!(sighting_id = %id, "sighting inserted");

        if let Err(error) = self.hooks().on_create_committed(&sighting, pending).await {
            tracing::error!(sighting_id = %id, %error, "post-commit hook failed; record kept without point");
            return Err(DatabaseError::Hook(error));
        }

        Ok(self.hooks().on_enrich(sighting).await)
    }

    /// Read one sighting, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn find_sighting(&self, id: &str) -> Result<Option<Sighting>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM sightings WHERE id = ?1"),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_sighting(&row)?)),
            None => Ok(None),
        }
    }

    /// Read one sighting in its outgoing, enriched form.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the sighting does not exist.
    pub async fn get_sighting(&self, id: &str) -> Result<SightingRecord, DatabaseError> {
        let sighting = self.find_sighting(id).await?.ok_or(DatabaseError::NoResult)?;
        Ok(self.hooks().on_enrich(sighting).await)
    }

    /// Newest sightings first, each enriched.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_sightings(&self, limit: u32) -> Result<Vec<SightingRecord>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM sightings ORDER BY created_at DESC, id LIMIT ?1"
                ),
                [limit],
            )
            .await?;

        let mut sightings = Vec::new();
        while let Some(row) = rows.next().await? {
            sightings.push(row_to_sighting(&row)?);
        }

        let mut records = Vec::with_capacity(sightings.len());
        for sighting in sightings {
            records.push(self.hooks().on_enrich(sighting).await);
        }
        Ok(records)
    }

    /// Apply `update` and return the enriched record.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the sighting does not exist.
    pub async fn update_sighting(
        &self,
        id: &str,
        update: SightingUpdate,
    ) -> Result<SightingRecord, DatabaseError> {
        if update.is_empty() {
            return self.get_sighting(id).await;
        }

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(description) = update.description {
            sets.push(format!("description = ?{idx}"));
            params.push(description.into());
            idx += 1;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(Utc::now().to_rfc3339().into());
        idx += 1;

        params.push(id.into());
        let sql = format!("UPDATE sightings SET {} WHERE id = ?{idx}", sets.join(", "));
        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }

        self.get_sighting(id).await
    }

    /// Delete a sighting, then raise `on_after_delete`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the sighting does not exist, or
    /// `DatabaseError::Hook` if the after-delete hook fails (the row is
    /// already gone at that point).
    pub async fn delete_sighting(&self, id: &str) -> Result<(), DatabaseError> {
        let sighting = self.find_sighting(id).await?.ok_or(DatabaseError::NoResult)?;

        self.db()
            .conn()
            .execute("DELETE FROM sightings WHERE id = ?1", [id])
            .await?;
        tracing::debug!(sighting_id = %id, "sighting deleted");

        if let Err(error) = self.hooks().on_after_delete(&sighting).await {
            tracing::error!(sighting_id = %id, %error, "after-delete hook failed");
            return Err(DatabaseError::Hook(error));
        }
        Ok(())
    }

    /// Every sighting identity, in key order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_sighting_ids(&self) -> Result<Vec<String>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT id FROM sightings ORDER BY id", ())
            .await?;
        let mut ids = Vec::new();
        while let Some(row) = rows.next().await? {
            ids.push(row.get::<String>(0)?);
        }
        Ok(ids)
    }
}
