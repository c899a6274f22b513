//! The entity service: the interface HTTP route handlers call.
//!
//! One service instance covers every entity type; each operation composes
//! the schema registry, the query/update builders, the store client, and the
//! result mapper. All request validation happens before the first network
//! call; all store failures propagate unchanged.

use crate::error::{ApiError, Result};
use crate::mapper::map_records;
use citygraph_client::SparqlStore;
use citygraph_core::literal::subject_iri;
use citygraph_core::record::EntityRecord;
use citygraph_core::schema::{EntityType, SchemaRegistry};
use citygraph_sparql::select::{get_query, list_query, ListFilters};
use citygraph_sparql::update::{ask_subject_query, delete_query, insert_query, update_queries};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use tracing::info;

/// CRUD over schema-mapped entities in the triple store.
#[derive(Debug)]
pub struct EntityService<S> {
    store: S,
    registry: SchemaRegistry,
}

impl<S: SparqlStore> EntityService<S> {
    /// Create a service over a store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            registry: SchemaRegistry::smart_city(),
        }
    }

    /// Access the underlying store, e.g. for health probes.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The schema registry backing this service.
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// List all instances of an entity type, optionally filtered by a
    /// case-insensitive name substring and/or an exact subtype.
    ///
    /// Result order is whatever the store returns; callers must not depend
    /// on it.
    pub async fn list(
        &self,
        entity: EntityType,
        filters: &ListFilters,
    ) -> Result<Vec<EntityRecord>> {
        let schema = self.registry.lookup(entity);
        let query = list_query(schema, filters)?;
        let results = self.store.query(&query).await?;
        let records = map_records(schema, &results);
        info!(%entity, count = records.len(), "listed entities");
        Ok(records)
    }

    /// Fetch one instance by local name.
    pub async fn get(&self, entity: EntityType, local: &str) -> Result<EntityRecord> {
        let schema = self.registry.lookup(entity);
        let query = get_query(schema, local)?;
        let results = self.store.query(&query).await?;
        map_records(schema, &results)
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::not_found(format!("{entity} '{local}'")))
    }

    /// Create a new instance and return its subject IRI.
    ///
    /// The class triple asserts `subtype` (required for types without a base
    /// class, e.g. parking stations). Re-using an existing local name fails
    /// with `AlreadyExists` rather than silently piling up triples on the
    /// existing subject.
    pub async fn create(
        &self,
        entity: EntityType,
        local: &str,
        subtype: Option<&str>,
        fields: &BTreeMap<String, JsonValue>,
    ) -> Result<String> {
        let schema = self.registry.lookup(entity);
        let class_iri = schema.resolve_class(subtype)?;
        let uri = subject_iri(local)?;
        // full validation of the request before any exchange
        let insert = insert_query(schema, &uri, class_iri, fields)?;

        if self.store.ask(&ask_subject_query(&uri)).await? {
            return Err(ApiError::already_exists(format!("{entity} '{local}'")));
        }

        self.store.update(&insert).await?;
        info!(%entity, %uri, "created entity");
        Ok(uri)
    }

    /// Partially update an instance: each supplied property is overwritten,
    /// everything else is left untouched.
    ///
    /// One DELETE/INSERT/WHERE exchange per property, executed sequentially.
    /// Cancellation between exchanges leaves earlier properties updated and
    /// later ones untouched; there is no rollback at this layer.
    pub async fn update(
        &self,
        entity: EntityType,
        local: &str,
        fields: &BTreeMap<String, JsonValue>,
    ) -> Result<()> {
        let schema = self.registry.lookup(entity);
        let uri = subject_iri(local)?;
        let statements = update_queries(schema, &uri, fields)?;

        if !self.store.ask(&ask_subject_query(&uri)).await? {
            return Err(ApiError::not_found(format!("{entity} '{local}'")));
        }

        for statement in &statements {
            self.store.update(statement).await?;
        }
        info!(%entity, %uri, properties = statements.len(), "updated entity");
        Ok(())
    }

    /// Delete an instance: every triple with the subject is removed.
    ///
    /// Inbound references from other entities are not cascade-deleted;
    /// dangling edges can remain.
    pub async fn delete(&self, entity: EntityType, local: &str) -> Result<()> {
        let uri = subject_iri(local)?;

        if !self.store.ask(&ask_subject_query(&uri)).await? {
            return Err(ApiError::not_found(format!("{entity} '{local}'")));
        }

        self.store.update(&delete_query(&uri)).await?;
        info!(%entity, %uri, "deleted entity");
        Ok(())
    }
}
