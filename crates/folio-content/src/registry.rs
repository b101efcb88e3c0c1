//! The immutable project registry.

use crate::record::ProjectRecord;
use folio_common::{Error, ProjectId, Result};
use std::collections::BTreeMap;
use tracing::debug;

/// Read-only lookup table from project slug to record.
///
/// Built once at startup and never mutated. Construction validates every
/// record and rejects duplicates; after that, lookups cannot fail in any way
/// that matters to a caller — an unknown slug simply returns `None`.
#[derive(Debug, Clone)]
pub struct Registry {
    records: BTreeMap<ProjectId, ProjectRecord>,
    // Authoring order, for card layout on the page.
    order: Vec<ProjectId>,
}

impl Registry {
    /// Build a registry from authored records.
    ///
    /// Fails on the first record missing a required field and on duplicate
    /// slugs. An empty registry is also refused: a portfolio with no
    /// projects is an authoring error, not a valid state.
    pub fn new(records: Vec<ProjectRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::EmptyRegistry);
        }
        let mut map = BTreeMap::new();
        let mut order = Vec::with_capacity(records.len());
        for record in records {
            record.validate()?;
            let id = record.id.clone();
            if map.insert(id.clone(), record).is_some() {
                return Err(Error::DuplicateId { id: id.to_string() });
            }
            order.push(id);
        }
        debug!(projects = order.len(), "registry constructed");
        Ok(Registry { records: map, order })
    }

    /// Look up a record by slug.
    ///
    /// `None` means the slug is unknown; callers treat that as "do nothing"
    /// since stale identifiers from markup drift must never crash the page.
    pub fn lookup(&self, id: &ProjectId) -> Option<&ProjectRecord> {
        let found = self.records.get(id);
        if found.is_none() {
            debug!(slug = %id, "registry lookup miss");
        }
        found
    }

    /// Whether the slug exists in the registry.
    pub fn contains(&self, id: &ProjectId) -> bool {
        self.records.contains_key(id)
    }

    /// Number of projects.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the registry holds no projects. Unreachable through
    /// `Registry::new`, kept for the usual len/is_empty pairing.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in authoring order, for card layout.
    pub fn iter(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    /// All known slugs in authoring order.
    pub fn ids(&self) -> impl Iterator<Item = &ProjectId> {
        self.order.iter()
    }
}
