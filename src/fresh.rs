//! Hints about entities that are referenced in frame text but not yet part of
//! any ontology's signature.

use serde::{Deserialize, Serialize};

use crate::model::{Entity, EntityType, Iri};

pub trait FreshEntities: Send + Sync {
    fn fresh_entity(&self, name: &str, kind: EntityType) -> Option<Entity>;
}

/// No fresh entities at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFreshEntities;

impl FreshEntities for NoFreshEntities {
    fn fresh_entity(&self, _name: &str, _kind: EntityType) -> Option<Entity> {
        None
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreshEntity {
    name: String,
    kind: EntityType,
    iri: Iri,
}

impl FreshEntity {
    pub fn new(name: impl Into<String>, kind: EntityType, iri: Iri) -> Self {
        Self {
            name: name.into(),
            kind,
            iri,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn kind(&self) -> EntityType {
        self.kind
    }
    pub fn iri(&self) -> &Iri {
        &self.iri
    }
    pub fn entity(&self) -> Entity {
        Entity::new(self.kind, self.iri.clone())
    }
}

/// A list of fresh entities, matched by name or by IRI.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FreshEntitySet {
    entities: Vec<FreshEntity>,
}

impl FreshEntitySet {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn push(&mut self, entity: FreshEntity) {
        self.entities.push(entity);
    }
    pub fn len(&self) -> usize {
        self.entities.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl FromIterator<FreshEntity> for FreshEntitySet {
    fn from_iter<I: IntoIterator<Item = FreshEntity>>(iter: I) -> Self {
        Self {
            entities: iter.into_iter().collect(),
        }
    }
}

impl FreshEntities for FreshEntitySet {
    fn fresh_entity(&self, name: &str, kind: EntityType) -> Option<Entity> {
        self.entities
            .iter()
            .find(|e| e.kind == kind && (e.name == name || e.iri.as_str() == name))
            .map(FreshEntity::entity)
    }
}
