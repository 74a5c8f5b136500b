//! Resolution of the names written in frame text to entities.

use tracing::trace;

use crate::fresh::FreshEntities;
use crate::model::{Entity, EntityType, Iri};
use crate::shortform::BidirectionalShortFormProvider;

/// Answers whether a name denotes an entity of a given kind.
pub trait EntityChecker {
    fn lookup(&self, name: &str, kind: EntityType) -> Option<Entity>;

    fn class(&self, name: &str) -> Option<Entity> {
        self.lookup(name, EntityType::Class)
    }
    fn object_property(&self, name: &str) -> Option<Entity> {
        self.lookup(name, EntityType::ObjectProperty)
    }
    fn data_property(&self, name: &str) -> Option<Entity> {
        self.lookup(name, EntityType::DataProperty)
    }
    fn annotation_property(&self, name: &str) -> Option<Entity> {
        self.lookup(name, EntityType::AnnotationProperty)
    }
    fn individual(&self, name: &str) -> Option<Entity> {
        self.lookup(name, EntityType::NamedIndividual)
    }
    fn datatype(&self, name: &str) -> Option<Entity> {
        self.lookup(name, EntityType::Datatype)
    }
}

/// Looks names up in the short-form tables, then in the fresh entity hints.
pub struct FrameEntityChecker<'a> {
    short_forms: &'a BidirectionalShortFormProvider,
    fresh: &'a dyn FreshEntities,
}

impl<'a> FrameEntityChecker<'a> {
    pub fn new(short_forms: &'a BidirectionalShortFormProvider, fresh: &'a dyn FreshEntities) -> Self {
        Self { short_forms, fresh }
    }
}

impl EntityChecker for FrameEntityChecker<'_> {
    fn lookup(&self, name: &str, kind: EntityType) -> Option<Entity> {
        let name = name
            .strip_prefix('\'')
            .and_then(|n| n.strip_suffix('\''))
            .unwrap_or(name);
        let known = match name.strip_prefix('<').and_then(|n| n.strip_suffix('>')) {
            Some(iri) => Iri::new(iri)
                .ok()
                .and_then(|iri| self.short_forms.entity_by_iri(&iri, kind)),
            None => self.short_forms.entity(name, kind),
        };
        known.or_else(|| {
            let fresh = self.fresh.fresh_entity(name, kind);
            if fresh.is_some() {
                trace!(short_form = name, %kind, "resolved as fresh entity");
            }
            fresh
        })
    }
}
