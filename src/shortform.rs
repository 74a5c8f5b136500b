//! Short forms: the names entities are written with in frame text.

use std::collections::HashMap;
use std::hash::BuildHasherDefault;

// used for the name <-> IRI tables
use bimap::BiMap;
use seahash::SeaHasher;
use tracing::warn;

use crate::model::{Entity, EntityType, Iri};
use crate::ontology::Ontology;
use crate::vocab;

pub trait ShortFormProvider {
    fn short_form(&self, entity: &Entity) -> String;
}

/// `prefix:local` for the built-in namespaces, the IRI fragment otherwise.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleShortFormProvider;

impl ShortFormProvider for SimpleShortFormProvider {
    fn short_form(&self, entity: &Entity) -> String {
        vocab::prefixed_name(entity.iri()).unwrap_or_else(|| entity.iri().fragment().to_string())
    }
}

/// The smallest `rdfs:label` asserted on the entity, else the simple form.
pub struct LabelShortFormProvider<'a> {
    ontologies: Vec<&'a Ontology>,
}

impl<'a> LabelShortFormProvider<'a> {
    pub fn new(ontologies: impl IntoIterator<Item = &'a Ontology>) -> Self {
        Self {
            ontologies: ontologies.into_iter().collect(),
        }
    }
}

impl ShortFormProvider for LabelShortFormProvider<'_> {
    fn short_form(&self, entity: &Entity) -> String {
        self.ontologies
            .iter()
            .flat_map(|ontology| ontology.labels(entity.iri()))
            .map(|literal| literal.lexical())
            .min()
            .map(str::to_string)
            .unwrap_or_else(|| SimpleShortFormProvider.short_form(entity))
    }
}

// ------------- Bidirectional tables -------------

type ShortForms = BiMap<String, Iri>;

/// Short forms of every known entity, one table per entity kind, searchable
/// in both directions.
#[derive(Debug, Default)]
pub struct BidirectionalShortFormProvider {
    tables: HashMap<EntityType, ShortForms, BuildHasherDefault<SeaHasher>>,
}

impl BidirectionalShortFormProvider {
    /// Tables over the signatures of the ontologies and the built-in vocabulary.
    pub fn from_ontologies<'a>(
        ontologies: impl IntoIterator<Item = &'a Ontology>,
        short_forms: &dyn ShortFormProvider,
    ) -> Self {
        let mut provider = Self::default();
        for entity in vocab::built_in_entities() {
            let name = SimpleShortFormProvider.short_form(&entity);
            provider.add(name, entity);
        }
        for ontology in ontologies {
            for entity in ontology.entities() {
                provider.add(short_forms.short_form(entity), entity.clone());
            }
        }
        provider
    }

    /// Registers a short form; returns false when either side is already taken
    /// within the entity's kind.
    pub fn add(&mut self, short_form: impl Into<String>, entity: Entity) -> bool {
        let short_form = short_form.into();
        let table = self.tables.entry(entity.kind()).or_default();
        match table.insert_no_overwrite(short_form, entity.iri().clone()) {
            Ok(()) => true,
            Err((short_form, iri)) => {
                if table.get_by_right(&iri) != Some(&short_form) {
                    warn!(%short_form, %iri, kind = %entity.kind(), "short form already taken");
                }
                false
            }
        }
    }

    pub fn remove(&mut self, entity: &Entity) -> Option<String> {
        self.tables
            .get_mut(&entity.kind())
            .and_then(|table| table.remove_by_right(entity.iri()))
            .map(|(short_form, _)| short_form)
    }

    pub fn entity(&self, short_form: &str, kind: EntityType) -> Option<Entity> {
        self.tables
            .get(&kind)
            .and_then(|table| table.get_by_left(short_form))
            .map(|iri| Entity::new(kind, iri.clone()))
    }

    /// Entities of every kind written with the short form, in canonical kind order.
    pub fn entities(&self, short_form: &str) -> Vec<Entity> {
        EntityType::ALL
            .into_iter()
            .filter_map(|kind| self.entity(short_form, kind))
            .collect()
    }

    pub fn entity_by_iri(&self, iri: &Iri, kind: EntityType) -> Option<Entity> {
        self.tables
            .get(&kind)
            .filter(|table| table.contains_right(iri))
            .map(|_| Entity::new(kind, iri.clone()))
    }

    pub fn short_form(&self, entity: &Entity) -> Option<&str> {
        self.tables
            .get(&entity.kind())
            .and_then(|table| table.get_by_right(entity.iri()))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tables.values().map(BiMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnnotationValue, AxiomKind, Literal};
    use crate::ontology::OntologyId;

    fn iri(s: &str) -> Iri {
        Iri::new(s).unwrap()
    }

    fn pizza() -> Ontology {
        let mut ontology = Ontology::new(OntologyId::new(iri("http://example.org/pizza")));
        ontology.declare(Entity::new(EntityType::Class, iri("http://example.org/pizza#Pizza")));
        ontology.declare(Entity::new(EntityType::ObjectProperty, iri("http://example.org/pizza#hasTopping")));
        ontology.add_axiom(
            AxiomKind::AnnotationAssertion(
                vocab::rdfs_label(),
                iri("http://example.org/pizza#hasTopping"),
                AnnotationValue::Literal(Literal::string("has topping")),
            )
            .into(),
        );
        ontology
    }

    #[test]
    fn simple_short_forms() {
        let thing = Entity::new(EntityType::Class, vocab::owl_thing());
        assert_eq!(SimpleShortFormProvider.short_form(&thing), "owl:Thing");
        let pizza = Entity::new(EntityType::Class, iri("http://example.org/pizza#Pizza"));
        assert_eq!(SimpleShortFormProvider.short_form(&pizza), "Pizza");
    }

    #[test]
    fn labels_take_precedence() {
        let ontology = pizza();
        let provider = LabelShortFormProvider::new([&ontology]);
        let topping = Entity::new(EntityType::ObjectProperty, iri("http://example.org/pizza#hasTopping"));
        assert_eq!(provider.short_form(&topping), "has topping");
        let pizza = Entity::new(EntityType::Class, iri("http://example.org/pizza#Pizza"));
        assert_eq!(provider.short_form(&pizza), "Pizza");
    }

    #[test]
    fn tables_include_built_ins_and_signatures() {
        let ontology = pizza();
        let labels = LabelShortFormProvider::new([&ontology]);
        let provider = BidirectionalShortFormProvider::from_ontologies([&ontology], &labels);
        assert!(provider.entity("owl:Thing", EntityType::Class).is_some());
        assert!(provider.entity("xsd:integer", EntityType::Datatype).is_some());
        assert!(provider.entity("has topping", EntityType::ObjectProperty).is_some());
        assert!(provider.entity("hasTopping", EntityType::ObjectProperty).is_none());
        assert_eq!(provider.entities("Pizza").len(), 1);
    }

    #[test]
    fn short_forms_are_not_overwritten() {
        let mut provider = BidirectionalShortFormProvider::default();
        let a = Entity::new(EntityType::Class, iri("http://example.org/a#Thing"));
        let b = Entity::new(EntityType::Class, iri("http://example.org/b#Thing"));
        assert!(provider.add("Thing", a.clone()));
        assert!(!provider.add("Thing", b.clone()));
        assert_eq!(provider.entity("Thing", EntityType::Class), Some(a.clone()));
        assert_eq!(provider.short_form(&b), None);
        assert_eq!(provider.remove(&a), Some("Thing".to_string()));
        assert!(provider.add("Thing", b));
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn same_name_in_different_kinds() {
        let mut provider = BidirectionalShortFormProvider::default();
        provider.add("p", Entity::new(EntityType::ObjectProperty, iri("http://example.org/p")));
        provider.add("p", Entity::new(EntityType::DataProperty, iri("http://example.org/q")));
        let kinds: Vec<_> = provider.entities("p").iter().map(Entity::kind).collect();
        assert_eq!(kinds, vec![EntityType::ObjectProperty, EntityType::DataProperty]);
        assert!(provider.entity_by_iri(&iri("http://example.org/q"), EntityType::DataProperty).is_some());
        assert!(provider.entity_by_iri(&iri("http://example.org/q"), EntityType::ObjectProperty).is_none());
    }
}
