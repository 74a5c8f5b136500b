//! Ontologies, the pairs the frame parser produces, and the catalog used to
//! check that ontologies named in frame text exist.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use seahash::SeaHasher;
use std::hash::BuildHasherDefault;

use crate::model::{AnnotationValue, Axiom, AxiomKind, Entity, Iri, Literal};
use crate::vocab;

pub type SignatureHasher = BuildHasherDefault<SeaHasher>;

// ------------- OntologyId -------------
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OntologyId {
    iri: Option<Iri>,
}
impl OntologyId {
    pub fn new(iri: Iri) -> Self {
        Self { iri: Some(iri) }
    }
    pub fn anonymous() -> Self {
        Self { iri: None }
    }
    pub fn iri(&self) -> Option<&Iri> {
        self.iri.as_ref()
    }
    pub fn is_anonymous(&self) -> bool {
        self.iri.is_none()
    }
}
impl fmt::Display for OntologyId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.iri {
            Some(iri) => write!(f, "{iri}"),
            None => f.write_str("anonymous"),
        }
    }
}

// ------------- OntologyAxiomPair -------------

/// An axiom together with the ontology it belongs in.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OntologyAxiomPair {
    ontology: OntologyId,
    axiom: Axiom,
}
impl OntologyAxiomPair {
    pub fn new(ontology: OntologyId, axiom: Axiom) -> Self {
        Self { ontology, axiom }
    }
    pub fn ontology(&self) -> &OntologyId {
        &self.ontology
    }
    pub fn axiom(&self) -> &Axiom {
        &self.axiom
    }
}
impl fmt::Display for OntologyAxiomPair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.ontology, self.axiom)
    }
}

// ------------- Ontology -------------
#[derive(Debug, Default)]
pub struct Ontology {
    id: OntologyId,
    signature: HashSet<Entity, SignatureHasher>,
    axioms: HashSet<Axiom, SignatureHasher>,
}
impl Ontology {
    pub fn new(id: OntologyId) -> Self {
        Self {
            id,
            signature: HashSet::default(),
            axioms: HashSet::default(),
        }
    }
    pub fn id(&self) -> &OntologyId {
        &self.id
    }
    /// Adds an entity to the signature, returns false if it was already there.
    pub fn declare(&mut self, entity: Entity) -> bool {
        self.signature.insert(entity)
    }
    pub fn add_axiom(&mut self, axiom: Axiom) -> bool {
        if let AxiomKind::Declaration(entity) = axiom.kind() {
            self.signature.insert(entity.clone());
        }
        self.axioms.insert(axiom)
    }
    pub fn contains_entity(&self, entity: &Entity) -> bool {
        self.signature.contains(entity)
    }
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.signature.iter()
    }
    pub fn axioms(&self) -> impl Iterator<Item = &Axiom> {
        self.axioms.iter()
    }
    pub fn axiom_count(&self) -> usize {
        self.axioms.len()
    }
    /// Literal values of `rdfs:label` assertions made on the IRI.
    pub fn labels<'a>(&'a self, subject: &'a Iri) -> impl Iterator<Item = &'a Literal> + 'a {
        let label = vocab::rdfs_label();
        self.axioms.iter().filter_map(move |axiom| match axiom.kind() {
            AxiomKind::AnnotationAssertion(property, s, AnnotationValue::Literal(literal))
                if *property == label && s == subject =>
            {
                Some(literal)
            }
            _ => None,
        })
    }
}

// ------------- Ontology checking -------------

/// Resolves ontology names written in frame text (e.g. `[onto]` lists).
pub trait OntologyChecker: Send + Sync {
    fn ontology(&self, name: &str) -> Option<OntologyId>;
}

/// The ontologies a parser may attach axioms to.
#[derive(Debug, Default)]
pub struct OntologyCatalog {
    ontologies: Vec<Arc<Ontology>>,
}
impl OntologyCatalog {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn add(&mut self, ontology: Arc<Ontology>) {
        self.ontologies.push(ontology);
    }
    pub fn ontologies(&self) -> &[Arc<Ontology>] {
        &self.ontologies
    }
    pub fn len(&self) -> usize {
        self.ontologies.len()
    }
    pub fn is_empty(&self) -> bool {
        self.ontologies.is_empty()
    }
}
impl FromIterator<Arc<Ontology>> for OntologyCatalog {
    fn from_iter<I: IntoIterator<Item = Arc<Ontology>>>(iter: I) -> Self {
        Self {
            ontologies: iter.into_iter().collect(),
        }
    }
}
impl OntologyChecker for OntologyCatalog {
    // accepts <full-iri>, the bare IRI, or its fragment
    fn ontology(&self, name: &str) -> Option<OntologyId> {
        let name = name
            .strip_prefix('<')
            .and_then(|n| n.strip_suffix('>'))
            .unwrap_or(name);
        self.ontologies
            .iter()
            .map(|ontology| ontology.id())
            .find(|id| match id.iri() {
                Some(iri) => iri.as_str() == name || iri.fragment() == name,
                None => false,
            })
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntityType;

    fn iri(s: &str) -> Iri {
        Iri::new(s).unwrap()
    }

    #[test]
    fn declarations_extend_the_signature() {
        let mut ontology = Ontology::new(OntologyId::new(iri("http://example.org/onto")));
        let person = Entity::new(EntityType::Class, iri("http://example.org/onto#Person"));
        assert!(!ontology.contains_entity(&person));
        assert!(ontology.add_axiom(AxiomKind::Declaration(person.clone()).into()));
        assert!(ontology.contains_entity(&person));
        assert!(!ontology.add_axiom(AxiomKind::Declaration(person.clone()).into()));
        assert_eq!(ontology.axiom_count(), 1);
        assert!(!ontology.declare(person));
    }

    #[test]
    fn labels_are_read_from_annotation_assertions() {
        let mut ontology = Ontology::default();
        let subject = iri("http://example.org/onto#hp");
        ontology.add_axiom(
            AxiomKind::AnnotationAssertion(
                vocab::rdfs_label(),
                subject.clone(),
                AnnotationValue::Literal(Literal::string("has part")),
            )
            .into(),
        );
        let labels: Vec<_> = ontology.labels(&subject).map(|l| l.lexical().to_string()).collect();
        assert_eq!(labels, vec!["has part".to_string()]);
    }

    #[test]
    fn catalog_resolves_names_in_several_forms() {
        let id = OntologyId::new(iri("http://example.org/pizza"));
        let catalog: OntologyCatalog = [Arc::new(Ontology::new(id.clone()))].into_iter().collect();
        assert_eq!(catalog.ontology("<http://example.org/pizza>"), Some(id.clone()));
        assert_eq!(catalog.ontology("http://example.org/pizza"), Some(id.clone()));
        assert_eq!(catalog.ontology("pizza"), Some(id));
        assert_eq!(catalog.ontology("wine"), None);
    }
}
