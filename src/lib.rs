//! Mansyntax – a parser for OWL 2 Manchester syntax frames.
//!
//! Frame text such as
//!
//! ```text
//! Class: Margherita
//!     SubClassOf: Pizza, hasTopping some Mozzarella
//! ```
//!
//! is parsed against a root ontology into a set of
//! [`ontology::OntologyAxiomPair`]s: each axiom paired with the ontology it
//! belongs in. Names are written as short forms (labels or IRI fragments) and
//! resolved through a [`shortform::BidirectionalShortFormProvider`]; names of
//! entities that do not exist yet can be supplied as fresh entity hints.
//!
//! When parsing fails, the [`parser::ParseError`] records where and what the
//! parser expected. [`frame::describe_error`] turns it into a
//! [`frame::FrameParseError`] listing the kinds of entity that could have
//! appeared at that position, which is what an editor needs to offer
//! completions or to propose creating a new entity.
//!
//! ## Modules
//! * [`frame`] – The editor facing [`frame::FrameParser`] and error descriptor.
//! * [`parser`] – The grammar engine and its [`parser::ParseError`].
//! * [`tokenizer`] – Positioned tokens, lexed by the pest grammar in `mansyntax.pest`.
//! * [`checker`] / [`fresh`] / [`shortform`] – Name resolution.
//! * [`model`] / [`ontology`] / [`vocab`] – Axioms, ontologies and built-in vocabulary.
//! * [`settings`] / [`server`] – Configuration and the HTTP surface used by the binary.
//!
//! ## Quick Start
//! ```
//! use std::sync::Arc;
//! use mansyntax::frame::FrameParser;
//! use mansyntax::fresh::NoFreshEntities;
//! use mansyntax::model::{Entity, EntityType, Iri};
//! use mansyntax::ontology::{Ontology, OntologyCatalog, OntologyId};
//! use mansyntax::shortform::{BidirectionalShortFormProvider, SimpleShortFormProvider};
//!
//! let mut root = Ontology::new(OntologyId::new(Iri::new("http://example.org/pizza").unwrap()));
//! root.declare(Entity::new(EntityType::Class, Iri::new("http://example.org/pizza#Pizza").unwrap()));
//! let short_forms = BidirectionalShortFormProvider::from_ontologies([&root], &SimpleShortFormProvider);
//! let root = Arc::new(root);
//! let catalog: OntologyCatalog = [root.clone()].into_iter().collect();
//! let parser = FrameParser::new(root, Arc::new(short_forms), Arc::new(catalog));
//! let axioms = parser.parse("Class: Pizza SubClassOf: owl:Thing", &NoFreshEntities).unwrap();
//! assert_eq!(axioms.len(), 2);
//! ```

pub mod checker;
pub mod error;
pub mod frame;
pub mod fresh;
pub mod keyword;
pub mod model;
pub mod ontology;
pub mod parser;
pub mod server;
pub mod settings;
pub mod shortform;
pub mod tokenizer;
pub mod vocab;
