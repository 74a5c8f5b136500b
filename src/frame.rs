//! The frame parser used by editors: parses frame text against a root
//! ontology and describes failures in a form a client can act on.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::checker::FrameEntityChecker;
use crate::fresh::FreshEntities;
use crate::keyword::{EOF, is_keyword};
use crate::model::EntityType;
use crate::ontology::{Ontology, OntologyAxiomPair, OntologyChecker};
use crate::parser::{FramesParser, ParseError};
use crate::shortform::BidirectionalShortFormProvider;

const END_OF_DESCRIPTION: &str = "end of description";

pub struct FrameParser {
    root: Arc<Ontology>,
    short_forms: Arc<BidirectionalShortFormProvider>,
    ontologies: Arc<dyn OntologyChecker>,
}

impl FrameParser {
    pub fn new(
        root: Arc<Ontology>,
        short_forms: Arc<BidirectionalShortFormProvider>,
        ontologies: Arc<dyn OntologyChecker>,
    ) -> Self {
        Self {
            root,
            short_forms,
            ontologies,
        }
    }
    pub fn root_ontology(&self) -> &Ontology {
        &self.root
    }
    pub fn short_forms(&self) -> &BidirectionalShortFormProvider {
        &self.short_forms
    }

    /// Parses frame text. Names are resolved through the short forms of the
    /// root ontology, then through the fresh entity hints. Axioms of sections
    /// that name no ontology go to the root ontology.
    pub fn parse(
        &self,
        text: &str,
        fresh: &dyn FreshEntities,
    ) -> Result<HashSet<OntologyAxiomPair>, ParseError> {
        let checker = FrameEntityChecker::new(&self.short_forms, fresh);
        FramesParser::new(&checker)
            .with_ontology_checker(self.ontologies.as_ref())
            .with_default_ontology(self.root.id().clone())
            .parse(text)
    }

    pub fn describe_error(&self, error: &ParseError) -> FrameParseError {
        describe_error(error)
    }
}

/// A parse failure as reported to clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameParseError {
    message: String,
    column: usize,
    line: usize,
    token: String,
    expected_entity_types: Vec<EntityType>,
}

impl FrameParseError {
    pub fn message(&self) -> &str {
        &self.message
    }
    pub fn column(&self) -> usize {
        self.column
    }
    pub fn line(&self) -> usize {
        self.line
    }
    pub fn token(&self) -> &str {
        &self.token
    }
    pub fn expected_entity_types(&self) -> &[EntityType] {
        &self.expected_entity_types
    }
}

impl fmt::Display for FrameParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.message)
    }
}

pub fn describe_error(error: &ParseError) -> FrameParseError {
    FrameParseError {
        message: error.message().replace(EOF, END_OF_DESCRIPTION),
        column: error.column(),
        line: error.line(),
        token: error.current_token().to_string(),
        expected_entity_types: expected_entity_types(error),
    }
}

/// The entity kinds that could have appeared where the parse failed, in
/// canonical order. Nothing is expected at a keyword or at the end of input.
pub fn expected_entity_types(error: &ParseError) -> Vec<EntityType> {
    let token = error.current_token();
    if token == EOF || is_keyword(token) {
        return Vec::new();
    }
    EntityType::ALL
        .into_iter()
        .filter(|kind| error.is_entity_expected(*kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Expected;

    #[test]
    fn end_of_input_is_described_in_words() {
        let error = ParseError::new(EOF, 3, 9, Expected::entity(EntityType::Class));
        let described = describe_error(&error);
        assert_eq!(described.message(), "Encountered end of description at line 3 column 9. Expected one of:\n\tClass name");
        assert_eq!(described.token(), EOF);
        assert!(described.expected_entity_types().is_empty());
    }

    #[test]
    fn keywords_expect_no_entities() {
        let error = ParseError::new("SubClassOf:", 1, 10, Expected::entity(EntityType::Class));
        assert!(expected_entity_types(&error).is_empty());
        let error = ParseError::new("and", 1, 10, Expected::entity(EntityType::Class));
        assert!(expected_entity_types(&error).is_empty());
    }

    #[test]
    fn kinds_come_in_canonical_order() {
        let expected = Expected::entities([
            EntityType::Datatype,
            EntityType::DataProperty,
            EntityType::Class,
            EntityType::NamedIndividual,
        ]);
        let error = ParseError::new("Foo", 1, 1, expected);
        assert_eq!(
            expected_entity_types(&error),
            vec![
                EntityType::Class,
                EntityType::NamedIndividual,
                EntityType::DataProperty,
                EntityType::Datatype
            ]
        );
    }

    #[test]
    fn descriptor_serializes_in_camel_case() {
        let error = ParseError::new("Foo", 2, 4, Expected::entity(EntityType::ObjectProperty));
        let json = serde_json::to_value(describe_error(&error)).unwrap();
        assert_eq!(json["token"], "Foo");
        assert_eq!(json["line"], 2);
        assert_eq!(json["column"], 4);
        assert_eq!(json["expectedEntityTypes"], serde_json::json!(["OBJECT_PROPERTY"]));
    }
}
