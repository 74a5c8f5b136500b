use std::collections::BTreeSet;

use thiserror::Error;

use crate::keyword::Keyword;
use crate::model::EntityType;

/// What the grammar would have accepted at the position of a failure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Expected {
    kinds: BTreeSet<EntityType>,
    other: Vec<String>,
}

impl Expected {
    pub fn nothing() -> Self {
        Self::default()
    }
    pub fn entity(kind: EntityType) -> Self {
        Self::nothing().with_entity(kind)
    }
    pub fn entities(kinds: impl IntoIterator<Item = EntityType>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
            other: Vec::new(),
        }
    }
    pub fn keywords(keywords: impl IntoIterator<Item = Keyword>) -> Self {
        Self::nothing().with_keywords(keywords)
    }
    pub fn with_entity(mut self, kind: EntityType) -> Self {
        self.kinds.insert(kind);
        self
    }
    pub fn with_keyword(self, keyword: Keyword) -> Self {
        self.with(keyword.to_string())
    }
    pub fn with_keywords(self, keywords: impl IntoIterator<Item = Keyword>) -> Self {
        keywords.into_iter().fold(self, Self::with_keyword)
    }
    pub fn with(mut self, item: impl Into<String>) -> Self {
        let item = item.into();
        if !self.other.contains(&item) {
            self.other.push(item);
        }
        self
    }
    pub fn kinds(&self) -> impl Iterator<Item = EntityType> + '_ {
        self.kinds.iter().copied()
    }
    pub fn other(&self) -> &[String] {
        &self.other
    }
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty() && self.other.is_empty()
    }
}

/// The single failure of the grammar engine: where it stopped and what it
/// would have accepted instead.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    message: String,
    current_token: String,
    line: usize,
    column: usize,
    expected: Expected,
}

impl ParseError {
    pub fn new(current_token: impl Into<String>, line: usize, column: usize, expected: Expected) -> Self {
        let current_token = current_token.into();
        let message = compose(&current_token, line, column, &expected);
        Self {
            message,
            current_token,
            line,
            column,
            expected,
        }
    }
    pub fn message(&self) -> &str {
        &self.message
    }
    pub fn current_token(&self) -> &str {
        &self.current_token
    }
    pub fn line(&self) -> usize {
        self.line
    }
    pub fn column(&self) -> usize {
        self.column
    }
    pub fn expected(&self) -> &Expected {
        &self.expected
    }
    pub fn is_entity_expected(&self, kind: EntityType) -> bool {
        self.expected.kinds.contains(&kind)
    }
    pub fn is_class_name_expected(&self) -> bool {
        self.is_entity_expected(EntityType::Class)
    }
    pub fn is_individual_name_expected(&self) -> bool {
        self.is_entity_expected(EntityType::NamedIndividual)
    }
    pub fn is_object_property_name_expected(&self) -> bool {
        self.is_entity_expected(EntityType::ObjectProperty)
    }
    pub fn is_data_property_name_expected(&self) -> bool {
        self.is_entity_expected(EntityType::DataProperty)
    }
    pub fn is_annotation_property_name_expected(&self) -> bool {
        self.is_entity_expected(EntityType::AnnotationProperty)
    }
    pub fn is_datatype_name_expected(&self) -> bool {
        self.is_entity_expected(EntityType::Datatype)
    }
    /// Keywords, symbols and other non-entity items that were expected.
    pub fn expected_keywords(&self) -> &[String] {
        self.expected.other()
    }
}

fn compose(token: &str, line: usize, column: usize, expected: &Expected) -> String {
    let mut message = format!("Encountered {token} at line {line} column {column}.");
    if expected.is_empty() {
        return message;
    }
    message.push_str(" Expected one of:");
    let items = expected
        .kinds()
        .map(|kind| kind.printable_name().to_string())
        .chain(expected.other().iter().cloned());
    for item in items {
        message.push_str("\n\t");
        message.push_str(&item);
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_lists_kinds_before_other_items() {
        let expected = Expected::entity(EntityType::DataProperty)
            .with_keyword(Keyword::Not)
            .with_entity(EntityType::Class);
        let error = ParseError::new("foo", 2, 7, expected);
        assert_eq!(
            error.message(),
            "Encountered foo at line 2 column 7. Expected one of:\n\tClass name\n\tData property name\n\tnot"
        );
        assert!(error.is_class_name_expected());
        assert!(error.is_data_property_name_expected());
        assert!(!error.is_object_property_name_expected());
        assert_eq!(error.expected_keywords(), ["not".to_string()]);
    }

    #[test]
    fn message_without_expectations_ends_at_position() {
        let error = ParseError::new("<EOF>", 1, 12, Expected::nothing());
        assert_eq!(error.to_string(), "Encountered <EOF> at line 1 column 12.");
    }

    #[test]
    fn other_items_are_not_repeated() {
        let expected = Expected::keywords([Keyword::SubClassOf, Keyword::SubClassOf]).with(")");
        assert_eq!(expected.other(), ["SubClassOf:".to_string(), ")".to_string()]);
    }
}
