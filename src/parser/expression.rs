// Class expressions, object property expressions, individuals and data ranges.

use std::collections::BTreeSet;

use super::{Expected, Grammar, ParseError};
use crate::keyword::Keyword;
use crate::model::{
    ClassExpression, DataRange, EntityType, Facet, FacetRestriction, Individual, Iri, ObjectPropertyExpression,
};
use crate::tokenizer::TokenKind;

const OBJECT_RESTRICTIONS: [Keyword; 7] = [
    Keyword::Some,
    Keyword::Only,
    Keyword::Value,
    Keyword::SelfRestriction,
    Keyword::Min,
    Keyword::Max,
    Keyword::Exactly,
];

const DATA_RESTRICTIONS: [Keyword; 6] = [
    Keyword::Some,
    Keyword::Only,
    Keyword::Value,
    Keyword::Min,
    Keyword::Max,
    Keyword::Exactly,
];

// a single operand stands for itself
fn n_ary<T: Ord>(operands: Vec<T>, combine: impl FnOnce(BTreeSet<T>) -> T) -> T {
    let mut operands: BTreeSet<T> = operands.into_iter().collect();
    if operands.len() == 1 {
        if let Some(only) = operands.pop_first() {
            return only;
        }
    }
    combine(operands)
}

impl Grammar<'_, '_> {
    // ------------- Class expressions -------------

    pub(super) fn description(&mut self) -> Result<ClassExpression, ParseError> {
        let mut operands = vec![self.conjunction()?];
        while self.eat(Keyword::Or) {
            operands.push(self.conjunction()?);
        }
        Ok(n_ary(operands, ClassExpression::ObjectUnionOf))
    }

    fn conjunction(&mut self) -> Result<ClassExpression, ParseError> {
        let mut operands = vec![self.primary()?];
        while self.eat(Keyword::And) || self.eat(Keyword::That) {
            operands.push(self.primary()?);
        }
        Ok(n_ary(operands, ClassExpression::ObjectIntersectionOf))
    }

    fn starts_primary(&self) -> bool {
        self.at(Keyword::Not)
            || self.at(Keyword::Inverse)
            || self.at_symbol("(")
            || self.at_symbol("{")
            || self.is(EntityType::Class)
            || self.is(EntityType::ObjectProperty)
            || self.is(EntityType::DataProperty)
    }

    // a punned name is a property only when a restriction keyword follows it
    fn restriction_follows(&self, keywords: &[Keyword]) -> bool {
        Self::keyword_of(self.peek_ahead(1)).is_some_and(|k| keywords.contains(&k))
    }

    fn primary(&mut self) -> Result<ClassExpression, ParseError> {
        self.nested(Self::primary_body)
    }

    fn primary_body(&mut self) -> Result<ClassExpression, ParseError> {
        if self.eat(Keyword::Not) {
            return Ok(ClassExpression::ObjectComplementOf(Box::new(self.primary()?)));
        }
        if self.eat_symbol("(") {
            let description = self.description()?;
            self.expect_symbol(")")?;
            return Ok(description);
        }
        if self.eat_symbol("{") {
            let individuals = self.list(Self::individual)?;
            self.expect_symbol("}")?;
            return Ok(ClassExpression::ObjectOneOf(individuals.into_iter().collect()));
        }
        let class = self.is(EntityType::Class);
        if self.at(Keyword::Inverse)
            || (self.is(EntityType::ObjectProperty) && (!class || self.restriction_follows(&OBJECT_RESTRICTIONS)))
        {
            let property = self.object_property_expression()?;
            return self.object_restriction(property);
        }
        if self.is(EntityType::DataProperty) && (!class || self.restriction_follows(&DATA_RESTRICTIONS)) {
            let property = self.entity(EntityType::DataProperty)?;
            return self.data_restriction(property);
        }
        if class {
            return Ok(ClassExpression::Class(self.entity(EntityType::Class)?));
        }
        Err(self.unexpected(
            Expected::entities([EntityType::Class, EntityType::ObjectProperty, EntityType::DataProperty])
                .with_keyword(Keyword::Not)
                .with_keyword(Keyword::Inverse)
                .with("(")
                .with("{"),
        ))
    }

    pub(super) fn object_property_expression(&mut self) -> Result<ObjectPropertyExpression, ParseError> {
        if self.eat(Keyword::Inverse) {
            let parenthesized = self.eat_symbol("(");
            let property = self.entity(EntityType::ObjectProperty)?;
            if parenthesized {
                self.expect_symbol(")")?;
            }
            return Ok(ObjectPropertyExpression::Inverse(property));
        }
        match self.resolve(EntityType::ObjectProperty) {
            Some(property) => {
                self.advance();
                Ok(ObjectPropertyExpression::Property(property.iri().clone()))
            }
            None => Err(self.unexpected(Expected::entity(EntityType::ObjectProperty).with_keyword(Keyword::Inverse))),
        }
    }

    fn object_restriction(&mut self, property: ObjectPropertyExpression) -> Result<ClassExpression, ParseError> {
        let keyword = match self.peek_keyword() {
            Some(keyword) if OBJECT_RESTRICTIONS.contains(&keyword) => keyword,
            _ => return Err(self.unexpected(Expected::keywords(OBJECT_RESTRICTIONS))),
        };
        self.advance();
        let restriction = match keyword {
            Keyword::Some => ClassExpression::ObjectSomeValuesFrom(property, Box::new(self.primary()?)),
            Keyword::Only => ClassExpression::ObjectAllValuesFrom(property, Box::new(self.primary()?)),
            Keyword::Value => ClassExpression::ObjectHasValue(property, self.individual()?),
            Keyword::SelfRestriction => ClassExpression::ObjectHasSelf(property),
            cardinality => {
                let n = self.cardinality()?;
                let filler = if self.starts_primary() {
                    Some(Box::new(self.primary()?))
                } else {
                    None
                };
                match cardinality {
                    Keyword::Min => ClassExpression::ObjectMinCardinality(n, property, filler),
                    Keyword::Max => ClassExpression::ObjectMaxCardinality(n, property, filler),
                    _ => ClassExpression::ObjectExactCardinality(n, property, filler),
                }
            }
        };
        Ok(restriction)
    }

    fn data_restriction(&mut self, property: Iri) -> Result<ClassExpression, ParseError> {
        let keyword = match self.peek_keyword() {
            Some(keyword) if DATA_RESTRICTIONS.contains(&keyword) => keyword,
            _ => return Err(self.unexpected(Expected::keywords(DATA_RESTRICTIONS))),
        };
        self.advance();
        let restriction = match keyword {
            Keyword::Some => ClassExpression::DataSomeValuesFrom(property, self.data_primary()?),
            Keyword::Only => ClassExpression::DataAllValuesFrom(property, self.data_primary()?),
            Keyword::Value => ClassExpression::DataHasValue(property, self.literal()?),
            cardinality => {
                let n = self.cardinality()?;
                let filler = if self.starts_data_primary() {
                    Some(self.data_primary()?)
                } else {
                    None
                };
                match cardinality {
                    Keyword::Min => ClassExpression::DataMinCardinality(n, property, filler),
                    Keyword::Max => ClassExpression::DataMaxCardinality(n, property, filler),
                    _ => ClassExpression::DataExactCardinality(n, property, filler),
                }
            }
        };
        Ok(restriction)
    }

    fn cardinality(&mut self) -> Result<u32, ParseError> {
        let token = self.peek();
        if token.kind != TokenKind::Word || !token.text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(self.unexpected(Expected::nothing().with("non-negative integer")));
        }
        match token.text.parse::<u32>() {
            Ok(n) => {
                self.advance();
                Ok(n)
            }
            Err(_) => Err(self.unexpected(Expected::nothing().with(format!("integer no larger than {}", u32::MAX)))),
        }
    }

    // ------------- Individuals -------------

    pub(super) fn individual(&mut self) -> Result<Individual, ParseError> {
        if let Some(label) = self.peek().anonymous_label() {
            let label = label.to_string();
            self.advance();
            return Ok(Individual::Anonymous(label));
        }
        Ok(Individual::Named(self.entity(EntityType::NamedIndividual)?))
    }

    // ------------- Data ranges -------------

    pub(super) fn data_range(&mut self) -> Result<DataRange, ParseError> {
        let mut operands = vec![self.data_conjunction()?];
        while self.eat(Keyword::Or) {
            operands.push(self.data_conjunction()?);
        }
        Ok(n_ary(operands, DataRange::DataUnionOf))
    }

    fn data_conjunction(&mut self) -> Result<DataRange, ParseError> {
        let mut operands = vec![self.data_primary()?];
        while self.eat(Keyword::And) {
            operands.push(self.data_primary()?);
        }
        Ok(n_ary(operands, DataRange::DataIntersectionOf))
    }

    fn starts_data_primary(&self) -> bool {
        self.at(Keyword::Not) || self.at_symbol("(") || self.at_symbol("{") || self.is(EntityType::Datatype)
    }

    fn data_primary(&mut self) -> Result<DataRange, ParseError> {
        self.nested(Self::data_primary_body)
    }

    fn data_primary_body(&mut self) -> Result<DataRange, ParseError> {
        if self.eat(Keyword::Not) {
            return Ok(DataRange::DataComplementOf(Box::new(self.data_primary()?)));
        }
        if self.eat_symbol("(") {
            let range = self.data_range()?;
            self.expect_symbol(")")?;
            return Ok(range);
        }
        if self.eat_symbol("{") {
            let literals = self.list(Self::literal)?;
            self.expect_symbol("}")?;
            return Ok(DataRange::DataOneOf(literals.into_iter().collect()));
        }
        if !self.is(EntityType::Datatype) {
            return Err(self.unexpected(
                Expected::entity(EntityType::Datatype)
                    .with_keyword(Keyword::Not)
                    .with("(")
                    .with("{"),
            ));
        }
        let datatype = self.entity(EntityType::Datatype)?;
        if !self.eat_symbol("[") {
            return Ok(DataRange::Datatype(datatype));
        }
        let facets = self.list(Self::facet_restriction)?;
        self.expect_symbol("]")?;
        Ok(DataRange::DatatypeRestriction(datatype, facets))
    }

    fn facet_restriction(&mut self) -> Result<FacetRestriction, ParseError> {
        let token = self.peek();
        let facet = match token.kind {
            TokenKind::Word | TokenKind::Comparison => Facet::from_symbol(&token.text),
            _ => None,
        };
        let Some(facet) = facet else {
            let symbols = Facet::ALL.iter().fold(Expected::nothing(), |e, f| e.with(f.symbol()));
            return Err(self.unexpected(symbols));
        };
        self.advance();
        let value = self.literal()?;
        Ok(FacetRestriction { facet, value })
    }
}
