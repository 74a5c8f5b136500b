//! Recursive descent parser for Manchester syntax frames.
//!
//! The parser resolves every name it reads through an [`EntityChecker`]; a
//! name that does not resolve to a kind allowed at its position stops the
//! parse with a [`ParseError`] that records the kinds that would have been
//! accepted there.

mod error;
mod expression;
mod frames;

use std::collections::{BTreeSet, HashSet};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

pub use error::{Expected, ParseError};

use crate::checker::EntityChecker;
use crate::keyword::Keyword;
use crate::model::{Annotation, AnnotationValue, Axiom, AxiomKind, Entity, EntityType, Iri, Literal};
use crate::ontology::{OntologyAxiomPair, OntologyChecker, OntologyId};
use crate::tokenizer::{Token, TokenKind, tokenize};
use crate::vocab;

lazy_static! {
    static ref INTEGER: Regex = Regex::new(r"^[+-]?[0-9]+$").unwrap();
    static ref DECIMAL: Regex = Regex::new(r"^[+-]?[0-9]*\.[0-9]+$").unwrap();
    static ref FLOAT: Regex =
        Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)(([eE][+-]?[0-9]+)?[fF]|[eE][+-]?[0-9]+)$").unwrap();
}

/// Deepest nesting of class expressions and data ranges a parse accepts.
pub const MAX_NESTING: usize = 128;

/// Parses frame text into the axioms it describes.
pub struct FramesParser<'a> {
    entities: &'a dyn EntityChecker,
    ontologies: Option<&'a dyn OntologyChecker>,
    default_ontology: OntologyId,
}

impl<'a> FramesParser<'a> {
    pub fn new(entities: &'a dyn EntityChecker) -> Self {
        Self {
            entities,
            ontologies: None,
            default_ontology: OntologyId::anonymous(),
        }
    }
    pub fn with_ontology_checker(mut self, ontologies: &'a dyn OntologyChecker) -> Self {
        self.ontologies = Some(ontologies);
        self
    }
    /// The ontology axioms go to when a section names none.
    pub fn with_default_ontology(mut self, ontology: OntologyId) -> Self {
        self.default_ontology = ontology;
        self
    }
    pub fn default_ontology(&self) -> &OntologyId {
        &self.default_ontology
    }

    pub fn parse(&self, text: &str) -> Result<HashSet<OntologyAxiomPair>, ParseError> {
        let tokens = tokenize(text)?;
        debug!(tokens = tokens.len(), "tokenized frames");
        let mut grammar = Grammar {
            tokens,
            pos: 0,
            depth: 0,
            parser: self,
            axioms: HashSet::new(),
        };
        grammar.frames()?;
        debug!(axioms = grammar.axioms.len(), "parsed frames");
        Ok(grammar.axioms)
    }
}

// Parse state of a single call. Tokens always end with an EOF token, which
// the cursor never moves past.
struct Grammar<'p, 'a> {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    parser: &'p FramesParser<'a>,
    axioms: HashSet<OntologyAxiomPair>,
}

type Annotated<T> = Vec<(BTreeSet<Annotation>, T)>;

impl Grammar<'_, '_> {
    // ------------- Token cursor -------------

    fn peek(&self) -> &Token {
        self.peek_ahead(0)
    }
    fn peek_ahead(&self, n: usize) -> &Token {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[(self.pos + n).min(last)]
    }
    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }
    fn at_eof(&self) -> bool {
        self.peek().is_eof()
    }
    fn keyword_of(token: &Token) -> Option<Keyword> {
        match token.kind {
            TokenKind::Word | TokenKind::Comparison => Keyword::parse(&token.text),
            _ => None,
        }
    }
    fn peek_keyword(&self) -> Option<Keyword> {
        Self::keyword_of(self.peek())
    }
    fn at(&self, keyword: Keyword) -> bool {
        self.peek_keyword() == Some(keyword)
    }
    fn eat(&mut self, keyword: Keyword) -> bool {
        let found = self.at(keyword);
        if found {
            self.advance();
        }
        found
    }
    fn at_symbol(&self, symbol: &str) -> bool {
        self.peek().is_symbol(symbol)
    }
    fn eat_symbol(&mut self, symbol: &str) -> bool {
        let found = self.at_symbol(symbol);
        if found {
            self.advance();
        }
        found
    }
    fn expect_symbol(&mut self, symbol: &str) -> Result<(), ParseError> {
        if self.eat_symbol(symbol) {
            Ok(())
        } else {
            Err(self.unexpected(Expected::nothing().with(symbol)))
        }
    }
    fn unexpected(&self, expected: Expected) -> ParseError {
        let token = self.peek();
        ParseError::new(token.text.clone(), token.line, token.column, expected)
    }

    // Runs a parse one nesting level deeper; fails at the current token once
    // MAX_NESTING levels are open.
    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> Result<T, ParseError>) -> Result<T, ParseError> {
        if self.depth >= MAX_NESTING {
            let limit = format!("expression nested at most {MAX_NESTING} deep");
            return Err(self.unexpected(Expected::nothing().with(limit)));
        }
        self.depth += 1;
        let parsed = parse(self);
        self.depth -= 1;
        parsed
    }

    // ------------- Entities -------------

    fn resolve(&self, kind: EntityType) -> Option<Entity> {
        let token = self.peek();
        if token.is_name() {
            self.parser.entities.lookup(&token.text, kind)
        } else {
            None
        }
    }
    fn is(&self, kind: EntityType) -> bool {
        self.resolve(kind).is_some()
    }
    fn entity(&mut self, kind: EntityType) -> Result<Iri, ParseError> {
        match self.resolve(kind) {
            Some(entity) => {
                self.advance();
                Ok(entity.iri().clone())
            }
            None => Err(self.unexpected(Expected::entity(kind))),
        }
    }
    /// A full IRI, or the IRI of an entity of any kind.
    fn iri(&mut self) -> Result<Iri, ParseError> {
        if let Some(Ok(iri)) = self.peek().iri_text().map(Iri::new) {
            self.advance();
            return Ok(iri);
        }
        match EntityType::ALL.into_iter().find_map(|kind| self.resolve(kind)) {
            Some(entity) => {
                self.advance();
                Ok(entity.iri().clone())
            }
            None => Err(self.unexpected(Expected::nothing().with("IRI"))),
        }
    }

    // ------------- Lists -------------

    fn list<T>(&mut self, mut item: impl FnMut(&mut Self) -> Result<T, ParseError>) -> Result<Vec<T>, ParseError> {
        let mut items = vec![item(self)?];
        while self.eat_symbol(",") {
            items.push(item(self)?);
        }
        Ok(items)
    }

    fn annotated_list<T>(
        &mut self,
        mut item: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Annotated<T>, ParseError> {
        self.list(|grammar| {
            let annotations = grammar.axiom_annotations()?;
            Ok((annotations, item(grammar)?))
        })
    }

    /// The optional `[onto, ...]` list after a section keyword; the default
    /// ontology when absent.
    fn ontologies(&mut self) -> Result<Vec<OntologyId>, ParseError> {
        if !self.eat_symbol("[") {
            return Ok(vec![self.parser.default_ontology.clone()]);
        }
        let mut ontologies = Vec::new();
        loop {
            let token = self.peek();
            let found = match self.parser.ontologies {
                Some(checker) if token.is_name() => checker.ontology(&token.text),
                _ => None,
            };
            match found {
                Some(ontology) => {
                    self.advance();
                    if !ontologies.contains(&ontology) {
                        ontologies.push(ontology);
                    }
                }
                None => return Err(self.unexpected(Expected::nothing().with("ontology name"))),
            }
            if !self.eat_symbol(",") {
                break;
            }
        }
        self.expect_symbol("]")?;
        Ok(ontologies)
    }

    // ------------- Annotations -------------

    fn axiom_annotations(&mut self) -> Result<BTreeSet<Annotation>, ParseError> {
        if !self.eat(Keyword::Annotations) {
            return Ok(BTreeSet::new());
        }
        Ok(self.list(Self::annotation)?.into_iter().collect())
    }

    fn annotation(&mut self) -> Result<Annotation, ParseError> {
        let property = self.entity(EntityType::AnnotationProperty)?;
        let value = self.annotation_value()?;
        Ok(Annotation::new(property, value))
    }

    fn annotation_value(&mut self) -> Result<AnnotationValue, ParseError> {
        if let Some(label) = self.peek().anonymous_label() {
            let label = label.to_string();
            self.advance();
            return Ok(AnnotationValue::Anonymous(label));
        }
        if self.starts_literal() {
            return Ok(AnnotationValue::Literal(self.literal()?));
        }
        self.iri()
            .map(AnnotationValue::Iri)
            .map_err(|_| self.unexpected(Expected::nothing().with("literal").with("IRI")))
    }

    // ------------- Literals -------------

    fn starts_literal(&self) -> bool {
        let token = self.peek();
        match token.kind {
            TokenKind::StringLiteral => true,
            TokenKind::Word => bare_literal(&token.text).is_some(),
            _ => false,
        }
    }

    fn literal(&mut self) -> Result<Literal, ParseError> {
        let token = self.peek().clone();
        match token.kind {
            TokenKind::StringLiteral => {
                self.advance();
                let lexical = unescape(&token.text[1..token.text.len() - 1]);
                match self.peek().kind {
                    TokenKind::DatatypeMarker => {
                        self.advance();
                        let datatype = self.entity(EntityType::Datatype)?;
                        Ok(Literal::typed(lexical, datatype))
                    }
                    TokenKind::LanguageTag => {
                        let tag = self.advance().text;
                        Ok(Literal::tagged(lexical, &tag[1..]))
                    }
                    _ => Ok(Literal::string(lexical)),
                }
            }
            TokenKind::Word => match bare_literal(&token.text) {
                Some(literal) => {
                    self.advance();
                    Ok(literal)
                }
                None => Err(self.unexpected(Expected::nothing().with("literal"))),
            },
            _ => Err(self.unexpected(Expected::nothing().with("literal"))),
        }
    }

    // ------------- Output -------------

    fn add(&mut self, ontologies: &[OntologyId], annotations: BTreeSet<Annotation>, kind: AxiomKind) {
        let axiom = Axiom::annotated(kind, annotations);
        for ontology in ontologies {
            self.axioms
                .insert(OntologyAxiomPair::new(ontology.clone(), axiom.clone()));
        }
    }

    fn add_all<T>(&mut self, ontologies: &[OntologyId], items: Annotated<T>, mut kind: impl FnMut(T) -> AxiomKind) {
        for (annotations, item) in items {
            self.add(ontologies, annotations, kind(item));
        }
    }

    fn declare(&mut self, kind: EntityType, iri: &Iri) {
        let ontology = self.parser.default_ontology.clone();
        self.add(
            &[ontology],
            BTreeSet::new(),
            AxiomKind::Declaration(Entity::new(kind, iri.clone())),
        );
    }
}

/// Unquoted numbers and booleans, typed by their lexical form.
fn bare_literal(word: &str) -> Option<Literal> {
    if INTEGER.is_match(word) {
        Some(Literal::typed(word, vocab::xsd("integer")))
    } else if DECIMAL.is_match(word) {
        Some(Literal::typed(word, vocab::xsd("decimal")))
    } else if FLOAT.is_match(word) {
        let lexical = word.trim_end_matches(['f', 'F']);
        Some(Literal::typed(lexical, vocab::xsd("float")))
    } else if word == "true" || word == "false" {
        Some(Literal::typed(word, vocab::xsd("boolean")))
    } else {
        None
    }
}

fn unescape(quoted: &str) -> String {
    let mut unescaped = String::with_capacity(quoted.len());
    let mut chars = quoted.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => unescaped.extend(chars.next()),
            c => unescaped.push(c),
        }
    }
    unescaped
}
