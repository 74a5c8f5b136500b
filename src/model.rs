// The structural model of everything a frame description can produce.
// Constructs are plain immutable values; n-ary operands are kept in ordered
// sets so that `A and B` and `B and A` are the same class expression.

use std::collections::BTreeSet;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::vocab;

lazy_static! {
    // scheme ":" followed by anything that may appear between angle brackets
    static ref IRI_SYNTAX: Regex =
        Regex::new(r#"^[A-Za-z][A-Za-z0-9+.\-]*:[^\s<>"{}|^`\\]*$"#).unwrap();
}

// ------------- Iri -------------
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iri(String);

impl Iri {
    pub fn new(value: impl Into<String>) -> Result<Self, IriError> {
        let value = value.into();
        if IRI_SYNTAX.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(IriError::Invalid { value })
        }
    }
    // only for IRIs assembled from known namespaces
    pub(crate) fn trusted(value: String) -> Self {
        Self(value)
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
    /// The part after the last `#`, `/` or `:`; the whole IRI if that part is empty.
    pub fn fragment(&self) -> &str {
        match self.0.rfind(['#', '/', ':']) {
            Some(i) if i + 1 < self.0.len() => &self.0[i + 1..],
            _ => &self.0,
        }
    }
}
impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}
impl TryFrom<String> for Iri {
    type Error = IriError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
impl From<Iri> for String {
    fn from(iri: Iri) -> Self {
        iri.0
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IriError {
    #[error("invalid IRI: {value}")]
    Invalid { value: String },
}

// ------------- Entity -------------

/// The kinds of named entity, declared in their canonical order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    Class,
    NamedIndividual,
    ObjectProperty,
    DataProperty,
    AnnotationProperty,
    Datatype,
}

impl EntityType {
    pub const ALL: [EntityType; 6] = [
        EntityType::Class,
        EntityType::NamedIndividual,
        EntityType::ObjectProperty,
        EntityType::DataProperty,
        EntityType::AnnotationProperty,
        EntityType::Datatype,
    ];
    /// The functional syntax name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            EntityType::Class => "Class",
            EntityType::NamedIndividual => "NamedIndividual",
            EntityType::ObjectProperty => "ObjectProperty",
            EntityType::DataProperty => "DataProperty",
            EntityType::AnnotationProperty => "AnnotationProperty",
            EntityType::Datatype => "Datatype",
        }
    }
    /// The phrase used when a name of this kind was expected.
    pub fn printable_name(&self) -> &'static str {
        match self {
            EntityType::Class => "Class name",
            EntityType::NamedIndividual => "Individual name",
            EntityType::ObjectProperty => "Object property name",
            EntityType::DataProperty => "Data property name",
            EntityType::AnnotationProperty => "Annotation property name",
            EntityType::Datatype => "Datatype name",
        }
    }
}
impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entity {
    kind: EntityType,
    iri: Iri,
}
impl Entity {
    pub fn new(kind: EntityType, iri: Iri) -> Self {
        Self { kind, iri }
    }
    pub fn kind(&self) -> EntityType {
        self.kind
    }
    pub fn iri(&self) -> &Iri {
        &self.iri
    }
}
impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.iri)
    }
}

// ------------- Literal -------------
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    lexical: String,
    datatype: Iri,
    language: Option<String>,
}
impl Literal {
    pub fn typed(lexical: impl Into<String>, datatype: Iri) -> Self {
        Self {
            lexical: lexical.into(),
            datatype,
            language: None,
        }
    }
    pub fn string(lexical: impl Into<String>) -> Self {
        Self::typed(lexical, vocab::xsd("string"))
    }
    pub fn tagged(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: vocab::rdf("langString"),
            language: Some(language.into()),
        }
    }
    pub fn lexical(&self) -> &str {
        &self.lexical
    }
    pub fn datatype(&self) -> &Iri {
        &self.datatype
    }
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let escaped = self.lexical.replace('\\', "\\\\").replace('"', "\\\"");
        match &self.language {
            Some(language) => write!(f, "\"{escaped}\"@{language}"),
            None if self.datatype == vocab::xsd("string") => write!(f, "\"{escaped}\""),
            None => write!(f, "\"{escaped}\"^^{}", self.datatype),
        }
    }
}

// ------------- Individual -------------
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Individual {
    Named(Iri),
    Anonymous(String),
}
impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Individual::Named(iri) => write!(f, "{iri}"),
            Individual::Anonymous(label) => write!(f, "_:{label}"),
        }
    }
}

// ------------- Property expressions -------------
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjectPropertyExpression {
    Property(Iri),
    Inverse(Iri),
}
impl ObjectPropertyExpression {
    pub fn named(&self) -> &Iri {
        match self {
            ObjectPropertyExpression::Property(iri) | ObjectPropertyExpression::Inverse(iri) => iri,
        }
    }
}
impl fmt::Display for ObjectPropertyExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ObjectPropertyExpression::Property(iri) => write!(f, "{iri}"),
            ObjectPropertyExpression::Inverse(iri) => write!(f, "ObjectInverseOf({iri})"),
        }
    }
}

// ------------- Class expressions -------------
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClassExpression {
    Class(Iri),
    ObjectIntersectionOf(BTreeSet<ClassExpression>),
    ObjectUnionOf(BTreeSet<ClassExpression>),
    ObjectComplementOf(Box<ClassExpression>),
    ObjectOneOf(BTreeSet<Individual>),
    ObjectSomeValuesFrom(ObjectPropertyExpression, Box<ClassExpression>),
    ObjectAllValuesFrom(ObjectPropertyExpression, Box<ClassExpression>),
    ObjectHasValue(ObjectPropertyExpression, Individual),
    ObjectHasSelf(ObjectPropertyExpression),
    ObjectMinCardinality(u32, ObjectPropertyExpression, Option<Box<ClassExpression>>),
    ObjectMaxCardinality(u32, ObjectPropertyExpression, Option<Box<ClassExpression>>),
    ObjectExactCardinality(u32, ObjectPropertyExpression, Option<Box<ClassExpression>>),
    DataSomeValuesFrom(Iri, DataRange),
    DataAllValuesFrom(Iri, DataRange),
    DataHasValue(Iri, Literal),
    DataMinCardinality(u32, Iri, Option<DataRange>),
    DataMaxCardinality(u32, Iri, Option<DataRange>),
    DataExactCardinality(u32, Iri, Option<DataRange>),
}

impl ClassExpression {
    pub fn class(iri: Iri) -> Self {
        ClassExpression::Class(iri)
    }
    pub fn is_named(&self) -> bool {
        matches!(self, ClassExpression::Class(_))
    }
}

fn joined<T: fmt::Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn qualified<T: fmt::Display>(filler: &Option<T>) -> String {
    filler.as_ref().map(|f| format!(" {f}")).unwrap_or_default()
}

impl fmt::Display for ClassExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ClassExpression::*;
        match self {
            Class(iri) => write!(f, "{iri}"),
            ObjectIntersectionOf(operands) => write!(f, "ObjectIntersectionOf({})", joined(operands)),
            ObjectUnionOf(operands) => write!(f, "ObjectUnionOf({})", joined(operands)),
            ObjectComplementOf(operand) => write!(f, "ObjectComplementOf({operand})"),
            ObjectOneOf(individuals) => write!(f, "ObjectOneOf({})", joined(individuals)),
            ObjectSomeValuesFrom(p, c) => write!(f, "ObjectSomeValuesFrom({p} {c})"),
            ObjectAllValuesFrom(p, c) => write!(f, "ObjectAllValuesFrom({p} {c})"),
            ObjectHasValue(p, i) => write!(f, "ObjectHasValue({p} {i})"),
            ObjectHasSelf(p) => write!(f, "ObjectHasSelf({p})"),
            ObjectMinCardinality(n, p, c) => write!(f, "ObjectMinCardinality({n} {p}{})", qualified(c)),
            ObjectMaxCardinality(n, p, c) => write!(f, "ObjectMaxCardinality({n} {p}{})", qualified(c)),
            ObjectExactCardinality(n, p, c) => {
                write!(f, "ObjectExactCardinality({n} {p}{})", qualified(c))
            }
            DataSomeValuesFrom(p, r) => write!(f, "DataSomeValuesFrom({p} {r})"),
            DataAllValuesFrom(p, r) => write!(f, "DataAllValuesFrom({p} {r})"),
            DataHasValue(p, l) => write!(f, "DataHasValue({p} {l})"),
            DataMinCardinality(n, p, r) => write!(f, "DataMinCardinality({n} {p}{})", qualified(r)),
            DataMaxCardinality(n, p, r) => write!(f, "DataMaxCardinality({n} {p}{})", qualified(r)),
            DataExactCardinality(n, p, r) => write!(f, "DataExactCardinality({n} {p}{})", qualified(r)),
        }
    }
}

// ------------- Data ranges -------------
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Facet {
    Length,
    MinLength,
    MaxLength,
    Pattern,
    LangRange,
    MinInclusive,
    MinExclusive,
    MaxInclusive,
    MaxExclusive,
}

impl Facet {
    pub const ALL: [Facet; 9] = [
        Facet::Length,
        Facet::MinLength,
        Facet::MaxLength,
        Facet::Pattern,
        Facet::LangRange,
        Facet::MinInclusive,
        Facet::MinExclusive,
        Facet::MaxInclusive,
        Facet::MaxExclusive,
    ];
    /// How the facet is written inside `[...]` in Manchester syntax.
    pub fn symbol(&self) -> &'static str {
        match self {
            Facet::Length => "length",
            Facet::MinLength => "minLength",
            Facet::MaxLength => "maxLength",
            Facet::Pattern => "pattern",
            Facet::LangRange => "langRange",
            Facet::MinInclusive => ">=",
            Facet::MinExclusive => ">",
            Facet::MaxInclusive => "<=",
            Facet::MaxExclusive => "<",
        }
    }
    pub fn from_symbol(symbol: &str) -> Option<Facet> {
        Facet::ALL.into_iter().find(|facet| facet.symbol() == symbol)
    }
    pub fn iri(&self) -> Iri {
        match self {
            Facet::LangRange => vocab::rdf("langRange"),
            Facet::Length => vocab::xsd("length"),
            Facet::MinLength => vocab::xsd("minLength"),
            Facet::MaxLength => vocab::xsd("maxLength"),
            Facet::Pattern => vocab::xsd("pattern"),
            Facet::MinInclusive => vocab::xsd("minInclusive"),
            Facet::MinExclusive => vocab::xsd("minExclusive"),
            Facet::MaxInclusive => vocab::xsd("maxInclusive"),
            Facet::MaxExclusive => vocab::xsd("maxExclusive"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FacetRestriction {
    pub facet: Facet,
    pub value: Literal,
}
impl fmt::Display for FacetRestriction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.facet.iri(), self.value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DataRange {
    Datatype(Iri),
    DataIntersectionOf(BTreeSet<DataRange>),
    DataUnionOf(BTreeSet<DataRange>),
    DataComplementOf(Box<DataRange>),
    DataOneOf(BTreeSet<Literal>),
    DatatypeRestriction(Iri, Vec<FacetRestriction>),
}
impl fmt::Display for DataRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataRange::Datatype(iri) => write!(f, "{iri}"),
            DataRange::DataIntersectionOf(ranges) => write!(f, "DataIntersectionOf({})", joined(ranges)),
            DataRange::DataUnionOf(ranges) => write!(f, "DataUnionOf({})", joined(ranges)),
            DataRange::DataComplementOf(range) => write!(f, "DataComplementOf({range})"),
            DataRange::DataOneOf(literals) => write!(f, "DataOneOf({})", joined(literals)),
            DataRange::DatatypeRestriction(datatype, facets) => {
                write!(f, "DatatypeRestriction({datatype} {})", joined(facets))
            }
        }
    }
}

// ------------- Annotations -------------
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnnotationValue {
    Literal(Literal),
    Iri(Iri),
    Anonymous(String),
}
impl fmt::Display for AnnotationValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AnnotationValue::Literal(literal) => write!(f, "{literal}"),
            AnnotationValue::Iri(iri) => write!(f, "{iri}"),
            AnnotationValue::Anonymous(label) => write!(f, "_:{label}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Annotation {
    property: Iri,
    value: AnnotationValue,
}
impl Annotation {
    pub fn new(property: Iri, value: AnnotationValue) -> Self {
        Self { property, value }
    }
    pub fn property(&self) -> &Iri {
        &self.property
    }
    pub fn value(&self) -> &AnnotationValue {
        &self.value
    }
}
impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Annotation({} {})", self.property, self.value)
    }
}

// ------------- Axioms -------------
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AxiomKind {
    Declaration(Entity),
    SubClassOf(ClassExpression, ClassExpression),
    EquivalentClasses(BTreeSet<ClassExpression>),
    DisjointClasses(BTreeSet<ClassExpression>),
    DisjointUnion(Iri, BTreeSet<ClassExpression>),
    HasKey(ClassExpression, BTreeSet<ObjectPropertyExpression>, BTreeSet<Iri>),
    ObjectPropertyDomain(ObjectPropertyExpression, ClassExpression),
    ObjectPropertyRange(ObjectPropertyExpression, ClassExpression),
    FunctionalObjectProperty(ObjectPropertyExpression),
    InverseFunctionalObjectProperty(ObjectPropertyExpression),
    ReflexiveObjectProperty(ObjectPropertyExpression),
    IrreflexiveObjectProperty(ObjectPropertyExpression),
    SymmetricObjectProperty(ObjectPropertyExpression),
    AsymmetricObjectProperty(ObjectPropertyExpression),
    TransitiveObjectProperty(ObjectPropertyExpression),
    SubObjectPropertyOf(ObjectPropertyExpression, ObjectPropertyExpression),
    SubPropertyChainOf(Vec<ObjectPropertyExpression>, ObjectPropertyExpression),
    EquivalentObjectProperties(BTreeSet<ObjectPropertyExpression>),
    DisjointObjectProperties(BTreeSet<ObjectPropertyExpression>),
    InverseObjectProperties(ObjectPropertyExpression, ObjectPropertyExpression),
    DataPropertyDomain(Iri, ClassExpression),
    DataPropertyRange(Iri, DataRange),
    FunctionalDataProperty(Iri),
    SubDataPropertyOf(Iri, Iri),
    EquivalentDataProperties(BTreeSet<Iri>),
    DisjointDataProperties(BTreeSet<Iri>),
    AnnotationAssertion(Iri, Iri, AnnotationValue),
    AnnotationPropertyDomain(Iri, Iri),
    AnnotationPropertyRange(Iri, Iri),
    SubAnnotationPropertyOf(Iri, Iri),
    ClassAssertion(ClassExpression, Individual),
    ObjectPropertyAssertion(ObjectPropertyExpression, Individual, Individual),
    NegativeObjectPropertyAssertion(ObjectPropertyExpression, Individual, Individual),
    DataPropertyAssertion(Iri, Individual, Literal),
    NegativeDataPropertyAssertion(Iri, Individual, Literal),
    SameIndividual(BTreeSet<Individual>),
    DifferentIndividuals(BTreeSet<Individual>),
    DatatypeDefinition(Iri, DataRange),
}

impl AxiomKind {
    // functional syntax name and rendered arguments
    fn parts(&self) -> (&'static str, Vec<String>) {
        use AxiomKind::*;
        fn each<T: fmt::Display>(items: impl IntoIterator<Item = T>) -> Vec<String> {
            items.into_iter().map(|item| item.to_string()).collect()
        }
        match self {
            Declaration(e) => ("Declaration", vec![e.to_string()]),
            SubClassOf(sub, sup) => ("SubClassOf", vec![sub.to_string(), sup.to_string()]),
            EquivalentClasses(cs) => ("EquivalentClasses", each(cs)),
            DisjointClasses(cs) => ("DisjointClasses", each(cs)),
            DisjointUnion(c, cs) => ("DisjointUnion", [c.to_string()].into_iter().chain(each(cs)).collect()),
            HasKey(c, ops, dps) => (
                "HasKey",
                vec![c.to_string(), format!("({})", joined(ops)), format!("({})", joined(dps))],
            ),
            ObjectPropertyDomain(p, c) => ("ObjectPropertyDomain", vec![p.to_string(), c.to_string()]),
            ObjectPropertyRange(p, c) => ("ObjectPropertyRange", vec![p.to_string(), c.to_string()]),
            FunctionalObjectProperty(p) => ("FunctionalObjectProperty", vec![p.to_string()]),
            InverseFunctionalObjectProperty(p) => ("InverseFunctionalObjectProperty", vec![p.to_string()]),
            ReflexiveObjectProperty(p) => ("ReflexiveObjectProperty", vec![p.to_string()]),
            IrreflexiveObjectProperty(p) => ("IrreflexiveObjectProperty", vec![p.to_string()]),
            SymmetricObjectProperty(p) => ("SymmetricObjectProperty", vec![p.to_string()]),
            AsymmetricObjectProperty(p) => ("AsymmetricObjectProperty", vec![p.to_string()]),
            TransitiveObjectProperty(p) => ("TransitiveObjectProperty", vec![p.to_string()]),
            SubObjectPropertyOf(sub, sup) => ("SubObjectPropertyOf", vec![sub.to_string(), sup.to_string()]),
            SubPropertyChainOf(chain, sup) => (
                "SubObjectPropertyOf",
                vec![format!("ObjectPropertyChain({})", joined(chain)), sup.to_string()],
            ),
            EquivalentObjectProperties(ps) => ("EquivalentObjectProperties", each(ps)),
            DisjointObjectProperties(ps) => ("DisjointObjectProperties", each(ps)),
            InverseObjectProperties(a, b) => ("InverseObjectProperties", vec![a.to_string(), b.to_string()]),
            DataPropertyDomain(p, c) => ("DataPropertyDomain", vec![p.to_string(), c.to_string()]),
            DataPropertyRange(p, r) => ("DataPropertyRange", vec![p.to_string(), r.to_string()]),
            FunctionalDataProperty(p) => ("FunctionalDataProperty", vec![p.to_string()]),
            SubDataPropertyOf(sub, sup) => ("SubDataPropertyOf", vec![sub.to_string(), sup.to_string()]),
            EquivalentDataProperties(ps) => ("EquivalentDataProperties", each(ps)),
            DisjointDataProperties(ps) => ("DisjointDataProperties", each(ps)),
            AnnotationAssertion(p, s, v) => {
                ("AnnotationAssertion", vec![p.to_string(), s.to_string(), v.to_string()])
            }
            AnnotationPropertyDomain(p, d) => ("AnnotationPropertyDomain", vec![p.to_string(), d.to_string()]),
            AnnotationPropertyRange(p, r) => ("AnnotationPropertyRange", vec![p.to_string(), r.to_string()]),
            SubAnnotationPropertyOf(sub, sup) => {
                ("SubAnnotationPropertyOf", vec![sub.to_string(), sup.to_string()])
            }
            ClassAssertion(c, i) => ("ClassAssertion", vec![c.to_string(), i.to_string()]),
            ObjectPropertyAssertion(p, s, o) => {
                ("ObjectPropertyAssertion", vec![p.to_string(), s.to_string(), o.to_string()])
            }
            NegativeObjectPropertyAssertion(p, s, o) => (
                "NegativeObjectPropertyAssertion",
                vec![p.to_string(), s.to_string(), o.to_string()],
            ),
            DataPropertyAssertion(p, s, l) => {
                ("DataPropertyAssertion", vec![p.to_string(), s.to_string(), l.to_string()])
            }
            NegativeDataPropertyAssertion(p, s, l) => (
                "NegativeDataPropertyAssertion",
                vec![p.to_string(), s.to_string(), l.to_string()],
            ),
            SameIndividual(is) => ("SameIndividual", each(is)),
            DifferentIndividuals(is) => ("DifferentIndividuals", each(is)),
            DatatypeDefinition(d, r) => ("DatatypeDefinition", vec![d.to_string(), r.to_string()]),
        }
    }
}

/// A logical assertion together with the annotations made on it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Axiom {
    kind: AxiomKind,
    annotations: BTreeSet<Annotation>,
}
impl Axiom {
    pub fn new(kind: AxiomKind) -> Self {
        Self {
            kind,
            annotations: BTreeSet::new(),
        }
    }
    pub fn annotated(kind: AxiomKind, annotations: BTreeSet<Annotation>) -> Self {
        Self { kind, annotations }
    }
    pub fn kind(&self) -> &AxiomKind {
        &self.kind
    }
    pub fn annotations(&self) -> &BTreeSet<Annotation> {
        &self.annotations
    }
    pub fn is_declaration(&self) -> bool {
        matches!(self.kind, AxiomKind::Declaration(_))
    }
}
impl From<AxiomKind> for Axiom {
    fn from(kind: AxiomKind) -> Self {
        Axiom::new(kind)
    }
}
impl fmt::Display for Axiom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (name, arguments) = self.kind.parts();
        let all = self
            .annotations
            .iter()
            .map(|a| a.to_string())
            .chain(arguments)
            .collect::<Vec<_>>();
        write!(f, "{name}({})", all.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iri(s: &str) -> Iri {
        Iri::new(s).unwrap()
    }

    #[test]
    fn iri_validation() {
        assert!(Iri::new("http://example.org/a#B").is_ok());
        assert!(Iri::new("urn:isbn:0451450523").is_ok());
        assert!(matches!(Iri::new("not an iri"), Err(IriError::Invalid { .. })));
        assert!(Iri::new("no-scheme").is_err());
    }

    #[test]
    fn iri_fragments() {
        assert_eq!(iri("http://example.org/onto#Person").fragment(), "Person");
        assert_eq!(iri("http://example.org/onto/Person").fragment(), "Person");
        assert_eq!(iri("urn:example:Person").fragment(), "Person");
        assert_eq!(iri("http://example.org/onto/").fragment(), "http://example.org/onto/");
    }

    #[test]
    fn entity_types_are_ordered_canonically() {
        let mut kinds = vec![
            EntityType::Datatype,
            EntityType::DataProperty,
            EntityType::Class,
            EntityType::AnnotationProperty,
            EntityType::ObjectProperty,
            EntityType::NamedIndividual,
        ];
        kinds.sort();
        assert_eq!(kinds, EntityType::ALL.to_vec());
    }

    #[test]
    fn intersections_ignore_operand_order() {
        let a = ClassExpression::class(iri("http://example.org/A"));
        let b = ClassExpression::class(iri("http://example.org/B"));
        let ab = ClassExpression::ObjectIntersectionOf([a.clone(), b.clone()].into_iter().collect());
        let ba = ClassExpression::ObjectIntersectionOf([b, a].into_iter().collect());
        assert_eq!(ab, ba);
    }

    #[test]
    fn axioms_render_in_functional_syntax() {
        let sub = ClassExpression::class(iri("http://example.org/A"));
        let sup = ClassExpression::ObjectSomeValuesFrom(
            ObjectPropertyExpression::Property(iri("http://example.org/p")),
            Box::new(ClassExpression::class(iri("http://example.org/B"))),
        );
        let comment = Annotation::new(
            vocab::rdfs("comment"),
            AnnotationValue::Literal(Literal::tagged("note", "en")),
        );
        let axiom = Axiom::annotated(AxiomKind::SubClassOf(sub, sup), [comment].into_iter().collect());
        assert_eq!(
            axiom.to_string(),
            "SubClassOf(Annotation(<http://www.w3.org/2000/01/rdf-schema#comment> \"note\"@en) \
             <http://example.org/A> ObjectSomeValuesFrom(<http://example.org/p> <http://example.org/B>))"
        );
    }

    #[test]
    fn literals_escape_quotes() {
        let literal = Literal::string("say \"hi\"");
        assert_eq!(literal.to_string(), "\"say \\\"hi\\\"\"");
        let typed = Literal::typed("5", vocab::xsd("integer"));
        assert_eq!(typed.to_string(), "\"5\"^^<http://www.w3.org/2001/XMLSchema#integer>");
    }

    #[test]
    fn facets_round_trip_through_symbols() {
        for facet in Facet::ALL {
            assert_eq!(Facet::from_symbol(facet.symbol()), Some(facet));
        }
        assert_eq!(Facet::from_symbol("=>"), None);
    }
}
