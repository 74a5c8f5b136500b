//! The reserved words of the frames grammar.
//!
//! Frame and section keywords are written with a trailing colon (`Class:`,
//! `SubClassOf:`) and must match exactly. Operator keywords (`some`, `and`,
//! `min` ...), property characteristics and facets match ignoring ASCII case.

use std::fmt;

/// Text of the token appended at the end of every tokenized input.
pub const EOF: &str = "<EOF>";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    // frames
    Class,
    ObjectProperty,
    DataProperty,
    AnnotationProperty,
    Individual,
    Datatype,
    EquivalentClasses,
    DisjointClasses,
    EquivalentProperties,
    DisjointProperties,
    SameIndividual,
    DifferentIndividuals,
    // sections
    Annotations,
    SubClassOf,
    EquivalentTo,
    DisjointWith,
    DisjointUnionOf,
    HasKey,
    Domain,
    Range,
    Characteristics,
    SubPropertyOf,
    InverseOf,
    SubPropertyChain,
    Types,
    Facts,
    SameAs,
    DifferentFrom,
    // characteristics
    Functional,
    InverseFunctional,
    Reflexive,
    Irreflexive,
    Symmetric,
    Asymmetric,
    Transitive,
    // operators
    Some,
    Only,
    Value,
    Min,
    Max,
    Exactly,
    SelfRestriction,
    And,
    Or,
    Not,
    That,
    Inverse,
    Chain,
    // facets
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

impl Keyword {
    pub const ALL: [Keyword; 57] = [
        Keyword::Class,
        Keyword::ObjectProperty,
        Keyword::DataProperty,
        Keyword::AnnotationProperty,
        Keyword::Individual,
        Keyword::Datatype,
        Keyword::EquivalentClasses,
        Keyword::DisjointClasses,
        Keyword::EquivalentProperties,
        Keyword::DisjointProperties,
        Keyword::SameIndividual,
        Keyword::DifferentIndividuals,
        Keyword::Annotations,
        Keyword::SubClassOf,
        Keyword::EquivalentTo,
        Keyword::DisjointWith,
        Keyword::DisjointUnionOf,
        Keyword::HasKey,
        Keyword::Domain,
        Keyword::Range,
        Keyword::Characteristics,
        Keyword::SubPropertyOf,
        Keyword::InverseOf,
        Keyword::SubPropertyChain,
        Keyword::Types,
        Keyword::Facts,
        Keyword::SameAs,
        Keyword::DifferentFrom,
        Keyword::Functional,
        Keyword::InverseFunctional,
        Keyword::Reflexive,
        Keyword::Irreflexive,
        Keyword::Symmetric,
        Keyword::Asymmetric,
        Keyword::Transitive,
        Keyword::Some,
        Keyword::Only,
        Keyword::Value,
        Keyword::Min,
        Keyword::Max,
        Keyword::Exactly,
        Keyword::SelfRestriction,
        Keyword::And,
        Keyword::Or,
        Keyword::Not,
        Keyword::That,
        Keyword::Inverse,
        Keyword::Chain,
        Keyword::Length,
        Keyword::MinLength,
        Keyword::MaxLength,
        Keyword::Pattern,
        Keyword::LangRange,
        Keyword::MinInclusive,
        Keyword::MinExclusive,
        Keyword::MaxInclusive,
        Keyword::MaxExclusive,
    ];

    /// The colon-free form of the keyword.
    pub fn keyword(&self) -> &'static str {
        use Keyword::*;
        match self {
            Class => "Class",
            ObjectProperty => "ObjectProperty",
            DataProperty => "DataProperty",
            AnnotationProperty => "AnnotationProperty",
            Individual => "Individual",
            Datatype => "Datatype",
            EquivalentClasses => "EquivalentClasses",
            DisjointClasses => "DisjointClasses",
            EquivalentProperties => "EquivalentProperties",
            DisjointProperties => "DisjointProperties",
            SameIndividual => "SameIndividual",
            DifferentIndividuals => "DifferentIndividuals",
            Annotations => "Annotations",
            SubClassOf => "SubClassOf",
            EquivalentTo => "EquivalentTo",
            DisjointWith => "DisjointWith",
            DisjointUnionOf => "DisjointUnionOf",
            HasKey => "HasKey",
            Domain => "Domain",
            Range => "Range",
            Characteristics => "Characteristics",
            SubPropertyOf => "SubPropertyOf",
            InverseOf => "InverseOf",
            SubPropertyChain => "SubPropertyChain",
            Types => "Types",
            Facts => "Facts",
            SameAs => "SameAs",
            DifferentFrom => "DifferentFrom",
            Functional => "Functional",
            InverseFunctional => "InverseFunctional",
            Reflexive => "Reflexive",
            Irreflexive => "Irreflexive",
            Symmetric => "Symmetric",
            Asymmetric => "Asymmetric",
            Transitive => "Transitive",
            Some => "some",
            Only => "only",
            Value => "value",
            Min => "min",
            Max => "max",
            Exactly => "exactly",
            SelfRestriction => "Self",
            And => "and",
            Or => "or",
            Not => "not",
            That => "that",
            Inverse => "inverse",
            Chain => "o",
            Length => "length",
            MinLength => "minLength",
            MaxLength => "maxLength",
            Pattern => "pattern",
            LangRange => "langRange",
            MinInclusive => ">=",
            MinExclusive => ">",
            MaxInclusive => "<=",
            MaxExclusive => "<",
        }
    }

    pub fn is_frame(&self) -> bool {
        use Keyword::*;
        matches!(
            self,
            Class
                | ObjectProperty
                | DataProperty
                | AnnotationProperty
                | Individual
                | Datatype
                | EquivalentClasses
                | DisjointClasses
                | EquivalentProperties
                | DisjointProperties
                | SameIndividual
                | DifferentIndividuals
        )
    }

    pub fn is_section(&self) -> bool {
        use Keyword::*;
        matches!(
            self,
            Annotations
                | SubClassOf
                | EquivalentTo
                | DisjointWith
                | DisjointUnionOf
                | HasKey
                | Domain
                | Range
                | Characteristics
                | SubPropertyOf
                | InverseOf
                | SubPropertyChain
                | Types
                | Facts
                | SameAs
                | DifferentFrom
        )
    }

    /// Whether the keyword is written with a trailing colon.
    pub fn takes_colon(&self) -> bool {
        self.is_frame() || self.is_section()
    }

    /// Recognizes a token as a keyword in the position of a grammar symbol.
    pub fn parse(token: &str) -> Option<Keyword> {
        Keyword::ALL.into_iter().find(|keyword| {
            if keyword.takes_colon() {
                token.strip_suffix(':') == Some(keyword.keyword())
            } else {
                token.eq_ignore_ascii_case(keyword.keyword())
            }
        })
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.takes_colon() {
            write!(f, "{}:", self.keyword())
        } else {
            f.write_str(self.keyword())
        }
    }
}

/// Reserved words of Manchester syntax that the frames grammar does not use.
pub const RESERVED: [&str; 10] = [
    "Prefix",
    "Ontology",
    "Import",
    "Rule",
    "SuperClassOf",
    "SuperPropertyOf",
    "Individuals",
    "ValuePartition",
    "AntiSymmetric",
    "onlysome",
];

/// Whether a token is a reserved word, with or without a single trailing
/// colon. The comparison is exact, so `CLASS` is a name and not a keyword.
pub fn is_keyword(token: &str) -> bool {
    let stripped = token.strip_suffix(':').unwrap_or(token);
    Keyword::ALL.iter().any(|keyword| stripped == keyword.keyword()) || RESERVED.contains(&stripped)
}
