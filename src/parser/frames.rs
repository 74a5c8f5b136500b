// Frames and their sections.

use std::collections::BTreeSet;

use super::{Expected, Grammar, ParseError};
use crate::keyword::Keyword;
use crate::model::{AxiomKind, ClassExpression, EntityType, Individual, Iri, ObjectPropertyExpression};

const FRAMES: [Keyword; 12] = [
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
];

const CLASS_SECTIONS: [Keyword; 6] = [
    Keyword::Annotations,
    Keyword::SubClassOf,
    Keyword::EquivalentTo,
    Keyword::DisjointWith,
    Keyword::DisjointUnionOf,
    Keyword::HasKey,
];

const OBJECT_PROPERTY_SECTIONS: [Keyword; 9] = [
    Keyword::Annotations,
    Keyword::Domain,
    Keyword::Range,
    Keyword::Characteristics,
    Keyword::SubPropertyOf,
    Keyword::EquivalentTo,
    Keyword::DisjointWith,
    Keyword::InverseOf,
    Keyword::SubPropertyChain,
];

const DATA_PROPERTY_SECTIONS: [Keyword; 7] = [
    Keyword::Annotations,
    Keyword::Domain,
    Keyword::Range,
    Keyword::Characteristics,
    Keyword::SubPropertyOf,
    Keyword::EquivalentTo,
    Keyword::DisjointWith,
];

const ANNOTATION_PROPERTY_SECTIONS: [Keyword; 4] = [
    Keyword::Annotations,
    Keyword::Domain,
    Keyword::Range,
    Keyword::SubPropertyOf,
];

const INDIVIDUAL_SECTIONS: [Keyword; 5] = [
    Keyword::Annotations,
    Keyword::Types,
    Keyword::Facts,
    Keyword::SameAs,
    Keyword::DifferentFrom,
];

const DATATYPE_SECTIONS: [Keyword; 2] = [Keyword::Annotations, Keyword::EquivalentTo];

type Characteristic = fn(ObjectPropertyExpression) -> AxiomKind;

const OBJECT_CHARACTERISTICS: [(Keyword, Characteristic); 7] = [
    (Keyword::Functional, AxiomKind::FunctionalObjectProperty),
    (Keyword::InverseFunctional, AxiomKind::InverseFunctionalObjectProperty),
    (Keyword::Reflexive, AxiomKind::ReflexiveObjectProperty),
    (Keyword::Irreflexive, AxiomKind::IrreflexiveObjectProperty),
    (Keyword::Symmetric, AxiomKind::SymmetricObjectProperty),
    (Keyword::Asymmetric, AxiomKind::AsymmetricObjectProperty),
    (Keyword::Transitive, AxiomKind::TransitiveObjectProperty),
];

// operands are a set: `A EquivalentTo: A` yields a one-operand axiom
fn pair<T: Ord>(a: T, b: T) -> BTreeSet<T> {
    [a, b].into_iter().collect()
}

// the items of a HasKey: section
enum KeyProperty {
    Object(ObjectPropertyExpression),
    Data(Iri),
}

impl Grammar<'_, '_> {
    pub(super) fn frames(&mut self) -> Result<(), ParseError> {
        while !self.at_eof() {
            match self.peek_keyword() {
                Some(Keyword::Class) => self.class_frame()?,
                Some(Keyword::ObjectProperty) => self.object_property_frame()?,
                Some(Keyword::DataProperty) => self.data_property_frame()?,
                Some(Keyword::AnnotationProperty) => self.annotation_property_frame()?,
                Some(Keyword::Individual) => self.individual_frame()?,
                Some(Keyword::Datatype) => self.datatype_frame()?,
                Some(Keyword::EquivalentClasses | Keyword::DisjointClasses) => self.class_axiom_frame()?,
                Some(Keyword::EquivalentProperties | Keyword::DisjointProperties) => self.property_axiom_frame()?,
                Some(Keyword::SameIndividual | Keyword::DifferentIndividuals) => self.individual_axiom_frame()?,
                _ => return Err(self.unexpected(Expected::keywords(FRAMES))),
            }
        }
        Ok(())
    }

    /// A frame ends at the next frame keyword or at the end of the input.
    fn end_of_frame(&self, sections: &[Keyword]) -> Result<(), ParseError> {
        if self.at_eof() || self.peek_keyword().is_some_and(|k| k.is_frame()) {
            return Ok(());
        }
        Err(self.unexpected(Expected::keywords(sections.iter().copied()).with_keywords(FRAMES)))
    }

    /// A section keyword, its optional ontology list and its annotated items.
    fn section<T>(
        &mut self,
        item: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<(Vec<super::OntologyId>, super::Annotated<T>), ParseError> {
        self.advance();
        let ontologies = self.ontologies()?;
        let items = self.annotated_list(item)?;
        Ok((ontologies, items))
    }

    fn annotation_section(&mut self, subject: &Iri) -> Result<(), ParseError> {
        let (ontologies, items) = self.section(Self::annotation)?;
        self.add_all(&ontologies, items, |annotation| {
            AxiomKind::AnnotationAssertion(annotation.property().clone(), subject.clone(), annotation.value().clone())
        });
        Ok(())
    }

    // ------------- Class: -------------

    fn class_frame(&mut self) -> Result<(), ParseError> {
        self.advance();
        let class = self.entity(EntityType::Class)?;
        self.declare(EntityType::Class, &class);
        let subject = ClassExpression::Class(class.clone());
        loop {
            match self.peek_keyword() {
                Some(Keyword::Annotations) => self.annotation_section(&class)?,
                Some(Keyword::SubClassOf) => {
                    let (ontologies, items) = self.section(Self::description)?;
                    self.add_all(&ontologies, items, |sup| AxiomKind::SubClassOf(subject.clone(), sup));
                }
                Some(Keyword::EquivalentTo) => {
                    let (ontologies, items) = self.section(Self::description)?;
                    self.add_all(&ontologies, items, |other| {
                        AxiomKind::EquivalentClasses(pair(subject.clone(), other))
                    });
                }
                Some(Keyword::DisjointWith) => {
                    let (ontologies, items) = self.section(Self::description)?;
                    self.add_all(&ontologies, items, |other| AxiomKind::DisjointClasses(pair(subject.clone(), other)));
                }
                Some(Keyword::DisjointUnionOf) => {
                    self.advance();
                    let ontologies = self.ontologies()?;
                    let annotations = self.axiom_annotations()?;
                    let classes = self.list(Self::description)?.into_iter().collect();
                    self.add(&ontologies, annotations, AxiomKind::DisjointUnion(class.clone(), classes));
                }
                Some(Keyword::HasKey) => {
                    self.advance();
                    let ontologies = self.ontologies()?;
                    let annotations = self.axiom_annotations()?;
                    let mut object_properties = BTreeSet::new();
                    let mut data_properties = BTreeSet::new();
                    for property in self.list(Self::key_property)? {
                        match property {
                            KeyProperty::Object(property) => object_properties.insert(property),
                            KeyProperty::Data(property) => data_properties.insert(property),
                        };
                    }
                    self.add(
                        &ontologies,
                        annotations,
                        AxiomKind::HasKey(subject.clone(), object_properties, data_properties),
                    );
                }
                _ => return self.end_of_frame(&CLASS_SECTIONS),
            }
        }
    }

    fn key_property(&mut self) -> Result<KeyProperty, ParseError> {
        if self.at(Keyword::Inverse) || self.is(EntityType::ObjectProperty) {
            return Ok(KeyProperty::Object(self.object_property_expression()?));
        }
        if self.is(EntityType::DataProperty) {
            return Ok(KeyProperty::Data(self.entity(EntityType::DataProperty)?));
        }
        Err(self.unexpected(Expected::entities([EntityType::ObjectProperty, EntityType::DataProperty])))
    }

    // ------------- ObjectProperty: -------------

    fn object_property_frame(&mut self) -> Result<(), ParseError> {
        self.advance();
        let iri = self.entity(EntityType::ObjectProperty)?;
        self.declare(EntityType::ObjectProperty, &iri);
        let property = ObjectPropertyExpression::Property(iri.clone());
        loop {
            match self.peek_keyword() {
                Some(Keyword::Annotations) => self.annotation_section(&iri)?,
                Some(Keyword::Domain) => {
                    let (ontologies, items) = self.section(Self::description)?;
                    self.add_all(&ontologies, items, |domain| {
                        AxiomKind::ObjectPropertyDomain(property.clone(), domain)
                    });
                }
                Some(Keyword::Range) => {
                    let (ontologies, items) = self.section(Self::description)?;
                    self.add_all(&ontologies, items, |range| AxiomKind::ObjectPropertyRange(property.clone(), range));
                }
                Some(Keyword::Characteristics) => {
                    let (ontologies, items) = self.section(Self::object_characteristic)?;
                    self.add_all(&ontologies, items, |characteristic| characteristic(property.clone()));
                }
                Some(Keyword::SubPropertyOf) => {
                    let (ontologies, items) = self.section(Self::object_property_expression)?;
                    self.add_all(&ontologies, items, |sup| {
                        AxiomKind::SubObjectPropertyOf(property.clone(), sup)
                    });
                }
                Some(Keyword::EquivalentTo) => {
                    let (ontologies, items) = self.section(Self::object_property_expression)?;
                    self.add_all(&ontologies, items, |other| {
                        AxiomKind::EquivalentObjectProperties(pair(property.clone(), other))
                    });
                }
                Some(Keyword::DisjointWith) => {
                    let (ontologies, items) = self.section(Self::object_property_expression)?;
                    self.add_all(&ontologies, items, |other| {
                        AxiomKind::DisjointObjectProperties(pair(property.clone(), other))
                    });
                }
                Some(Keyword::InverseOf) => {
                    let (ontologies, items) = self.section(Self::object_property_expression)?;
                    self.add_all(&ontologies, items, |inverse| {
                        AxiomKind::InverseObjectProperties(property.clone(), inverse)
                    });
                }
                Some(Keyword::SubPropertyChain) => {
                    self.advance();
                    let ontologies = self.ontologies()?;
                    let annotations = self.axiom_annotations()?;
                    let mut chain = vec![self.object_property_expression()?];
                    if !self.at(Keyword::Chain) {
                        return Err(self.unexpected(Expected::keywords([Keyword::Chain])));
                    }
                    while self.eat(Keyword::Chain) {
                        chain.push(self.object_property_expression()?);
                    }
                    self.add(&ontologies, annotations, AxiomKind::SubPropertyChainOf(chain, property.clone()));
                }
                _ => return self.end_of_frame(&OBJECT_PROPERTY_SECTIONS),
            }
        }
    }

    fn object_characteristic(&mut self) -> Result<Characteristic, ParseError> {
        let found = self.peek_keyword().and_then(|keyword| {
            OBJECT_CHARACTERISTICS
                .iter()
                .find(|(k, _)| *k == keyword)
                .map(|(_, characteristic)| *characteristic)
        });
        match found {
            Some(characteristic) => {
                self.advance();
                Ok(characteristic)
            }
            None => Err(self.unexpected(Expected::keywords(OBJECT_CHARACTERISTICS.iter().map(|(k, _)| *k)))),
        }
    }

    // ------------- DataProperty: -------------

    fn data_property_frame(&mut self) -> Result<(), ParseError> {
        self.advance();
        let property = self.entity(EntityType::DataProperty)?;
        self.declare(EntityType::DataProperty, &property);
        loop {
            match self.peek_keyword() {
                Some(Keyword::Annotations) => self.annotation_section(&property)?,
                Some(Keyword::Domain) => {
                    let (ontologies, items) = self.section(Self::description)?;
                    self.add_all(&ontologies, items, |domain| AxiomKind::DataPropertyDomain(property.clone(), domain));
                }
                Some(Keyword::Range) => {
                    let (ontologies, items) = self.section(Self::data_range)?;
                    self.add_all(&ontologies, items, |range| AxiomKind::DataPropertyRange(property.clone(), range));
                }
                Some(Keyword::Characteristics) => {
                    let (ontologies, items) = self.section(|grammar| {
                        if grammar.eat(Keyword::Functional) {
                            Ok(())
                        } else {
                            Err(grammar.unexpected(Expected::keywords([Keyword::Functional])))
                        }
                    })?;
                    self.add_all(&ontologies, items, |()| AxiomKind::FunctionalDataProperty(property.clone()));
                }
                Some(Keyword::SubPropertyOf) => {
                    let (ontologies, items) = self.section(|grammar| grammar.entity(EntityType::DataProperty))?;
                    self.add_all(&ontologies, items, |sup| AxiomKind::SubDataPropertyOf(property.clone(), sup));
                }
                Some(Keyword::EquivalentTo) => {
                    let (ontologies, items) = self.section(|grammar| grammar.entity(EntityType::DataProperty))?;
                    self.add_all(&ontologies, items, |other| {
                        AxiomKind::EquivalentDataProperties(pair(property.clone(), other))
                    });
                }
                Some(Keyword::DisjointWith) => {
                    let (ontologies, items) = self.section(|grammar| grammar.entity(EntityType::DataProperty))?;
                    self.add_all(&ontologies, items, |other| {
                        AxiomKind::DisjointDataProperties(pair(property.clone(), other))
                    });
                }
                _ => return self.end_of_frame(&DATA_PROPERTY_SECTIONS),
            }
        }
    }

    // ------------- AnnotationProperty: -------------

    fn annotation_property_frame(&mut self) -> Result<(), ParseError> {
        self.advance();
        let property = self.entity(EntityType::AnnotationProperty)?;
        self.declare(EntityType::AnnotationProperty, &property);
        loop {
            match self.peek_keyword() {
                Some(Keyword::Annotations) => self.annotation_section(&property)?,
                Some(Keyword::Domain) => {
                    let (ontologies, items) = self.section(Self::iri)?;
                    self.add_all(&ontologies, items, |domain| {
                        AxiomKind::AnnotationPropertyDomain(property.clone(), domain)
                    });
                }
                Some(Keyword::Range) => {
                    let (ontologies, items) = self.section(Self::iri)?;
                    self.add_all(&ontologies, items, |range| {
                        AxiomKind::AnnotationPropertyRange(property.clone(), range)
                    });
                }
                Some(Keyword::SubPropertyOf) => {
                    let (ontologies, items) =
                        self.section(|grammar| grammar.entity(EntityType::AnnotationProperty))?;
                    self.add_all(&ontologies, items, |sup| {
                        AxiomKind::SubAnnotationPropertyOf(property.clone(), sup)
                    });
                }
                _ => return self.end_of_frame(&ANNOTATION_PROPERTY_SECTIONS),
            }
        }
    }

    // ------------- Individual: -------------

    fn individual_frame(&mut self) -> Result<(), ParseError> {
        self.advance();
        let individual = self.individual()?;
        let named = match &individual {
            Individual::Named(iri) => Some(iri.clone()),
            Individual::Anonymous(_) => None,
        };
        if let Some(iri) = &named {
            self.declare(EntityType::NamedIndividual, iri);
        }
        loop {
            match (self.peek_keyword(), &named) {
                // anonymous individuals cannot be annotation subjects
                (Some(Keyword::Annotations), Some(iri)) => self.annotation_section(iri)?,
                (Some(Keyword::Types), _) => {
                    let (ontologies, items) = self.section(Self::description)?;
                    self.add_all(&ontologies, items, |class| AxiomKind::ClassAssertion(class, individual.clone()));
                }
                (Some(Keyword::Facts), _) => {
                    let (ontologies, items) = self.section(|grammar| grammar.fact(&individual))?;
                    self.add_all(&ontologies, items, |fact| fact);
                }
                (Some(Keyword::SameAs), _) => {
                    let (ontologies, items) = self.section(Self::individual)?;
                    self.add_all(&ontologies, items, |other| {
                        AxiomKind::SameIndividual(pair(individual.clone(), other))
                    });
                }
                (Some(Keyword::DifferentFrom), _) => {
                    let (ontologies, items) = self.section(Self::individual)?;
                    self.add_all(&ontologies, items, |other| {
                        AxiomKind::DifferentIndividuals(pair(individual.clone(), other))
                    });
                }
                (_, Some(_)) => return self.end_of_frame(&INDIVIDUAL_SECTIONS),
                (_, None) => return self.end_of_frame(&INDIVIDUAL_SECTIONS[1..]),
            }
        }
    }

    fn fact(&mut self, subject: &Individual) -> Result<AxiomKind, ParseError> {
        let negated = self.eat(Keyword::Not);
        if self.is(EntityType::ObjectProperty) {
            let property = self.object_property_expression()?;
            let object = self.individual()?;
            return Ok(if negated {
                AxiomKind::NegativeObjectPropertyAssertion(property, subject.clone(), object)
            } else {
                AxiomKind::ObjectPropertyAssertion(property, subject.clone(), object)
            });
        }
        if self.is(EntityType::DataProperty) {
            let property = self.entity(EntityType::DataProperty)?;
            let value = self.literal()?;
            return Ok(if negated {
                AxiomKind::NegativeDataPropertyAssertion(property, subject.clone(), value)
            } else {
                AxiomKind::DataPropertyAssertion(property, subject.clone(), value)
            });
        }
        let expected = Expected::entities([EntityType::ObjectProperty, EntityType::DataProperty]);
        Err(self.unexpected(if negated {
            expected
        } else {
            expected.with_keyword(Keyword::Not)
        }))
    }

    // ------------- Datatype: -------------

    fn datatype_frame(&mut self) -> Result<(), ParseError> {
        self.advance();
        let datatype = self.entity(EntityType::Datatype)?;
        self.declare(EntityType::Datatype, &datatype);
        loop {
            match self.peek_keyword() {
                Some(Keyword::Annotations) => self.annotation_section(&datatype)?,
                Some(Keyword::EquivalentTo) => {
                    let (ontologies, items) = self.section(Self::data_range)?;
                    self.add_all(&ontologies, items, |range| {
                        AxiomKind::DatatypeDefinition(datatype.clone(), range)
                    });
                }
                _ => return self.end_of_frame(&DATATYPE_SECTIONS),
            }
        }
    }

    // ------------- Misc frames -------------

    fn class_axiom_frame(&mut self) -> Result<(), ParseError> {
        let equivalent = self.at(Keyword::EquivalentClasses);
        self.advance();
        let ontologies = self.ontologies()?;
        let annotations = self.axiom_annotations()?;
        let classes = self.list(Self::description)?.into_iter().collect();
        let kind = if equivalent {
            AxiomKind::EquivalentClasses(classes)
        } else {
            AxiomKind::DisjointClasses(classes)
        };
        self.add(&ontologies, annotations, kind);
        Ok(())
    }

    fn property_axiom_frame(&mut self) -> Result<(), ParseError> {
        let equivalent = self.at(Keyword::EquivalentProperties);
        self.advance();
        let ontologies = self.ontologies()?;
        let annotations = self.axiom_annotations()?;
        let kind = if self.at(Keyword::Inverse) || self.is(EntityType::ObjectProperty) {
            let properties = self.list(Self::object_property_expression)?.into_iter().collect();
            if equivalent {
                AxiomKind::EquivalentObjectProperties(properties)
            } else {
                AxiomKind::DisjointObjectProperties(properties)
            }
        } else if self.is(EntityType::DataProperty) {
            let properties = self
                .list(|grammar| grammar.entity(EntityType::DataProperty))?
                .into_iter()
                .collect();
            if equivalent {
                AxiomKind::EquivalentDataProperties(properties)
            } else {
                AxiomKind::DisjointDataProperties(properties)
            }
        } else {
            return Err(self.unexpected(Expected::entities([EntityType::ObjectProperty, EntityType::DataProperty])));
        };
        self.add(&ontologies, annotations, kind);
        Ok(())
    }

    fn individual_axiom_frame(&mut self) -> Result<(), ParseError> {
        let same = self.at(Keyword::SameIndividual);
        self.advance();
        let ontologies = self.ontologies()?;
        let annotations = self.axiom_annotations()?;
        let individuals = self.list(Self::individual)?.into_iter().collect();
        let kind = if same {
            AxiomKind::SameIndividual(individuals)
        } else {
            AxiomKind::DifferentIndividuals(individuals)
        };
        self.add(&ontologies, annotations, kind);
        Ok(())
    }
}
