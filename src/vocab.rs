//! Namespaces and the built-in entities every ontology implicitly knows about.

use crate::model::{Entity, EntityType, Iri};

pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// Prefixes under which built-in vocabulary is displayed, e.g. `xsd:integer`.
pub const PREFIXES: [(&str, &str); 4] = [("owl", OWL), ("rdf", RDF), ("rdfs", RDFS), ("xsd", XSD)];

const BUILT_IN_CLASSES: [&str; 2] = ["Thing", "Nothing"];
const BUILT_IN_OBJECT_PROPERTIES: [&str; 2] = ["topObjectProperty", "bottomObjectProperty"];
const BUILT_IN_DATA_PROPERTIES: [&str; 2] = ["topDataProperty", "bottomDataProperty"];
const BUILT_IN_OWL_ANNOTATION_PROPERTIES: [&str; 2] = ["versionInfo", "deprecated"];
const BUILT_IN_RDFS_ANNOTATION_PROPERTIES: [&str; 4] = ["label", "comment", "seeAlso", "isDefinedBy"];
const BUILT_IN_XSD_DATATYPES: [&str; 14] = [
    "string",
    "boolean",
    "decimal",
    "integer",
    "int",
    "long",
    "nonNegativeInteger",
    "positiveInteger",
    "float",
    "double",
    "date",
    "dateTime",
    "anyURI",
    "token",
];

pub fn owl(local: &str) -> Iri {
    Iri::trusted(format!("{OWL}{local}"))
}

pub fn rdf(local: &str) -> Iri {
    Iri::trusted(format!("{RDF}{local}"))
}

pub fn rdfs(local: &str) -> Iri {
    Iri::trusted(format!("{RDFS}{local}"))
}

pub fn xsd(local: &str) -> Iri {
    Iri::trusted(format!("{XSD}{local}"))
}

pub fn owl_thing() -> Iri {
    owl("Thing")
}

pub fn rdfs_label() -> Iri {
    rdfs("label")
}

/// Renders an IRI from one of the well-known namespaces as `prefix:local`.
pub fn prefixed_name(iri: &Iri) -> Option<String> {
    PREFIXES.iter().find_map(|(prefix, namespace)| {
        iri.as_str()
            .strip_prefix(namespace)
            .filter(|local| !local.is_empty())
            .map(|local| format!("{prefix}:{local}"))
    })
}

/// Entities that are part of the OWL 2 vocabulary and need no declaration.
pub fn built_in_entities() -> Vec<Entity> {
    let mut entities = Vec::new();
    entities.extend(BUILT_IN_CLASSES.iter().map(|l| Entity::new(EntityType::Class, owl(l))));
    entities.extend(
        BUILT_IN_OBJECT_PROPERTIES
            .iter()
            .map(|l| Entity::new(EntityType::ObjectProperty, owl(l))),
    );
    entities.extend(
        BUILT_IN_DATA_PROPERTIES
            .iter()
            .map(|l| Entity::new(EntityType::DataProperty, owl(l))),
    );
    entities.extend(
        BUILT_IN_OWL_ANNOTATION_PROPERTIES
            .iter()
            .map(|l| Entity::new(EntityType::AnnotationProperty, owl(l))),
    );
    entities.extend(
        BUILT_IN_RDFS_ANNOTATION_PROPERTIES
            .iter()
            .map(|l| Entity::new(EntityType::AnnotationProperty, rdfs(l))),
    );
    entities.push(Entity::new(EntityType::Datatype, rdfs("Literal")));
    entities.push(Entity::new(EntityType::Datatype, rdf("PlainLiteral")));
    entities.push(Entity::new(EntityType::Datatype, rdf("langString")));
    entities.extend(
        BUILT_IN_XSD_DATATYPES
            .iter()
            .map(|l| Entity::new(EntityType::Datatype, xsd(l))),
    );
    entities
}
