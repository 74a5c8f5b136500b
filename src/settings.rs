//! Settings of the `mansyntax` binary: where to listen, how to log, and the
//! ontologies frame text is parsed against.
//!
//! Values come from an optional TOML file (`mansyntax.toml`, or the path given
//! with `--config`) and are overridden by `MANSYNTAX__SECTION__KEY`
//! environment variables, e.g. `MANSYNTAX__SERVER__BIND=0.0.0.0:9000`.

use std::iter;
use std::sync::Arc;

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use tracing::info;

use crate::error::Result;
use crate::frame::FrameParser;
use crate::model::{AnnotationValue, AxiomKind, Entity, EntityType, Iri, Literal};
use crate::ontology::{Ontology, OntologyCatalog, OntologyId};
use crate::shortform::{BidirectionalShortFormProvider, LabelShortFormProvider};
use crate::vocab;

const DEFAULT_FILE: &str = "mansyntax";
const ENV_PREFIX: &str = "MANSYNTAX";

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub log: LogSettings,
    #[serde(default)]
    pub ontology: OntologySettings,
    #[serde(default)]
    pub imports: Vec<OntologySettings>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}
impl Default for ServerSettings {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}
fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

#[derive(Clone, Debug, Deserialize)]
pub struct LogSettings {
    #[serde(default = "default_filter")]
    pub filter: String,
}
impl Default for LogSettings {
    fn default() -> Self {
        Self { filter: default_filter() }
    }
}
fn default_filter() -> String {
    "info".to_string()
}

/// An ontology given by its IRI and the entities in its signature.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct OntologySettings {
    pub iri: Option<Iri>,
    #[serde(default)]
    pub entities: Vec<EntitySettings>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EntitySettings {
    pub kind: EntityType,
    pub iri: Iri,
    /// Becomes an `rdfs:label` assertion, and so the entity's short form.
    pub label: Option<String>,
}

impl OntologySettings {
    pub fn build(&self) -> Ontology {
        let id = self.iri.clone().map(OntologyId::new).unwrap_or_default();
        let mut ontology = Ontology::new(id);
        for entity in &self.entities {
            ontology.add_axiom(AxiomKind::Declaration(Entity::new(entity.kind, entity.iri.clone())).into());
            if let Some(label) = &entity.label {
                ontology.add_axiom(
                    AxiomKind::AnnotationAssertion(
                        vocab::rdfs_label(),
                        entity.iri.clone(),
                        AnnotationValue::Literal(Literal::string(label.as_str())),
                    )
                    .into(),
                );
            }
        }
        ontology
    }
}

impl Settings {
    /// Reads the given file (required) or `mansyntax.toml` (optional), then
    /// the environment.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let file = File::with_name(path.unwrap_or(DEFAULT_FILE)).required(path.is_some());
        let settings = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// A frame parser over the configured ontology and its imports. Short
    /// forms are labels where given, IRI fragments otherwise.
    pub fn build_parser(&self) -> FrameParser {
        let root = self.ontology.build();
        let imports: Vec<Ontology> = self.imports.iter().map(OntologySettings::build).collect();
        let short_forms = {
            let all = || iter::once(&root).chain(imports.iter());
            let labels = LabelShortFormProvider::new(all());
            BidirectionalShortFormProvider::from_ontologies(all(), &labels)
        };
        info!(
            ontology = %root.id(),
            imports = imports.len(),
            short_forms = short_forms.len(),
            "ontologies loaded"
        );
        let root = Arc::new(root);
        let catalog: OntologyCatalog = iter::once(root.clone())
            .chain(imports.into_iter().map(Arc::new))
            .collect();
        FrameParser::new(root, Arc::new(short_forms), Arc::new(catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_empty_settings() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings.server.bind, "127.0.0.1:8080");
        assert_eq!(settings.log.filter, "info");
        assert!(settings.ontology.iri.is_none());
        assert!(settings.imports.is_empty());
    }

    #[test]
    fn labels_become_annotation_assertions() {
        let settings = Settings::from_toml_str(
            r#"
            [ontology]
            iri = "http://example.org/pizza"
            entities = [
                { kind = "CLASS", iri = "http://example.org/pizza#Pizza" },
                { kind = "OBJECT_PROPERTY", iri = "http://example.org/pizza#hasTopping", label = "has topping" },
            ]
            "#,
        )
        .unwrap();
        let ontology = settings.ontology.build();
        assert_eq!(ontology.axiom_count(), 3);
        let topping = Iri::new("http://example.org/pizza#hasTopping").unwrap();
        assert_eq!(ontology.labels(&topping).count(), 1);
    }

    #[test]
    fn invalid_iris_are_config_errors() {
        let result = Settings::from_toml_str("[ontology]\niri = \"not an iri\"\n");
        assert!(matches!(result, Err(crate::error::MansyntaxError::Config(_))));
    }
}
