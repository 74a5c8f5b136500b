use mansyntax::frame::FrameParser;
use mansyntax::fresh::NoFreshEntities;
use mansyntax::model::{
    AxiomKind, ClassExpression, DataRange, Facet, FacetRestriction, Individual, Iri, Literal,
    ObjectPropertyExpression,
};
use mansyntax::parser::MAX_NESTING;
use mansyntax::settings::Settings;
use mansyntax::vocab;

const PIZZA: &str = r#"
[ontology]
iri = "http://example.org/pizza"
entities = [
    { kind = "CLASS", iri = "http://example.org/pizza#Pizza" },
    { kind = "CLASS", iri = "http://example.org/pizza#Topping" },
    { kind = "CLASS", iri = "http://example.org/pizza#Cheese" },
    { kind = "CLASS", iri = "http://example.org/pizza#Margherita" },
    { kind = "OBJECT_PROPERTY", iri = "http://example.org/pizza#hasTopping" },
    { kind = "OBJECT_PROPERTY", iri = "http://example.org/pizza#isToppingOf" },
    { kind = "DATA_PROPERTY", iri = "http://example.org/pizza#hasCalories" },
    { kind = "DATA_PROPERTY", iri = "http://example.org/pizza#hasName" },
    { kind = "NAMED_INDIVIDUAL", iri = "http://example.org/pizza#mozzarella" },
    { kind = "NAMED_INDIVIDUAL", iri = "http://example.org/pizza#tomato" },
    # punned: a class and an object property
    { kind = "CLASS", iri = "http://example.org/pizza#ingredient" },
    { kind = "OBJECT_PROPERTY", iri = "http://example.org/pizza#ingredient" },
]
"#;

fn setup() -> FrameParser {
    Settings::from_toml_str(PIZZA).expect("fixture settings").build_parser()
}

fn iri(local: &str) -> Iri {
    Iri::new(format!("http://example.org/pizza#{local}")).unwrap()
}
fn class(local: &str) -> ClassExpression {
    ClassExpression::Class(iri(local))
}
fn property(local: &str) -> ObjectPropertyExpression {
    ObjectPropertyExpression::Property(iri(local))
}
fn set<T: Ord>(items: impl IntoIterator<Item = T>) -> std::collections::BTreeSet<T> {
    items.into_iter().collect()
}
fn integer(n: &str) -> Literal {
    Literal::typed(n, vocab::xsd("integer"))
}

/// The superclass of `Class: Margherita SubClassOf: <expression>`.
fn superclass(parser: &FrameParser, expression: &str) -> ClassExpression {
    let text = format!("Class: Margherita SubClassOf: {expression}");
    let axioms = parser
        .parse(&text, &NoFreshEntities)
        .unwrap_or_else(|e| panic!("{expression:?} should parse: {e}"));
    axioms
        .into_iter()
        .find_map(|pair| match pair.axiom().kind() {
            AxiomKind::SubClassOf(_, sup) => Some(sup.clone()),
            _ => None,
        })
        .expect("a SubClassOf axiom")
}

#[test]
fn and_binds_tighter_than_or() {
    let parser = setup();
    let parsed = superclass(&parser, "Cheese or Topping and Pizza");
    let expected = ClassExpression::ObjectUnionOf(set([
        class("Cheese"),
        ClassExpression::ObjectIntersectionOf(set([class("Topping"), class("Pizza")])),
    ]));
    assert_eq!(parsed, expected);
    let grouped = superclass(&parser, "(Cheese or Topping) and Pizza");
    assert_eq!(
        grouped,
        ClassExpression::ObjectIntersectionOf(set([
            ClassExpression::ObjectUnionOf(set([class("Cheese"), class("Topping")])),
            class("Pizza"),
        ]))
    );
}

#[test]
fn operand_order_does_not_matter() {
    let parser = setup();
    assert_eq!(
        superclass(&parser, "Pizza and Cheese"),
        superclass(&parser, "Cheese AND Pizza")
    );
    assert_eq!(superclass(&parser, "Pizza and Pizza"), class("Pizza"));
}

#[test]
fn that_reads_as_and() {
    let parser = setup();
    assert_eq!(
        superclass(&parser, "Pizza that hasTopping some Cheese"),
        superclass(&parser, "Pizza and hasTopping some Cheese")
    );
}

#[test]
fn complements_and_enumerations() {
    let parser = setup();
    assert_eq!(
        superclass(&parser, "not Cheese"),
        ClassExpression::ObjectComplementOf(Box::new(class("Cheese")))
    );
    assert_eq!(
        superclass(&parser, "{mozzarella, tomato, _:b0}"),
        ClassExpression::ObjectOneOf(set([
            Individual::Named(iri("mozzarella")),
            Individual::Named(iri("tomato")),
            Individual::Anonymous("b0".into()),
        ]))
    );
}

#[test]
fn object_restrictions() {
    let parser = setup();
    let p = property("hasTopping");
    assert_eq!(
        superclass(&parser, "hasTopping only Cheese"),
        ClassExpression::ObjectAllValuesFrom(p.clone(), Box::new(class("Cheese")))
    );
    assert_eq!(
        superclass(&parser, "hasTopping value mozzarella"),
        ClassExpression::ObjectHasValue(p.clone(), Individual::Named(iri("mozzarella")))
    );
    assert_eq!(superclass(&parser, "hasTopping Self"), ClassExpression::ObjectHasSelf(p.clone()));
    assert_eq!(
        superclass(&parser, "hasTopping some (Cheese or Topping)"),
        ClassExpression::ObjectSomeValuesFrom(
            p,
            Box::new(ClassExpression::ObjectUnionOf(set([class("Cheese"), class("Topping")])))
        )
    );
}

#[test]
fn cardinalities_may_be_unqualified() {
    let parser = setup();
    let p = property("hasTopping");
    assert_eq!(
        superclass(&parser, "hasTopping min 2"),
        ClassExpression::ObjectMinCardinality(2, p.clone(), None)
    );
    assert_eq!(
        superclass(&parser, "hasTopping exactly 1 Cheese"),
        ClassExpression::ObjectExactCardinality(1, p.clone(), Some(Box::new(class("Cheese"))))
    );
    assert_eq!(
        superclass(&parser, "hasTopping max 3 Cheese and Pizza"),
        ClassExpression::ObjectIntersectionOf(set([
            ClassExpression::ObjectMaxCardinality(3, p, Some(Box::new(class("Cheese")))),
            class("Pizza"),
        ]))
    );
}

#[test]
fn inverse_properties() {
    let parser = setup();
    let expected = ClassExpression::ObjectSomeValuesFrom(
        ObjectPropertyExpression::Inverse(iri("isToppingOf")),
        Box::new(class("Pizza")),
    );
    assert_eq!(superclass(&parser, "inverse isToppingOf some Pizza"), expected);
    assert_eq!(superclass(&parser, "inverse (isToppingOf) some Pizza"), expected);
}

#[test]
fn punned_names_depend_on_what_follows() {
    let parser = setup();
    assert_eq!(superclass(&parser, "ingredient"), class("ingredient"));
    assert_eq!(
        superclass(&parser, "ingredient some Cheese"),
        ClassExpression::ObjectSomeValuesFrom(property("ingredient"), Box::new(class("Cheese")))
    );
}

#[test]
fn data_restrictions() {
    let parser = setup();
    assert_eq!(
        superclass(&parser, "hasCalories some xsd:integer[>= 400, < 1000]"),
        ClassExpression::DataSomeValuesFrom(
            iri("hasCalories"),
            DataRange::DatatypeRestriction(
                vocab::xsd("integer"),
                vec![
                    FacetRestriction { facet: Facet::MinInclusive, value: integer("400") },
                    FacetRestriction { facet: Facet::MaxExclusive, value: integer("1000") },
                ]
            )
        )
    );
    assert_eq!(
        superclass(&parser, "hasCalories value 850"),
        ClassExpression::DataHasValue(iri("hasCalories"), integer("850"))
    );
    assert_eq!(
        superclass(&parser, "hasCalories max 1"),
        ClassExpression::DataMaxCardinality(1, iri("hasCalories"), None)
    );
    assert_eq!(
        superclass(&parser, "hasCalories only (xsd:integer or xsd:decimal)"),
        ClassExpression::DataAllValuesFrom(
            iri("hasCalories"),
            DataRange::DataUnionOf(set([
                DataRange::Datatype(vocab::xsd("integer")),
                DataRange::Datatype(vocab::xsd("decimal")),
            ]))
        )
    );
    assert_eq!(
        superclass(&parser, "hasName some not xsd:string"),
        ClassExpression::DataSomeValuesFrom(
            iri("hasName"),
            DataRange::DataComplementOf(Box::new(DataRange::Datatype(vocab::xsd("string"))))
        )
    );
    assert_eq!(
        superclass(&parser, "hasName some {\"Margherita\", \"Marinara\"}"),
        ClassExpression::DataSomeValuesFrom(
            iri("hasName"),
            DataRange::DataOneOf(set([Literal::string("Margherita"), Literal::string("Marinara")]))
        )
    );
}

#[test]
fn literal_forms() {
    let parser = setup();
    let value = |expression: &str| match superclass(&parser, expression) {
        ClassExpression::DataHasValue(_, literal) => literal,
        other => panic!("not a has-value restriction: {other:?}"),
    };
    assert_eq!(value("hasCalories value 1.5f"), Literal::typed("1.5", vocab::xsd("float")));
    assert_eq!(value("hasCalories value 2.25"), Literal::typed("2.25", vocab::xsd("decimal")));
    assert_eq!(value("hasCalories value \"7\"^^xsd:integer"), integer("7"));
    assert_eq!(value("hasName value \"Margherita\"@it"), Literal::tagged("Margherita", "it"));
    assert_eq!(value("hasName value \"a \\\"quoted\\\" name\""), Literal::string("a \"quoted\" name"));
    assert_eq!(value("hasCalories value true"), Literal::typed("true", vocab::xsd("boolean")));
}

#[test]
fn restrictions_need_a_keyword() {
    let parser = setup();
    let error = parser
        .parse("Class: Margherita SubClassOf: hasTopping Cheese", &NoFreshEntities)
        .unwrap_err();
    assert_eq!(error.current_token(), "Cheese");
    for keyword in ["some", "only", "value", "Self", "min", "max", "exactly"] {
        assert!(error.expected_keywords().contains(&keyword.to_string()), "{keyword} expected");
    }
}

#[test]
fn unbalanced_parentheses() {
    let parser = setup();
    let error = parser
        .parse("Class: Margherita SubClassOf: (Cheese or Topping", &NoFreshEntities)
        .unwrap_err();
    assert_eq!(error.current_token(), "<EOF>");
    assert_eq!(error.expected_keywords(), [")".to_string()]);
}

fn depth_of(expression: &ClassExpression) -> usize {
    match expression {
        ClassExpression::ObjectComplementOf(inner) => 1 + depth_of(inner),
        _ => 1,
    }
}

#[test]
fn nesting_up_to_the_limit_parses() {
    let parser = setup();
    let complements = format!("{}Pizza", "not ".repeat(MAX_NESTING - 1));
    assert_eq!(depth_of(&superclass(&parser, &complements)), MAX_NESTING);

    let parenthesized = format!("{}Pizza{}", "(".repeat(MAX_NESTING - 1), ")".repeat(MAX_NESTING - 1));
    assert_eq!(superclass(&parser, &parenthesized), class("Pizza"));

    let ranges = format!("hasName some {}xsd:string", "not ".repeat(MAX_NESTING - 2));
    assert!(matches!(superclass(&parser, &ranges), ClassExpression::DataSomeValuesFrom(..)));
}

#[test]
fn nesting_past_the_limit_fails_cleanly() {
    let parser = setup();
    let limit = format!("expression nested at most {MAX_NESTING} deep");
    for expression in [
        format!("{}Pizza", "not ".repeat(MAX_NESTING)),
        format!("{}Pizza", "not ".repeat(20_000)),
        format!("{}Pizza{}", "(".repeat(20_000), ")".repeat(20_000)),
        format!("hasName some {}xsd:string", "not ".repeat(20_000)),
        format!("{}Cheese", "hasTopping some ".repeat(20_000)),
    ] {
        let text = format!("Class: Margherita SubClassOf: {expression}");
        let error = parser.parse(&text, &NoFreshEntities).unwrap_err();
        assert!(error.expected_keywords().contains(&limit), "{}", error.message());
        assert_eq!(error.line(), 1);
    }

    let error = parser
        .parse(&format!("Class: Margherita SubClassOf: {}Pizza", "not ".repeat(MAX_NESTING)), &NoFreshEntities)
        .unwrap_err();
    assert_eq!(error.current_token(), "Pizza");
    assert_eq!(error.column(), 31 + 4 * MAX_NESTING);
}
