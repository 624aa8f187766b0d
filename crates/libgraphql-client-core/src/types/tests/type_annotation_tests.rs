use crate::types::TypeAnnotation;
use crate::types::TypeAnnotationParseError;

#[test]
fn parses_named_annotations() {
    let nullable = TypeAnnotation::parse("String").unwrap();
    assert_eq!(nullable, TypeAnnotation::named("String", true));
    assert!(nullable.nullable());

    let non_null = TypeAnnotation::parse("ID!").unwrap();
    assert_eq!(non_null, TypeAnnotation::named("ID", false));
    assert!(!non_null.nullable());
}

#[test]
fn parses_nested_list_annotations() {
    let annot = TypeAnnotation::parse("[[Episode!]]!").unwrap();
    assert_eq!(
        annot,
        TypeAnnotation::list(
            TypeAnnotation::list(TypeAnnotation::named("Episode", false), true),
            false,
        ),
    );
    assert_eq!(annot.innermost_named_type_annotation().graphql_type_name(), "Episode");
}

#[test]
fn tolerates_insignificant_whitespace() {
    let annot = TypeAnnotation::parse(" [ Int ! ] ! ").unwrap();
    assert_eq!(annot.to_string(), "[Int!]!");
}

#[test]
fn display_round_trips_through_parse() {
    for source in ["Int", "Int!", "[String]", "[String!]!", "[[ID]!]"] {
        let annot: TypeAnnotation = source.parse().unwrap();
        assert_eq!(annot.to_string(), source);
    }
}

#[test]
fn into_nullable_only_touches_the_outermost_level() {
    let annot = TypeAnnotation::parse("[ID!]!").unwrap().into_nullable();
    assert_eq!(annot.to_string(), "[ID!]");
}

#[test]
fn rejects_malformed_annotations() {
    assert_eq!(TypeAnnotation::parse("  "), Err(TypeAnnotationParseError::Empty));

    for source_text in ["[Int", "Int!!", "2Fast", "[Int)"] {
        assert!(
            matches!(
                TypeAnnotation::parse(source_text),
                Err(TypeAnnotationParseError::Syntax { source_text: ref err_source, .. })
                    if err_source == source_text,
            ),
            "`{source_text}` should not parse",
        );
    }
}

#[test]
fn rejects_text_that_is_more_than_a_type() {
    for source_text in [
        "Int = 5",
        "Int) @include(if: true",
        "Int) { viewer } query ($other: Int",
        "Int) { viewer } #",
    ] {
        assert_eq!(
            TypeAnnotation::parse(source_text),
            Err(TypeAnnotationParseError::NotATypeAnnotation {
                source_text: source_text.to_string(),
            }),
        );
    }
}
