//! YAML pipeline parsing into dataset chains

use kgframe::{parse_yaml_pipeline, Dataset, Error, NodeKind, OperatorNode};

#[test]
fn test_parse_simple_pipeline() {
    let yaml = r#"
graph:
  name: "dbpedia"
  graph_uris: ["http://dbpedia.org"]
  prefixes: { dbpp: "http://dbpedia.org/property/" }
steps:
  - op: seed
    name: "films"
    uris: ["dbpr:Inception"]
    column: "film"
  - op: expand
    src: "film"
    predicates:
      - { uri: "dbpp:director", new_col_name: "director" }
  - op: select
    columns: ["film", "director"]
"#;

    let parsed = parse_yaml_pipeline(yaml).unwrap();
    assert!(parsed.grouped.is_none());

    let ds = parsed.dataset;
    assert_eq!(ds.name(), "films");
    assert_eq!(ds.columns(), ["film", "director", "dbpp:director"]);
    assert_eq!(
        ds.graph().config.prefixes.get("dbpp").map(String::as_str),
        Some("http://dbpedia.org/property/")
    );

    let desc = ds.describe().unwrap();
    assert_eq!(desc.output_columns, ["film", "director"]);
}

#[test]
fn test_grouped_steps_target_the_view() {
    let yaml = r#"
graph: { name: "g" }
steps:
  - { op: seed, name: "d", uris: ["u1", "u2"], column: "s" }
  - { op: expand, src: "s", predicates: [ { uri: "p", new_col_name: "t" } ] }
  - { op: group_by, columns: ["t"] }
  - { op: aggregate, function: sum, entries: [ { src_col_name: "s", new_col_name: "total" } ] }
  - { op: select, columns: ["t", "total"] }
"#;

    let parsed = parse_yaml_pipeline(yaml).unwrap();
    let grouped = parsed.grouped.expect("grouped view");
    assert_eq!(grouped.columns(), ["t", "total"]);

    let nodes = parsed.dataset.plan().snapshot();
    assert_eq!(nodes.len(), 5);
    assert_eq!(nodes[2].kind(), NodeKind::GroupBy);
    for node in &nodes[3..] {
        assert_eq!(node.dataset_name(), grouped.name());
    }
    assert!(matches!(nodes[4], OperatorNode::Select(_)));
}

#[test]
fn test_parse_empty_pipeline() {
    let yaml = "steps: []";
    assert!(matches!(parse_yaml_pipeline(yaml), Err(Error::Dsl(_))));
}

#[test]
fn test_parse_missing_op_field() {
    let yaml = r#"
steps:
  - name: "d"
    uris: ["u"]
    column: "s"
"#;
    assert!(parse_yaml_pipeline(yaml).is_err());
}

#[test]
fn test_empty_seed_list_in_yaml() {
    let yaml = r#"
graph: { name: "g" }
steps:
  - { op: seed, name: "d", uris: [], column: "s" }
"#;
    assert!(matches!(
        parse_yaml_pipeline(yaml),
        Err(Error::InvalidSeed(_))
    ));
}
