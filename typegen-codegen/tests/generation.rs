use std::io::Write;
use typegen_codegen::{
    CodegenError, GENERATED_MARKER, GeneratorConfig, generate_from_file, generate_from_json,
};

const SCHEMA: &str = r#"{
  "data": {
    "__schema": {
      "queryType": { "name": "Query" },
      "types": [
        {
          "kind": "OBJECT",
          "name": "Widget",
          "description": "A widget.",
          "fields": [
            { "name": "id", "args": [],
              "type": { "kind": "NON_NULL", "name": null,
                        "ofType": { "kind": "SCALAR", "name": "ID", "ofType": null } } },
            { "name": "tags", "args": [],
              "type": { "kind": "LIST", "name": null,
                        "ofType": { "kind": "NON_NULL", "name": null,
                                    "ofType": { "kind": "SCALAR", "name": "String", "ofType": null } } } },
            { "name": "owner", "args": [],
              "type": { "kind": "OBJECT", "name": "Person", "ofType": null } }
          ],
          "interfaces": []
        },
        {
          "kind": "OBJECT",
          "name": "Person",
          "fields": [
            { "name": "name", "args": [],
              "type": { "kind": "NON_NULL", "name": null,
                        "ofType": { "kind": "SCALAR", "name": "String", "ofType": null } } },
            { "name": "widgets", "args": [],
              "type": { "kind": "LIST", "name": null,
                        "ofType": { "kind": "OBJECT", "name": "Widget", "ofType": null } } }
          ],
          "interfaces": []
        },
        {
          "kind": "INTERFACE",
          "name": "Entity",
          "description": "Anything with a GUID.",
          "fields": [
            { "name": "guid", "args": [],
              "type": { "kind": "NON_NULL", "name": null,
                        "ofType": { "kind": "SCALAR", "name": "EntityGuid", "ofType": null } } }
          ],
          "possibleTypes": [
            { "kind": "OBJECT", "name": "ApmApp", "ofType": null },
            { "kind": "OBJECT", "name": "Host", "ofType": null }
          ]
        },
        {
          "kind": "OBJECT",
          "name": "ApmApp",
          "fields": [
            { "name": "guid", "args": [],
              "type": { "kind": "NON_NULL", "name": null,
                        "ofType": { "kind": "SCALAR", "name": "EntityGuid", "ofType": null } } },
            { "name": "parent", "args": [],
              "type": { "kind": "INTERFACE", "name": "Entity", "ofType": null } },
            { "name": "language", "args": [],
              "type": { "kind": "ENUM", "name": "Language", "ofType": null } }
          ],
          "interfaces": [ { "kind": "INTERFACE", "name": "Entity", "ofType": null } ]
        },
        {
          "kind": "OBJECT",
          "name": "Host",
          "fields": [
            { "name": "guid", "args": [],
              "type": { "kind": "NON_NULL", "name": null,
                        "ofType": { "kind": "SCALAR", "name": "EntityGuid", "ofType": null } } },
            { "name": "self", "args": [],
              "type": { "kind": "SCALAR", "name": "Boolean", "ofType": null } }
          ],
          "interfaces": [ { "kind": "INTERFACE", "name": "Entity", "ofType": null } ]
        },
        {
          "kind": "SCALAR",
          "name": "EntityGuid",
          "description": "Base64 entity identifier."
        },
        {
          "kind": "ENUM",
          "name": "Language",
          "enumValues": [
            { "name": "RUST", "isDeprecated": false },
            { "name": "type", "isDeprecated": false },
            { "name": "2D", "isDeprecated": true, "deprecationReason": "not a language" }
          ]
        },
        {
          "kind": "UNION",
          "name": "SearchResult",
          "possibleTypes": [
            { "kind": "OBJECT", "name": "Widget", "ofType": null },
            { "kind": "OBJECT", "name": "Host", "ofType": null }
          ]
        },
        {
          "kind": "INPUT_OBJECT",
          "name": "WidgetFilter",
          "inputFields": [
            { "name": "ownerName",
              "type": { "kind": "SCALAR", "name": "String", "ofType": null } },
            { "name": "limit",
              "type": { "kind": "NON_NULL", "name": null,
                        "ofType": { "kind": "SCALAR", "name": "Int", "ofType": null } } }
          ]
        }
      ]
    }
  }
}"#;

fn config() -> GeneratorConfig {
    GeneratorConfig::new("widgets")
}

#[test]
fn test_widget_closure() {
    let bundle = generate_from_json(SCHEMA, config(), &["Widget"]).expect("Failed to parse");

    assert!(!bundle.has_errors());
    assert_eq!(bundle.type_names().collect::<Vec<_>>(), vec!["Person", "Widget"]);

    let output = bundle.assemble();
    let person = output.find("pub struct Person").expect("Person declared");
    let widget = output.find("pub struct Widget").expect("Widget declared");
    assert!(person < widget);
    assert!(output.contains("    pub id: String,\n"));
    assert!(output.contains("    pub tags: Option<Vec<String>>,\n"));
    assert!(output.contains("    pub owner: Option<Person>,\n"));
    assert!(output.contains("    pub widgets: Option<Vec<Option<Widget>>>,\n"));
}

#[test]
fn test_header_comes_first() {
    let bundle = generate_from_json(SCHEMA, config(), &["Widget"]).expect("Failed to parse");
    let output = bundle.assemble();

    assert!(output.starts_with(GENERATED_MARKER));
    assert!(output.contains("//! Generated GraphQL types for the `widgets` module.\n"));
    assert!(output.contains("use serde::{Deserialize, Serialize};\n"));
}

#[test]
fn test_interface_closure() {
    let bundle = generate_from_json(SCHEMA, config(), &["Entity"]).expect("Failed to parse");

    assert!(!bundle.has_errors());
    assert_eq!(
        bundle.type_names().collect::<Vec<_>>(),
        vec!["ApmApp", "Entity", "EntityGuid", "Host", "Language"]
    );

    let output = bundle.assemble();
    assert!(output.contains("/// Base64 entity identifier.\npub type EntityGuid = String;\n"));
    assert!(output.contains("    ApmApp(Box<ApmApp>),\n"));
    assert!(output.contains("    Host(Host),\n"));
    assert!(output.contains("    pub parent: Option<Box<Entity>>,\n"));
    assert!(output.contains("    #[serde(rename = \"self\")]\n    pub self_: Option<bool>,\n"));
    assert!(output.contains("    #[serde(rename = \"type\")]\n    Type,\n"));
    assert!(output.contains("    /// Deprecated: not a language\n"));
}

#[test]
fn test_union_members() {
    let bundle = generate_from_json(SCHEMA, config(), &["SearchResult"]).expect("Failed to parse");
    let output = bundle.assemble();

    assert!(bundle.type_names().any(|n| n == "Widget"));
    assert!(bundle.type_names().any(|n| n == "Host"));
    assert!(output.contains(
        "pub const POSSIBLE_TYPES: &'static [&'static str] = &[\"Host\", \"Widget\"];"
    ));
}

#[test]
fn test_input_object() {
    let bundle = generate_from_json(SCHEMA, config(), &["WidgetFilter"]).expect("Failed to parse");
    let output = bundle.assemble();

    assert!(output.contains(concat!(
        "    #[serde(skip_serializing_if = \"Option::is_none\")]\n",
        "    pub owner_name: Option<String>,\n"
    )));
    assert!(output.contains("    pub limit: i32,\n"));
}

#[test]
fn test_missing_seed() {
    let bundle = generate_from_json(SCHEMA, config(), &["Ghost"]).expect("Failed to parse");

    assert!(bundle.is_empty());
    assert_eq!(bundle.errors().len(), 1);
    assert!(bundle.errors()[0].to_string().contains("Ghost"));
    assert!(bundle.assemble().starts_with(GENERATED_MARKER));
}

#[test]
fn test_generation_is_deterministic() {
    let seeds = ["SearchResult", "Entity", "WidgetFilter"];
    let first = generate_from_json(SCHEMA, config(), &seeds).expect("Failed to parse");
    let second = generate_from_json(SCHEMA, config(), &seeds).expect("Failed to parse");

    assert_eq!(first.assemble(), second.assemble());
}

#[test]
fn test_output_parses_as_rust() {
    let seeds = ["SearchResult", "Entity", "WidgetFilter", "Widget"];
    let bundle = generate_from_json(SCHEMA, config(), &seeds).expect("Failed to parse");
    let output = bundle.assemble();

    let file = syn::parse_file(&output).expect("generated code parses");
    // use, one alias, three enums with impls, five structs
    assert_eq!(file.items.len(), 1 + 1 + 2 * 3 + 5);
}

#[test]
fn test_generate_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(SCHEMA.as_bytes()).expect("write schema");

    let bundle = generate_from_file(file.path(), config(), &["Person"]).expect("Failed to parse");
    assert_eq!(bundle.len(), 2);
}

#[test]
fn test_malformed_document() {
    let result = generate_from_json("{not json", config(), &["Widget"]);
    assert!(matches!(result, Err(CodegenError::Parse(_))));

    let result = generate_from_json(r#"{"data": {}}"#, config(), &["Widget"]);
    assert!(matches!(result, Err(CodegenError::Parse(_))));
}
