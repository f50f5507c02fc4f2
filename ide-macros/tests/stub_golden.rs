//! Golden tests for stub generation.
//!
//! These tests verify the emitted stub text end to end: grouping,
//! variant partitioning, declaration rendering, default literals, and
//! the determinism guarantee.

use ide_macros::manifest::{MacroManifest, ManifestProvider};
use ide_macros::model::ClassIdentifier;
use ide_macros::stub::{StubVariant, generate_to_string};
use rstest::rstest;

fn demo_manifest() -> MacroManifest {
    let json = r#"{
        "classes": [
            {
                "name": "App\\Demo",
                "tables": {
                    "macros": [
                        {
                            "name": "greet",
                            "signature": {
                                "parameters": [
                                    {
                                        "name": "name",
                                        "type_hint": "string",
                                        "default": {"str": "world"}
                                    }
                                ],
                                "return_type": "string"
                            }
                        }
                    ]
                }
            }
        ]
    }"#;
    serde_json::from_str(json).unwrap_or_else(|err| panic!("demo manifest should parse: {err}"))
}

fn variable_names() -> Vec<String> {
    vec!["macros".to_owned(), "globalMacros".to_owned()]
}

fn demo_classes() -> Vec<ClassIdentifier> {
    vec![ClassIdentifier::parse("App\\Demo")]
}

#[rstest]
fn static_artifact_matches_golden_output() {
    let manifest = demo_manifest();
    let fields = variable_names();
    let provider = ManifestProvider::new(&manifest, &fields);

    let content = generate_to_string(&demo_classes(), &provider, StubVariant::Static);

    let expected = concat!(
        "<?php\n",
        "\n",
        "namespace App {\n",
        "    class Demo {\n",
        "        public static function greet(string $name = 'world'): string {\n",
        "        }\n",
        "    }\n",
        "}\n",
    );
    assert_eq!(content, expected);
}

#[rstest]
fn unannotated_entries_never_reach_the_instantiated_artifact() {
    let manifest = demo_manifest();
    let fields = variable_names();
    let provider = ManifestProvider::new(&manifest, &fields);

    let content = generate_to_string(&demo_classes(), &provider, StubVariant::Instantiated);

    assert_eq!(content, "<?php\n", "no Demo block in the instantiated artifact");
}

#[rstest]
fn identical_inputs_yield_byte_identical_output() {
    let manifest = demo_manifest();
    let fields = variable_names();
    let provider = ManifestProvider::new(&manifest, &fields);
    let classes = demo_classes();

    let first = generate_to_string(&classes, &provider, StubVariant::Static);
    let second = generate_to_string(&classes, &provider, StubVariant::Static);

    assert_eq!(first, second);
}

#[rstest]
fn annotated_entries_partition_across_artifacts() {
    let json = r#"{
        "classes": [
            {
                "name": "App\\Demo",
                "tables": {
                    "macros": [
                        {
                            "name": "boot",
                            "signature": {"doc_comment": "/** @instantiated */"}
                        },
                        {
                            "name": "version",
                            "signature": {"doc_comment": "/** @static */"}
                        },
                        {"name": "__construct", "signature": {}},
                        {"name": "__destruct", "signature": {}}
                    ]
                }
            }
        ]
    }"#;
    let manifest: MacroManifest =
        serde_json::from_str(json).unwrap_or_else(|err| panic!("manifest should parse: {err}"));
    let fields = variable_names();
    let provider = ManifestProvider::new(&manifest, &fields);
    let classes = demo_classes();

    let static_stub = generate_to_string(&classes, &provider, StubVariant::Static);
    let instance_stub = generate_to_string(&classes, &provider, StubVariant::Instantiated);

    assert!(static_stub.contains("public static function version()"));
    assert!(!static_stub.contains("function boot("), "{static_stub}");
    assert!(instance_stub.contains("public function boot()"));
    assert!(!instance_stub.contains("function version("), "{instance_stub}");
    for artifact in [&static_stub, &instance_stub] {
        assert!(!artifact.contains("__construct"));
        assert!(!artifact.contains("__destruct"));
    }
}

#[rstest]
fn doc_comments_precede_their_declarations() {
    let json = r#"{
        "classes": [
            {
                "name": "App\\Demo",
                "tables": {
                    "macros": [
                        {
                            "name": "greet",
                            "signature": {
                                "doc_comment": "/**\n * Greet someone.\n */"
                            }
                        }
                    ]
                }
            }
        ]
    }"#;
    let manifest: MacroManifest =
        serde_json::from_str(json).unwrap_or_else(|err| panic!("manifest should parse: {err}"));
    let fields = variable_names();
    let provider = ManifestProvider::new(&manifest, &fields);

    let content = generate_to_string(&demo_classes(), &provider, StubVariant::Static);

    let expected = concat!(
        "        /**\n",
        "         * Greet someone.\n",
        "         */\n",
        "        public static function greet() {\n",
    );
    assert!(content.contains(expected), "{content}");
}

#[rstest]
fn opaque_default_drops_the_clause_but_keeps_the_entry() {
    let json = r#"{
        "classes": [
            {
                "name": "App\\Demo",
                "tables": {
                    "macros": [
                        {
                            "name": "retry",
                            "signature": {
                                "parameters": [
                                    {"name": "handler", "default": {"opaque": "Closure"}},
                                    {"name": "times", "default": {"int": 3}}
                                ]
                            }
                        }
                    ]
                }
            }
        ]
    }"#;
    let manifest: MacroManifest =
        serde_json::from_str(json).unwrap_or_else(|err| panic!("manifest should parse: {err}"));
    let fields = variable_names();
    let provider = ManifestProvider::new(&manifest, &fields);

    let content = generate_to_string(&demo_classes(), &provider, StubVariant::Static);

    assert!(
        content.contains("public static function retry($handler, $times = 3)"),
        "{content}"
    );
}

#[rstest]
fn default_literals_round_trip_the_documented_kinds() {
    let json = r#"{
        "classes": [
            {
                "name": "App\\Demo",
                "tables": {
                    "macros": [
                        {
                            "name": "configure",
                            "signature": {
                                "parameters": [
                                    {"name": "count", "default": {"int": 5}},
                                    {"name": "label", "default": {"str": "ok"}},
                                    {"name": "strict", "default": {"bool": false}},
                                    {"name": "steps", "default": {"array": [
                                        {"value": {"int": 1}},
                                        {"value": {"int": 2}},
                                        {"value": {"int": 3}}
                                    ]}}
                                ]
                            }
                        }
                    ]
                }
            }
        ]
    }"#;
    let manifest: MacroManifest =
        serde_json::from_str(json).unwrap_or_else(|err| panic!("manifest should parse: {err}"));
    let fields = variable_names();
    let provider = ManifestProvider::new(&manifest, &fields);

    let content = generate_to_string(&demo_classes(), &provider, StubVariant::Static);

    assert!(
        content.contains("($count = 5, $label = 'ok', $strict = false, $steps = [1, 2, 3])"),
        "{content}"
    );
}

#[rstest]
fn classes_without_eligible_entries_are_omitted() {
    let json = r#"{
        "classes": [
            {"name": "App\\Empty", "tables": {"macros": []}},
            {"name": "App\\Hidden", "tables": {"macros": [
                {"name": "__construct", "signature": {}}
            ]}},
            {"name": "App\\Demo", "tables": {"macros": [
                {"name": "greet", "signature": {}}
            ]}}
        ]
    }"#;
    let manifest: MacroManifest =
        serde_json::from_str(json).unwrap_or_else(|err| panic!("manifest should parse: {err}"));
    let fields = variable_names();
    let provider = ManifestProvider::new(&manifest, &fields);
    let classes = vec![
        ClassIdentifier::parse("App\\Empty"),
        ClassIdentifier::parse("App\\Hidden"),
        ClassIdentifier::parse("App\\Unknown"),
        ClassIdentifier::parse("App\\Demo"),
    ];

    let content = generate_to_string(&classes, &provider, StubVariant::Static);

    assert!(!content.contains("Empty"), "{content}");
    assert!(!content.contains("Hidden"), "{content}");
    assert!(!content.contains("Unknown"), "{content}");
    assert!(content.contains("class Demo"), "{content}");
}
