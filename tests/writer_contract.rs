//! End-to-end contract of the replay writers: fixture round trip and the
//! user-facing error messages.

mod common;

use common::fixtures::{TestCore, expected_response, read_fixture};
use replay::config::Config;
use replay::document::{MatchedDocument, QueryResponse, RequestedFieldList};
use replay::writer::{
    NO_STORE_VALUE, SCORE_NOT_IN_FIELD_LIST, UNMARSHALLING_STORE_FAILED, WriterError,
    WriterRegistry,
};
use replay::{JSON_FORMAT, XML_FORMAT};

const CORE: &str = "artist";

/// (format token, expected fixture extension)
const WRITERS: &[(&str, &str)] = &[(XML_FORMAT, "xml"), (JSON_FORMAT, "json")];

fn error_message(result: Result<String, WriterError>) -> String {
    match result {
        Ok(body) => panic!("expected an error, got response {:?}", body),
        Err(err) => err.to_string(),
    }
}

#[test]
fn test_stored_document_is_replayed() {
    for &(wt, extension) in WRITERS {
        let mut core = TestCore::new(CORE);
        core.add_document(true, None);

        let response = core.query(&[("q", "*:*"), ("wt", wt)]).unwrap();

        assert_eq!(response, expected_response(CORE, extension), "writer {}", wt);
    }
}

#[test]
fn test_no_score_in_field_list() {
    for &(wt, _) in WRITERS {
        let mut core = TestCore::new(CORE);
        core.add_document(true, None);

        let message = error_message(core.query(&[("q", "*:*"), ("fl", "*"), ("wt", wt)]));

        assert!(message.contains(SCORE_NOT_IN_FIELD_LIST), "writer {}: {}", wt, message);
    }
}

#[test]
fn test_no_store_value() {
    for &(wt, _) in WRITERS {
        let mut core = TestCore::new(CORE);
        core.add_document(false, None);

        let message = error_message(core.query(&[("q", "*:*"), ("fl", "score"), ("wt", wt)]));

        assert!(message.contains(NO_STORE_VALUE), "writer {}: {}", wt, message);
    }
}

#[test]
fn test_invalid_store_value() {
    for &(wt, _) in WRITERS {
        let mut core = TestCore::new(CORE);
        core.add_document(true, Some("invalid"));

        let message = error_message(core.query(&[("q", "*:*"), ("fl", "score"), ("wt", wt)]));

        assert!(
            message.contains(&format!("{}invalid", UNMARSHALLING_STORE_FAILED)),
            "writer {}: {}",
            wt,
            message
        );
    }
}

#[test]
fn test_invalid_store_values_are_reported_verbatim() {
    let samples = [
        "",
        "   ",
        "<artist id=\"1\">",
        "<release id=\"1\"/>",
        "<artist>no id</artist>",
        "<artist id=\"1\"/><artist id=\"2\"/>",
        "{\"id\": \"not xml\"}",
        "<artist id=\"1\">\n  <name>Sigur Rós</name>\n</artst>",
    ];

    for raw in samples {
        let mut core = TestCore::new(CORE);
        core.add_document(true, Some(raw));

        let message = error_message(core.query(&[("fl", "score"), ("wt", XML_FORMAT)]));

        assert_eq!(message, format!("{}{}", UNMARSHALLING_STORE_FAILED, raw));
    }
}

#[test]
fn test_score_with_wildcard_is_accepted() {
    let mut core = TestCore::new(CORE);
    core.add_document(true, None);

    let explicit = core.query(&[("fl", "*,score"), ("wt", XML_FORMAT)]).unwrap();
    let spaced = core.query(&[("fl", "* score"), ("wt", XML_FORMAT)]).unwrap();
    let score_only = core.query(&[("fl", "score"), ("wt", XML_FORMAT)]).unwrap();

    assert_eq!(explicit, expected_response(CORE, "xml"));
    assert_eq!(spaced, explicit);
    assert_eq!(score_only, explicit);
}

#[test]
fn test_repeated_queries_are_identical() {
    for &(wt, _) in WRITERS {
        let mut core = TestCore::new(CORE);
        core.add_document(true, None);

        let first = core.query(&[("wt", wt)]).unwrap();
        for _ in 0..5 {
            assert_eq!(core.query(&[("wt", wt)]).unwrap(), first);
        }
    }
}

#[test]
fn test_one_bad_document_fails_the_whole_response() {
    let config = Config::for_core(CORE);
    let registry = WriterRegistry::with_defaults(&config);
    let good = MatchedDocument::new().with_field("_store", read_fixture("artist.xml"));
    let fields = RequestedFieldList::parse("*,score");

    for &(wt, _) in WRITERS {
        let missing = QueryResponse::new(vec![good.clone(), MatchedDocument::new()]);
        let mut out = Vec::new();
        let err = registry.write(wt, &missing, &fields, &mut out).unwrap_err();
        assert!(matches!(err, WriterError::NoStoreValue { position: 1 }));
        assert!(out.is_empty());

        let broken = QueryResponse::new(vec![
            good.clone(),
            MatchedDocument::new().with_field("_store", "invalid"),
            good.clone(),
        ]);
        let mut out = Vec::new();
        let err = registry.write(wt, &broken, &fields, &mut out).unwrap_err();
        assert!(matches!(err, WriterError::Unmarshal(_)));
        assert!(out.is_empty());
    }
}

#[test]
fn test_documents_keep_matched_order() {
    let mut core = TestCore::with_config(Config {
        required_attributes: Vec::new(),
        ..Config::for_core(CORE)
    });
    for name in ["Nirvana", "Mudhoney", "Soundgarden"] {
        core.add(
            MatchedDocument::new()
                .with_field("_store", format!("<artist><name>{name}</name></artist>")),
        );
    }

    let body = core.query(&[("wt", XML_FORMAT)]).unwrap();

    let nirvana = body.find("Nirvana").unwrap();
    let mudhoney = body.find("Mudhoney").unwrap();
    let soundgarden = body.find("Soundgarden").unwrap();
    assert!(nirvana < mudhoney && mudhoney < soundgarden);
    assert!(body.contains(r#"<artist-list count="3" offset="0">"#));
}

#[test]
fn test_custom_store_and_score_fields() {
    let config = Config {
        store_field: "_blob".to_string(),
        score_field: "relevance".to_string(),
        default_field_list: "*,relevance".to_string(),
        ..Config::for_core(CORE)
    };
    let mut core = TestCore::with_config(config);
    core.add_document(true, None);

    let body = core.query(&[("wt", XML_FORMAT)]).unwrap();
    assert!(body.contains(r#"type="Group" relevance="100">"#));

    let message = error_message(core.query(&[("fl", "score"), ("wt", XML_FORMAT)]));
    assert!(message.contains(SCORE_NOT_IN_FIELD_LIST));
}

#[test]
fn test_empty_result_renders_empty_list() {
    let core = TestCore::new(CORE);

    let xml = core.query(&[("wt", XML_FORMAT)]).unwrap();
    assert!(xml.contains(r#"<artist-list count="0" offset="0"></artist-list>"#));

    let json = core.query(&[("wt", JSON_FORMAT)]).unwrap();
    assert_eq!(json, "{\"count\":0,\"offset\":0,\"artist-list\":[]}\n");
}

#[test]
fn test_score_check_precedes_empty_result() {
    let core = TestCore::new(CORE);

    let message = error_message(core.query(&[("fl", "*"), ("wt", JSON_FORMAT)]));
    assert!(message.contains(SCORE_NOT_IN_FIELD_LIST));
}

#[test]
fn test_unknown_writer() {
    let mut core = TestCore::new(CORE);
    core.add_document(true, None);

    let err = core.query(&[("wt", "xml")]).unwrap_err();
    assert!(matches!(err, WriterError::UnknownFormat { .. }));
}
