//! Document content extraction against real collaborative documents
//!
//! Documents are produced with the CRDT library exactly as the editor would
//! store them, then indexed and scanned through the application services.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use impress_app::App;
use impress_collab::{AttachmentPattern, ContentError, DocumentTextExtractor};
use impress_common::{Config, Error};
use impress_email::EmailConfig;

use crate::common::{media_reference, test_app, DocumentFixture};

mod common;

const DOC_ID: &str = "0b7c0f3e-2d4a-4c44-9a5e-6f1f6cc1b1a2";
const FILE_A: &str = "5a1e0d2c-8f3b-4a6e-9c7d-1e2f3a4b5c6d";
const FILE_B: &str = "9f8e7d6c-5b4a-4392-8170-6f5e4d3c2b1a";

#[test]
fn test_hello_world_document() {
    let content = DocumentFixture::new()
        .paragraph("Hello")
        .paragraph("World")
        .encoded();

    assert_eq!(test_app().index_text(&content).unwrap(), "Hello World");
}

#[test]
fn test_text_with_markup_characters() {
    let content = DocumentFixture::new()
        .paragraph("if a < b then")
        .paragraph("Tom &amp; Jerry")
        .paragraph("<script>alert(1)</script> pasted")
        .encoded();

    assert_eq!(
        test_app().index_text(&content).unwrap(),
        "if a < b then Tom &amp; Jerry alert(1) pasted"
    );
}

#[test]
fn test_index_text_uses_configured_root() {
    let app = App::new(
        Config {
            document_store_root: "blocks".to_string(),
            ..Config::default()
        },
        EmailConfig::default(),
    )
    .unwrap();
    let content = DocumentFixture::with_root("blocks")
        .paragraph("Custom root")
        .encoded();

    assert_eq!(app.index_text(&content).unwrap(), "Custom root");
    assert_eq!(test_app().index_text(&content).unwrap(), "");
}

#[test]
fn test_empty_document_has_no_text() {
    let content = DocumentFixture::new().encoded();
    assert_eq!(test_app().index_text(&content).unwrap(), "");
}

#[test]
fn test_independent_replicas_produce_identical_markup() {
    let content = DocumentFixture::new()
        .paragraph("Determinism")
        .paragraph("matters")
        .encoded();
    let first = test_app().extractor.decode_to_markup(&content).unwrap();
    let second = test_app().extractor.decode_to_markup(&content).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_attachments_in_order_of_appearance() {
    let first = media_reference(DOC_ID, FILE_B, "png");
    let second = media_reference(DOC_ID, FILE_A, "pdf");
    let content = DocumentFixture::new()
        .paragraph(&format!("Diagram: {first}"))
        .paragraph("Some text in between")
        .paragraph(&format!("Report: {second}"))
        .paragraph(&format!("Diagram again: {first}"))
        .encoded();

    let references = test_app()
        .extractor
        .extract_attachments(Some(&content))
        .unwrap();
    assert_eq!(references, vec![first.clone(), second, first]);

    let keys = test_app().attachment_keys(Some(&content)).unwrap();
    assert_eq!(keys[0], format!("{DOC_ID}/attachments/{FILE_B}.png"));
    assert_eq!(keys.len(), 3);
}

#[test]
fn test_attachment_keys_with_configured_pattern() {
    let app = App::new(
        Config {
            attachment_url_pattern: Some(r"media/att-\d+\.\w+".to_string()),
            ..Config::default()
        },
        EmailConfig::default(),
    )
    .unwrap();
    let content = DocumentFixture::new()
        .paragraph("media/att-123.png")
        .paragraph("media/att-456.png")
        .encoded();

    assert_eq!(
        app.attachment_keys(Some(&content)).unwrap(),
        vec!["media/att-123.png", "media/att-456.png"]
    );
    assert!(app.attachment_keys(None).unwrap().is_empty());
}

#[test]
fn test_corrupt_content_is_an_internal_error() {
    let update = DocumentFixture::new().paragraph("Truncated").update();
    let truncated = STANDARD.encode(&update[..update.len() / 2]);

    let err = test_app().index_text(&truncated).unwrap_err();
    assert!(matches!(err, Error::Internal(_)));
}

#[test]
fn test_injected_pattern() {
    let extractor =
        DocumentTextExtractor::new(AttachmentPattern::new(r"media/att-\d+\.\w+").unwrap());
    let content = DocumentFixture::new()
        .paragraph("media/att-123.png")
        .paragraph("media/att-456.png")
        .encoded();

    assert_eq!(
        extractor.extract_attachments(Some(&content)).unwrap(),
        vec!["media/att-123.png", "media/att-456.png"]
    );
}

#[test]
fn test_empty_content_has_no_attachments() {
    let app = test_app();
    assert!(app.extractor.extract_attachments(None).unwrap().is_empty());
    assert!(app.extractor.extract_attachments(Some("")).unwrap().is_empty());
}

#[test]
fn test_invalid_base64_fails_every_operation() {
    let app = test_app();

    assert!(matches!(
        app.extractor.decode_to_markup("@@not base64@@"),
        Err(ContentError::Decode(_))
    ));
    assert!(matches!(
        app.extractor.extract_text("@@not base64@@"),
        Err(ContentError::Decode(_))
    ));
    assert!(matches!(
        app.extractor.extract_attachments(Some("@@not base64@@")),
        Err(ContentError::Decode(_))
    ));
}

#[test]
fn test_truncated_update_is_a_merge_error() {
    let update = DocumentFixture::new().paragraph("Truncated").update();
    let truncated = STANDARD.encode(&update[..update.len() / 2]);

    let result = test_app().extractor.extract_text(&truncated);
    assert!(matches!(result, Err(ContentError::Merge(_))));
}

#[test]
fn test_concurrent_extraction_shares_one_extractor() {
    let app = std::sync::Arc::new(test_app());
    let content = DocumentFixture::new().paragraph("Parallel").encoded();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| app.index_text(&content).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "Parallel");
        }
    });
}
