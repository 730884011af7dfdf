//! Document invitation workflow
//!
//! Sharing a document sends a localized invitation to the new member. Delivery
//! is best-effort: failures are logged and never reach the caller.

use impress_email::mock::MockEmailService;
use impress_email::{email_invitation, EmailConfig, EmailService, EmailServiceFactory, Locale};
use serial_test::serial;
use uuid::Uuid;

use crate::common::test_app;

mod common;

#[tokio::test]
async fn test_invitation_reaches_recipient_in_their_language() {
    let service = MockEmailService::from_config(&EmailConfig {
        app_base_url: "https://docs.example.com".to_string(),
        site_name: "Docs Example".to_string(),
        ..EmailConfig::default()
    });
    let document_id = Uuid::new_v4();

    for (language, recipient) in [
        ("en-us", "alice@example.com"),
        ("fr-FR", "bob@example.com"),
        ("de", "carol@example.com"),
    ] {
        let receipt = email_invitation(&service, language, recipient, document_id).await;
        assert!(receipt.is_some(), "{language}");
    }

    let alice = service.get_latest_invitation_email("alice@example.com").unwrap();
    let bob = service.get_latest_invitation_email("bob@example.com").unwrap();
    let carol = service.get_latest_invitation_email("carol@example.com").unwrap();

    assert_eq!(alice.message.subject, Locale::EnUs.invitation().subject);
    assert_eq!(bob.message.subject, Locale::FrFr.invitation().subject);
    assert_eq!(carol.message.subject, Locale::DeDe.invitation().subject);

    for captured in [&alice, &bob, &carol] {
        assert_eq!(captured.extract_document_id(), Some(document_id));
        assert!(captured
            .message
            .body_html
            .as_deref()
            .unwrap()
            .contains(&format!("https://docs.example.com/docs/{document_id}/")));
    }
    assert_eq!(service.email_count(), 3);
}

#[test_log::test(tokio::test)]
async fn test_delivery_failure_is_swallowed() {
    let service = MockEmailService::new_failing("421 service not available");

    let receipt =
        email_invitation(&service, "en-us", "alice@example.com", Uuid::new_v4()).await;

    assert!(receipt.is_none());
    assert!(service.get_all_emails().is_empty());
}

#[tokio::test]
async fn test_unsupported_language_falls_back_to_default() {
    let service = MockEmailService::new();
    let document_id = Uuid::new_v4();

    email_invitation(&service, "tlh", "worf@example.com", document_id)
        .await
        .unwrap();

    let captured = service
        .get_latest_invitation_email("worf@example.com")
        .unwrap();
    assert_eq!(captured.message.subject, "Invitation to join Docs!");
    assert_eq!(
        captured.message.metadata.get("locale").map(String::as_str),
        Some("en-us")
    );
}

#[tokio::test]
async fn test_app_invite_through_configured_service() {
    let app = test_app();
    let document_id = Uuid::new_v4();

    let receipt = app
        .invite("fr", "dave@example.com", document_id)
        .await
        .unwrap();

    assert_eq!(receipt.provider, "mock");
    assert_eq!(
        receipt.metadata.get("document_id"),
        Some(&document_id.to_string())
    );
}

#[test]
#[serial]
fn test_log_provider_from_environment() {
    std::env::set_var("EMAIL_PROVIDER", "log");
    std::env::set_var("EMAIL_FROM", "docs@example.com");

    let config = EmailConfig::from_env().unwrap();
    let service = EmailServiceFactory::create(config).unwrap();

    let receipt = tokio_test::block_on(service.send_document_invitation(
        Locale::EnUs,
        "erin@example.com",
        Uuid::new_v4(),
    ))
    .unwrap();
    assert_eq!(receipt.provider, "log");
    assert_eq!(service.default_from(), "docs@example.com");

    std::env::remove_var("EMAIL_PROVIDER");
    std::env::remove_var("EMAIL_FROM");
}
