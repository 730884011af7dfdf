//! Shared email content templates
//!
//! Canonical content generators for invitation emails, used by every
//! email transport.

use uuid::Uuid;

use crate::i18n::InvitationStrings;

/// Link to a document in the web application
pub fn document_url(app_base_url: &str, document_id: Uuid) -> String {
    format!("{}/docs/{}/", app_base_url.trim_end_matches('/'), document_id)
}

/// Generate plain-text body for a document invitation email.
pub fn document_invitation_text(
    strings: &InvitationStrings,
    site_name: &str,
    document_url: &str,
) -> String {
    format!(
        "{}\n\n\
        {}\n\n\
        {}:\n\
        {}\n\n\
        {}",
        strings.greeting,
        strings.invited.replace("{site}", site_name),
        strings.open_document,
        document_url,
        strings.signature
    )
}

/// Generate styled HTML body for a document invitation email.
pub fn document_invitation_html(
    strings: &InvitationStrings,
    site_name: &str,
    document_url: &str,
) -> String {
    format!(
        r#"
            <html>
            <body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
                <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
                    <h2 style="color: #000091;">{title}</h2>

                    <p>{greeting}</p>

                    <p>{invited}</p>

                    <div style="text-align: center; margin: 30px 0;">
                        <a href="{document_url}"
                           style="background-color: #000091; color: white; padding: 12px 24px; text-decoration: none; border-radius: 4px; display: inline-block; font-weight: bold;">
                            {open_document}
                        </a>
                    </div>

                    <p>{copy_link}</p>
                    <p style="background-color: #f5f5f5; padding: 10px; border-radius: 4px; word-break: break-all;">
                        <a href="{document_url}">{document_url}</a>
                    </p>

                    <hr style="border: none; border-top: 1px solid #eee; margin: 30px 0;">

                    <p style="color: #666; font-size: 12px;">{signature}</p>
                </div>
            </body>
            </html>
            "#,
        title = strings.subject,
        greeting = strings.greeting,
        invited = strings.invited.replace("{site}", site_name),
        document_url = document_url,
        open_document = strings.open_document,
        copy_link = strings.copy_link,
        signature = strings.signature
    )
}
