// Impress - document content extraction tool
//
// Reads base64-encoded document content on stdin and prints its markup,
// indexable text or attachment storage keys.

use std::io::Read;

use tracing::{error, info};
use uuid::Uuid;

use impress_app::App;

const USAGE: &str = "usage: impress-extract <markup|text|attachments>  (content on stdin)\n       impress-extract invite <email> <document-id> [language]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("impress=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        anyhow::bail!(USAGE);
    };

    let app = App::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    match command.as_str() {
        "markup" => {
            let content = read_stdin()?;
            let markup = app.extractor.decode_to_markup(&content)?;
            println!("{}", markup);
        }
        "text" => {
            let content = read_stdin()?;
            println!("{}", app.index_text(&content)?);
        }
        "attachments" => {
            let content = read_stdin()?;
            let keys = app.attachment_keys(Some(&content))?;
            info!("Found {} attachment(s)", keys.len());
            println!("{}", serde_json::to_string_pretty(&keys)?);
        }
        "invite" => {
            let (Some(email), Some(document_id)) = (args.get(1), args.get(2)) else {
                anyhow::bail!(USAGE);
            };
            let document_id = Uuid::parse_str(document_id)?;
            let language = args.get(3).map(String::as_str).unwrap_or("en-us");

            match app.invite(language, email, document_id).await {
                Some(receipt) => println!("{}", receipt.message_id),
                None => info!("Invitation was not sent, see log for details"),
            }
        }
        other => anyhow::bail!("unknown command {:?}\n{}", other, USAGE),
    }

    Ok(())
}

/// Read stdin, dropping the surrounding whitespace a shell pipe adds
fn read_stdin() -> anyhow::Result<String> {
    let mut content = String::new();
    std::io::stdin().read_to_string(&mut content)?;
    Ok(content.trim().to_string())
}
