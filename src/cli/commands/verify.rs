//! Verify command - send one claim to the analysis service

use std::fs;
use std::path::Path;

use anyhow::{Context, anyhow, bail};

use verisense::adapters::http::WebhookClient;
use verisense::config::Config;
use verisense::core::models::{Attachment, Submission};
use verisense::output::{OutputMode, VerdictReport};
use verisense::state::ClaimStore;

use super::now_millis;

/// Verify a claim given as text, a file, or both
pub async fn verify(
    config: &Config,
    text: Option<String>,
    file: Option<&Path>,
    mime: Option<String>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let mut submission = Submission::text(text.unwrap_or_default());
    if let Some(path) = file {
        submission = submission.with_attachment(read_attachment(path, mime)?);
    }
    if submission.is_empty() {
        bail!("nothing to verify: pass claim text, --file, or both");
    }

    let service = WebhookClient::from_config(config)?;
    log::debug!("verifying via {}", service.url());

    let mut store = ClaimStore::new(config.defaults.submission_defaults());
    match store.submit_claim(&service, submission, now_millis()).await {
        Ok(claim) => {
            VerdictReport {
                claim: claim.clone(),
            }
            .render(mode);
            Ok(())
        },
        Err(err) => {
            if mode == OutputMode::Json {
                let json = serde_json::json!({
                    "error": err.to_string(),
                    "status": err.status(),
                    "raw_excerpt": err.raw_excerpt(),
                });
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
            Err(anyhow!("{err}"))
        },
    }
}

fn read_attachment(path: &Path, mime: Option<String>) -> anyhow::Result<Attachment> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());
    let media_type = mime.unwrap_or_else(|| guess_media_type(path).to_string());

    let attachment = Attachment::new(file_name, media_type, bytes);
    if attachment.kind().is_none() {
        log::warn!(
            "{} is neither image nor audio ({}); sending anyway",
            attachment.file_name,
            attachment.media_type
        );
    }
    Ok(attachment)
}

/// Media type for common image and audio extensions
fn guess_media_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "heic" => "image/heic",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" | "opus" => "audio/ogg",
        "m4a" => "audio/mp4",
        "aac" => "audio/aac",
        _ => "application/octet-stream",
    }
}
