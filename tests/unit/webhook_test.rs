//! Tests for the webhook decoder
//!
//! Replies come from a mock service; nothing touches the network.

use verisense::core::models::{Attachment, Submission, VerificationStatus};
use verisense::core::ports::HttpReply;
use verisense::core::services::verdict::NO_DETAILS;
use verisense::core::services::{SalvageError, VerifyError, decode_reply, verify_claim};

use crate::common::MockService;

// =============================================================================
// Success
// =============================================================================

#[tokio::test]
async fn verified_with_trailing_html() {
    let service = MockService::replying(
        200,
        r#"{"status":"verified: true","truth_english":"The claim is accurate."}<html>noise</html>"#,
    );
    let verdict = verify_claim(&service, &Submission::text("Rations start Monday")).await.unwrap();

    assert_eq!(verdict.status, VerificationStatus::Verified);
    assert!(verdict.explanation.contains("The claim is accurate."));
    assert_eq!(verdict.raw.status_code, 200);
    assert!(verdict.raw.raw_body.ends_with("</html>"));
    assert_eq!(verdict.raw.parsed_json["truth_english"], "The claim is accurate.");
}

#[tokio::test]
async fn submission_reaches_the_service() {
    let service = MockService::replying(200, r#"{"status":"false"}"#);
    let submission = Submission::text("").with_attachment(Attachment::new(
        "voice.ogg",
        "audio/ogg",
        vec![1, 2, 3],
    ));
    verify_claim(&service, &submission).await.unwrap();

    let seen = service.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].multipart_claim(), "Analyze this file");
}

#[test]
fn all_sections_in_order() {
    let reply = HttpReply::new(
        200,
        r#"{
            "status": "Misleading",
            "truth_english": "Old photo.",
            "debunk_native": "पुरानी फोटो।",
            "transcript": "they said the dam broke",
            "image_analysis": "Photo from 2018.",
            "source_url": "https://factcheck.example/dam"
        }"#,
    );
    let verdict = decode_reply(&reply).unwrap();

    assert_eq!(verdict.status, VerificationStatus::Misleading);
    assert_eq!(
        verdict.explanation,
        "🇬🇧 Old photo.\n\n🇮🇳 पुरानी फोटो।\n\n📝 Transcript: they said the dam broke\n\n🖼️ Image Analysis: Photo from 2018."
    );
    assert_eq!(verdict.source.as_deref(), Some("https://factcheck.example/dam"));
    assert!((verdict.confidence - 0.95).abs() < f64::EPSILON);
}

#[test]
fn log_used_when_no_sections() {
    let reply = HttpReply::new(200, r#"{"status":"pending","verification_log":"  queued for review  "}"#);
    let verdict = decode_reply(&reply).unwrap();
    assert_eq!(verdict.status, VerificationStatus::Pending);
    assert_eq!(verdict.explanation, "queued for review");
}

#[test]
fn sentinel_only_when_nothing_present() {
    let verdict = decode_reply(&HttpReply::new(200, "{}")).unwrap();
    assert_eq!(verdict.status, VerificationStatus::Pending);
    assert_eq!(verdict.explanation, NO_DETAILS);
    assert_eq!(verdict.source, None);
}

#[test]
fn blank_log_falls_through_to_sentinel() {
    let verdict = decode_reply(&HttpReply::new(200, r#"{"verification_log":"   "}"#)).unwrap();
    assert_eq!(verdict.explanation, NO_DETAILS);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn non_success_status_is_service_error() {
    let body = "x".repeat(300);
    let mut reply = HttpReply::new(502, body.as_str());
    reply.reason = Some("Bad Gateway".to_string());

    let err = decode_reply(&reply).unwrap_err();
    assert_eq!(err.status(), Some(502));
    let message = err.to_string();
    assert!(message.starts_with("Verification service error: 502 Bad Gateway - "));
    assert!(message.contains("\n\nRaw Response: "));
    assert_eq!(err.raw_excerpt().len(), 300);
}

#[test]
fn undecodable_body_is_decode_error() {
    let err = decode_reply(&HttpReply::new(200, "<html>maintenance</html>")).unwrap_err();
    assert!(matches!(
        err,
        VerifyError::Decode {
            source: SalvageError::NoJsonFound,
            ..
        }
    ));
    assert_eq!(err.raw_excerpt(), "<html>maintenance</html>");
}

#[test]
fn empty_body_excerpt_is_empty_marker() {
    let err = decode_reply(&HttpReply::new(200, "")).unwrap_err();
    assert_eq!(err.raw_excerpt(), "Empty");
}

#[tokio::test]
async fn transport_failure_has_no_status() {
    let err = verify_claim(&MockService::unreachable(), &Submission::text("x")).await.unwrap_err();
    assert_eq!(err.status(), None);
    assert!(err.to_string().contains("connection refused"));
}

#[tokio::test]
async fn unreadable_body_keeps_status() {
    let err = verify_claim(&MockService::losing_body_after(502), &Submission::text("x"))
        .await
        .unwrap_err();
    assert!(matches!(err, VerifyError::Service { status: Some(502), .. }));
    assert!(err.to_string().contains("connection reset by peer"));
    assert_eq!(err.raw_excerpt(), "Empty");
}
