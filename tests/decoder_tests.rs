//! Integration tests: raw message bytes → MIME tree → decoded message.

use std::path::{Path, PathBuf};

use throwbox::decoder::{decode, decode_raw, extract_attachments, extract_body};
use throwbox::model::message::DecodedMessage;
use throwbox::model::mime::{MimeNode, MULTIPART_ALTERNATIVE, TEXT_HTML, TEXT_PLAIN};
use throwbox::parser::{eml, MailParserBackend, MimeParser};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

// ─── Fixture message ────────────────────────────────────────────────

#[test]
fn test_newsletter_prefers_alternative_over_related() {
    let root = eml::parse_eml(&MailParserBackend::new(), fixture("newsletter.eml")).unwrap();
    let body = extract_body(&root);
    assert!(body.contains("Digest in <b>HTML</b>"), "got: {body}");
    assert!(!body.contains("Related body"));
}

#[test]
fn test_newsletter_attachments_in_document_order() {
    let root = eml::parse_eml(&MailParserBackend::new(), fixture("newsletter.eml")).unwrap();
    let atts = extract_attachments(&root);

    let types: Vec<&str> = atts.iter().map(|a| a.content_type.as_str()).collect();
    assert_eq!(types, ["application/pdf", "text/csv"]);
    assert_eq!(atts[0].name, "digest.pdf");
    assert_eq!(atts[0].content, b"%PDF-1.4");
    assert_eq!(atts[1].name, "numbers.csv");
    assert!(String::from_utf8_lossy(&atts[1].content).contains("1,2"));
}

#[test]
fn test_newsletter_headers() {
    let raw = eml::load_eml(fixture("newsletter.eml")).unwrap();
    let headers = MailParserBackend::new().headers(&raw).unwrap();
    assert_eq!(headers.from.format(), "Acme News (news@acme.example)");
    assert_eq!(headers.to.address, "box42@tmp.example");
    assert_eq!(headers.reply_subject(), "Re: Weekly digest");
}

// ─── Raw bytes ──────────────────────────────────────────────────────

#[test]
fn test_plain_single_part_message_has_no_body() {
    // A text/plain root is a leaf that is not text/html.
    let raw = b"Subject: x\r\nContent-Type: text/plain\r\n\r\nhello\r\n";
    let decoded = decode_raw(&MailParserBackend::new(), raw).unwrap();
    assert_eq!(decoded.body, "");
    assert!(decoded.attachments.is_empty());
}

#[test]
fn test_html_single_part_message_is_body() {
    let raw = b"Subject: x\r\nContent-Type: text/html; charset=utf-8\r\n\r\n<p>hi</p>\r\n";
    let decoded = decode_raw(&MailParserBackend::new(), raw).unwrap();
    assert!(decoded.body.contains("<p>hi</p>"));
    assert!(decoded.is_html());
}

#[test]
fn test_quoted_printable_and_charset_are_decoded() {
    let raw = b"Subject: x\r\n\
Content-Type: multipart/mixed; boundary=b\r\n\
\r\n\
--b\r\n\
Content-Type: text/plain; charset=iso-8859-1\r\n\
Content-Transfer-Encoding: quoted-printable\r\n\
\r\n\
caf=E9\r\n\
--b--\r\n";
    let decoded = decode_raw(&MailParserBackend::new(), raw).unwrap();
    assert!(decoded.body.starts_with("café"), "got: {:?}", decoded.body);
}

#[test]
fn test_from_line_and_bom_are_tolerated() {
    let raw = b"\xEF\xBB\xBFFrom someone Mon Jan 1 00:00:00 2024\n\
Content-Type: multipart/mixed; boundary=b\n\
\n\
--b\n\
Content-Type: text/plain\n\
\n\
body\n\
--b--\n";
    let root = MailParserBackend::new().parse(raw).unwrap();
    assert_eq!(root.content_type, "multipart/mixed");
    assert!(extract_body(&root).starts_with("body"));
}

// ─── Hand-built trees ───────────────────────────────────────────────

#[test]
fn test_alternative_branch_takes_priority() {
    let root = MimeNode::composite(
        "multipart/mixed",
        vec![
            MimeNode::composite(MULTIPART_ALTERNATIVE, vec![MimeNode::leaf(TEXT_PLAIN, "A")]),
            MimeNode::leaf(TEXT_PLAIN, "B"),
        ],
    );
    assert_eq!(extract_body(&root), "A");
}

#[test]
fn test_leaf_roots() {
    let html = MimeNode::leaf(TEXT_HTML, "<p>x</p>");
    assert_eq!(decode(&html).body, "<p>x</p>");
    assert!(decode(&html).attachments.is_empty());

    let empty_html = MimeNode::leaf(TEXT_HTML, "");
    assert_eq!(extract_body(&empty_html), "");

    let pdf = MimeNode::leaf("application/pdf", vec![1, 2]);
    assert_eq!(decode(&pdf), DecodedMessage::default());
}

#[test]
fn test_decode_is_idempotent() {
    let root = eml::parse_eml(&MailParserBackend::new(), fixture("newsletter.eml")).unwrap();
    assert_eq!(decode(&root), decode(&root));
}
