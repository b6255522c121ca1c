// End-to-end analysis flow: document bytes in, scores and evidence out.
//
// Fixtures are built in memory (the DOCX with the same crate that parses
// it, the PDF assembled object-by-object with computed xref offsets) so
// no binary test data is checked in.

use std::io::Cursor;

use analyzer::extract::{extract_text, extract_text_for_mime};
use analyzer::matching::keyword::{analyze_match, matched_terms};
use analyzer::matching::similarity::compute_similarity;
use analyzer::matching::skills::{extract_skills, SkillVocabulary};
use analyzer::models::{DocumentFormat, MatchFeedback};
use docx_rs::{Docx, Paragraph, Run};

// ============================================================
// Fixtures
// ============================================================

fn docx_fixture(lines: &[&str]) -> Vec<u8> {
    let mut docx = Docx::new();
    for line in lines {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*line)));
    }
    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .expect("in-memory docx packs");
    cursor.into_inner()
}

/// A minimal one-page PDF with `text` drawn in Helvetica. Object offsets
/// are recorded while the buffer is written, so the xref table is always
/// consistent.
fn pdf_fixture(text: &str) -> Vec<u8> {
    let content = format!("BT /F1 24 Tf 72 712 Td ({text}) Tj ET");
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
            .to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content.len(),
            content
        ),
    ];

    let mut buf: Vec<u8> = Vec::new();
    buf.extend_from_slice(b"%PDF-1.4\n");

    let mut offsets: Vec<usize> = Vec::new();
    for (i, body) in objects.iter().enumerate() {
        offsets.push(buf.len());
        buf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
    }

    let xref_offset = buf.len();
    buf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    buf.extend_from_slice(b"0000000000 65535 f \n");
    for offset in &offsets {
        buf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }
    buf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );
    buf
}

const RESUME_LINES: &[&str] = &[
    "Jane Doe, Software Engineer",
    "Experienced Python developer; knows AWS and Docker well.",
    "Built REST API services and data analysis dashboards.",
];

const JOB_TEXT: &str = "Looking for a Python developer familiar with Docker";

// ============================================================
// Extraction round trips
// ============================================================

#[test]
fn docx_round_trip_preserves_phrase() {
    let bytes = docx_fixture(&["Software Engineer", "Python and Docker"]);
    let text = extract_text(&bytes, DocumentFormat::Docx).unwrap();
    assert!(text.contains("Software Engineer"), "Got: {text:?}");
    assert!(text.contains("Python and Docker"));
}

#[test]
fn pdf_round_trip_preserves_phrase() {
    let bytes = pdf_fixture("Software Engineer");
    let text = extract_text(&bytes, DocumentFormat::Pdf).unwrap();
    assert!(text.contains("Software Engineer"), "Got: {text:?}");
}

#[test]
fn mime_dispatch_selects_the_right_extractor() {
    let docx = docx_fixture(&["Software Engineer"]);
    let via_mime = extract_text_for_mime(
        &docx,
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    )
    .unwrap();
    assert!(via_mime.contains("Software Engineer"));

    let pdf = pdf_fixture("Software Engineer");
    let via_mime = extract_text_for_mime(&pdf, "application/pdf").unwrap();
    assert!(via_mime.contains("Software Engineer"));
}

// ============================================================
// Full analysis flow
// ============================================================

#[test]
fn full_flow_from_docx_bytes_to_scores() {
    let bytes = docx_fixture(RESUME_LINES);
    let resume_text = extract_text(&bytes, DocumentFormat::Docx).unwrap();

    // Keyword overlap: python, developer, docker out of 8 job tokens.
    let result = analyze_match(&resume_text, JOB_TEXT);
    assert_eq!(result.total_job_terms, 8);
    assert_eq!(result.matched_count, 3);
    assert_eq!(result.score, 38);
    assert_eq!(result.feedback, MatchFeedback::Low);

    let matched = matched_terms(&resume_text, JOB_TEXT);
    assert_eq!(matched, ["developer", "docker", "python"]);

    // Chart data stays consistent with the counts.
    let breakdown = result.breakdown();
    assert_eq!(breakdown.matched, 3);
    assert_eq!(breakdown.unmatched, 5);

    // Skill evidence from the built-in vocabulary.
    let skills = extract_skills(&resume_text, &SkillVocabulary::built_in());
    for expected in ["python", "aws", "docker", "rest api", "data analysis"] {
        assert!(skills.contains(&expected.to_string()), "Missing {expected}");
    }

    // Vector similarity agrees that there is real but partial overlap.
    let similarity = compute_similarity(&resume_text, JOB_TEXT);
    assert!(similarity.cosine_similarity > 0.0);
    assert!(similarity.cosine_similarity < 1.0);
    assert!(similarity.common_terms.contains(&"python".to_string()));
}

#[test]
fn analysis_always_completes_even_with_empty_job_text() {
    let bytes = docx_fixture(RESUME_LINES);
    let resume_text = extract_text(&bytes, DocumentFormat::Docx).unwrap();

    let result = analyze_match(&resume_text, "");
    assert_eq!(result.score, 0);

    let similarity = compute_similarity(&resume_text, "");
    assert_eq!(similarity.cosine_similarity, 0.0);
    assert!(similarity.common_terms.is_empty());
}
