//! Integration tests for template rendering

use pretty_assertions::assert_eq;
use resume_core::ResumeRecord;
use resume_template::{
    anchors, parse_template, produce, render, CompiledTemplate, Section, SectionKind,
};
use serde_json::json;

fn full_resume() -> serde_json::Value {
    json!({
        "name": "Jane Doe",
        "title": "Senior Engineer",
        "contact": {
            "address": "Springfield",
            "phone": "555-0100",
            "email": "jane@example.com",
            "linkedin": "linkedin.com/in/jane",
            "github": "github.com/jane",
            "website": "jane.dev"
        },
        "summary": "Builds reliable systems.",
        "skills": ["Rust", "Go", "SQL"],
        "experience": [
            {
                "title": "Engineer",
                "company": "Acme",
                "location": "Remote",
                "start_date": "2020",
                "end_date": "Present",
                "description": ["Shipped things", "Fixed things"]
            }
        ],
        "education": [{ "degree": "BSc", "school": "State U", "year": "2019" }],
        "certifications": ["CKA"],
        "projects": [
            { "name": "rsresume", "description": "Resume tool", "technologies": ["Rust", "HTML"] }
        ],
        "awards": ["Hackathon winner"]
    })
}

fn standard() -> CompiledTemplate {
    CompiledTemplate::standard().unwrap()
}

#[test]
fn test_full_resume_emits_every_anchor() {
    let doc = produce(&full_resume(), &standard()).unwrap();

    for id in [
        anchors::RESUME,
        anchors::HEADER,
        anchors::NAME,
        anchors::TITLE,
        anchors::CONTACT,
        anchors::CONTACT_DETAILS,
        anchors::CONTACT_LINKS,
        anchors::SUMMARY,
        anchors::SKILLS,
        anchors::SKILLS_COLUMN_1,
        anchors::EXPERIENCE,
        anchors::EDUCATION,
        anchors::CERTIFICATIONS,
        anchors::PROJECTS,
        anchors::AWARDS,
    ] {
        assert!(doc.has_anchor(id), "missing anchor {id}");
    }
    assert!(!doc.has_anchor(anchors::SKILLS_COLUMN_2));
}

#[test]
fn test_render_is_idempotent() {
    let template = standard();
    let raw = full_resume();

    let first = produce(&raw, &template).unwrap();
    let second = produce(&raw, &template).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_sections_follow_template_order() {
    let doc = produce(&full_resume(), &standard()).unwrap();
    let html = doc.as_str();

    let positions: Vec<usize> = SectionKind::ALL
        .iter()
        .map(|kind| {
            html.find(&format!("<section id=\"{}\"", kind.anchor()))
                .unwrap()
        })
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn test_custom_template_order_and_titles() {
    let template = CompiledTemplate::from_json(
        r#"{
            "version": "1.0",
            "page": { "size": "a4" },
            "sections": [
                { "type": "experience", "title": "Work History" },
                { "type": "skills" }
            ]
        }"#,
    )
    .unwrap();

    let doc = produce(&full_resume(), &template).unwrap();
    let html = doc.as_str();

    assert!(html.contains("<h2>Work History</h2>"));
    assert!(html.contains("@page { size: A4; margin: 0; }"));

    // Unlisted kinds still render, after the listed ones in standard order
    let position = |anchor: &str| html.find(&format!("<section id=\"{anchor}\"")).unwrap();
    let order = [
        anchors::EXPERIENCE,
        anchors::SKILLS,
        anchors::SUMMARY,
        anchors::EDUCATION,
        anchors::CERTIFICATIONS,
        anchors::PROJECTS,
        anchors::AWARDS,
    ];
    let positions: Vec<usize> = order.iter().map(|anchor| position(anchor)).collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
    assert!(html.contains("<h2>Professional Summary</h2><p>Builds reliable systems.</p>"));
    assert!(html.contains("<li>Hackathon winner</li>"));
}

#[test]
fn test_empty_collections_omit_sections() {
    let mut raw = full_resume();
    raw["experience"] = json!([]);
    raw["awards"] = json!([]);
    raw["projects"] = json!(null);
    raw.as_object_mut().unwrap().remove("certifications");

    let doc = produce(&raw, &standard()).unwrap();

    assert!(!doc.has_anchor(anchors::EXPERIENCE));
    assert!(!doc.has_anchor(anchors::AWARDS));
    assert!(!doc.has_anchor(anchors::PROJECTS));
    assert!(!doc.has_anchor(anchors::CERTIFICATIONS));
    assert!(doc.has_anchor(anchors::EDUCATION));
}

#[test]
fn test_skills_column_boundary() {
    let template = standard();
    let with_skills = |n: usize| ResumeRecord {
        skills: (1..=n).map(|i| format!("Skill{i}")).collect(),
        ..Default::default()
    };

    let six = render(&with_skills(6), &template);
    assert!(six.has_anchor(anchors::SKILLS_COLUMN_1));
    assert!(!six.has_anchor(anchors::SKILLS_COLUMN_2));

    let seven = render(&with_skills(7), &template);
    assert!(seven.has_anchor(anchors::SKILLS_COLUMN_2));
    assert!(seven
        .as_str()
        .contains("<ul id=\"skills-col-2\"><li>Skill7</li></ul>"));
}

#[test]
fn test_placeholder_fallback_changes_only_name() {
    let template = standard();
    let mut raw = full_resume();
    let with_name = produce(&raw, &template).unwrap();

    raw.as_object_mut().unwrap().remove("name");
    let mut record = ResumeRecord::from_value(&raw).unwrap();
    let without_name = render(&record, &template);

    assert_eq!(
        without_name.as_str(),
        with_name.as_str().replace("Jane Doe", "Your Name")
    );

    // Blank counts as absent
    record.name = Some("   ".to_string());
    assert_eq!(render(&record, &template), without_name);
}

#[test]
fn test_entry_placeholders() {
    let raw = json!({
        "name": "Jane",
        "title": "Engineer",
        "contact": {},
        "summary": "Hi",
        "skills": ["Rust"],
        "experience": [{}],
        "education": [{}],
        "projects": [{}]
    });

    let doc = produce(&raw, &standard()).unwrap();
    let html = doc.as_str();

    for placeholder in [
        "Job Title",
        "Company",
        "Location",
        "Start &ndash; End",
        "Degree",
        "School",
        "Year",
        "Project Name",
        "Project Description",
    ] {
        assert!(html.contains(placeholder), "missing placeholder {placeholder}");
    }
}

#[test]
fn test_link_separator_correctness() {
    let record = ResumeRecord::from_value(&json!({
        "contact": { "linkedin": "x", "website": "y" }
    }))
    .unwrap();

    let doc = render(&record, &standard());
    let html = doc.as_str();

    let start = html.find("<div id=\"contact-links\">").unwrap();
    let end = start + html[start..].find("</div>").unwrap();
    let line = &html[start..end];

    assert_eq!(line.matches(" | ").count(), 1);
    assert_eq!(
        line,
        "<div id=\"contact-links\"><a id=\"contact-linkedin\" href=\"https://x\">x</a> | \
         <a id=\"contact-website\" href=\"https://y\">y</a>"
    );
}

#[test]
fn test_blank_website_is_suppressed() {
    let record = ResumeRecord::from_value(&json!({
        "contact": { "github": "github.com/jane", "website": " " }
    }))
    .unwrap();

    let doc = render(&record, &standard());
    assert!(doc.has_anchor("contact-github"));
    assert!(!doc.has_anchor("contact-website"));
    assert!(!doc.as_str().contains("github.com/jane</a> | "));
}

#[test]
fn test_end_to_end_scenario() {
    let raw = json!({
        "name": "Jane Doe",
        "title": "Engineer",
        "contact": { "email": "j@x.com" },
        "summary": "",
        "skills": ["Go", "Rust", "C++", "Python", "SQL", "Git", "Docker"],
        "experience": [],
        "education": []
    });

    let doc = produce(&raw, &standard()).unwrap();
    let html = doc.as_str();

    assert!(html.contains("<h1 id=\"name\">Jane Doe</h1>"));
    assert!(html.contains("<div id=\"title\">Engineer</div>"));
    assert!(html.contains("<span id=\"contact-email\">j@x.com</span>"));
    assert!(!doc.has_anchor(anchors::CONTACT_LINKS));

    assert!(doc.has_anchor(anchors::SKILLS_COLUMN_1));
    assert!(doc.has_anchor(anchors::SKILLS_COLUMN_2));
    assert_eq!(html.matches("<li>").count(), 7);
    assert!(html.contains("<ul id=\"skills-col-2\"><li>Docker</li></ul>"));

    assert!(!doc.has_anchor(anchors::SUMMARY));
    assert!(!doc.has_anchor(anchors::EXPERIENCE));
    assert!(!doc.has_anchor(anchors::EDUCATION));
}

#[test]
fn test_markup_in_values_is_escaped() {
    let record = ResumeRecord::from_value(&json!({
        "name": "<script>alert(1)</script>",
        "summary": "R&D \"lead\"",
        "skills": ["C<T>"],
        "contact": { "website": "x.com/\"><b>" }
    }))
    .unwrap();

    let doc = render(&record, &standard());
    let html = doc.as_str();

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("<p>R&amp;D &quot;lead&quot;</p>"));
    assert!(html.contains("<li>C&lt;T&gt;</li>"));
    assert!(html.contains("href=\"https://x.com/&quot;&gt;&lt;b&gt;\""));
}

#[test]
fn test_plain_http_link_kept() {
    let record = ResumeRecord::from_value(&json!({
        "contact": { "website": "http://jane.dev" }
    }))
    .unwrap();

    let doc = render(&record, &standard());
    assert!(doc
        .as_str()
        .contains("<a id=\"contact-website\" href=\"http://jane.dev\">http://jane.dev</a>"));
}

#[test]
fn test_invalid_input_never_renders() {
    let template = standard();

    let report = produce(&json!({ "skills": "Rust" }), &template).unwrap_err();
    assert!(!report.ok);
    assert!(report.errors.iter().any(|d| d.field_path == "$.skills"));
    assert!(report.errors.iter().any(|d| d.field_path == "$.name"));

    let report = produce(&json!([1, 2, 3]), &template).unwrap_err();
    assert_eq!(report.errors[0].field_path, "$");
}

#[test]
fn test_shared_template_across_threads() {
    let template = standard();
    let raw = full_resume();
    let expected = produce(&raw, &template).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| produce(&raw, &template).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_page_is_single_and_margin_free() {
    let def = parse_template(
        r#"{
            "version": "1.2",
            "page": { "size": "legal", "padding": "0.4in" },
            "sections": [{ "type": "summary" }]
        }"#,
    )
    .unwrap();
    let template = CompiledTemplate::compile(def).unwrap();

    let doc = render(&ResumeRecord::default(), &template);
    let html = doc.as_str();

    assert!(html.contains("@page { size: legal; margin: 0; }"));
    assert!(html
        .contains("#resume { width: 8.5in; height: 14in; padding: 0.4in; overflow: hidden; }"));
    assert_eq!(html.matches("<div id=\"resume\">").count(), 1);
}

#[test]
fn test_section_without_title_uses_default() {
    let def = resume_template::TemplateDef {
        sections: vec![Section {
            kind: SectionKind::Certifications,
            title: None,
        }],
        ..Default::default()
    };
    let template = CompiledTemplate::compile(def).unwrap();
    let record = ResumeRecord {
        certifications: vec!["CKA".to_string()],
        ..Default::default()
    };

    let doc = render(&record, &template);
    assert!(doc
        .as_str()
        .contains("<h2>Certifications</h2><ul class=\"plain-list\"><li>CKA</li></ul>"));
}

#[test]
fn test_sample_resume_asset() {
    let raw: serde_json::Value =
        serde_json::from_str(include_str!("../../../assets/sample_resume.json")).unwrap();

    let rendered = resume_template::produce_reporting(&raw, &standard()).unwrap();
    let doc = &rendered.document;

    assert!(doc.has_anchor("contact-linkedin"));
    assert!(doc.has_anchor("contact-github"));
    assert!(!doc.has_anchor("contact-website"));
    assert!(doc.has_anchor(anchors::SKILLS_COLUMN_2));

    let unknown: Vec<&str> = rendered
        .warnings
        .iter()
        .filter(|d| d.kind == resume_core::DiagnosticKind::UnknownField)
        .map(|d| d.field_path.as_str())
        .collect();
    assert_eq!(unknown, vec!["$.contact.location"]);
}
