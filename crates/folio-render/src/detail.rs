//! Project detail fragment renderer.
//!
//! Pure function from a validated record to the modal body markup. No
//! registry access, no side effects; rendering the same record twice yields
//! identical output.

use crate::escape::escape_html;
use folio_content::ProjectRecord;

/// Render the detail-view fragment for one project.
///
/// Section order is fixed: header, Overview (with partner line when
/// present), Challenge, Approach, Results & Impact, Technologies & Methods,
/// summary strip. `approach` and `results` keep their authored order;
/// technology tags follow the set's deterministic order.
pub fn render_detail(record: &ProjectRecord) -> String {
    let mut out = String::with_capacity(2048);

    out.push_str(&render_header(record));

    out.push_str("<div class=\"modal-body\">\n");
    out.push_str(&render_overview(record));
    out.push_str(&render_text_section("Challenge", &record.challenge));
    out.push_str(&render_list_section("Approach", &record.approach));
    out.push_str(&render_list_section("Results &amp; Impact", &record.results));
    out.push_str(&render_tech_section(record));
    out.push_str(&render_summary_strip(record));
    out.push_str("</div>\n");

    out
}

fn render_header(record: &ProjectRecord) -> String {
    let title = escape_html(&record.title);
    match &record.image {
        Some(image) => format!(
            r#"<div class="modal-header">
    <img src="{src}" alt="{title}">
    <div class="modal-header-overlay">
        <h2>{title}</h2>
    </div>
</div>
"#,
            src = escape_html(image),
            title = title,
        ),
        // No placeholder: records without an image get a plain title block
        // with its own style treatment.
        None => format!(
            r#"<div class="modal-header modal-header-plain">
    <h2>{title}</h2>
</div>
"#,
            title = title,
        ),
    }
}

fn render_overview(record: &ProjectRecord) -> String {
    let partner_line = match &record.partner {
        Some(partner) => format!(
            "\n        <p class=\"modal-partner\">Partner: {}</p>",
            escape_html(partner)
        ),
        None => String::new(),
    };
    format!(
        r#"    <div class="modal-section">
        <h3>Overview</h3>
        <p>{description}</p>{partner_line}
    </div>
"#,
        description = escape_html(&record.description),
        partner_line = partner_line,
    )
}

fn render_text_section(heading: &str, body: &str) -> String {
    format!(
        r#"    <div class="modal-section">
        <h3>{heading}</h3>
        <p>{body}</p>
    </div>
"#,
        heading = heading,
        body = escape_html(body),
    )
}

fn render_list_section(heading: &str, items: &[String]) -> String {
    let items_html: String = items
        .iter()
        .map(|item| format!("            <li>{}</li>\n", escape_html(item)))
        .collect();
    format!(
        r#"    <div class="modal-section">
        <h3>{heading}</h3>
        <ul>
{items_html}        </ul>
    </div>
"#,
        heading = heading,
        items_html = items_html,
    )
}

fn render_tech_section(record: &ProjectRecord) -> String {
    let tags: String = record
        .technologies
        .iter()
        .map(|tech| format!("<span>{}</span>", escape_html(tech)))
        .collect();
    format!(
        r#"    <div class="modal-section">
        <h3>Technologies &amp; Methods</h3>
        <div class="modal-tech-stack">{tags}</div>
    </div>
"#,
        tags = tags,
    )
}

fn render_summary_strip(record: &ProjectRecord) -> String {
    format!(
        r#"    <div class="modal-section">
        <div class="modal-stats">
            <div class="modal-stat-card">
                <div class="modal-stat-label">{duration}</div>
            </div>
            <div class="modal-stat-card">
                <div class="modal-stat-label">{role}</div>
            </div>
            <div class="modal-stat-card">
                <div class="modal-stat-label">{institution}</div>
            </div>
        </div>
    </div>
"#,
        duration = escape_html(&record.duration),
        role = escape_html(&record.role),
        institution = escape_html(&record.institution),
    )
}
