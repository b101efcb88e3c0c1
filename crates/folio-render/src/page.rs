//! Full page generator.
//!
//! Builds the complete single-page site from the registry: navigation, hero
//! with the search box, the project card grid wired with project slugs, the
//! contact form, and a footer carrying the current year. Critical CSS is
//! inlined; both theme palettes ship as CSS variables so the theme toggle is
//! a single class flip.

use crate::config::RenderConfig;
use crate::error::Result;
use crate::escape::escape_html;
use folio_content::{ProjectRecord, Registry, Section};
use tracing::{debug, info};

/// Generate the portfolio page.
pub fn render_page(registry: &Registry, config: &RenderConfig) -> Result<String> {
    debug!(projects = registry.len(), theme = %config.theme, "rendering page");

    let title = escape_html(config.title());
    let owner = escape_html(&config.owner.name);
    let tagline = escape_html(&config.owner.tagline);
    let email = escape_html(&config.owner.email);
    let year = chrono::Utc::now().format("%Y");

    let html = format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <meta name="generator" content="folio {version}">
    <style>
        :root {{
            --primary-green: #7cfc00;
            --dark-bg: #0d1117;
            --darker-bg: #010409;
            --card-bg: #161b22;
            --text-primary: #e6edf3;
            --text-secondary: #8b949e;
            --border-color: #30363d;
        }}
        body.light-mode {{
            --dark-bg: #ffffff;
            --darker-bg: #f6f8fa;
            --card-bg: #ffffff;
            --text-primary: #1f2328;
            --text-secondary: #656d76;
            --border-color: #d0d7de;
        }}
        body {{
            margin: 0;
            background-color: var(--dark-bg);
            color: var(--text-primary);
            font-family: ui-sans-serif, system-ui, sans-serif;
            line-height: 1.6;
        }}
        .navbar {{
            position: fixed;
            top: 0;
            width: 100%;
            background-color: var(--darker-bg);
            border-bottom: 1px solid var(--border-color);
            z-index: 100;
        }}
        .navbar.scrolled {{
            box-shadow: 0 2px 8px rgba(0, 0, 0, 0.4);
        }}
        .nav-link.active {{
            color: var(--primary-green);
        }}
        section {{
            padding: 4rem 1.5rem;
            max-width: 72rem;
            margin: 0 auto;
        }}
        .project-card {{
            background-color: var(--card-bg);
            border: 1px solid var(--border-color);
            border-radius: 0.5rem;
            padding: 1.5rem;
            margin-bottom: 1rem;
        }}
        .view-details-btn {{
            color: var(--primary-green);
            background: none;
            border: 1px solid var(--primary-green);
            border-radius: 0.25rem;
            padding: 0.5rem 1rem;
            cursor: pointer;
        }}
        .modal-backdrop {{
            display: none;
            position: fixed;
            inset: 0;
            background: rgba(0, 0, 0, 0.7);
            z-index: 200;
        }}
        .modal-backdrop.active {{
            display: block;
        }}
        .modal-content {{
            background: var(--card-bg);
            max-width: 48rem;
            margin: 4rem auto;
            border-radius: 0.5rem;
            overflow: hidden;
        }}
        .modal-tech-stack span {{
            display: inline-block;
            border: 1px solid var(--primary-green);
            border-radius: 9999px;
            padding: 0.25rem 0.75rem;
            margin: 0.25rem;
            font-size: 0.85rem;
        }}
        .modal-stats {{
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 1rem;
            text-align: center;
        }}
        body.scroll-locked {{
            overflow: hidden;
        }}
        @media print {{
            .navbar, .modal-backdrop {{ display: none !important; }}
        }}
    </style>
</head>
<body class="{theme_class}">
    <nav class="navbar" id="navbar">
        <ul class="nav-menu" id="navMenu">
{nav_links}        </ul>
    </nav>

    <header class="hero" id="home">
        <h1>{owner}</h1>
        <p class="hero-subtitle">{tagline}</p>
        <div class="hero-search">
            <input type="search" id="heroSearch" placeholder="Search skills, projects, experience...">
            <button class="search-btn" type="button">Search</button>
        </div>
    </header>

    <main>
{sections}    </main>

    <div class="modal-backdrop" id="projectModal">
        <div class="modal-content" id="modalBody"></div>
    </div>

    <footer>
        <p>&copy; <span class="current-year">{year}</span> {owner} &middot;
           <a href="mailto:{email}">{email}</a></p>
    </footer>
</body>
</html>"##,
        title = title,
        version = env!("CARGO_PKG_VERSION"),
        theme_class = config.theme.css_class(),
        nav_links = nav_links(config),
        owner = owner,
        tagline = tagline,
        email = email,
        sections = page_sections(registry, config),
        year = year,
    );

    info!(bytes = html.len(), "page generated");
    Ok(html)
}

fn nav_links(config: &RenderConfig) -> String {
    let mut entries: Vec<Section> = vec![Section::Home];
    let s = &config.sections;
    for (enabled, section) in [
        (s.about, Section::About),
        (s.skills, Section::Skills),
        (s.projects, Section::Projects),
        (s.experience, Section::Experience),
        (s.education, Section::Education),
        (s.contact, Section::Contact),
    ] {
        if enabled {
            entries.push(section);
        }
    }
    entries
        .iter()
        .map(|section| {
            format!(
                "            <li><a class=\"nav-link\" href=\"{anchor}\">{label}</a></li>\n",
                anchor = section.anchor(),
                label = title_case(section.id()),
            )
        })
        .collect()
}

fn page_sections(registry: &Registry, config: &RenderConfig) -> String {
    let mut out = String::new();
    let s = &config.sections;
    if s.about {
        out.push_str(&simple_section(Section::About));
    }
    if s.skills {
        out.push_str(&simple_section(Section::Skills));
    }
    if s.projects {
        out.push_str(&projects_section(registry));
    }
    if s.experience {
        out.push_str(&simple_section(Section::Experience));
    }
    if s.education {
        out.push_str(&simple_section(Section::Education));
    }
    if s.contact {
        out.push_str(&contact_section(config));
    }
    out
}

// Placeholder body; the narrative sections are authored in markup that the
// host page provides, not generated from records.
fn simple_section(section: Section) -> String {
    format!(
        "        <section id=\"{id}\">\n            <h2>{label}</h2>\n        </section>\n",
        id = section.id(),
        label = title_case(section.id()),
    )
}

fn projects_section(registry: &Registry) -> String {
    let cards: String = registry.iter().map(project_card).collect();
    format!(
        r#"        <section id="projects">
            <h2>Projects</h2>
            <div class="projects-grid">
{cards}            </div>
        </section>
"#,
        cards = cards,
    )
}

fn project_card(record: &ProjectRecord) -> String {
    format!(
        r#"                <article class="project-card" data-project="{slug}">
                    <h3>{title}</h3>
                    <p>{description}</p>
                    <button class="view-details-btn" type="button" data-project="{slug}">View Details</button>
                </article>
"#,
        slug = escape_html(record.id.as_str()),
        title = escape_html(&record.title),
        description = escape_html(&record.description),
    )
}

fn contact_section(config: &RenderConfig) -> String {
    format!(
        r#"        <section id="contact">
            <h2>Contact</h2>
            <form id="contactForm" data-recipient="{email}">
                <input type="text" id="name" placeholder="Your Name" required>
                <input type="email" id="email" placeholder="Your Email" required>
                <input type="text" id="subject" placeholder="Subject" required>
                <textarea id="message" placeholder="Message" required></textarea>
                <button type="submit">Send Message</button>
            </form>
        </section>
"#,
        email = escape_html(&config.owner.email),
    )
}

fn title_case(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
