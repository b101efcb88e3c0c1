//! Keyword routing for the hero search box.
//!
//! Queries are free text; routing is a substring scan over a fixed keyword
//! table. First match in table order wins, so broader keywords must come
//! after more specific ones sharing a prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Page sections a query can route to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Education,
    Contact,
}

impl Section {
    /// The in-page anchor for this section.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "#home",
            Section::About => "#about",
            Section::Skills => "#skills",
            Section::Projects => "#projects",
            Section::Experience => "#experience",
            Section::Education => "#education",
            Section::Contact => "#contact",
        }
    }

    /// Element id without the leading `#`.
    pub fn id(&self) -> &'static str {
        &self.anchor()[1..]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.anchor())
    }
}

/// Keyword table, in priority order.
const KEYWORDS: &[(&str, Section)] = &[
    ("esg", Section::Skills),
    ("sustainability", Section::Projects),
    ("climate", Section::Experience),
    ("water", Section::Projects),
    ("data", Section::Skills),
    ("python", Section::Skills),
    ("research", Section::Projects),
    ("education", Section::Education),
    ("contact", Section::Contact),
    ("about", Section::About),
    ("ghg", Section::Skills),
    ("carbon", Section::Skills),
    ("analytics", Section::Skills),
    ("environmental", Section::About),
    ("disaster", Section::Projects),
    ("un", Section::Experience),
    ("wageningen", Section::Education),
    ("experience", Section::Experience),
];

/// Route a search query to a page section.
///
/// Case-insensitive substring match against the keyword table; queries that
/// match nothing land on the projects section.
pub fn route_query(query: &str) -> Section {
    let lower = query.to_lowercase();
    for (keyword, section) in KEYWORDS {
        if lower.contains(keyword) {
            return *section;
        }
    }
    Section::Projects
}
