//! Project record data model.

use folio_common::{Error, ProjectId, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One portfolio project, as rendered in the detail view.
///
/// Records are authored once and never mutated after registry construction.
/// `approach` and `results` are ordered: the author's sequencing is part of
/// the content. `technologies` is an unordered set; `BTreeSet` keeps the
/// rendered tag order deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Unique slug, referenced by the card markup.
    pub id: ProjectId,
    /// Display title.
    pub title: String,
    /// Header image path. `None` switches the detail view to the
    /// title-only header treatment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Overview paragraph.
    pub description: String,
    /// Collaborating organization, shown under the overview when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner: Option<String>,
    /// Problem statement.
    pub challenge: String,
    /// Method steps, in presentation order.
    pub approach: Vec<String>,
    /// Outcomes, in presentation order.
    pub results: Vec<String>,
    /// Tools and methods, rendered as tags.
    pub technologies: BTreeSet<String>,
    /// Time span, e.g. "2023 - 2024".
    pub duration: String,
    /// Author's role on the project.
    pub role: String,
    /// Hosting institution.
    pub institution: String,
}

impl ProjectRecord {
    /// Validate that every required field is populated.
    ///
    /// A record missing a required field is a data-integrity error and must
    /// be rejected at registry construction rather than surfacing as a
    /// partial render later.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("id", self.id.as_str().is_empty()),
            ("title", self.title.is_empty()),
            ("description", self.description.is_empty()),
            ("challenge", self.challenge.is_empty()),
            ("approach", self.approach.is_empty()),
            ("results", self.results.is_empty()),
            ("duration", self.duration.is_empty()),
            ("role", self.role.is_empty()),
            ("institution", self.institution.is_empty()),
        ];
        for (field, missing) in required {
            if missing {
                return Err(Error::MissingField {
                    id: self.id.to_string(),
                    field: field.to_string(),
                });
            }
        }
        // Blank list entries render as empty bullets; reject them too.
        if self.approach.iter().any(|s| s.trim().is_empty()) {
            return Err(Error::MissingField {
                id: self.id.to_string(),
                field: "approach".to_string(),
            });
        }
        if self.results.iter().any(|s| s.trim().is_empty()) {
            return Err(Error::MissingField {
                id: self.id.to_string(),
                field: "results".to_string(),
            });
        }
        Ok(())
    }

    /// True when the detail view should render the image header.
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

/// Builder used by the catalog and by tests.
///
/// Collects fields incrementally; `build` runs the same validation as the
/// registry so a half-authored record cannot escape.
#[derive(Debug, Default, Clone)]
pub struct RecordBuilder {
    id: String,
    title: String,
    image: Option<String>,
    description: String,
    partner: Option<String>,
    challenge: String,
    approach: Vec<String>,
    results: Vec<String>,
    technologies: BTreeSet<String>,
    duration: String,
    role: String,
    institution: String,
}

impl RecordBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        RecordBuilder {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.title = v.into();
        self
    }

    pub fn image(mut self, v: impl Into<String>) -> Self {
        self.image = Some(v.into());
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.description = v.into();
        self
    }

    pub fn partner(mut self, v: impl Into<String>) -> Self {
        self.partner = Some(v.into());
        self
    }

    pub fn challenge(mut self, v: impl Into<String>) -> Self {
        self.challenge = v.into();
        self
    }

    pub fn approach<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.approach = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn results<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.results = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn technologies<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.technologies = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn duration(mut self, v: impl Into<String>) -> Self {
        self.duration = v.into();
        self
    }

    pub fn role(mut self, v: impl Into<String>) -> Self {
        self.role = v.into();
        self
    }

    pub fn institution(mut self, v: impl Into<String>) -> Self {
        self.institution = v.into();
        self
    }

    /// Finish the record, validating required fields.
    pub fn build(self) -> Result<ProjectRecord> {
        let record = ProjectRecord {
            id: ProjectId::new(self.id),
            title: self.title,
            image: self.image,
            description: self.description,
            partner: self.partner,
            challenge: self.challenge,
            approach: self.approach,
            results: self.results,
            technologies: self.technologies,
            duration: self.duration,
            role: self.role,
            institution: self.institution,
        };
        record.validate()?;
        Ok(record)
    }
}
