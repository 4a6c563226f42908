//! Content model
//!
//! The résumé is decoded once from its JSON document and never mutated
//! afterwards. Sections keep a fixed display order (summary, experience,
//! projects, education, skills); items keep their source order. Visibility
//! flags are data only: filtering happens at render time.

use crate::error::ResumeError;
use serde::{Deserialize, Deserializer};
use std::path::Path;

/// Sample résumé shown when no document is configured
const SAMPLE_RESUME: &str = include_str!("../assets/resume.json");

fn shown() -> bool {
    true
}

/// Treat an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A labelled link
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Link {
    pub label: String,
    pub href: String,
}

/// Who the résumé is about (the `basics` object)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Identity {
    pub name: String,
    pub headline: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub url: Link,
}

impl Identity {
    /// Non-empty contact fields in display order: location, email, phone
    pub fn contact_fields(&self) -> Vec<&str> {
        [&self.location, &self.email, &self.phone]
            .into_iter()
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExperienceItem {
    pub id: String,
    #[serde(default = "shown")]
    pub visible: bool,
    pub company: String,
    pub position: String,
    pub location: String,
    pub date: String,
    pub summary: String,
    pub url: Link,
}

impl Default for ExperienceItem {
    fn default() -> Self {
        Self {
            id: String::new(),
            visible: true,
            company: String::new(),
            position: String::new(),
            location: String::new(),
            date: String::new(),
            summary: String::new(),
            url: Link::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationItem {
    pub id: String,
    #[serde(default = "shown")]
    pub visible: bool,
    pub institution: String,
    pub study_type: String,
    pub area: String,
    pub score: String,
    pub date: String,
    pub summary: String,
    pub url: Link,
}

impl Default for EducationItem {
    fn default() -> Self {
        Self {
            id: String::new(),
            visible: true,
            institution: String::new(),
            study_type: String::new(),
            area: String::new(),
            score: String::new(),
            date: String::new(),
            summary: String::new(),
            url: Link::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SkillItem {
    pub id: String,
    #[serde(default = "shown")]
    pub visible: bool,
    pub name: String,
    pub level: i8,
    #[serde(deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,
}

impl Default for SkillItem {
    fn default() -> Self {
        Self {
            id: String::new(),
            visible: true,
            name: String::new(),
            level: 0,
            keywords: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProjectItem {
    pub id: String,
    #[serde(default = "shown")]
    pub visible: bool,
    pub name: String,
    pub description: String,
    pub date: String,
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,
    pub url: Link,
}

impl Default for ProjectItem {
    fn default() -> Self {
        Self {
            id: String::new(),
            visible: true,
            name: String::new(),
            description: String::new(),
            date: String::new(),
            summary: String::new(),
            keywords: Vec::new(),
            url: Link::default(),
        }
    }
}

/// Attributes every section carries regardless of its kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMeta {
    pub id: String,
    /// Display name, used as the section title
    pub name: String,
    /// Column count hint; only the skills grid uses it
    pub columns: Option<usize>,
    pub separate_links: bool,
    pub visible: bool,
}

impl Default for SectionMeta {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            columns: None,
            separate_links: false,
            visible: true,
        }
    }
}

/// The kind-specific content of a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionKind {
    Summary(String),
    Experience(Vec<ExperienceItem>),
    Education(Vec<EducationItem>),
    Skills(Vec<SkillItem>),
    Projects(Vec<ProjectItem>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub meta: SectionMeta,
    pub kind: SectionKind,
}

impl Section {
    pub fn new(name: impl Into<String>, kind: SectionKind) -> Self {
        Self {
            meta: SectionMeta {
                name: name.into(),
                ..SectionMeta::default()
            },
            kind,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.meta.visible = false;
        self
    }

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.meta.columns = Some(columns);
        self
    }
}

/// A complete résumé: identity plus sections in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resume {
    pub identity: Identity,
    pub sections: Vec<Section>,
}

impl Resume {
    pub fn new(identity: Identity, sections: Vec<Section>) -> Self {
        Self { identity, sections }
    }

    /// Decode a résumé from its JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ResumeError> {
        let document: ResumeDocument = serde_json::from_str(json)?;
        Ok(document.into())
    }

    /// Read and decode a résumé file
    pub fn from_path(path: &Path) -> Result<Self, ResumeError> {
        let json = std::fs::read_to_string(path).map_err(|source| ResumeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The built-in sample résumé
    pub fn sample() -> Result<Self, ResumeError> {
        Self::from_json_str(SAMPLE_RESUME)
    }
}

// Wire shape of the JSON document. Sections arrive as an object keyed by
// kind; absent sections are simply left out of the model.

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ResumeDocument {
    basics: Identity,
    sections: SectionsDocument,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SectionsDocument {
    summary: Option<SectionDocument<SummaryBody>>,
    experience: Option<SectionDocument<ItemsBody<ExperienceItem>>>,
    projects: Option<SectionDocument<ItemsBody<ProjectItem>>>,
    education: Option<SectionDocument<ItemsBody<EducationItem>>>,
    skills: Option<SectionDocument<ItemsBody<SkillItem>>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SectionDocument<B> {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    columns: i64,
    #[serde(default)]
    separate_links: bool,
    #[serde(default = "shown")]
    visible: bool,
    #[serde(flatten)]
    body: B,
}

impl<B> SectionDocument<B> {
    fn into_section(self, kind: impl FnOnce(B) -> SectionKind) -> Section {
        Section {
            meta: SectionMeta {
                id: self.id,
                name: self.name,
                columns: usize::try_from(self.columns).ok().filter(|&c| c > 0),
                separate_links: self.separate_links,
                visible: self.visible,
            },
            kind: kind(self.body),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SummaryBody {
    content: String,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct ItemsBody<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    items: Vec<T>,
}

impl From<ResumeDocument> for Resume {
    fn from(document: ResumeDocument) -> Self {
        let SectionsDocument {
            summary,
            experience,
            projects,
            education,
            skills,
        } = document.sections;

        let sections = [
            summary.map(|s| s.into_section(|b| SectionKind::Summary(b.content))),
            experience.map(|s| s.into_section(|b| SectionKind::Experience(b.items))),
            projects.map(|s| s.into_section(|b| SectionKind::Projects(b.items))),
            education.map(|s| s.into_section(|b| SectionKind::Education(b.items))),
            skills.map(|s| s.into_section(|b| SectionKind::Skills(b.items))),
        ]
        .into_iter()
        .flatten()
        .collect();

        Resume::new(document.basics, sections)
    }
}
