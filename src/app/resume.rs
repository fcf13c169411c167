use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::{ResumeError, Result};
use super::section::Section;

/// Contact and identity block at the top of a resume.
///
/// Unlike the nine list sections this is a singleton record. Merge-updates
/// are plain field assignment; `update_contact` covers the common case of
/// rewriting the scalar fields while leaving `location` and `profiles`
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Basics {
    pub name: String,
    pub label: String,
    pub picture: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub summary: String,
    pub location: Location,
    pub profiles: Section<Profile>,
}

impl Basics {
    pub fn update_contact(
        &mut self,
        name: String,
        label: String,
        picture: String,
        email: String,
        phone: String,
        website: String,
        summary: String,
    ) {
        self.name = name;
        self.label = label;
        self.picture = picture;
        self.email = email;
        self.phone = phone;
        self.website = website;
        self.summary = summary;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    pub address: String,
    pub postal_code: String,
    pub city: String,
    pub country_code: String,
    pub region: String,
}

impl Location {
    pub fn update(
        &mut self,
        address: String,
        postal_code: String,
        city: String,
        country_code: String,
        region: String,
    ) {
        self.address = address;
        self.postal_code = postal_code;
        self.city = city;
        self.country_code = country_code;
        self.region = region;
    }
}

/// A social network profile under `basics`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub network: String,
    pub username: String,
    pub url: String,
}

/// One employment entry. `end_date` is `None` for a current position and
/// serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntry {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub website: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerEntry {
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub website: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub study_type: String,
    #[serde(default)]
    pub gpa: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwardEntry {
    #[serde(default)]
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub awarder: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub publisher: String,
    pub release_date: NaiveDate,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillEntry {
    pub name: String,
    pub level: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageEntry {
    pub language: String,
    pub fluency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterestEntry {
    pub name: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceEntry {
    pub name: String,
    pub reference: String,
}

/// An in-memory JSON Resume document.
///
/// All ten sections are always present; a fresh document starts with every
/// section empty. Sections are public and expose the shared [`Section`]
/// CRUD surface directly, e.g. `resume.work.add(..)`,
/// `resume.education.remove(3)`, `resume.basics.profiles.update(0, ..)`.
///
/// `source_path` tracks where the document was opened from or last saved
/// to; it is never part of the serialized document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resume {
    #[serde(skip)]
    source_path: Option<PathBuf>,
    pub basics: Basics,
    pub work: Section<WorkEntry>,
    pub volunteer: Section<VolunteerEntry>,
    pub education: Section<EducationEntry>,
    pub awards: Section<AwardEntry>,
    pub publications: Section<PublicationEntry>,
    pub skills: Section<SkillEntry>,
    pub languages: Section<LanguageEntry>,
    pub interests: Section<InterestEntry>,
    pub references: Section<ReferenceEntry>,
}

impl Resume {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn set_source_path(&mut self, path: impl Into<PathBuf>) {
        self.source_path = Some(path.into());
    }

    /// Opens the JSON resume at `path`, replacing all ten sections with the
    /// file's contents and recording `path` as the destination for `save`.
    ///
    /// Sections absent from the file come back empty. A file that is not
    /// valid JSON, or whose records lack required fields, fails with
    /// `MalformedDocument` and leaves `self` unchanged.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ResumeError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ResumeError::ReadFailure {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let mut parsed: Resume =
            serde_json::from_str(&contents).map_err(|e| ResumeError::MalformedDocument {
                path: path.to_path_buf(),
                source: e,
            })?;
        parsed.source_path = Some(path.to_path_buf());
        *self = parsed;
        Ok(())
    }

    /// Convenience constructor: a new document loaded from `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut resume = Self::new();
        resume.open(path)?;
        Ok(resume)
    }

    /// Writes the document as pretty-printed JSON to `source_path`,
    /// overwriting any existing content. Dates render as ISO-8601 strings;
    /// absent end dates render as `null`.
    pub fn save(&self) -> Result<()> {
        let path = self
            .source_path
            .as_ref()
            .ok_or(ResumeError::NoDestination)?;

        let json = serde_json::to_string_pretty(self).map_err(|e| ResumeError::WriteFailure {
            path: path.clone(),
            source: e.into(),
        })?;
        fs::write(path, json).map_err(|e| ResumeError::WriteFailure {
            path: path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Sets `source_path` to `path`, then saves.
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        self.source_path = Some(path.into());
        self.save()
    }
}
