//! Typed resume record

use serde::{Deserialize, Deserializer, Serialize};

use crate::Result;

/// Root resume entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    /// Full name
    #[serde(default)]
    pub name: Option<String>,

    /// Professional title shown under the name
    #[serde(default)]
    pub title: Option<String>,

    /// Contact block
    #[serde(default)]
    pub contact: Option<ContactInfo>,

    /// Professional summary paragraph
    #[serde(default)]
    pub summary: Option<String>,

    /// Skills in display order
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,

    /// Work history, most recent first
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: Vec<JobEntry>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<EducationEntry>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub certifications: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<ProjectEntry>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub awards: Vec<String>,
}

impl ResumeRecord {
    /// Decode a record from an untyped JSON value.
    ///
    /// Unknown keys are ignored. Call [`crate::validate`] first: a value that
    /// validates without errors always decodes.
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        Ok(Self::deserialize(value)?)
    }

    /// Parse a record from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Contact block, or an empty one when absent
    pub fn contact_or_default(&self) -> ContactInfo {
        self.contact.clone().unwrap_or_default()
    }
}

/// Contact information; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    /// Profile path without scheme, e.g. `linkedin.com/in/jane`
    #[serde(default)]
    pub linkedin: Option<String>,

    #[serde(default)]
    pub github: Option<String>,

    #[serde(default)]
    pub website: Option<String>,
}

/// One position in the work history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobEntry {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub company: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    /// Free text, never parsed
    #[serde(default)]
    pub start_date: Option<String>,

    #[serde(default)]
    pub end_date: Option<String>,

    /// Bullet points. `None` renders no list, `Some(vec![])` an empty one.
    #[serde(default)]
    pub description: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub degree: Option<String>,

    #[serde(default)]
    pub school: Option<String>,

    #[serde(default)]
    pub year: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Rendered on one line joined with ", "
    #[serde(default)]
    pub technologies: Option<Vec<String>>,
}

/// Treat an explicit JSON `null` the same as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
