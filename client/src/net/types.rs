//! Wire DTOs shared with the research-group REST API.
//!
//! DESIGN
//! ======
//! Field names follow the back end's camelCase JSON. Auth types are
//! interpreted by the session core; content types are only rendered.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::error::ApiError;

// =============================================================================
// AUTH
// =============================================================================

/// Role carried by every issued user descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Member,
}

/// Identity issued by the back end at login. Replaced wholesale, never patched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: Role,
}

/// Successful login payload from `auth/admin/login` and `auth/member/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthPayload {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct AdminCredentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct MemberCredentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Response body of `auth/validate`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenValidity {
    pub valid: bool,
}

// =============================================================================
// CONTENT
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    TeamLeader,
    Faculty,
    Researcher,
    Student,
    Staff,
}

impl Position {
    /// Human-readable label used on team listings.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::TeamLeader => "Team Leader",
            Self::Faculty => "Faculty",
            Self::Researcher => "Researcher",
            Self::Student => "Student",
            Self::Staff => "Staff",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub username: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub position: Position,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub research_area: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub photo_url: String,
    #[serde(default)]
    pub google_scholar_link: String,
    #[serde(default)]
    pub expertise: Vec<String>,
    #[serde(default)]
    pub joined_date: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Ongoing,
    Completed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub research_link: String,
    pub status: ProjectStatus,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    pub year: i32,
    #[serde(default)]
    pub journal: String,
    #[serde(default)]
    pub pdf_link: Option<String>,
    #[serde(default)]
    pub member_id: Option<String>,
    #[serde(default)]
    pub cited_by: Option<u32>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticePriority {
    #[default]
    Normal,
    Important,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub id: String,
    pub title: String,
    pub content: String,
    pub date: String,
    #[serde(default)]
    pub priority: NoticePriority,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub date: String,
    #[serde(default)]
    pub author: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub id: String,
    pub google_scholar_url: Option<String>,
    pub about_us: Option<String>,
    pub updated_at: String,
}

// =============================================================================
// SCHOLAR
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScholarProfile {
    pub name: String,
    #[serde(default)]
    pub affiliation: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub total_citations: u32,
    #[serde(default)]
    pub h_index: u32,
    #[serde(default)]
    pub i10_index: u32,
}

/// Scholar rows are scraped text, so numeric-looking fields stay strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScholarPublication {
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub journal: String,
    #[serde(default)]
    pub cited_by: String,
    #[serde(default)]
    pub article_url: String,
    #[serde(default)]
    pub scholar_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScholarMemberRef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub google_scholar_link: String,
}

/// Envelope returned by every `scholar/*` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScholarResponse {
    pub success: bool,
    #[serde(default)]
    pub member: Option<ScholarMemberRef>,
    #[serde(default)]
    pub profile: Option<ScholarProfile>,
    #[serde(default)]
    pub publications: Vec<ScholarPublication>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Fallback text when a failed Scholar envelope carries no reason.
pub const SCHOLAR_FAILURE: &str = "Failed to fetch publications";

/// The usable part of a successful Scholar envelope.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScholarRecord {
    pub profile: Option<ScholarProfile>,
    pub publications: Vec<ScholarPublication>,
}

impl ScholarResponse {
    /// Unwrap the envelope, turning `success: false` into an error.
    ///
    /// # Errors
    ///
    /// [`ApiError::Scholar`] carrying `error`, then `message`, then a
    /// generic reason.
    pub fn into_record(self) -> Result<ScholarRecord, ApiError> {
        if !self.success {
            let reason = self.error.or(self.message).filter(|m| !m.trim().is_empty());
            return Err(ApiError::Scholar(reason.unwrap_or_else(|| SCHOLAR_FAILURE.to_owned())));
        }
        Ok(ScholarRecord { profile: self.profile, publications: self.publications })
    }
}

// =============================================================================
// SETTINGS FALLBACK
// =============================================================================

pub const DEFAULT_ABOUT_US: &str = "Welcome to our research group. Our work spans environmental \
remediation, resource recovery, nanomaterials, and wastewater treatment technologies.";

impl SiteSettings {
    /// Settings shown when the back end has none or cannot be reached.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            id: "default".to_owned(),
            google_scholar_url: None,
            about_us: Some(DEFAULT_ABOUT_US.to_owned()),
            updated_at: String::new(),
        }
    }
}
