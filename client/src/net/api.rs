//! Typed REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! Auth endpoints are consumed by the session manager. Content endpoints
//! back the public pages and dashboards; the session core never looks at
//! their payloads, they simply flow through the gateway's token attachment
//! and 401 handling like every other call.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::gateway::{ApiGateway, ApiResult};
use super::types::{
    News, Notice, Project, ProjectStatus, Publication, ScholarRecord, ScholarResponse, SiteSettings, TeamMember,
};
use crate::util::url::encode_component;

pub const ADMIN_LOGIN: &str = "auth/admin/login";
pub const MEMBER_LOGIN: &str = "auth/member/login";
pub const LOGOUT: &str = "auth/logout";
pub const CURRENT_USER: &str = "auth/me";
pub const VALIDATE_TOKEN: &str = "auth/validate";

/// Number of items shown in "recent" strips when the caller has no preference.
pub const DEFAULT_RECENT_LIMIT: usize = 3;

fn member_by_username_path(username: &str) -> String {
    format!("members/username/{}", encode_component(username))
}

fn member_scholar_path(member_id: &str) -> String {
    format!("scholar/member/{}/publications", encode_component(member_id))
}

fn recent_path(collection: &str, limit: usize) -> String {
    format!("{collection}/recent?limit={limit}")
}

/// Read-only access to the site's content collections.
#[derive(Clone, Debug)]
pub struct ContentApi {
    gateway: ApiGateway,
}

impl ContentApi {
    #[must_use]
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// # Errors
    ///
    /// Propagates any gateway failure.
    pub async fn projects(&self) -> ApiResult<Vec<Project>> {
        self.gateway.get("projects").await
    }

    /// # Errors
    ///
    /// Propagates any gateway failure.
    pub async fn publications(&self) -> ApiResult<Vec<Publication>> {
        self.gateway.get("publications").await
    }

    /// # Errors
    ///
    /// Propagates any gateway failure.
    pub async fn members(&self) -> ApiResult<Vec<TeamMember>> {
        self.gateway.get("members").await
    }

    /// # Errors
    ///
    /// Propagates any gateway failure.
    pub async fn member_by_username(&self, username: &str) -> ApiResult<TeamMember> {
        self.gateway.get(&member_by_username_path(username)).await
    }

    /// # Errors
    ///
    /// Propagates any gateway failure.
    pub async fn notices(&self) -> ApiResult<Vec<Notice>> {
        self.gateway.get("notices").await
    }

    /// # Errors
    ///
    /// Propagates any gateway failure.
    pub async fn recent_notices(&self, limit: usize) -> ApiResult<Vec<Notice>> {
        self.gateway.get(&recent_path("notices", limit)).await
    }

    /// # Errors
    ///
    /// Propagates any gateway failure.
    pub async fn news(&self) -> ApiResult<Vec<News>> {
        self.gateway.get("news").await
    }

    /// # Errors
    ///
    /// Propagates any gateway failure.
    pub async fn recent_news(&self, limit: usize) -> ApiResult<Vec<News>> {
        self.gateway.get(&recent_path("news", limit)).await
    }

    /// Site settings, or [`SiteSettings::fallback`] when none can be loaded.
    pub async fn settings(&self) -> SiteSettings {
        match self.gateway.get("settings").await {
            Ok(settings) => settings,
            Err(e) => {
                log::debug!("using default settings: {e}");
                SiteSettings::fallback()
            }
        }
    }

    /// Group publications scraped from the lab's Google Scholar profile.
    ///
    /// # Errors
    ///
    /// Any gateway failure, or [`ApiError::Scholar`] when the scraper
    /// reports one.
    ///
    /// [`ApiError::Scholar`]: super::error::ApiError::Scholar
    pub async fn scholar_publications(&self) -> ApiResult<ScholarRecord> {
        self.gateway.get::<ScholarResponse>("scholar/publications").await?.into_record()
    }

    /// A member's Google Scholar record. `None`, without a request, when
    /// the member has not linked a Scholar profile.
    ///
    /// # Errors
    ///
    /// As [`ContentApi::scholar_publications`].
    pub async fn member_scholar(&self, member: &TeamMember) -> ApiResult<Option<ScholarRecord>> {
        if member.google_scholar_link.trim().is_empty() {
            return Ok(None);
        }
        let response: ScholarResponse = self.gateway.get(&member_scholar_path(&member.id)).await?;
        response.into_record().map(Some)
    }

    /// Totals for the admin dashboard. A collection that fails to load
    /// counts as empty rather than failing the whole summary.
    pub async fn dashboard_stats(&self) -> DashboardStats {
        let (projects, publications, members) =
            futures::join!(self.projects(), self.publications(), self.members());
        DashboardStats::tally(
            &projects.unwrap_or_default(),
            publications.as_ref().map_or(0, Vec::len),
            members.as_ref().map_or(0, Vec::len),
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_projects: usize,
    pub total_publications: usize,
    pub total_members: usize,
    pub ongoing_projects: usize,
}

impl DashboardStats {
    #[must_use]
    pub fn tally(projects: &[Project], total_publications: usize, total_members: usize) -> Self {
        Self {
            total_projects: projects.len(),
            total_publications,
            total_members,
            ongoing_projects: projects.iter().filter(|p| p.status == ProjectStatus::Ongoing).count(),
        }
    }
}
