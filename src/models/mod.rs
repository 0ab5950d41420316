use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Closed set of catalog categories shown on the portfolio page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    Dashboard,
    Automation,
    AiAgent,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Dashboard => "dashboard",
            ProjectType::Automation => "automation",
            ProjectType::AiAgent => "ai-agent",
        }
    }
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dashboard" => Ok(ProjectType::Dashboard),
            "automation" => Ok(ProjectType::Automation),
            "ai-agent" => Ok(ProjectType::AiAgent),
            other => Err(format!("Unknown project type: {}", other)),
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry managed in the admin panel and rendered on the public site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub image_url: Option<String>,
    pub embed_url: Option<String>,
    pub benefits: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub is_active: bool,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create payload. Required fields stay `Option` so the service can report
/// every missing field at once instead of failing on the first one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub project_type: Option<String>,
    pub image_url: Option<String>,
    pub embed_url: Option<String>,
    pub benefits: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub is_active: Option<bool>,
    pub featured: Option<bool>,
}

/// Partial update payload. The outer `Option` distinguishes "field absent,
/// leave the stored value alone" from an explicit value; nullable columns use
/// a second `Option` so a literal JSON `null` can clear them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub project_type: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub embed_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub benefits: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub technologies: Option<Option<Vec<String>>>,
    pub is_active: Option<bool>,
    pub featured: Option<bool>,
}

/// Closed set of interest categories on the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKind {
    Dashboards,
    Automation,
    AiAgents,
    Consulting,
    Other,
}

impl ServiceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Dashboards => "dashboards",
            ServiceKind::Automation => "automation",
            ServiceKind::AiAgents => "ai-agents",
            ServiceKind::Consulting => "consulting",
            ServiceKind::Other => "other",
        }
    }
}

impl FromStr for ServiceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dashboards" => Ok(ServiceKind::Dashboards),
            "automation" => Ok(ServiceKind::Automation),
            "ai-agents" => Ok(ServiceKind::AiAgents),
            "consulting" => Ok(ServiceKind::Consulting),
            "other" => Ok(ServiceKind::Other),
            other => Err(format!("Unknown service: {}", other)),
        }
    }
}

/// A lead captured through the public contact form. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub service: ServiceKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub service: Option<String>,
    pub message: Option<String>,
}

/// Editable content block for the "about" section of the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutSection {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub paragraphs: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAbout {
    pub title: Option<String>,
    pub description: Option<String>,
    pub paragraphs: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAbout {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub paragraphs: Option<Option<Vec<String>>>,
}

/// Maps a present-but-null JSON value to `Some(None)` while `#[serde(default)]`
/// keeps an absent field as `None`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
