//! Pipeline resource declarations.

use serde::{Deserialize, Serialize};

/// The resources declared by a pipeline definition.
///
/// Only the `resources` section is modelled; everything else in the
/// document (jobs, groups, custom resource types) is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    /// Resources in declaration order.
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl Pipeline {
    /// Resources of the given kind, in declaration order.
    pub fn resources_of<'a>(&'a self, kind: &'a ResourceKind) -> impl Iterator<Item = &'a Resource> {
        self.resources.iter().filter(move |r| r.is(kind))
    }

    /// Names declared more than once.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut dupes = Vec::new();
        for resource in &self.resources {
            let name = resource.name.as_str();
            if !seen.insert(name) && !dupes.contains(&name) {
                dupes.push(name);
            }
        }
        dupes
    }
}

/// A declared pipeline resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Resource name; doubles as the directory its metadata lives in.
    pub name: String,
    /// Resource type tag. `None` when the declaration has no `type`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ResourceKind>,
    /// Branch tracked by a git resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Type-specific source configuration.
    #[serde(default)]
    pub source: ResourceSource,
}

impl Resource {
    pub fn new(name: impl Into<String>, kind: ResourceKind) -> Self {
        Self {
            name: name.into(),
            kind: Some(kind),
            branch: None,
            source: ResourceSource::default(),
        }
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.source.repository = Some(repository.into());
        self
    }

    /// Check whether this resource has the given kind.
    pub fn is(&self, kind: &ResourceKind) -> bool {
        self.kind.as_ref() == Some(kind)
    }

    /// Branch from the resource itself, falling back to `source.branch`.
    pub fn effective_branch(&self) -> Option<&str> {
        self.branch
            .as_deref()
            .or(self.source.branch.as_deref())
    }
}

/// Source configuration of a resource.
///
/// Only the keys the manifest needs are kept; unknown keys are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceSource {
    /// Image repository URL for image resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    /// Branch for git resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

/// Resource type tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResourceKind {
    Git,
    RegistryImage,
    DockerImage,
    S3,
    /// Any tag the manifest does not know about.
    Other(String),
}

impl ResourceKind {
    pub fn as_str(&self) -> &str {
        match self {
            ResourceKind::Git => "git",
            ResourceKind::RegistryImage => "registry-image",
            ResourceKind::DockerImage => "docker-image",
            ResourceKind::S3 => "s3",
            ResourceKind::Other(tag) => tag,
        }
    }

    /// Whether the artifact extractor knows how to read this kind.
    pub fn is_artifact(&self) -> bool {
        matches!(
            self,
            ResourceKind::RegistryImage | ResourceKind::DockerImage | ResourceKind::S3
        )
    }
}

impl From<&str> for ResourceKind {
    fn from(tag: &str) -> Self {
        match tag {
            "git" => ResourceKind::Git,
            "registry-image" => ResourceKind::RegistryImage,
            "docker-image" => ResourceKind::DockerImage,
            "s3" => ResourceKind::S3,
            other => ResourceKind::Other(other.to_string()),
        }
    }
}

impl From<String> for ResourceKind {
    fn from(tag: String) -> Self {
        ResourceKind::from(tag.as_str())
    }
}

impl From<ResourceKind> for String {
    fn from(kind: ResourceKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ResourceKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ResourceKind::from(s.trim()))
    }
}
