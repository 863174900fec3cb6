//! Version information from the `version` endpoint, used for the update status.

use serde::Deserialize;

/// Versions of every Pi-hole component.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiVersions {
    pub api: ComponentVersion,
    pub core: ComponentVersion,
    pub ftl: ComponentVersion,
    pub web: ComponentVersion,
}

/// Version of a single component. Release builds carry a tag; development
/// builds only a branch and commit hash.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ComponentVersion {
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub tag: String,
}

impl ComponentVersion {
    /// Returns true for builds that are not a tagged release.
    pub fn is_development(&self) -> bool {
        self.tag.is_empty()
    }

    /// Text shown for the component: the tag, or `branch-hash` for development builds.
    pub fn display(&self) -> String {
        if self.is_development() {
            format!("{}-{}", self.branch, self.hash)
        } else {
            self.tag.clone()
        }
    }
}
