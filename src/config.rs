use std::path::PathBuf;

use crate::material::ShadingBackend;

pub const DEFAULT_ASSET_ROOT: &str = "Assets";
pub const DEFAULT_SCRIPTS_FOLDER: &str = "Assets/Scripts";
pub const DEFAULT_MATERIALS_FOLDER: &str = "Assets/Materials";

/// Bridge-wide settings, resolved once at startup.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Directory the asset root folder lives under on disk.
    pub project_dir: PathBuf,
    /// Name of the asset root folder ("Assets" by convention).
    pub asset_root: String,
    /// Render pipeline the project is configured for; newly created
    /// materials use this backend's shaders.
    pub render_pipeline: ShadingBackend,
    /// Default folder for created text assets.
    pub scripts_folder: String,
    /// Default folder for created/shared materials.
    pub materials_folder: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            project_dir: PathBuf::from("."),
            asset_root: DEFAULT_ASSET_ROOT.to_string(),
            render_pipeline: ShadingBackend::Legacy,
            scripts_folder: DEFAULT_SCRIPTS_FOLDER.to_string(),
            materials_folder: DEFAULT_MATERIALS_FOLDER.to_string(),
        }
    }
}

impl BridgeConfig {
    /// Resolve configuration from `AXON_*` environment variables, falling
    /// back to defaults for anything unset or empty.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let project_dir = std::env::var("AXON_PROJECT_DIR")
            .ok()
            .map(PathBuf::from)
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(defaults.project_dir);
        let asset_root = std::env::var("AXON_ASSET_ROOT")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.asset_root);
        let render_pipeline = std::env::var("AXON_RENDER_PIPELINE")
            .ok()
            .and_then(|v| ShadingBackend::parse(&v))
            .unwrap_or(defaults.render_pipeline);
        let mut config = Self {
            project_dir,
            asset_root,
            render_pipeline,
            scripts_folder: String::new(),
            materials_folder: String::new(),
        };
        config.scripts_folder = format!("{}/Scripts", config.asset_root);
        config.materials_folder = format!("{}/Materials", config.asset_root);
        config
    }

    pub fn asset_root(&self) -> crate::paths::AssetRoot {
        crate::paths::AssetRoot::new(&self.asset_root, &self.project_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_editor_conventions() {
        let config = BridgeConfig::default();
        assert_eq!(config.asset_root, "Assets");
        assert_eq!(config.scripts_folder, "Assets/Scripts");
        assert_eq!(config.materials_folder, "Assets/Materials");
        assert_eq!(config.render_pipeline, ShadingBackend::Legacy);
    }
}
