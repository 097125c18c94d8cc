use crate::assets::AssetStore;
use crate::config::BridgeConfig;
use crate::fs::ProjectFs;
use crate::material::ShaderCatalog;
use crate::paths::AssetRoot;
use crate::scene::{BehaviorRegistry, SceneObjects};

/// Everything a command handler may touch: configuration, the injected
/// editor collaborators, and the startup-populated registries. Handlers hold
/// no other state, so consecutive commands only share what lives here.
pub struct EditorHost {
    pub config: BridgeConfig,
    pub fs: Box<dyn ProjectFs>,
    pub assets: Box<dyn AssetStore>,
    pub scene: Box<dyn SceneObjects>,
    pub behaviors: BehaviorRegistry,
    pub shaders: ShaderCatalog,
}

impl EditorHost {
    pub fn new(
        config: BridgeConfig,
        fs: Box<dyn ProjectFs>,
        assets: Box<dyn AssetStore>,
        scene: Box<dyn SceneObjects>,
    ) -> Self {
        Self {
            config,
            fs,
            assets,
            scene,
            behaviors: BehaviorRegistry::new(),
            shaders: ShaderCatalog::default(),
        }
    }

    pub fn asset_root(&self) -> AssetRoot {
        self.config.asset_root()
    }

    /// Capability probe for a material's shader, fed to the property
    /// resolver.
    pub fn shader_caps<'a>(&'a self, shader: &'a str) -> impl Fn(&str) -> bool + 'a {
        move |key: &str| self.shaders.has_property(shader, key)
    }
}
