//! Asset persistence collaborator: materials and textures.
//!
//! Text assets live on the project filesystem (`crate::fs`); materials and
//! textures go through the host editor's asset database, abstracted here so
//! the command layer is testable without a live editor.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::BridgeError;
use crate::material::ShadingBackend;

/// A material asset: shader identity plus the concrete property values the
/// bridge has written. Property keys are the shader's own names; abstract
/// slot resolution happens before anything lands here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialAsset {
    pub name: String,
    pub shader: String,
    #[serde(default)]
    pub floats: BTreeMap<String, f32>,
    #[serde(default)]
    pub colors: BTreeMap<String, [f32; 4]>,
    #[serde(default)]
    pub textures: BTreeMap<String, TextureBinding>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextureBinding {
    pub texture: String,
    pub tiling: [f32; 2],
    pub offset: [f32; 2],
}

impl MaterialAsset {
    pub fn new(name: impl Into<String>, shader: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shader: shader.into(),
            floats: BTreeMap::new(),
            colors: BTreeMap::new(),
            textures: BTreeMap::new(),
        }
    }

    /// Backend family of this material, classified from its shader identity.
    pub fn backend(&self) -> ShadingBackend {
        ShadingBackend::classify(&self.shader)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Material,
    Texture,
    Text,
}

impl AssetKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "material" | "materials" => Some(AssetKind::Material),
            "texture" | "textures" => Some(AssetKind::Texture),
            "text" | "script" | "scripts" => Some(AssetKind::Text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AssetEntry {
    pub name: String,
    pub path: String,
    pub kind: AssetKind,
}

/// The host editor's asset database, reduced to what the command layer
/// needs: material load/save and texture lookup by normalized logical path.
pub trait AssetStore {
    fn material_exists(&self, logical: &str) -> bool;
    /// Owned copy of the stored material; mutate it and `save_material` back.
    fn load_material(&self, logical: &str) -> Result<MaterialAsset, BridgeError>;
    fn save_material(&mut self, logical: &str, material: &MaterialAsset)
        -> Result<(), BridgeError>;
    fn texture_exists(&self, logical: &str) -> bool;
    /// Materials and textures the store knows about, sorted by path.
    fn list(&self) -> Vec<AssetEntry>;
}

/// In-memory store used by tests and headless hosts.
#[derive(Default)]
pub struct MemoryAssetStore {
    materials: BTreeMap<String, MaterialAsset>,
    textures: BTreeSet<String>,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_texture(mut self, logical: &str) -> Self {
        self.textures.insert(logical.to_string());
        self
    }

    pub fn with_material(mut self, logical: &str, material: MaterialAsset) -> Self {
        self.materials.insert(logical.to_string(), material);
        self
    }

    pub fn material(&self, logical: &str) -> Option<&MaterialAsset> {
        self.materials.get(logical)
    }
}

impl AssetStore for MemoryAssetStore {
    fn material_exists(&self, logical: &str) -> bool {
        self.materials.contains_key(logical)
    }

    fn load_material(&self, logical: &str) -> Result<MaterialAsset, BridgeError> {
        self.materials
            .get(logical)
            .cloned()
            .ok_or_else(|| BridgeError::NotFound(format!("material '{logical}'")))
    }

    fn save_material(
        &mut self,
        logical: &str,
        material: &MaterialAsset,
    ) -> Result<(), BridgeError> {
        self.materials.insert(logical.to_string(), material.clone());
        Ok(())
    }

    fn texture_exists(&self, logical: &str) -> bool {
        self.textures.contains(logical)
    }

    fn list(&self) -> Vec<AssetEntry> {
        let mut entries: Vec<AssetEntry> = self
            .materials
            .iter()
            .map(|(path, mat)| AssetEntry {
                name: mat.name.clone(),
                path: path.clone(),
                kind: AssetKind::Material,
            })
            .chain(self.textures.iter().map(|path| AssetEntry {
                name: crate::paths::file_stem(path).to_string(),
                path: path.clone(),
                kind: AssetKind::Texture,
            }))
            .collect();
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_backend_follows_shader() {
        let mat = MaterialAsset::new("Gold", "Universal Render Pipeline/Lit");
        assert_eq!(mat.backend(), ShadingBackend::Universal);
        let mat = MaterialAsset::new("Old", "Standard");
        assert_eq!(mat.backend(), ShadingBackend::Legacy);
    }

    #[test]
    fn memory_store_load_save_roundtrip() {
        let mut store = MemoryAssetStore::new();
        assert!(!store.material_exists("Assets/Materials/Gold.mat"));
        assert_eq!(
            store
                .load_material("Assets/Materials/Gold.mat")
                .expect_err("missing")
                .kind(),
            "not_found"
        );

        let mut mat = MaterialAsset::new("Gold", "Standard");
        mat.floats.insert("_Metallic".to_string(), 1.0);
        store
            .save_material("Assets/Materials/Gold.mat", &mat)
            .expect("save");
        let loaded = store
            .load_material("Assets/Materials/Gold.mat")
            .expect("load");
        assert_eq!(loaded.floats.get("_Metallic"), Some(&1.0));
    }

    #[test]
    fn listing_covers_both_kinds_sorted() {
        let store = MemoryAssetStore::new()
            .with_texture("Assets/Textures/brick.png")
            .with_material(
                "Assets/Materials/Brick.mat",
                MaterialAsset::new("Brick", "Standard"),
            );
        let entries = store.list();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, AssetKind::Material);
        assert_eq!(entries[1].kind, AssetKind::Texture);
        assert_eq!(entries[1].name, "brick");
    }
}
