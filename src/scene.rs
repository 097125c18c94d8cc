//! Scene object graph collaborator and the behavior registry.
//!
//! Objects are addressed by name, the way the external controller sees them.
//! Behavior attachment goes through a declared-name registry populated at
//! startup rather than any runtime type search.

use std::collections::BTreeMap;

use crate::assets::MaterialAsset;
use crate::error::BridgeError;

/// What gets applied to an object's renderer: a shared asset referenced by
/// path, or a per-object instance carried by value.
#[derive(Debug, Clone, PartialEq)]
pub enum AppliedMaterial {
    Shared { name: String, path: String },
    Instance(MaterialAsset),
}

impl AppliedMaterial {
    pub fn name(&self) -> &str {
        match self {
            AppliedMaterial::Shared { name, .. } => name,
            AppliedMaterial::Instance(mat) => &mat.name,
        }
    }
}

/// The live object graph, reduced to what commands need: existence checks,
/// component attachment, material assignment.
pub trait SceneObjects {
    fn exists(&self, name: &str) -> bool;
    fn attach_component(&mut self, object: &str, component: &str) -> Result<(), BridgeError>;
    fn assign_material(&mut self, object: &str, material: AppliedMaterial)
        -> Result<(), BridgeError>;
}

/// A behavior the bridge is allowed to attach, declared ahead of time.
#[derive(Debug, Clone)]
pub struct BehaviorDescriptor {
    /// Component name the host editor instantiates.
    pub component_name: String,
    /// Source asset backing the behavior, when there is one.
    pub source_path: Option<String>,
}

/// Declared behavior name → descriptor. Populated at startup by the host;
/// attach-behavior consults this instead of searching types at runtime.
#[derive(Debug, Default)]
pub struct BehaviorRegistry {
    entries: BTreeMap<String, BehaviorDescriptor>,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, descriptor: BehaviorDescriptor) {
        self.entries.insert(name.to_string(), descriptor);
    }

    pub fn lookup(&self, name: &str) -> Option<&BehaviorDescriptor> {
        self.entries.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }
}

/// In-memory object graph for tests and headless hosts.
#[derive(Default)]
pub struct MemoryScene {
    objects: BTreeMap<String, SceneObject>,
}

#[derive(Debug, Default, Clone)]
pub struct SceneObject {
    pub components: Vec<String>,
    pub material: Option<AppliedMaterial>,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object(mut self, name: &str) -> Self {
        self.objects.insert(name.to_string(), SceneObject::default());
        self
    }

    pub fn object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.get(name)
    }
}

impl SceneObjects for MemoryScene {
    fn exists(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    fn attach_component(&mut self, object: &str, component: &str) -> Result<(), BridgeError> {
        let obj = self
            .objects
            .get_mut(object)
            .ok_or_else(|| BridgeError::NotFound(format!("object '{object}'")))?;
        obj.components.push(component.to_string());
        Ok(())
    }

    fn assign_material(
        &mut self,
        object: &str,
        material: AppliedMaterial,
    ) -> Result<(), BridgeError> {
        let obj = self
            .objects
            .get_mut(object)
            .ok_or_else(|| BridgeError::NotFound(format!("object '{object}'")))?;
        obj.material = Some(material);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_and_assign_track_state() {
        let mut scene = MemoryScene::new().with_object("Player");
        assert!(scene.exists("Player"));
        assert!(!scene.exists("Ghost"));

        scene.attach_component("Player", "PlayerMovement").expect("attach");
        scene
            .assign_material(
                "Player",
                AppliedMaterial::Shared {
                    name: "Gold".to_string(),
                    path: "Assets/Materials/Gold.mat".to_string(),
                },
            )
            .expect("assign");

        let obj = scene.object("Player").expect("object");
        assert_eq!(obj.components, vec!["PlayerMovement".to_string()]);
        assert_eq!(obj.material.as_ref().map(|m| m.name()), Some("Gold"));

        assert_eq!(
            scene
                .attach_component("Ghost", "X")
                .expect_err("missing")
                .kind(),
            "not_found"
        );
    }

    #[test]
    fn registry_lookup_is_exact() {
        let mut registry = BehaviorRegistry::new();
        registry.register(
            "PlayerMovement",
            BehaviorDescriptor {
                component_name: "PlayerMovement".to_string(),
                source_path: Some("Assets/Scripts/PlayerMovement.cs".to_string()),
            },
        );
        assert!(registry.lookup("PlayerMovement").is_some());
        assert!(registry.lookup("playermovement").is_none());
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["PlayerMovement"]);
    }
}
