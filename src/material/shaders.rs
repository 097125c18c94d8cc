use std::collections::HashMap;

/// Built-in shader capability catalog: which concrete properties each stock
/// shader declares. A material's capability set is its shader's property
/// list; the property resolver probes candidates against it.
///
/// Hosts with custom shaders register them at startup; the catalog is
/// read-only while commands run.
#[derive(Debug, Clone)]
pub struct ShaderCatalog {
    shaders: HashMap<String, Vec<String>>,
}

const STANDARD: &[&str] = &[
    "_Color",
    "_MainTex",
    "_Cutoff",
    "_Glossiness",
    "_Metallic",
    "_MetallicGlossMap",
    "_BumpScale",
    "_BumpMap",
    "_Parallax",
    "_ParallaxMap",
    "_OcclusionStrength",
    "_OcclusionMap",
    "_EmissionColor",
    "_EmissionMap",
    "_Mode",
    "_SrcBlend",
    "_DstBlend",
    "_ZWrite",
];

const URP_LIT: &[&str] = &[
    "_BaseColor",
    "_BaseMap",
    "_Cutoff",
    "_Smoothness",
    "_Metallic",
    "_MetallicGlossMap",
    "_BumpScale",
    "_BumpMap",
    "_Parallax",
    "_ParallaxMap",
    "_OcclusionStrength",
    "_OcclusionMap",
    "_EmissionColor",
    "_EmissionMap",
    "_Surface",
    "_Blend",
    "_ZWrite",
];

// Simple Lit drops the metallic workflow entirely.
const URP_SIMPLE_LIT: &[&str] = &[
    "_BaseColor",
    "_BaseMap",
    "_Smoothness",
    "_BumpMap",
    "_EmissionColor",
    "_EmissionMap",
    "_Surface",
    "_Blend",
    "_ZWrite",
];

const URP_UNLIT: &[&str] = &["_BaseColor", "_BaseMap", "_Surface", "_Blend", "_ZWrite"];

const HDRP_LIT: &[&str] = &[
    "_BaseColor",
    "_BaseColorMap",
    "_Smoothness",
    "_Metallic",
    "_MaskMap",
    "_NormalScale",
    "_NormalMap",
    "_HeightAmplitude",
    "_HeightMap",
    "_EmissiveColor",
    "_EmissiveColorMap",
    "_SurfaceType",
    "_BlendMode",
    "_ZWrite",
];

const HDRP_UNLIT: &[&str] = &["_UnlitColor", "_UnlitColorMap", "_SurfaceType", "_BlendMode"];

const UNLIT_COLOR: &[&str] = &["_Color"];

impl Default for ShaderCatalog {
    fn default() -> Self {
        let mut catalog = Self {
            shaders: HashMap::new(),
        };
        catalog.register("Standard", STANDARD);
        catalog.register("Universal Render Pipeline/Lit", URP_LIT);
        catalog.register("Universal Render Pipeline/Simple Lit", URP_SIMPLE_LIT);
        catalog.register("Universal Render Pipeline/Unlit", URP_UNLIT);
        catalog.register("HDRP/Lit", HDRP_LIT);
        catalog.register("HDRP/Unlit", HDRP_UNLIT);
        catalog.register("Unlit/Color", UNLIT_COLOR);
        catalog
    }
}

impl ShaderCatalog {
    pub fn register<S: AsRef<str>>(&mut self, shader: &str, properties: &[S]) {
        self.shaders.insert(
            shader.to_string(),
            properties.iter().map(|p| p.as_ref().to_string()).collect(),
        );
    }

    pub fn is_known(&self, shader: &str) -> bool {
        self.shaders.contains_key(shader)
    }

    pub fn has_property(&self, shader: &str, property: &str) -> bool {
        self.shaders
            .get(shader)
            .is_some_and(|props| props.iter().any(|p| p == property))
    }

    pub fn properties(&self, shader: &str) -> Option<&[String]> {
        self.shaders.get(shader).map(|v| v.as_slice())
    }
}
