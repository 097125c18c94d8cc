use super::ShadingBackend;

/// Pipeline-independent texture inputs a controller can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    Albedo,
    Normal,
    Metallic,
    Occlusion,
    Height,
    Emission,
}

/// Pipeline-independent scalar material properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarSlot {
    Metallic,
    Smoothness,
    NormalScale,
    OcclusionStrength,
    HeightScale,
}

/// Pipeline-independent color material properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSlot {
    Base,
    Emission,
}

/// Ordered concrete-property candidates for one abstract slot, per backend.
/// First candidate present in the material's capability set wins. These
/// tables are the authoritative mapping; guessing a property name instead of
/// consulting them is incorrect behavior.
struct Candidates {
    legacy: &'static [&'static str],
    universal: &'static [&'static str],
    hdrp: &'static [&'static str],
}

impl Candidates {
    fn for_backend(&self, backend: ShadingBackend) -> &'static [&'static str] {
        match backend {
            ShadingBackend::Legacy => self.legacy,
            ShadingBackend::Universal => self.universal,
            ShadingBackend::HighDefinition => self.hdrp,
        }
    }
}

static TEX_ALBEDO: Candidates = Candidates {
    legacy: &["_MainTex"],
    universal: &["_BaseMap", "_MainTex"],
    hdrp: &["_BaseColorMap", "_MainTex"],
};
static TEX_NORMAL: Candidates = Candidates {
    legacy: &["_BumpMap"],
    universal: &["_BumpMap"],
    hdrp: &["_NormalMap", "_BumpMap"],
};
static TEX_METALLIC: Candidates = Candidates {
    legacy: &["_MetallicGlossMap"],
    universal: &["_MetallicGlossMap"],
    hdrp: &["_MaskMap"],
};
static TEX_OCCLUSION: Candidates = Candidates {
    legacy: &["_OcclusionMap"],
    universal: &["_OcclusionMap"],
    hdrp: &["_MaskMap"],
};
static TEX_HEIGHT: Candidates = Candidates {
    legacy: &["_ParallaxMap"],
    universal: &["_ParallaxMap"],
    hdrp: &["_HeightMap"],
};
static TEX_EMISSION: Candidates = Candidates {
    legacy: &["_EmissionMap"],
    universal: &["_EmissionMap"],
    hdrp: &["_EmissiveColorMap"],
};

static SCALAR_METALLIC: Candidates = Candidates {
    legacy: &["_Metallic"],
    universal: &["_Metallic"],
    hdrp: &["_Metallic"],
};
static SCALAR_SMOOTHNESS: Candidates = Candidates {
    legacy: &["_Glossiness"],
    universal: &["_Smoothness"],
    hdrp: &["_Smoothness"],
};
static SCALAR_NORMAL_SCALE: Candidates = Candidates {
    legacy: &["_BumpScale"],
    universal: &["_BumpScale"],
    hdrp: &["_NormalScale"],
};
static SCALAR_OCCLUSION_STRENGTH: Candidates = Candidates {
    legacy: &["_OcclusionStrength"],
    universal: &["_OcclusionStrength"],
    hdrp: &[],
};
static SCALAR_HEIGHT_SCALE: Candidates = Candidates {
    legacy: &["_Parallax"],
    universal: &["_Parallax"],
    hdrp: &["_HeightAmplitude"],
};

static COLOR_BASE: Candidates = Candidates {
    legacy: &["_Color"],
    universal: &["_BaseColor", "_Color"],
    hdrp: &["_BaseColor", "_Color"],
};
static COLOR_EMISSION: Candidates = Candidates {
    legacy: &["_EmissionColor"],
    universal: &["_EmissionColor"],
    hdrp: &["_EmissiveColor"],
};

impl TextureSlot {
    pub const ALL: [TextureSlot; 6] = [
        TextureSlot::Albedo,
        TextureSlot::Normal,
        TextureSlot::Metallic,
        TextureSlot::Occlusion,
        TextureSlot::Height,
        TextureSlot::Emission,
    ];

    /// Parse a controller-supplied slot name, accepting the common aliases.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "albedo" | "diffuse" | "base" | "basemap" | "color" => Some(TextureSlot::Albedo),
            "normal" | "bump" | "normalmap" => Some(TextureSlot::Normal),
            "metallic" | "metal" | "metallicgloss" => Some(TextureSlot::Metallic),
            "occlusion" | "ao" | "ambientocclusion" => Some(TextureSlot::Occlusion),
            "height" | "parallax" | "displacement" => Some(TextureSlot::Height),
            "emission" | "emissive" => Some(TextureSlot::Emission),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TextureSlot::Albedo => "albedo",
            TextureSlot::Normal => "normal",
            TextureSlot::Metallic => "metallic",
            TextureSlot::Occlusion => "occlusion",
            TextureSlot::Height => "height",
            TextureSlot::Emission => "emission",
        }
    }

    fn candidates(&self) -> &'static Candidates {
        match self {
            TextureSlot::Albedo => &TEX_ALBEDO,
            TextureSlot::Normal => &TEX_NORMAL,
            TextureSlot::Metallic => &TEX_METALLIC,
            TextureSlot::Occlusion => &TEX_OCCLUSION,
            TextureSlot::Height => &TEX_HEIGHT,
            TextureSlot::Emission => &TEX_EMISSION,
        }
    }

    /// First candidate key the material's shader actually declares, or `None`
    /// when the slot has no home on this backend. The caller decides whether
    /// that is a hard failure (texture writes) or a skip (template writes).
    pub fn resolve(
        &self,
        backend: ShadingBackend,
        has_property: impl Fn(&str) -> bool,
    ) -> Option<&'static str> {
        self.candidates()
            .for_backend(backend)
            .iter()
            .copied()
            .find(|key| has_property(key))
    }
}

impl ScalarSlot {
    fn candidates(&self) -> &'static Candidates {
        match self {
            ScalarSlot::Metallic => &SCALAR_METALLIC,
            ScalarSlot::Smoothness => &SCALAR_SMOOTHNESS,
            ScalarSlot::NormalScale => &SCALAR_NORMAL_SCALE,
            ScalarSlot::OcclusionStrength => &SCALAR_OCCLUSION_STRENGTH,
            ScalarSlot::HeightScale => &SCALAR_HEIGHT_SCALE,
        }
    }

    pub fn resolve(
        &self,
        backend: ShadingBackend,
        has_property: impl Fn(&str) -> bool,
    ) -> Option<&'static str> {
        self.candidates()
            .for_backend(backend)
            .iter()
            .copied()
            .find(|key| has_property(key))
    }
}

impl ColorSlot {
    fn candidates(&self) -> &'static Candidates {
        match self {
            ColorSlot::Base => &COLOR_BASE,
            ColorSlot::Emission => &COLOR_EMISSION,
        }
    }

    pub fn resolve(
        &self,
        backend: ShadingBackend,
        has_property: impl Fn(&str) -> bool,
    ) -> Option<&'static str> {
        self.candidates()
            .for_backend(backend)
            .iter()
            .copied()
            .find(|key| has_property(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::ShaderCatalog;

    fn caps<'a>(catalog: &'a ShaderCatalog, shader: &'a str) -> impl Fn(&str) -> bool + 'a {
        move |key| catalog.has_property(shader, key)
    }

    #[test]
    fn albedo_prefers_pipeline_key_then_falls_back() {
        let catalog = ShaderCatalog::default();
        assert_eq!(
            TextureSlot::Albedo.resolve(
                ShadingBackend::Universal,
                caps(&catalog, "Universal Render Pipeline/Lit")
            ),
            Some("_BaseMap")
        );
        // A universal-classified shader that only declares the legacy key
        // falls through to _MainTex.
        let mut custom = ShaderCatalog::default();
        custom.register("URP/LegacyPorted", &["_MainTex", "_Color"]);
        assert_eq!(
            TextureSlot::Albedo.resolve(ShadingBackend::Universal, caps(&custom, "URP/LegacyPorted")),
            Some("_MainTex")
        );
    }

    #[test]
    fn hdrp_packs_metallic_and_occlusion_into_mask_map() {
        let catalog = ShaderCatalog::default();
        let has = caps(&catalog, "HDRP/Lit");
        assert_eq!(
            TextureSlot::Metallic.resolve(ShadingBackend::HighDefinition, &has),
            Some("_MaskMap")
        );
        assert_eq!(
            TextureSlot::Occlusion.resolve(ShadingBackend::HighDefinition, &has),
            Some("_MaskMap")
        );
    }

    #[test]
    fn unsupported_slot_resolves_to_none() {
        let catalog = ShaderCatalog::default();
        assert_eq!(
            TextureSlot::Normal.resolve(ShadingBackend::Legacy, caps(&catalog, "Unlit/Color")),
            None
        );
        assert_eq!(
            TextureSlot::Metallic.resolve(
                ShadingBackend::Universal,
                caps(&catalog, "Universal Render Pipeline/Simple Lit")
            ),
            None
        );
        assert_eq!(
            ScalarSlot::OcclusionStrength
                .resolve(ShadingBackend::HighDefinition, caps(&catalog, "HDRP/Lit")),
            None
        );
    }

    #[test]
    fn smoothness_key_differs_per_backend() {
        let catalog = ShaderCatalog::default();
        assert_eq!(
            ScalarSlot::Smoothness.resolve(ShadingBackend::Legacy, caps(&catalog, "Standard")),
            Some("_Glossiness")
        );
        assert_eq!(
            ScalarSlot::Smoothness.resolve(
                ShadingBackend::Universal,
                caps(&catalog, "Universal Render Pipeline/Lit")
            ),
            Some("_Smoothness")
        );
    }

    #[test]
    fn resolution_is_deterministic() {
        let catalog = ShaderCatalog::default();
        for _ in 0..3 {
            assert_eq!(
                ColorSlot::Base.resolve(
                    ShadingBackend::Universal,
                    caps(&catalog, "Universal Render Pipeline/Lit")
                ),
                Some("_BaseColor")
            );
        }
    }

    #[test]
    fn slot_parsing_accepts_aliases() {
        assert_eq!(TextureSlot::parse("Albedo"), Some(TextureSlot::Albedo));
        assert_eq!(TextureSlot::parse("ao"), Some(TextureSlot::Occlusion));
        assert_eq!(TextureSlot::parse(" bump "), Some(TextureSlot::Normal));
        assert_eq!(TextureSlot::parse("specular"), None);
    }
}
