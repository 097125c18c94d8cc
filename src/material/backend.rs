use serde::{Deserialize, Serialize};

/// The family of render-pipeline shader conventions a material uses.
///
/// Classified once per material from its shader identity; read-only for the
/// duration of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadingBackend {
    Legacy,
    Universal,
    HighDefinition,
}

impl ShadingBackend {
    pub const ALL: [ShadingBackend; 3] = [
        ShadingBackend::Legacy,
        ShadingBackend::Universal,
        ShadingBackend::HighDefinition,
    ];

    /// Classify a shader name into its backend family.
    ///
    /// Anything not recognizably universal or high-definition is treated as
    /// legacy, which matches how the stock built-in shaders are named.
    pub fn classify(shader_name: &str) -> Self {
        let name = shader_name.trim();
        if name.starts_with("Universal Render Pipeline/") || name.starts_with("URP/") {
            ShadingBackend::Universal
        } else if name.starts_with("HDRP/") || name.starts_with("High Definition Render Pipeline/")
        {
            ShadingBackend::HighDefinition
        } else {
            ShadingBackend::Legacy
        }
    }

    /// The stock opaque lit shader for this backend.
    pub fn default_shader(&self) -> &'static str {
        match self {
            ShadingBackend::Legacy => "Standard",
            ShadingBackend::Universal => "Universal Render Pipeline/Lit",
            ShadingBackend::HighDefinition => "HDRP/Lit",
        }
    }

    /// The stock unlit shader for this backend.
    pub fn unlit_shader(&self) -> &'static str {
        match self {
            ShadingBackend::Legacy => "Unlit/Color",
            ShadingBackend::Universal => "Universal Render Pipeline/Unlit",
            ShadingBackend::HighDefinition => "HDRP/Unlit",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "legacy" | "builtin" | "built-in" | "standard" => Some(ShadingBackend::Legacy),
            "universal" | "urp" => Some(ShadingBackend::Universal),
            "high-definition" | "high_definition" | "hdrp" => Some(ShadingBackend::HighDefinition),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_stock_shader_names() {
        assert_eq!(ShadingBackend::classify("Standard"), ShadingBackend::Legacy);
        assert_eq!(
            ShadingBackend::classify("Unlit/Color"),
            ShadingBackend::Legacy
        );
        assert_eq!(
            ShadingBackend::classify("Universal Render Pipeline/Lit"),
            ShadingBackend::Universal
        );
        assert_eq!(
            ShadingBackend::classify("URP/Lit"),
            ShadingBackend::Universal
        );
        assert_eq!(
            ShadingBackend::classify("HDRP/Lit"),
            ShadingBackend::HighDefinition
        );
    }

    #[test]
    fn parse_accepts_common_spellings() {
        assert_eq!(ShadingBackend::parse("URP"), Some(ShadingBackend::Universal));
        assert_eq!(
            ShadingBackend::parse("high-definition"),
            Some(ShadingBackend::HighDefinition)
        );
        assert_eq!(ShadingBackend::parse("legacy"), Some(ShadingBackend::Legacy));
        assert_eq!(ShadingBackend::parse("vulkan"), None);
    }
}
