use tracing::debug;

use super::{ColorSlot, ScalarSlot, ShadingBackend};
use crate::error::BridgeError;

/// One resolved property write: concrete shader key plus the value to set.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Float(f32),
    Color([f32; 4]),
}

/// Abstract writes a template is allowed to declare. Declared order is
/// preserved through instantiation: later writes override earlier ones for
/// the same key, which glass relies on (base appearance first, then the
/// transparency override sequence).
enum Write {
    Color(ColorSlot, [f32; 4]),
    Scalar(ScalarSlot, f32),
    Transparent,
}

struct Template {
    name: &'static str,
    writes: &'static [Write],
}

static TEMPLATES: &[Template] = &[
    Template {
        name: "metal",
        writes: &[
            Write::Color(ColorSlot::Base, [0.77, 0.78, 0.80, 1.0]),
            Write::Scalar(ScalarSlot::Metallic, 1.0),
            Write::Scalar(ScalarSlot::Smoothness, 0.85),
        ],
    },
    Template {
        name: "plastic",
        writes: &[
            Write::Color(ColorSlot::Base, [0.9, 0.9, 0.9, 1.0]),
            Write::Scalar(ScalarSlot::Metallic, 0.0),
            Write::Scalar(ScalarSlot::Smoothness, 0.75),
        ],
    },
    Template {
        name: "wood",
        writes: &[
            Write::Color(ColorSlot::Base, [0.52, 0.37, 0.26, 1.0]),
            Write::Scalar(ScalarSlot::Metallic, 0.0),
            Write::Scalar(ScalarSlot::Smoothness, 0.35),
        ],
    },
    Template {
        name: "glass",
        writes: &[
            Write::Color(ColorSlot::Base, [0.9, 0.97, 1.0, 0.25]),
            Write::Scalar(ScalarSlot::Metallic, 0.0),
            Write::Scalar(ScalarSlot::Smoothness, 0.98),
            // Must come after the base color write: switches the surface to
            // transparent rendering.
            Write::Transparent,
        ],
    },
    Template {
        name: "emissive",
        writes: &[
            Write::Color(ColorSlot::Base, [0.1, 0.1, 0.1, 1.0]),
            Write::Color(ColorSlot::Emission, [2.0, 2.0, 2.0, 1.0]),
        ],
    },
    Template {
        name: "fabric",
        writes: &[
            Write::Color(ColorSlot::Base, [0.65, 0.60, 0.55, 1.0]),
            Write::Scalar(ScalarSlot::Metallic, 0.0),
            Write::Scalar(ScalarSlot::Smoothness, 0.15),
        ],
    },
    Template {
        name: "skin",
        writes: &[
            Write::Color(ColorSlot::Base, [0.87, 0.72, 0.62, 1.0]),
            Write::Scalar(ScalarSlot::Metallic, 0.0),
            Write::Scalar(ScalarSlot::Smoothness, 0.45),
        ],
    },
];

/// Per-backend write sequence that flips a material to transparent
/// rendering. Emitted as-is: these keys are shader state, not capability
/// probed.
pub(crate) fn transparent_sequence(backend: ShadingBackend) -> &'static [(&'static str, f32)] {
    match backend {
        // 3 = the standard shader's Transparent mode; src/dst pair is
        // SrcAlpha / OneMinusSrcAlpha.
        ShadingBackend::Legacy => &[
            ("_Mode", 3.0),
            ("_SrcBlend", 5.0),
            ("_DstBlend", 10.0),
            ("_ZWrite", 0.0),
        ],
        ShadingBackend::Universal => &[("_Surface", 1.0), ("_Blend", 0.0), ("_ZWrite", 0.0)],
        ShadingBackend::HighDefinition => {
            &[("_SurfaceType", 1.0), ("_BlendMode", 0.0), ("_ZWrite", 0.0)]
        }
    }
}

pub fn template_names() -> Vec<&'static str> {
    TEMPLATES.iter().map(|t| t.name).collect()
}

/// Resolve a named template into the ordered list of concrete property
/// writes for the given backend.
///
/// Color/scalar writes that have no home on this backend are skipped, the
/// same silent-skip rule single-property commands follow. Fails only for an
/// unregistered template name.
pub fn instantiate(
    template_name: &str,
    backend: ShadingBackend,
    has_property: impl Fn(&str) -> bool,
) -> Result<Vec<(String, PropertyValue)>, BridgeError> {
    let template = TEMPLATES
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(template_name.trim()))
        .ok_or_else(|| BridgeError::UnknownTemplate(template_name.to_string()))?;

    let mut writes = Vec::new();
    for write in template.writes {
        match write {
            Write::Color(slot, value) => match slot.resolve(backend, &has_property) {
                Some(key) => writes.push((key.to_string(), PropertyValue::Color(*value))),
                None => debug!(template = template.name, ?slot, "color slot unsupported, skipping"),
            },
            Write::Scalar(slot, value) => match slot.resolve(backend, &has_property) {
                Some(key) => writes.push((key.to_string(), PropertyValue::Float(*value))),
                None => debug!(template = template.name, ?slot, "scalar slot unsupported, skipping"),
            },
            Write::Transparent => {
                for (key, value) in transparent_sequence(backend) {
                    writes.push((key.to_string(), PropertyValue::Float(*value)));
                }
            }
        }
    }
    Ok(writes)
}
