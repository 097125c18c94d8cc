//! Material commands: creation, property and texture writes, templates,
//! asset listing.

use serde_json::json;
use tracing::{debug, info};

use super::host::EditorHost;
use super::params::{validate_asset_name, Params};
use super::types::{data_object, ResultData};
use crate::assets::{AssetEntry, AssetKind, MaterialAsset, TextureBinding};
use crate::error::BridgeError;
use crate::material::{
    instantiate, transparent_sequence, ColorSlot, PropertyValue, ScalarSlot, TextureSlot,
};
use crate::paths::file_stem;
use crate::scene::AppliedMaterial;

/// Write a color slot if the material's shader has a home for it. Single
/// property writes skip silently on unsupported slots; only texture-slot
/// writes escalate to a failure.
fn apply_color_slot(
    host: &EditorHost,
    mat: &mut MaterialAsset,
    slot: ColorSlot,
    value: [f32; 4],
) -> bool {
    match slot.resolve(mat.backend(), host.shader_caps(&mat.shader)) {
        Some(key) => {
            mat.colors.insert(key.to_string(), value);
            true
        }
        None => {
            debug!(material = %mat.name, ?slot, shader = %mat.shader, "color slot unsupported, skipping");
            false
        }
    }
}

fn apply_scalar_slot(
    host: &EditorHost,
    mat: &mut MaterialAsset,
    slot: ScalarSlot,
    value: f32,
) -> bool {
    match slot.resolve(mat.backend(), host.shader_caps(&mat.shader)) {
        Some(key) => {
            mat.floats.insert(key.to_string(), value);
            true
        }
        None => {
            debug!(material = %mat.name, ?slot, shader = %mat.shader, "scalar slot unsupported, skipping");
            false
        }
    }
}

fn apply_writes(mat: &mut MaterialAsset, writes: Vec<(String, PropertyValue)>) {
    for (key, value) in writes {
        match value {
            PropertyValue::Float(f) => {
                mat.floats.insert(key, f);
            }
            PropertyValue::Color(c) => {
                mat.colors.insert(key, c);
            }
        }
    }
}

/// Apply or create a material for a scene object. With `materialName` the
/// material is a shared asset under the materials folder; without it the
/// object gets a per-object instance material.
pub(super) fn set_material(
    host: &mut EditorHost,
    params: &Params,
) -> Result<ResultData, BridgeError> {
    let target = params.require_str("targetName")?;
    let material_name = params.optional_str("materialName")?;
    let create_if_missing = params.optional_bool("createIfMissing", true)?;
    let color = params.optional_color("color")?;

    if !host.scene.exists(target) {
        return Err(BridgeError::NotFound(format!("object '{target}'")));
    }

    let backend = host.config.render_pipeline;
    match material_name {
        Some(name) => {
            validate_asset_name(name)?;
            let path = host
                .asset_root()
                .join(&host.config.materials_folder, &format!("{name}.mat"));

            let mut mat = if host.assets.material_exists(&path.logical) {
                host.assets.load_material(&path.logical)?
            } else {
                if !create_if_missing {
                    return Err(BridgeError::NotFound(format!("material '{name}'")));
                }
                MaterialAsset::new(name, backend.default_shader())
            };
            if let Some(color) = color {
                apply_color_slot(host, &mut mat, ColorSlot::Base, color);
            }
            host.assets.save_material(&path.logical, &mat)?;
            host.scene.assign_material(
                target,
                AppliedMaterial::Shared {
                    name: name.to_string(),
                    path: path.logical.clone(),
                },
            )?;
            info!(object = %target, material = %name, path = %path.logical, "applied shared material");
            Ok(data_object(json!({
                "materialName": name,
                "path": path.logical,
            })))
        }
        None => {
            // Instance materials live on the object, not in the store.
            let name = format!("{target}_Material");
            let mut mat = MaterialAsset::new(&name, backend.default_shader());
            if let Some(color) = color {
                apply_color_slot(host, &mut mat, ColorSlot::Base, color);
            }
            host.scene
                .assign_material(target, AppliedMaterial::Instance(mat))?;
            info!(object = %target, material = %name, "applied instance material");
            Ok(data_object(json!({ "materialName": name })))
        }
    }
}

pub(super) fn set_material_properties(
    host: &mut EditorHost,
    params: &Params,
) -> Result<ResultData, BridgeError> {
    let material_path = params.require_str("materialPath")?;
    let color = params.optional_color("color")?;
    let metallic = params.optional_f32("metallic")?;
    let smoothness = params.optional_f32("smoothness")?;
    let normal_scale = params.optional_f32("normalScale")?;
    let occlusion_strength = params.optional_f32("occlusionStrength")?;
    let height_scale = params.optional_f32("heightScale")?;
    let emission_color = params.optional_color("emissionColor")?;
    let emission_intensity = params.optional_f32("emissionIntensity")?;

    let normalized = host.asset_root().normalize(material_path);
    let mut mat = host.assets.load_material(&normalized.logical)?;

    if let Some(color) = color {
        apply_color_slot(host, &mut mat, ColorSlot::Base, color);
    }
    let scalars = [
        (ScalarSlot::Metallic, metallic),
        (ScalarSlot::Smoothness, smoothness),
        (ScalarSlot::NormalScale, normal_scale),
        (ScalarSlot::OcclusionStrength, occlusion_strength),
        (ScalarSlot::HeightScale, height_scale),
    ];
    for (slot, value) in scalars {
        if let Some(value) = value {
            apply_scalar_slot(host, &mut mat, slot, value);
        }
    }

    // Emission intensity multiplies the emission color rather than being a
    // shader property of its own.
    if emission_color.is_some() || emission_intensity.is_some() {
        match ColorSlot::Emission.resolve(mat.backend(), host.shader_caps(&mat.shader)) {
            Some(key) => {
                let base = emission_color
                    .or_else(|| mat.colors.get(key).copied())
                    .unwrap_or([1.0, 1.0, 1.0, 1.0]);
                let intensity = emission_intensity.unwrap_or(1.0);
                mat.colors.insert(
                    key.to_string(),
                    [
                        base[0] * intensity,
                        base[1] * intensity,
                        base[2] * intensity,
                        base[3],
                    ],
                );
            }
            None => {
                debug!(material = %mat.name, shader = %mat.shader, "emission unsupported, skipping")
            }
        }
    }

    host.assets.save_material(&normalized.logical, &mat)?;
    info!(material = %mat.name, path = %normalized.logical, "updated material properties");
    Ok(data_object(json!({ "materialName": mat.name })))
}

pub(super) fn set_material_texture(
    host: &mut EditorHost,
    params: &Params,
) -> Result<ResultData, BridgeError> {
    let material_path = params.require_str("materialPath")?;
    let slot_type = params.require_str("slotType")?;
    let texture_path = params.require_str("texturePath")?;
    let tiling = params.optional_vec2("tiling", [1.0, 1.0])?;
    let offset = params.optional_vec2("offset", [0.0, 0.0])?;

    let slot = TextureSlot::parse(slot_type).ok_or_else(|| {
        BridgeError::type_mismatch(
            "slotType",
            "one of albedo|normal|metallic|occlusion|height|emission",
        )
    })?;

    let root = host.asset_root();
    let material_logical = root.normalize(material_path).logical;
    let texture_logical = root.normalize(texture_path).logical;

    if !host.assets.texture_exists(&texture_logical) {
        return Err(BridgeError::NotFound(format!(
            "texture '{texture_logical}'"
        )));
    }
    let mut mat = host.assets.load_material(&material_logical)?;

    // Resolve before mutating anything: an unsupported slot must leave the
    // material exactly as it was.
    let key = slot
        .resolve(mat.backend(), host.shader_caps(&mat.shader))
        .ok_or_else(|| BridgeError::UnsupportedSlot {
            slot: slot.name().to_string(),
            shader: mat.shader.clone(),
        })?;

    mat.textures.insert(
        key.to_string(),
        TextureBinding {
            texture: texture_logical.clone(),
            tiling,
            offset,
        },
    );
    host.assets.save_material(&material_logical, &mat)?;
    info!(material = %mat.name, slot = slot.name(), key = %key, texture = %texture_logical, "bound texture");

    Ok(data_object(json!({
        "materialName": mat.name,
        "textureName": file_stem(&texture_logical),
    })))
}

/// Create a material with explicit shader and render-mode settings.
pub(super) fn create_material(
    host: &mut EditorHost,
    params: &Params,
) -> Result<ResultData, BridgeError> {
    let name = params.require_str("materialName")?;
    validate_asset_name(name)?;
    let shader_type = params.optional_str("shaderType")?.unwrap_or("standard");
    let render_mode = params.optional_str("renderMode")?.unwrap_or("opaque");
    let save_path = params
        .optional_str("savePath")?
        .unwrap_or(host.config.materials_folder.as_str())
        .to_string();
    let overwrite = params.optional_bool("overwrite", false)?;

    let backend = host.config.render_pipeline;
    let shader = match shader_type.trim().to_ascii_lowercase().as_str() {
        "standard" | "lit" => backend.default_shader(),
        "unlit" => backend.unlit_shader(),
        _ => return Err(BridgeError::type_mismatch("shaderType", "one of standard|unlit")),
    };
    let transparent = match render_mode.trim().to_ascii_lowercase().as_str() {
        "opaque" => false,
        "transparent" => true,
        _ => {
            return Err(BridgeError::type_mismatch(
                "renderMode",
                "one of opaque|transparent",
            ))
        }
    };

    let path = host.asset_root().join(&save_path, &format!("{name}.mat"));
    if host.assets.material_exists(&path.logical) && !overwrite {
        return Err(BridgeError::AlreadyExists(format!("material '{name}'")));
    }

    let mut mat = MaterialAsset::new(name, shader);
    if transparent {
        for (key, value) in transparent_sequence(backend) {
            mat.floats.insert(key.to_string(), *value);
        }
    }
    host.assets.save_material(&path.logical, &mat)?;
    info!(material = %name, shader = %shader, path = %path.logical, "created material");

    Ok(data_object(json!({
        "materialName": name,
        "path": path.logical,
    })))
}

pub(super) fn create_material_from_template(
    host: &mut EditorHost,
    params: &Params,
) -> Result<ResultData, BridgeError> {
    let name = params.require_str("materialName")?;
    validate_asset_name(name)?;
    let template_name = params.require_str("templateName")?;
    let save_path = params
        .optional_str("savePath")?
        .unwrap_or(host.config.materials_folder.as_str())
        .to_string();
    let overwrite = params.optional_bool("overwrite", false)?;

    let backend = host.config.render_pipeline;
    let shader = backend.default_shader();
    // Resolve the template before creating anything; an unknown name must
    // not leave a half-made material behind.
    let writes = instantiate(template_name, backend, host.shader_caps(shader))?;

    let path = host.asset_root().join(&save_path, &format!("{name}.mat"));
    if host.assets.material_exists(&path.logical) && !overwrite {
        return Err(BridgeError::AlreadyExists(format!("material '{name}'")));
    }

    let mut mat = MaterialAsset::new(name, shader);
    apply_writes(&mut mat, writes);
    host.assets.save_material(&path.logical, &mat)?;
    info!(material = %name, template = %template_name, path = %path.logical, "created material from template");

    Ok(data_object(json!({
        "materialName": name,
        "path": path.logical,
    })))
}

pub(super) fn list_assets(
    host: &mut EditorHost,
    params: &Params,
) -> Result<ResultData, BridgeError> {
    let kind = match params.optional_str("kind")? {
        None => None,
        Some(raw) => Some(AssetKind::parse(raw).ok_or_else(|| {
            BridgeError::type_mismatch("kind", "one of material|texture|text")
        })?),
    };
    let root = host.asset_root();
    let folder = params
        .optional_str("folder")?
        .map(|f| root.normalize(f).logical);
    let pattern = params
        .optional_str("pattern")?
        .map(|p| p.to_ascii_lowercase());

    let mut entries: Vec<AssetEntry> = host
        .assets
        .list()
        .into_iter()
        .filter(|e| kind.is_none() || kind == Some(e.kind))
        .collect();

    if kind.is_none() || kind == Some(AssetKind::Text) {
        let text_root = folder.clone().unwrap_or_else(|| root.name().to_string());
        entries.extend(
            host.fs
                .list(&text_root)
                .into_iter()
                .filter(|p| super::handlers_text::is_text_asset(p))
                .map(|path| AssetEntry {
                    name: file_stem(&path).to_string(),
                    path,
                    kind: AssetKind::Text,
                }),
        );
    }

    if let Some(folder) = &folder {
        let prefix = format!("{folder}/");
        entries.retain(|e| e.path.starts_with(&prefix));
    }
    if let Some(pattern) = &pattern {
        entries.retain(|e| e.name.to_ascii_lowercase().contains(pattern));
    }
    entries.sort_by(|a, b| a.path.cmp(&b.path));
    entries.dedup_by(|a, b| a.path == b.path);

    let assets = serde_json::to_value(&entries)
        .map_err(|e| BridgeError::Unknown(format!("failed to serialize asset list: {e}")))?;
    Ok(data_object(json!({ "assets": assets })))
}
