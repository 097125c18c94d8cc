//! Typed access to the untyped parameter bag.
//!
//! Every handler validates its entire parameter set through this accessor
//! before touching the project, so invalid input never leaves a
//! half-applied mutation behind. Coercion is strict: wrong JSON types fail
//! instead of being bent into shape.

use serde_json::Value;

use super::types::ParamBag;
use crate::error::BridgeError;

pub struct Params<'a> {
    bag: &'a ParamBag,
}

impl<'a> Params<'a> {
    pub fn new(bag: &'a ParamBag) -> Self {
        Self { bag }
    }

    /// JSON null counts as absent.
    fn get(&self, key: &str) -> Option<&'a Value> {
        self.bag.get(key).filter(|v| !v.is_null())
    }

    pub fn require_str(&self, key: &str) -> Result<&'a str, BridgeError> {
        match self.get(key) {
            None => Err(BridgeError::MissingParameter(key.to_string())),
            Some(v) => v
                .as_str()
                .ok_or_else(|| BridgeError::type_mismatch(key, "a string")),
        }
    }

    pub fn optional_str(&self, key: &str) -> Result<Option<&'a str>, BridgeError> {
        match self.get(key) {
            None => Ok(None),
            Some(v) => v
                .as_str()
                .map(Some)
                .ok_or_else(|| BridgeError::type_mismatch(key, "a string")),
        }
    }

    pub fn optional_bool(&self, key: &str, default: bool) -> Result<bool, BridgeError> {
        match self.get(key) {
            None => Ok(default),
            Some(v) => v
                .as_bool()
                .ok_or_else(|| BridgeError::type_mismatch(key, "a boolean")),
        }
    }

    pub fn optional_f32(&self, key: &str) -> Result<Option<f32>, BridgeError> {
        match self.get(key) {
            None => Ok(None),
            Some(v) => v
                .as_f64()
                .map(|f| Some(f as f32))
                .ok_or_else(|| BridgeError::type_mismatch(key, "a number")),
        }
    }

    /// An `[r, g, b]` or `[r, g, b, a]` color with every channel in 0.0–1.0.
    /// Alpha defaults to 1.0 when omitted.
    pub fn optional_color(&self, key: &str) -> Result<Option<[f32; 4]>, BridgeError> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        let items = value
            .as_array()
            .ok_or_else(|| BridgeError::type_mismatch(key, "an array of numbers"))?;
        if items.len() != 3 && items.len() != 4 {
            return Err(BridgeError::InvalidArity {
                name: key.to_string(),
                expected: "3 (RGB) or 4 (RGBA)".to_string(),
                got: items.len(),
            });
        }
        let mut color = [0.0f32, 0.0, 0.0, 1.0];
        for (i, item) in items.iter().enumerate() {
            let channel = item
                .as_f64()
                .ok_or_else(|| BridgeError::type_mismatch(key, "an array of numbers"))?
                as f32;
            if !(0.0..=1.0).contains(&channel) {
                return Err(BridgeError::type_mismatch(
                    key,
                    &format!("in the range 0.0-1.0 ({} channel)", ["R", "G", "B", "A"][i]),
                ));
            }
            color[i] = channel;
        }
        Ok(Some(color))
    }

    /// An `[x, y]` pair, used for tiling and offset.
    pub fn optional_vec2(&self, key: &str, default: [f32; 2]) -> Result<[f32; 2], BridgeError> {
        let Some(value) = self.get(key) else {
            return Ok(default);
        };
        let items = value
            .as_array()
            .ok_or_else(|| BridgeError::type_mismatch(key, "an array of numbers"))?;
        if items.len() != 2 {
            return Err(BridgeError::InvalidArity {
                name: key.to_string(),
                expected: "exactly 2".to_string(),
                got: items.len(),
            });
        }
        let mut pair = [0.0f32; 2];
        for (i, item) in items.iter().enumerate() {
            pair[i] = item
                .as_f64()
                .ok_or_else(|| BridgeError::type_mismatch(key, "an array of numbers"))?
                as f32;
        }
        Ok(pair)
    }
}

/// Identifier rule for created asset and behavior names: letter or
/// underscore first, then letters, digits, underscores.
pub fn validate_identifier(name: &str) -> Result<(), BridgeError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(BridgeError::InvalidName(name.to_string()))
    }
}

/// Looser rule for material/asset display names: non-empty, no path
/// separators, no surrounding whitespace.
pub fn validate_asset_name(name: &str) -> Result<(), BridgeError> {
    if name.is_empty()
        || name != name.trim()
        || name.contains('/')
        || name.contains('\\')
        || name.contains("..")
    {
        return Err(BridgeError::InvalidName(name.to_string()));
    }
    Ok(())
}
