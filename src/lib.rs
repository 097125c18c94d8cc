//! axon: automation bridge for a content-creation editor.
//!
//! An external controller (typically an LLM-driven agent) issues named,
//! parameterized commands; the bridge validates them against a strict
//! accessor, routes them to the matching handler, executes against the
//! editor's injected object/asset collaborators, and always answers with a
//! uniform success/failure envelope. Material-facing commands go through a
//! render-pipeline-aware property resolver so controllers can speak in
//! abstract slots ("albedo", "smoothness") regardless of which shading
//! backend the project uses.

pub mod assets;
pub mod bridge;
pub mod codec;
pub mod config;
pub mod error;
pub mod fs;
pub mod material;
pub mod paths;
pub mod scene;

pub use bridge::{
    channel, command_names, Bridge, BridgeClient, CommandRequest, CommandRouter, EditorHost,
    ResultEnvelope,
};
pub use config::BridgeConfig;
pub use error::BridgeError;
pub use material::ShadingBackend;
