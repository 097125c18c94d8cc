//! The command layer.
//!
//! An external controller submits `{name, params}` requests through a
//! [`BridgeClient`]; the host editor drains them from its update loop via
//! [`Bridge::pump`], one command to completion at a time, and every request
//! is answered with exactly one [`ResultEnvelope`] on its reply channel.

mod handlers_materials;
mod handlers_scene;
mod handlers_text;
mod host;
mod params;
mod router;
mod types;

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use tracing::debug;

pub use host::EditorHost;
pub use params::{validate_asset_name, validate_identifier, Params};
pub use router::{command_names, CommandRouter};
pub use types::{CommandRequest, ParamBag, ResultData, ResultEnvelope};

struct QueuedCommand {
    request: CommandRequest,
    reply: Sender<ResultEnvelope>,
}

/// Transport-side handle: submit commands, await envelopes.
#[derive(Clone)]
pub struct BridgeClient {
    sender: Sender<QueuedCommand>,
}

/// Editor-side end of the bridge: owns the router and the inbound queue.
pub struct Bridge {
    router: CommandRouter,
    receiver: Receiver<QueuedCommand>,
}

/// Create a connected client/bridge pair.
pub fn channel() -> (BridgeClient, Bridge) {
    let (sender, receiver) = unbounded();
    (
        BridgeClient { sender },
        Bridge {
            router: CommandRouter::new(),
            receiver,
        },
    )
}

impl BridgeClient {
    /// Queue a command; the returned receiver yields its envelope once the
    /// host has pumped it. If the bridge side is gone the receive fails,
    /// which transports surface as a disconnect.
    pub fn submit(&self, name: &str, params: ParamBag) -> Receiver<ResultEnvelope> {
        let (reply, response) = bounded(1);
        let request = CommandRequest::new(name, params);
        let _ = self.sender.send(QueuedCommand { request, reply });
        response
    }
}

impl Bridge {
    /// Drain the queue from the host's update loop. Each command runs to
    /// completion before the next is taken; returns how many were handled.
    pub fn pump(&self, host: &mut EditorHost) -> usize {
        let mut handled = 0;
        while let Ok(queued) = self.receiver.try_recv() {
            let envelope = self.router.dispatch(host, &queued.request);
            let _ = queued.reply.send(envelope);
            handled += 1;
        }
        if handled > 0 {
            debug!(handled, "pumped bridge commands");
        }
        handled
    }

    pub fn router(&self) -> &CommandRouter {
        &self.router
    }
}
