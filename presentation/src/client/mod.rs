//! Consumer side of the event stream

mod decoder;
mod remote;

pub use decoder::{SseDecoder, StreamParseError};
pub use remote::{RemoteError, RemoteSwarmClient};
