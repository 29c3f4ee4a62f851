//! Feed-side collaborators: wire shapes for the two push streams, the
//! threshold fallback classifier, and cadenced replay/antenna sources used
//! by the demo driver in place of a live transport.

pub mod event;
pub mod replay;
pub mod rules;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("unknown feed event `{0}`")]
    UnknownEvent(String),
    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
