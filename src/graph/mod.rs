//! Signal nodes that render the repeater's gongs.
//!
//! A node is struck with a [`RenderCtx`] describing pitch and strike kind, then
//! rendered block by block until it reports itself inactive.

/// Additive-partial wire gong.
pub mod bell;
/// Core traits shared by all graph nodes.
pub mod node;

pub use bell::BellNode;
pub use node::{GraphNode, RenderCtx};
