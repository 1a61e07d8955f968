// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The polymorphic node contract.
//!
//! Every pipeline vertex, whatever its concrete type, is handled by the
//! builder and the schema serializer through this one trait. The capability
//! set is deliberately small: identity, port lists, a serialized property
//! sheet, and duplication. Anything node-specific (configuration setters,
//! extra accessors) stays on the concrete type and is reached through the
//! downcast hooks, so no node-type branching leaks into the core.

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;

use crate::ports::{Input, Output};

/// Handle identifying a node within its owning pipeline.
///
/// Allocated by the pipeline context at construction. Duplicating a pipeline
/// preserves ids, so a cloned node occupies the same vertex in the copied
/// graph and its ports resolve to the copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A typed vertex in a pipeline graph.
///
/// Implementations are plain configuration descriptors: construction,
/// setters, and serialization are synchronous in-memory operations with no
/// failure modes. Runtime behavior (queueing, throttling, transport) belongs
/// to the execution backend, which is configured entirely from what
/// [`Node::properties`] returns.
pub trait Node: Send + Sync {
    /// Fixed type identifier the backend resolves execution behavior by.
    fn type_name(&self) -> &'static str;

    /// Identity within the owning pipeline.
    fn id(&self) -> NodeId;

    /// Input ports, in declaration order. Order is significant: the builder
    /// may wire positionally.
    fn inputs(&self) -> Vec<&Input>;

    /// Output ports, in declaration order.
    fn outputs(&self) -> Vec<&Output>;

    /// The current property sheet as an ordered field-name to value mapping.
    ///
    /// Computed from live configuration on every call and never cached, since
    /// setters may run right up until the pipeline is serialized. Total:
    /// every field has a default, so an unconfigured node still yields a
    /// complete mapping.
    fn properties(&self) -> serde_json::Value;

    /// An independent deep copy: same concrete type, same property values,
    /// distinct port objects owned by the copy. The original and the copy
    /// share no mutable state afterward.
    fn clone_node(&self) -> Box<dyn Node>;

    /// Downcast hook for typed read access to the concrete node.
    fn as_any(&self) -> &dyn Any;

    /// Downcast hook for typed configuration access to the concrete node.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl fmt::Debug for dyn Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("type_name", &self.type_name())
            .field("id", &self.id())
            .field("input_count", &self.inputs().len())
            .field("output_count", &self.outputs().len())
            .finish()
    }
}
