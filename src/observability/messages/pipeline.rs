// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline construction and serialization events.

use std::fmt::{Display, Formatter};

use crate::errors::WiringError;
use crate::traits::NodeId;

/// A node was created and stored in the pipeline.
///
/// # Log Level
/// `info!` - Important operational event
pub struct NodeCreated<'a> {
    pub node_id: NodeId,
    pub type_name: &'a str,
}

impl Display for NodeCreated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Node {} created: type={}", self.node_id, self.type_name)
    }
}

/// A connection passed wiring validation and was recorded.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ConnectionAccepted<'a> {
    pub from_node: NodeId,
    pub from_output: &'a str,
    pub to_node: NodeId,
    pub to_input: &'a str,
}

impl Display for ConnectionAccepted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Connection accepted: {}.{} -> {}.{}",
            self.from_node, self.from_output, self.to_node, self.to_input
        )
    }
}

/// A connection was rejected at wiring time.
///
/// # Log Level
/// `warn!` - Builder error surfaced to the caller
pub struct ConnectionRejected<'a> {
    pub error: &'a WiringError,
}

impl Display for ConnectionRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Connection rejected: {}", self.error)
    }
}

/// The pipeline was serialized into its backend-facing schema.
///
/// # Log Level
/// `info!` - Important operational event
pub struct PipelineSerialized {
    pub node_count: usize,
    pub connection_count: usize,
}

impl Display for PipelineSerialized {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline serialized: nodes={}, connections={}",
            self.node_count, self.connection_count
        )
    }
}

/// The pipeline definition was duplicated.
///
/// # Log Level
/// `info!` - Important operational event
pub struct PipelineCloned {
    pub node_count: usize,
    pub connection_count: usize,
}

impl Display for PipelineCloned {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline cloned: nodes={}, connections={}",
            self.node_count, self.connection_count
        )
    }
}
