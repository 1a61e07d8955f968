// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

use crate::traits::NodeId;

/// Errors found by whole-pipeline validation before handoff to the backend
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Two or more boundary nodes were configured with the same stream name
    DuplicateStreamName {
        /// The stream name that is claimed more than once
        stream: String,
        /// The nodes claiming it
        nodes: Vec<NodeId>,
    },
    /// An exclusive-mode input has more than one producing connection
    ExclusiveInputFanIn {
        /// The node owning the over-subscribed input
        node_id: NodeId,
        /// The input port name
        port: String,
        /// How many connections feed it
        producer_count: usize,
    },
    /// A recorded connection references a node no longer in the pipeline
    DanglingConnection {
        from_node: NodeId,
        to_node: NodeId,
        missing: NodeId,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateStreamName { stream, nodes } => {
                let ids: Vec<String> = nodes.iter().map(|id| id.to_string()).collect();
                write!(
                    f,
                    "Stream name '{}' is claimed by multiple nodes: [{}]",
                    stream,
                    ids.join(", ")
                )
            }
            ValidationError::ExclusiveInputFanIn {
                node_id,
                port,
                producer_count,
            } => {
                write!(
                    f,
                    "Input {}.{} is exclusive but has {} producers",
                    node_id, port, producer_count
                )
            }
            ValidationError::DanglingConnection {
                from_node,
                to_node,
                missing,
            } => {
                write!(
                    f,
                    "Connection {} -> {} references missing node {}",
                    from_node, to_node, missing
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
