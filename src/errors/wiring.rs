// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

use crate::datatypes::Datatype;
use crate::ports::DatatypeMatch;
use crate::traits::NodeId;

/// Errors raised when a connection between two ports is rejected.
///
/// Wiring is the single place datatype compatibility is checked; once a
/// connection is recorded it is never re-validated per message.
#[derive(Debug, Clone, PartialEq)]
pub enum WiringError {
    /// A connection endpoint references a node the pipeline does not own
    UnknownNode {
        node_id: NodeId,
    },
    /// The source node has no output port with the requested name
    UnknownOutput {
        node_id: NodeId,
        type_name: &'static str,
        port: String,
    },
    /// The destination node has no input port with the requested name
    UnknownInput {
        node_id: NodeId,
        type_name: &'static str,
        port: String,
    },
    /// The output's datatype is not a member of the input's accepted set
    IncompatibleDatatypes {
        emitted: Datatype,
        from_node: NodeId,
        from_output: String,
        to_node: NodeId,
        to_input: String,
        accepted: Vec<DatatypeMatch>,
    },
}

impl fmt::Display for WiringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WiringError::UnknownNode { node_id } => {
                write!(f, "Node {} does not exist in this pipeline", node_id)
            }
            WiringError::UnknownOutput {
                node_id,
                type_name,
                port,
            } => {
                write!(
                    f,
                    "Node {} ({}) has no output named '{}'",
                    node_id, type_name, port
                )
            }
            WiringError::UnknownInput {
                node_id,
                type_name,
                port,
            } => {
                write!(
                    f,
                    "Node {} ({}) has no input named '{}'",
                    node_id, type_name, port
                )
            }
            WiringError::IncompatibleDatatypes {
                emitted,
                from_node,
                from_output,
                to_node,
                to_input,
                accepted,
            } => {
                let accepted_list: Vec<String> =
                    accepted.iter().map(|entry| entry.to_string()).collect();
                write!(
                    f,
                    "Output {}.{} emits {} but input {}.{} accepts only [{}]",
                    from_node,
                    from_output,
                    emitted,
                    to_node,
                    to_input,
                    accepted_list.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for WiringError {}
