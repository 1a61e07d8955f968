// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Whole-pipeline validation before handoff to the backend.
//!
//! Individual setters accept any value and `connect` already enforces port
//! compatibility, so what remains are graph-level properties no single call
//! can see: stream-name collisions across boundary nodes, fan-in on
//! exclusive inputs, and edges left pointing at vanished vertices. Checks
//! accumulate so the builder sees every problem at once.

use std::collections::BTreeMap;

use crate::errors::ValidationError;
use crate::ports::ReceiveMode;
use crate::traits::NodeId;

use super::graph::Pipeline;

/// Validate a pipeline definition, accumulating all errors found.
pub fn validate_pipeline(pipeline: &Pipeline) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_dangling_connections(pipeline, &mut errors);
    check_stream_name_uniqueness(pipeline, &mut errors);
    check_exclusive_fan_in(pipeline, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_dangling_connections(pipeline: &Pipeline, errors: &mut Vec<ValidationError>) {
    for connection in pipeline.connections() {
        for endpoint in [connection.from_node, connection.to_node] {
            if pipeline.node(endpoint).is_none() {
                errors.push(ValidationError::DanglingConnection {
                    from_node: connection.from_node,
                    to_node: connection.to_node,
                    missing: endpoint,
                });
            }
        }
    }
}

fn check_stream_name_uniqueness(pipeline: &Pipeline, errors: &mut Vec<ValidationError>) {
    // Streams are identified by the "streamName" property field, which is the
    // same field name the backend decodes. Unconfigured nodes share the empty
    // name; only explicitly configured names are checked.
    let mut claims: BTreeMap<String, Vec<NodeId>> = BTreeMap::new();
    for node in pipeline.nodes() {
        if let Some(stream) = node.properties().get("streamName").and_then(|v| v.as_str()) {
            if !stream.is_empty() {
                claims.entry(stream.to_string()).or_default().push(node.id());
            }
        }
    }

    for (stream, nodes) in claims {
        if nodes.len() > 1 {
            errors.push(ValidationError::DuplicateStreamName { stream, nodes });
        }
    }
}

fn check_exclusive_fan_in(pipeline: &Pipeline, errors: &mut Vec<ValidationError>) {
    let mut producer_counts: BTreeMap<(NodeId, &str), usize> = BTreeMap::new();
    for connection in pipeline.connections() {
        *producer_counts
            .entry((connection.to_node, connection.to_input.as_str()))
            .or_default() += 1;
    }

    for ((node_id, port), producer_count) in producer_counts {
        if producer_count < 2 {
            continue;
        }
        let Some(node) = pipeline.node(node_id) else {
            continue; // reported as dangling already
        };
        let exclusive = node
            .inputs()
            .into_iter()
            .find(|input| input.name() == port)
            .map(|input| input.mode() == ReceiveMode::Exclusive)
            .unwrap_or(false);
        if exclusive {
            errors.push(ValidationError::ExclusiveInputFanIn {
                node_id,
                port: port.to_string(),
                producer_count,
            });
        }
    }
}
