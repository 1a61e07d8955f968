// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Backend-facing graph description.
//!
//! The execution backend receives the pipeline as plain data: one entry per
//! node (type name, property mapping, port topology) plus the typed edges.
//! The backend decodes everything by field name, so these structs rename to
//! camelCase and never reorder fields.

use serde::{Deserialize, Serialize};

use crate::datatypes::Datatype;
use crate::ports::{DatatypeMatch, Input, Output, ReceiveMode};
use crate::traits::{Node, NodeId};

use super::graph::Connection;

/// Complete serialized pipeline definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineSchema {
    pub nodes: Vec<NodeSchema>,
    pub connections: Vec<ConnectionSchema>,
}

/// One serialized pipeline vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSchema {
    pub id: NodeId,
    /// The node's fixed type identifier; the backend resolves execution
    /// behavior by this name.
    pub name: String,
    /// The ordered property mapping, exactly as [`Node::properties`] returned
    /// it at serialization time.
    pub properties: serde_json::Value,
    pub inputs: Vec<InputSchema>,
    pub outputs: Vec<OutputSchema>,
}

impl NodeSchema {
    pub fn from_node(node: &dyn Node) -> Self {
        Self {
            id: node.id(),
            name: node.type_name().to_string(),
            properties: node.properties(),
            inputs: node.inputs().into_iter().map(InputSchema::from).collect(),
            outputs: node.outputs().into_iter().map(OutputSchema::from).collect(),
        }
    }
}

/// Serialized input port declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSchema {
    pub name: String,
    pub mode: ReceiveMode,
    pub accepts: Vec<DatatypeMatch>,
}

impl From<&Input> for InputSchema {
    fn from(input: &Input) -> Self {
        Self {
            name: input.name().to_string(),
            mode: input.mode(),
            accepts: input.accepted().to_vec(),
        }
    }
}

/// Serialized output port declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSchema {
    pub name: String,
    pub datatype: Datatype,
}

impl From<&Output> for OutputSchema {
    fn from(output: &Output) -> Self {
        Self {
            name: output.name().to_string(),
            datatype: output.emits(),
        }
    }
}

/// Serialized edge between two ports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionSchema {
    pub from_node: NodeId,
    pub from_output: String,
    pub to_node: NodeId,
    pub to_input: String,
}

impl From<&Connection> for ConnectionSchema {
    fn from(connection: &Connection) -> Self {
        Self {
            from_node: connection.from_node,
            from_output: connection.from_output.clone(),
            to_node: connection.to_node,
            to_input: connection.to_input.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::XLinkOut;
    use crate::pipeline::PipelineContext;

    #[test]
    fn test_node_schema_captures_ports_and_properties() {
        let context = PipelineContext::new();
        let mut node = XLinkOut::new(&context);
        node.set_stream_name("preview");

        let schema = NodeSchema::from_node(&node);
        assert_eq!(schema.name, "XLinkOut");
        assert_eq!(schema.properties["streamName"], "preview");
        assert_eq!(schema.inputs.len(), 1);
        assert_eq!(schema.inputs[0].name, "in");
        assert_eq!(schema.inputs[0].mode, ReceiveMode::Exclusive);
        assert!(schema.outputs.is_empty());
    }

    #[test]
    fn test_schema_serializes_with_camel_case_fields() {
        let schema = ConnectionSchema {
            from_node: NodeId(0),
            from_output: "out".to_string(),
            to_node: NodeId(1),
            to_input: "in".to_string(),
        };

        let json = serde_json::to_value(&schema).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["fromNode", "fromOutput", "toNode", "toInput"]);
    }
}
