// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::any::Any;

use crate::datatypes::Datatype;
use crate::pipeline::PipelineContext;
use crate::ports::{DatatypeMatch, Input, Output, ReceiveMode};
use crate::properties;
use crate::traits::{Node, NodeId};

/// Property sheet for the output boundary node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XLinkOutProperties {
    /// Host-side stream the received buffers are forwarded to.
    pub stream_name: String,
    /// Maximum forwarding rate in frames per second; <= 0 means unlimited.
    pub max_fps_limit: f64,
}

impl Default for XLinkOutProperties {
    fn default() -> Self {
        Self {
            stream_name: String::new(),
            max_fps_limit: -1.0,
        }
    }
}

/// Output boundary node - forwards any buffer-derived message it receives to
/// a named stream outside the pipeline graph.
///
/// The single input accepts the root buffer datatype with descendants, so any
/// message kind may terminate here. Rate limiting and the actual transfer are
/// executed by the backend from the serialized properties.
#[derive(Debug, Clone)]
pub struct XLinkOut {
    id: NodeId,
    properties: XLinkOutProperties,
    input: Input,
}

impl XLinkOut {
    pub fn new(context: &PipelineContext) -> Self {
        let id = context.allocate_id();
        Self {
            id,
            properties: XLinkOutProperties::default(),
            input: Input::new(
                id,
                "in",
                ReceiveMode::Exclusive,
                vec![DatatypeMatch::with_descendants(Datatype::RawBuffer)],
            ),
        }
    }

    /// Set the host stream identifier. Uniqueness across the pipeline is the
    /// builder's concern; any value is accepted and serialized faithfully.
    pub fn set_stream_name(&mut self, name: impl Into<String>) {
        self.properties.stream_name = name.into();
    }

    /// Set the maximum forwarding rate. Non-positive disables limiting; no
    /// clamping is performed here.
    pub fn set_fps_limit(&mut self, fps: f64) {
        self.properties.max_fps_limit = fps;
    }

    pub fn stream_name(&self) -> &str {
        &self.properties.stream_name
    }
}

impl Node for XLinkOut {
    fn type_name(&self) -> &'static str {
        "XLinkOut"
    }

    fn id(&self) -> NodeId {
        self.id
    }

    fn inputs(&self) -> Vec<&Input> {
        vec![&self.input]
    }

    fn outputs(&self) -> Vec<&Output> {
        Vec::new()
    }

    fn properties(&self) -> serde_json::Value {
        properties::to_payload(&self.properties)
    }

    fn clone_node(&self) -> Box<dyn Node> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
