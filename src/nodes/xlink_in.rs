// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::any::Any;

use crate::datatypes::Datatype;
use crate::pipeline::PipelineContext;
use crate::ports::{Input, Output};
use crate::properties;
use crate::traits::{Node, NodeId};

const DEFAULT_MAX_DATA_SIZE: u32 = 5 * 1024 * 1024;
const DEFAULT_NUM_FRAMES: u32 = 8;

/// Property sheet for the input boundary node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XLinkInProperties {
    /// Host-side stream the injected buffers arrive from.
    pub stream_name: String,
    /// Largest single datagram the backend will accept on this stream.
    pub max_data_size: u32,
    /// Number of receive buffers the backend preallocates.
    pub num_frames: u32,
}

impl Default for XLinkInProperties {
    fn default() -> Self {
        Self {
            stream_name: String::new(),
            max_data_size: DEFAULT_MAX_DATA_SIZE,
            num_frames: DEFAULT_NUM_FRAMES,
        }
    }
}

/// Input boundary node - injects buffers arriving on a named host stream into
/// the pipeline graph through its single output.
#[derive(Debug, Clone)]
pub struct XLinkIn {
    id: NodeId,
    properties: XLinkInProperties,
    output: Output,
}

impl XLinkIn {
    pub fn new(context: &PipelineContext) -> Self {
        let id = context.allocate_id();
        Self {
            id,
            properties: XLinkInProperties::default(),
            output: Output::new(id, "out", Datatype::RawBuffer),
        }
    }

    /// Set the host stream identifier. Any value is accepted and serialized
    /// faithfully; uniqueness is the builder's concern.
    pub fn set_stream_name(&mut self, name: impl Into<String>) {
        self.properties.stream_name = name.into();
    }

    /// Set the largest datagram size the stream will carry.
    pub fn set_max_data_size(&mut self, bytes: u32) {
        self.properties.max_data_size = bytes;
    }

    /// Set how many receive buffers the backend preallocates.
    pub fn set_num_frames(&mut self, frames: u32) {
        self.properties.num_frames = frames;
    }

    pub fn stream_name(&self) -> &str {
        &self.properties.stream_name
    }
}

impl Node for XLinkIn {
    fn type_name(&self) -> &'static str {
        "XLinkIn"
    }

    fn id(&self) -> NodeId {
        self.id
    }

    fn inputs(&self) -> Vec<&Input> {
        Vec::new()
    }

    fn outputs(&self) -> Vec<&Output> {
        vec![&self.output]
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
