// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use std::any::Any;

use crate::datatypes::Datatype;
use crate::pipeline::PipelineContext;
use crate::ports::{DatatypeMatch, Input, Output, ReceiveMode};
use crate::properties;
use crate::traits::{Node, NodeId};

#[derive(Debug, Clone, Default, Serialize)]
struct StubProperties {}

/// A stub node implementation for testing and placeholder purposes.
///
/// Unlike the boundary nodes, a stub's ports are chosen at construction, so
/// wiring paths the real catalog cannot produce (restricted accepted sets,
/// queueing fan-in, datatype mismatches) can still be exercised.
#[derive(Debug, Clone)]
pub struct StubNode {
    id: NodeId,
    input: Option<Input>,
    output: Option<Output>,
}

impl StubNode {
    /// A pass-through shape: one queueing input accepting exactly
    /// `ImgFrame`, one output emitting `ImgFrame`.
    pub fn new(context: &PipelineContext) -> Self {
        let id = context.allocate_id();
        Self {
            id,
            input: Some(Input::new(
                id,
                "in",
                ReceiveMode::Queueing,
                vec![DatatypeMatch::exact(Datatype::ImgFrame)],
            )),
            output: Some(Output::new(id, "out", Datatype::ImgFrame)),
        }
    }

    /// A source shape: no inputs, one output emitting `datatype`.
    pub fn emitting(context: &PipelineContext, datatype: Datatype) -> Self {
        let id = context.allocate_id();
        Self {
            id,
            input: None,
            output: Some(Output::new(id, "out", datatype)),
        }
    }

    /// A sink shape: one input with the given policy and accepted set, no
    /// outputs.
    pub fn accepting(
        context: &PipelineContext,
        mode: ReceiveMode,
        accepts: Vec<DatatypeMatch>,
    ) -> Self {
        let id = context.allocate_id();
        Self {
            id,
            input: Some(Input::new(id, "in", mode, accepts)),
            output: None,
        }
    }
}

impl Node for StubNode {
    fn type_name(&self) -> &'static str {
        "Stub"
    }

    fn id(&self) -> NodeId {
        self.id
    }

    fn inputs(&self) -> Vec<&Input> {
        self.input.iter().collect()
    }

    fn outputs(&self) -> Vec<&Output> {
        self.output.iter().collect()
    }

    fn properties(&self) -> serde_json::Value {
        properties::to_payload(&StubProperties::default())
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
