// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The pipeline container: node ownership, wiring, duplication.
//!
//! A `Pipeline` is a build-time object. One builder owns and mutates it until
//! the definition is final, then [`Pipeline::serialize`] produces the schema
//! the execution backend consumes. Datatype compatibility is checked exactly
//! once per edge, in [`Pipeline::connect`]; nothing is re-validated per
//! message.

use std::collections::BTreeMap;

use crate::errors::WiringError;
use crate::observability::messages::pipeline::{
    ConnectionAccepted, ConnectionRejected, NodeCreated, PipelineCloned, PipelineSerialized,
};
use crate::traits::{Node, NodeId};

use super::context::PipelineContext;
use super::schema::{ConnectionSchema, NodeSchema, PipelineSchema};

/// A recorded edge between an output port and an input port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub from_node: NodeId,
    pub from_output: String,
    pub to_node: NodeId,
    pub to_input: String,
}

/// A directed graph of nodes under construction.
///
/// Nodes are stored in id order, which equals creation order, so every
/// iteration and the serialized schema are deterministic.
pub struct Pipeline {
    context: PipelineContext,
    pub(crate) nodes: BTreeMap<NodeId, Box<dyn Node>>,
    pub(crate) connections: Vec<Connection>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            context: PipelineContext::new(),
            nodes: BTreeMap::new(),
            connections: Vec::new(),
        }
    }

    /// Construct a node attached to this pipeline's context and store it.
    ///
    /// The builder closure receives the context so the node can allocate its
    /// id during construction; passing a constructor directly reads well:
    ///
    /// ```
    /// use gantry::nodes::XLinkOut;
    /// use gantry::pipeline::Pipeline;
    ///
    /// let mut pipeline = Pipeline::new();
    /// let out = pipeline.create(XLinkOut::new);
    /// assert!(pipeline.node(out).is_some());
    /// ```
    pub fn create<N, F>(&mut self, build: F) -> NodeId
    where
        N: Node + 'static,
        F: FnOnce(&PipelineContext) -> N,
    {
        let node = build(&self.context);
        let id = node.id();
        tracing::info!(
            "{}",
            NodeCreated {
                node_id: id,
                type_name: node.type_name(),
            }
        );
        self.nodes.insert(id, Box::new(node));
        id
    }

    /// Look up a node by handle.
    pub fn node(&self, id: NodeId) -> Option<&dyn Node> {
        self.nodes.get(&id).map(|node| node.as_ref())
    }

    /// Typed read access to a stored node.
    pub fn node_as<N: Node + 'static>(&self, id: NodeId) -> Option<&N> {
        self.nodes.get(&id).and_then(|node| node.as_any().downcast_ref::<N>())
    }

    /// Typed configuration access to a stored node. Setters stay on the
    /// concrete types; this is how the builder reaches them after creation.
    pub fn node_mut<N: Node + 'static>(&mut self, id: NodeId) -> Option<&mut N> {
        self.nodes
            .get_mut(&id)
            .and_then(|node| node.as_any_mut().downcast_mut::<N>())
    }

    /// All nodes, in id (creation) order.
    pub fn nodes(&self) -> impl Iterator<Item = &dyn Node> {
        self.nodes.values().map(|node| node.as_ref())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All recorded edges, in wiring order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Wire an output port to an input port.
    ///
    /// This is the one place port compatibility is consulted: the connection
    /// is recorded only if the output's datatype is a member of the input's
    /// accepted set, directly or through descendant acceptance.
    pub fn connect(
        &mut self,
        from: NodeId,
        from_output: &str,
        to: NodeId,
        to_input: &str,
    ) -> Result<(), WiringError> {
        match self.check_wiring(from, from_output, to, to_input) {
            Ok(()) => {
                tracing::info!(
                    "{}",
                    ConnectionAccepted {
                        from_node: from,
                        from_output,
                        to_node: to,
                        to_input,
                    }
                );
                self.connections.push(Connection {
                    from_node: from,
                    from_output: from_output.to_string(),
                    to_node: to,
                    to_input: to_input.to_string(),
                });
                Ok(())
            }
            Err(error) => {
                tracing::warn!("{}", ConnectionRejected { error: &error });
                Err(error)
            }
        }
    }

    fn check_wiring(
        &self,
        from: NodeId,
        from_output: &str,
        to: NodeId,
        to_input: &str,
    ) -> Result<(), WiringError> {
        let from_node = self
            .nodes
            .get(&from)
            .ok_or(WiringError::UnknownNode { node_id: from })?;
        let to_node = self
            .nodes
            .get(&to)
            .ok_or(WiringError::UnknownNode { node_id: to })?;

        let output = from_node
            .outputs()
            .into_iter()
            .find(|output| output.name() == from_output)
            .ok_or_else(|| WiringError::UnknownOutput {
                node_id: from,
                type_name: from_node.type_name(),
                port: from_output.to_string(),
            })?;
        let input = to_node
            .inputs()
            .into_iter()
            .find(|input| input.name() == to_input)
            .ok_or_else(|| WiringError::UnknownInput {
                node_id: to,
                type_name: to_node.type_name(),
                port: to_input.to_string(),
            })?;

        if !input.accepts_datatype(output.emits()) {
            return Err(WiringError::IncompatibleDatatypes {
                emitted: output.emits(),
                from_node: from,
                from_output: from_output.to_string(),
                to_node: to,
                to_input: to_input.to_string(),
                accepted: input.accepted().to_vec(),
            });
        }

        Ok(())
    }

    /// Produce the backend-facing graph description.
    ///
    /// Property sheets are fetched through [`Node::properties`] at this
    /// moment, so the schema reflects the configuration as it stands right
    /// now; nothing is cached earlier.
    pub fn serialize(&self) -> PipelineSchema {
        let nodes: Vec<NodeSchema> = self
            .nodes
            .values()
            .map(|node| NodeSchema::from_node(node.as_ref()))
            .collect();
        let connections: Vec<ConnectionSchema> =
            self.connections.iter().map(ConnectionSchema::from).collect();

        tracing::info!(
            "{}",
            PipelineSerialized {
                node_count: nodes.len(),
                connection_count: connections.len(),
            }
        );

        PipelineSchema { nodes, connections }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Pipeline {
    /// Duplicate the definition: every node is deep-copied through
    /// [`Node::clone_node`], edges are copied verbatim. The copy shares no
    /// mutable state with the original, so both sides may be reconfigured
    /// independently afterward.
    fn clone(&self) -> Self {
        let copy = Self {
            context: self.context.fork(),
            nodes: self
                .nodes
                .iter()
                .map(|(id, node)| (*id, node.clone_node()))
                .collect(),
            connections: self.connections.clone(),
        };
        tracing::info!(
            "{}",
            PipelineCloned {
                node_count: copy.nodes.len(),
                connection_count: copy.connections.len(),
            }
        );
        copy
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("node_count", &self.nodes.len())
            .field("connection_count", &self.connections.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::Datatype;
    use crate::nodes::stub::StubNode;
    use crate::nodes::{XLinkIn, XLinkOut};
    use crate::ports::{DatatypeMatch, ReceiveMode};

    #[test]
    fn test_create_assigns_ascending_ids() {
        let mut pipeline = Pipeline::new();
        let first = pipeline.create(XLinkIn::new);
        let second = pipeline.create(XLinkOut::new);

        assert!(first < second);
        assert_eq!(pipeline.node_count(), 2);
        assert_eq!(pipeline.node(first).unwrap().type_name(), "XLinkIn");
        assert_eq!(pipeline.node(second).unwrap().type_name(), "XLinkOut");
    }

    #[test]
    fn test_connect_accepts_buffer_into_descendant_set() {
        let mut pipeline = Pipeline::new();
        let from = pipeline.create(XLinkIn::new);
        let to = pipeline.create(XLinkOut::new);

        assert!(pipeline.connect(from, "out", to, "in").is_ok());
        assert_eq!(pipeline.connections().len(), 1);
        assert_eq!(pipeline.connections()[0].from_node, from);
        assert_eq!(pipeline.connections()[0].to_input, "in");
    }

    #[test]
    fn test_connect_rejects_unknown_node() {
        let mut pipeline = Pipeline::new();
        let to = pipeline.create(XLinkOut::new);

        let result = pipeline.connect(NodeId(99), "out", to, "in");
        assert_eq!(
            result,
            Err(WiringError::UnknownNode {
                node_id: NodeId(99)
            })
        );
        assert!(pipeline.connections().is_empty());
    }

    #[test]
    fn test_connect_rejects_unknown_ports() {
        let mut pipeline = Pipeline::new();
        let from = pipeline.create(XLinkIn::new);
        let to = pipeline.create(XLinkOut::new);

        let result = pipeline.connect(from, "missing", to, "in");
        assert!(matches!(
            result,
            Err(WiringError::UnknownOutput { port, .. }) if port == "missing"
        ));

        let result = pipeline.connect(from, "out", to, "missing");
        assert!(matches!(
            result,
            Err(WiringError::UnknownInput { port, .. }) if port == "missing"
        ));
    }

    #[test]
    fn test_connect_rejects_incompatible_datatypes() {
        let mut pipeline = Pipeline::new();
        let from = pipeline.create(|ctx| StubNode::emitting(ctx, Datatype::CameraControl));
        let to = pipeline.create(|ctx| {
            StubNode::accepting(
                ctx,
                ReceiveMode::Queueing,
                vec![DatatypeMatch::exact(Datatype::ImgFrame)],
            )
        });

        let result = pipeline.connect(from, "out", to, "in");
        assert!(matches!(
            result,
            Err(WiringError::IncompatibleDatatypes {
                emitted: Datatype::CameraControl,
                ..
            })
        ));
        assert!(pipeline.connections().is_empty());
    }

    #[test]
    fn test_node_mut_reaches_concrete_setters() {
        let mut pipeline = Pipeline::new();
        let out = pipeline.create(XLinkOut::new);

        pipeline
            .node_mut::<XLinkOut>(out)
            .unwrap()
            .set_stream_name("preview");

        assert_eq!(
            pipeline.node(out).unwrap().properties()["streamName"],
            "preview"
        );
        assert_eq!(
            pipeline.node_as::<XLinkOut>(out).unwrap().stream_name(),
            "preview"
        );
        // Downcast to the wrong concrete type yields None, not a panic.
        assert!(pipeline.node_mut::<XLinkIn>(out).is_none());
        assert!(pipeline.node_as::<XLinkIn>(out).is_none());
    }

    #[test]
    fn test_clone_duplicates_definition_independently() {
        let mut original = Pipeline::new();
        let from = original.create(XLinkIn::new);
        let to = original.create(XLinkOut::new);
        original.connect(from, "out", to, "in").unwrap();
        original
            .node_mut::<XLinkOut>(to)
            .unwrap()
            .set_stream_name("preview");

        let copy = original.clone();
        assert_eq!(copy.serialize(), original.serialize());

        original
            .node_mut::<XLinkOut>(to)
            .unwrap()
            .set_stream_name("changed");

        assert_eq!(copy.serialize().nodes[1].properties["streamName"], "preview");
        assert_eq!(
            original.serialize().nodes[1].properties["streamName"],
            "changed"
        );
    }

    #[test]
    fn test_clone_continues_id_allocation() {
        let mut original = Pipeline::new();
        original.create(XLinkIn::new);

        let mut copy = original.clone();
        let next = copy.create(XLinkOut::new);
        assert_eq!(next, NodeId(1));
    }
}
