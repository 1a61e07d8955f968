// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Typed connection points on pipeline nodes.
//!
//! A node declares its ports once, at construction, and never changes them
//! afterward. Ports carry only metadata: which node owns them, what the port
//! is called, and which datatypes may pass through. Actual buffer movement is
//! the transport layer's job; the metadata here is consulted at wiring time
//! only.
//!
//! Ownership is expressed as a [`NodeId`] handle rather than a reference, so
//! a port never keeps its node alive and a cloned node's ports resolve to the
//! clone inside its own graph.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::datatypes::Datatype;
use crate::traits::NodeId;

/// Receive policy of an input port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReceiveMode {
    /// Single producer; the receiver blocks on the one upstream output.
    Exclusive,
    /// Shared queueing receiver; multiple producers may fan in.
    Queueing,
}

/// One entry in an input port's accepted-datatype set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatatypeMatch {
    pub datatype: Datatype,
    pub allow_descendants: bool,
}

impl DatatypeMatch {
    /// Accept exactly this datatype.
    pub fn exact(datatype: Datatype) -> Self {
        Self {
            datatype,
            allow_descendants: false,
        }
    }

    /// Accept this datatype and everything derived from it.
    pub fn with_descendants(datatype: Datatype) -> Self {
        Self {
            datatype,
            allow_descendants: true,
        }
    }

    /// Whether an emitted datatype satisfies this entry.
    pub fn matches(&self, actual: Datatype) -> bool {
        if self.allow_descendants {
            actual.is_derived_from(self.datatype)
        } else {
            actual == self.datatype
        }
    }
}

impl fmt::Display for DatatypeMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.allow_descendants {
            write!(f, "{}(+descendants)", self.datatype)
        } else {
            write!(f, "{}", self.datatype)
        }
    }
}

/// An input port: a named, typed receive point on a node.
///
/// Immutable after construction. The accepted set declares which datatypes
/// the wiring layer may route here; [`Input::accepts_datatype`] is the only
/// compatibility check in the system.
#[derive(Debug, Clone)]
pub struct Input {
    owner: NodeId,
    name: &'static str,
    mode: ReceiveMode,
    accepts: Vec<DatatypeMatch>,
}

impl Input {
    pub fn new(
        owner: NodeId,
        name: &'static str,
        mode: ReceiveMode,
        accepts: Vec<DatatypeMatch>,
    ) -> Self {
        Self {
            owner,
            name,
            mode,
            accepts,
        }
    }

    /// Handle of the node this port belongs to.
    pub fn owner(&self) -> NodeId {
        self.owner
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn mode(&self) -> ReceiveMode {
        self.mode
    }

    /// The accepted-datatype set, in declaration order.
    pub fn accepted(&self) -> &[DatatypeMatch] {
        &self.accepts
    }

    /// Whether a datatype emitted by some output may be routed to this port.
    pub fn accepts_datatype(&self, datatype: Datatype) -> bool {
        self.accepts.iter().any(|entry| entry.matches(datatype))
    }
}

/// An output port: a named emit point with a single declared datatype.
#[derive(Debug, Clone)]
pub struct Output {
    owner: NodeId,
    name: &'static str,
    emits: Datatype,
}

impl Output {
    pub fn new(owner: NodeId, name: &'static str, emits: Datatype) -> Self {
        Self { owner, name, emits }
    }

    /// Handle of the node this port belongs to.
    pub fn owner(&self) -> NodeId {
        self.owner
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The single datatype this port emits.
    pub fn emits(&self) -> Datatype {
        self.emits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_rejects_descendants() {
        let entry = DatatypeMatch::exact(Datatype::RawBuffer);
        assert!(entry.matches(Datatype::RawBuffer));
        assert!(!entry.matches(Datatype::ImgFrame));
    }

    #[test]
    fn test_descendants_match_accepts_subtree() {
        let entry = DatatypeMatch::with_descendants(Datatype::RawBuffer);
        assert!(entry.matches(Datatype::RawBuffer));
        assert!(entry.matches(Datatype::ImgFrame));
        assert!(entry.matches(Datatype::NnData));
    }

    #[test]
    fn test_input_accepts_any_entry_in_set() {
        let input = Input::new(
            NodeId(0),
            "in",
            ReceiveMode::Queueing,
            vec![
                DatatypeMatch::exact(Datatype::ImgFrame),
                DatatypeMatch::exact(Datatype::NnData),
            ],
        );
        assert!(input.accepts_datatype(Datatype::ImgFrame));
        assert!(input.accepts_datatype(Datatype::NnData));
        assert!(!input.accepts_datatype(Datatype::RawBuffer));
        assert!(!input.accepts_datatype(Datatype::CameraControl));
    }

    #[test]
    fn test_match_display_marks_descendants() {
        assert_eq!(
            DatatypeMatch::with_descendants(Datatype::RawBuffer).to_string(),
            "rawBuffer(+descendants)"
        );
        assert_eq!(
            DatatypeMatch::exact(Datatype::ImgFrame).to_string(),
            "imgFrame"
        );
    }
}
