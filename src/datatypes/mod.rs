// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Registry of data kinds that flow through pipeline ports.
//!
//! Every message moving between nodes is one of these kinds. The kinds form a
//! shallow subtyping tree rooted at [`Datatype::RawBuffer`]: a port that
//! accepts the root with descendants enabled accepts anything. Wiring
//! validation consults this registry exactly once per connection, at connect
//! time; nothing here is checked per-message.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Enumerated data kinds carried by pipeline messages.
///
/// The identifiers serialize as stable camelCase tokens, which is the form
/// the execution backend matches against when it validates wiring at attach
/// time.
///
/// # Example
/// ```
/// use gantry::datatypes::Datatype;
///
/// assert!(Datatype::ImgFrame.is_derived_from(Datatype::RawBuffer));
/// assert!(!Datatype::ImgFrame.is_derived_from(Datatype::NnData));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Datatype {
    /// Untyped contiguous buffer; the root of the subtyping tree.
    RawBuffer,
    /// Image frame with dimensions and pixel format metadata.
    ImgFrame,
    /// Neural network inference output tensor set.
    NnData,
    /// Detection results decoded from an inference pass.
    ImgDetections,
    /// Camera runtime control command.
    CameraControl,
    /// Image transform configuration message.
    ImageManipConfig,
    /// Device health and load counters.
    SystemInformation,
}

impl Datatype {
    /// The direct supertype, or `None` for the root.
    pub fn parent(self) -> Option<Datatype> {
        match self {
            Datatype::RawBuffer => None,
            _ => Some(Datatype::RawBuffer),
        }
    }

    /// Whether `self` is `ancestor` or descends from it. Reflexive.
    pub fn is_derived_from(self, ancestor: Datatype) -> bool {
        let mut current = Some(self);
        while let Some(datatype) = current {
            if datatype == ancestor {
                return true;
            }
            current = datatype.parent();
        }
        false
    }

    /// Every registered datatype, in declaration order.
    pub fn all() -> &'static [Datatype] {
        &[
            Datatype::RawBuffer,
            Datatype::ImgFrame,
            Datatype::NnData,
            Datatype::ImgDetections,
            Datatype::CameraControl,
            Datatype::ImageManipConfig,
            Datatype::SystemInformation,
        ]
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Datatype::RawBuffer => "rawBuffer",
            Datatype::ImgFrame => "imgFrame",
            Datatype::NnData => "nnData",
            Datatype::ImgDetections => "imgDetections",
            Datatype::CameraControl => "cameraControl",
            Datatype::ImageManipConfig => "imageManipConfig",
            Datatype::SystemInformation => "systemInformation",
        };
        write!(f, "{}", token)
    }
}
