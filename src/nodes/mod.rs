// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Concrete node catalog.
//!
//! Boundary nodes move buffers across the host/device link: `XLinkIn` injects
//! host buffers into the graph, `XLinkOut` forwards graph buffers to a named
//! host stream. Everything they do at runtime is driven by the property
//! sheets they serialize; the types here are pure configuration descriptors.

pub mod stub;
pub mod xlink_in;
pub mod xlink_out;

pub use xlink_in::{XLinkIn, XLinkInProperties};
pub use xlink_out::{XLinkOut, XLinkOutProperties};
