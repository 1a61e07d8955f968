// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging of pipeline construction.
//!
//! Message types follow a struct-based pattern with `Display` trait
//! implementation so log text lives in one place instead of being scattered
//! through the container as format strings.
//!
//! # Usage
//!
//! ```rust
//! use gantry::observability::messages::pipeline::NodeCreated;
//! use gantry::traits::NodeId;
//!
//! let msg = NodeCreated {
//!     node_id: NodeId(0),
//!     type_name: "XLinkOut",
//! };
//!
//! tracing::info!("{}", msg);
//! ```

pub mod messages;
