// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod datatypes;     // datatype registry
pub mod errors;        // error handling
pub mod nodes;         // concrete node catalog
pub mod observability;
pub mod pipeline;      // graph container, schema, loader
pub mod ports;         // typed connection points
pub mod properties;    // property sheet serialization
pub mod traits;        // unified abstractions
