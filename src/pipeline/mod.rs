// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod context;
mod graph;
mod loader;
mod schema;
mod validation;


pub use context::PipelineContext;
pub use graph::{Connection, Pipeline};
pub use loader::{
    build_pipeline, known_node_types, load_pipeline, parse_definition, ConnectionDefinition,
    LoadError, NodeDefinition, NodeOptions, PipelineDefinition,
};
pub use schema::{ConnectionSchema, InputSchema, NodeSchema, OutputSchema, PipelineSchema};
pub use validation::validate_pipeline;
