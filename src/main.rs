// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::path::Path;
use std::process;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use gantry::nodes::{XLinkIn, XLinkOut};
use gantry::pipeline::{known_node_types, load_pipeline, validate_pipeline, Pipeline};

/// Build the canonical loopback pipeline: a host input stream routed
/// straight back out to a host output stream.
fn demo_pipeline() -> anyhow::Result<Pipeline> {
    let mut pipeline = Pipeline::new();
    let input = pipeline.create(XLinkIn::new);
    let output = pipeline.create(XLinkOut::new);

    if let Some(node) = pipeline.node_mut::<XLinkIn>(input) {
        node.set_stream_name("host_in");
    }
    if let Some(node) = pipeline.node_mut::<XLinkOut>(output) {
        node.set_stream_name("host_out");
        node.set_fps_limit(30.0);
    }

    pipeline.connect(input, "out", output, "in")?;
    Ok(pipeline)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [pipeline.yaml]", args[0]);
        eprintln!("Without a definition file, a demo loopback pipeline is built.");
        eprintln!("Known node types: {}", known_node_types().join(", "));
        process::exit(1);
    }

    let pipeline = match args.get(1) {
        Some(path) => load_pipeline(Path::new(path))
            .with_context(|| format!("loading pipeline definition from {}", path))?,
        None => demo_pipeline()?,
    };

    if let Err(errors) = validate_pipeline(&pipeline) {
        for error in &errors {
            eprintln!("Validation error: {}", error);
        }
        process::exit(1);
    }

    let schema = pipeline.serialize();
    println!("{}", serde_json::to_string_pretty(&schema)?);

    Ok(())
}
