// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod validation;
mod wiring;

pub use validation::ValidationError;
pub use wiring::WiringError;
