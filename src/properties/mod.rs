// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Property sheet serialization.
//!
//! Each concrete node keeps its runtime configuration in a flat, serde-derived
//! struct (its "property sheet") colocated with the node. The backend decodes
//! the sheet by field name, so sheets rename to camelCase and serialize as an
//! ordered mapping: `serde_json` is built with `preserve_order`, which makes
//! field order follow struct declaration order on every call.

use serde::Serialize;

/// Convert a property sheet into the backend-facing interchange mapping.
///
/// Total by contract: every sheet field has a default and holds only plain
/// string/number values. A sheet that fails to serialize is a defect in the
/// node definition, not a runtime condition, so this panics rather than
/// returning a `Result`.
pub fn to_payload<T: Serialize>(sheet: &T) -> serde_json::Value {
    serde_json::to_value(sheet).expect("property sheets serialize infallibly")
}
