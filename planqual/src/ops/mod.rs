// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Operator and expression identities
//!
//! Identities decide when two plan nodes describe "the same" operator so that
//! repeated occurrences collapse into one statistic. Names are interned, which
//! makes equality a matter of value rather than of which node the name came from.

pub mod identity;
pub mod name_ref;

pub use identity::{ExpressionIdentity, OperatorIdentity};
pub use name_ref::{NameRef, OpType};
