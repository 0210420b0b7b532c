// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Value-type identities for aggregation keys

use super::name_ref::{NameRef, OpType};
use serde::{Deserialize, Serialize};

/// Identity of an operator within one query
///
/// Two plan nodes are the same operator iff name, type and support flag match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OperatorIdentity {
    pub name: NameRef,
    pub op_type: OpType,
    pub is_supported: bool,
}

impl OperatorIdentity {
    pub fn new(name: NameRef, op_type: OpType, is_supported: bool) -> Self {
        Self {
            name,
            op_type,
            is_supported,
        }
    }
}

/// Identity of an expression nested under an operator
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExpressionIdentity {
    pub name: NameRef,
    pub op_type: OpType,
    pub is_supported: bool,
}

impl ExpressionIdentity {
    /// Expression identities always carry the `Expr` type
    pub fn new(name: NameRef, is_supported: bool) -> Self {
        Self {
            name,
            op_type: OpType::Expr,
            is_supported,
        }
    }
}
