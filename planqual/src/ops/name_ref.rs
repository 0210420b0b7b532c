// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Interned operator names and operator types

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Process-wide pool of interned names
static NAME_POOL: Lazy<Mutex<HashSet<Arc<str>>>> = Lazy::new(|| Mutex::new(HashSet::new()));

/// Reference to an interned operator or expression name
///
/// Textually equal names always compare and hash equal. Interning only shares
/// the allocation; equality never depends on pointer identity.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NameRef(Arc<str>);

impl NameRef {
    /// Intern a name, reusing the pooled allocation when one exists
    pub fn intern(name: &str) -> Self {
        let mut pool = NAME_POOL.lock();
        if let Some(existing) = pool.get(name) {
            return NameRef(Arc::clone(existing));
        }
        let interned: Arc<str> = Arc::from(name);
        pool.insert(Arc::clone(&interned));
        NameRef(interned)
    }

    /// The empty name used by placeholder nodes
    pub fn empty() -> Self {
        Self::intern("")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether both references share the pooled allocation
    pub fn ptr_eq(&self, other: &NameRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for NameRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl fmt::Display for NameRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for NameRef {
    fn from(name: &str) -> Self {
        NameRef::intern(name)
    }
}

impl From<String> for NameRef {
    fn from(name: String) -> Self {
        NameRef::intern(&name)
    }
}

impl AsRef<str> for NameRef {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Serialize for NameRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NameRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(NameRef::intern(&name))
    }
}

/// Closed set of operator types used in identities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OpType {
    /// Scan over a file or table source
    ReadExec,
    /// Scan over an existing RDD
    ReadRdd,
    /// Data writing command
    WriteExec,
    /// Any other physical operator
    Exec,
    /// Expression nested under an operator
    Expr,
}

impl OpType {
    /// Operator type for a resolved exec name
    pub fn for_exec_name(name: &str) -> Self {
        if name.starts_with("Scan ExistingRDD") || name.starts_with("ExistingRDD") {
            OpType::ReadRdd
        } else if name.starts_with("Scan") || name.starts_with("BatchScan") {
            OpType::ReadExec
        } else if name.contains("Write") || name.starts_with("Insert") {
            OpType::WriteExec
        } else {
            OpType::Exec
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OpType::ReadExec => "ReadExec",
            OpType::ReadRdd => "ReadRDD",
            OpType::WriteExec => "WriteExec",
            OpType::Exec => "Exec",
            OpType::Expr => "Expr",
        }
    }
}

impl fmt::Display for OpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
