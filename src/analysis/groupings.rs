/// Deterministic grouping of lookup records.
///
/// Partitions a flat sequence of records into an ordered mapping keyed by a
/// derived property: groups iterate in ascending key order, and within a
/// group records keep their relative order from the input. The lookup
/// pipeline uses this to organize API results (canonically: rhymes bucketed
/// by syllable count) before rendering.
///
/// Grouping is a pure function of its inputs. It performs no I/O, never
/// mutates the input slice, and allocates only fresh local state, so it is
/// safe to call from any number of threads at once.

use std::collections::BTreeMap;

use serde_json::Value;

// ---------------------------------------------------------------------------
// Group keys
// ---------------------------------------------------------------------------

/// A derived grouping key with one explicit total order across key shapes.
///
/// The ordering is deliberate rather than coercion-based: integer keys sort
/// numerically and come first, textual keys sort lexicographically after
/// them, and records whose key field is absent or `null` collect under
/// `Missing`, which sorts last. The derived `Ord` on this enum (variant
/// order, then payload) is exactly that order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupKey {
    /// An integral JSON number, compared numerically.
    Number(i64),
    /// Any other present scalar, via its canonical string form, compared
    /// lexicographically. Non-integral numbers, booleans, and composite
    /// values also land here as their compact JSON text.
    Text(String),
    /// The key field was absent or `null`.
    Missing,
}

impl GroupKey {
    /// Derives a key from an optional JSON value.
    ///
    /// `None` and `Value::Null` both map to `Missing`; present-but-falsy
    /// values (`0`, `""`, `false`) are ordinary keys.
    pub fn from_json(value: Option<&Value>) -> GroupKey {
        match value {
            None | Some(Value::Null) => GroupKey::Missing,
            Some(Value::Number(n)) => match n.as_i64() {
                Some(i) => GroupKey::Number(i),
                None => GroupKey::Text(n.to_string()),
            },
            Some(Value::String(s)) => GroupKey::Text(s.clone()),
            Some(Value::Bool(b)) => GroupKey::Text(b.to_string()),
            Some(other) => GroupKey::Text(other.to_string()),
        }
    }

    /// Derives a key from an optional count, e.g. a syllable count.
    pub fn from_count(count: Option<u32>) -> GroupKey {
        match count {
            Some(n) => GroupKey::Number(n as i64),
            None => GroupKey::Missing,
        }
    }
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupKey::Number(n) => write!(f, "{}", n),
            GroupKey::Text(s) => write!(f, "{}", s),
            GroupKey::Missing => write!(f, "(none)"),
        }
    }
}

// ---------------------------------------------------------------------------
// Key rules
// ---------------------------------------------------------------------------

/// How to derive a group key from a record.
///
/// `Field` reads the named field from the record and never fails — an absent
/// field simply yields `GroupKey::Missing`. `Derive` invokes the supplied
/// function once per record and may fail; a failure aborts the whole
/// grouping operation.
pub enum KeyRule<'a> {
    Field(&'a str),
    Derive(&'a dyn Fn(&Value) -> Result<GroupKey, String>),
}

impl<'a> KeyRule<'a> {
    /// Resolves the rule into a single uniform record→key function, applied
    /// identically to every record.
    fn resolve(&self) -> impl Fn(&Value) -> Result<GroupKey, String> + '_ {
        move |record: &Value| match self {
            KeyRule::Field(name) => Ok(GroupKey::from_json(record.get(*name))),
            KeyRule::Derive(f) => f(record),
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can arise while grouping.
#[derive(Debug, PartialEq)]
pub enum GroupingError {
    /// A `KeyRule::Derive` function failed on a record. The operation is
    /// aborted with no partial result.
    KeyDerivation(String),
}

impl std::fmt::Display for GroupingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupingError::KeyDerivation(msg) => write!(f, "Key derivation failed: {}", msg),
        }
    }
}

impl std::error::Error for GroupingError {}

// ---------------------------------------------------------------------------
// Group results
// ---------------------------------------------------------------------------

/// An ordered mapping from group key to the records sharing that key.
///
/// Keys iterate in ascending `GroupKey` order; each group's records keep
/// their relative order from the input sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupResult {
    groups: BTreeMap<GroupKey, Vec<Value>>,
}

impl GroupResult {
    /// Iterates over `(key, records)` pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, &[Value])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Iterates over keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &GroupKey> {
        self.groups.keys()
    }

    /// Returns the records grouped under `key`, if any.
    pub fn get(&self, key: &GroupKey) -> Option<&[Value]> {
        self.groups.get(key).map(|v| v.as_slice())
    }

    /// Number of distinct groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of records across all groups.
    pub fn record_count(&self) -> usize {
        self.groups.values().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Concatenates all groups in output order into a flat sequence.
    ///
    /// Regrouping the result of `flatten` by the same rule reproduces an
    /// equivalent `GroupResult`.
    pub fn flatten(&self) -> Vec<Value> {
        self.groups.values().flatten().cloned().collect()
    }
}

// ---------------------------------------------------------------------------
// Grouping operations
// ---------------------------------------------------------------------------

/// Groups `records` by the key each one derives under `rule`.
///
/// Single pass in input order: each record's key is derived via the resolved
/// rule and the record is appended to that key's group. The accumulator is a
/// `BTreeMap`, so ascending key order falls out of the container rather than
/// a separate sort step. Empty input yields an empty result.
///
/// The first derivation failure aborts the operation; no partial result is
/// returned. Retrying with identical inputs is pointless — callers that need
/// partial-failure tolerance must validate record shape first.
pub fn group(records: &[Value], rule: &KeyRule) -> Result<GroupResult, GroupingError> {
    let derive = rule.resolve();
    let mut groups: BTreeMap<GroupKey, Vec<Value>> = BTreeMap::new();
    for record in records {
        let key = derive(record).map_err(GroupingError::KeyDerivation)?;
        groups.entry(key).or_default().push(record.clone());
    }
    Ok(GroupResult { groups })
}

/// Typed counterpart of [`group`] for callers with concrete record types
/// and an infallible key function.
///
/// Same contract: ascending key order via the `BTreeMap`, stable intra-group
/// order, input untouched.
pub fn group_by<T, K, F>(items: &[T], key: F) -> BTreeMap<K, Vec<T>>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut groups: BTreeMap<K, Vec<T>> = BTreeMap::new();
    for item in items {
        groups.entry(key(item)).or_default().push(item.clone());
    }
    groups
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
