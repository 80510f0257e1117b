use std::cmp::Ordering;
use std::fmt;

/// A single entered value. Integers keep their integral form so that they
/// display as `10` rather than `10.0`, up to the range of `i128`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i128),
    Real(f64),
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(i) => i as f64,
            Number::Real(r) => r,
        }
    }

    pub fn is_finite(&self) -> bool {
        match *self {
            Number::Int(_) => true,
            Number::Real(r) => r.is_finite(),
        }
    }

    /// Numeric comparison across both variants. `None` only when a NaN is involved.
    pub fn numeric_cmp(&self, other: &Number) -> Option<Ordering> {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            // Debug keeps the trailing `.0` and switches to exponent form for
            // very large or small magnitudes.
            Number::Real(r) => write!(f, "{r:?}"),
        }
    }
}

/// The ordered list of every number the user has entered or loaded.
///
/// Only grows by appending and only shrinks by clearing everything.
#[derive(Debug, Clone)]
pub struct NumberStore {
    values: Vec<Number>,
}

impl NumberStore {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn append(&mut self, n: Number) {
        self.values.push(n);
    }

    pub fn append_all<I>(&mut self, ns: I)
    where
        I: IntoIterator<Item = Number>,
    {
        self.values.extend(ns);
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn snapshot(&self) -> &[Number] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for NumberStore {
    fn default() -> Self {
        Self::new()
    }
}
