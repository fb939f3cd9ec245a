// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Scadgen Contributors

//! OpenSCAD call-syntax rendering
//!
//! Builds the opaque text fragments stored in graph nodes: function calls
//! with positional and keyword arguments, nested bracketed lists, and the
//! `$`-sigil special parameters (`__fn` renders as `$fn`).

use std::fmt;

/// 3-component vector used for transform arguments.
pub type Vec3 = nalgebra::Vector3<f64>;

/// A value in OpenSCAD argument position: a number, a boolean, or a
/// (possibly nested) list.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Bool(bool),
    List(Vec<Expr>),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Bool(b) => write!(f, "{}", b),
            Expr::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::Number(value)
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Expr::Number(f64::from(value))
    }
}

impl From<usize> for Expr {
    fn from(value: usize) -> Self {
        Expr::Number(value as f64)
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Expr::Bool(value)
    }
}

impl From<Vec3> for Expr {
    fn from(value: Vec3) -> Self {
        Expr::List(vec![value.x.into(), value.y.into(), value.z.into()])
    }
}

impl From<(f64, f64)> for Expr {
    fn from(value: (f64, f64)) -> Self {
        Expr::List(vec![value.0.into(), value.1.into()])
    }
}

impl<T: Into<Expr> + Clone> From<&[T]> for Expr {
    fn from(values: &[T]) -> Self {
        Expr::List(values.iter().cloned().map(Into::into).collect())
    }
}

/// Renders `name(arg, ..., key = value, ...)`.
///
/// Keyword names starting with `__` are rewritten to a `$` sigil, which is
/// how renderer-specific special parameters are spelled without making the
/// caller juggle `$` in identifiers.
pub fn call(name: &str, args: &[Expr], kwargs: &[(&str, Expr)]) -> String {
    let mut parts: Vec<String> = args.iter().map(Expr::to_string).collect();

    for (key, value) in kwargs {
        let key = match key.strip_prefix("__") {
            Some(rest) => format!("${}", rest),
            None => (*key).to_string(),
        };
        parts.push(format!("{} = {}", key, value));
    }

    format!("{}({})", name, parts.join(", "))
}

/// Converts radians to the degrees OpenSCAD expects.
///
/// Dividing by pi before scaling keeps quarter-turn multiples exact
/// (`degrees(TAU / 4)` is exactly `90.0`).
pub fn degrees(angle: f64) -> f64 {
    angle / std::f64::consts::PI * 180.0
}
