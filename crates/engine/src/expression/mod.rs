// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 QuiverDB

use serde::{Deserialize, Serialize};

use quiver_type::{Fragment, Type};

/// An unbound expression handed to the evaluator by the host. Argument
/// expressions arrive already type-resolved; the evaluator's bind step
/// validates calls against the registered functions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Expression {
	Column(ColumnExpression),
	Call(CallExpression),
}

impl Expression {
	pub fn column(name: &str, index: usize, ty: Type) -> Self {
		Expression::Column(ColumnExpression {
			fragment: Fragment::internal(name),
			index,
			ty,
		})
	}

	pub fn call(name: &str, args: Vec<Expression>) -> Self {
		Expression::Call(CallExpression {
			function: Fragment::internal(name),
			args,
		})
	}
}

/// A reference to an input column of the batch, with its resolved type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnExpression {
	pub fragment: Fragment,
	pub index: usize,
	pub ty: Type,
}

/// A scalar function call by registered name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallExpression {
	pub function: Fragment,
	pub args: Vec<Expression>,
}
