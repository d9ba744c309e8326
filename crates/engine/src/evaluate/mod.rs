// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 QuiverDB

use quiver_core::{Column, ColumnData, Columns, DecodedColumn, EncodedColumn, RowSet};
use quiver_type::{
	Fragment, Type, error,
	error::diagnostic::function::{internal_error, unknown_function},
};

use crate::{
	expression::{CallExpression, ColumnExpression, Expression},
	function::{Functions, NullHandling, ScalarFunction, ScalarFunctionContext, math},
};

/// Per-batch state the host supplies: the input columns and the rows the
/// evaluation must cover.
pub struct EvaluationContext<'a> {
	pub rows: &'a RowSet,
	pub columns: &'a Columns,
}

/// A bound expression: names resolved, arities and types validated.
pub enum BoundExpression {
	Column(ColumnExpression),
	Call(BoundCall),
}

impl std::fmt::Debug for BoundExpression {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			BoundExpression::Column(column) => {
				f.debug_tuple("Column").field(column).finish()
			}
			BoundExpression::Call(call) => f.debug_tuple("Call").field(call).finish(),
		}
	}
}

impl BoundExpression {
	pub fn ty(&self) -> Type {
		match self {
			BoundExpression::Column(column) => column.ty,
			BoundExpression::Call(call) => call.return_type,
		}
	}
}

/// An expression node wrapping a validated scalar function call.
pub struct BoundCall {
	pub function: Box<dyn ScalarFunction>,
	pub fragment: Fragment,
	pub args: Vec<BoundExpression>,
	pub return_type: Type,
	pub null_handling: NullHandling,
}

impl std::fmt::Debug for BoundCall {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("BoundCall")
			.field("fragment", &self.fragment)
			.field("args", &self.args)
			.field("return_type", &self.return_type)
			.field("null_handling", &self.null_handling)
			.finish()
	}
}

pub struct Evaluator {
	functions: Functions,
}

impl Default for Evaluator {
	fn default() -> Self {
		Self {
			functions: Functions::builder()
				.register_scalar("abs", math::scalar::Abs::new)
				.register_scalar("factorial", math::scalar::Factorial::new)
				.build(),
		}
	}
}

impl Evaluator {
	pub fn new(functions: Functions) -> Self {
		Self {
			functions,
		}
	}

	/// Resolve and validate an expression. Construction failures surface
	/// here, before any row is evaluated.
	pub fn bind(&self, expr: &Expression) -> crate::Result<BoundExpression> {
		match expr {
			Expression::Column(column) => Ok(BoundExpression::Column(column.clone())),
			Expression::Call(call) => self.bind_call(call).map(BoundExpression::Call),
		}
	}

	fn bind_call(&self, call: &CallExpression) -> crate::Result<BoundCall> {
		let function = match self.functions.get_scalar(call.function.text()) {
			Some(function) => function,
			None => return Err(error!(unknown_function(call.function.clone()))),
		};

		let mut args = Vec::with_capacity(call.args.len());
		for arg in &call.args {
			args.push(self.bind(arg)?);
		}
		let arg_types: Vec<Type> = args.iter().map(|arg| arg.ty()).collect();

		let return_type = function
			.bind(&call.function, &arg_types)
			.map_err(quiver_type::Error::from)?;
		let null_handling = function.null_handling();

		tracing::debug!(
			function = call.function.text(),
			return_type = %return_type,
			"bound scalar call"
		);

		Ok(BoundCall {
			function,
			fragment: call.function.clone(),
			args,
			return_type,
			null_handling,
		})
	}

	/// Evaluate a bound expression over one batch and return its column.
	pub fn evaluate(
		&self,
		ctx: &EvaluationContext,
		expr: &BoundExpression,
	) -> crate::Result<Column> {
		match expr {
			BoundExpression::Column(column) => match ctx.columns.get(column.index) {
				Some(input) => Ok(input.clone()),
				None => Err(error!(internal_error(
					column.fragment.clone(),
					format!("column index {} out of range", column.index),
				))),
			},
			BoundExpression::Call(call) => self.evaluate_call(ctx, call),
		}
	}

	fn evaluate_call(&self, ctx: &EvaluationContext, call: &BoundCall) -> crate::Result<Column> {
		let mut columns = Vec::with_capacity(call.args.len());
		for arg in &call.args {
			columns.push(self.evaluate(ctx, arg)?);
		}
		let columns = Columns::new(columns);

		// The host owns the output allocation; the kernel only claims
		// writability for the selected rows.
		let mut output = ColumnData::typed_undefined(call.return_type, ctx.rows.row_count());

		let narrowed;
		let rows = match call.null_handling {
			NullHandling::Custom => ctx.rows,
			NullHandling::Propagate => {
				narrowed = defined_rows(ctx.rows, &columns);
				&narrowed
			}
		};

		tracing::debug!(
			function = call.fragment.text(),
			rows = rows.count(),
			"evaluating scalar call"
		);

		let fctx = ScalarFunctionContext {
			fragment: &call.fragment,
			rows,
			columns: &columns,
		};
		call.function.scalar(fctx, &mut output).map_err(quiver_type::Error::from)?;

		Ok(Column {
			name: call.fragment.clone(),
			data: EncodedColumn::Flat(output),
		})
	}
}

/// Narrow `rows` to those where every argument column is defined. Rows that
/// fall out keep the undefined marker the host wrote into the output.
fn defined_rows(rows: &RowSet, columns: &Columns) -> RowSet {
	let decoded: Vec<DecodedColumn> =
		columns.iter().map(|column| column.data().decode(rows)).collect();

	RowSet::from_indices(
		rows.row_count(),
		rows.iter().filter(|&row| decoded.iter().all(|column| !column.is_undefined(row))),
	)
}
