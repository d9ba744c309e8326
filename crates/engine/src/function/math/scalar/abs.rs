// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 QuiverDB

use quiver_core::ColumnData;
use quiver_type::{Fragment, Type};

use crate::function::{
	ScalarFunction, ScalarFunctionContext,
	error::{ScalarFunctionError, ScalarFunctionResult},
};

const INTEGER_TYPES: [Type; 8] = [
	Type::Int1,
	Type::Int2,
	Type::Int4,
	Type::Int8,
	Type::Uint1,
	Type::Uint2,
	Type::Uint4,
	Type::Uint8,
];

pub struct Abs;

impl Abs {
	pub fn new() -> Self {
		Self
	}
}

impl ScalarFunction for Abs {
	fn bind(&self, fragment: &Fragment, args: &[Type]) -> ScalarFunctionResult<Type> {
		if args.len() != 1 {
			return Err(ScalarFunctionError::ArityMismatch {
				function: fragment.clone(),
				expected: 1,
				actual: args.len(),
			});
		}

		if !args[0].is_integer() {
			return Err(ScalarFunctionError::InvalidArgumentType {
				function: fragment.clone(),
				argument_index: 0,
				expected: INTEGER_TYPES.to_vec(),
				actual: args[0],
			});
		}

		Ok(Type::Int8)
	}

	// Default null handling: the evaluator elides undefined rows.

	fn scalar(
		&self,
		ctx: ScalarFunctionContext,
		output: &mut ColumnData,
	) -> ScalarFunctionResult<()> {
		if ctx.columns.len() != 1 {
			return Err(ScalarFunctionError::ArityMismatch {
				function: ctx.fragment.clone(),
				expected: 1,
				actual: ctx.columns.len(),
			});
		}
		let column = &ctx.columns[0];

		ctx.ensure_writable(Type::Int8, output);
		let out = match output.as_int8_mut() {
			Some(container) => container,
			None => {
				return Err(ScalarFunctionError::Internal {
					function: ctx.fragment.clone(),
					details: "output column is not Int8".to_string(),
				});
			}
		};

		let decoded = column.data().decode(ctx.rows);

		for row in ctx.rows.iter() {
			// checked_abs: |i64::MIN| does not fit, degrade to undefined
			match decoded.i64_at(row).and_then(|value| value.checked_abs()) {
				Some(value) => out.set(row, value),
				None => out.set_undefined(row),
			}
		}

		Ok(())
	}
}
