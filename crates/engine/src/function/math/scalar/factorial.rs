// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 QuiverDB

use quiver_core::ColumnData;
use quiver_type::{Fragment, Type};

use crate::function::{
	NullHandling, ScalarFunction, ScalarFunctionContext,
	error::{ScalarFunctionError, ScalarFunctionResult},
};

/// Exact factorials representable in a signed 64-bit integer: 0! through 20!.
const FACTORIALS: [i64; 21] = [
	1,
	1,
	2,
	6,
	24,
	120,
	720,
	5040,
	40320,
	362880,
	3628800,
	39916800,
	479001600,
	6227020800,
	87178291200,
	1307674368000,
	20922789888000,
	355687428096000,
	6402373705728000,
	121645100408832000,
	2432902008176640000,
];

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

pub struct Factorial;

impl Factorial {
	pub fn new() -> Self {
		Self
	}
}

fn compute_factorial(value: i64) -> Option<i64> {
	if (0..=20).contains(&value) {
		Some(FACTORIALS[value as usize])
	} else {
		None
	}
}

impl ScalarFunction for Factorial {
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

	// Runs for undefined inputs too: the kernel writes the undefined
	// marker itself so the output keeps batch shape.
	fn null_handling(&self) -> NullHandling {
		NullHandling::Custom
	}

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

		if decoded.is_constant_mapping() {
			// One stored value answers for every row: resolve and
			// compute once, fan the result out.
			let factorial = decoded.i64_at(0).and_then(compute_factorial);
			for row in ctx.rows.iter() {
				match factorial {
					Some(value) => out.set(row, value),
					None => out.set_undefined(row),
				}
			}
		} else {
			// Identity and dictionary mappings share the decoded
			// per-row lookup.
			for row in ctx.rows.iter() {
				match decoded.i64_at(row).and_then(compute_factorial) {
					Some(value) => out.set(row, value),
					None => out.set_undefined(row),
				}
			}
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use quiver_core::{Column, Columns, RowSet};

	use super::*;

	#[test]
	fn test_compute_factorial() {
		assert_eq!(compute_factorial(0), Some(1));
		assert_eq!(compute_factorial(1), Some(1));
		assert_eq!(compute_factorial(5), Some(120));
		assert_eq!(compute_factorial(10), Some(3628800));
		assert_eq!(compute_factorial(15), Some(1307674368000));
		assert_eq!(compute_factorial(20), Some(2432902008176640000));
		assert_eq!(compute_factorial(-1), None);
		assert_eq!(compute_factorial(21), None);
		assert_eq!(compute_factorial(i64::MAX), None);
		assert_eq!(compute_factorial(i64::MIN), None);
	}

	#[test]
	fn test_bind() {
		let fragment = Fragment::internal("factorial");
		let factorial = Factorial::new();

		assert_eq!(factorial.bind(&fragment, &[Type::Int4]).unwrap(), Type::Int8);
		assert_eq!(factorial.bind(&fragment, &[Type::Uint8]).unwrap(), Type::Int8);

		assert!(matches!(
			factorial.bind(&fragment, &[]),
			Err(ScalarFunctionError::ArityMismatch {
				expected: 1,
				actual: 0,
				..
			})
		));
		assert!(matches!(
			factorial.bind(&fragment, &[Type::Int4, Type::Int4]),
			Err(ScalarFunctionError::ArityMismatch {
				expected: 1,
				actual: 2,
				..
			})
		));
		assert!(matches!(
			factorial.bind(&fragment, &[Type::Float8]),
			Err(ScalarFunctionError::InvalidArgumentType {
				actual: Type::Float8,
				..
			})
		));
	}

	#[test]
	fn test_scalar_writes_only_selected_rows() {
		let fragment = Fragment::internal("factorial");
		let rows = RowSet::from_indices(4, [0, 2]);
		let columns = Columns::new(vec![Column::int4("n", [3, 4, 5, 6])]);
		let mut output = ColumnData::typed_undefined(Type::Int8, 4);

		let ctx = ScalarFunctionContext {
			fragment: &fragment,
			rows: &rows,
			columns: &columns,
		};
		Factorial::new().scalar(ctx, &mut output).unwrap();

		assert_eq!(
			output,
			ColumnData::int8_with_bitvec([6, 0, 120, 0], [true, false, true, false])
		);
	}
}
