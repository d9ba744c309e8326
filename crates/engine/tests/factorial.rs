// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 QuiverDB

use quiver_core::{BitVec, Column, ColumnData, Columns, EncodedColumn, NumberContainer, RowSet};
use quiver_engine::{
	evaluate::{EvaluationContext, Evaluator},
	expression::Expression,
};
use quiver_type::Type;

fn call_over_column(function: &str, column: &Column) -> Expression {
	Expression::call(
		function,
		vec![Expression::column("n", 0, column.data().get_type())],
	)
}

/// Bind and evaluate `function(col)` over the full batch, returning the flat
/// output payload.
fn evaluate(function: &str, column: Column) -> ColumnData {
	evaluate_rows(function, column, None)
}

fn evaluate_rows(function: &str, column: Column, rows: Option<RowSet>) -> ColumnData {
	let evaluator = Evaluator::default();
	let rows = rows.unwrap_or_else(|| RowSet::all(column.row_count()));
	let expr = call_over_column(function, &column);
	let columns = Columns::new(vec![column]);

	let ctx = EvaluationContext {
		rows: &rows,
		columns: &columns,
	};
	let bound = evaluator.bind(&expr).unwrap();
	let result = evaluator.evaluate(&ctx, &bound).unwrap();

	match result.data {
		EncodedColumn::Flat(data) => data,
		_ => panic!("scalar calls produce flat columns"),
	}
}

#[test]
fn test_basic() {
	let output = evaluate("factorial", Column::int4("n", [0, 1, 2, 5, 10, 15, 20]));
	assert_eq!(
		output,
		ColumnData::int8([1, 1, 2, 120, 3628800, 1307674368000, 2432902008176640000])
	);
}

#[test]
fn test_null_input() {
	let output = evaluate(
		"factorial",
		Column::int4_with_bitvec("n", [0, 0, 5, 20, 0], [true, false, true, true, false]),
	);
	assert_eq!(
		output,
		ColumnData::int8_with_bitvec(
			[1, 0, 120, 2432902008176640000, 0],
			[true, false, true, true, false]
		)
	);
}

#[test]
fn test_out_of_range_input() {
	let output = evaluate("factorial", Column::int4("n", [-1, 21, -5, 25]));
	assert_eq!(
		output,
		ColumnData::int8_with_bitvec([0, 0, 0, 0], [false, false, false, false])
	);
}

#[test]
fn test_mixed_inputs() {
	let output = evaluate(
		"factorial",
		Column::int4_with_bitvec(
			"n",
			[3, 5, 0, 25, -3, 10, 15],
			[true, true, false, true, true, true, true],
		),
	);
	assert_eq!(
		output,
		ColumnData::int8_with_bitvec(
			[6, 120, 0, 0, 0, 3628800, 1307674368000],
			[true, true, false, false, false, true, true]
		)
	);
}

#[test]
fn test_narrow_integer_inputs() {
	let output = evaluate("factorial", Column::int1("n", [0, 3, -1]));
	assert_eq!(output, ColumnData::int8_with_bitvec([1, 6, 0], [true, true, false]));

	let output = evaluate("factorial", Column::int2("n", [20, 21]));
	assert_eq!(
		output,
		ColumnData::int8_with_bitvec([2432902008176640000, 0], [true, false])
	);
}

#[test]
fn test_unsigned_inputs() {
	let output = evaluate("factorial", Column::uint8("n", [5, 20, 21, u64::MAX]));
	assert_eq!(
		output,
		ColumnData::int8_with_bitvec(
			[120, 2432902008176640000, 0, 0],
			[true, true, false, false]
		)
	);
}

#[test]
fn test_constant_encoding() {
	let column = Column::constant("n", ColumnData::int4([5]), 4).unwrap();
	let output = evaluate("factorial", column);
	assert_eq!(output, ColumnData::int8([120, 120, 120, 120]));
}

#[test]
fn test_constant_undefined() {
	let column =
		Column::constant("n", ColumnData::int4_with_bitvec([0], [false]), 3).unwrap();
	let output = evaluate("factorial", column);
	assert_eq!(output, ColumnData::int8_with_bitvec([0, 0, 0], [false, false, false]));
}

#[test]
fn test_constant_out_of_range() {
	let column = Column::constant("n", ColumnData::int4([25]), 3).unwrap();
	let output = evaluate("factorial", column);
	assert_eq!(output, ColumnData::int8_with_bitvec([0, 0, 0], [false, false, false]));
}

#[test]
fn test_dictionary_encoding() {
	let ids = NumberContainer::from_vec(vec![1u32, 0, 1, 0]);
	let column = Column::dictionary("n", ids, ColumnData::int4([3, 5])).unwrap();
	let output = evaluate("factorial", column);
	assert_eq!(output, ColumnData::int8([120, 6, 120, 6]));
}

#[test]
fn test_dictionary_undefined_id_and_entry() {
	let ids =
		NumberContainer::new(vec![0u32, 0, 1], BitVec::from_slice(&[true, false, true]));
	let values = ColumnData::int4_with_bitvec([3, 0], [true, false]);
	let column = Column::dictionary("n", ids, values).unwrap();

	let output = evaluate("factorial", column);
	assert_eq!(output, ColumnData::int8_with_bitvec([6, 0, 0], [true, false, false]));
}

#[test]
fn test_dictionary_rejects_out_of_range_id() {
	let ids = NumberContainer::from_vec(vec![0u32, 3]);
	let err = Column::dictionary("n", ids, ColumnData::int4([1, 2])).unwrap_err();
	assert_eq!(err.code(), "ENCODING_001");
}

#[test]
fn test_encoding_equivalence() {
	// the same logical column in all three encodings produces identical
	// output
	let flat = evaluate("factorial", Column::int4("n", [5, 5, 5, 5]));

	let constant = evaluate(
		"factorial",
		Column::constant("n", ColumnData::int4([5]), 4).unwrap(),
	);

	let ids = NumberContainer::from_vec(vec![0u32, 0, 0, 0]);
	let dictionary = evaluate(
		"factorial",
		Column::dictionary("n", ids, ColumnData::int4([5])).unwrap(),
	);

	assert_eq!(flat, constant);
	assert_eq!(flat, dictionary);
	assert_eq!(flat, ColumnData::int8([120, 120, 120, 120]));
}

#[test]
fn test_deterministic() {
	let column = Column::int4("n", [1, 2, 3, 21]);
	let first = evaluate("factorial", column.clone());
	let second = evaluate("factorial", column);
	assert_eq!(first, second);
}

#[test]
fn test_row_subset_independence() {
	let column = Column::int4("n", [1, 2, 3, 4, 5]);

	let full = evaluate("factorial", column.clone());
	let subset = evaluate_rows(
		"factorial",
		column,
		Some(RowSet::from_indices(5, [1, 3])),
	);

	// selected rows match the full evaluation, unselected rows stay
	// undefined
	assert_eq!(
		subset,
		ColumnData::int8_with_bitvec([0, 2, 0, 24, 0], [false, true, false, true, false])
	);
	for row in [1, 3] {
		assert_eq!(subset.is_defined(row), full.is_defined(row));
	}
}

#[test]
fn test_bind_rejects_zero_arguments() {
	let evaluator = Evaluator::default();
	let err = evaluator.bind(&Expression::call("factorial", vec![])).unwrap_err();

	assert_eq!(err.code(), "FUNCTION_002");
	assert!(err.to_string().contains("expects 1 arguments, got 0"));
}

#[test]
fn test_bind_rejects_two_arguments() {
	let evaluator = Evaluator::default();
	let err = evaluator
		.bind(&Expression::call(
			"factorial",
			vec![
				Expression::column("a", 0, Type::Int4),
				Expression::column("b", 1, Type::Int4),
			],
		))
		.unwrap_err();

	assert_eq!(err.code(), "FUNCTION_002");
	assert!(err.to_string().contains("expects 1 arguments, got 2"));
}

#[test]
fn test_bind_rejects_non_integer_argument() {
	let evaluator = Evaluator::default();
	let err = evaluator
		.bind(&Expression::call(
			"factorial",
			vec![Expression::column("s", 0, Type::Utf8)],
		))
		.unwrap_err();

	assert_eq!(err.code(), "FUNCTION_004");
	assert!(err.to_string().contains("got Utf8"));

	let err = evaluator
		.bind(&Expression::call(
			"factorial",
			vec![Expression::column("f", 0, Type::Float8)],
		))
		.unwrap_err();
	assert_eq!(err.code(), "FUNCTION_004");
}

#[test]
fn test_bind_rejects_unknown_function() {
	let evaluator = Evaluator::default();
	let err = evaluator
		.bind(&Expression::call(
			"fact",
			vec![Expression::column("n", 0, Type::Int4)],
		))
		.unwrap_err();

	assert_eq!(err.code(), "FUNCTION_001");
	assert!(err.to_string().contains("Unknown function: fact"));
}

#[test]
fn test_abs_elides_undefined_rows() {
	// abs keeps default propagate handling: undefined rows are skipped by
	// the evaluator and stay undefined in the output
	let output = evaluate(
		"abs",
		Column::int4_with_bitvec("n", [-3, 0, 7], [true, false, true]),
	);
	assert_eq!(output, ColumnData::int8_with_bitvec([3, 0, 7], [true, false, true]));
}

#[test]
fn test_nested_call() {
	// factorial(abs(n))
	let evaluator = Evaluator::default();
	let column = Column::int4("n", [-3, 4, -21]);
	let rows = RowSet::all(column.row_count());
	let expr = Expression::call(
		"factorial",
		vec![Expression::call(
			"abs",
			vec![Expression::column("n", 0, Type::Int4)],
		)],
	);
	let columns = Columns::new(vec![column]);

	let ctx = EvaluationContext {
		rows: &rows,
		columns: &columns,
	};
	let bound = evaluator.bind(&expr).unwrap();
	let result = evaluator.evaluate(&ctx, &bound).unwrap();

	match result.data {
		EncodedColumn::Flat(data) => {
			assert_eq!(
				data,
				ColumnData::int8_with_bitvec([6, 24, 0], [true, true, false])
			);
		}
		_ => panic!("scalar calls produce flat columns"),
	}
}

#[test]
fn test_result_column_shape() {
	let evaluator = Evaluator::default();
	let column = Column::int4("n", [5]);
	let rows = RowSet::all(1);
	let expr = call_over_column("factorial", &column);
	let columns = Columns::new(vec![column]);

	let ctx = EvaluationContext {
		rows: &rows,
		columns: &columns,
	};
	let bound = evaluator.bind(&expr).unwrap();
	assert_eq!(bound.ty(), Type::Int8);

	let result = evaluator.evaluate(&ctx, &bound).unwrap();
	assert_eq!(result.name.text(), "factorial");
	assert_eq!(result.data.get_type(), Type::Int8);
	assert_eq!(result.row_count(), 1);
}
