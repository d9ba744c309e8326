// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 QuiverDB

use quiver_type::{
	Fragment, Type, error,
	error::diagnostic::function::{
		arity_mismatch, internal_error, invalid_argument_type, unknown_function,
	},
};
use thiserror::Error;

pub type ScalarFunctionResult<T> = std::result::Result<T, ScalarFunctionError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScalarFunctionError {
	#[error("function {} expects {expected} arguments, got {actual}", .function.text())]
	ArityMismatch {
		function: Fragment,
		expected: usize,
		actual: usize,
	},

	#[error(
		"function {} argument {} has invalid type: expected one of [{}], got {actual}",
		.function.text(),
		.argument_index + 1,
		format_types(.expected)
	)]
	InvalidArgumentType {
		function: Fragment,
		argument_index: usize,
		expected: Vec<Type>,
		actual: Type,
	},

	#[error("unknown function: {}", .function.text())]
	UnknownFunction {
		function: Fragment,
	},

	#[error("internal error in function {}: {details}", .function.text())]
	Internal {
		function: Fragment,
		details: String,
	},
}

fn format_types(types: &[Type]) -> String {
	types.iter().map(|ty| ty.to_string()).collect::<Vec<_>>().join(", ")
}

impl From<ScalarFunctionError> for quiver_type::Error {
	fn from(err: ScalarFunctionError) -> Self {
		match err {
			ScalarFunctionError::ArityMismatch {
				function,
				expected,
				actual,
			} => error!(arity_mismatch(function, expected, actual)),
			ScalarFunctionError::InvalidArgumentType {
				function,
				argument_index,
				expected,
				actual,
			} => error!(invalid_argument_type(function, argument_index, expected, actual)),
			ScalarFunctionError::UnknownFunction {
				function,
			} => error!(unknown_function(function)),
			ScalarFunctionError::Internal {
				function,
				details,
			} => error!(internal_error(function, details)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_arity_mismatch_display() {
		let err = ScalarFunctionError::ArityMismatch {
			function: Fragment::internal("factorial"),
			expected: 1,
			actual: 2,
		};
		assert_eq!(err.to_string(), "function factorial expects 1 arguments, got 2");
	}

	#[test]
	fn test_invalid_argument_type_display() {
		let err = ScalarFunctionError::InvalidArgumentType {
			function: Fragment::internal("factorial"),
			argument_index: 0,
			expected: vec![Type::Int4, Type::Int8],
			actual: Type::Utf8,
		};
		let rendered = err.to_string();
		assert!(rendered.contains("argument 1"));
		assert!(rendered.contains("Int4, Int8"));
		assert!(rendered.contains("got Utf8"));
	}

	#[test]
	fn test_into_diagnostic_error() {
		let err: quiver_type::Error = ScalarFunctionError::ArityMismatch {
			function: Fragment::internal("factorial"),
			expected: 1,
			actual: 0,
		}
		.into();
		assert_eq!(err.code(), "FUNCTION_002");
	}
}
