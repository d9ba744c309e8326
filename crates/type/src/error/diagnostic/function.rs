// SPDX-License-Identifier: MIT
// Copyright (c) 2025 QuiverDB

use crate::{error::diagnostic::Diagnostic, fragment::Fragment, value::r#type::Type};

/// Function is not recognized or does not exist
pub fn unknown_function(function: Fragment) -> Diagnostic {
	let name = function.text().to_string();
	Diagnostic {
		code: "FUNCTION_001".to_string(),
		statement: None,
		message: format!("Unknown function: {}", name),
		fragment: function,
		label: Some("unknown function".to_string()),
		help: Some("Check the function name and available functions".to_string()),
		notes: vec![],
	}
}

/// Function called with wrong number of arguments
pub fn arity_mismatch(function: Fragment, expected: usize, actual: usize) -> Diagnostic {
	let name = function.text().to_string();
	Diagnostic {
		code: "FUNCTION_002".to_string(),
		statement: None,
		message: format!("Function {} expects {} arguments, got {}", name, expected, actual),
		fragment: function,
		label: Some("wrong number of arguments".to_string()),
		help: Some(format!("Provide exactly {} arguments to function {}", expected, name)),
		notes: vec![],
	}
}

/// Argument has invalid type for function
pub fn invalid_argument_type(
	function: Fragment,
	index: usize,
	expected_one_of: Vec<Type>,
	actual: Type,
) -> Diagnostic {
	let name = function.text().to_string();
	let expected_types =
		expected_one_of.iter().map(|t| format!("{}", t)).collect::<Vec<_>>().join(", ");

	Diagnostic {
		code: "FUNCTION_004".to_string(),
		statement: None,
		message: format!(
			"Function {} argument {} has invalid type: expected one of [{}], got {}",
			name,
			index + 1,
			expected_types,
			actual
		),
		fragment: function,
		label: Some("invalid argument type".to_string()),
		help: Some(format!("Provide an argument of type: {}", expected_types)),
		notes: vec![],
	}
}

/// Internal function error - should not normally occur
pub fn internal_error(function: Fragment, details: String) -> Diagnostic {
	let name = function.text().to_string();
	Diagnostic {
		code: "FUNCTION_008".to_string(),
		statement: None,
		message: format!("Internal error in function {}: {}", name, details),
		fragment: function,
		label: Some("internal error".to_string()),
		help: Some("This is an internal error - please report this issue".to_string()),
		notes: vec![],
	}
}
