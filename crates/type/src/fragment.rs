// SPDX-License-Identifier: MIT
// Copyright (c) 2025 QuiverDB

use std::ops::Deref;

use serde::{Deserialize, Serialize};

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StatementLine(pub u32);

impl Deref for StatementLine {
	type Target = u32;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StatementColumn(pub u32);

impl Deref for StatementColumn {
	type Target = u32;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

/// A fragment of source text, carried through columns and diagnostics so
/// errors can point back at what the user wrote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Fragment {
	/// No fragment information available
	None,

	/// Fragment from a statement with position information
	Statement {
		text: String,
		line: StatementLine,
		column: StatementColumn,
	},

	/// Fragment from internal/runtime code
	Internal {
		text: String,
	},
}

impl Fragment {
	/// Create a new Internal fragment
	pub fn internal(text: impl Into<String>) -> Self {
		Fragment::Internal {
			text: text.into(),
		}
	}

	/// Create a new Statement fragment with position information
	pub fn statement(text: impl Into<String>, line: u32, column: u32) -> Self {
		Fragment::Statement {
			text: text.into(),
			line: StatementLine(line),
			column: StatementColumn(column),
		}
	}

	/// Get the text value of the fragment
	pub fn text(&self) -> &str {
		match self {
			Fragment::None => "",
			Fragment::Statement {
				text,
				..
			}
			| Fragment::Internal {
				text,
			} => text,
		}
	}

	/// Get line position
	pub fn line(&self) -> StatementLine {
		match self {
			Fragment::Statement {
				line,
				..
			} => *line,
			_ => StatementLine(1),
		}
	}

	/// Get column position
	pub fn column(&self) -> StatementColumn {
		match self {
			Fragment::Statement {
				column,
				..
			} => *column,
			_ => StatementColumn(0),
		}
	}
}
