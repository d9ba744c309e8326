// SPDX-License-Identifier: MIT
// Copyright (c) 2025 QuiverDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// All data types a Quiver column can hold
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// A boolean: true or false.
	Bool,
	/// An 8-byte floating point
	Float8,
	/// A 1-byte signed integer
	Int1,
	/// A 2-byte signed integer
	Int2,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// A 1-byte unsigned integer
	Uint1,
	/// A 2-byte unsigned integer
	Uint2,
	/// A 4-byte unsigned integer
	Uint4,
	/// An 8-byte unsigned integer
	Uint8,
	/// A UTF-8 encoded text.
	Utf8,
	/// Value is not defined (think null in common programming languages)
	Undefined,
}

impl Type {
	pub fn is_number(&self) -> bool {
		matches!(
			self,
			Type::Float8
				| Type::Int1 | Type::Int2
				| Type::Int4 | Type::Int8
				| Type::Uint1 | Type::Uint2
				| Type::Uint4 | Type::Uint8
		)
	}

	pub fn is_bool(&self) -> bool {
		matches!(self, Type::Bool)
	}

	pub fn is_signed_integer(&self) -> bool {
		matches!(self, Type::Int1 | Type::Int2 | Type::Int4 | Type::Int8)
	}

	pub fn is_unsigned_integer(&self) -> bool {
		matches!(self, Type::Uint1 | Type::Uint2 | Type::Uint4 | Type::Uint8)
	}

	pub fn is_integer(&self) -> bool {
		self.is_signed_integer() || self.is_unsigned_integer()
	}

	pub fn is_floating_point(&self) -> bool {
		matches!(self, Type::Float8)
	}

	pub fn is_utf8(&self) -> bool {
		matches!(self, Type::Utf8)
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Bool => f.write_str("Bool"),
			Type::Float8 => f.write_str("Float8"),
			Type::Int1 => f.write_str("Int1"),
			Type::Int2 => f.write_str("Int2"),
			Type::Int4 => f.write_str("Int4"),
			Type::Int8 => f.write_str("Int8"),
			Type::Uint1 => f.write_str("Uint1"),
			Type::Uint2 => f.write_str("Uint2"),
			Type::Uint4 => f.write_str("Uint4"),
			Type::Uint8 => f.write_str("Uint8"),
			Type::Utf8 => f.write_str("Utf8"),
			Type::Undefined => f.write_str("Undefined"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_is_integer() {
		assert!(Type::Int1.is_integer());
		assert!(Type::Int8.is_integer());
		assert!(Type::Uint4.is_integer());
		assert!(!Type::Float8.is_integer());
		assert!(!Type::Utf8.is_integer());
		assert!(!Type::Bool.is_integer());
		assert!(!Type::Undefined.is_integer());
	}

	#[test]
	fn test_is_number() {
		assert!(Type::Float8.is_number());
		assert!(Type::Uint8.is_number());
		assert!(!Type::Bool.is_number());
		assert!(!Type::Undefined.is_number());
	}

	#[test]
	fn test_display() {
		assert_eq!(Type::Int4.to_string(), "Int4");
		assert_eq!(Type::Utf8.to_string(), "Utf8");
		assert_eq!(Type::Undefined.to_string(), "Undefined");
	}
}
