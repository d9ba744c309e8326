// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 QuiverDB

use quiver_type::Type;

use crate::{
	util::BitVec,
	value::{
		column::data::ColumnData,
		container::{BoolContainer, NumberContainer, UndefinedContainer, Utf8Container},
	},
};

impl ColumnData {
	pub fn bool(data: impl IntoIterator<Item = bool>) -> Self {
		ColumnData::Bool(BoolContainer::from_vec(data.into_iter().collect()))
	}

	pub fn bool_with_bitvec(
		data: impl IntoIterator<Item = bool>,
		bitvec: impl Into<BitVec>,
	) -> Self {
		ColumnData::Bool(BoolContainer::new(data.into_iter().collect(), bitvec.into()))
	}

	pub fn float8(data: impl IntoIterator<Item = f64>) -> Self {
		ColumnData::Float8(NumberContainer::from_vec(data.into_iter().collect()))
	}

	pub fn float8_with_bitvec(
		data: impl IntoIterator<Item = f64>,
		bitvec: impl Into<BitVec>,
	) -> Self {
		ColumnData::Float8(NumberContainer::new(data.into_iter().collect(), bitvec.into()))
	}

	pub fn int1(data: impl IntoIterator<Item = i8>) -> Self {
		ColumnData::Int1(NumberContainer::from_vec(data.into_iter().collect()))
	}

	pub fn int1_with_bitvec(
		data: impl IntoIterator<Item = i8>,
		bitvec: impl Into<BitVec>,
	) -> Self {
		ColumnData::Int1(NumberContainer::new(data.into_iter().collect(), bitvec.into()))
	}

	pub fn int2(data: impl IntoIterator<Item = i16>) -> Self {
		ColumnData::Int2(NumberContainer::from_vec(data.into_iter().collect()))
	}

	pub fn int2_with_bitvec(
		data: impl IntoIterator<Item = i16>,
		bitvec: impl Into<BitVec>,
	) -> Self {
		ColumnData::Int2(NumberContainer::new(data.into_iter().collect(), bitvec.into()))
	}

	pub fn int4(data: impl IntoIterator<Item = i32>) -> Self {
		ColumnData::Int4(NumberContainer::from_vec(data.into_iter().collect()))
	}

	pub fn int4_with_bitvec(
		data: impl IntoIterator<Item = i32>,
		bitvec: impl Into<BitVec>,
	) -> Self {
		ColumnData::Int4(NumberContainer::new(data.into_iter().collect(), bitvec.into()))
	}

	pub fn int8(data: impl IntoIterator<Item = i64>) -> Self {
		ColumnData::Int8(NumberContainer::from_vec(data.into_iter().collect()))
	}

	pub fn int8_with_bitvec(
		data: impl IntoIterator<Item = i64>,
		bitvec: impl Into<BitVec>,
	) -> Self {
		ColumnData::Int8(NumberContainer::new(data.into_iter().collect(), bitvec.into()))
	}

	pub fn uint1(data: impl IntoIterator<Item = u8>) -> Self {
		ColumnData::Uint1(NumberContainer::from_vec(data.into_iter().collect()))
	}

	pub fn uint1_with_bitvec(
		data: impl IntoIterator<Item = u8>,
		bitvec: impl Into<BitVec>,
	) -> Self {
		ColumnData::Uint1(NumberContainer::new(data.into_iter().collect(), bitvec.into()))
	}

	pub fn uint2(data: impl IntoIterator<Item = u16>) -> Self {
		ColumnData::Uint2(NumberContainer::from_vec(data.into_iter().collect()))
	}

	pub fn uint2_with_bitvec(
		data: impl IntoIterator<Item = u16>,
		bitvec: impl Into<BitVec>,
	) -> Self {
		ColumnData::Uint2(NumberContainer::new(data.into_iter().collect(), bitvec.into()))
	}

	pub fn uint4(data: impl IntoIterator<Item = u32>) -> Self {
		ColumnData::Uint4(NumberContainer::from_vec(data.into_iter().collect()))
	}

	pub fn uint4_with_bitvec(
		data: impl IntoIterator<Item = u32>,
		bitvec: impl Into<BitVec>,
	) -> Self {
		ColumnData::Uint4(NumberContainer::new(data.into_iter().collect(), bitvec.into()))
	}

	pub fn uint8(data: impl IntoIterator<Item = u64>) -> Self {
		ColumnData::Uint8(NumberContainer::from_vec(data.into_iter().collect()))
	}

	pub fn uint8_with_bitvec(
		data: impl IntoIterator<Item = u64>,
		bitvec: impl Into<BitVec>,
	) -> Self {
		ColumnData::Uint8(NumberContainer::new(data.into_iter().collect(), bitvec.into()))
	}

	pub fn utf8<'a>(data: impl IntoIterator<Item = &'a str>) -> Self {
		ColumnData::Utf8(Utf8Container::from_vec(
			data.into_iter().map(|value| value.to_string()).collect(),
		))
	}

	pub fn utf8_with_bitvec<'a>(
		data: impl IntoIterator<Item = &'a str>,
		bitvec: impl Into<BitVec>,
	) -> Self {
		ColumnData::Utf8(Utf8Container::new(
			data.into_iter().map(|value| value.to_string()).collect(),
			bitvec.into(),
		))
	}

	pub fn undefined(len: usize) -> Self {
		ColumnData::Undefined(UndefinedContainer::new(len))
	}

	/// A writable all-undefined column of the given type: default values
	/// with every definedness bit cleared.
	pub fn typed_undefined(ty: Type, len: usize) -> Self {
		let bitvec = BitVec::repeat(len, false);
		match ty {
			Type::Bool => ColumnData::Bool(BoolContainer::new(vec![false; len], bitvec)),
			Type::Float8 => {
				ColumnData::Float8(NumberContainer::new(vec![0.0; len], bitvec))
			}
			Type::Int1 => ColumnData::Int1(NumberContainer::new(vec![0; len], bitvec)),
			Type::Int2 => ColumnData::Int2(NumberContainer::new(vec![0; len], bitvec)),
			Type::Int4 => ColumnData::Int4(NumberContainer::new(vec![0; len], bitvec)),
			Type::Int8 => ColumnData::Int8(NumberContainer::new(vec![0; len], bitvec)),
			Type::Uint1 => ColumnData::Uint1(NumberContainer::new(vec![0; len], bitvec)),
			Type::Uint2 => ColumnData::Uint2(NumberContainer::new(vec![0; len], bitvec)),
			Type::Uint4 => ColumnData::Uint4(NumberContainer::new(vec![0; len], bitvec)),
			Type::Uint8 => ColumnData::Uint8(NumberContainer::new(vec![0; len], bitvec)),
			Type::Utf8 => ColumnData::Utf8(Utf8Container::new(
				vec![String::new(); len],
				bitvec,
			)),
			Type::Undefined => ColumnData::Undefined(UndefinedContainer::new(len)),
		}
	}
}
