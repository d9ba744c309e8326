// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 QuiverDB

pub mod data;
pub mod decoded;
pub mod encoded;

use std::ops::Deref;

use quiver_type::Fragment;

use crate::{
	util::BitVec,
	value::{column::data::ColumnData, column::encoded::EncodedColumn, container::NumberContainer},
};

/// A named batch column.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
	pub name: Fragment,
	pub data: EncodedColumn,
}

impl Column {
	pub fn new(name: impl Into<String>, data: EncodedColumn) -> Self {
		Self {
			name: Fragment::internal(name),
			data,
		}
	}

	pub fn name(&self) -> &Fragment {
		&self.name
	}

	pub fn data(&self) -> &EncodedColumn {
		&self.data
	}

	pub fn row_count(&self) -> usize {
		self.data.row_count()
	}

	pub fn bool(name: &str, data: impl IntoIterator<Item = bool>) -> Self {
		Self::new(name, EncodedColumn::flat(ColumnData::bool(data)))
	}

	pub fn float8(name: &str, data: impl IntoIterator<Item = f64>) -> Self {
		Self::new(name, EncodedColumn::flat(ColumnData::float8(data)))
	}

	pub fn int1(name: &str, data: impl IntoIterator<Item = i8>) -> Self {
		Self::new(name, EncodedColumn::flat(ColumnData::int1(data)))
	}

	pub fn int1_with_bitvec(
		name: &str,
		data: impl IntoIterator<Item = i8>,
		bitvec: impl Into<BitVec>,
	) -> Self {
		Self::new(name, EncodedColumn::flat(ColumnData::int1_with_bitvec(data, bitvec)))
	}

	pub fn int2(name: &str, data: impl IntoIterator<Item = i16>) -> Self {
		Self::new(name, EncodedColumn::flat(ColumnData::int2(data)))
	}

	pub fn int2_with_bitvec(
		name: &str,
		data: impl IntoIterator<Item = i16>,
		bitvec: impl Into<BitVec>,
	) -> Self {
		Self::new(name, EncodedColumn::flat(ColumnData::int2_with_bitvec(data, bitvec)))
	}

	pub fn int4(name: &str, data: impl IntoIterator<Item = i32>) -> Self {
		Self::new(name, EncodedColumn::flat(ColumnData::int4(data)))
	}

	pub fn int4_with_bitvec(
		name: &str,
		data: impl IntoIterator<Item = i32>,
		bitvec: impl Into<BitVec>,
	) -> Self {
		Self::new(name, EncodedColumn::flat(ColumnData::int4_with_bitvec(data, bitvec)))
	}

	pub fn int8(name: &str, data: impl IntoIterator<Item = i64>) -> Self {
		Self::new(name, EncodedColumn::flat(ColumnData::int8(data)))
	}

	pub fn int8_with_bitvec(
		name: &str,
		data: impl IntoIterator<Item = i64>,
		bitvec: impl Into<BitVec>,
	) -> Self {
		Self::new(name, EncodedColumn::flat(ColumnData::int8_with_bitvec(data, bitvec)))
	}

	pub fn uint1(name: &str, data: impl IntoIterator<Item = u8>) -> Self {
		Self::new(name, EncodedColumn::flat(ColumnData::uint1(data)))
	}

	pub fn uint2(name: &str, data: impl IntoIterator<Item = u16>) -> Self {
		Self::new(name, EncodedColumn::flat(ColumnData::uint2(data)))
	}

	pub fn uint4(name: &str, data: impl IntoIterator<Item = u32>) -> Self {
		Self::new(name, EncodedColumn::flat(ColumnData::uint4(data)))
	}

	pub fn uint8(name: &str, data: impl IntoIterator<Item = u64>) -> Self {
		Self::new(name, EncodedColumn::flat(ColumnData::uint8(data)))
	}

	pub fn utf8<'a>(name: &str, data: impl IntoIterator<Item = &'a str>) -> Self {
		Self::new(name, EncodedColumn::flat(ColumnData::utf8(data)))
	}

	pub fn constant(name: &str, data: ColumnData, row_count: usize) -> crate::Result<Self> {
		Ok(Self::new(name, EncodedColumn::constant(data, row_count)?))
	}

	pub fn dictionary(
		name: &str,
		ids: NumberContainer<u32>,
		values: ColumnData,
	) -> crate::Result<Self> {
		Ok(Self::new(name, EncodedColumn::dictionary(ids, values)?))
	}
}

/// The columns of one batch; all share the same row count.
#[derive(Clone, Debug, PartialEq)]
pub struct Columns {
	columns: Vec<Column>,
}

impl Columns {
	pub fn new(columns: Vec<Column>) -> Self {
		let row_count = columns.first().map_or(0, |column| column.row_count());
		assert!(columns.iter().all(|column| column.row_count() == row_count));

		Self {
			columns,
		}
	}

	pub fn row_count(&self) -> usize {
		self.columns.first().map_or(0, |column| column.row_count())
	}
}

impl Deref for Columns {
	type Target = [Column];

	fn deref(&self) -> &Self::Target {
		&self.columns
	}
}
