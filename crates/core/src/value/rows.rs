// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 QuiverDB

use serde::{Deserialize, Serialize};

use crate::util::BitVec;

/// The set of row positions an operation must process within a batch.
///
/// Rows outside the set are owned by the host: kernels never read or write
/// them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RowSet {
	bits: BitVec,
}

impl RowSet {
	/// Every row of a batch of `row_count` rows.
	pub fn all(row_count: usize) -> Self {
		Self {
			bits: BitVec::repeat(row_count, true),
		}
	}

	/// Only the given positions of a batch of `row_count` rows.
	pub fn from_indices(row_count: usize, indices: impl IntoIterator<Item = usize>) -> Self {
		let mut bits = BitVec::repeat(row_count, false);
		for index in indices {
			bits.set(index, true);
		}
		Self {
			bits,
		}
	}

	/// The size of the underlying batch, selected or not.
	pub fn row_count(&self) -> usize {
		self.bits.len()
	}

	pub fn is_selected(&self, row: usize) -> bool {
		self.bits.get(row)
	}

	/// Number of selected rows.
	pub fn count(&self) -> usize {
		self.bits.count_ones()
	}

	/// Selected row positions in ascending order.
	pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
		(0..self.bits.len()).filter(|&row| self.bits.get(row))
	}
}

impl From<BitVec> for RowSet {
	fn from(bits: BitVec) -> Self {
		Self {
			bits,
		}
	}
}
