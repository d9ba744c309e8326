// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 QuiverDB

use serde::{Deserialize, Serialize};

use crate::util::{BitVec, CowVec};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoolContainer {
	values: CowVec<bool>,
	bitvec: BitVec,
}

impl BoolContainer {
	pub fn new(values: Vec<bool>, bitvec: BitVec) -> Self {
		debug_assert_eq!(values.len(), bitvec.len());
		Self {
			values: CowVec::new(values),
			bitvec,
		}
	}

	pub fn from_vec(values: Vec<bool>) -> Self {
		let len = values.len();
		Self {
			values: CowVec::new(values),
			bitvec: BitVec::repeat(len, true),
		}
	}

	pub fn len(&self) -> usize {
		debug_assert_eq!(self.values.len(), self.bitvec.len());
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn push(&mut self, value: bool) {
		self.values.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.values.push(false);
		self.bitvec.push(false);
	}

	pub fn get(&self, index: usize) -> Option<&bool> {
		if index < self.len() && self.bitvec.get(index) {
			self.values.get(index)
		} else {
			None
		}
	}

	pub fn is_defined(&self, index: usize) -> bool {
		index < self.len() && self.bitvec.get(index)
	}

	pub fn is_fully_defined(&self) -> bool {
		self.bitvec.count_ones() == self.len()
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<bool>> + '_ {
		self.values
			.iter()
			.zip(self.bitvec.iter())
			.map(|(&value, defined)| if defined { Some(value) } else { None })
	}
}
