// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 QuiverDB

use serde::{Deserialize, Serialize};

use crate::{
	util::{BitVec, CowVec},
	value::is::IsNumber,
};

/// Primitive values paired with a definedness bitvec: a cleared bit marks the
/// slot as undefined, its stored value is meaningless (the type's default).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumberContainer<T>
where
	T: IsNumber,
{
	values: CowVec<T>,
	bitvec: BitVec,
}

impl<T> NumberContainer<T>
where
	T: IsNumber,
{
	pub fn new(values: Vec<T>, bitvec: BitVec) -> Self {
		debug_assert_eq!(values.len(), bitvec.len());
		Self {
			values: CowVec::new(values),
			bitvec,
		}
	}

	pub fn from_vec(values: Vec<T>) -> Self {
		let len = values.len();
		Self {
			values: CowVec::new(values),
			bitvec: BitVec::repeat(len, true),
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			values: CowVec::with_capacity(capacity),
			bitvec: BitVec::with_capacity(capacity),
		}
	}

	pub fn len(&self) -> usize {
		debug_assert_eq!(self.values.len(), self.bitvec.len());
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn capacity(&self) -> usize {
		self.values.capacity()
	}

	pub fn push(&mut self, value: T) {
		self.values.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.values.push(T::default());
		self.bitvec.push(false);
	}

	pub fn get(&self, index: usize) -> Option<&T> {
		if index < self.len() && self.bitvec.get(index) {
			self.values.get(index)
		} else {
			None
		}
	}

	pub fn set(&mut self, index: usize, value: T) {
		self.values.set(index, value);
		self.bitvec.set(index, true);
	}

	pub fn set_undefined(&mut self, index: usize) {
		self.values.set(index, T::default());
		self.bitvec.set(index, false);
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

	pub fn values(&self) -> &[T] {
		self.values.as_slice()
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<T>> + '_ {
		self.values
			.iter()
			.zip(self.bitvec.iter())
			.map(|(&value, defined)| if defined { Some(value) } else { None })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_vec() {
		let container = NumberContainer::from_vec(vec![1i32, 2, 3]);
		assert_eq!(container.len(), 3);
		assert_eq!(container.get(0), Some(&1));
		assert_eq!(container.get(2), Some(&3));
		assert!(container.is_fully_defined());
	}

	#[test]
	fn test_push_undefined() {
		let mut container: NumberContainer<i64> = NumberContainer::with_capacity(3);
		container.push(100);
		container.push_undefined();
		container.push(-200);

		assert_eq!(container.len(), 3);
		assert_eq!(container.get(0), Some(&100));
		assert_eq!(container.get(1), None);
		assert_eq!(container.get(2), Some(&-200));
		assert!(!container.is_fully_defined());
	}

	#[test]
	fn test_set() {
		let mut container = NumberContainer::from_vec(vec![0i64, 0, 0]);
		container.set(1, 42);
		container.set_undefined(2);

		assert_eq!(container.get(1), Some(&42));
		assert_eq!(container.get(2), None);
		assert!(!container.is_defined(2));
		assert!(container.is_defined(1));
	}

	#[test]
	fn test_get_out_of_range() {
		let container = NumberContainer::from_vec(vec![1u8]);
		assert_eq!(container.get(1), None);
		assert!(!container.is_defined(1));
	}

	#[test]
	fn test_iter() {
		let container = NumberContainer::new(
			vec![1i32, 0, 3],
			BitVec::from_slice(&[true, false, true]),
		);
		let collected: Vec<Option<i32>> = container.iter().collect();
		assert_eq!(collected, vec![Some(1), None, Some(3)]);
	}
}
