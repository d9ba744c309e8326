// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 QuiverDB

pub mod error;
pub mod math;
mod registry;

pub use error::{ScalarFunctionError, ScalarFunctionResult};
pub use registry::{Functions, FunctionsBuilder};

use quiver_core::{ColumnData, Columns, RowSet};
use quiver_type::{Fragment, Type};

/// How the evaluator treats undefined inputs when dispatching a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullHandling {
	/// Undefined in, undefined out: the evaluator elides rows with an
	/// undefined argument and the function never sees them.
	Propagate,
	/// The function runs for undefined inputs too and writes its own
	/// undefined markers.
	Custom,
}

pub struct ScalarFunctionContext<'a> {
	/// Call-site name, attached to diagnostics.
	pub fragment: &'a Fragment,
	pub rows: &'a RowSet,
	/// Argument columns, in any physical encoding.
	pub columns: &'a Columns,
}

impl ScalarFunctionContext<'_> {
	/// Claim `output` as a flat column of `ty` spanning the whole batch.
	/// The host usually hands one over in exactly that shape; anything
	/// else is replaced by a fresh all-undefined column.
	pub fn ensure_writable(&self, ty: Type, output: &mut ColumnData) {
		if output.get_type() != ty || output.len() != self.rows.row_count() {
			*output = ColumnData::typed_undefined(ty, self.rows.row_count());
		}
	}
}

pub trait ScalarFunction: Send + Sync {
	/// Validate the already-resolved argument types and report the result
	/// type. Called once when the expression is built; failures never
	/// reach row evaluation.
	fn bind(&self, fragment: &Fragment, args: &[Type]) -> ScalarFunctionResult<Type>;

	fn null_handling(&self) -> NullHandling {
		NullHandling::Propagate
	}

	/// Evaluate one batch: write a value or an undefined marker at every
	/// selected row of `output`. Rows outside the selection must not be
	/// touched.
	fn scalar(
		&self,
		ctx: ScalarFunctionContext,
		output: &mut ColumnData,
	) -> ScalarFunctionResult<()>;
}
