// SPDX-License-Identifier: MIT
// Copyright (c) 2025 QuiverDB

pub mod encoding;
pub mod function;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::fragment::Fragment;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub statement: Option<String>,
	pub message: String,
	pub fragment: Fragment,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_fmt(format_args!("{}", self.code))
	}
}

pub struct DefaultRenderer;

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		let mut out = format!("{}: {}", diagnostic.code, diagnostic.message);

		let text = diagnostic.fragment.text();
		if !text.is_empty() {
			out.push_str(&format!("\n  at `{}`", text));
			if let Some(label) = &diagnostic.label {
				out.push_str(&format!(" ({})", label));
			}
		}

		if let Some(help) = &diagnostic.help {
			out.push_str(&format!("\n  help: {}", help));
		}

		for note in &diagnostic.notes {
			out.push_str(&format!("\n  note: {}", note));
		}

		out
	}
}
