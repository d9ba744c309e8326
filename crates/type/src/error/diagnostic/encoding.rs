// SPDX-License-Identifier: MIT
// Copyright (c) 2025 QuiverDB

use crate::{error::diagnostic::Diagnostic, fragment::Fragment};

/// ENCODING_001: Dictionary id points past the end of the dictionary
pub fn dictionary_id_out_of_range(id: u32, dictionary_len: usize) -> Diagnostic {
	Diagnostic {
		code: "ENCODING_001".to_string(),
		statement: None,
		message: format!(
			"dictionary id {} is out of range for a dictionary of {} entries",
			id, dictionary_len
		),
		fragment: Fragment::None,
		label: Some("dictionary id out of range".to_string()),
		help: Some("every defined id must index an existing dictionary entry".to_string()),
		notes: vec![],
	}
}

/// ENCODING_002: Constant column carries more than one stored value
pub fn constant_data_too_long(len: usize) -> Diagnostic {
	Diagnostic {
		code: "ENCODING_002".to_string(),
		statement: None,
		message: format!("constant column holds {} values, at most one is allowed", len),
		fragment: Fragment::None,
		label: Some("too many constant values".to_string()),
		help: Some(
			"store a single value, or none at all for an undefined constant".to_string(),
		),
		notes: vec![],
	}
}
