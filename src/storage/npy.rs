//! Minimal NumPy `.npy` reader
//!
//! The upstream encoder persists one embedding per image with `np.save`:
//! a single little-endian float row of shape `(D,)` or `(1, D)`. This
//! reader handles exactly that subset of the format (versions 1.0 and
//! 2.0, `<f4` or `<f8`), nothing more.

use std::fs;
use std::path::Path;

use crate::core::LoadError;

const MAGIC: &[u8] = b"\x93NUMPY";

/// Reads a single embedding vector from an `.npy` file.
///
/// `<f8` data is narrowed to f32; everything downstream is f32 math.
pub fn read_vector(path: &Path) -> Result<Vec<f32>, LoadError> {
	let bytes = fs::read(path).map_err(|source| LoadError::Io {
		path: path.to_path_buf(),
		source,
	})?;

	parse_vector(&bytes).map_err(|reason| LoadError::Parse {
		path: path.to_path_buf(),
		reason,
	})
}

fn parse_vector(bytes: &[u8]) -> Result<Vec<f32>, String> {
	if bytes.len() < 10 || &bytes[..6] != MAGIC {
		return Err("not an npy file (bad magic)".to_string());
	}

	let major = bytes[6];
	let (header_start, header_len) = match major {
		1 => {
			let len = u16::from_le_bytes([bytes[8], bytes[9]]) as usize;
			(10, len)
		}
		2 => {
			if bytes.len() < 12 {
				return Err("truncated v2 header".to_string());
			}
			let len = u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]) as usize;
			(12, len)
		}
		_ => return Err(format!("unsupported npy version {major}")),
	};

	let header_end = header_start + header_len;
	if bytes.len() < header_end {
		return Err("truncated header".to_string());
	}
	let header = std::str::from_utf8(&bytes[header_start..header_end])
		.map_err(|_| "header is not valid UTF-8".to_string())?;

	let descr = dict_str(header, "descr")?;
	let item_size = match descr.as_str() {
		"<f4" => 4,
		"<f8" => 8,
		other => return Err(format!("unsupported dtype '{other}' (expected <f4 or <f8)")),
	};

	let shape = dict_shape(header)?;
	let dim = match shape.as_slice() {
		[d] => *d,
		[1, d] => *d,
		other => return Err(format!("expected a single row, got shape {other:?}")),
	};

	let data = &bytes[header_end..];
	if data.len() != dim * item_size {
		return Err(format!(
			"data length {} does not match shape ({} x {} bytes)",
			data.len(),
			dim,
			item_size
		));
	}

	let vector = match item_size {
		4 => data
			.chunks_exact(4)
			.map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
			.collect(),
		_ => data
			.chunks_exact(8)
			.map(|c| {
				f64::from_le_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]) as f32
			})
			.collect(),
	};

	Ok(vector)
}

/// Extracts a quoted string value from the python-dict header literal.
fn dict_str(header: &str, key: &str) -> Result<String, String> {
	let needle = format!("'{key}':");
	let rest = header
		.split_once(&needle)
		.ok_or_else(|| format!("header missing '{key}'"))?
		.1;
	let open = rest
		.find('\'')
		.ok_or_else(|| format!("unquoted '{key}' value"))?;
	let rest = &rest[open + 1..];
	let close = rest
		.find('\'')
		.ok_or_else(|| format!("unterminated '{key}' value"))?;
	Ok(rest[..close].to_string())
}

fn dict_shape(header: &str) -> Result<Vec<usize>, String> {
	let rest = header
		.split_once("'shape':")
		.ok_or_else(|| "header missing 'shape'".to_string())?
		.1;
	let open = rest.find('(').ok_or_else(|| "shape is not a tuple".to_string())?;
	let close = rest[open..]
		.find(')')
		.ok_or_else(|| "unterminated shape tuple".to_string())?;

	rest[open + 1..open + close]
		.split(',')
		.map(str::trim)
		.filter(|s| !s.is_empty())
		.map(|s| {
			s.parse::<usize>()
				.map_err(|_| format!("bad shape element '{s}'"))
		})
		.collect()
}
