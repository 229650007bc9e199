//! Piece list files: JSON or delimited text.
//!
//! Text format, one request per line:
//!
//! ```text
//! # comment
//! stock = 6000
//! kerf = 3
//! Montante;1200;4
//! Travessa, 850, 2
//! Base 2350 1
//! ```
//!
//! Fields are `label`, `length` and an optional `quantity` (default 1),
//! separated by `;`, `,` or whitespace.
//!
//! Only lines starting with `#` are comments, so a label may contain `#` or
//! `=` (`Tubo #2;1200;1`, `Perfil L=50;1000;2`). A `stock`, `stock_length`
//! or `kerf` setting may end with a `# comment`.

use crate::config::OptimizerConfig;
use crate::error::{OptimizeError, Result};
use crate::model::PieceRequest;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Requests loaded from a file, with optional stock settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PieceList {
    /// Stock length given in the file, if any.
    #[serde(default, alias = "stock")]
    pub stock_length: Option<f64>,
    /// Kerf given in the file, if any.
    #[serde(default)]
    pub kerf: Option<f64>,
    /// Requests in file order.
    pub pieces: Vec<PieceRequest>,
}

impl PieceList {
    /// Number of units over all requests.
    pub fn total_quantity(&self) -> u64 {
        self.pieces.iter().map(|p| p.quantity as u64).sum()
    }

    /// Apply the file's stock settings on top of a configuration.
    pub fn apply_to(&self, config: &mut OptimizerConfig) {
        if let Some(stock_length) = self.stock_length {
            config.stock_length = stock_length;
        }
        if let Some(kerf) = self.kerf {
            config.kerf = kerf;
        }
    }

    /// Give unlabeled requests a `piece-{n}` label.
    fn fill_labels(&mut self) {
        for (idx, piece) in self.pieces.iter_mut().enumerate() {
            if piece.label.trim().is_empty() {
                piece.label = format!("piece-{}", idx + 1);
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonInput {
    List(Vec<PieceRequest>),
    Document(PieceList),
}

/// Parse a piece list file, choosing the format by extension.
pub fn parse_piece_file(path: &Path) -> Result<PieceList> {
    if !path.exists() {
        return Err(OptimizeError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let list = if is_json {
        parse_json(&content)?
    } else {
        parse_text(&content)?
    };

    debug!(
        "Loaded {} request(s), {} piece(s) from {}",
        list.pieces.len(),
        list.total_quantity(),
        path.display()
    );

    Ok(list)
}

/// Parse a JSON array of requests or a `{ stock_length, kerf, pieces }` object.
pub fn parse_json(content: &str) -> Result<PieceList> {
    let mut list = match serde_json::from_str::<JsonInput>(content) {
        Ok(JsonInput::List(pieces)) => PieceList {
            pieces,
            ..Default::default()
        },
        Ok(JsonInput::Document(list)) => list,
        // Report the error of the document form
        Err(_) => serde_json::from_str::<PieceList>(content)?,
    };
    list.fill_labels();
    Ok(list)
}

/// Parse the delimited text format.
pub fn parse_text(content: &str) -> Result<PieceList> {
    let mut list = PieceList::default();

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((setting, value)) = split_setting(line) {
            let value = parse_number(value, line_no)?;
            match setting {
                Setting::StockLength => list.stock_length = Some(value),
                Setting::Kerf => list.kerf = Some(value),
            }
            continue;
        }

        list.pieces.push(parse_request_line(line, line_no)?);
    }

    list.fill_labels();
    Ok(list)
}

enum Setting {
    StockLength,
    Kerf,
}

/// Recognize `stock = 6000` or `kerf = 3`. Anything else is a piece line.
fn split_setting(line: &str) -> Option<(Setting, &str)> {
    let (key, value) = line.split_once('=')?;
    let setting = match key.trim().to_lowercase().as_str() {
        "stock" | "stock_length" => Setting::StockLength,
        "kerf" => Setting::Kerf,
        _ => return None,
    };
    let value = value.split_once('#').map_or(value, |(value, _)| value);
    Some((setting, value.trim()))
}

/// Parse `label<sep>length[<sep>quantity]`.
fn parse_request_line(line: &str, line_no: usize) -> Result<PieceRequest> {
    let fields: Vec<&str> = if line.contains(';') {
        line.split(';').map(str::trim).collect()
    } else if line.contains(',') {
        line.split(',').map(str::trim).collect()
    } else {
        line.split_whitespace().collect()
    };

    match fields.as_slice() {
        [label, length] => Ok(PieceRequest::new(
            parse_number(length, line_no)?,
            1,
            *label,
        )),
        [label, length, quantity] => Ok(PieceRequest::new(
            parse_number(length, line_no)?,
            parse_quantity(quantity, line_no)?,
            *label,
        )),
        _ => Err(OptimizeError::ParseError {
            line: line_no,
            message: format!(
                "expected 'label;length[;quantity]', got {} field(s)",
                fields.len()
            ),
        }),
    }
}

fn parse_number(s: &str, line_no: usize) -> Result<f64> {
    s.replace(',', ".")
        .parse::<f64>()
        .map_err(|_| OptimizeError::ParseError {
            line: line_no,
            message: format!("invalid number '{}'", s),
        })
}

fn parse_quantity(s: &str, line_no: usize) -> Result<u32> {
    s.parse::<u32>().map_err(|_| OptimizeError::ParseError {
        line: line_no,
        message: format!("invalid quantity '{}'", s),
    })
}
