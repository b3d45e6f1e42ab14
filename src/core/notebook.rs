//! Notebook document model.
//!
//! Only the fields the stripper touches are typed. Everything else is kept in
//! `extra` so that a read/write cycle leaves it untouched.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// The structs convert through `Map<String, Value>` rather than using
// `#[serde(flatten)]`: flatten buffers values through serde's internal content
// type, which loses serde_json's arbitrary-precision numbers.

/// A parsed notebook document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Notebook {
    /// Worksheets in document order
    pub worksheets: Vec<Worksheet>,
    /// Notebook-level fields such as `metadata` and `nbformat`
    pub extra: Map<String, Value>,
}

/// An ordered grouping of cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Worksheet {
    /// Cells in document order
    pub cells: Vec<Cell>,
    pub extra: Map<String, Value>,
}

/// A single notebook cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Cell {
    /// Execution results; created empty when the source omits it
    pub outputs: Vec<Value>,
    /// Execution-order marker. `Some(Value::Null)` means the key is present with
    /// an explicit `null`, `None` means the key is absent.
    pub prompt_number: Option<Value>,
    /// Remaining cell fields (`cell_type`, `input`, `language`, `metadata`, ...)
    pub extra: Map<String, Value>,
}

fn take_required(map: &mut Map<String, Value>, key: &'static str) -> Result<Value, serde_json::Error> {
    map.remove(key).ok_or_else(|| serde_json::Error::missing_field(key))
}

impl TryFrom<Map<String, Value>> for Notebook {
    type Error = serde_json::Error;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        let worksheets = serde_json::from_value(take_required(&mut map, "worksheets")?)?;
        Ok(Self { worksheets, extra: map })
    }
}

impl From<Notebook> for Map<String, Value> {
    fn from(notebook: Notebook) -> Self {
        let mut map = notebook.extra;
        let worksheets = notebook
            .worksheets
            .into_iter()
            .map(|ws| Value::Object(ws.into()))
            .collect();
        map.insert("worksheets".to_string(), Value::Array(worksheets));
        map
    }
}

impl TryFrom<Map<String, Value>> for Worksheet {
    type Error = serde_json::Error;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        let cells = serde_json::from_value(take_required(&mut map, "cells")?)?;
        Ok(Self { cells, extra: map })
    }
}

impl From<Worksheet> for Map<String, Value> {
    fn from(worksheet: Worksheet) -> Self {
        let mut map = worksheet.extra;
        let cells = worksheet
            .cells
            .into_iter()
            .map(|cell| Value::Object(cell.into()))
            .collect();
        map.insert("cells".to_string(), Value::Array(cells));
        map
    }
}

impl TryFrom<Map<String, Value>> for Cell {
    type Error = serde_json::Error;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        let outputs = match map.remove("outputs") {
            Some(outputs) => serde_json::from_value(outputs)?,
            None => Vec::new(),
        };
        // Any present value, `null` included, counts as a prompt number
        let prompt_number = map.remove("prompt_number");
        Ok(Self { outputs, prompt_number, extra: map })
    }
}

impl From<Cell> for Map<String, Value> {
    fn from(cell: Cell) -> Self {
        let mut map = cell.extra;
        map.insert("outputs".to_string(), Value::Array(cell.outputs));
        if let Some(prompt_number) = cell.prompt_number {
            map.insert("prompt_number".to_string(), prompt_number);
        }
        map
    }
}

impl Notebook {
    /// Iterate over every cell of every worksheet
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.worksheets.iter().flat_map(|ws| ws.cells.iter())
    }

    /// Mutably iterate over every cell of every worksheet
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.worksheets.iter_mut().flat_map(|ws| ws.cells.iter_mut())
    }

    pub fn cell_count(&self) -> usize {
        self.worksheets.iter().map(|ws| ws.cells.len()).sum()
    }
}

impl Cell {
    pub fn has_prompt_number(&self) -> bool {
        self.prompt_number.is_some()
    }
}
