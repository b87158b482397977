//! Conversion of two-column tabular data to a JSON-friendly value.

use chrono::NaiveDateTime;
use serde_json::{Map, Number, Value};
use tracing::debug;
use crate::error::{BreweryError, Result};

/// A single cell of tabular data.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Null,
    Int(i64),
    Float(f64),
    Str(String),
    /// Naive timestamps are taken to be UTC.
    Timestamp(NaiveDateTime),
}

impl Cell {
    /// JSON value of the cell.  Null and NaN give `null`, timestamps
    /// give seconds since the Unix epoch.
    pub fn to_json(&self) -> Value {
        match self {
            Cell::Null => Value::Null,
            Cell::Int(i) => Value::from(*i),
            Cell::Float(x) => float(*x),
            Cell::Str(s) => Value::String(s.clone()),
            Cell::Timestamp(t) => {
                let t = t.and_utc();
                float(t.timestamp() as f64
                      + t.timestamp_subsec_nanos() as f64 / 1e9)
            }
        }
    }

    /// The cell rendered as a JSON object key.
    pub fn to_key(&self) -> String {
        match self.to_json() {
            Value::String(s) => s,
            v => v.to_string(),
        }
    }
}

// Non-finite floats have no JSON representation.
fn float(x: f64) -> Value {
    Number::from_f64(x).map_or(Value::Null, Value::Number)
}

impl From<i64> for Cell { fn from(i: i64) -> Self { Cell::Int(i) } }
impl From<f64> for Cell { fn from(x: f64) -> Self { Cell::Float(x) } }
impl From<&str> for Cell { fn from(s: &str) -> Self { Cell::Str(s.into()) } }
impl From<String> for Cell { fn from(s: String) -> Self { Cell::Str(s) } }
impl From<NaiveDateTime> for Cell {
    fn from(t: NaiveDateTime) -> Self { Cell::Timestamp(t) }
}
impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(c: Option<T>) -> Self { c.map_or(Cell::Null, Into::into) }
}

/// A source of (key, value) rows.
pub trait Tabular {
    fn rows(&self) -> Box<dyn Iterator<Item = (&Cell, &Cell)> + '_>;
}

/// Values labeled by an index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    index: Vec<Cell>,
    values: Vec<Cell>,
}

impl Series {
    /// A series indexed by `0 .. values.len()`.
    pub fn new<C: Into<Cell>>(values: impl IntoIterator<Item = C>) -> Self {
        let values: Vec<Cell> = values.into_iter().map(Into::into).collect();
        let index = (0 .. values.len() as i64).map(Cell::Int).collect();
        Self { index, values }
    }

    /// A series with an explicit index.
    pub fn with_index(index: Vec<Cell>, values: Vec<Cell>) -> Result<Self> {
        check_lengths(index.len(), values.len())?;
        Ok(Self { index, values })
    }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }
}

impl Tabular for Series {
    fn rows(&self) -> Box<dyn Iterator<Item = (&Cell, &Cell)> + '_> {
        Box::new(self.index.iter().zip(&self.values))
    }
}

/// Two named columns; the first gives the keys, the second the
/// values.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    columns: [(String, Vec<Cell>); 2],
}

impl Frame {
    pub fn new(key: (&str, Vec<Cell>), value: (&str, Vec<Cell>))
               -> Result<Self> {
        check_lengths(key.1.len(), value.1.len())?;
        Ok(Self { columns: [(key.0.to_string(), key.1),
                            (value.0.to_string(), value.1)] })
    }

    pub fn column_names(&self) -> [&str; 2] {
        [&self.columns[0].0, &self.columns[1].0]
    }
}

impl Tabular for Frame {
    fn rows(&self) -> Box<dyn Iterator<Item = (&Cell, &Cell)> + '_> {
        Box::new(self.columns[0].1.iter().zip(&self.columns[1].1))
    }
}

fn check_lengths(keys: usize, values: usize) -> Result<()> {
    if keys != values {
        return Err(BreweryError::Tabular {
            message: format!("{keys} keys for {values} values") })
    }
    Ok(())
}

/// Convert `data` to `[{key: value, ...}]`.  Later rows overwrite
/// earlier ones with the same key.
///
/// # Example
///
/// ```
/// use carto_brewery::{transform_data, Series};
/// let json = transform_data(&Series::new([1.5, f64::NAN])).unwrap();
/// assert_eq!(json.to_string(), r#"[{"0":1.5,"1":null}]"#);
/// ```
pub fn transform_data(data: &dyn Tabular) -> Result<Value> {
    let map: Map<String, Value> = data.rows()
        .map(|(k, v)| (k.to_key(), v.to_json()))
        .collect();
    debug!(keys = map.len(), "Transformed tabular data");
    Ok(Value::Array(vec![Value::Object(map)]))
}
