use std::str::FromStr;

use crate::cube::model::Cube;
use crate::foundation::error::{BlendError, BlendResult};

/// Which slices of a cube to composite, bottom to top.
///
/// Serializes as `null`, a single integer, or an array of integers.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum Selection {
    /// Every slice in natural order.
    #[default]
    All,
    /// One slice; still yields a three-dimensional cube.
    Single(usize),
    /// Explicit order. Duplicates and omissions are allowed.
    Indices(Vec<usize>),
}

impl Selection {
    /// Resolve to explicit indices for a cube with `slices` slices.
    pub fn indices(&self, slices: usize) -> BlendResult<Vec<usize>> {
        let indices = match self {
            Self::All => return Ok((0..slices).collect()),
            Self::Single(i) => vec![*i],
            Self::Indices(v) => v.clone(),
        };
        if let Some(bad) = indices.iter().find(|&&i| i >= slices) {
            return Err(BlendError::selection(format!(
                "slice index {bad} out of range for cube with {slices} slices"
            )));
        }
        Ok(indices)
    }

    /// Interpret loosely typed input: `null`, an integer, or an array of integers.
    pub fn from_json(value: &serde_json::Value) -> BlendResult<Self> {
        use serde_json::Value;

        fn index(v: &Value) -> BlendResult<usize> {
            v.as_u64()
                .and_then(|i| usize::try_from(i).ok())
                .ok_or_else(|| {
                    BlendError::selection(format!(
                        "slice index must be a non-negative integer, got {v}"
                    ))
                })
        }

        match value {
            Value::Null => Ok(Self::All),
            Value::Number(_) => index(value).map(Self::Single),
            Value::Array(items) => items
                .iter()
                .map(index)
                .collect::<BlendResult<Vec<_>>>()
                .map(Self::Indices),
            other => Err(BlendError::selection(format!(
                "selection must be null, an integer, or an array of integers, got {other}"
            ))),
        }
    }
}

impl From<usize> for Selection {
    fn from(i: usize) -> Self {
        Self::Single(i)
    }
}

impl From<Vec<usize>> for Selection {
    fn from(v: Vec<usize>) -> Self {
        Self::Indices(v)
    }
}

impl From<&[usize]> for Selection {
    fn from(v: &[usize]) -> Self {
        Self::Indices(v.to_vec())
    }
}

impl FromStr for Selection {
    type Err = BlendError;

    /// `"all"` (or empty), `"3"`, or a comma list such as `"5,0,8"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        let parse = |part: &str| {
            part.trim().parse::<usize>().map_err(|_| {
                BlendError::selection(format!("'{part}' is not a non-negative integer"))
            })
        };
        if !s.contains(',') {
            return parse(s).map(Self::Single);
        }
        s.split(',')
            .map(parse)
            .collect::<BlendResult<Vec<_>>>()
            .map(Self::Indices)
    }
}

impl<'de> serde::Deserialize<'de> for Selection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Self::from_json(&value).map_err(serde::de::Error::custom)
    }
}

/// Stateless slice gatherer.
pub struct Stack;

impl Stack {
    #[tracing::instrument(skip(cube), fields(shape = ?cube.shape()))]
    /// Gather the selected slices, in selection order, into a new cube.
    ///
    /// The source cube is left untouched.
    pub fn select(cube: &Cube, selection: &Selection) -> BlendResult<Cube> {
        let indices = selection.indices(cube.slices())?;
        let mut data = Vec::with_capacity(indices.len() * cube.plane_len());
        for &i in &indices {
            let plane = cube.slice(i).ok_or_else(|| {
                BlendError::selection(format!("slice index {i} out of range"))
            })?;
            data.extend_from_slice(plane);
        }
        tracing::debug!(?indices, "selected slices");
        Cube::new(indices.len(), cube.dims(), data)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cube/stack.rs"]
mod tests;
