//! JSON form of one coordinate.
//!
//! Finite values are plain numbers. `NaN` and the infinities have no JSON number
//! form, so they are written as the strings `"NaN"`, `"inf"` and `"-inf"`; reading
//! accepts either form, so every file the CLI writes can be read back.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "Repr", into = "Repr")]
pub struct Coord(pub f64);

/// Wire shape: a JSON number or a named float.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum Repr {
    Number(f64),
    Named(String),
}

impl From<Coord> for Repr {
    fn from(Coord(v): Coord) -> Self {
        if v.is_finite() {
            Repr::Number(v)
        } else {
            Repr::Named(v.to_string())
        }
    }
}

impl TryFrom<Repr> for Coord {
    type Error = String;

    fn try_from(repr: Repr) -> Result<Self, Self::Error> {
        match repr {
            Repr::Number(v) => Ok(Coord(v)),
            Repr::Named(name) => name.trim().parse::<f64>().map(Coord).map_err(|_| {
                format!("expected a number or \"NaN\", \"inf\", \"-inf\"; got {name:?}")
            }),
        }
    }
}
