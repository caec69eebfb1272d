//! Tolerant deserializers for the PHP-backed API.
//!
//! Depending on the endpoint the server emits numbers either as JSON numbers
//! or as strings (`"precio": "1500.00"`), and booleans as `true`/`false`,
//! `0`/`1` or `"1"`. These field-level helpers accept every shape the server
//! is known to produce so the tolerance lives in one place instead of being
//! special-cased throughout the UI.

use serde::de::{Deserializer, Error as DeError, Unexpected};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumOrStr {
    Num(f64),
    Str(String),
}

fn como_f64<E: DeError>(v: NumOrStr) -> Result<f64, E> {
    match v {
        NumOrStr::Num(n) => Ok(n),
        NumOrStr::Str(s) => s.trim().parse::<f64>().map_err(|_| {
            E::invalid_value(Unexpected::Str(&s), &"a number or a numeric string")
        }),
    }
}

fn como_u64<E: DeError>(v: NumOrStr) -> Result<u64, E> {
    let n = como_f64::<E>(v)?;
    if n >= 0.0 && n.fract() == 0.0 {
        Ok(n as u64)
    } else {
        Err(E::invalid_value(
            Unexpected::Float(n),
            &"a non-negative integer",
        ))
    }
}

fn como_u32<E: DeError>(v: NumOrStr) -> Result<u32, E> {
    let n = como_u64::<E>(v)?;
    u32::try_from(n).map_err(|_| E::invalid_value(Unexpected::Unsigned(n), &"a u32"))
}

pub fn f64_flexible<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    como_f64(NumOrStr::deserialize(d)?)
}

pub fn u64_flexible<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
    como_u64(NumOrStr::deserialize(d)?)
}

pub fn u32_flexible<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    como_u32(NumOrStr::deserialize(d)?)
}

pub fn opt_u64_flexible<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u64>, D::Error> {
    Option::<NumOrStr>::deserialize(d)?
        .map(como_u64::<D::Error>)
        .transpose()
}

pub fn opt_u32_flexible<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
    Option::<NumOrStr>::deserialize(d)?
        .map(como_u32::<D::Error>)
        .transpose()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolLike {
    Bool(bool),
    Num(i64),
    Str(String),
}

pub fn bool_flexible<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    match BoolLike::deserialize(d)? {
        BoolLike::Bool(b) => Ok(b),
        BoolLike::Num(n) => Ok(n != 0),
        BoolLike::Str(s) => match s.trim() {
            "1" | "true" => Ok(true),
            "0" | "false" | "" => Ok(false),
            other => Err(D::Error::invalid_value(
                Unexpected::Str(other),
                &"a boolean-like value",
            )),
        },
    }
}
