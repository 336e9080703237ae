// src/shared/decimal.rs

//! Serde para `BigDecimal` como número JSON.
//!
//! Com o `arbitrary_precision` do serde_json o número guarda o texto original,
//! então o preço entra e sai sem passar por `f64`: `0.3` é lido como `0.3` e
//! devolvido como `0.3`, como número JSON (e não string, como faria o serde
//! padrão do bigdecimal).

use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;

pub fn serializar<S: Serializer>(valor: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error> {
    let numero = Number::from_str(&valor.to_string()).map_err(ser::Error::custom)?;
    numero.serialize(serializer)
}

pub fn deserializar<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigDecimal, D::Error> {
    let numero = Number::deserialize(deserializer)?;
    BigDecimal::from_str(&numero.to_string()).map_err(de::Error::custom)
}

pub fn deserializar_opcional<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<BigDecimal>, D::Error> {
    Option::<Number>::deserialize(deserializer)?
        .map(|numero| BigDecimal::from_str(&numero.to_string()).map_err(de::Error::custom))
        .transpose()
}
