// SPDX-License-Identifier: Apache-2.0

use num_bigint::BigUint;
use regex::Regex;
use std::sync::LazyLock;

use crate::{AttributeValue, Attributes, PadRingError, Result};

static BITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+):(\d+)$").unwrap());

/// Extra control bits that some pad cells need, declared on the pad ring
/// with the `bits` ("msb:lsb") and `resval` attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterField {
    msb: u32,
    lsb: u32,
    reset_value: BigUint,
}

impl RegisterField {
    /// Creates a field spanning `msb` down to `lsb`; `reset_value` must fit in
    /// its width.
    pub fn new(msb: u32, lsb: u32, reset_value: impl Into<BigUint>) -> Result<Self> {
        if msb < lsb {
            return Err(PadRingError::BitsOutOfOrder { msb, lsb });
        }
        let reset_value = reset_value.into();
        let width = u64::from(msb - lsb) + 1;
        if reset_value.bits() > width {
            return Err(PadRingError::ResetValueTooWide {
                value: reset_value.to_string(),
                width,
            });
        }
        Ok(RegisterField {
            msb,
            lsb,
            reset_value,
        })
    }

    /// Reads the field from free-form attributes. Returns `None` when `bits`
    /// is absent; `resval` is mandatory once `bits` is present.
    pub fn from_attributes(attributes: &Attributes) -> Result<Option<Self>> {
        let Some(bits) = attributes.get("bits") else {
            return Ok(None);
        };
        let (msb, lsb) = parse_bits(bits)?;
        let resval = attributes
            .get("resval")
            .ok_or(PadRingError::MissingResetValue)?;
        RegisterField::new(msb, lsb, parse_reset_value(resval)?).map(Some)
    }

    pub fn msb(&self) -> u32 {
        self.msb
    }

    pub fn lsb(&self) -> u32 {
        self.lsb
    }

    pub fn width(&self) -> u64 {
        u64::from(self.msb - self.lsb) + 1
    }

    pub fn reset_value(&self) -> &BigUint {
        &self.reset_value
    }
}

fn parse_bits(value: &AttributeValue) -> Result<(u32, u32)> {
    let malformed = || PadRingError::MalformedBits(format!("{value:?}"));
    let text = value.as_str().ok_or_else(malformed)?;
    let captures = BITS_RE.captures(text.trim()).ok_or_else(malformed)?;
    let msb = captures[1].parse::<u32>().map_err(|_| malformed())?;
    let lsb = captures[2].parse::<u32>().map_err(|_| malformed())?;
    Ok((msb, lsb))
}

fn parse_reset_value(value: &AttributeValue) -> Result<BigUint> {
    let malformed = || PadRingError::MalformedResetValue(value.to_string());
    match value {
        AttributeValue::Int(v) => u64::try_from(*v)
            .map(BigUint::from)
            .map_err(|_| malformed()),
        AttributeValue::String(s) => {
            let s = s.trim();
            let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
                Some(hex) => BigUint::parse_bytes(hex.as_bytes(), 16),
                None => BigUint::parse_bytes(s.as_bytes(), 10),
            };
            parsed.ok_or_else(malformed)
        }
        _ => Err(malformed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(entries: &[(&str, AttributeValue)]) -> Attributes {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn absent_bits_is_none() {
        assert_eq!(RegisterField::from_attributes(&Attributes::new()), Ok(None));
        // resval alone is ignored
        let a = attrs(&[("resval", 3_i64.into())]);
        assert_eq!(RegisterField::from_attributes(&a), Ok(None));
    }

    #[test]
    fn wide_fields_take_string_reset_values() {
        let a = attrs(&[("bits", "127:0".into()), ("resval", "0xffffffffffffffffffff".into())]);
        let field = RegisterField::from_attributes(&a).unwrap().unwrap();
        assert_eq!(field.width(), 128);
        assert_eq!(field.reset_value().bits(), 80);
    }

    #[test]
    fn malformed_bits() {
        for bits in ["7-0", "a:0", "7:", ":0", "-1:0"] {
            let a = attrs(&[("bits", bits.into()), ("resval", 0_i64.into())]);
            assert!(matches!(
                RegisterField::from_attributes(&a),
                Err(PadRingError::MalformedBits(_))
            ));
        }
        let a = attrs(&[("bits", 7_i64.into()), ("resval", 0_i64.into())]);
        assert!(matches!(
            RegisterField::from_attributes(&a),
            Err(PadRingError::MalformedBits(_))
        ));
    }

    #[test]
    fn negative_reset_value() {
        let a = attrs(&[("bits", "3:0".into()), ("resval", (-1_i64).into())]);
        assert!(matches!(
            RegisterField::from_attributes(&a),
            Err(PadRingError::MalformedResetValue(_))
        ));
    }

    #[test]
    fn lsb_offset_counts_in_width() {
        assert!(RegisterField::new(7, 4, 15_u32).is_ok());
        assert!(RegisterField::new(7, 4, 16_u32).is_err());
        assert_eq!(
            RegisterField::new(3, 4, 0_u32),
            Err(PadRingError::BitsOutOfOrder { msb: 3, lsb: 4 })
        );
    }

    #[test]
    fn full_u32_range_does_not_overflow() {
        let field = RegisterField::new(u32::MAX, 0, 0_u32).unwrap();
        assert_eq!(field.width(), 1 << 32);
        assert_eq!(RegisterField::new(u32::MAX, u32::MAX, 1_u32).unwrap().width(), 1);
    }
}
