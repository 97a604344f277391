#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;
use thiserror::Error;

/// The longest allowed currency code.
pub const MAX_CODE_LENGTH: usize = 7;

/// The largest allowed decimal precision.
pub const MAX_PRECISION: u8 = 18;

#[derive(Error, Debug, PartialEq)]
pub enum SymbolError {
    #[error("invalid symbol name. length must be in [1, {MAX_CODE_LENGTH}], got ({len})")]
    CodeLength { len: usize },

    #[error("invalid character ({c}) in symbol name, expected A-Z")]
    InvalidCharacter { c: char },

    #[error("symbol precision must be at most {MAX_PRECISION}, got ({precision})")]
    PrecisionTooLarge { precision: u8 },
}

/// A currency code plus the number of decimal places its amounts carry.
/// `Symbol { code: "BRM", precision: 3 }` describes amounts counted in
/// thousandths of a BRM.
#[cw_serde]
pub struct Symbol {
    pub code: String,
    pub precision: u8,
}

impl Symbol {
    /// Builds a validated symbol.
    pub fn new(code: impl Into<String>, precision: u8) -> Result<Self, SymbolError> {
        let symbol = Symbol {
            code: code.into(),
            precision,
        };
        symbol.validate()?;
        Ok(symbol)
    }

    /// Checks the classic ledger symbol rule: one to seven ASCII uppercase
    /// letters, precision at most [`MAX_PRECISION`]. Deserialized symbols
    /// arrive unvalidated and must pass through here before being trusted.
    pub fn validate(&self) -> Result<(), SymbolError> {
        if self.code.is_empty() || self.code.len() > MAX_CODE_LENGTH {
            return Err(SymbolError::CodeLength {
                len: self.code.len(),
            });
        }
        for c in self.code.chars() {
            if !c.is_ascii_uppercase() {
                return Err(SymbolError::InvalidCharacter { c });
            }
        }
        if self.precision > MAX_PRECISION {
            return Err(SymbolError::PrecisionTooLarge {
                precision: self.precision,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.precision, self.code)
    }
}

/// A fixed-point quantity of one currency. The amount is kept in the
/// currency's smallest unit; `symbol.precision` says where the decimal
/// point sits.
#[cw_serde]
pub struct Asset {
    pub amount: Uint128,
    pub symbol: Symbol,
}

impl Asset {
    pub fn new(amount: impl Into<Uint128>, symbol: Symbol) -> Self {
        Asset {
            amount: amount.into(),
            symbol,
        }
    }

    /// A zero quantity of the given currency.
    pub fn zero(symbol: Symbol) -> Self {
        Asset {
            amount: Uint128::zero(),
            symbol,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = 10u128.pow(self.symbol.precision as u32);
        let whole = self.amount.u128() / scale;
        if self.symbol.precision == 0 {
            write!(f, "{} {}", whole, self.symbol.code)
        } else {
            let frac = self.amount.u128() % scale;
            write!(
                f,
                "{}.{:0width$} {}",
                whole,
                frac,
                self.symbol.code,
                width = self.symbol.precision as usize
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_validation() {
        Symbol::new("BRM", 3).unwrap();
        Symbol::new("A", 0).unwrap();
        Symbol::new("ABCDEFG", 18).unwrap();

        assert_eq!(
            Symbol::new("", 3).unwrap_err(),
            SymbolError::CodeLength { len: 0 }
        );
        assert_eq!(
            Symbol::new("ABCDEFGH", 3).unwrap_err(),
            SymbolError::CodeLength { len: 8 }
        );
        assert_eq!(
            Symbol::new("brm", 3).unwrap_err(),
            SymbolError::InvalidCharacter { c: 'b' }
        );
        assert_eq!(
            Symbol::new("BR1", 3).unwrap_err(),
            SymbolError::InvalidCharacter { c: '1' }
        );
        assert_eq!(
            Symbol::new("BRM", 19).unwrap_err(),
            SymbolError::PrecisionTooLarge { precision: 19 }
        );
    }

    #[test]
    fn test_validate_deserialized_symbol() {
        // Symbols that arrive over the wire skip `new` entirely.
        let symbol: Symbol = cosmwasm_std::from_json(r#"{"code":"bad","precision":3}"#).unwrap();
        assert_eq!(
            symbol.validate().unwrap_err(),
            SymbolError::InvalidCharacter { c: 'b' }
        );
    }

    #[test]
    fn test_asset_display() {
        let brm = Symbol::new("BRM", 3).unwrap();
        assert_eq!(
            Asset::new(500000u128, brm.clone()).to_string(),
            "500.000 BRM"
        );
        assert_eq!(Asset::new(42u128, brm.clone()).to_string(), "0.042 BRM");
        assert_eq!(Asset::zero(brm).to_string(), "0.000 BRM");

        let whole = Symbol::new("TOK", 0).unwrap();
        assert_eq!(Asset::new(7u128, whole).to_string(), "7 TOK");
    }

    #[test]
    fn test_symbol_display() {
        let brm = Symbol::new("BRM", 3).unwrap();
        assert_eq!(brm.to_string(), "3,BRM");
    }

    #[test]
    fn test_zero() {
        let brm = Symbol::new("BRM", 3).unwrap();
        assert!(Asset::zero(brm.clone()).is_zero());
        assert!(!Asset::new(1u128, brm).is_zero());
    }
}
