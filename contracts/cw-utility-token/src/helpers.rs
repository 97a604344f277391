use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, QuerierWrapper, StdError, StdResult, Storage};
use cw_symbol::Asset;

use crate::error::ContractError;
use crate::msg::{BalanceResponse, QueryMsg, SupplyResponse};
use crate::state::{CurrencyStats, BALANCES, CURRENCIES, MAX_MEMO_LENGTH};

/// Loads the stats row for a symbol code, rejecting unknown currencies.
pub fn load_currency(
    storage: &dyn Storage,
    symbol_code: &str,
) -> Result<CurrencyStats, ContractError> {
    CURRENCIES
        .may_load(storage, symbol_code)?
        .ok_or(ContractError::UnknownCurrency {})
}

/// Checks a quantity against the currency it claims to be: non-zero and an
/// exact symbol match (code and precision) with the stats row.
pub fn assert_quantity(quantity: &Asset, stats: &CurrencyStats) -> Result<(), ContractError> {
    if quantity.amount.is_zero() {
        return Err(ContractError::ZeroQuantity {});
    }
    if quantity.symbol != stats.supply.symbol {
        return Err(ContractError::SymbolMismatch {});
    }
    Ok(())
}

pub fn assert_memo(memo: &str) -> Result<(), ContractError> {
    if memo.len() > MAX_MEMO_LENGTH {
        return Err(ContractError::MemoTooLong {});
    }
    Ok(())
}

/// Debit primitive. Rejects if the owner has no balance row for the
/// currency or holds less than `value`.
pub fn sub_balance(
    storage: &mut dyn Storage,
    owner: &Addr,
    value: &Asset,
) -> Result<(), ContractError> {
    let key = (owner, value.symbol.code.as_str());
    let balance = BALANCES
        .may_load(storage, key)?
        .ok_or(ContractError::NoBalance {})?;
    if balance < value.amount {
        return Err(ContractError::Overdrawn {});
    }
    BALANCES.save(
        storage,
        key,
        &balance.checked_sub(value.amount).map_err(StdError::overflow)?,
    )?;
    Ok(())
}

/// Credit primitive. Creates the balance row on first credit.
pub fn add_balance(
    storage: &mut dyn Storage,
    owner: &Addr,
    value: &Asset,
) -> Result<(), ContractError> {
    let key = (owner, value.symbol.code.as_str());
    let balance = BALANCES.may_load(storage, key)?.unwrap_or_default();
    BALANCES.save(
        storage,
        key,
        &balance.checked_add(value.amount).map_err(StdError::overflow)?,
    )?;
    Ok(())
}

/// The settlement path shared by `transfer`, the post-issue move to `to`,
/// and invoice payment: validates the quantity against the stats row, then
/// debits `from` and credits `to`.
pub fn transfer_tokens(
    storage: &mut dyn Storage,
    stats: &CurrencyStats,
    from: &Addr,
    to: &Addr,
    quantity: &Asset,
) -> Result<(), ContractError> {
    if from == to {
        return Err(ContractError::SelfTransfer {});
    }
    assert_quantity(quantity, stats)?;
    sub_balance(storage, from, quantity)?;
    add_balance(storage, to, quantity)?;
    Ok(())
}

/// A wrapper around the contract address for other contracts that need the
/// ledger's read-only entity. Lets callers query supply and balances
/// without writing the wasm query plumbing themselves.
#[cw_serde]
pub struct UtilityTokenContract(pub Addr);

impl UtilityTokenContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    /// The circulating supply of a currency on this ledger.
    pub fn supply(
        &self,
        querier: &QuerierWrapper,
        symbol_code: impl Into<String>,
    ) -> StdResult<Asset> {
        let res: SupplyResponse = querier.query_wasm_smart(
            &self.0,
            &QueryMsg::Supply {
                symbol_code: symbol_code.into(),
            },
        )?;
        Ok(res.supply)
    }

    /// An account's balance in a currency on this ledger. Errors if the
    /// account has no balance row for it.
    pub fn balance(
        &self,
        querier: &QuerierWrapper,
        owner: impl Into<String>,
        symbol_code: impl Into<String>,
    ) -> StdResult<Asset> {
        let res: BalanceResponse = querier.query_wasm_smart(
            &self.0,
            &QueryMsg::Balance {
                owner: owner.into(),
                symbol_code: symbol_code.into(),
            },
        )?;
        Ok(res.balance)
    }
}
