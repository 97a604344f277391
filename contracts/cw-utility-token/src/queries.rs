use cosmwasm_std::{Deps, Order, StdResult};
use cw_storage_plus::Bound;
use cw_symbol::Asset;

use crate::msg::{
    BalanceResponse, CustomerInvoiceResponse, InvoiceResponse, ListInvoicesResponse,
    LockedBalanceResponse, StakeResponse, SupplyResponse,
};
use crate::state::{
    CurrencyStats, StakingConfig, BALANCES, CURRENCIES, CUSTOMER_INVOICES, INVOICES,
    LOCKED_BALANCES, STAKES, STAKING_CONFIG,
};

// Default settings for pagination
const MAX_LIMIT: u32 = 30;
const DEFAULT_LIMIT: u32 = 10;

/// Returns the circulating supply of a currency. Response: SupplyResponse
pub fn query_supply(deps: Deps, symbol_code: String) -> StdResult<SupplyResponse> {
    let stats = CURRENCIES.load(deps.storage, &symbol_code)?;
    Ok(SupplyResponse {
        supply: stats.supply,
    })
}

/// Returns an account's balance in a currency. Errors when no balance row
/// exists. Response: BalanceResponse
pub fn query_balance(deps: Deps, owner: String, symbol_code: String) -> StdResult<BalanceResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let stats = CURRENCIES.load(deps.storage, &symbol_code)?;
    let amount = BALANCES.load(deps.storage, (&owner, symbol_code.as_str()))?;
    Ok(BalanceResponse {
        balance: Asset::new(amount, stats.supply.symbol),
    })
}

/// Returns the full stats row for a currency. Response: CurrencyStats
pub fn query_currency_info(deps: Deps, symbol_code: String) -> StdResult<CurrencyStats> {
    CURRENCIES.load(deps.storage, &symbol_code)
}

/// Returns the aggregate staking totals. Response: StakingConfig
pub fn query_staking_config(deps: Deps) -> StdResult<StakingConfig> {
    STAKING_CONFIG.load(deps.storage)
}

/// Returns an account's stake record, if any. Response: StakeResponse
pub fn query_stake(deps: Deps, address: String) -> StdResult<StakeResponse> {
    let address = deps.api.addr_validate(&address)?;
    Ok(StakeResponse {
        stake: STAKES.may_load(deps.storage, &address)?,
    })
}

/// Returns an account's locked balance, if any. Response:
/// LockedBalanceResponse
pub fn query_locked_balance(deps: Deps, address: String) -> StdResult<LockedBalanceResponse> {
    let address = deps.api.addr_validate(&address)?;
    Ok(LockedBalanceResponse {
        locked: LOCKED_BALANCES.may_load(deps.storage, &address)?,
    })
}

/// Returns a sender-side invoice record. Response: InvoiceResponse
pub fn query_invoice(deps: Deps, sender: String, invoice_id: u64) -> StdResult<InvoiceResponse> {
    let sender = deps.api.addr_validate(&sender)?;
    Ok(InvoiceResponse {
        invoice: INVOICES.may_load(deps.storage, (&sender, invoice_id))?,
    })
}

/// Returns a recipient-side invoice mirror. Response:
/// CustomerInvoiceResponse
pub fn query_customer_invoice(
    deps: Deps,
    owner: String,
    invoice_id: u64,
) -> StdResult<CustomerInvoiceResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    Ok(CustomerInvoiceResponse {
        invoice: CUSTOMER_INVOICES.may_load(deps.storage, (&owner, invoice_id))?,
    })
}

/// Enumerates the invoices recorded under a sender, in invoice id order.
/// Response: ListInvoicesResponse
pub fn query_list_invoices(
    deps: Deps,
    sender: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<ListInvoicesResponse> {
    let sender = deps.api.addr_validate(&sender)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let invoices = INVOICES
        .prefix(&sender)
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (_, invoice) = item?;
            Ok(invoice)
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(ListInvoicesResponse { invoices })
}
