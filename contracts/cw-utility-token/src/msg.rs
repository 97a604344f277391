use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;
use cw_symbol::{Asset, Symbol};

use crate::state::{CustomerInvoice, Invoice, LockedBalance, StakeRecord, StakingConfig};

#[cw_serde]
pub struct InstantiateMsg {
    /// Account allowed to create currencies and transfer ownership. Falls
    /// back to the instantiating sender.
    pub owner: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Register a new currency with a fixed maximum supply. Owner only.
    Create { issuer: String, max_supply: Asset },
    /// Mint into circulation. Only the currency's issuer may call this;
    /// tokens land in the issuer's balance and, if `to` differs, move on
    /// with a regular transfer.
    Issue {
        to: String,
        quantity: Asset,
        memo: String,
    },
    /// Burn from the issuer's balance, shrinking circulation.
    Retire { quantity: Asset, memo: String },
    /// Move tokens from the sender to `to`.
    Transfer {
        to: String,
        quantity: Asset,
        memo: String,
    },
    /// Ensure a zero balance row exists for `owner`. Idempotent.
    Open { owner: String, symbol: Symbol },
    /// Delete the sender's balance row; the balance must be zero.
    Close { symbol: Symbol },
    /// Move sender balance into the staking engine.
    Stake { amount: Asset },
    /// Move staked funds into the lock queue. `amount` equal to the whole
    /// stake erases the stake record.
    Unstake { amount: Asset },
    /// Release the sender's locked balance back to the ledger once the
    /// lock period has elapsed.
    Refund {},
    /// Bill `to` for `total`, recording the invoice on both sides.
    SendInvoice {
        to: String,
        total: Asset,
        payment_due: u64,
        description: String,
    },
    /// Pay an invoice addressed to the sender. `total` must equal the
    /// invoice total exactly.
    PayInvoice { invoice_id: u64, total: Asset },
    /// Decline an invoice addressed to the sender.
    RejectInvoice { invoice_id: u64, reason: String },
    /// Transfer or renounce contract ownership.
    UpdateOwnership(cw_ownable::Action),
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// The circulating supply of a currency.
    #[returns(SupplyResponse)]
    Supply { symbol_code: String },
    /// An account's balance in a currency. Errors if the account has no
    /// balance row for it.
    #[returns(BalanceResponse)]
    Balance { owner: String, symbol_code: String },
    /// The full stats row for a currency.
    #[returns(crate::state::CurrencyStats)]
    CurrencyInfo { symbol_code: String },
    /// The aggregate staking totals.
    #[returns(StakingConfig)]
    StakingConfig {},
    /// An account's stake record, if any.
    #[returns(StakeResponse)]
    Stake { address: String },
    /// An account's locked balance, if any.
    #[returns(LockedBalanceResponse)]
    LockedBalance { address: String },
    /// A sender-side invoice record.
    #[returns(InvoiceResponse)]
    Invoice { sender: String, invoice_id: u64 },
    /// A recipient-side invoice mirror.
    #[returns(CustomerInvoiceResponse)]
    CustomerInvoice { owner: String, invoice_id: u64 },
    /// All invoices recorded under a sender, in invoice id order.
    #[returns(ListInvoicesResponse)]
    ListInvoices {
        sender: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(cw_ownable::Ownership<Addr>)]
    Ownership {},
}

#[cw_serde]
pub enum MigrateMsg {
    FromCompatible {},
}

#[cw_serde]
pub struct SupplyResponse {
    pub supply: Asset,
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: Asset,
}

#[cw_serde]
pub struct StakeResponse {
    pub stake: Option<StakeRecord>,
}

#[cw_serde]
pub struct LockedBalanceResponse {
    pub locked: Option<LockedBalance>,
}

#[cw_serde]
pub struct InvoiceResponse {
    pub invoice: Option<Invoice>,
}

#[cw_serde]
pub struct CustomerInvoiceResponse {
    pub invoice: Option<CustomerInvoice>,
}

#[cw_serde]
pub struct ListInvoicesResponse {
    pub invoices: Vec<Invoice>,
}
