use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};
use cw_symbol::Asset;

/// Seconds a weekly stake waits before it matures.
pub const WEEK_WAIT: u64 = 60 * 60 * 24 * 7;
/// Seconds a monthly stake waits before it matures.
pub const MONTH_WAIT: u64 = WEEK_WAIT * 4;
/// Seconds a quarterly stake waits before it matures.
pub const QUARTER_WAIT: u64 = MONTH_WAIT * 3;
/// Seconds unstaked funds sit in the lock queue before `refund` may
/// release them.
pub const REFUND_WAIT: u64 = 60 * 60 * 24 * 10;

/// The longest memo accepted by transfer/issue/retire, in bytes.
pub const MAX_MEMO_LENGTH: usize = 256;

/// Supply bookkeeping for one currency. `supply` must never exceed
/// `max_supply` and always equals the sum of every account's balance in
/// this currency.
#[cw_serde]
pub struct CurrencyStats {
    pub supply: Asset,
    pub max_supply: Asset,
    /// The only account allowed to issue and retire this currency.
    pub issuer: Addr,
}

#[cw_serde]
#[derive(Copy)]
pub enum StakePeriod {
    Weekly,
    Monthly,
    Quarterly,
}

impl StakePeriod {
    /// The maturity wait for this period.
    pub fn wait_seconds(&self) -> u64 {
        match self {
            StakePeriod::Weekly => WEEK_WAIT,
            StakePeriod::Monthly => MONTH_WAIT,
            StakePeriod::Quarterly => QUARTER_WAIT,
        }
    }
}

/// One account's stake. At most one record per account; additional stakes
/// accumulate into it and reset the maturity timestamps.
#[cw_serde]
pub struct StakeRecord {
    pub addr: Addr,
    pub period: StakePeriod,
    pub staked: Asset,
    /// Reserved payout holdback. Always zero under the current policy, but
    /// the unstake bookkeeping still accounts for it.
    pub escrow: Asset,
    pub stake_date: u64,
    pub stake_due: u64,
}

/// Aggregate staking totals, one row for the whole contract. Mutated in
/// lockstep with every stake record mutation: `total_staked` equals the sum
/// of all records' staked amounts and of the three period buckets.
#[cw_serde]
pub struct StakingConfig {
    pub running: bool,
    /// Incremented on every stake call, decremented on full unstake.
    pub active_accounts: u32,
    pub staked_weekly: Uint128,
    pub staked_monthly: Uint128,
    pub staked_quarterly: Uint128,
    pub total_staked: Uint128,
    pub total_escrowed_monthly: Uint128,
    pub total_escrowed_quarterly: Uint128,
}

impl StakingConfig {
    pub fn new() -> Self {
        StakingConfig {
            running: true,
            active_accounts: 0,
            staked_weekly: Uint128::zero(),
            staked_monthly: Uint128::zero(),
            staked_quarterly: Uint128::zero(),
            total_staked: Uint128::zero(),
            total_escrowed_monthly: Uint128::zero(),
            total_escrowed_quarterly: Uint128::zero(),
        }
    }
}

impl Default for StakingConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Funds removed from staking but not yet usable. Every unstake adds to
/// the row and pushes `refund_due` out to now + [`REFUND_WAIT`].
#[cw_serde]
pub struct LockedBalance {
    pub addr: Addr,
    pub locked: Asset,
    pub refund_due: u64,
}

#[cw_serde]
pub enum InvoiceStatus {
    Open,
    /// Declared for the full lifecycle; no execute path currently sets it.
    PartPaid,
    Paid,
    Rejected,
    /// Declared for the full lifecycle; no execute path currently sets it.
    WriteOff,
}

/// The full invoice, stored under the sender's partition. Retained after
/// payment or rejection as the sender's history.
#[cw_serde]
pub struct Invoice {
    pub id: u64,
    pub status: InvoiceStatus,
    pub from: Addr,
    pub to: Addr,
    pub total: Asset,
    pub paid_total: Asset,
    pub payment_due: u64,
    pub payment_date: Option<u64>,
    /// Decimal form of the derived payment id, set when the invoice is
    /// paid.
    pub payment_id: Option<String>,
    pub description: String,
}

/// Thin mirror stored under the recipient's partition. Exists only so the
/// payer can discover which sender partition holds the full record; erased
/// once the invoice leaves the open state.
#[cw_serde]
pub struct CustomerInvoice {
    pub id: u64,
    pub created: u64,
    pub sender: Addr,
}

/// Currency stats keyed by symbol code.
pub const CURRENCIES: Map<&str, CurrencyStats> = Map::new("currencies");

/// Account balances keyed by (owner, symbol code). Rows are created on
/// first credit and removed only by `close`.
pub const BALANCES: Map<(&Addr, &str), Uint128> = Map::new("balances");

pub const STAKING_CONFIG: Item<StakingConfig> = Item::new("staking_config");

pub const STAKES: Map<&Addr, StakeRecord> = Map::new("stakes");

pub const LOCKED_BALANCES: Map<&Addr, LockedBalance> = Map::new("locked_balances");

/// Full invoices keyed by (sender, invoice id).
pub const INVOICES: Map<(&Addr, u64), Invoice> = Map::new("invoices");

/// Recipient-side mirrors keyed by (recipient, invoice id).
pub const CUSTOMER_INVOICES: Map<(&Addr, u64), CustomerInvoice> = Map::new("customer_invoices");
