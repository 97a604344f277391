use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    Ownership(#[from] cw_ownable::OwnershipError),

    #[error(transparent)]
    Symbol(#[from] cw_symbol::SymbolError),

    #[error("unauthorized")]
    Unauthorized {},

    #[error("token with symbol already exists")]
    CurrencyExists {},

    #[error("token with symbol does not exist")]
    UnknownCurrency {},

    #[error("max-supply must be positive")]
    ZeroMaxSupply {},

    #[error("quantity must be positive")]
    ZeroQuantity {},

    #[error("symbol precision mismatch")]
    SymbolMismatch {},

    #[error("memo has more than 256 bytes")]
    MemoTooLong {},

    #[error("quantity exceeds available supply")]
    ExceedsAvailableSupply {},

    #[error("cannot transfer to self")]
    SelfTransfer {},

    #[error("no balance object found")]
    NoBalance {},

    #[error("overdrawn balance")]
    Overdrawn {},

    #[error("balance row already deleted or never existed")]
    NoBalanceRow {},

    #[error("cannot close because the balance is not zero")]
    BalanceNotZero {},

    #[error("no stake for this account")]
    NoStake {},

    #[error("cannot unstake more than has been staked")]
    UnstakeTooLarge {},

    #[error("nothing to refund")]
    NothingToRefund {},

    #[error("must wait until the lock period is over")]
    RefundNotDue {},

    #[error("invalid payment due")]
    InvalidPaymentDue {},

    #[error("account has no such invoice")]
    UnknownInvoice {},

    #[error("invoice not found")]
    InvoiceNotFound {},

    #[error("partial or over payments are not allowed")]
    PaymentMismatch {},

    #[error("invoice is already paid or rejected")]
    InvoiceNotOpen {},

    // Should never trigger; the id space would have to collide within one
    // partition.
    #[error("invoice id collision ({id})")]
    InvoiceIdCollision { id: u64 },
}
