use cosmwasm_std::{Addr, DepsMut, Env, Event, MessageInfo, Response, StdError, Uint128};
use cw_symbol::{Asset, Symbol};

use crate::error::ContractError;
use crate::helpers::{
    add_balance, assert_memo, assert_quantity, load_currency, sub_balance, transfer_tokens,
};
use crate::ids;
use crate::state::{
    CurrencyStats, CustomerInvoice, Invoice, InvoiceStatus, LockedBalance, StakePeriod,
    StakeRecord, BALANCES, CURRENCIES, CUSTOMER_INVOICES, INVOICES, LOCKED_BALANCES, REFUND_WAIT,
    STAKES, STAKING_CONFIG, WEEK_WAIT,
};

/// The ledger notifies both parties of a movement by leaving a structured
/// event in the transaction trace.
fn transfer_event(from: &Addr, to: &Addr, quantity: &Asset, memo: &str) -> Event {
    Event::new("transfer")
        .add_attribute("from", from)
        .add_attribute("to", to)
        .add_attribute("quantity", quantity.to_string())
        .add_attribute("memo", memo)
}

/// Fire-and-forget counterparty notification for the invoice workflow.
/// Whether the recipient acts on it is not observable here.
fn notify_event(recipient: &Addr, status: &str, message: &str, invoice: &Invoice) -> Event {
    Event::new("invoice_notification")
        .add_attribute("recipient", recipient)
        .add_attribute("status", status)
        .add_attribute("message", message)
        .add_attribute("invoice_id", invoice.id.to_string())
        .add_attribute("created_by", &invoice.from)
        .add_attribute("description", invoice.description.clone())
        .add_attribute("quantity", invoice.total.to_string())
        .add_attribute("payment_due", invoice.payment_due.to_string())
}

pub fn create(
    deps: DepsMut,
    info: MessageInfo,
    issuer: String,
    max_supply: Asset,
) -> Result<Response, ContractError> {
    // Only the contract owner registers currencies.
    cw_ownable::assert_owner(deps.storage, &info.sender)?;

    max_supply.symbol.validate()?;
    if max_supply.amount.is_zero() {
        return Err(ContractError::ZeroMaxSupply {});
    }
    let issuer = deps.api.addr_validate(&issuer)?;

    if CURRENCIES.has(deps.storage, &max_supply.symbol.code) {
        return Err(ContractError::CurrencyExists {});
    }

    let stats = CurrencyStats {
        supply: Asset::zero(max_supply.symbol.clone()),
        max_supply,
        issuer,
    };
    CURRENCIES.save(deps.storage, &stats.supply.symbol.code, &stats)?;

    Ok(Response::new()
        .add_attribute("action", "create")
        .add_attribute("symbol", stats.supply.symbol.to_string())
        .add_attribute("max_supply", stats.max_supply.to_string())
        .add_attribute("issuer", stats.issuer))
}

pub fn issue(
    deps: DepsMut,
    info: MessageInfo,
    to: String,
    quantity: Asset,
    memo: String,
) -> Result<Response, ContractError> {
    quantity.symbol.validate()?;
    assert_memo(&memo)?;

    let mut stats = load_currency(deps.storage, &quantity.symbol.code)?;
    if info.sender != stats.issuer {
        return Err(ContractError::Unauthorized {});
    }
    assert_quantity(&quantity, &stats)?;

    let available = stats
        .max_supply
        .amount
        .checked_sub(stats.supply.amount)
        .map_err(StdError::overflow)?;
    if quantity.amount > available {
        return Err(ContractError::ExceedsAvailableSupply {});
    }

    stats.supply.amount = stats
        .supply
        .amount
        .checked_add(quantity.amount)
        .map_err(StdError::overflow)?;
    CURRENCIES.save(deps.storage, &quantity.symbol.code, &stats)?;

    // Newly issued tokens land in the issuer's balance first.
    add_balance(deps.storage, &stats.issuer, &quantity)?;

    let to = deps.api.addr_validate(&to)?;
    let mut response = Response::new()
        .add_attribute("action", "issue")
        .add_attribute("to", &to)
        .add_attribute("quantity", quantity.to_string());

    // Anything issued to someone else moves on with a regular transfer.
    if to != stats.issuer {
        transfer_tokens(deps.storage, &stats, &stats.issuer, &to, &quantity)?;
        response = response.add_event(transfer_event(&stats.issuer, &to, &quantity, &memo));
    }

    Ok(response)
}

pub fn retire(
    deps: DepsMut,
    info: MessageInfo,
    quantity: Asset,
    memo: String,
) -> Result<Response, ContractError> {
    quantity.symbol.validate()?;
    assert_memo(&memo)?;

    let mut stats = load_currency(deps.storage, &quantity.symbol.code)?;
    if info.sender != stats.issuer {
        return Err(ContractError::Unauthorized {});
    }
    assert_quantity(&quantity, &stats)?;

    stats.supply.amount = stats
        .supply
        .amount
        .checked_sub(quantity.amount)
        .map_err(StdError::overflow)?;
    CURRENCIES.save(deps.storage, &quantity.symbol.code, &stats)?;

    // Retired tokens come out of the issuer's own balance.
    sub_balance(deps.storage, &stats.issuer, &quantity)?;

    Ok(Response::new()
        .add_attribute("action", "retire")
        .add_attribute("quantity", quantity.to_string()))
}

pub fn transfer(
    deps: DepsMut,
    info: MessageInfo,
    to: String,
    quantity: Asset,
    memo: String,
) -> Result<Response, ContractError> {
    let to = deps.api.addr_validate(&to)?;
    let stats = load_currency(deps.storage, &quantity.symbol.code)?;
    assert_memo(&memo)?;

    transfer_tokens(deps.storage, &stats, &info.sender, &to, &quantity)?;

    Ok(Response::new()
        .add_attribute("action", "transfer")
        .add_attribute("from", &info.sender)
        .add_attribute("to", &to)
        .add_attribute("quantity", quantity.to_string())
        .add_event(transfer_event(&info.sender, &to, &quantity, &memo)))
}

pub fn open(
    deps: DepsMut,
    owner: String,
    symbol: Symbol,
) -> Result<Response, ContractError> {
    let owner = deps.api.addr_validate(&owner)?;
    let stats = load_currency(deps.storage, &symbol.code)?;
    if stats.supply.symbol != symbol {
        return Err(ContractError::SymbolMismatch {});
    }

    // Idempotent: an existing row, zero or not, is left alone.
    let key = (&owner, symbol.code.as_str());
    if !BALANCES.has(deps.storage, key) {
        BALANCES.save(deps.storage, key, &Uint128::zero())?;
    }

    Ok(Response::new()
        .add_attribute("action", "open")
        .add_attribute("owner", owner)
        .add_attribute("symbol", symbol.to_string()))
}

pub fn close(
    deps: DepsMut,
    info: MessageInfo,
    symbol: Symbol,
) -> Result<Response, ContractError> {
    let key = (&info.sender, symbol.code.as_str());
    match BALANCES.may_load(deps.storage, key)? {
        None => Err(ContractError::NoBalanceRow {}),
        Some(balance) if !balance.is_zero() => Err(ContractError::BalanceNotZero {}),
        Some(_) => {
            BALANCES.remove(deps.storage, key);
            Ok(Response::new()
                .add_attribute("action", "close")
                .add_attribute("owner", &info.sender)
                .add_attribute("symbol", symbol.to_string()))
        }
    }
}

pub fn stake(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Asset,
) -> Result<Response, ContractError> {
    // Policy pins every stake to the weekly period.
    let period = StakePeriod::Weekly;

    let stats = load_currency(deps.storage, &amount.symbol.code)?;
    assert_quantity(&amount, &stats)?;

    sub_balance(deps.storage, &info.sender, &amount)?;

    let now = env.block.time.seconds();
    let record = match STAKES.may_load(deps.storage, &info.sender)? {
        None => StakeRecord {
            addr: info.sender.clone(),
            period,
            staked: amount.clone(),
            escrow: Asset::zero(amount.symbol.clone()),
            stake_date: now + period.wait_seconds(),
            stake_due: now + WEEK_WAIT,
        },
        // Staking again accumulates and restarts the maturity clock.
        Some(prev) => {
            if prev.staked.symbol != amount.symbol {
                return Err(ContractError::SymbolMismatch {});
            }
            StakeRecord {
                addr: info.sender.clone(),
                period,
                staked: Asset::new(
                    prev.staked
                        .amount
                        .checked_add(amount.amount)
                        .map_err(StdError::overflow)?,
                    prev.staked.symbol,
                ),
                escrow: Asset::zero(amount.symbol.clone()),
                stake_date: now + period.wait_seconds(),
                stake_due: now + WEEK_WAIT,
            }
        }
    };
    STAKES.save(deps.storage, &info.sender, &record)?;

    let mut config = STAKING_CONFIG.load(deps.storage)?;
    config.active_accounts += 1;
    config.total_staked = config
        .total_staked
        .checked_add(amount.amount)
        .map_err(StdError::overflow)?;
    match period {
        StakePeriod::Weekly => {
            config.staked_weekly = config
                .staked_weekly
                .checked_add(amount.amount)
                .map_err(StdError::overflow)?;
        }
        StakePeriod::Monthly => {
            config.staked_monthly = config
                .staked_monthly
                .checked_add(amount.amount)
                .map_err(StdError::overflow)?;
        }
        StakePeriod::Quarterly => {
            config.staked_quarterly = config
                .staked_quarterly
                .checked_add(amount.amount)
                .map_err(StdError::overflow)?;
        }
    }
    STAKING_CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "stake")
        .add_attribute("from", &info.sender)
        .add_attribute("amount", amount.to_string())
        .add_attribute("stake_due", record.stake_due.to_string()))
}

pub fn unstake(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Asset,
) -> Result<Response, ContractError> {
    let mut record = STAKES
        .may_load(deps.storage, &info.sender)?
        .ok_or(ContractError::NoStake {})?;
    if amount.symbol != record.staked.symbol {
        return Err(ContractError::SymbolMismatch {});
    }
    if amount.amount > record.staked.amount {
        return Err(ContractError::UnstakeTooLarge {});
    }
    let full_withdrawal = amount.amount == record.staked.amount;

    let mut config = STAKING_CONFIG.load(deps.storage)?;
    if full_withdrawal {
        config.active_accounts = config.active_accounts.saturating_sub(1);
    }
    config.total_staked = config
        .total_staked
        .checked_sub(amount.amount)
        .map_err(StdError::overflow)?;
    match record.period {
        StakePeriod::Weekly => {
            config.staked_weekly = config
                .staked_weekly
                .checked_sub(amount.amount)
                .map_err(StdError::overflow)?;
        }
        StakePeriod::Monthly => {
            config.staked_monthly = config
                .staked_monthly
                .checked_sub(amount.amount)
                .map_err(StdError::overflow)?;
            config.total_escrowed_monthly = config
                .total_escrowed_monthly
                .checked_sub(record.escrow.amount)
                .map_err(StdError::overflow)?;
        }
        StakePeriod::Quarterly => {
            config.staked_quarterly = config
                .staked_quarterly
                .checked_sub(amount.amount)
                .map_err(StdError::overflow)?;
            config.total_escrowed_quarterly = config
                .total_escrowed_quarterly
                .checked_sub(record.escrow.amount)
                .map_err(StdError::overflow)?;
        }
    }
    STAKING_CONFIG.save(deps.storage, &config)?;

    // Withdrawn funds go through the lock queue, never straight back to
    // the ledger.
    let now = env.block.time.seconds();
    let locked = match LOCKED_BALANCES.may_load(deps.storage, &info.sender)? {
        None => LockedBalance {
            addr: info.sender.clone(),
            locked: amount.clone(),
            refund_due: now + REFUND_WAIT,
        },
        // Each unstake pushes the whole lock's redemption date out again.
        Some(prev) => {
            if prev.locked.symbol != amount.symbol {
                return Err(ContractError::SymbolMismatch {});
            }
            LockedBalance {
                addr: info.sender.clone(),
                locked: Asset::new(
                    prev.locked
                        .amount
                        .checked_add(amount.amount)
                        .map_err(StdError::overflow)?,
                    prev.locked.symbol,
                ),
                refund_due: now + REFUND_WAIT,
            }
        }
    };
    LOCKED_BALANCES.save(deps.storage, &info.sender, &locked)?;

    if full_withdrawal {
        STAKES.remove(deps.storage, &info.sender);
    } else {
        record.staked.amount = record
            .staked
            .amount
            .checked_sub(amount.amount)
            .map_err(StdError::overflow)?;
        STAKES.save(deps.storage, &info.sender, &record)?;
    }

    Ok(Response::new()
        .add_attribute("action", "unstake")
        .add_attribute("from", &info.sender)
        .add_attribute("amount", amount.to_string())
        .add_attribute("refund_due", locked.refund_due.to_string()))
}

pub fn refund(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let locked = LOCKED_BALANCES
        .may_load(deps.storage, &info.sender)?
        .ok_or(ContractError::NothingToRefund {})?;
    if env.block.time.seconds() < locked.refund_due {
        return Err(ContractError::RefundNotDue {});
    }

    LOCKED_BALANCES.remove(deps.storage, &info.sender);
    add_balance(deps.storage, &info.sender, &locked.locked)?;

    Ok(Response::new()
        .add_attribute("action", "refund")
        .add_attribute("from", &info.sender)
        .add_attribute("amount", locked.locked.to_string()))
}

pub fn send_invoice(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    to: String,
    total: Asset,
    payment_due: u64,
    description: String,
) -> Result<Response, ContractError> {
    let to = deps.api.addr_validate(&to)?;
    let stats = load_currency(deps.storage, &total.symbol.code)?;
    assert_quantity(&total, &stats)?;

    let now = env.block.time.seconds();
    // Due dates after the current block time are rejected.
    if payment_due > now {
        return Err(ContractError::InvalidPaymentDue {});
    }

    let id = ids::invoice_id(&env, &info.sender, &to, &total, &description);
    if INVOICES.has(deps.storage, (&info.sender, id))
        || CUSTOMER_INVOICES.has(deps.storage, (&to, id))
    {
        return Err(ContractError::InvoiceIdCollision { id });
    }

    let invoice = Invoice {
        id,
        status: InvoiceStatus::Open,
        from: info.sender.clone(),
        to: to.clone(),
        total: total.clone(),
        paid_total: Asset::zero(total.symbol.clone()),
        payment_due,
        payment_date: None,
        payment_id: None,
        description,
    };
    INVOICES.save(deps.storage, (&info.sender, id), &invoice)?;
    CUSTOMER_INVOICES.save(
        deps.storage,
        (&to, id),
        &CustomerInvoice {
            id,
            created: now,
            sender: info.sender.clone(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "send_invoice")
        .add_attribute("from", &info.sender)
        .add_attribute("to", &to)
        .add_attribute("invoice_id", id.to_string())
        .add_event(notify_event(
            &to,
            "sendinvoice",
            "New Invoice has been sent",
            &invoice,
        )))
}

pub fn pay_invoice(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    invoice_id: u64,
    total: Asset,
) -> Result<Response, ContractError> {
    let stats = load_currency(deps.storage, &total.symbol.code)?;
    assert_quantity(&total, &stats)?;

    // The payer's mirror says which sender partition holds the record.
    let mirror = CUSTOMER_INVOICES
        .may_load(deps.storage, (&info.sender, invoice_id))?
        .ok_or(ContractError::UnknownInvoice {})?;
    let mut invoice = INVOICES
        .may_load(deps.storage, (&mirror.sender, invoice_id))?
        .ok_or(ContractError::InvoiceNotFound {})?;

    if invoice.total != total {
        return Err(ContractError::PaymentMismatch {});
    }
    if invoice.status != InvoiceStatus::Open {
        return Err(ContractError::InvoiceNotOpen {});
    }

    // Settle through the regular transfer path.
    transfer_tokens(deps.storage, &stats, &info.sender, &invoice.from, &total)?;

    let payment_id = ids::payment_id(&env, &info.sender, invoice_id);
    invoice.status = InvoiceStatus::Paid;
    invoice.payment_date = Some(env.block.time.seconds());
    invoice.paid_total = total.clone();
    invoice.payment_id = Some(payment_id.to_string());
    INVOICES.save(deps.storage, (&mirror.sender, invoice_id), &invoice)?;

    CUSTOMER_INVOICES.remove(deps.storage, (&info.sender, invoice_id));

    Ok(Response::new()
        .add_attribute("action", "pay_invoice")
        .add_attribute("payer", &info.sender)
        .add_attribute("invoice_id", invoice_id.to_string())
        .add_attribute("payment_id", payment_id.to_string())
        .add_event(transfer_event(&info.sender, &invoice.from, &total, "Paid"))
        .add_event(notify_event(
            &invoice.from,
            "payinvoice",
            "Invoice has been paid",
            &invoice,
        )))
}

pub fn reject_invoice(
    deps: DepsMut,
    info: MessageInfo,
    invoice_id: u64,
    reason: String,
) -> Result<Response, ContractError> {
    let mirror = CUSTOMER_INVOICES
        .may_load(deps.storage, (&info.sender, invoice_id))?
        .ok_or(ContractError::UnknownInvoice {})?;
    let mut invoice = INVOICES
        .may_load(deps.storage, (&mirror.sender, invoice_id))?
        .ok_or(ContractError::InvoiceNotFound {})?;

    if invoice.status != InvoiceStatus::Open {
        return Err(ContractError::InvoiceNotOpen {});
    }

    invoice.status = InvoiceStatus::Rejected;
    invoice.description = format!("{}|reject:{}", invoice.description, reason);
    INVOICES.save(deps.storage, (&mirror.sender, invoice_id), &invoice)?;

    CUSTOMER_INVOICES.remove(deps.storage, (&info.sender, invoice_id));

    Ok(Response::new()
        .add_attribute("action", "reject_invoice")
        .add_attribute("payer", &info.sender)
        .add_attribute("invoice_id", invoice_id.to_string())
        .add_event(notify_event(
            &invoice.from,
            "rejectinvoice",
            "Invoice has been rejected",
            &invoice,
        )))
}

pub fn update_ownership(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    action: cw_ownable::Action,
) -> Result<Response, ContractError> {
    let ownership = cw_ownable::update_ownership(deps, &env.block, &info.sender, action)?;
    Ok(Response::default().add_attributes(ownership.into_attributes()))
}
