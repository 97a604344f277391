#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::queries;
use crate::state::{StakingConfig, STAKING_CONFIG};

pub(crate) const CONTRACT_NAME: &str = "crates.io:cw-utility-token";
pub(crate) const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let owner = msg.owner.unwrap_or_else(|| info.sender.to_string());
    cw_ownable::initialize_owner(deps.storage, deps.api, Some(owner.as_str()))?;

    // Start the aggregate staking totals from explicit zeros rather than
    // `unwrap_or_default` at the read sites, so a missing row fails loudly
    // instead of silently resetting the bookkeeping.
    STAKING_CONFIG.save(deps.storage, &StakingConfig::new())?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Ledger
        ExecuteMsg::Create { issuer, max_supply } => execute::create(deps, info, issuer, max_supply),
        ExecuteMsg::Issue { to, quantity, memo } => execute::issue(deps, info, to, quantity, memo),
        ExecuteMsg::Retire { quantity, memo } => execute::retire(deps, info, quantity, memo),
        ExecuteMsg::Transfer { to, quantity, memo } => {
            execute::transfer(deps, info, to, quantity, memo)
        }
        ExecuteMsg::Open { owner, symbol } => execute::open(deps, owner, symbol),
        ExecuteMsg::Close { symbol } => execute::close(deps, info, symbol),

        // Staking and the refund queue
        ExecuteMsg::Stake { amount } => execute::stake(deps, env, info, amount),
        ExecuteMsg::Unstake { amount } => execute::unstake(deps, env, info, amount),
        ExecuteMsg::Refund {} => execute::refund(deps, env, info),

        // Invoices
        ExecuteMsg::SendInvoice {
            to,
            total,
            payment_due,
            description,
        } => execute::send_invoice(deps, env, info, to, total, payment_due, description),
        ExecuteMsg::PayInvoice { invoice_id, total } => {
            execute::pay_invoice(deps, env, info, invoice_id, total)
        }
        ExecuteMsg::RejectInvoice { invoice_id, reason } => {
            execute::reject_invoice(deps, info, invoice_id, reason)
        }

        ExecuteMsg::UpdateOwnership(action) => execute::update_ownership(deps, env, info, action),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Supply { symbol_code } => {
            to_json_binary(&queries::query_supply(deps, symbol_code)?)
        }
        QueryMsg::Balance { owner, symbol_code } => {
            to_json_binary(&queries::query_balance(deps, owner, symbol_code)?)
        }
        QueryMsg::CurrencyInfo { symbol_code } => {
            to_json_binary(&queries::query_currency_info(deps, symbol_code)?)
        }
        QueryMsg::StakingConfig {} => to_json_binary(&queries::query_staking_config(deps)?),
        QueryMsg::Stake { address } => to_json_binary(&queries::query_stake(deps, address)?),
        QueryMsg::LockedBalance { address } => {
            to_json_binary(&queries::query_locked_balance(deps, address)?)
        }
        QueryMsg::Invoice { sender, invoice_id } => {
            to_json_binary(&queries::query_invoice(deps, sender, invoice_id)?)
        }
        QueryMsg::CustomerInvoice { owner, invoice_id } => {
            to_json_binary(&queries::query_customer_invoice(deps, owner, invoice_id)?)
        }
        QueryMsg::ListInvoices {
            sender,
            start_after,
            limit,
        } => to_json_binary(&queries::query_list_invoices(deps, sender, start_after, limit)?),
        QueryMsg::Ownership {} => to_json_binary(&cw_ownable::get_ownership(deps.storage)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, msg: MigrateMsg) -> Result<Response, ContractError> {
    match msg {
        MigrateMsg::FromCompatible {} => {
            set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
            Ok(Response::default())
        }
    }
}
