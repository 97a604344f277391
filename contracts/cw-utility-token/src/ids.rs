//! Pseudo-random identifier derivation for the invoice workflow.
//!
//! Invoice and payment ids are truncated digests of per-invocation data
//! (block height and time, transaction index, principals, payload). The
//! truncated hash is an identifier scheme, not a security primitive.

use cosmwasm_std::{Addr, Env};
use cw_symbol::Asset;
use sha2::{Digest, Sha256};

fn invocation_digest(env: &Env, parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(env.block.height.to_be_bytes());
    hasher.update(env.block.time.nanos().to_be_bytes());
    if let Some(tx) = &env.transaction {
        hasher.update(tx.index.to_be_bytes());
    }
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// A 32-bit invoice id: the first four digest bytes, big-endian.
pub fn invoice_id(env: &Env, from: &Addr, to: &Addr, total: &Asset, description: &str) -> u64 {
    let amount = total.amount.u128().to_be_bytes();
    let digest = invocation_digest(
        env,
        &[
            from.as_bytes(),
            to.as_bytes(),
            &amount,
            description.as_bytes(),
        ],
    );
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&digest[..4]);
    u32::from_be_bytes(bytes) as u64
}

/// A 64-bit payment id: the first eight digest bytes, big-endian, from a
/// fresh digest of the paying invocation.
pub fn payment_id(env: &Env, payer: &Addr, invoice_id: u64) -> u64 {
    let id = invoice_id.to_be_bytes();
    let digest = invocation_digest(env, &[payer.as_bytes(), &id]);
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}
