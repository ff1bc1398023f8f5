use shared::constants::CHAIN_ID_WIDTH;
use soroban_sdk::{Bytes, BytesN, Env};

/// Derive the storage key of a protocol from its chain and token address.
///
/// The preimage is the chain id as a 32-byte big-endian integer followed by
/// the 20 address bytes. Both fields are fixed-width, so no two distinct
/// pairs share a preimage.
pub fn derive_protocol_id(env: &Env, chain_id: u64, token_address: &BytesN<20>) -> BytesN<32> {
    let mut chain_field = [0u8; CHAIN_ID_WIDTH];
    chain_field[CHAIN_ID_WIDTH - 8..].copy_from_slice(&chain_id.to_be_bytes());

    let mut preimage = Bytes::from_array(env, &chain_field);
    preimage.extend_from_array(&token_address.to_array());

    env.crypto().keccak256(&preimage).to_bytes()
}
