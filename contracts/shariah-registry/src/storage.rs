use shared::constants::DEFAULT_DUMP_LIMIT;
use shared::errors::Error;
use soroban_sdk::{Address, BytesN, Env, Vec};

use crate::types::{DataKey, ProtocolReport};

/// Store registry admin
pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

/// Retrieve registry admin
pub fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get::<DataKey, Address>(&DataKey::Admin)
        .ok_or(Error::NotInit)
}

/// Check if admin is set
pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

/// Store the rater capability contract address
pub fn set_rater_access(env: &Env, access: &Address) {
    env.storage().instance().set(&DataKey::RaterAccess, access);
}

/// Retrieve the rater capability contract address
pub fn get_rater_access(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get::<DataKey, Address>(&DataKey::RaterAccess)
        .ok_or(Error::NotInit)
}

pub fn set_dump_limit(env: &Env, limit: u32) {
    env.storage().instance().set(&DataKey::DumpLimit, &limit);
}

/// Retrieve the bounded-dump limit, defaults to `DEFAULT_DUMP_LIMIT`
pub fn get_dump_limit(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get::<DataKey, u32>(&DataKey::DumpLimit)
        .unwrap_or(DEFAULT_DUMP_LIMIT)
}

/// Store a protocol report
pub fn set_report(env: &Env, id: &BytesN<32>, report: &ProtocolReport) {
    env.storage()
        .persistent()
        .set(&DataKey::Report(id.clone()), report);
}

/// Retrieve a protocol report
pub fn get_report(env: &Env, id: &BytesN<32>) -> Option<ProtocolReport> {
    env.storage()
        .persistent()
        .get::<DataKey, ProtocolReport>(&DataKey::Report(id.clone()))
}

/// Check if a report has ever been stored for the id
pub fn report_exists(env: &Env, id: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Report(id.clone()))
}

// ==================== Catalog ====================

/// Number of listed protocols
pub fn catalog_len(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get::<DataKey, u32>(&DataKey::CatalogLen)
        .unwrap_or(0)
}

/// Append an id to the catalog and return its position
pub fn append_to_catalog(env: &Env, id: &BytesN<32>) -> Result<u32, Error> {
    let position = catalog_len(env);
    let next_len = position.checked_add(1).ok_or(Error::InvInput)?;

    env.storage()
        .persistent()
        .set(&DataKey::CatalogEntry(position), id);
    env.storage()
        .persistent()
        .set(&DataKey::CatalogLen, &next_len);

    Ok(position)
}

/// Retrieve the id stored at a catalog position
pub fn get_catalog_entry(env: &Env, position: u32) -> Option<BytesN<32>> {
    env.storage()
        .persistent()
        .get::<DataKey, BytesN<32>>(&DataKey::CatalogEntry(position))
}

/// Ids in `[offset, offset + limit)`, clipped to the catalog end
pub fn catalog_page(env: &Env, offset: u32, limit: u32) -> Vec<BytesN<32>> {
    let total = catalog_len(env);
    let mut page = Vec::new(env);
    if offset >= total {
        return page;
    }

    let end = offset.saturating_add(limit).min(total);
    for position in offset..end {
        if let Some(id) = get_catalog_entry(env, position) {
            page.push_back(id);
        }
    }

    page
}

/// Resolve each id to its stored report, preserving order
pub fn reports_for(env: &Env, ids: &Vec<BytesN<32>>) -> Vec<ProtocolReport> {
    let mut reports = Vec::new(env);
    for id in ids.iter() {
        let report = get_report(env, &id).unwrap_or_else(|| ProtocolReport::unlisted(env));
        reports.push_back(report);
    }
    reports
}
