#![no_std]

use shared::{
    constants::DEFAULT_DUMP_LIMIT,
    errors::Error,
    events::{
        ACCESS_UPDATED, ADMIN_TRANSFERRED, DUMP_LIMIT_UPDATED, PROTOCOL_RATED,
        REGISTRY_INITIALIZED,
    },
};
use soroban_sdk::{contract, contractimpl, contractmeta, log, Address, BytesN, Env, String, Vec};

mod identity;
mod scoring;
mod storage;
mod types;
mod validation;


pub use types::{AssetType, ComplianceStatus, ProtocolReport, RiskScore, ShariahData};

use storage::*;

contractmeta!(
    key = "name",
    val = "Shariah RWA Rating Registry"
);

#[contract]
pub struct ShariahRegistry;

#[contractimpl]
impl ShariahRegistry {
    /// Initialize the registry
    ///
    /// # Arguments
    /// * `admin` - Address allowed to reconfigure the registry
    /// * `rater_access` - Contract answering `has_rater` for rating submissions
    pub fn initialize(env: Env, admin: Address, rater_access: Address) -> Result<(), Error> {
        if has_admin(&env) {
            return Err(Error::AlreadyInit);
        }
        admin.require_auth();

        set_admin(&env, &admin);
        set_rater_access(&env, &rater_access);
        set_dump_limit(&env, DEFAULT_DUMP_LIMIT);

        env.events()
            .publish((REGISTRY_INITIALIZED,), (admin, rater_access));

        Ok(())
    }

    // ==================== Rating Ingestion ====================

    /// Submit or replace the rating of a protocol
    ///
    /// The first submission for a (chain, token) pair lists the protocol and
    /// appends it to the catalog; later submissions overwrite every field of
    /// the stored report.
    ///
    /// # Arguments
    /// * `rater` - Submitter, must hold rater capability
    /// * `chain_id` - Chain the token lives on
    /// * `token_address` - 20-byte token contract address
    /// * `scores` - Risk sub-scores, each in 0..=100
    /// * `shariah` - Compliance classification
    ///
    /// # Returns
    /// * The protocol id the report is stored under
    ///
    /// # Errors
    /// * `NotInit` - Registry has not been initialized
    /// * `Unauthorized` - `rater` does not hold rater capability
    /// * `InvScore` - A sub-score exceeds 100
    #[allow(clippy::too_many_arguments)]
    pub fn submit_rating(
        env: Env,
        rater: Address,
        name: String,
        symbol: String,
        chain_id: u64,
        token_address: BytesN<20>,
        website: String,
        scores: RiskScore,
        shariah: ShariahData,
    ) -> Result<BytesN<32>, Error> {
        let access = get_rater_access(&env)?;
        rater.require_auth();

        if let Err(err) = validation::validate_rater(&env, &access, &rater) {
            log!(&env, "rating rejected: not a rater", rater);
            return Err(err);
        }
        if let Err(err) = validation::validate_scores(&scores) {
            log!(&env, "rating rejected: sub-score out of range", chain_id);
            return Err(err);
        }

        let overall_score = scoring::overall_score(&scores);
        let id = identity::derive_protocol_id(&env, chain_id, &token_address);

        let newly_listed = !report_exists(&env, &id);
        if newly_listed {
            append_to_catalog(&env, &id)?;
        }

        let report = ProtocolReport {
            name,
            symbol: symbol.clone(),
            chain_id,
            token_address,
            website,
            scores,
            shariah,
            overall_score,
            last_update: env.ledger().timestamp(),
            rater: Some(rater),
            is_listed: true,
        };
        set_report(&env, &id, &report);

        log!(&env, "rating stored", id, overall_score, newly_listed);

        env.events().publish(
            (PROTOCOL_RATED, id.clone()),
            (symbol, chain_id, overall_score),
        );

        Ok(id)
    }

    /// Weighted overall score for a set of sub-scores
    ///
    /// # Errors
    /// * `InvScore` - A sub-score exceeds 100
    pub fn compute_overall_score(_env: Env, scores: RiskScore) -> Result<u32, Error> {
        validation::validate_scores(&scores)?;
        Ok(scoring::overall_score(&scores))
    }

    /// Protocol id for a (chain, token) pair
    pub fn derive_protocol_id(env: Env, chain_id: u64, token_address: BytesN<20>) -> BytesN<32> {
        identity::derive_protocol_id(&env, chain_id, &token_address)
    }

    // ==================== Read Access ====================

    /// Get the report stored under a protocol id
    ///
    /// Never-listed ids yield the zero-value report; check `is_listed` to tell
    /// absence from a genuine zero-scored entry.
    pub fn get_report(env: Env, id: BytesN<32>) -> ProtocolReport {
        get_report(&env, &id).unwrap_or_else(|| ProtocolReport::unlisted(&env))
    }

    /// Get the report for a (chain, token) pair
    pub fn get_report_by_token(
        env: Env,
        chain_id: u64,
        token_address: BytesN<20>,
    ) -> ProtocolReport {
        let id = identity::derive_protocol_id(&env, chain_id, &token_address);
        Self::get_report(env, id)
    }

    pub fn is_listed(env: Env, id: BytesN<32>) -> bool {
        report_exists(&env, &id)
    }

    /// Number of listed protocols
    pub fn count(env: Env) -> u32 {
        catalog_len(&env)
    }

    /// Protocol ids in listing order, starting at `offset`, at most `limit`
    ///
    /// An `offset` past the end yields an empty list.
    pub fn list_ids(env: Env, offset: u32, limit: u32) -> Vec<BytesN<32>> {
        catalog_page(&env, offset, limit)
    }

    /// Reports matching `list_ids(offset, limit)`, in the same order
    pub fn list_reports(env: Env, offset: u32, limit: u32) -> Vec<ProtocolReport> {
        let ids = catalog_page(&env, offset, limit);
        reports_for(&env, &ids)
    }

    /// Every listed protocol id
    ///
    /// # Errors
    /// * `DumpTooBig` - Catalog is larger than the dump limit; page with
    ///   `list_ids` instead
    pub fn all_ids(env: Env) -> Result<Vec<BytesN<32>>, Error> {
        let total = Self::bounded_total(&env)?;
        Ok(catalog_page(&env, 0, total))
    }

    /// Every listed report, in the order of `all_ids`
    ///
    /// # Errors
    /// * `DumpTooBig` - Catalog is larger than the dump limit
    pub fn all_reports(env: Env) -> Result<Vec<ProtocolReport>, Error> {
        let total = Self::bounded_total(&env)?;
        let ids = catalog_page(&env, 0, total);
        Ok(reports_for(&env, &ids))
    }

    // ==================== Administration ====================

    /// Unbounded dump of every protocol id (admin only)
    ///
    /// Diagnostic escape hatch: cost grows linearly with the catalog and the
    /// call will exceed host budgets once the catalog is large.
    pub fn export_ids(env: Env) -> Result<Vec<BytesN<32>>, Error> {
        let admin = get_admin(&env)?;
        admin.require_auth();

        Ok(catalog_page(&env, 0, catalog_len(&env)))
    }

    /// Unbounded dump of every report (admin only)
    pub fn export_reports(env: Env) -> Result<Vec<ProtocolReport>, Error> {
        let admin = get_admin(&env)?;
        admin.require_auth();

        let ids = catalog_page(&env, 0, catalog_len(&env));
        Ok(reports_for(&env, &ids))
    }

    /// Point the registry at a different rater capability contract
    pub fn set_rater_access(env: Env, rater_access: Address) -> Result<(), Error> {
        let admin = get_admin(&env)?;
        admin.require_auth();

        set_rater_access(&env, &rater_access);
        log!(&env, "rater access updated", rater_access);

        env.events().publish((ACCESS_UPDATED,), rater_access);

        Ok(())
    }

    /// Change the catalog size above which `all_ids` / `all_reports` refuse
    ///
    /// # Errors
    /// * `InvInput` - `limit` is zero
    pub fn set_dump_limit(env: Env, limit: u32) -> Result<(), Error> {
        let admin = get_admin(&env)?;
        admin.require_auth();

        if limit == 0 {
            return Err(Error::InvInput);
        }

        set_dump_limit(&env, limit);
        log!(&env, "dump limit updated", limit);

        env.events().publish((DUMP_LIMIT_UPDATED,), limit);

        Ok(())
    }

    pub fn transfer_admin(env: Env, new_admin: Address) -> Result<(), Error> {
        let admin = get_admin(&env)?;
        admin.require_auth();

        set_admin(&env, &new_admin);

        env.events()
            .publish((ADMIN_TRANSFERRED,), (admin, new_admin));

        Ok(())
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        get_admin(&env)
    }

    pub fn get_rater_access(env: Env) -> Result<Address, Error> {
        get_rater_access(&env)
    }

    pub fn get_dump_limit(env: Env) -> u32 {
        get_dump_limit(&env)
    }

    fn bounded_total(env: &Env) -> Result<u32, Error> {
        let total = catalog_len(env);
        if total > get_dump_limit(env) {
            log!(env, "full dump refused", total);
            return Err(Error::DumpTooBig);
        }
        Ok(total)
    }
}
