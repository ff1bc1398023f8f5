use soroban_sdk::{contracttype, Address, BytesN, Env, String};

/// Shariah compliance classification of a protocol
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[contracttype]
#[repr(u32)]
pub enum ComplianceStatus {
    NonCompliant = 0,
    Compliant = 1,
    /// Scholars have not reached a clear ruling
    Doubtful = 2,
}

/// Underlying asset structure of a protocol
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[contracttype]
#[repr(u32)]
pub enum AssetType {
    DebtBased = 0,
    Equity = 1,
    Commodity = 2,
    RealEstate = 3,
    Hybrid = 4,
}

/// Risk sub-scores, each expected in 0..=100
#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct RiskScore {
    pub transparency: u32,
    pub track_record: u32,
    pub asset_backing: u32,
    pub smart_contract: u32,
    pub liquidity: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct ShariahData {
    pub status: ComplianceStatus,
    pub asset_type: AssetType,
    /// Content identifier of the supporting fatwa / audit document
    pub document_cid: String,
    /// Whether the protocol offers purification of non-compliant income
    pub has_purification: bool,
    /// Free-text description of non-compliant income sources
    pub non_compliant_notes: String,
}

/// Rating record stored per protocol identity
#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct ProtocolReport {
    pub name: String,
    pub symbol: String,
    pub chain_id: u64,
    pub token_address: BytesN<20>,
    pub website: String,
    pub scores: RiskScore,
    pub shariah: ShariahData,
    /// Weighted aggregate of `scores`, 0..=100
    pub overall_score: u32,
    /// Ledger timestamp of the last submission
    pub last_update: u64,
    /// Last submitter; `None` only on the zero-value record
    pub rater: Option<Address>,
    pub is_listed: bool,
}

impl RiskScore {
    pub fn zero() -> Self {
        RiskScore {
            transparency: 0,
            track_record: 0,
            asset_backing: 0,
            smart_contract: 0,
            liquidity: 0,
        }
    }
}

impl ProtocolReport {
    /// Zero-value record returned for identities that were never listed
    pub fn unlisted(env: &Env) -> Self {
        let empty = String::from_str(env, "");
        ProtocolReport {
            name: empty.clone(),
            symbol: empty.clone(),
            chain_id: 0,
            token_address: BytesN::from_array(env, &[0u8; 20]),
            website: empty.clone(),
            scores: RiskScore::zero(),
            shariah: ShariahData {
                status: ComplianceStatus::NonCompliant,
                asset_type: AssetType::DebtBased,
                document_cid: empty.clone(),
                has_purification: false,
                non_compliant_notes: empty,
            },
            overall_score: 0,
            last_update: 0,
            rater: None,
            is_listed: false,
        }
    }
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    RaterAccess,                 // rater capability contract
    DumpLimit,                   // max catalog size for bounded dumps
    Report(BytesN<32>),          // protocol id -> ProtocolReport
    CatalogLen,                  // number of listed protocols
    CatalogEntry(u32),           // catalog position -> protocol id
}
