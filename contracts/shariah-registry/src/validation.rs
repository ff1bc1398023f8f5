use shared::constants::SCORE_MAX;
use shared::errors::Error;
use shared::RaterAccessClient;
use soroban_sdk::{Address, Env};

use crate::types::RiskScore;

/// Ask the rater capability contract whether `rater` may submit ratings
pub fn validate_rater(env: &Env, access: &Address, rater: &Address) -> Result<(), Error> {
    let client = RaterAccessClient::new(env, access);
    if client.has_rater(rater) {
        Ok(())
    } else {
        Err(Error::Unauthorized)
    }
}

/// Every sub-score must lie in 0..=100
pub fn validate_scores(scores: &RiskScore) -> Result<(), Error> {
    let in_range = [
        scores.transparency,
        scores.track_record,
        scores.asset_backing,
        scores.smart_contract,
        scores.liquidity,
    ]
    .iter()
    .all(|score| *score <= SCORE_MAX);

    if in_range {
        Ok(())
    } else {
        Err(Error::InvScore)
    }
}
