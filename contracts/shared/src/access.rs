use soroban_sdk::{contractclient, Address, Env};

/// Capability check the registry consults before accepting a rating.
///
/// Any contract exposing `has_rater` can act as the rater authority; the
/// registry never sees how membership is stored.
#[contractclient(name = "RaterAccessClient")]
pub trait RaterAccessInterface {
    /// Whether `account` may submit or update ratings
    fn has_rater(env: Env, account: Address) -> bool;
}
