#![no_std]

use shared::errors::Error;
use shared::events::{ADMIN_TRANSFERRED, ROLE_GRANTED, ROLE_REVOKED};
use soroban_sdk::{contract, contractimpl, contracttype, log, Address, Env};

/// Storage keys for the rater access contract
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Admin address, allowed to grant and revoke raters
    Admin,
    /// Rater membership flag keyed by address
    Rater(Address),
}

#[contract]
pub struct RaterAccessContract;

#[contractimpl]
impl RaterAccessContract {
    /// Initialize the contract with an admin address
    ///
    /// The admin is also granted rater capability so a fresh deployment can
    /// submit ratings straight away.
    ///
    /// # Arguments
    /// * `env` - The contract environment
    /// * `admin` - The address that will have admin privileges
    ///
    /// # Returns
    /// * `Result<(), Error>` - Ok if successful, Error if already initialized
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::AlreadyInit);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        Self::set_rater(&env, &admin, true);

        env.events()
            .publish((ROLE_GRANTED, admin.clone()), admin);

        Ok(())
    }

    /// Grant rater capability to an account (admin only)
    ///
    /// Granting to an account that is already a rater is a no-op.
    pub fn grant_rater(env: Env, account: Address) -> Result<(), Error> {
        let admin = Self::get_admin(env.clone())?;
        admin.require_auth();

        if Self::has_rater(env.clone(), account.clone()) {
            return Ok(());
        }

        Self::set_rater(&env, &account, true);
        log!(&env, "rater granted", account);

        env.events().publish((ROLE_GRANTED, account), admin);

        Ok(())
    }

    /// Revoke rater capability from an account (admin only)
    ///
    /// Revoking an account that is not a rater is a no-op.
    pub fn revoke_rater(env: Env, account: Address) -> Result<(), Error> {
        let admin = Self::get_admin(env.clone())?;
        admin.require_auth();

        if !Self::has_rater(env.clone(), account.clone()) {
            return Ok(());
        }

        Self::set_rater(&env, &account, false);
        log!(&env, "rater revoked", account);

        env.events().publish((ROLE_REVOKED, account), admin);

        Ok(())
    }

    /// Give up rater capability; only the account itself may renounce
    pub fn renounce_rater(env: Env, account: Address) -> Result<(), Error> {
        if !env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::NotInit);
        }

        account.require_auth();

        if !Self::has_rater(env.clone(), account.clone()) {
            return Ok(());
        }

        Self::set_rater(&env, &account, false);

        env.events()
            .publish((ROLE_REVOKED, account.clone()), account);

        Ok(())
    }

    /// Check whether an account holds rater capability
    pub fn has_rater(env: Env, account: Address) -> bool {
        env.storage()
            .persistent()
            .get::<DataKey, bool>(&DataKey::Rater(account))
            .unwrap_or(false)
    }

    /// Get the admin address
    pub fn get_admin(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInit)
    }

    /// Hand the admin role to a new address (current admin only)
    ///
    /// Rater membership is untouched; the new admin grants itself rater
    /// capability separately if it needs to submit ratings.
    pub fn transfer_admin(env: Env, new_admin: Address) -> Result<(), Error> {
        let admin = Self::get_admin(env.clone())?;
        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &new_admin);

        env.events()
            .publish((ADMIN_TRANSFERRED,), (admin, new_admin));

        Ok(())
    }

    fn set_rater(env: &Env, account: &Address, enabled: bool) {
        let key = DataKey::Rater(account.clone());
        if enabled {
            env.storage().persistent().set(&key, &true);
        } else {
            env.storage().persistent().remove(&key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::{Address as _, MockAuth, MockAuthInvoke};
    use soroban_sdk::IntoVal;

    fn setup_env() -> (Env, Address, RaterAccessContractClient<'static>) {
        let env = Env::default();
        env.mock_all_auths();
        let admin = Address::generate(&env);
        let contract_id = env.register_contract(None, RaterAccessContract);
        let client = RaterAccessContractClient::new(&env, &contract_id);
        (env, admin, client)
    }

    #[test]
    fn test_initialize_grants_admin_rater() {
        let (_, admin, client) = setup_env();
        client.initialize(&admin);

        assert_eq!(client.get_admin(), admin);
        assert!(client.has_rater(&admin));
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #2)")]
    fn test_initialize_twice() {
        let (_, admin, client) = setup_env();
        client.initialize(&admin);
        client.initialize(&admin);
    }

    #[test]
    fn test_grant_and_revoke() {
        let (env, admin, client) = setup_env();
        client.initialize(&admin);

        let rater = Address::generate(&env);
        assert!(!client.has_rater(&rater));

        client.grant_rater(&rater);
        assert!(client.has_rater(&rater));

        // Granting twice keeps a single membership
        client.grant_rater(&rater);
        assert!(client.has_rater(&rater));

        client.revoke_rater(&rater);
        assert!(!client.has_rater(&rater));

        // Revoking an unknown account is harmless
        client.revoke_rater(&rater);
        assert!(!client.has_rater(&rater));
    }

    #[test]
    fn test_renounce() {
        let (env, admin, client) = setup_env();
        client.initialize(&admin);

        let rater = Address::generate(&env);
        client.grant_rater(&rater);
        client.renounce_rater(&rater);

        assert!(!client.has_rater(&rater));
        assert!(client.has_rater(&admin));
    }

    #[test]
    fn test_has_rater_before_initialize() {
        let (env, _, client) = setup_env();
        assert!(!client.has_rater(&Address::generate(&env)));
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #1)")]
    fn test_grant_not_initialized() {
        let (env, _, client) = setup_env();
        client.grant_rater(&Address::generate(&env));
    }

    #[test]
    fn test_transfer_admin() {
        let (env, admin, client) = setup_env();
        client.initialize(&admin);

        let new_admin = Address::generate(&env);
        client.transfer_admin(&new_admin);

        assert_eq!(client.get_admin(), new_admin);
        // Old admin keeps its rater membership until revoked
        assert!(client.has_rater(&admin));
        assert!(!client.has_rater(&new_admin));
    }

    #[test]
    #[should_panic]
    fn test_grant_requires_admin_auth() {
        let env = Env::default();
        let admin = Address::generate(&env);
        let contract_id = env.register_contract(None, RaterAccessContract);
        let client = RaterAccessContractClient::new(&env, &contract_id);

        client
            .mock_auths(&[MockAuth {
                address: &admin,
                invoke: &MockAuthInvoke {
                    contract: &contract_id,
                    fn_name: "initialize",
                    args: (admin.clone(),).into_val(&env),
                    sub_invokes: &[],
                },
            }])
            .initialize(&admin);

        // No authorization supplied for the grant
        client.grant_rater(&Address::generate(&env));
    }
}
