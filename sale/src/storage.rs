use common::sale::types::{SaleDataKey as DataKey, SaleError as Error, SaleState, SaleTerms};
use soroban_sdk::{Env, IntoVal, TryFromVal, Val};

const WEEK_OF_LEDGERS: u32 = 60 * 60 * 24 / 5 * 7;

pub fn extend_instance(env: &Env) {
    let max_ttl = env.storage().max_ttl();
    env.storage()
        .instance()
        .extend_ttl(max_ttl - WEEK_OF_LEDGERS, max_ttl);
}

// INSTANCE STORAGE
pub fn store_data<K, V>(env: &Env, key: &K, val: &V)
where
    K: IntoVal<Env, Val>,
    V: IntoVal<Env, Val>,
{
    env.storage().instance().set(key, val);
    extend_instance(env);
}

pub fn get_data<K, V>(env: &Env, key: &K) -> Option<V>
where
    K: IntoVal<Env, Val>,
    V: TryFromVal<Env, Val>,
{
    env.storage().instance().get(key)
}

pub fn load_terms(env: &Env) -> Result<SaleTerms, Error> {
    get_data(env, &DataKey::Terms).ok_or(Error::NotInitialized)
}

pub fn load_state(env: &Env) -> Result<SaleState, Error> {
    get_data(env, &DataKey::State).ok_or(Error::NotInitialized)
}

pub fn store_state(env: &Env, state: &SaleState) {
    store_data(env, &DataKey::State, state);
}
