use soroban_sdk::{contractclient, Address, Env, String};
use super::types::{Listing, SaleAgreement, SaleError as Error, Settlement};

#[contractclient(name = "SaleAgreementClient")]
pub trait SaleAgreementTrait {
    fn version() -> u32;

    fn update_inspection(env: Env, caller: Address, passed: bool) -> Result<(), Error>;
    fn purchase(env: Env, caller: Address, offered_value: i128) -> Result<(), Error>;
    fn withdraw_funds(env: Env, caller: Address) -> Result<i128, Error>;

    fn get_agreement(env: Env) -> Result<SaleAgreement, Error>;
    fn seller(env: Env) -> Result<Address, Error>;
    fn buyer(env: Env) -> Result<Option<Address>, Error>;
    fn listing(env: Env) -> Result<Listing, Error>;
    fn description(env: Env) -> Result<String, Error>;
    fn year(env: Env) -> Result<u32, Error>;
    fn mileage(env: Env) -> Result<u64, Error>;
    fn price(env: Env) -> Result<i128, Error>;
    fn inspection_passed(env: Env) -> Result<bool, Error>;
    fn is_sold(env: Env) -> Result<bool, Error>;
    fn payment_token(env: Env) -> Result<Address, Error>;
    fn settlement(env: Env) -> Result<Settlement, Error>;
    fn escrowed_balance(env: Env) -> Result<i128, Error>;
}
