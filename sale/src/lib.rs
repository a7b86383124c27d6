#![no_std]

mod access;
mod events;
mod storage;

use access::require_seller;
use common::sale::{
    interface::SaleAgreementTrait,
    types::{
        Listing, SaleAgreement, SaleDataKey as DataKey, SaleError as Error, SaleState, SaleTerms,
        Settlement,
    },
};
use events::SaleEvent;
use soroban_sdk::{contract, contractimpl, log, token, Address, Env, String};
use storage::{load_state, load_terms, store_data, store_state};

#[contract]
pub struct SaleAgreementContract;

#[contractimpl]
impl SaleAgreementContract {
    // One instance per sale. Terms are written here and never again.
    pub fn __constructor(
        env: Env,
        seller: Address,
        payment_token: Address,
        description: String,
        year: u32,
        mileage: u64,
        price: i128,
        settlement: Settlement,
    ) -> Result<(), Error> {
        if price <= 0 {
            return Err(Error::InvalidPrice);
        }

        let terms: SaleTerms = SaleTerms {
            seller: seller.clone(),
            payment_token,
            listing: Listing {
                description,
                year,
                mileage,
                price,
            },
            settlement,
        };

        store_data(&env, &DataKey::Terms, &terms);
        store_state(&env, &SaleState::default());

        SaleEvent::SaleCreated(seller, price).publish(&env);
        Ok(())
    }
}

#[contractimpl]
impl SaleAgreementTrait for SaleAgreementContract {
    fn version() -> u32 {
        1
    }

    fn update_inspection(env: Env, caller: Address, passed: bool) -> Result<(), Error> {
        caller.require_auth();
        let terms: SaleTerms = load_terms(&env)?;
        require_seller(&terms, &caller)?;

        // Still accepted once sold; the sold latch is unaffected.
        let mut state: SaleState = load_state(&env)?;
        state.inspection_passed = passed;
        store_state(&env, &state);

        SaleEvent::InspectionUpdated(passed).publish(&env);
        Ok(())
    }

    fn purchase(env: Env, caller: Address, offered_value: i128) -> Result<(), Error> {
        caller.require_auth();
        let terms: SaleTerms = load_terms(&env)?;
        let mut state: SaleState = load_state(&env)?;

        if offered_value != terms.listing.price {
            return Err(Error::PaymentMismatch);
        }
        if !state.inspection_passed {
            return Err(Error::InspectionNotPassed);
        }
        if state.sold {
            return Err(Error::AlreadySold);
        }

        let token_client: token::TokenClient<'_> = token::Client::new(&env, &terms.payment_token);
        if token_client.balance(&caller) < offered_value {
            return Err(Error::InsufficientBalance);
        }

        // A failing transfer traps and the host discards this whole invocation,
        // so the sold latch below is never committed without the payment.
        let recipient: Address = match terms.settlement {
            Settlement::Direct => terms.seller.clone(),
            Settlement::Escrow => env.current_contract_address(),
        };
        token_client.transfer(&caller, &recipient, &offered_value);

        state.buyer = Some(caller.clone());
        state.sold = true;
        store_state(&env, &state);

        log!(&env, "sale settled {} to {}", offered_value, recipient);
        SaleEvent::CarSold(terms.seller, caller, offered_value).publish(&env);
        Ok(())
    }

    fn withdraw_funds(env: Env, caller: Address) -> Result<i128, Error> {
        caller.require_auth();
        let terms: SaleTerms = load_terms(&env)?;
        require_seller(&terms, &caller)?;

        let state: SaleState = load_state(&env)?;
        if !state.sold {
            return Err(Error::NotYetSold);
        }

        // Sweeps everything the contract holds, escrowed payment and stray deposits alike.
        let token_client: token::TokenClient<'_> = token::Client::new(&env, &terms.payment_token);
        let held: i128 = token_client.balance(&env.current_contract_address());
        if held > 0 {
            token_client.transfer(&env.current_contract_address(), &terms.seller, &held);
        } else {
            log!(&env, "nothing to withdraw");
        }

        SaleEvent::FundsWithdrawn(terms.seller, held).publish(&env);
        Ok(held)
    }

    fn get_agreement(env: Env) -> Result<SaleAgreement, Error> {
        Ok(SaleAgreement {
            terms: load_terms(&env)?,
            state: load_state(&env)?,
        })
    }

    fn seller(env: Env) -> Result<Address, Error> {
        Ok(load_terms(&env)?.seller)
    }

    fn buyer(env: Env) -> Result<Option<Address>, Error> {
        Ok(load_state(&env)?.buyer)
    }

    fn listing(env: Env) -> Result<Listing, Error> {
        Ok(load_terms(&env)?.listing)
    }

    fn description(env: Env) -> Result<String, Error> {
        Ok(load_terms(&env)?.listing.description)
    }

    fn year(env: Env) -> Result<u32, Error> {
        Ok(load_terms(&env)?.listing.year)
    }

    fn mileage(env: Env) -> Result<u64, Error> {
        Ok(load_terms(&env)?.listing.mileage)
    }

    fn price(env: Env) -> Result<i128, Error> {
        Ok(load_terms(&env)?.listing.price)
    }

    fn inspection_passed(env: Env) -> Result<bool, Error> {
        Ok(load_state(&env)?.inspection_passed)
    }

    fn is_sold(env: Env) -> Result<bool, Error> {
        Ok(load_state(&env)?.sold)
    }

    fn payment_token(env: Env) -> Result<Address, Error> {
        Ok(load_terms(&env)?.payment_token)
    }

    fn settlement(env: Env) -> Result<Settlement, Error> {
        Ok(load_terms(&env)?.settlement)
    }

    fn escrowed_balance(env: Env) -> Result<i128, Error> {
        let terms: SaleTerms = load_terms(&env)?;
        let token_client: token::TokenClient<'_> = token::Client::new(&env, &terms.payment_token);
        Ok(token_client.balance(&env.current_contract_address()))
    }
}
