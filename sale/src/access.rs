use common::sale::types::{SaleError as Error, SaleState, SaleTerms};
use soroban_sdk::Address;

pub fn require_seller(terms: &SaleTerms, caller: &Address) -> Result<(), Error> {
    if terms.seller != *caller {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

// No operation is restricted to the buyer yet.
#[allow(unused)]
pub fn require_buyer(state: &SaleState, caller: &Address) -> Result<(), Error> {
    match &state.buyer {
        Some(buyer) if buyer == caller => Ok(()),
        _ => Err(Error::Unauthorized),
    }
}
