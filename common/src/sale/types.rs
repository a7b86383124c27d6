use soroban_sdk::{contracterror, contracttype, Address, String};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SaleError {
    Unauthorized = 1,
    PaymentMismatch = 2,
    InspectionNotPassed = 3,
    AlreadySold = 4,
    NotYetSold = 5,
    InvalidPrice = 6,
    InsufficientBalance = 7,
    NotInitialized = 8,
}

/// What is being sold. Fixed at deployment.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Listing {
    pub description: String,
    pub year: u32,
    pub mileage: u64,
    pub price: i128, // In the payment token's smallest unit
}

/// Where the buyer's payment goes when a purchase is accepted.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Settlement {
    /// Paid straight to the seller; `withdraw_funds` only sweeps stray deposits.
    Direct = 1,
    /// Held by the contract until the seller calls `withdraw_funds`.
    Escrow = 2,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleTerms {
    pub seller: Address,
    pub payment_token: Address,
    pub listing: Listing,
    pub settlement: Settlement,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SaleState {
    pub buyer: Option<Address>, // Set once, by the accepted purchase
    pub inspection_passed: bool,
    pub sold: bool,
}

/// Read-only snapshot of an agreement, terms and status together.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleAgreement {
    pub terms: SaleTerms,
    pub state: SaleState,
}

#[derive(Clone)]
#[contracttype]
pub enum SaleDataKey {
    Terms,
    State,
}
