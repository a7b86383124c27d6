use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum SaleEvent {
    SaleCreated(Address, i128),
    InspectionUpdated(bool),
    CarSold(Address, Address, i128),
    FundsWithdrawn(Address, i128),
}

impl SaleEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SaleEvent::SaleCreated(..) => stringify!(SaleCreated),
            SaleEvent::InspectionUpdated(..) => stringify!(InspectionUpdated),
            SaleEvent::CarSold(..) => stringify!(CarSold),
            SaleEvent::FundsWithdrawn(..) => stringify!(FundsWithdrawn),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(&env);

        match self {
            SaleEvent::SaleCreated(seller, price) => {
                v.push_back(seller.into_val(env));
                v.push_back(price.into_val(env));
            }
            SaleEvent::InspectionUpdated(passed) => {
                v.push_back(passed.into_val(env));
            }
            SaleEvent::CarSold(seller, buyer, price) => {
                v.push_back(seller.into_val(env));
                v.push_back(buyer.into_val(env));
                v.push_back(price.into_val(env));
            }
            SaleEvent::FundsWithdrawn(seller, amount) => {
                v.push_back(seller.into_val(env));
                v.push_back(amount.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
