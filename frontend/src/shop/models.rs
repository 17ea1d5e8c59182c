use serde::{Deserialize, Serialize};

/// Offer of one agency for one device, as returned by the shop API.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgencyDetail {
    pub agency_name: String,
    pub agency_address: String,
    pub phone_image: String,
    pub phone_price: i64,
    pub phone_original_price: i64,
    #[serde(default)]
    pub phone_brand: Option<String>,
    #[serde(default)]
    pub phone_name: Option<String>,
    #[serde(default)]
    pub agency_phone_number: Option<String>,
}

/// Catalog entry for a carrier plan.
#[derive(Clone, Debug, PartialEq)]
pub struct PhonePlan {
    pub name: &'static str,
    pub price: i64,
    pub description: &'static str,
}

/// The plan the user picked. Serialized as-is into the quote handoff.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SelectedPlan {
    pub name: String,
    pub price: i64,
}

impl From<&PhonePlan> for SelectedPlan {
    fn from(plan: &PhonePlan) -> Self {
        Self {
            name: plan.name.to_string(),
            price: plan.price,
        }
    }
}

/// The subsidy endpoint answers either with a bare number or `{ "amount": n }`.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(untagged)]
pub enum SubsidyResponse {
    Amount(i64),
    Wrapped { amount: i64 },
}

impl SubsidyResponse {
    pub fn amount(self) -> i64 {
        match self {
            SubsidyResponse::Amount(amount) | SubsidyResponse::Wrapped { amount } => amount,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CurrentUser {
    pub id: i32,
    pub email: String,
    #[serde(default)]
    pub nickname: Option<String>,
}
