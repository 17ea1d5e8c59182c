use crate::error::ApiError;
use crate::shop::models::{AgencyDetail, SubsidyResponse};
use crate::shop::query::DetailQuery;
use crate::utils::api::Api;

pub async fn get_agency_detail(query: &DetailQuery) -> Result<AgencyDetail, ApiError> {
    Api::get(&format!("/api/agencies/{}/detail", query.agency_id))
        .query("phone_brand", query.phone_brand.as_str())
        .query("phone_name", query.phone_name.as_str())
        .query("telecom", query.telecom.as_str())
        .query("subscription_type", query.subscription_type.as_str())
        .send_json::<AgencyDetail>()
        .await
}

/// Common subsidy (공시지원금) the carrier offers.
pub async fn get_subsidy(telecom: &str) -> Result<i64, ApiError> {
    Api::get("/api/subsidy")
        .query("telecom", telecom)
        .send_json::<SubsidyResponse>()
        .await
        .map(SubsidyResponse::amount)
}
