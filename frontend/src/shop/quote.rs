//! Handoff from the detail page to the quote request page.

use thiserror::Error;
use yew::Callback;
use crate::auth::context::LoginPrompt;
use crate::shop::models::{AgencyDetail, SelectedPlan};
use crate::shop::query::{query_param, DetailQuery};
use crate::shop::selection::Selection;

/// Everything the quote page needs, carried in its query string.
#[derive(Clone, Debug, PartialEq)]
pub struct QuoteRequest {
    pub agency_id: i64,
    pub phone_brand: String,
    pub phone_name: String,
    pub phone_price: i64,
    pub phone_plan: SelectedPlan,
    pub discounts: Vec<usize>,
    pub subscription_type: String,
    pub telecom: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum QuoteBlocked {
    #[error("no plan selected")]
    PlanRequired,
    #[error("agency detail not loaded")]
    DetailUnavailable,
}

impl QuoteBlocked {
    /// Prompt for the user, if this block should be surfaced at all.
    pub fn prompt(self) -> Option<&'static str> {
        match self {
            QuoteBlocked::PlanRequired => Some("요금제를 선택해주세요."),
            QuoteBlocked::DetailUnavailable => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum QuoteParseError {
    #[error("missing quote parameter `{0}`")]
    Missing(&'static str),
    #[error("malformed quote parameter `{0}`")]
    Invalid(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuoteOutcome {
    Navigated,
    LoginRequested,
}

pub const QUOTE_PATH: &str = "/quote";
pub const LOGIN_TITLE: &str = "로그인이 필요해요";
pub const LOGIN_SUBTITLE: &str = "견적서 발급을 위해";

impl QuoteRequest {
    /// Plan is checked before the detail so the user gets a prompt for it.
    pub fn new(
        query: &DetailQuery,
        detail: Option<&AgencyDetail>,
        selection: &Selection,
    ) -> Result<Self, QuoteBlocked> {
        let plan = selection.plan.clone().ok_or(QuoteBlocked::PlanRequired)?;
        let detail = detail.ok_or(QuoteBlocked::DetailUnavailable)?;
        Ok(Self {
            agency_id: query.agency_id,
            phone_brand: query.phone_brand.clone(),
            phone_name: query.phone_name.clone(),
            phone_price: detail.phone_price,
            phone_plan: plan,
            discounts: selection.discounts.clone(),
            subscription_type: query.subscription_type.clone(),
            telecom: query.telecom.clone(),
        })
    }

    /// Query parameters in handoff order. `phone_plan` and `discount` are JSON.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let plan = serde_json::to_string(&self.phone_plan).unwrap_or_else(|_| "{}".to_string());
        let discount = serde_json::to_string(&self.discounts).unwrap_or_else(|_| "[]".to_string());
        vec![
            ("agency_id", self.agency_id.to_string()),
            ("phone_brand", self.phone_brand.clone()),
            ("phone_name", self.phone_name.clone()),
            ("phone_price", self.phone_price.to_string()),
            ("phone_plan", plan),
            ("discount", discount),
            ("subscription_type", self.subscription_type.clone()),
            ("telecom", self.telecom.clone()),
        ]
    }

    /// `/quote?...` with every value percent-escaped.
    pub fn to_url(&self) -> String {
        let query = self
            .query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", QUOTE_PATH, query)
    }

    pub fn from_query(query: &str) -> Result<Self, QuoteParseError> {
        let get = |name: &'static str| query_param(query, name).ok_or(QuoteParseError::Missing(name));
        let number = |name: &'static str| -> Result<i64, QuoteParseError> {
            get(name)?.trim().parse().map_err(|_| QuoteParseError::Invalid(name))
        };
        let phone_plan = serde_json::from_str(&get("phone_plan")?)
            .map_err(|_| QuoteParseError::Invalid("phone_plan"))?;
        let discounts = match query_param(query, "discount") {
            Some(raw) => serde_json::from_str(&raw).map_err(|_| QuoteParseError::Invalid("discount"))?,
            None => Vec::new(),
        };
        Ok(Self {
            agency_id: number("agency_id")?,
            phone_brand: get("phone_brand")?,
            phone_name: get("phone_name")?,
            phone_price: number("phone_price")?,
            phone_plan,
            discounts,
            subscription_type: get("subscription_type")?,
            telecom: get("telecom")?,
        })
    }
}

/// Handle a click on the quote call-to-action.
///
/// Authenticated users are sent straight to the quote page. Anonymous users
/// get a login prompt whose continuation performs the same navigation.
pub fn request_quote(
    request: Result<QuoteRequest, QuoteBlocked>,
    authenticated: bool,
    navigate: &Callback<QuoteRequest>,
    open_login: &Callback<LoginPrompt>,
) -> Result<QuoteOutcome, QuoteBlocked> {
    let request = request?;
    if authenticated {
        navigate.emit(request);
        return Ok(QuoteOutcome::Navigated);
    }
    let navigate = navigate.clone();
    open_login.emit(LoginPrompt {
        title: LOGIN_TITLE.to_string(),
        subtitle: LOGIN_SUBTITLE.to_string(),
        after_login: Callback::from(move |_| navigate.emit(request.clone())),
    });
    Ok(QuoteOutcome::LoginRequested)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> DetailQuery {
        DetailQuery {
            agency_id: 7,
            phone_brand: "apple".into(),
            phone_name: "iPhone 15 Pro".into(),
            telecom: "KT".into(),
            subscription_type: "new".into(),
        }
    }

    fn detail() -> AgencyDetail {
        AgencyDetail {
            agency_name: "센텀점".into(),
            agency_address: "부산 해운대구 센텀남대로 35".into(),
            phone_image: "https://cdn.example.com/ip15.png".into(),
            phone_price: 720_000,
            phone_original_price: 1_550_000,
            phone_brand: Some("apple".into()),
            phone_name: Some("iPhone 15 Pro".into()),
            agency_phone_number: None,
        }
    }

    fn selection() -> Selection {
        Selection::default().with_plan(SelectedPlan {
            name: "5G 심플 110GB".into(),
            price: 69_000,
        })
    }

    #[test]
    fn plan_is_required_before_anything_else() {
        let result = QuoteRequest::new(&query(), None, &Selection::default());
        assert_eq!(result, Err(QuoteBlocked::PlanRequired));
        assert_eq!(QuoteBlocked::PlanRequired.prompt(), Some("요금제를 선택해주세요."));
    }

    #[test]
    fn missing_detail_blocks_silently() {
        let result = QuoteRequest::new(&query(), None, &selection());
        assert_eq!(result, Err(QuoteBlocked::DetailUnavailable));
        assert_eq!(QuoteBlocked::DetailUnavailable.prompt(), None);
    }

    #[test]
    fn url_carries_json_encoded_plan_and_discounts() {
        let request = QuoteRequest::new(&query(), Some(&detail()), &selection()).unwrap();
        let url = request.to_url();
        assert!(url.starts_with("/quote?agency_id=7&phone_brand=apple&phone_name=iPhone%2015%20Pro&phone_price=720000&"));
        assert!(url.contains("&discount=%5B0%5D&"));
        assert!(url.contains(&format!(
            "phone_plan={}",
            urlencoding::encode(r#"{"name":"5G 심플 110GB","price":69000}"#)
        )));
        assert!(url.ends_with("&subscription_type=new&telecom=KT"));
    }

    #[test]
    fn quote_page_reads_back_the_handoff() {
        let request = QuoteRequest::new(
            &query(),
            Some(&detail()),
            &selection().with_discount_toggled(2, 4),
        )
        .unwrap();
        let url = request.to_url();
        let query_string = url.trim_start_matches(QUOTE_PATH);
        assert_eq!(QuoteRequest::from_query(query_string), Ok(request));
    }

    #[test]
    fn malformed_plan_json_is_rejected() {
        let query = "?agency_id=7&phone_brand=a&phone_name=b&phone_price=1&phone_plan=%7Bnope&discount=%5B0%5D&subscription_type=new&telecom=KT";
        assert_eq!(
            QuoteRequest::from_query(query),
            Err(QuoteParseError::Invalid("phone_plan"))
        );
    }

    #[test]
    fn missing_discount_defaults_to_empty() {
        let query = "?agency_id=7&phone_brand=a&phone_name=b&phone_price=1&phone_plan=%7B%22name%22%3A%22x%22%2C%22price%22%3A1%7D&subscription_type=new&telecom=KT";
        let request = QuoteRequest::from_query(query).unwrap();
        assert!(request.discounts.is_empty());
    }
}
