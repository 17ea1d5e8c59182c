use yew::prelude::*;
use yew_router::prelude::*;
use wasm_bindgen_futures::spawn_local;
use crate::Route;
use crate::auth::context::AuthContext;
use crate::components::layout::{BottomCtaBar, Content, ErrorView, Header};
use crate::shop::api::get_agency_detail;
use crate::shop::catalog::DISCOUNT_TIERS;
use crate::shop::models::SelectedPlan;
use crate::shop::query::DetailQuery;
use crate::shop::quote::{request_quote, QuoteRequest};
use crate::shop::sections::benefit_card::BenefitCard;
use crate::shop::sections::discount_selector::DiscountSelector;
use crate::shop::sections::fnq_banner::FnqBanner;
use crate::shop::sections::naver_map::NaverMap;
use crate::shop::sections::policy_accordion::PolicyAccordion;
use crate::shop::sections::price_calculator::PriceCalculator;
use crate::shop::sections::process_step::ProcessStep;
use crate::shop::sections::product_hero::ProductHero;
use crate::shop::selection::Selection;
use crate::shop::state::{DetailAction, DetailState, FetchStatus, RequestTokens};

const ERROR_TITLE: &str = "대리점 조회 오류";
const ERROR_SUBTITLE: &str = "죄송합니다. 대리점 정보를 불러올 수 없습니다.";

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[function_component]
pub fn ShopDetailPage() -> Html {
    let location = use_location();
    let navigator = use_navigator();
    let auth = use_context::<AuthContext>().unwrap_or_else(|| AuthContext {
        current_user: None,
        open_login: Callback::noop(),
    });

    let query = DetailQuery::parse(location.as_ref().map_or("", |l| l.query_str()));
    let state = use_reducer(DetailState::default);
    let tokens = use_mut_ref(RequestTokens::default);
    let selection = use_state(Selection::default);

    // Refetch whenever any of the five parameters changes.
    {
        let state = state.clone();
        let tokens = tokens.clone();
        use_effect_with_deps(
            move |query| {
                let token = tokens.borrow_mut().issue();
                match query.clone() {
                    Ok(query) => {
                        state.dispatch(DetailAction::Start(token));
                        spawn_local(async move {
                            let result = get_agency_detail(&query).await;
                            if let Err(e) = &result {
                                log::error!("API Error: {}", e);
                            }
                            state.dispatch(DetailAction::Resolved { token, result });
                        });
                    }
                    Err(e) => {
                        log::warn!("Not fetching agency detail: {}", e);
                        state.dispatch(DetailAction::Abandon(token));
                    }
                }
                || ()
            },
            query.clone(),
        );
    }

    let on_back = {
        let navigator = navigator.clone();
        Callback::from(move |_: ()| {
            if let Some(navigator) = &navigator {
                navigator.back();
            }
        })
    };

    let query = match query {
        Ok(query) => query,
        Err(e) => {
            return html! {
                <ErrorView
                    title={ERROR_TITLE}
                    sub_title={ERROR_SUBTITLE}
                    message={e.user_message()}
                    {on_back}
                />
            };
        }
    };

    if let FetchStatus::Failed(e) = &state.status {
        return html! {
            <ErrorView
                title={ERROR_TITLE}
                sub_title={ERROR_SUBTITLE}
                message={e.user_message()}
                {on_back}
            />
        };
    }

    let navigate = {
        let navigator = navigator.clone();
        Callback::from(move |request: QuoteRequest| {
            log::info!("Navigating to {}", request.to_url());
            if let Some(navigator) = &navigator {
                if let Err(e) = navigator.push_with_query(&Route::Quote, &request.query_pairs()) {
                    log::error!("Failed to navigate to quote page: {:?}", e);
                }
            }
        })
    };

    let on_quote_click = {
        let state = state.clone();
        let selection = selection.clone();
        let query = query.clone();
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| {
            let request = QuoteRequest::new(&query, state.detail(), &selection);
            match request_quote(request, auth.is_authenticated(), &navigate, &auth.open_login) {
                Ok(outcome) => log::debug!("Quote requested: {:?}", outcome),
                Err(blocked) => {
                    if let Some(prompt) = blocked.prompt() {
                        alert(prompt);
                    }
                }
            }
        })
    };

    let on_toggle_discount = {
        let selection = selection.clone();
        Callback::from(move |index: usize| {
            selection.set(selection.with_discount_toggled(index, DISCOUNT_TIERS.len()));
        })
    };

    let on_select_plan = {
        let selection = selection.clone();
        Callback::from(move |plan: SelectedPlan| selection.set(selection.with_plan(plan)))
    };

    let detail = state.detail().cloned();
    let (title, sub_title): (AttrValue, AttrValue) = match &detail {
        Some(detail) => (detail.agency_name.clone().into(), detail.agency_address.clone().into()),
        None => ("대리점 정보 조회중".into(), "잠시만 기다려주세요.".into()),
    };

    html! {
        <>
            <Header {title} {sub_title} {on_back} />
            <Content class="detail-content" bottom_cta_bar=true>
                if let Some(detail) = detail.clone() {
                    <div class="detail-sections">
                        <ProductHero
                            image_url={detail.phone_image.clone()}
                            agency_name={detail.agency_name.clone()}
                            phone_brand={detail.phone_brand.clone().map(AttrValue::from)}
                            phone_name={detail.phone_name.clone().map(AttrValue::from)}
                            phone_price={detail.phone_price}
                            phone_original_price={detail.phone_original_price}
                        />
                        <FnqBanner />
                        <DiscountSelector
                            selected={selection.discounts.clone()}
                            on_toggle={on_toggle_discount}
                        />
                        <PriceCalculator
                            telecom={query.telecom.clone()}
                            phone_price={detail.phone_price}
                            phone_original_price={detail.phone_original_price}
                            selected_plan={selection.plan.clone()}
                            {on_select_plan}
                        />
                        <NaverMap />
                        <BenefitCard />
                        <ProcessStep />
                        <PolicyAccordion />
                    </div>
                } else {
                    <p class="loading-message">{"대리점 정보를 불러오는 중입니다..."}</p>
                }
            </Content>
            <BottomCtaBar>
                <button
                    class="cta-button"
                    disabled={detail.is_none()}
                    onclick={on_quote_click}
                >
                    {"견적서 받고 최저가로 바로 개통!"}
                </button>
            </BottomCtaBar>
        </>
    }
}
