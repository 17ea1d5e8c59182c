use yew::prelude::*;
use yew_router::prelude::*;
use crate::components::layout::{Content, ErrorView, Header};
use crate::shop::catalog::{Telecom, DISCOUNT_TIERS};
use crate::shop::pricing::format_won;
use crate::shop::quote::QuoteRequest;

#[function_component]
pub fn QuotePage() -> Html {
    let location = use_location();
    let navigator = use_navigator();

    let on_back = Callback::from(move |_: ()| {
        if let Some(navigator) = &navigator {
            navigator.back();
        }
    });

    let request = match QuoteRequest::from_query(location.as_ref().map_or("", |l| l.query_str())) {
        Ok(request) => request,
        Err(e) => {
            log::warn!("Invalid quote handoff: {}", e);
            return html! {
                <ErrorView
                    title="견적서 요청 오류"
                    sub_title="견적 정보를 확인할 수 없습니다."
                    message="상품 상세 페이지에서 다시 견적을 요청해주세요."
                    {on_back}
                />
            };
        }
    };

    let telecom = Telecom::from_query(&request.telecom)
        .map(Telecom::display_name)
        .unwrap_or(request.telecom.as_str())
        .to_string();
    let discounts = request
        .discounts
        .iter()
        .filter_map(|&index| DISCOUNT_TIERS.get(index))
        .map(|tier| tier.title)
        .collect::<Vec<_>>()
        .join(", ");

    html! {
        <>
            <Header title="견적서 요청" sub_title="입력하신 조건을 확인해주세요" {on_back} />
            <Content class="quote-content">
                <dl class="quote-summary">
                    <dt>{"기기"}</dt>
                    <dd>{ format!("{} {}", request.phone_brand, request.phone_name) }</dd>
                    <dt>{"통신사"}</dt>
                    <dd>{ telecom }</dd>
                    <dt>{"가입 유형"}</dt>
                    <dd>{ request.subscription_type.clone() }</dd>
                    <dt>{"단말기 구매가"}</dt>
                    <dd>{ format_won(request.phone_price as f64) }</dd>
                    <dt>{"요금제"}</dt>
                    <dd>{ format!("{} (월 {})", request.phone_plan.name, format_won(request.phone_plan.price as f64)) }</dd>
                    <dt>{"할인"}</dt>
                    <dd>{ if discounts.is_empty() { "-".to_string() } else { discounts } }</dd>
                </dl>
            </Content>
        </>
    }
}
