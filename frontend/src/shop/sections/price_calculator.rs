use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use crate::shop::api::get_subsidy;
use crate::shop::catalog::{first_plan_price_for, plans_for};
use crate::shop::models::SelectedPlan;
use crate::shop::pricing::{estimate_label, format_won, PriceBreakdown, PERIOD_MONTHS};
use crate::shop::sections::calculator_modal::CalculatorModal;
use crate::shop::sections::header::SectionHeader;
use crate::shop::state::RequestTokens;

#[derive(Properties, PartialEq)]
pub struct PriceCalculatorProps {
    pub telecom: AttrValue,
    pub phone_price: i64,
    pub phone_original_price: i64,
    pub selected_plan: Option<SelectedPlan>,
    pub on_select_plan: Callback<SelectedPlan>,
}

#[function_component]
pub fn PriceCalculator(props: &PriceCalculatorProps) -> Html {
    let common_discount = use_state(|| 0_i64);
    let breakdown = use_state(|| None::<PriceBreakdown>);
    let subsidy_tokens = use_mut_ref(RequestTokens::default);

    // Fetch the carrier subsidy on mount and whenever the carrier changes
    {
        let common_discount = common_discount.clone();
        let subsidy_tokens = subsidy_tokens.clone();
        use_effect_with_deps(
            move |telecom: &AttrValue| {
                let telecom = telecom.to_string();
                let token = subsidy_tokens.borrow_mut().issue();
                spawn_local(fetch_common_discount(telecom, token, subsidy_tokens, common_discount));
                || ()
            },
            props.telecom.clone(),
        );
    }

    let first_plan_price = first_plan_price_for(&props.telecom);
    let plans = plans_for(&props.telecom);
    let chosen_price = props.selected_plan.as_ref().map(|plan| plan.price);

    let on_detail_click = {
        let breakdown = breakdown.clone();
        let common_discount = common_discount.clone();
        let phone_price = props.phone_price;
        let phone_original_price = props.phone_original_price;
        Callback::from(move |_: MouseEvent| {
            let Some(selected_plan_price) = chosen_price else {
                return;
            };
            breakdown.set(Some(PriceBreakdown {
                months: PERIOD_MONTHS,
                phone_price,
                phone_original_price,
                first_plan_price,
                selected_plan_price,
                common_discount: *common_discount,
            }));
        })
    };

    let on_close_modal = {
        let breakdown = breakdown.clone();
        Callback::from(move |_: ()| breakdown.set(None))
    };

    html! {
        <section class="price-calculator">
            <SectionHeader title="24개월 예상 지출 금액" />
            <div class="plan-options">
                { for plans.iter().map(|plan| {
                    let selected = props
                        .selected_plan
                        .as_ref()
                        .map_or(false, |chosen| chosen.name == plan.name);
                    let onclick = {
                        let on_select_plan = props.on_select_plan.clone();
                        let chosen = SelectedPlan::from(plan);
                        Callback::from(move |_: MouseEvent| on_select_plan.emit(chosen.clone()))
                    };
                    html! {
                        <button
                            key={plan.name}
                            class={classes!("plan-option", selected.then_some("selected"))}
                            {onclick}
                        >
                            <span class="plan-name">{ plan.name }</span>
                            <span class="plan-price">{ format!("월 {}", format_won(plan.price as f64)) }</span>
                            <span class="plan-description">{ plan.description }</span>
                        </button>
                    }
                }) }
            </div>
            <div class="estimate-box">
                <p class="estimate-question">{"24개월간 매달 납부하실 금액은?"}</p>
                <p class="estimate-amount">
                    if chosen_price.is_some() {
                        <span class="estimate-unit">{"월"}</span>
                    }
                    { estimate_label(props.phone_price, first_plan_price, chosen_price) }
                </p>
            </div>
            <button
                class="estimate-detail"
                disabled={chosen_price.is_none()}
                onclick={on_detail_click}
            >
                {"세부 내역이 궁금하신가요?"}
            </button>
            if let Some(breakdown) = (*breakdown).clone() {
                <CalculatorModal {breakdown} on_close={on_close_modal} />
            }
        </section>
    }
}

async fn fetch_common_discount(
    telecom: String,
    token: u64,
    tokens: Rc<RefCell<RequestTokens>>,
    common_discount: UseStateHandle<i64>,
) {
    match get_subsidy(&telecom).await {
        Ok(amount) if tokens.borrow().is_latest(token) => common_discount.set(amount),
        Ok(_) => log::debug!("dropping stale subsidy for {}", telecom),
        Err(e) => log::error!("Failed to fetch common discount: {}", e),
    }
}
