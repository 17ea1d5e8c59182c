use yew::prelude::*;
use crate::shop::sections::header::SectionHeader;

const STEPS: &[&str] = &[
    "요금제와 할인을 고르고 견적서를 받아요",
    "대리점이 견적서를 확인하고 연락드려요",
    "매장에 방문하거나 택배로 개통해요",
];

#[function_component]
pub fn ProcessStep() -> Html {
    html! {
        <section class="process-step">
            <SectionHeader title="개통 절차" />
            <ol class="step-list">
                { for STEPS.iter().enumerate().map(|(i, step)| html! {
                    <li class="step-item">
                        <span class="step-number">{ i + 1 }</span>
                        <span class="step-text">{ *step }</span>
                    </li>
                }) }
            </ol>
        </section>
    }
}
