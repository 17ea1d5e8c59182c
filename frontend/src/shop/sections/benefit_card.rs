use yew::prelude::*;
use crate::shop::sections::header::SectionHeader;

const BENEFITS: &[(&str, &str)] = &[
    ("최저가 보장", "같은 조건에서 더 싼 곳이 있으면 차액을 돌려드려요"),
    ("숨은 비용 없음", "부가서비스 강요 없이 견적서 금액 그대로 개통해요"),
    ("방문 전 확인", "견적서를 먼저 받고 대리점 방문 여부를 정할 수 있어요"),
];

#[function_component]
pub fn BenefitCard() -> Html {
    html! {
        <section class="benefit-card">
            <SectionHeader title="폰비교에서 개통하면 좋은 점" />
            <ul class="benefit-list">
                { for BENEFITS.iter().map(|(title, body)| html! {
                    <li class="benefit-item">
                        <strong>{ *title }</strong>
                        <p>{ *body }</p>
                    </li>
                }) }
            </ul>
        </section>
    }
}
