use yew::prelude::*;
use crate::shop::sections::header::SectionHeader;

const POLICIES: &[(&str, &str)] = &[
    (
        "요금제 유지 조건",
        "개통 후 6개월간은 통신사 지정 요금제를 유지해야 하며, 이후 원하는 요금제로 변경할 수 있어요.",
    ),
    (
        "약정 및 위약금",
        "24개월 약정 기간 내 해지하면 공통지원금과 추가 할인 금액 일부가 위약금으로 청구될 수 있어요.",
    ),
    (
        "견적서 유효기간",
        "견적서는 발급일로부터 3일간 유효하며 재고 상황에 따라 금액이 달라질 수 있어요.",
    ),
];

/// Clicking the open panel closes it; clicking another switches to it.
pub fn toggle_panel(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[function_component]
pub fn PolicyAccordion() -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <section class="policy-accordion">
            <SectionHeader title="꼭 확인하세요" />
            { for POLICIES.iter().enumerate().map(|(index, (title, body))| {
                let expanded = *open == Some(index);
                let onclick = {
                    let open = open.clone();
                    Callback::from(move |_: MouseEvent| open.set(toggle_panel(*open, index)))
                };
                html! {
                    <div class={classes!("policy-item", expanded.then_some("open"))}>
                        <button class="policy-title" aria-expanded={expanded.to_string()} {onclick}>
                            { *title }
                        </button>
                        if expanded {
                            <p class="policy-body">{ *body }</p>
                        }
                    </div>
                }
            }) }
        </section>
    }
}
