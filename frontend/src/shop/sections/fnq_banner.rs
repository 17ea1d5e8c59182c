use yew::prelude::*;

#[function_component]
pub fn FnqBanner() -> Html {
    html! {
        <a class="fnq-banner" href="/faq">
            <div>
                <p class="fnq-title">{"휴대폰 개통, 처음이라 어려우신가요?"}</p>
                <p class="fnq-subtitle">{"자주 묻는 질문에서 한 번에 확인하세요"}</p>
            </div>
            <span class="fnq-arrow">{"›"}</span>
        </a>
    }
}
