use yew::prelude::*;
use crate::components::layout::{Content, Header};

#[function_component]
pub fn NotFound() -> Html {
    html! {
        <>
            <Header title="페이지를 찾을 수 없어요" />
            <Content class="text-center">
                <p>{"주소를 다시 확인해주세요."}</p>
            </Content>
        </>
    }
}
