use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub sub_title: Option<AttrValue>,
    #[prop_or_default]
    pub on_back: Option<Callback<()>>,
}

#[function_component]
pub fn Header(props: &HeaderProps) -> Html {
    let back_button = props.on_back.clone().map(|on_back| {
        let onclick = Callback::from(move |_: MouseEvent| on_back.emit(()));
        html! {
            <button class="header-back" aria-label="뒤로 가기" {onclick}>{"‹"}</button>
        }
    });

    html! {
        <header class="page-header">
            { for back_button }
            <div class="header-text">
                <h1 class="header-title">{ props.title.clone() }</h1>
                if let Some(sub_title) = props.sub_title.clone() {
                    <p class="header-subtitle">{ sub_title }</p>
                }
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContentProps {
    #[prop_or_default]
    pub class: Classes,
    /// Leaves room for a fixed `BottomCtaBar`.
    #[prop_or_default]
    pub bottom_cta_bar: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn Content(props: &ContentProps) -> Html {
    let class = classes!(
        "page-content",
        props.bottom_cta_bar.then_some("with-cta-bar"),
        props.class.clone()
    );
    html! {
        <main {class}>{ props.children.clone() }</main>
    }
}

#[derive(Properties, PartialEq)]
pub struct BottomCtaBarProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn BottomCtaBar(props: &BottomCtaBarProps) -> Html {
    html! {
        <div class="bottom-cta-bar">{ props.children.clone() }</div>
    }
}

/// Header + message shown when a page cannot load its data.
#[derive(Properties, PartialEq)]
pub struct ErrorViewProps {
    pub title: AttrValue,
    pub sub_title: AttrValue,
    pub message: AttrValue,
    pub on_back: Callback<()>,
}

#[function_component]
pub fn ErrorView(props: &ErrorViewProps) -> Html {
    html! {
        <>
            <Header
                title={props.title.clone()}
                sub_title={props.sub_title.clone()}
                on_back={props.on_back.clone()}
            />
            <Content class="text-center">
                <p class="error-message">{ props.message.clone() }</p>
                <p class="error-hint">{"다시 시도해주세요."}</p>
            </Content>
        </>
    }
}
