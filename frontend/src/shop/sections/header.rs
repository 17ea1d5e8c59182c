use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
}

#[function_component]
pub fn SectionHeader(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="section-header">
            <h2 class="section-title">{ props.title.clone() }</h2>
            if let Some(description) = props.description.clone() {
                <p class="section-description">{ description }</p>
            }
        </div>
    }
}
