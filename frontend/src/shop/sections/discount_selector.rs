use yew::prelude::*;
use crate::shop::catalog::DISCOUNT_TIERS;
use crate::shop::sections::header::SectionHeader;

#[derive(Properties, PartialEq)]
pub struct DiscountSelectorProps {
    pub selected: Vec<usize>,
    pub on_toggle: Callback<usize>,
}

#[function_component]
pub fn DiscountSelector(props: &DiscountSelectorProps) -> Html {
    html! {
        <section class="discount-selector">
            <SectionHeader title="할인 선택" description="받고 싶은 할인을 모두 골라주세요" />
            <ul class="discount-list">
                { for DISCOUNT_TIERS.iter().enumerate().map(|(index, tier)| {
                    let checked = props.selected.contains(&index);
                    let onclick = {
                        let on_toggle = props.on_toggle.clone();
                        Callback::from(move |_: MouseEvent| on_toggle.emit(index))
                    };
                    html! {
                        <li key={index}>
                            <button
                                class={classes!("discount-option", checked.then_some("selected"))}
                                aria-pressed={checked.to_string()}
                                {onclick}
                            >
                                <span class="discount-title">{ tier.title }</span>
                                <span class="discount-description">{ tier.description }</span>
                            </button>
                        </li>
                    }
                }) }
            </ul>
        </section>
    }
}
