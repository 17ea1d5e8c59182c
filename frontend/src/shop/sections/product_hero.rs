use yew::prelude::*;
use crate::shop::pricing::{discount_rate, format_won};

#[derive(Properties, PartialEq)]
pub struct ProductHeroProps {
    pub image_url: AttrValue,
    pub agency_name: AttrValue,
    #[prop_or_default]
    pub phone_brand: Option<AttrValue>,
    #[prop_or_default]
    pub phone_name: Option<AttrValue>,
    pub phone_price: i64,
    pub phone_original_price: i64,
}

#[function_component]
pub fn ProductHero(props: &ProductHeroProps) -> Html {
    let rate = discount_rate(props.phone_original_price, props.phone_price);
    let alt = props.phone_name.clone().unwrap_or_else(|| props.agency_name.clone());

    html! {
        <section class="product-hero">
            <img class="product-image" src={props.image_url.clone()} {alt} />
            <div class="product-info">
                if let Some(brand) = props.phone_brand.clone() {
                    <p class="product-brand">{ brand }</p>
                }
                if let Some(name) = props.phone_name.clone() {
                    <h2 class="product-name">{ name }</h2>
                }
                <p class="product-agency">{ props.agency_name.clone() }</p>
                <div class="product-price">
                    if rate > 0 {
                        <span class="price-original">{ format_won(props.phone_original_price as f64) }</span>
                        <span class="price-rate">{ format!("{}%", rate) }</span>
                    }
                    <span class="price-current">{ format_won(props.phone_price as f64) }</span>
                </div>
            </div>
        </section>
    }
}
