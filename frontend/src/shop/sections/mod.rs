pub mod benefit_card;
pub mod calculator_modal;
pub mod discount_selector;
pub mod fnq_banner;
pub mod header;
pub mod naver_map;
pub mod policy_accordion;
pub mod price_calculator;
pub mod process_step;
pub mod product_hero;
