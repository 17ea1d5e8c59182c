//! Static plan catalog. Plans are not served by the API.

use crate::shop::models::PhonePlan;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Telecom {
    Skt,
    Kt,
    Lgu,
}

impl Telecom {
    /// Parse the `telecom` query value.
    pub fn from_query(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "SKT" => Some(Telecom::Skt),
            "KT" => Some(Telecom::Kt),
            "LGU" | "LGU+" | "LG" => Some(Telecom::Lgu),
            _ => None,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Telecom::Skt => "SK텔레콤",
            Telecom::Kt => "KT",
            Telecom::Lgu => "LG U+",
        }
    }

    pub fn plans(self) -> &'static [PhonePlan] {
        match self {
            Telecom::Skt => SKT_PLANS,
            Telecom::Kt => KT_PLANS,
            Telecom::Lgu => LGU_PLANS,
        }
    }

    /// Price of the plan that must be kept for the first six months.
    pub fn first_plan_price(self) -> i64 {
        match self {
            Telecom::Skt => 109_000,
            Telecom::Kt => 110_000,
            Telecom::Lgu => 105_000,
        }
    }
}

/// Plans for a raw `telecom` value; unknown carriers have none.
pub fn plans_for(telecom: &str) -> &'static [PhonePlan] {
    Telecom::from_query(telecom).map(Telecom::plans).unwrap_or(&[])
}

/// First-period plan price for a raw `telecom` value; 0 when unknown.
pub fn first_plan_price_for(telecom: &str) -> i64 {
    Telecom::from_query(telecom)
        .map(Telecom::first_plan_price)
        .unwrap_or(0)
}

const SKT_PLANS: &[PhonePlan] = &[
    PhonePlan { name: "5GX 프라임", price: 89_000, description: "데이터 무제한 · 통화/문자 기본제공" },
    PhonePlan { name: "5GX 레귤러", price: 69_000, description: "데이터 110GB + 소진 시 5Mbps" },
    PhonePlan { name: "베이직플러스", price: 59_000, description: "데이터 24GB + 소진 시 1Mbps" },
    PhonePlan { name: "슬림", price: 55_000, description: "데이터 11GB + 소진 시 1Mbps" },
];

const KT_PLANS: &[PhonePlan] = &[
    PhonePlan { name: "5G 초이스 베이직", price: 90_000, description: "데이터 무제한 · OTT 택1" },
    PhonePlan { name: "5G 심플 110GB", price: 69_000, description: "데이터 110GB + 소진 시 5Mbps" },
    PhonePlan { name: "5G 슬림 21GB", price: 58_000, description: "데이터 21GB + 소진 시 1Mbps" },
    PhonePlan { name: "5G 슬림 14GB", price: 55_000, description: "데이터 14GB + 소진 시 1Mbps" },
];

const LGU_PLANS: &[PhonePlan] = &[
    PhonePlan { name: "5G 프리미어 에센셜", price: 85_000, description: "데이터 무제한 · 통화/문자 기본제공" },
    PhonePlan { name: "5G 스탠다드", price: 75_000, description: "데이터 150GB + 소진 시 5Mbps" },
    PhonePlan { name: "5G 심플+", price: 61_000, description: "데이터 31GB + 소진 시 1Mbps" },
    PhonePlan { name: "5G 슬림+", price: 47_000, description: "데이터 6GB + 소진 시 400Kbps" },
];

/// A discount tier the user can stack on top of the offer.
#[derive(Clone, Debug, PartialEq)]
pub struct DiscountTier {
    pub title: &'static str,
    pub description: &'static str,
}

/// Index 0 is the common subsidy every quote starts with.
pub const DISCOUNT_TIERS: &[DiscountTier] = &[
    DiscountTier { title: "공통지원금", description: "통신사 공시지원금이 기본 적용돼요" },
    DiscountTier { title: "인터넷 결합 할인", description: "집 인터넷과 함께 쓰면 매달 할인" },
    DiscountTier { title: "가족 결합 할인", description: "가족 회선을 묶으면 추가 할인" },
    DiscountTier { title: "제휴카드 할인", description: "제휴카드 실적 충족 시 청구 할인" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_query_spellings() {
        assert_eq!(Telecom::from_query("SKT"), Some(Telecom::Skt));
        assert_eq!(Telecom::from_query("kt"), Some(Telecom::Kt));
        assert_eq!(Telecom::from_query("LGU+"), Some(Telecom::Lgu));
        assert_eq!(Telecom::from_query("MVNO"), None);
    }

    #[test]
    fn unknown_carrier_has_no_plans_and_zero_first_price() {
        assert!(plans_for("MVNO").is_empty());
        assert_eq!(first_plan_price_for("MVNO"), 0);
    }

    #[test]
    fn every_carrier_has_plans_cheaper_than_first_period_plan() {
        for telecom in [Telecom::Skt, Telecom::Kt, Telecom::Lgu] {
            assert!(!telecom.plans().is_empty());
            assert!(telecom
                .plans()
                .iter()
                .all(|plan| plan.price <= telecom.first_plan_price()));
        }
    }
}
