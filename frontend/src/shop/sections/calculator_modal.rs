use yew::prelude::*;
use crate::shop::pricing::{format_won, PriceBreakdown};

#[derive(Properties, PartialEq)]
pub struct CalculatorModalProps {
    pub breakdown: PriceBreakdown,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn CalculatorModal(props: &CalculatorModalProps) -> Html {
    let breakdown = &props.breakdown;
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-overlay">
            <div class="modal-content calculator-modal">
                <h4>{ format!("{}개월 예상 지출 세부 내역", breakdown.months) }</h4>
                <table class="breakdown-table">
                    <tbody>
                        { for breakdown.rows().into_iter().map(|(label, value)| html! {
                            <tr>
                                <th>{ label }</th>
                                <td>{ value }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
                <p class="breakdown-monthly">
                    {"매달 납부 금액 "}
                    <strong>{ format!("월 {}", format_won(breakdown.monthly())) }</strong>
                </p>
                <p class="breakdown-note">
                    { format!("단말기 할부금 월 {} 포함", format_won(breakdown.device_monthly())) }
                </p>
                <div class="modal-buttons">
                    <button class="btn primary" onclick={on_close}>{"확인"}</button>
                </div>
            </div>
        </div>
    }
}
