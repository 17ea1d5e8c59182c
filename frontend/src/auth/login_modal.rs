use yew::prelude::*;
use web_sys::HtmlInputElement;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use crate::utils::api::Api;

#[derive(Serialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Properties, PartialEq)]
pub struct LoginModalProps {
    pub title: String,
    pub subtitle: String,
    pub on_close: Callback<()>,
    pub on_logged_in: Callback<()>,
}

#[function_component]
pub fn LoginModal(props: &LoginModalProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let on_logged_in = props.on_logged_in.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if email.is_empty() || password.is_empty() {
                error.set(Some("이메일과 비밀번호를 입력해주세요.".to_string()));
                return;
            }
            let body = LoginRequest {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let error = error.clone();
            let submitting = submitting.clone();
            let on_logged_in = on_logged_in.clone();
            submitting.set(true);
            spawn_local(async move {
                let request = match Api::post("/api/login").json(&body) {
                    Ok(request) => request,
                    Err(e) => {
                        log::error!("Failed to serialize login request: {}", e);
                        submitting.set(false);
                        return;
                    }
                };
                match request.send().await {
                    Ok(response) if response.ok() => {
                        log::info!("Login successful");
                        error.set(None);
                        submitting.set(false);
                        on_logged_in.emit(());
                    }
                    Ok(response) => {
                        log::info!("Login rejected with status {}", response.status());
                        let message = match response.json::<ErrorResponse>().await {
                            Ok(body) => body.error,
                            Err(_) => "로그인에 실패했어요.".to_string(),
                        };
                        error.set(Some(message));
                        submitting.set(false);
                    }
                    Err(e) => {
                        log::error!("Login request failed: {}", e);
                        error.set(Some("네트워크 오류가 발생했어요. 다시 시도해주세요.".to_string()));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    let oninput_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let oninput_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-overlay">
            <div class="modal-content login-modal">
                <p class="modal-subtitle">{ &props.subtitle }</p>
                <h4 class="modal-title">{ &props.title }</h4>
                <form {onsubmit}>
                    <input
                        type="email"
                        placeholder="이메일"
                        value={(*email).clone()}
                        oninput={oninput_email}
                    />
                    <input
                        type="password"
                        placeholder="비밀번호"
                        value={(*password).clone()}
                        oninput={oninput_password}
                    />
                    if let Some(message) = (*error).as_ref() {
                        <p class="form-error">{ message }</p>
                    }
                    <div class="modal-buttons">
                        <button type="button" class="btn secondary" onclick={on_cancel}>
                            {"취소"}
                        </button>
                        <button type="submit" class="btn primary" disabled={*submitting}>
                            { if *submitting { "로그인 중..." } else { "로그인" } }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
