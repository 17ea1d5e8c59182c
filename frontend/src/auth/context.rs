use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use crate::auth::login_modal::LoginModal;
use crate::error::ApiError;
use crate::shop::models::CurrentUser;
use crate::utils::api::Api;

/// Request to show the login modal. `after_login` runs once the user has
/// signed in; cancelling drops it.
#[derive(Clone, PartialEq)]
pub struct LoginPrompt {
    pub title: String,
    pub subtitle: String,
    pub after_login: Callback<()>,
}

/// Session state and the login capability, handed to pages through context.
#[derive(Clone, PartialEq)]
pub struct AuthContext {
    pub current_user: Option<CurrentUser>,
    pub open_login: Callback<LoginPrompt>,
}

impl AuthContext {
    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }
}

/// `Ok(None)` for anonymous visitors.
pub async fn fetch_current_user() -> Result<Option<CurrentUser>, ApiError> {
    let response = Api::get("/api/auth/status").send().await?;
    match response.status() {
        401 => Ok(None),
        _ if response.ok() => response
            .json::<CurrentUser>()
            .await
            .map(Some)
            .map_err(|e| ApiError::Decode(e.to_string())),
        status => Err(ApiError::Status(status)),
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn AuthProvider(props: &AuthProviderProps) -> Html {
    let current_user = use_state(|| None::<CurrentUser>);
    let prompt = use_state(|| None::<LoginPrompt>);

    let refresh_session = {
        let current_user = current_user.clone();
        Callback::from(move |after: Option<Callback<()>>| {
            let current_user = current_user.clone();
            spawn_local(async move {
                match fetch_current_user().await {
                    Ok(user) => {
                        let signed_in = user.is_some();
                        current_user.set(user);
                        if let (true, Some(after)) = (signed_in, after) {
                            after.emit(());
                        }
                    }
                    Err(e) => log::warn!("Failed to check session: {}", e),
                }
            });
        })
    };

    {
        let refresh_session = refresh_session.clone();
        use_effect_with_deps(
            move |_| {
                refresh_session.emit(None);
                || ()
            },
            (),
        );
    }

    let open_login = {
        let prompt = prompt.clone();
        Callback::from(move |request: LoginPrompt| prompt.set(Some(request)))
    };

    let on_close = {
        let prompt = prompt.clone();
        Callback::from(move |_: ()| prompt.set(None))
    };

    let on_logged_in = {
        let prompt = prompt.clone();
        Callback::from(move |_: ()| {
            let after = (*prompt).as_ref().map(|p| p.after_login.clone());
            prompt.set(None);
            refresh_session.emit(after);
        })
    };

    let context = AuthContext {
        current_user: (*current_user).clone(),
        open_login,
    };

    html! {
        <ContextProvider<AuthContext> {context}>
            { props.children.clone() }
            if let Some(request) = (*prompt).clone() {
                <LoginModal
                    title={request.title}
                    subtitle={request.subtitle}
                    {on_close}
                    {on_logged_in}
                />
            }
        </ContextProvider<AuthContext>>
    }
}
