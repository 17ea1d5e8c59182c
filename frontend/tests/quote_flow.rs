use std::cell::RefCell;
use std::rc::Rc;

use frontend::auth::context::LoginPrompt;
use frontend::error::{ApiError, DetailError};
use frontend::shop::catalog::{plans_for, DISCOUNT_TIERS};
use frontend::shop::models::{AgencyDetail, SelectedPlan};
use frontend::shop::query::DetailQuery;
use frontend::shop::quote::{request_quote, QuoteBlocked, QuoteOutcome, QuoteRequest, LOGIN_TITLE};
use frontend::shop::selection::Selection;
use frontend::shop::state::{DetailAction, DetailState, FetchStatus, RequestTokens};
use yew::Callback;

const ENTRY: &str = "?agency_id=31&phone_brand=samsung&phone_name=Galaxy%20S24%20Ultra&telecom=SKT&subscription_type=transfer";

fn detail() -> AgencyDetail {
    serde_json::from_str(
        r#"{
            "agencyName": "서면 직영점",
            "agencyAddress": "부산 부산진구 중앙대로 680",
            "phoneImage": "https://cdn.example.com/s24u.png",
            "phonePrice": 690000,
            "phoneOriginalPrice": 1698400
        }"#,
    )
    .unwrap()
}

/// Loads the page state the way the detail page does for `ENTRY`.
fn loaded_state() -> DetailState {
    let mut tokens = RequestTokens::default();
    let token = tokens.issue();
    let state = DetailState::default()
        .apply(DetailAction::Start(token))
        .unwrap();
    state
        .apply(DetailAction::Resolved { token, result: Ok(detail()) })
        .unwrap()
}

fn recorder<T: 'static>() -> (Rc<RefCell<Vec<T>>>, Callback<T>) {
    let sink = Rc::new(RefCell::new(Vec::new()));
    let callback = {
        let sink = sink.clone();
        Callback::from(move |value: T| sink.borrow_mut().push(value))
    };
    (sink, callback)
}

fn chosen_selection() -> Selection {
    let plan = &plans_for("SKT")[1];
    Selection::default()
        .with_discount_toggled(1, DISCOUNT_TIERS.len())
        .with_plan(SelectedPlan::from(plan))
}

#[test]
fn authenticated_user_navigates_with_all_selections() {
    let query = DetailQuery::parse(ENTRY).unwrap();
    let state = loaded_state();
    let selection = chosen_selection();
    let (navigations, navigate) = recorder::<QuoteRequest>();
    let (prompts, open_login) = recorder::<LoginPrompt>();

    let outcome = request_quote(
        QuoteRequest::new(&query, state.detail(), &selection),
        true,
        &navigate,
        &open_login,
    );

    assert_eq!(outcome, Ok(QuoteOutcome::Navigated));
    assert!(prompts.borrow().is_empty());
    let navigations = navigations.borrow();
    assert_eq!(navigations.len(), 1);
    let url = navigations[0].to_url();
    assert!(url.starts_with("/quote?agency_id=31&phone_brand=samsung&phone_name=Galaxy%20S24%20Ultra&phone_price=690000&phone_plan="));
    assert!(url.contains("&discount=%5B0%2C1%5D&subscription_type=transfer&telecom=SKT"));
}

#[test]
fn anonymous_user_gets_login_prompt_then_same_navigation() {
    let query = DetailQuery::parse(ENTRY).unwrap();
    let state = loaded_state();
    let selection = chosen_selection();

    let (direct, navigate_direct) = recorder::<QuoteRequest>();
    let (_, no_login) = recorder::<LoginPrompt>();
    request_quote(
        QuoteRequest::new(&query, state.detail(), &selection),
        true,
        &navigate_direct,
        &no_login,
    )
    .unwrap();

    let (deferred, navigate) = recorder::<QuoteRequest>();
    let (prompts, open_login) = recorder::<LoginPrompt>();
    let outcome = request_quote(
        QuoteRequest::new(&query, state.detail(), &selection),
        false,
        &navigate,
        &open_login,
    );

    assert_eq!(outcome, Ok(QuoteOutcome::LoginRequested));
    assert!(deferred.borrow().is_empty(), "must not navigate before login");
    let prompt = prompts.borrow()[0].clone();
    assert_eq!(prompt.title, LOGIN_TITLE);

    prompt.after_login.emit(());
    assert_eq!(deferred.borrow().len(), 1);
    assert_eq!(deferred.borrow()[0], direct.borrow()[0]);
    assert_eq!(deferred.borrow()[0].to_url(), direct.borrow()[0].to_url());
}

#[test]
fn no_plan_blocks_without_navigation_or_login() {
    let query = DetailQuery::parse(ENTRY).unwrap();
    let state = loaded_state();
    let (navigations, navigate) = recorder::<QuoteRequest>();
    let (prompts, open_login) = recorder::<LoginPrompt>();

    for authenticated in [true, false] {
        let outcome = request_quote(
            QuoteRequest::new(&query, state.detail(), &Selection::default()),
            authenticated,
            &navigate,
            &open_login,
        );
        assert_eq!(outcome, Err(QuoteBlocked::PlanRequired));
    }
    assert!(navigations.borrow().is_empty());
    assert!(prompts.borrow().is_empty());
}

#[test]
fn missing_parameter_is_an_error_regardless_of_fetch() {
    let entry = ENTRY.replace("&subscription_type=transfer", "");
    assert_eq!(
        DetailQuery::parse(&entry),
        Err(DetailError::MissingParameter("subscription_type"))
    );
}

#[test]
fn not_found_and_server_error_render_different_messages() {
    let fail = |status| {
        DetailState::default()
            .apply(DetailAction::Start(1))
            .and_then(|s| s.apply(DetailAction::Resolved { token: 1, result: Err(ApiError::Status(status)) }))
            .unwrap()
    };
    let message = |state: DetailState| match state.status {
        FetchStatus::Failed(e) => e.user_message(),
        other => panic!("expected failure, got {:?}", other),
    };
    assert_ne!(message(fail(404)), message(fail(500)));
}
