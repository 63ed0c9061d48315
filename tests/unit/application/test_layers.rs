use reqwest::StatusCode;
use serde_json::{Value, json};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use ubidots_client::application::bridge::Reauthenticate;
use ubidots_client::application::layers::{
    Endpoint, endpoint, raise_for_status, try_again, validate_input,
};
use ubidots_client::error::{AppError, ErrorKind};
use ubidots_client::model::http::HttpResponse;
use ubidots_client::model::retry::RetryConfig;
use ubidots_client::model::shape::Shape;
use ubidots_client::model::status::StatusRules;

/// Bridge stand-in counting re-authentications
#[derive(Default)]
struct FakeBridge {
    initialized: Cell<u32>,
    fail_initialize: bool,
    token_only: bool,
}

impl Reauthenticate for FakeBridge {
    fn initialize(&self) -> Result<(), AppError> {
        self.initialized.set(self.initialized.get() + 1);
        if self.fail_initialize {
            return Err(AppError::Unauthorized(StatusCode::UNAUTHORIZED));
        }
        Ok(())
    }

    fn can_reauthenticate(&self) -> bool {
        !self.token_only
    }
}

/// Answers each call with the next scripted status and counts the calls
struct Script {
    statuses: RefCell<VecDeque<u16>>,
    calls: Cell<u32>,
}

impl Script {
    fn new(statuses: &[u16]) -> Self {
        Self {
            statuses: RefCell::new(statuses.iter().copied().collect()),
            calls: Cell::new(0),
        }
    }

    fn next(&self) -> Result<HttpResponse, AppError> {
        self.calls.set(self.calls.get() + 1);
        let code = self.statuses.borrow_mut().pop_front().unwrap_or(200);
        Ok(HttpResponse::new(StatusCode::from_u16(code).unwrap(), ""))
    }
}

#[test]
fn test_try_again_exhausts_attempts_and_returns_last_response() {
    let script = Script::new(&[401; 10]);
    let bridge = FakeBridge::default();
    let call = try_again(
        RetryConfig::with_codes_and_max_attempts(&[401, 403], 10),
        endpoint(|_: &FakeBridge, _: &()| script.next()),
    );

    let response = call.invoke(&bridge, &()).unwrap();

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(script.calls.get(), 10);
    assert_eq!(bridge.initialized.get(), 10);
}

#[test]
fn test_try_again_stops_at_first_non_auth_failure() {
    let script = Script::new(&[401, 403, 200]);
    let bridge = FakeBridge::default();
    let call = try_again(
        RetryConfig::with_max_attempts(5),
        endpoint(|_: &FakeBridge, _: &()| script.next()),
    );

    let response = call.invoke(&bridge, &()).unwrap();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(script.calls.get(), 3);
    assert_eq!(bridge.initialized.get(), 2);
}

#[test]
fn test_try_again_single_attempt_never_repeats() {
    let script = Script::new(&[401, 200]);
    let bridge = FakeBridge::default();
    let call = try_again(
        RetryConfig::with_max_attempts(1),
        endpoint(|_: &FakeBridge, _: &()| script.next()),
    );

    let response = call.invoke(&bridge, &()).unwrap();

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(script.calls.get(), 1);
    assert_eq!(bridge.initialized.get(), 1);
}

#[test]
fn test_try_again_ignores_other_failures() {
    let script = Script::new(&[500]);
    let bridge = FakeBridge::default();
    let call = try_again(
        RetryConfig::with_max_attempts(3),
        endpoint(|_: &FakeBridge, _: &()| script.next()),
    );

    let response = call.invoke(&bridge, &()).unwrap();

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(script.calls.get(), 1);
    assert_eq!(bridge.initialized.get(), 0);
}

#[test]
fn test_try_again_returns_auth_failure_when_bridge_cannot_renew() {
    let script = Script::new(&[401, 200]);
    let bridge = FakeBridge {
        token_only: true,
        ..FakeBridge::default()
    };
    let call = try_again(
        RetryConfig::with_max_attempts(3),
        endpoint(|_: &FakeBridge, _: &()| script.next()),
    );

    let response = call.invoke(&bridge, &()).unwrap();

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(script.calls.get(), 1);
    assert_eq!(bridge.initialized.get(), 0);
}

#[test]
fn test_try_again_propagates_reauthentication_errors() {
    let script = Script::new(&[401, 200]);
    let bridge = FakeBridge {
        fail_initialize: true,
        ..FakeBridge::default()
    };
    let call = try_again(
        RetryConfig::with_max_attempts(3),
        endpoint(|_: &FakeBridge, _: &()| script.next()),
    );

    let result = call.invoke(&bridge, &());

    assert!(matches!(result, Err(AppError::Unauthorized(_))));
    assert_eq!(script.calls.get(), 1);
}

#[test]
fn test_try_again_does_not_retry_call_errors() {
    let calls = Cell::new(0);
    let bridge = FakeBridge::default();
    let call = try_again(
        RetryConfig::with_max_attempts(3),
        endpoint(|_: &FakeBridge, _: &()| -> Result<HttpResponse, AppError> {
            calls.set(calls.get() + 1);
            Err(AppError::Transport("reset".to_string()))
        }),
    );

    assert!(matches!(call.invoke(&bridge, &()), Err(AppError::Transport(_))));
    assert_eq!(calls.get(), 1);
    assert_eq!(bridge.initialized.get(), 0);
}

#[test]
fn test_raise_for_status_maps_registered_codes() {
    let script = Script::new(&[400, 500]);
    let bridge = FakeBridge::default();
    let call = raise_for_status(
        StatusRules::from_codes(&[400, 500]),
        endpoint(|_: &FakeBridge, _: &()| script.next()),
    );

    match call.invoke(&bridge, &()) {
        Err(AppError::ClientError(status)) => assert_eq!(status, StatusCode::BAD_REQUEST),
        other => panic!("Expected ClientError, got {other:?}"),
    }
    match call.invoke(&bridge, &()) {
        Err(AppError::ServerError(status)) => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR)
        }
        other => panic!("Expected ServerError, got {other:?}"),
    }
    assert_eq!(script.calls.get(), 2);
}

#[test]
fn test_raise_for_status_passes_unregistered_codes_through() {
    let script = Script::new(&[404, 201]);
    let bridge = FakeBridge::default();
    let call = raise_for_status(
        StatusRules::from_codes(&[400, 500]),
        endpoint(|_: &FakeBridge, _: &()| script.next()),
    );

    assert_eq!(call.invoke(&bridge, &()).unwrap().status, StatusCode::NOT_FOUND);
    assert_eq!(call.invoke(&bridge, &()).unwrap().status, StatusCode::CREATED);
}

#[test]
fn test_raise_for_status_with_class_rules() {
    let script = Script::new(&[503, 418]);
    let bridge = FakeBridge::default();
    let call = raise_for_status(
        StatusRules::default(),
        endpoint(|_: &FakeBridge, _: &()| script.next()),
    );

    let err = call.invoke(&bridge, &()).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Server));
    assert_eq!(err.status(), Some(StatusCode::SERVICE_UNAVAILABLE));

    let err = call.invoke(&bridge, &()).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Client));
}

#[test]
fn test_status_layer_above_retry_raises_once_after_exhaustion() {
    let script = Script::new(&[401, 401, 401]);
    let bridge = FakeBridge::default();
    let call = raise_for_status(
        StatusRules::default(),
        try_again(
            RetryConfig::with_max_attempts(3),
            endpoint(|_: &FakeBridge, _: &()| script.next()),
        ),
    );

    let result = call.invoke(&bridge, &());

    assert!(matches!(
        result,
        Err(AppError::Unauthorized(StatusCode::UNAUTHORIZED))
    ));
    assert_eq!(script.calls.get(), 3);
    assert_eq!(bridge.initialized.get(), 3);
}

#[test]
fn test_status_layer_above_retry_returns_recovered_response() {
    let script = Script::new(&[403, 200]);
    let bridge = FakeBridge::default();
    let call = raise_for_status(
        StatusRules::default(),
        try_again(
            RetryConfig::with_max_attempts(2),
            endpoint(|_: &FakeBridge, _: &()| script.next()),
        ),
    );

    assert_eq!(call.invoke(&bridge, &()).unwrap().status, StatusCode::OK);
    assert_eq!(bridge.initialized.get(), 1);
}

#[test]
fn test_validate_input_mapping() {
    let bridge = FakeBridge::default();
    let seen = RefCell::new(Vec::new());
    let call = validate_input(
        Shape::mapping(["a", "b", "c"]),
        endpoint(|_: &FakeBridge, data: &Value| -> Result<u32, AppError> {
            seen.borrow_mut().push(data.clone());
            Ok(911)
        }),
    );

    for bad in [
        json!([]),
        json!({}),
        json!({"a": 1}),
        json!({"a": 1, "b": 1}),
        json!({"a": 1, "b": 1, "d": 1}),
    ] {
        assert!(matches!(
            call.invoke(&bridge, &bad),
            Err(AppError::InvalidInput(_))
        ));
    }
    assert!(seen.borrow().is_empty());

    let good = json!({"a": 1, "b": 1, "c": 1});
    assert_eq!(call.invoke(&bridge, &good).unwrap(), 911);
    assert_eq!(seen.borrow().as_slice(), &[good]);
}

#[test]
fn test_validate_input_sequence() {
    let bridge = FakeBridge::default();
    let call = validate_input(
        Shape::sequence(["p", "q"]),
        endpoint(|_: &FakeBridge, _: &Value| -> Result<u32, AppError> { Ok(911) }),
    );

    for bad in [
        json!({}),
        json!([{}]),
        json!([["p"]]),
        json!([{"p": 1, "q": 1}, []]),
        json!([{"p": 1, "q": 1}, {}]),
        json!([{"p": 1, "q": 1}, {"p": 2}]),
    ] {
        assert!(matches!(
            call.invoke(&bridge, &bad),
            Err(AppError::InvalidInput(_))
        ));
    }

    assert_eq!(call.invoke(&bridge, &json!([{"p": 1, "q": 1}])).unwrap(), 911);
    assert_eq!(
        call.invoke(&bridge, &json!([{"p": 1, "q": 1}, {"p": 2, "q": 2}]))
            .unwrap(),
        911
    );
    assert_eq!(call.invoke(&bridge, &json!([])).unwrap(), 911);
}

#[test]
fn test_validation_happens_before_any_call() {
    let script = Script::new(&[200]);
    let bridge = FakeBridge::default();
    let call = validate_input(
        Shape::mapping(["value"]),
        raise_for_status(
            StatusRules::default(),
            try_again(
                RetryConfig::with_max_attempts(2),
                endpoint(|_: &FakeBridge, _: &Value| script.next()),
            ),
        ),
    );

    assert!(matches!(
        call.invoke(&bridge, &json!({"val": 1})),
        Err(AppError::InvalidInput(_))
    ));
    assert_eq!(script.calls.get(), 0);

    assert!(call.invoke(&bridge, &json!({"value": 1})).is_ok());
    assert_eq!(script.calls.get(), 1);
}
