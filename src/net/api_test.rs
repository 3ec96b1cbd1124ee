use super::*;

fn reply(response: Option<&str>, error: Option<&str>) -> ChatReply {
    ChatReply {
        response: response.map(str::to_owned),
        error: error.map(|e| serde_json::Value::String(e.to_owned())),
    }
}

// =============================================================
// ChatOutcome::from_result
// =============================================================

#[test]
fn response_field_becomes_reply() {
    let outcome = ChatOutcome::from_result(Ok(reply(Some("Hi there"), None)));
    assert_eq!(outcome, ChatOutcome::Reply("Hi there".to_owned()));
}

#[test]
fn error_field_becomes_rejected() {
    let outcome = ChatOutcome::from_result(Ok(reply(None, Some("rate limited"))));
    assert_eq!(outcome, ChatOutcome::Rejected("rate limited".to_owned()));
}

#[test]
fn error_field_wins_over_response() {
    let outcome = ChatOutcome::from_result(Ok(reply(Some("Hi"), Some("quota"))));
    assert_eq!(outcome, ChatOutcome::Rejected("quota".to_owned()));
}

#[test]
fn empty_error_field_is_ignored() {
    let outcome = ChatOutcome::from_result(Ok(reply(Some("Hi"), Some(""))));
    assert_eq!(outcome, ChatOutcome::Reply("Hi".to_owned()));
}

#[test]
fn structured_error_is_rendered_as_json() {
    let body: ChatReply = serde_json::from_str(r#"{"error":{"message":"quota"}}"#).unwrap();
    let outcome = ChatOutcome::from_result(Ok(body));
    assert_eq!(outcome, ChatOutcome::Rejected(r#"{"message":"quota"}"#.to_owned()));
}

#[test]
fn null_or_false_error_is_ignored() {
    let null: ChatReply = serde_json::from_str(r#"{"error":null,"response":"ok"}"#).unwrap();
    let falsy: ChatReply = serde_json::from_str(r#"{"error":false,"response":"ok"}"#).unwrap();
    assert_eq!(ChatOutcome::from_result(Ok(null)), ChatOutcome::Reply("ok".to_owned()));
    assert_eq!(ChatOutcome::from_result(Ok(falsy)), ChatOutcome::Reply("ok".to_owned()));
}

#[test]
fn empty_body_is_missing_reply() {
    let outcome = ChatOutcome::from_result(Ok(ChatReply::default()));
    assert_eq!(outcome, ChatOutcome::Failed(ChatError::MissingReply));
}

#[test]
fn transport_error_is_failed() {
    let err = ChatError::Transport("offline".to_owned());
    let outcome = ChatOutcome::from_result(Err(err.clone()));
    assert_eq!(outcome, ChatOutcome::Failed(err));
}

// =============================================================
// ChatError display
// =============================================================

#[test]
fn chat_error_messages_include_cause() {
    assert_eq!(ChatError::Transport("offline".to_owned()).to_string(), "transport error: offline");
    assert_eq!(ChatError::Decode("eof".to_owned()).to_string(), "decode error: eof");
}

#[cfg(not(feature = "csr"))]
#[test]
fn send_chat_unavailable_off_browser() {
    let request = ChatRequest { message: "hi".to_owned(), history: Vec::new() };
    let result = block_on(send_chat("/api/chat", &request));
    assert_eq!(result, Err(ChatError::Unavailable));
}

/// Minimal executor for futures that resolve without awaiting I/O.
#[cfg(not(feature = "csr"))]
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
