use std::pin::pin;
use std::task::{Context, Poll, Waker};

use super::*;

#[test]
fn decode_failed_message_includes_status() {
    assert_eq!(
        decode_failed_message(502, "unexpected end of input"),
        "auth response (502) could not be decoded: unexpected end of input"
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_render_never_submits() {
    let req = LoginRequest { email: "a@b.test".to_owned(), password: "pw".to_owned() };
    let mut call = pin!(post_login(&req));
    let mut cx = Context::from_waker(Waker::noop());
    match call.as_mut().poll(&mut cx) {
        Poll::Ready(result) => assert_eq!(result, Err("not available on server".to_owned())),
        Poll::Pending => panic!("server stub should resolve immediately"),
    }
}
