use crate::Frame;

use axum::extract::ws::Message;

#[test]
fn given_binary_message_when_classified_then_binary() {
    let msg = Message::Binary(vec![1, 2, 3].into());

    assert_eq!(Frame::classify(&msg), Some(Frame::Binary));
}

#[test]
fn given_text_message_when_classified_then_text() {
    let msg = Message::Text("hello".into());

    assert_eq!(Frame::classify(&msg), Some(Frame::Text));
}

#[test]
fn given_control_messages_when_classified_then_none() {
    assert_eq!(Frame::classify(&Message::Ping(Vec::new().into())), None);
    assert_eq!(Frame::classify(&Message::Pong(Vec::new().into())), None);
    assert_eq!(Frame::classify(&Message::Close(None)), None);
}

#[test]
fn given_frames_when_displayed_then_lowercase_names() {
    assert_eq!(Frame::Binary.to_string(), "binary");
    assert_eq!(Frame::Text.to_string(), "text");
}
