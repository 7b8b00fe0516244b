use dgread::reader::{Reader, ReaderBuilder};
use dgread::transport::mock::MockTransport;

#[test]
fn connect_then_disconnect() {
    let reader = ReaderBuilder::new()
        .with_transport(Box::new(MockTransport::new()))
        .build()
        .unwrap();
    let connected = reader.connect().unwrap();
    let disconnected = connected.disconnect().unwrap();
    // A disconnected reader can be connected again
    let _again = disconnected.connect().unwrap();
}

#[test]
fn config_survives_state_changes() {
    let reader = Reader::new_with_transport(Box::new(MockTransport::new()));
    let connected = reader.connect().unwrap();
    assert_eq!(connected.config().dg_capacity, 24 * 2024);
}
