// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the device service over HTTP using wiremock.

use std::time::{Duration, Instant};

use hubspace_lib::protocol::{HttpClient, HttpConfig, Protocol};
use hubspace_lib::{AccountSession, DeviceFunction, DeviceService, Error, ProtocolError};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-token";
const ACCOUNT: &str = "acct";

fn client(server: &MockServer) -> HttpClient {
    HttpConfig::new(TOKEN)
        .with_base_url(server.uri())
        .into_client()
        .unwrap()
}

fn service(server: &MockServer) -> DeviceService<HttpClient, AccountSession> {
    DeviceService::new(client(server), AccountSession::new(ACCOUNT))
}

fn status_body() -> serde_json::Value {
    json!({
        "deviceId": "dev1",
        "attributes": [
            {"id": 1, "data": "01", "value": "1"},
            {"id": 2, "data": "4b", "value": "75"},
            {"id": 3, "data": "00", "value": "0"},
            {"id": 5, "data": "01", "value": "1"},
            {"id": 6, "data": "32", "value": "50"},
            {"id": 4, "value": "ff8800"}
        ]
    })
}

async fn mount_status(server: &MockServer, device_id: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/accounts/{ACCOUNT}/devices/{device_id}")))
        .and(query_param("expansions", "attributes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

// ============================================================================
// HttpClient Tests
// ============================================================================

mod http_client {
    use super::*;

    #[tokio::test]
    async fn sends_bearer_token() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ping"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server).get("ping").await.unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.body(), "pong");
    }

    #[tokio::test]
    async fn error_status_keeps_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/fail"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_request",
                "error_description": "Bad attribute"
            })))
            .mount(&server)
            .await;

        let err = client(&server).post("fail", &json!({})).await.unwrap_err();
        match err {
            ProtocolError::Status { status, body } => {
                assert_eq!(status, 400);
                assert!(body.contains("Bad attribute"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

// ============================================================================
// Reads
// ============================================================================

mod reads {
    use super::*;

    #[tokio::test]
    async fn get_color_mode() {
        let server = MockServer::start().await;
        mount_status(&server, "dev1", json!({"attributes": [{"id": 5, "value": "1"}]})).await;

        let value = service(&server)
            .get_value("dev1", DeviceFunction::ColorMode)
            .await
            .unwrap();

        assert_eq!(value, Some(json!("1")));
    }

    #[tokio::test]
    async fn missing_attribute_is_none() {
        let server = MockServer::start().await;
        mount_status(&server, "dev1", json!({"attributes": [{"id": 1, "value": "1"}]})).await;

        let value = service(&server)
            .get_value("dev1", DeviceFunction::FanSpeed)
            .await
            .unwrap();

        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn boolean_values() {
        let server = MockServer::start().await;
        mount_status(&server, "dev1", status_body()).await;
        let service = service(&server);

        assert_eq!(
            service
                .get_value_as_boolean("dev1", DeviceFunction::LightPower)
                .await
                .unwrap(),
            Some(true)
        );
        assert_eq!(
            service
                .get_value_as_boolean("dev1", DeviceFunction::FanPower)
                .await
                .unwrap(),
            Some(false)
        );
    }

    #[tokio::test]
    async fn empty_value_is_no_boolean() {
        let server = MockServer::start().await;
        mount_status(&server, "dev1", json!({"attributes": [{"id": 1, "value": ""}]})).await;

        let value = service(&server)
            .get_value_as_boolean("dev1", DeviceFunction::LightPower)
            .await
            .unwrap();

        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn integer_values() {
        let server = MockServer::start().await;
        mount_status(&server, "dev1", status_body()).await;
        let service = service(&server);

        assert_eq!(
            service
                .get_value_as_integer("dev1", DeviceFunction::Brightness)
                .await
                .unwrap(),
            Some(75)
        );
        assert_eq!(
            service
                .get_value_as_integer("dev1", DeviceFunction::FanSpeed)
                .await
                .unwrap(),
            Some(50)
        );
        assert_eq!(
            service
                .get_value_as_integer("dev1", DeviceFunction::LightColor)
                .await
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn non_string_value_is_no_integer() {
        let server = MockServer::start().await;
        mount_status(&server, "dev1", json!({"attributes": [{"id": 2, "value": 75}]})).await;

        let value = service(&server)
            .get_value_as_integer("dev1", DeviceFunction::Brightness)
            .await
            .unwrap();

        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn remote_error_is_none() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(409).set_body_json(json!({
                "error": "conflict",
                "error_description": "The device is not available"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let value = service(&server)
            .get_value("dev1", DeviceFunction::LightPower)
            .await
            .unwrap();

        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn unreachable_server_is_none() {
        let server = MockServer::start().await;
        let service = service(&server);
        drop(server);

        let value = service
            .get_value("dev1", DeviceFunction::LightPower)
            .await
            .unwrap();

        assert_eq!(value, None);
    }
}

// ============================================================================
// Writes
// ============================================================================

mod writes {
    use super::*;

    #[tokio::test]
    async fn set_fan_speed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/accounts/acct/devices/dev1/actions"))
            .and(header("authorization", "Bearer test-token"))
            .and(body_json(json!({
                "type": "attribute_write",
                "attrId": 6,
                "data": "32"
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        service(&server)
            .set_value("dev1", DeviceFunction::FanSpeed, 50)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn set_boolean_and_string() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_json(json!({"type": "attribute_write", "attrId": 1, "data": "00"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(body_json(json!({"type": "attribute_write", "attrId": 4, "data": "ff8800"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let service = service(&server);
        service
            .set_value("dev1", DeviceFunction::LightPower, false)
            .await
            .unwrap();
        service
            .set_value("dev1", DeviceFunction::LightColor, "ff8800")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn non_200_response_is_not_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        let result = service(&server)
            .set_value("dev1", DeviceFunction::Brightness, 80)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn server_error_is_not_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .expect(1)
            .mount(&server)
            .await;

        let result = service(&server)
            .set_value("dev1", DeviceFunction::Brightness, 80)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn unsupported_value_is_rejected_before_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let service = service(&server);
        for value in [json!(null), json!({"r": 255}), json!([1, 2])] {
            let err = service
                .set_value("dev1", DeviceFunction::LightColor, value)
                .await
                .unwrap_err();
            assert!(matches!(err, Error::UnsupportedValueType(_)));
        }
    }
}

// ============================================================================
// Serialization
// ============================================================================

mod serialization {
    use super::*;

    #[tokio::test]
    async fn concurrent_calls_run_one_at_a_time() {
        let server = MockServer::start().await;
        let delay = Duration::from_millis(200);

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(status_body())
                    .set_delay(delay),
            )
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(delay))
            .expect(1)
            .mount(&server)
            .await;

        let service = service(&server);
        let started = Instant::now();

        let (a, b, c) = tokio::join!(
            service.get_value("dev1", DeviceFunction::LightPower),
            service.set_value("dev2", DeviceFunction::FanSpeed, 3),
            service.get_value("dev3", DeviceFunction::Brightness),
        );

        assert!(started.elapsed() >= delay * 3);
        assert_eq!(a.unwrap(), Some(json!("1")));
        assert!(b.is_ok());
        assert_eq!(c.unwrap(), Some(json!("75")));
    }

    #[tokio::test]
    async fn lock_wait_is_bounded() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(status_body())
                    .set_delay(Duration::from_millis(500)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let service = service(&server).with_lock_timeout(Duration::from_millis(50));

        let (first, second) = tokio::join!(
            service.get_value("dev1", DeviceFunction::LightPower),
            service.get_value("dev2", DeviceFunction::LightPower),
        );

        let values = [first.unwrap(), second.unwrap()];
        assert_eq!(values.iter().flatten().count(), 1);
        assert!(values.contains(&Some(json!("1"))));
    }
}
