use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{WelcomeBody, spawn_app};

#[tokio::test]
async fn send_welcome_returns_a_200_with_the_provider_id_for_valid_data() {
    // Arrange
    let app = spawn_app().await;
    let body = WelcomeBody {
        nome: Some("Ana"),
        email: Some("ana@example.com"),
    };

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "abc123" })),
        )
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_send_welcome(body).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["sucesso"], true);
    assert_eq!(body["emailId"], "abc123");
    assert!(body["mensagem"].as_str().unwrap().contains("Ana"));
}

#[tokio::test]
async fn send_welcome_emails_the_rendered_template_to_the_submitted_address() {
    // Arrange
    let app = spawn_app().await;
    let body = WelcomeBody {
        nome: Some("  Ana <b>Maria</b> "),
        email: Some(" ana@example.com "),
    };

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "abc123" })),
        )
        .mount(&app.email_server)
        .await;

    // Act
    app.post_send_welcome(body).await;

    // Assert
    let email_request = &app.email_server.received_requests().await.unwrap()[0];
    let sent: serde_json::Value = serde_json::from_slice(&email_request.body).unwrap();
    assert_eq!(sent["to"][0], "ana@example.com");
    assert_eq!(sent["subject"], "Bem-vindo(a), Ana <b>Maria</b>!");

    let html = sent["html"].as_str().unwrap();
    let text = sent["text"].as_str().unwrap();
    assert!(html.contains("Ana &lt;b&gt;Maria&lt;/b&gt;"));
    assert!(text.contains("Ana <b>Maria</b>"));
    assert!(!html.contains("{{name}}"));
    assert!(!text.contains("{{name}}"));
}

#[tokio::test]
async fn send_welcome_returns_a_400_when_data_is_missing() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec![
        (
            WelcomeBody {
                nome: Some("le guin"),
                email: None,
            },
            "missing email",
        ),
        (
            WelcomeBody {
                nome: None,
                email: Some("ursula_le_guin@gmail.com"),
            },
            "missing name",
        ),
        (
            WelcomeBody {
                nome: None,
                email: None,
            },
            "missing both name and email",
        ),
        (
            WelcomeBody {
                nome: Some("  "),
                email: Some("ursula_le_guin@gmail.com"),
            },
            "blank name",
        ),
        (
            WelcomeBody {
                nome: Some("le guin"),
                email: Some(""),
            },
            "empty email",
        ),
    ];

    Mock::given(path("/emails"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    for (invalid_body, description) in test_cases {
        // Act
        let response = app.post_send_welcome(invalid_body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            description
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["sucesso"], false);
        assert_eq!(body["mensagem"], "Nome e email são obrigatórios");
    }
}

#[tokio::test]
async fn send_welcome_returns_a_400_when_fields_are_present_but_invalid() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec![
        (
            WelcomeBody {
                nome: Some("Ana"),
                email: Some("foo@bar"),
            },
            "Formato de email inválido",
            "email without a dot suffix",
        ),
        (
            WelcomeBody {
                nome: Some("Ana"),
                email: Some("definitely-not-an-email"),
            },
            "Formato de email inválido",
            "email without an at sign",
        ),
        (
            WelcomeBody {
                nome: Some("A"),
                email: Some("ana@example.com"),
            },
            "Nome deve ter pelo menos 2 caracteres",
            "one letter name",
        ),
        (
            WelcomeBody {
                nome: Some(" a "),
                email: Some("ana@example.com"),
            },
            "Nome deve ter pelo menos 2 caracteres",
            "one letter name padded with spaces",
        ),
    ];

    Mock::given(path("/emails"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    for (body, expected_message, description) in test_cases {
        // Act
        let response = app.post_send_welcome(body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 Bad Request when the payload was {}.",
            description
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["sucesso"], false);
        assert_eq!(body["mensagem"], expected_message, "{}", description);
    }
}

#[tokio::test]
async fn send_welcome_returns_a_400_for_a_body_that_is_not_json() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        ("{\"nome\": \"Ana\"", "truncated json"),
        ("{\"nome\": 42, \"email\": \"ana@example.com\"}", "name is not a string"),
    ];

    for (raw_body, description) in test_cases {
        // Act
        let response = app
            .api_client
            .post(format!("{}/send-welcome", &app.address))
            .header("Content-Type", "application/json")
            .body(raw_body)
            .send()
            .await
            .expect("Failed to execute request.");

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 Bad Request when the payload was {}.",
            description
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["sucesso"], false);
    }
}

#[tokio::test]
async fn send_welcome_returns_a_500_without_leaking_provider_details() {
    // Arrange
    let app = spawn_app().await;
    let body = WelcomeBody {
        nome: Some("Ana"),
        email: Some("ana@example.com"),
    };

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "statusCode": 403,
            "name": "validation_error",
            "message": "You can only send testing emails to your own address",
        })))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_send_welcome(body).await;

    // Assert
    assert_eq!(500, response.status().as_u16());
    let text = response.text().await.unwrap();
    assert!(!text.contains("testing emails"));
    assert!(!text.contains("validation_error"));

    let body: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(body["sucesso"], false);
    assert_eq!(
        body["mensagem"],
        "Erro interno do servidor. Tente novamente mais tarde."
    );
    assert!(body.get("emailId").is_none());
}

#[tokio::test]
async fn send_welcome_returns_a_500_when_the_provider_is_unreachable() {
    // Arrange
    let app = spawn_app().await;
    let body = WelcomeBody {
        nome: Some("Ana"),
        email: Some("ana@example.com"),
    };

    Mock::given(path("/emails"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "id": "abc123" }))
                .set_delay(std::time::Duration::from_secs(30)),
        )
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_send_welcome(body).await;

    // Assert
    assert_eq!(500, response.status().as_u16());
}
