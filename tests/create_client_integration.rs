use client_score::application::context::AppContext;
use client_score::application::usecases::create_client::{
    CreateClientError, CreateClientRequest, CreateClientUseCase,
};
use client_score::application::usecases::get_client::GetClientUseCase;
use client_score::domain::entities::client::ClientError;
use client_score::domain::value_objects::birth_date::BirthDate;
use client_score::domain::value_objects::ids::ClientId;
use client_score::infrastructure::db::repositories::Repositories;

fn setup() -> AppContext {
    AppContext::new(Repositories::in_memory())
}

fn request_from_json(json: &str) -> CreateClientRequest {
    serde_json::from_str(json).unwrap()
}

#[tokio::test]
async fn given_json_request_when_execute_should_persist_scored_client() {
    let ctx = setup();
    let request = request_from_json(
        r#"{"name":"A","birthDate":"2000-01-01","gender":"F","healthProblems":[{"degree":5}]}"#,
    );

    let client_id = CreateClientUseCase::execute(&ctx, request).await.unwrap();

    let client = GetClientUseCase::execute(&ctx, client_id).await.unwrap();
    assert_eq!(client.id(), Some(client_id));
    assert_eq!(client.name(), "A");
    assert_eq!(client.birth_date(), &BirthDate::parse("2000-01-01"));
    assert!((client.score() - 90.025).abs() < 1e-3);
}

#[tokio::test]
async fn given_returned_id_when_formatted_should_parse_back() {
    let ctx = setup();
    let request = request_from_json(
        r#"{"name":"A","birthDate":"2000-01-01","gender":"M","healthProblems":[]}"#,
    );

    let client_id = CreateClientUseCase::execute(&ctx, request).await.unwrap();

    let parsed: ClientId = client_id.to_string().parse().unwrap();
    let client = GetClientUseCase::execute(&ctx, parsed).await.unwrap();
    assert!((client.score() - 5.732).abs() < 1e-3);
}

#[tokio::test]
async fn given_null_health_problems_when_execute_should_score_zero() {
    let ctx = setup();
    let request = request_from_json(
        r#"{"name":"A","birthDate":"2000-01-01","gender":"M","healthProblems":null}"#,
    );

    let client_id = CreateClientUseCase::execute(&ctx, request).await.unwrap();

    let client = GetClientUseCase::execute(&ctx, client_id).await.unwrap();
    assert_eq!(client.score(), 0.0);
    assert_eq!(client.health_problems(), None);
}

#[tokio::test]
async fn given_degree_above_ten_when_execute_should_fail() {
    let ctx = setup();
    let request = request_from_json(
        r#"{"name":"A","birthDate":"2000-01-01","gender":"F","healthProblems":[{"degree":4},{"degree":11}]}"#,
    );

    let result = CreateClientUseCase::execute(&ctx, request).await;

    assert!(matches!(
        result,
        Err(CreateClientError::Invalid(
            ClientError::InvalidHealthProblemDegree { degree: 11 }
        ))
    ));
}

#[tokio::test]
async fn given_bad_birth_date_and_gender_when_execute_should_still_persist() {
    let ctx = setup();
    let request = request_from_json(
        r#"{"name":"A","birthDate":"32/13/2000","gender":"X","healthProblems":[{"degree":3}]}"#,
    );

    let client_id = CreateClientUseCase::execute(&ctx, request).await.unwrap();

    let mut client = GetClientUseCase::execute(&ctx, client_id).await.unwrap();
    assert!(!client.birth_date().is_valid());
    assert_eq!(client.gender(), "X");
    assert!(client.set_gender("X").is_err());
}
