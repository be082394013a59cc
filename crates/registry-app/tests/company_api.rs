//! End-to-end tests for the company endpoints: the full stack wired the
//! same way `main` does it, driven through the router without a socket.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

use registry_adapter::{router, InMemoryCompanyRepository};
use registry_domain::{CompanyId, CompanyRepository};
use registry_usecase::{CompanyDto, CompanyService};

struct TestApp {
    router: Router,
    repository: Arc<InMemoryCompanyRepository>,
    service: Arc<CompanyService>,
}

fn test_app() -> TestApp {
    let repository = Arc::new(InMemoryCompanyRepository::new());
    let service = Arc::new(CompanyService::new(
        repository.clone() as Arc<dyn CompanyRepository>
    ));
    TestApp {
        router: router(service.clone()),
        repository,
        service,
    }
}

fn company_dto() -> CompanyDto {
    serde_json::from_value(company_json()).unwrap()
}

fn company_json() -> serde_json::Value {
    json!({
        "Name": "IBM",
        "Employees": [{"Name": "Tom", "Age": 19}],
        "Profile": {"RegisteredCapital": 100010.0, "CertId": "100"}
    })
}

async fn post_company(router: &Router) -> axum::response::Response {
    router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/companies")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(company_json().to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn list_companies(router: &Router) -> Vec<CompanyDto> {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/companies")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_create_company_employee_profile() {
    let app = test_app();

    let response = post_company(&app.router).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let companies = list_companies(&app.router).await;
    let expected = company_dto();

    assert_eq!(companies.len(), 1);
    assert_eq!(companies[0].employees.len(), expected.employees.len());
    assert_eq!(companies[0].employees[0].age, expected.employees[0].age);
    assert_eq!(companies[0].employees[0].name, expected.employees[0].name);
    let profile = companies[0].profile.as_ref().unwrap();
    let expected_profile = expected.profile.as_ref().unwrap();
    assert_eq!(profile.cert_id, expected_profile.cert_id);
    assert_eq!(profile.registered_capital, expected_profile.registered_capital);

    // The store itself agrees with the wire view.
    assert_eq!(app.repository.count().await.unwrap(), 1);
    let stored = app
        .repository
        .find_by_id(CompanyId::new(companies[0].id.unwrap()))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.profile().unwrap().cert_id(), expected_profile.cert_id);
}

#[tokio::test]
async fn test_delete_company_and_related_employee_and_profile() {
    let app = test_app();

    let response = post_company(&app.router).await;
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();

    let delete_response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(&location)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(delete_response.status(), StatusCode::NO_CONTENT);

    let companies = list_companies(&app.router).await;
    assert_eq!(companies.len(), 0);

    // Dependents were cascaded away, not orphaned.
    assert_eq!(app.repository.employee_count(), 0);
    assert_eq!(app.repository.profile_count(), 0);
}

#[tokio::test]
async fn test_create_many_companies() {
    let app = test_app();

    post_company(&app.router).await;
    post_company(&app.router).await;

    let companies = list_companies(&app.router).await;
    assert_eq!(companies.len(), 2);
    // Same payload twice still yields two independent companies.
    assert_ne!(companies[0].id, companies[1].id);
}

#[tokio::test]
async fn test_get_all_companies_via_service() {
    let app = test_app();

    app.service.add_company(company_dto()).await.unwrap();
    let companies = app.service.get_all().await.unwrap();

    let expected = company_dto();
    assert_eq!(companies.len(), 1);
    assert_eq!(companies[0].name, expected.name);
    assert_eq!(companies[0].employees, expected.employees);
    assert_eq!(companies[0].profile, expected.profile);
}

#[tokio::test]
async fn test_get_company_by_id_via_service() {
    let app = test_app();

    let id = app.service.add_company(company_dto()).await.unwrap();
    let company = app.service.get_by_id(id).await.unwrap();

    let expected = company_dto();
    assert_eq!(company.id, Some(id.value()));
    assert_eq!(company.employees, expected.employees);
    assert_eq!(company.profile, expected.profile);
}

#[tokio::test]
async fn test_create_and_delete_company_via_service() {
    let app = test_app();

    assert_eq!(app.repository.count().await.unwrap(), 0);

    let id = app.service.add_company(company_dto()).await.unwrap();
    assert_eq!(app.repository.count().await.unwrap(), 1);

    app.service.delete_company(id).await.unwrap();
    assert_eq!(app.repository.count().await.unwrap(), 0);
}
