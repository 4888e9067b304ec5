//! Tests for the roster handlers.

use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{StatusCode, header};
use actix_web::{App, test as actix_test, web};
use rstest::rstest;

use crate::domain::ports::MockRosterQuery;
use crate::domain::{EmployeeInput, Error, Notification};
use crate::inbound::http::configure;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::test_utils::{memory_state, session_cookie, test_session_middleware};

trait TestApp:
    Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>
{
}

impl<T> TestApp for T where
    T: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>
{
}

async fn init(state: HttpState) -> impl TestApp {
    actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(test_session_middleware())
            .configure(configure),
    )
    .await
}

async fn login(app: &impl TestApp) -> Cookie<'static> {
    let credentials = [("username", "alice"), ("password", "s3cret")];
    actix_test::call_service(
        app,
        actix_test::TestRequest::post()
            .uri("/register")
            .set_form(credentials)
            .to_request(),
    )
    .await;
    let response = actix_test::call_service(
        app,
        actix_test::TestRequest::post()
            .uri("/login")
            .set_form(credentials)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    session_cookie(&response)
}

async fn seeded_state() -> HttpState {
    let state = memory_state();
    state
        .roster
        .add(&EmployeeInput::new("Jane Doe", "30", "Engineering"))
        .await
        .expect("seed employee");
    state
}

fn location(response: &ServiceResponse) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}

async fn body_text(response: ServiceResponse) -> String {
    let bytes = actix_test::read_body(response).await;
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

async fn get(app: &impl TestApp, uri: &str, cookie: Option<Cookie<'static>>) -> ServiceResponse {
    let mut request = actix_test::TestRequest::get().uri(uri);
    if let Some(cookie) = cookie {
        request = request.cookie(cookie);
    }
    actix_test::call_service(app, request.to_request()).await
}

async fn post_employee(
    app: &impl TestApp,
    uri: &str,
    cookie: Cookie<'static>,
    fields: [(&str, &str); 3],
) -> ServiceResponse {
    actix_test::call_service(
        app,
        actix_test::TestRequest::post()
            .uri(uri)
            .cookie(cookie)
            .set_form(fields)
            .to_request(),
    )
    .await
}

#[rstest]
#[case("/")]
#[case("/update/1")]
#[case("/delete/1")]
#[actix_web::test]
async fn anonymous_requests_redirect_without_data(#[case] uri: &str) {
    let app = init(seeded_state().await).await;

    let response = get(&app, uri, None).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/login"));
    assert!(!body_text(response).await.contains("Jane Doe"));
}

#[actix_web::test]
async fn anonymous_add_is_not_applied() {
    let state = memory_state();
    let query = state.roster_query.clone();
    let app = init(state).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/add")
            .set_form([("name", "Jane"), ("age", "30"), ("department", "Eng")])
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(query.list_all().await.expect("list").is_empty());
}

#[rstest]
#[case("/add", Some("{}"))]
#[case("/add", None)]
#[case("/update/1", None)]
#[actix_web::test]
async fn anonymous_post_redirects_whatever_the_body(
    #[case] uri: &str,
    #[case] json_body: Option<&'static str>,
) {
    let app = init(seeded_state().await).await;
    let mut request = actix_test::TestRequest::post().uri(uri);
    if let Some(body) = json_body {
        request = request
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload(body);
    }

    let response = actix_test::call_service(&app, request.to_request()).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/login"));
}

#[actix_web::test]
async fn unreadable_form_from_logged_in_user_is_a_bad_request() {
    let state = memory_state();
    let query = state.roster_query.clone();
    let app = init(state).await;
    let cookie = login(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/add")
            .cookie(cookie)
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{}")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("unreadable form"));
    assert!(query.list_all().await.expect("list").is_empty());
}

#[actix_web::test]
async fn added_employee_is_listed_with_one_shot_notice() {
    let app = init(memory_state()).await;
    let cookie = login(&app).await;

    let added = post_employee(
        &app,
        "/add",
        cookie,
        [("name", "Jane Doe"), ("age", "30"), ("department", "Engineering")],
    )
    .await;
    assert_eq!(added.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&added), Some("/"));

    let first = get(&app, "/", Some(session_cookie(&added))).await;
    assert_eq!(first.status(), StatusCode::OK);
    let drained = session_cookie(&first);
    let body = body_text(first).await;
    assert!(body.contains("<td>Jane Doe</td><td>30</td><td>Engineering</td>"));
    assert!(body.contains(Notification::employee_added().message()));

    let second = body_text(get(&app, "/", Some(drained)).await).await;
    assert!(second.contains("Jane Doe"));
    assert!(!second.contains(Notification::employee_added().message()));
}

#[rstest]
#[case([("name", ""), ("age", "30"), ("department", "Eng")])]
#[case([("name", "Jane"), ("age", ""), ("department", "Eng")])]
#[case([("name", "Jane"), ("age", "thirty"), ("department", "Eng")])]
#[case([("name", "Jane"), ("age", "-1"), ("department", "Eng")])]
#[actix_web::test]
async fn invalid_add_queues_warning_and_inserts_nothing(#[case] fields: [(&str, &str); 3]) {
    let state = memory_state();
    let query = state.roster_query.clone();
    let app = init(state).await;
    let cookie = login(&app).await;

    let response = post_employee(&app, "/add", cookie, fields).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let page = body_text(get(&app, "/", Some(session_cookie(&response))).await).await;
    assert!(page.contains(Notification::missing_fields().message()));
    assert!(query.list_all().await.expect("list").is_empty());
}

#[actix_web::test]
async fn delete_removes_the_employee() {
    let state = seeded_state().await;
    let query = state.roster_query.clone();
    let app = init(state).await;
    let cookie = login(&app).await;

    let response = get(&app, "/delete/1", Some(cookie)).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/"));
    assert!(query.list_all().await.expect("list").is_empty());
    let page = body_text(get(&app, "/", Some(session_cookie(&response))).await).await;
    assert!(page.contains(Notification::employee_deleted().message()));
}

#[rstest]
#[case("/delete/99")]
#[case("/update/99")]
#[case("/delete/abc")]
#[case("/update/abc")]
#[actix_web::test]
async fn unknown_or_malformed_ids_render_not_found(#[case] uri: &str) {
    let app = init(seeded_state().await).await;
    let cookie = login(&app).await;

    let response = get(&app, uri, Some(cookie)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Not found"));
}

#[actix_web::test]
async fn edit_page_is_prefilled() {
    let app = init(seeded_state().await).await;
    let cookie = login(&app).await;

    let response = get(&app, "/update/1", Some(cookie)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("value=\"Jane Doe\""));
    assert!(body.contains("action=\"/update/1\""));
}

#[actix_web::test]
async fn update_replaces_every_field() {
    let state = seeded_state().await;
    let query = state.roster_query.clone();
    let app = init(state).await;
    let cookie = login(&app).await;

    let response = post_employee(
        &app,
        "/update/1",
        cookie,
        [("name", "Jane Roe"), ("age", "31"), ("department", "")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/"));
    let employee = query
        .get(crate::domain::EmployeeId::new(1))
        .await
        .expect("employee");
    assert_eq!(employee.name(), "Jane Roe");
    assert_eq!(employee.age(), 31);
    assert_eq!(employee.department(), "");
}

#[actix_web::test]
async fn update_with_bad_age_returns_to_the_form() {
    let state = seeded_state().await;
    let query = state.roster_query.clone();
    let app = init(state).await;
    let cookie = login(&app).await;

    let response = post_employee(
        &app,
        "/update/1",
        cookie,
        [("name", "Jane"), ("age", "old"), ("department", "Eng")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/update/1"));
    let form = body_text(get(&app, "/update/1", Some(session_cookie(&response))).await).await;
    assert!(form.contains("Employee not updated"));
    let unchanged = query
        .get(crate::domain::EmployeeId::new(1))
        .await
        .expect("employee");
    assert_eq!(unchanged.age(), 30);
}

#[actix_web::test]
async fn update_of_unknown_employee_is_not_found() {
    let app = init(memory_state()).await;
    let cookie = login(&app).await;

    let response = post_employee(
        &app,
        "/update/7",
        cookie,
        [("name", "Jane"), ("age", "bad"), ("department", "Eng")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn store_failure_renders_redacted_error_page() {
    let mut query = MockRosterQuery::new();
    query
        .expect_list_all()
        .returning(|| Err(Error::internal("relation \"employees\" does not exist")));
    let mut state = memory_state();
    state.roster_query = Arc::new(query);
    let app = init(state).await;
    let cookie = login(&app).await;

    let response = get(&app, "/", Some(cookie)).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body_text(response).await.contains("relation"));
}
