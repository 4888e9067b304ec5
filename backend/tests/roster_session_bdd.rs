//! Behaviour tests for the signed-in roster flow.
//!
//! These scenarios walk a browser-like client through login, the three roster
//! mutations, and logout, confirming the session gate closes again afterwards.
//
// rstest-bdd generates guard variables with double underscores, which trips
// the non_snake_case lint under -D warnings.
#![allow(non_snake_case)]

use std::cell::RefCell;
use std::rc::Rc;

use actix_http::Request;
use actix_web::cookie::Cookie;
use actix_web::http::{StatusCode, header};
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use futures_util::FutureExt;
use futures_util::future::LocalBoxFuture;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

use roster::domain::Notification;
use roster::inbound::http::configure;
use roster::inbound::http::session_config::SESSION_COOKIE;
use roster::inbound::http::test_utils::{memory_state, test_session_middleware};

/// What the client kept from one response.
struct Reply {
    status: StatusCode,
    location: Option<String>,
    cookie: Option<Cookie<'static>>,
    body: String,
}

type Dispatch = Rc<dyn Fn(Request) -> LocalBoxFuture<'static, Reply>>;

struct RosterWorld {
    runtime: Runtime,
    local: LocalSet,
    dispatch: RefCell<Option<Dispatch>>,
    cookie: RefCell<Option<Cookie<'static>>>,
    last: RefCell<Option<Reply>>,
}

impl RosterWorld {
    fn new() -> Self {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("tokio runtime");
        Self {
            runtime,
            local: LocalSet::new(),
            dispatch: RefCell::new(None),
            cookie: RefCell::new(None),
            last: RefCell::new(None),
        }
    }

    fn start(&self) {
        let app = Rc::new(self.local.block_on(
            &self.runtime,
            test::init_service(
                App::new()
                    .app_data(web::Data::new(memory_state()))
                    .wrap(test_session_middleware())
                    .configure(configure),
            ),
        ));
        let dispatch: Dispatch = Rc::new(move |request: Request| {
            let app = Rc::clone(&app);
            async move {
                let response = test::call_service(&*app, request).await;
                let status = response.status();
                let location = response
                    .headers()
                    .get(header::LOCATION)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_owned);
                let cookie = response
                    .response()
                    .cookies()
                    .find(|cookie| cookie.name() == SESSION_COOKIE)
                    .map(Cookie::into_owned);
                let body = test::read_body(response).await;
                Reply {
                    status,
                    location,
                    cookie,
                    body: String::from_utf8(body.to_vec()).expect("utf-8 body"),
                }
            }
            .boxed_local()
        });
        self.dispatch.replace(Some(dispatch));
    }

    /// Send a request with the stored cookie and keep any replacement.
    fn send(&self, request: TestRequest) {
        let dispatch = self
            .dispatch
            .borrow()
            .clone()
            .expect("app started by a given step");
        let with_cookie = match self.cookie.borrow().clone() {
            Some(cookie) => request.cookie(cookie),
            None => request,
        };
        let reply = self
            .local
            .block_on(&self.runtime, dispatch(with_cookie.to_request()));
        if let Some(cookie) = reply.cookie.clone() {
            self.cookie.replace(Some(cookie));
        }
        self.last.replace(Some(reply));
    }

    fn get(&self, uri: &str) {
        self.send(TestRequest::get().uri(uri));
    }

    fn post(&self, uri: &str, form: &[(&str, &str)]) {
        self.send(TestRequest::post().uri(uri).set_form(form));
    }

    fn roster_page(&self) -> String {
        self.get("/");
        let last = self.last.borrow();
        let reply = last.as_ref().expect("roster response");
        assert_eq!(reply.status, StatusCode::OK);
        reply.body.clone()
    }
}

#[fixture]
fn world() -> RosterWorld {
    RosterWorld::new()
}

#[given("a running roster app")]
fn a_running_roster_app(world: &RosterWorld) {
    world.start();
}

#[given("a registered user {username} with password {password}")]
fn a_registered_user(world: &RosterWorld, username: String, password: String) {
    world.post(
        "/register",
        &[("username", username.as_str()), ("password", password.as_str())],
    );
    let last = world.last.borrow();
    let reply = last.as_ref().expect("registration response");
    assert_eq!(reply.status, StatusCode::SEE_OTHER);
    assert_eq!(reply.location.as_deref(), Some("/login"));
}

#[when("the user logs in as {username} with password {password}")]
fn the_user_logs_in(world: &RosterWorld, username: String, password: String) {
    world.post("/login", &[("username", username.as_str()), ("password", password.as_str())]);
}

#[when("the user adds {name} aged {age} to {department}")]
fn the_user_adds(world: &RosterWorld, name: String, age: String, department: String) {
    world.post(
        "/add",
        &[("name", name.as_str()), ("age", age.as_str()), ("department", department.as_str())],
    );
}

#[when("the user updates employee {id} to {name} aged {age} in {department}")]
fn the_user_updates(
    world: &RosterWorld,
    id: i32,
    name: String,
    age: String,
    department: String,
) {
    world.post(
        &format!("/update/{id}"),
        &[("name", name.as_str()), ("age", age.as_str()), ("department", department.as_str())],
    );
}

#[when("the user deletes employee {id}")]
fn the_user_deletes(world: &RosterWorld, id: i32) {
    world.get(&format!("/delete/{id}"));
}

#[when("the user logs out")]
fn the_user_logs_out(world: &RosterWorld) {
    world.get("/logout");
}

#[when("the user opens the roster")]
fn the_user_opens_the_roster(world: &RosterWorld) {
    world.get("/");
}

#[then("the response redirects to {path}")]
fn the_response_redirects_to(world: &RosterWorld, path: String) {
    let last = world.last.borrow();
    let reply = last.as_ref().expect("a response");
    assert_eq!(reply.status, StatusCode::SEE_OTHER);
    assert_eq!(reply.location.as_deref(), Some(path.as_str()));
}

#[then("the roster shows the row {name} {age} {department}")]
fn the_roster_shows_the_row(world: &RosterWorld, name: String, age: String, department: String) {
    let row = format!("<td>{name}</td><td>{age}</td><td>{department}</td>");
    assert_eq!(world.roster_page().matches(&row).count(), 1);
}

#[then("the roster is empty")]
fn the_roster_is_empty(world: &RosterWorld) {
    let page = world.roster_page();
    assert!(page.contains("No employees yet."));
    assert!(page.contains(Notification::employee_deleted().message()));
}

#[then("the page mentions the invalid credentials notice")]
fn the_page_mentions_the_invalid_credentials_notice(world: &RosterWorld) {
    let last = world.last.borrow();
    let reply = last.as_ref().expect("login response");
    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply
        .body
        .contains(Notification::invalid_credentials().message()));
}

#[scenario(path = "tests/features/roster_session.feature")]
fn roster_session_scenarios(world: RosterWorld) {
    drop(world);
}
