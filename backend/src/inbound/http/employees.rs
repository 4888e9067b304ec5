//! Roster handlers. Every route here requires a logged-in user.
//!
//! Mutations answer with `303 See Other` and queue a notification for the
//! page the browser lands on next.

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use tracing::info;

use crate::domain::{EmployeeId, EmployeeInput, Error, ErrorCode, Notification};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::require_user;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{html, see_other};

/// Form body for `POST /add` and `POST /update/{id}`.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct EmployeeForm {
    /// Employee name.
    pub name: String,
    /// Age as typed.
    pub age: String,
    /// Department label.
    pub department: String,
}

impl From<EmployeeForm> for EmployeeInput {
    fn from(form: EmployeeForm) -> Self {
        Self::new(form.name, form.age, form.department)
    }
}

/// Form extraction outcome, judged only after the session check so anonymous
/// posts are redirected whatever their body.
type FormBody = Result<web::Form<EmployeeForm>, actix_web::Error>;

fn read_form(form: FormBody) -> ApiResult<EmployeeInput> {
    form.map(|form| EmployeeInput::from(form.into_inner()))
        .map_err(|err| {
            err.as_error::<Error>().cloned().unwrap_or_else(|| {
                Error::invalid_request(format!("unreadable form: {err}"))
            })
        })
}

/// Employee list with the add form.
#[get("/")]
pub async fn index(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let user = require_user(&session, &state).await?;
    let employees = state.roster_query.list_all().await?;
    let notifications = session.take_notifications();
    Ok(html(
        state.pages.employee_list(&user, &employees, &notifications),
    ))
}

/// Insert a new employee.
///
/// Validation failures are reported through a notification; the list page
/// is shown either way.
#[post("/add")]
pub async fn add(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: FormBody,
) -> ApiResult<HttpResponse> {
    let user = require_user(&session, &state).await?;
    let input = read_form(form)?;
    match state.roster.add(&input).await {
        Ok(employee) => {
            info!(user_id = %user.id(), employee_id = %employee.id(), "employee added");
            session.push_notification(Notification::employee_added())?;
        }
        Err(err) if err.code() == ErrorCode::InvalidRequest => {
            session.push_notification(Notification::missing_fields())?;
        }
        Err(err) => return Err(err),
    }
    Ok(see_other("/"))
}

/// Remove an employee. Unknown ids render the not-found page.
#[get("/delete/{id}")]
pub async fn delete(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let user = require_user(&session, &state).await?;
    let id = EmployeeId::new(path.into_inner());
    state.roster.delete(id).await?;
    info!(user_id = %user.id(), employee_id = %id, "employee deleted");
    session.push_notification(Notification::employee_deleted())?;
    Ok(see_other("/"))
}

/// Edit form prefilled with the stored values.
#[get("/update/{id}")]
pub async fn edit_page(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    require_user(&session, &state).await?;
    let employee = state
        .roster_query
        .get(EmployeeId::new(path.into_inner()))
        .await?;
    let notifications = session.take_notifications();
    Ok(html(state.pages.update_form(&employee, &notifications)))
}

/// Overwrite all three fields of an employee.
///
/// An invalid age sends the user back to the edit form with the reason.
#[post("/update/{id}")]
pub async fn update(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i32>,
    form: FormBody,
) -> ApiResult<HttpResponse> {
    let user = require_user(&session, &state).await?;
    let id = EmployeeId::new(path.into_inner());
    let input = read_form(form)?;
    match state.roster.update(id, &input).await {
        Ok(_) => {
            info!(user_id = %user.id(), employee_id = %id, "employee updated");
            session.push_notification(Notification::employee_updated())?;
            Ok(see_other("/"))
        }
        Err(err) if err.code() == ErrorCode::InvalidRequest => {
            session.push_notification(Notification::invalid_update(err.message()))?;
            Ok(see_other(&format!("/update/{id}")))
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests;
