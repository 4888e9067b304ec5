//! HTML page rendering.
//!
//! Handlers depend on the [`PageRenderer`] trait held in `HttpState`; the
//! default [`HtmlPages`] emits small self-contained documents. Every value
//! interpolated into markup passes through [`escape_html`].

use std::borrow::Cow;

use crate::domain::{Employee, Notification, User};

/// Page templates used by the roster handlers.
pub trait PageRenderer: Send + Sync {
    /// Employee table plus the add form.
    fn employee_list(
        &self,
        user: &User,
        employees: &[Employee],
        notifications: &[Notification],
    ) -> String;

    /// Login form.
    fn login(&self, notifications: &[Notification]) -> String;

    /// Registration form.
    fn register(&self, notifications: &[Notification]) -> String;

    /// Edit form prefilled with the employee's current values.
    fn update_form(&self, employee: &Employee, notifications: &[Notification]) -> String;

    /// Page for unknown resources.
    fn not_found(&self) -> String;

    /// Generic failure page. `message` must already be safe to show users.
    fn error(&self, title: &str, message: &str) -> String;
}

/// Escape the five HTML-significant characters.
///
/// # Examples
/// ```
/// use roster::inbound::http::views::escape_html;
///
/// assert_eq!(escape_html("<b>R&D</b>"), "&lt;b&gt;R&amp;D&lt;/b&gt;");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
#[must_use]
pub fn escape_html(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(raw);
    }
    let mut escaped = String::with_capacity(raw.len() + 16);
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Default renderer producing minimal HTML5 documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlPages;

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\">\
         <title>{}</title></head>\n<body>\n{body}</body>\n</html>\n",
        escape_html(title)
    )
}

fn notification_list(notifications: &[Notification]) -> String {
    if notifications.is_empty() {
        return String::new();
    }
    let items: String = notifications
        .iter()
        .map(|notification| {
            format!(
                "<li class=\"{}\">{}</li>\n",
                notification.level().as_str(),
                escape_html(notification.message())
            )
        })
        .collect();
    format!("<ul class=\"notifications\">\n{items}</ul>\n")
}

fn credentials_form(action: &str, submit: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{action}\">\n\
         <label>Username <input name=\"username\" maxlength=\"150\" required></label>\n\
         <label>Password <input name=\"password\" type=\"password\" required></label>\n\
         <button type=\"submit\">{submit}</button>\n\
         </form>\n"
    )
}

fn employee_inputs(name: &str, age: &str, department: &str) -> String {
    format!(
        "<label>Name <input name=\"name\" maxlength=\"100\" value=\"{}\"></label>\n\
         <label>Age <input name=\"age\" type=\"number\" min=\"0\" value=\"{}\"></label>\n\
         <label>Department <input name=\"department\" maxlength=\"100\" value=\"{}\"></label>\n",
        escape_html(name),
        escape_html(age),
        escape_html(department)
    )
}

fn employee_row(employee: &Employee) -> String {
    let id = employee.id();
    format!(
        "<tr><td>{id}</td><td>{}</td><td>{}</td><td>{}</td>\
         <td><a href=\"/update/{id}\">Edit</a> <a href=\"/delete/{id}\">Delete</a></td></tr>\n",
        escape_html(employee.name()),
        employee.age(),
        escape_html(employee.department())
    )
}

impl PageRenderer for HtmlPages {
    fn employee_list(
        &self,
        user: &User,
        employees: &[Employee],
        notifications: &[Notification],
    ) -> String {
        let mut body = format!(
            "<header>Signed in as {} <a href=\"/logout\">Log out</a></header>\n",
            escape_html(user.username().as_ref())
        );
        body.push_str(&notification_list(notifications));
        body.push_str("<h1>Employees</h1>\n");
        if employees.is_empty() {
            body.push_str("<p>No employees yet.</p>\n");
        } else {
            body.push_str(
                "<table>\n<tr><th>ID</th><th>Name</th><th>Age</th><th>Department</th><th></th></tr>\n",
            );
            body.extend(employees.iter().map(employee_row));
            body.push_str("</table>\n");
        }
        body.push_str("<h2>Add employee</h2>\n<form method=\"post\" action=\"/add\">\n");
        body.push_str(&employee_inputs("", "", ""));
        body.push_str("<button type=\"submit\">Add</button>\n</form>\n");
        document("Employees", &body)
    }

    fn login(&self, notifications: &[Notification]) -> String {
        let mut body = notification_list(notifications);
        body.push_str("<h1>Log in</h1>\n");
        body.push_str(&credentials_form("/login", "Log in"));
        body.push_str("<p><a href=\"/register\">Create an account</a></p>\n");
        document("Log in", &body)
    }

    fn register(&self, notifications: &[Notification]) -> String {
        let mut body = notification_list(notifications);
        body.push_str("<h1>Register</h1>\n");
        body.push_str(&credentials_form("/register", "Register"));
        body.push_str("<p><a href=\"/login\">Already registered?</a></p>\n");
        document("Register", &body)
    }

    fn update_form(&self, employee: &Employee, notifications: &[Notification]) -> String {
        let id = employee.id();
        let mut body = notification_list(notifications);
        body.push_str(&format!(
            "<h1>Edit employee {id}</h1>\n<form method=\"post\" action=\"/update/{id}\">\n"
        ));
        body.push_str(&employee_inputs(
            employee.name(),
            &employee.age().to_string(),
            employee.department(),
        ));
        body.push_str("<button type=\"submit\">Save</button>\n</form>\n<p><a href=\"/\">Back</a></p>\n");
        document("Edit employee", &body)
    }

    fn not_found(&self) -> String {
        document(
            "Not found",
            "<h1>Not found</h1>\n<p>The page you asked for does not exist.</p>\n\
             <p><a href=\"/\">Back to the roster</a></p>\n",
        )
    }

    fn error(&self, title: &str, message: &str) -> String {
        let body = format!(
            "<h1>{}</h1>\n<p>{}</p>\n",
            escape_html(title),
            escape_html(message)
        );
        document(title, &body)
    }
}
