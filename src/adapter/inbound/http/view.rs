//! Server-rendered HTML pages.
//!
//! Pages are assembled from a shared layout; every piece of user text goes
//! through [`escape_html`] before it reaches the markup.

use std::fmt::Write;

use crate::domain::TodoItem;

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;max-width:52rem;margin:2rem auto;padding:0 1rem;color:#222}\
form{display:grid;gap:.5rem;margin-bottom:2rem}\
input,textarea{padding:.4rem;font:inherit}\
button{justify-self:start;padding:.4rem 1.2rem}\
table{width:100%;border-collapse:collapse}\
th,td{text-align:left;padding:.4rem;border-bottom:1px solid #ddd}\
.empty{color:#777}\
.error{color:#a00}";

/// Escape text for safe inclusion in element bodies and quoted attributes.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        title = escape_html(title),
    )
}

fn todo_form(action: &str, title: &str, description: &str, submit: &str) -> String {
    format!(
        "<form action=\"{action}\" method=\"post\">\n\
         <label for=\"title\">Title</label>\n\
         <input id=\"title\" name=\"title\" required value=\"{title}\">\n\
         <label for=\"description\">Description</label>\n\
         <textarea id=\"description\" name=\"description\" required>{description}</textarea>\n\
         <button type=\"submit\">{submit}</button>\n</form>",
        action = escape_html(action),
        title = escape_html(title),
        description = escape_html(description),
    )
}

/// The list view: create form followed by every item.
pub fn index_page(todos: &[TodoItem]) -> String {
    let mut body = String::from("<h1>Todos</h1>\n");
    body.push_str(&todo_form("/", "", "", "Add todo"));
    body.push('\n');

    if todos.is_empty() {
        body.push_str("<p class=\"empty\">No todos yet. Add your first one above.</p>");
        return layout("Todos", &body);
    }

    body.push_str(
        "<table>\n<thead><tr><th>#</th><th>Title</th><th>Description</th>\
         <th>Created</th><th>Actions</th></tr></thead>\n<tbody>\n",
    );
    for (row, todo) in todos.iter().enumerate() {
        let _ = writeln!(
            body,
            "<tr><td>{row}</td><td>{title}</td><td>{description}</td><td>{created}</td>\
             <td><a href=\"/update/{id}\">Update</a> <a href=\"/delete/{id}\">Delete</a></td></tr>",
            row = row + 1,
            title = escape_html(&todo.title),
            description = escape_html(&todo.description),
            created = todo.created_at.format("%Y-%m-%d %H:%M"),
            id = todo.id,
        );
    }
    body.push_str("</tbody>\n</table>");

    layout("Todos", &body)
}

/// The edit view for a single item.
pub fn edit_page(todo: &TodoItem) -> String {
    let mut body = format!("<h1>Update todo #{}</h1>\n", todo.id);
    body.push_str(&todo_form(
        &format!("/update/{}", todo.id),
        &todo.title,
        &todo.description,
        "Update",
    ));
    body.push_str("\n<p><a href=\"/\">Back to list</a></p>");
    layout("Update todo", &body)
}

/// A minimal error page.
pub fn error_page(heading: &str, message: &str) -> String {
    let body = format!(
        "<h1>{}</h1>\n<p class=\"error\">{}</p>\n<p><a href=\"/\">Back to list</a></p>",
        escape_html(heading),
        escape_html(message),
    );
    layout(heading, &body)
}
