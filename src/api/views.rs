//! Server-rendered HTML views
//!
//! Plain string-building page functions: a shared shell, the user list and
//! the two forms. All user-supplied text goes through [`escape_html`].

use axum::http::StatusCode;

use crate::domain::user::User;

/// Escape text for interpolation into HTML element content or
/// double-quoted attribute values
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<h1>{title}</h1>
{body}
</body>
</html>
"#,
        title = escape_html(title),
        body = body,
    )
}

/// The user list with edit/delete links per row
pub fn index_page(users: &[User]) -> String {
    let mut body = String::from("<p><a href=\"/criar\">Novo usuário</a></p>\n");

    if users.is_empty() {
        body.push_str("<p>Nenhum usuário cadastrado.</p>\n");
    } else {
        body.push_str("<table>\n<tr><th>ID</th><th>Nome</th><th>Email</th><th></th></tr>\n");

        for user in users {
            body.push_str(&format!(
                "<tr><td>{id}</td><td>{name}</td><td>{email}</td>\
                 <td><a href=\"/editar/{id}\">Editar</a> \
                 <a href=\"/excluir/{id}\">Excluir</a></td></tr>\n",
                id = user.id(),
                name = escape_html(user.name()),
                email = escape_html(user.email()),
            ));
        }

        body.push_str("</table>\n");
    }

    page("Usuários", &body)
}

fn user_form(action: &str, name: &str, email: &str) -> String {
    format!(
        r#"<form method="post" action="{action}">
<p><label>Nome <input type="text" name="nome" value="{name}"></label></p>
<p><label>Email <input type="text" name="email" value="{email}"></label></p>
<p><label>Senha <input type="password" name="senha" value=""></label></p>
<p><button type="submit">Salvar</button> <a href="/">Voltar</a></p>
</form>
"#,
        action = action,
        name = escape_html(name),
        email = escape_html(email),
    )
}

/// The empty creation form
pub fn criar_page() -> String {
    page("Criar usuário", &user_form("/criar", "", ""))
}

/// The edit form pre-filled with the current name and email; the password
/// field is always left blank
pub fn editar_page(user: &User) -> String {
    let action = format!("/editar/{}", user.id());
    page("Editar usuário", &user_form(&action, user.name(), user.email()))
}

/// Minimal error page for failed requests
pub fn error_page(status: StatusCode, message: &str) -> String {
    let title = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Error")
    );
    let body = format!(
        "<p>{}</p>\n<p><a href=\"/\">Voltar</a></p>\n",
        escape_html(message)
    );

    page(&title, &body)
}
