//! Server-rendered HTML
//!
//! Pages are assembled with `format!` around a shared [`layout`]. Every
//! user-supplied value goes through [`e`] before it reaches the markup.

pub mod company;
pub mod employees;
pub mod home;
pub mod products;
pub mod suppliers;

use shared::util::escape_html;

use crate::forms::{FormErrors, RawForm};
use crate::pagination::Pagination;
use crate::web::Flash;

/// Escape for HTML text and attribute values
pub fn e(value: &str) -> String {
    escape_html(value)
}

const NAV: &[(&str, &str, &str)] = &[
    ("home", "/", "Inicio"),
    ("nosotros", "/nosotros/", "Nosotros"),
    ("productos", "/productos/", "Productos"),
    ("proveedores", "/proveedores/", "Proveedores"),
    ("trabajadores", "/trabajadores/", "Personal"),
];

/// Full page around `body`; `section` highlights the navigation entry
pub fn layout(title: &str, section: &str, flash: &Flash, body: &str) -> String {
    let nav: String = NAV
        .iter()
        .map(|(key, href, label)| {
            let active = if *key == section { " active" } else { "" };
            format!(r#"<li class="nav-item"><a class="nav-link{active}" href="{href}">{label}</a></li>"#)
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | CarriAcces</title>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css">
</head>
<body>
<nav class="navbar navbar-expand navbar-dark bg-dark mb-4">
<div class="container">
<a class="navbar-brand" href="/">CarriAcces</a>
<ul class="navbar-nav">{nav}</ul>
</div>
</nav>
<main class="container">
{messages}
<h1 class="h3 mb-4">{title}</h1>
{body}
</main>
<footer class="container text-muted small py-4">CarriAcces - Accesorios para Automóviles</footer>
</body>
</html>"#,
        title = e(title),
        messages = messages(flash),
    )
}

fn messages(flash: &Flash) -> String {
    flash
        .messages()
        .iter()
        .map(|m| {
            format!(
                r#"<div class="alert alert-{} alert-dismissible" role="alert">{}</div>"#,
                m.level.css_class(),
                e(&m.text)
            )
        })
        .collect()
}

/// Form-level errors (non-field)
pub fn form_errors(errors: &FormErrors) -> String {
    if errors.form().is_empty() {
        return String::new();
    }
    let items: String = errors
        .form()
        .iter()
        .map(|msg| format!("<li>{}</li>", e(msg)))
        .collect();
    format!(r#"<div class="alert alert-danger"><ul class="mb-0">{items}</ul></div>"#)
}

fn field_feedback(name: &str, errors: &FormErrors) -> (&'static str, String) {
    let messages = errors.field(name);
    if messages.is_empty() {
        return ("", String::new());
    }
    let feedback: String = messages
        .iter()
        .map(|msg| format!(r#"<div class="invalid-feedback d-block">{}</div>"#, e(msg)))
        .collect();
    (" is-invalid", feedback)
}

/// `<input>` with label and inline errors
pub fn input(label: &str, name: &str, kind: &str, form: &RawForm, errors: &FormErrors) -> String {
    let (invalid, feedback) = field_feedback(name, errors);
    format!(
        r#"<div class="mb-3"><label class="form-label" for="id_{name}">{label}</label><input type="{kind}" class="form-control{invalid}" id="id_{name}" name="{name}" value="{value}">{feedback}</div>"#,
        label = e(label),
        value = e(form.get(name)),
    )
}

pub fn textarea(label: &str, name: &str, form: &RawForm, errors: &FormErrors) -> String {
    let (invalid, feedback) = field_feedback(name, errors);
    format!(
        r#"<div class="mb-3"><label class="form-label" for="id_{name}">{label}</label><textarea class="form-control{invalid}" id="id_{name}" name="{name}" rows="3">{value}</textarea>{feedback}</div>"#,
        label = e(label),
        value = e(form.get(name)),
    )
}

/// `<select>` over `(value, label)` options
pub fn select(
    label: &str,
    name: &str,
    options: &[(String, String)],
    form: &RawForm,
    errors: &FormErrors,
) -> String {
    let (invalid, feedback) = field_feedback(name, errors);
    let current = form.get(name);
    let options: String = options
        .iter()
        .map(|(value, text)| {
            let selected = if value == current { " selected" } else { "" };
            format!(r#"<option value="{}"{selected}>{}</option>"#, e(value), e(text))
        })
        .collect();
    format!(
        r#"<div class="mb-3"><label class="form-label" for="id_{name}">{label}</label><select class="form-select{invalid}" id="id_{name}" name="{name}">{options}</select>{feedback}</div>"#,
        label = e(label),
    )
}

/// Image picker; shows the stored image when editing
pub fn image_input(label: &str, current: Option<&str>, errors: &FormErrors) -> String {
    let name = crate::forms::IMAGE_FIELD;
    let (invalid, feedback) = field_feedback(name, errors);
    let preview = current
        .filter(|path| !path.is_empty())
        .map(|path| {
            format!(
                r#"<div class="mb-2"><img src="{}" alt="" class="img-thumbnail" style="max-height:120px"></div>"#,
                media_url(path)
            )
        })
        .unwrap_or_default();
    format!(
        r#"<div class="mb-3"><label class="form-label" for="id_{name}">{label}</label>{preview}<input type="file" class="form-control{invalid}" id="id_{name}" name="{name}" accept="image/jpeg,image/jpg,image/png,image/webp"><div class="form-text">Opcional, formatos: JPG, PNG, WebP</div>{feedback}</div>"#,
        label = e(label),
    )
}

/// Public URL of a stored media path
pub fn media_url(path: &str) -> String {
    format!("/media/{}", e(path))
}

/// Form shell; `multipart` selects the encoding
pub fn form(action: &str, multipart: bool, fields: &str, submit: &str, cancel: &str) -> String {
    let enctype = if multipart {
        r#" enctype="multipart/form-data""#
    } else {
        ""
    };
    format!(
        r#"<form method="post" action="{action}"{enctype} novalidate>{fields}<button type="submit" class="btn btn-primary">{submit}</button> <a href="{cancel}" class="btn btn-secondary">Cancelar</a></form>"#,
        submit = e(submit),
    )
}

/// Delete confirmation body
pub fn confirm_delete(question: &str, action: &str, cancel: &str) -> String {
    format!(
        r#"<div class="alert alert-warning">{}</div><form method="post" action="{action}"><button type="submit" class="btn btn-danger">Sí, eliminar</button> <a href="{cancel}" class="btn btn-secondary">Cancelar</a></form>"#,
        e(question)
    )
}

/// Previous/next navigation for a list page
pub fn pagination_nav(base: &str, p: &Pagination) -> String {
    if !p.has_other_pages() {
        return String::new();
    }
    let mut items = String::new();
    if p.has_previous() {
        items.push_str(&format!(
            r#"<li class="page-item"><a class="page-link" href="{base}?page=1">&laquo; Primera</a></li><li class="page-item"><a class="page-link" href="{base}?page={}">Anterior</a></li>"#,
            p.page - 1
        ));
    }
    items.push_str(&format!(
        r#"<li class="page-item active"><span class="page-link">Página {} de {}</span></li>"#,
        p.page, p.num_pages
    ));
    if p.has_next() {
        items.push_str(&format!(
            r#"<li class="page-item"><a class="page-link" href="{base}?page={}">Siguiente</a></li><li class="page-item"><a class="page-link" href="{base}?page=last">Última &raquo;</a></li>"#,
            p.page + 1
        ));
    }
    format!(r#"<nav aria-label="Paginación"><ul class="pagination justify-content-center">{items}</ul></nav>"#)
}

/// Error page body for 404/500 responses
pub fn error_page(status: u16, message: &str) -> String {
    let title = match status {
        404 => "Página no encontrada",
        _ => "Error del servidor",
    };
    let body = format!(
        r#"<p class="lead">{}</p><a href="/" class="btn btn-primary">Volver al inicio</a>"#,
        e(message)
    );
    layout(&format!("{status} - {title}"), "", &Flash::default(), &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::{PageRequest, paginate};
    use crate::web::FlashMessage;

    #[test]
    fn test_layout_escapes_messages() {
        let flash = Flash(vec![FlashMessage::error("<b>mal</b>")]);
        let html = layout("PRODUCTOS", "productos", &flash, "<p>x</p>");
        assert!(html.contains("alert-danger"));
        assert!(html.contains("&lt;b&gt;mal&lt;/b&gt;"));
        assert!(html.contains(r#"nav-link active" href="/productos/""#));
    }

    #[test]
    fn test_input_shows_value_and_error() {
        let form = RawForm::from_pairs([("nombre", "A\"B")]);
        let mut errors = FormErrors::new();
        errors.add("nombre", "Este campo es obligatorio.");
        let html = input("Nombre", "nombre", "text", &form, &errors);
        assert!(html.contains("value=\"A&quot;B\""));
        assert!(html.contains("is-invalid"));
        assert!(html.contains("Este campo es obligatorio."));
    }

    #[test]
    fn test_select_marks_current() {
        let form = RawForm::from_pairs([("iva", "0")]);
        let options = vec![
            ("0".to_string(), "0% IVA".to_string()),
            ("15".to_string(), "15% IVA".to_string()),
        ];
        let html = select("IVA", "iva", &options, &form, &FormErrors::new());
        assert!(html.contains(r#"<option value="0" selected>"#));
        assert!(html.contains(r#"<option value="15">"#));
    }

    #[test]
    fn test_pagination_nav() {
        let single = paginate(3, 15, PageRequest::Number(1)).unwrap();
        assert!(pagination_nav("/productos/", &single).is_empty());

        let middle = paginate(40, 15, PageRequest::Number(2)).unwrap();
        let html = pagination_nav("/productos/", &middle);
        assert!(html.contains("?page=1"));
        assert!(html.contains("?page=3"));
        assert!(html.contains("?page=last"));
        assert!(html.contains("Página 2 de 3"));
    }
}
