//! Employee pages

use shared::models::Employee;

use super::{confirm_delete, e, form, form_errors, image_input, input, layout, media_url, pagination_nav};
use crate::forms::{FormErrors, RawForm};
use crate::pagination::Page;
use crate::web::Flash;

const SECTION: &str = "trabajadores";

fn card(t: &Employee) -> String {
    let photo = if t.has_image() {
        format!(
            r#"<img src="{}" class="rounded me-3" style="width:80px;height:80px;object-fit:cover" alt="{}">"#,
            media_url(t.image.as_deref().unwrap_or_default()),
            e(&t.full_name())
        )
    } else {
        String::new()
    };
    format!(
        r#"<div class="col-md-6 mb-4"><div class="card h-100"><div class="card-body d-flex">{photo}<div><h2 class="h5 card-title">{name}</h2><p class="mb-1"><span class="badge bg-info text-dark">{kind}</span> {code}</p><p class="small mb-1">{email}</p><p class="small text-muted mb-0">Cédula: {cedula}</p></div></div><div class="card-footer"><a href="/trabajadores/{id}/editar/" class="btn btn-sm btn-outline-primary">Editar</a> <a href="/trabajadores/{id}/eliminar/" class="btn btn-sm btn-outline-danger">Eliminar</a></div></div></div>"#,
        name = e(&t.full_name()),
        kind = e(&t.employee_type),
        code = e(&t.employee_code),
        email = e(&t.email),
        cedula = e(&t.cedula),
        id = t.id,
    )
}

pub fn list(page: &Page<Employee>, flash: &Flash) -> String {
    let content = if page.items.is_empty() {
        r#"<div class="alert alert-info">No hay trabajadores registrados.</div>"#.to_string()
    } else {
        let cards: String = page.items.iter().map(card).collect();
        format!(r#"<div class="row">{cards}</div>"#)
    };
    let body = format!(
        r#"<div class="d-flex justify-content-between mb-3"><span>Total de trabajadores: <strong>{total}</strong></span><a href="/trabajadores/agregar/" class="btn btn-primary">Agregar trabajador</a></div>{content}{nav}"#,
        total = page.pagination.total_count,
        nav = pagination_nav("/trabajadores/", &page.pagination),
    );
    layout("NUESTRO PERSONAL", SECTION, flash, &body)
}

pub fn form_page(
    employee: Option<&Employee>,
    values: &RawForm,
    errors: &FormErrors,
    flash: &Flash,
) -> String {
    let (title, action, submit) = match employee {
        Some(t) => ("EDITAR TRABAJADOR", format!("/trabajadores/{}/editar/", t.id), "Actualizar"),
        None => ("AGREGAR TRABAJADOR", "/trabajadores/agregar/".to_string(), "Crear"),
    };
    let fields = [
        form_errors(errors),
        input("Nombre", "nombre", "text", values, errors),
        input("Apellido", "apellido", "text", values, errors),
        input("Correo electrónico", "correo", "email", values, errors),
        input("Cédula", "cedula", "text", values, errors),
        input("Código de empleado", "codigo_empleado", "text", values, errors),
        input("Tipo de trabajador", "tipo_trabajador", "text", values, errors),
        image_input(
            "Imagen del trabajador",
            employee.and_then(|t| t.image.as_deref()),
            errors,
        ),
    ]
    .concat();
    let body = form(&action, true, &fields, submit, "/trabajadores/");
    layout(title, SECTION, flash, &body)
}

pub fn delete_page(employee: &Employee, flash: &Flash) -> String {
    let body = confirm_delete(
        &format!(
            "¿Está seguro de que desea eliminar al trabajador {}?",
            employee.full_name()
        ),
        &format!("/trabajadores/{}/eliminar/", employee.id),
        "/trabajadores/",
    );
    layout("ELIMINAR TRABAJADOR", SECTION, flash, &body)
}
