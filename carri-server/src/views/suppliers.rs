//! Supplier pages

use shared::models::Supplier;

use super::{confirm_delete, e, form, form_errors, input, layout, pagination_nav, textarea};
use crate::forms::{FormErrors, RawForm};
use crate::pagination::Page;
use crate::web::Flash;

const SECTION: &str = "proveedores";

fn card(s: &Supplier) -> String {
    format!(
        r#"<div class="col-md-4 mb-4"><div class="card h-100"><div class="card-body"><h2 class="h5 card-title">{name}</h2><p class="card-text">{description}</p><p class="small mb-1">{contact}</p><p class="small text-muted mb-0">{location}</p></div><div class="card-footer"><a href="/proveedores/{id}/editar/" class="btn btn-sm btn-outline-primary">Editar</a> <a href="/proveedores/{id}/eliminar/" class="btn btn-sm btn-outline-danger">Eliminar</a></div></div></div>"#,
        name = e(&s.name),
        description = e(&s.description),
        contact = e(&s.contact_info()),
        location = e(&s.location_info()),
        id = s.id,
    )
}

pub fn list(page: &Page<Supplier>, flash: &Flash) -> String {
    let content = if page.items.is_empty() {
        r#"<div class="alert alert-info">No hay proveedores registrados.</div>"#.to_string()
    } else {
        let cards: String = page.items.iter().map(card).collect();
        format!(r#"<div class="row">{cards}</div>"#)
    };
    let body = format!(
        r#"<div class="d-flex justify-content-between mb-3"><span>Total de proveedores: <strong>{total}</strong></span><a href="/proveedores/agregar/" class="btn btn-primary">Agregar proveedor</a></div>{content}{nav}"#,
        total = page.pagination.total_count,
        nav = pagination_nav("/proveedores/", &page.pagination),
    );
    layout("NUESTROS PROVEEDORES", SECTION, flash, &body)
}

pub fn form_page(
    supplier: Option<&Supplier>,
    values: &RawForm,
    errors: &FormErrors,
    flash: &Flash,
) -> String {
    let (title, action, submit) = match supplier {
        Some(s) => ("EDITAR PROVEEDOR", format!("/proveedores/{}/editar/", s.id), "Actualizar"),
        None => ("AGREGAR PROVEEDOR", "/proveedores/agregar/".to_string(), "Crear"),
    };
    let fields = [
        form_errors(errors),
        input("Nombre", "nombre", "text", values, errors),
        textarea("Descripción", "descripcion", values, errors),
        input("Teléfono", "telefono", "tel", values, errors),
        input("País", "pais", "text", values, errors),
        input("Correo electrónico", "correo", "email", values, errors),
        textarea("Dirección", "direccion", values, errors),
    ]
    .concat();
    let body = form(&action, false, &fields, submit, "/proveedores/");
    layout(title, SECTION, flash, &body)
}

pub fn delete_page(supplier: &Supplier, flash: &Flash) -> String {
    let body = confirm_delete(
        &format!(
            "¿Está seguro de que desea eliminar el proveedor \"{}\"?",
            supplier.name
        ),
        &format!("/proveedores/{}/eliminar/", supplier.id),
        "/proveedores/",
    );
    layout("ELIMINAR PROVEEDOR", SECTION, flash, &body)
}
