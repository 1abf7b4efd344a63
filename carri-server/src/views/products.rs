//! Product pages

use shared::models::Product;
use shared::money::TaxRate;

use super::{confirm_delete, e, form, form_errors, image_input, input, layout, media_url, pagination_nav, select, textarea};
use crate::forms::{FormErrors, RawForm};
use crate::pagination::Page;
use crate::web::Flash;

const SECTION: &str = "productos";

fn card(p: &Product) -> String {
    let image = if p.has_image() {
        format!(
            r#"<img src="{}" class="card-img-top" alt="{}">"#,
            media_url(p.image.as_deref().unwrap_or_default()),
            e(&p.name)
        )
    } else {
        String::new()
    };
    format!(
        r#"<div class="col-md-4 mb-4"><div class="card h-100">{image}<div class="card-body"><h2 class="h5 card-title">{name}</h2><p class="card-text">{description}</p><p class="mb-1">Precio: <strong>{price}</strong> <span class="badge bg-secondary">{tax}</span></p><p class="mb-0 text-muted">Con IVA: {with_tax}</p></div><div class="card-footer"><a href="/productos/{id}/editar/" class="btn btn-sm btn-outline-primary">Editar</a> <a href="/productos/{id}/eliminar/" class="btn btn-sm btn-outline-danger">Eliminar</a></div></div></div>"#,
        name = e(&p.name),
        description = e(&p.description),
        price = p.price_display(),
        tax = e(&p.tax_label()),
        with_tax = p.price_with_tax_display(),
        id = p.id,
    )
}

pub fn list(page: &Page<Product>, flash: &Flash) -> String {
    let content = if page.items.is_empty() {
        r#"<div class="alert alert-info">No hay productos registrados.</div>"#.to_string()
    } else {
        let cards: String = page.items.iter().map(card).collect();
        format!(r#"<div class="row">{cards}</div>"#)
    };
    let body = format!(
        r#"<div class="d-flex justify-content-between mb-3"><span>Total de productos: <strong>{total}</strong></span><a href="/productos/agregar/" class="btn btn-primary">Agregar producto</a></div>{content}{nav}"#,
        total = page.pagination.total_count,
        nav = pagination_nav("/productos/", &page.pagination),
    );
    layout("NUESTROS PRODUCTOS", SECTION, flash, &body)
}

fn tax_options() -> Vec<(String, String)> {
    TaxRate::ALL
        .iter()
        .map(|rate| (i64::from(*rate).to_string(), rate.label()))
        .collect()
}

/// Create form when `product` is `None`, edit form otherwise
pub fn form_page(
    product: Option<&Product>,
    values: &RawForm,
    errors: &FormErrors,
    flash: &Flash,
) -> String {
    let (title, action, submit) = match product {
        Some(p) => ("EDITAR PRODUCTO", format!("/productos/{}/editar/", p.id), "Actualizar"),
        None => ("AGREGAR PRODUCTO", "/productos/agregar/".to_string(), "Crear"),
    };
    let fields = [
        form_errors(errors),
        input("Nombre", "nombre", "text", values, errors),
        textarea("Descripción", "descripcion", values, errors),
        input("Precio", "precio", "number", values, errors),
        select("IVA", "iva", &tax_options(), values, errors),
        image_input(
            "Imagen del producto",
            product.and_then(|p| p.image.as_deref()),
            errors,
        ),
    ]
    .concat();
    let body = form(&action, true, &fields, submit, "/productos/");
    layout(title, SECTION, flash, &body)
}

pub fn delete_page(product: &Product, flash: &Flash) -> String {
    let body = confirm_delete(
        &format!(
            "¿Está seguro de que desea eliminar el producto \"{}\"?",
            product.name
        ),
        &format!("/productos/{}/eliminar/", product.id),
        "/productos/",
    );
    layout("ELIMINAR PRODUCTO", SECTION, flash, &body)
}
