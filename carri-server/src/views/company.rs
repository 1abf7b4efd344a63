//! Company ("Nosotros") pages

use shared::models::Company;
use shared::util::format_millis;

use super::{confirm_delete, e, form, form_errors, image_input, input, layout, media_url, textarea};
use crate::forms::{FormErrors, RawForm};
use crate::web::Flash;

const SECTION: &str = "nosotros";

pub fn detail(company: Option<&Company>, flash: &Flash) -> String {
    let body = match company {
        None => r#"<div class="alert alert-info">Aún no se ha registrado información de la empresa.</div><a href="/nosotros/agregar/" class="btn btn-primary">Agregar información</a>"#.to_string(),
        Some(c) => {
            let logo = if c.has_logo() {
                format!(
                    r#"<img src="{}" alt="{}" class="img-fluid mb-3" style="max-height:160px">"#,
                    media_url(c.image.as_deref().unwrap_or_default()),
                    e(&c.name)
                )
            } else {
                String::new()
            };
            format!(
                r#"{logo}<h2 class="h4">{name}</h2><dl class="row"><dt class="col-sm-3">Dirección</dt><dd class="col-sm-9">{address}</dd><dt class="col-sm-3">Año de fundación</dt><dd class="col-sm-9">{year}</dd><dt class="col-sm-3">RUC</dt><dd class="col-sm-9">{ruc}</dd></dl><h3 class="h5">Misión</h3><p>{mission}</p><h3 class="h5">Visión</h3><p>{vision}</p><p class="small text-muted">Última actualización: {updated}</p><a href="/nosotros/editar/" class="btn btn-primary">Editar</a> <a href="/nosotros/eliminar/" class="btn btn-outline-danger">Eliminar</a>"#,
                name = e(&c.name),
                address = e(&c.address),
                year = c.founding_year,
                ruc = e(&c.ruc),
                mission = e(&c.mission),
                vision = e(&c.vision),
                updated = format_millis(c.updated_at),
            )
        }
    };
    layout("NOSOTROS", SECTION, flash, &body)
}

pub fn form_page(
    company: Option<&Company>,
    values: &RawForm,
    errors: &FormErrors,
    flash: &Flash,
) -> String {
    let (title, action, submit) = match company {
        Some(_) => ("EDITAR INFORMACIÓN DE LA EMPRESA", "/nosotros/editar/", "Actualizar"),
        None => ("AGREGAR INFORMACIÓN DE LA EMPRESA", "/nosotros/agregar/", "Crear"),
    };
    let fields = [
        form_errors(errors),
        input("Nombre", "nombre", "text", values, errors),
        textarea("Dirección", "direccion", values, errors),
        textarea("Misión", "mision", values, errors),
        textarea("Visión", "vision", values, errors),
        input("Año de fundación", "anio_fundacion", "number", values, errors),
        input("RUC", "ruc", "text", values, errors),
        image_input(
            "Logo de la empresa",
            company.and_then(|c| c.image.as_deref()),
            errors,
        ),
    ]
    .concat();
    let body = form(action, true, &fields, submit, "/nosotros/");
    layout(title, SECTION, flash, &body)
}

pub fn delete_page(company: &Company, flash: &Flash) -> String {
    let body = confirm_delete(
        &format!(
            "¿Está seguro de que desea eliminar la información de {}?",
            company.name
        ),
        "/nosotros/eliminar/",
        "/nosotros/",
    );
    layout("ELIMINAR INFORMACIÓN DE LA EMPRESA", SECTION, flash, &body)
}
