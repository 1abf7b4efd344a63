//! Landing page

use super::{e, layout};
use crate::web::Flash;

const SECTIONS: &[(&str, &str, &str)] = &[
    (
        "/nosotros/",
        "Nosotros",
        "Misión, visión e información de la empresa.",
    ),
    (
        "/productos/",
        "Productos",
        "Catálogo de accesorios con precios e IVA.",
    ),
    (
        "/proveedores/",
        "Proveedores",
        "Proveedores de repuestos y su contacto.",
    ),
    ("/trabajadores/", "Personal", "Trabajadores de la tienda."),
];

pub fn render(flash: &Flash) -> String {
    let cards: String = SECTIONS
        .iter()
        .map(|(href, title, text)| {
            format!(
                r#"<div class="col-md-3 mb-3"><div class="card h-100"><div class="card-body"><h2 class="h5 card-title">{}</h2><p class="card-text">{}</p><a href="{href}" class="btn btn-outline-primary">Ver</a></div></div></div>"#,
                e(title),
                e(text)
            )
        })
        .collect();
    let body = format!(
        r#"<p class="lead">Accesorios para automóviles: llantas, audio, iluminación y más.</p><div class="row">{cards}</div>"#
    );
    layout("CarriAcces - Accesorios para Automóviles", "home", flash, &body)
}
