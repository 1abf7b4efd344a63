mod common;

use axum::http::StatusCode;
use carri_server::db::repository::{CompanyDraft, RepoError};
use common::spawn;
use shared::models::CompanyInput;

fn company_fields<'a>(year: &'a str, ruc: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("nombre", "carriacces"),
        ("direccion", "Av. 10 de Agosto N45-12, Quito"),
        ("mision", "Ofrecer accesorios automotrices de calidad a precios justos."),
        ("vision", "Ser la tienda de accesorios de referencia en el país."),
        ("anio_fundacion", year),
        ("ruc", ruc),
    ]
}

#[tokio::test]
async fn test_empty_detail_offers_create_link() {
    let app = spawn().await;
    let res = app.get("/nosotros/").await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Aún no se ha registrado información de la empresa."));
    assert!(res.body.contains("/nosotros/agregar/"));

    assert_eq!(app.get("/nosotros/editar/").await.status, StatusCode::NOT_FOUND);
    assert_eq!(app.get("/nosotros/eliminar/").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_company_is_a_singleton() {
    let app = spawn().await;
    let res = app
        .post_multipart("/nosotros/agregar/", &company_fields("2015", "1792345678001"), None)
        .await;
    assert_eq!(res.status, StatusCode::FOUND);
    assert_eq!(res.location(), "/nosotros/");

    let detail = app.get("/nosotros/").await;
    assert!(detail.body.contains("Carriacces"));
    assert!(detail.body.contains("1792345678001"));

    // The create page now bounces back with a warning
    let again = app.get("/nosotros/agregar/").await;
    assert_eq!(again.status, StatusCode::FOUND);
    assert_eq!(again.location(), "/nosotros/");
    let cookie = again.flash_cookie().expect("warning flash");
    let shown = app.get_with_cookie("/nosotros/", &cookie).await;
    assert!(shown.body.contains("Ya existe información de la empresa registrada."));

    let second = app
        .post_multipart("/nosotros/agregar/", &company_fields("2016", "1792345678002"), None)
        .await;
    assert_eq!(second.status, StatusCode::FOUND);
    let company = app.state.companies().get().await.unwrap().unwrap();
    assert_eq!(company.ruc, "1792345678001");
}

#[tokio::test]
async fn test_storage_rejects_second_row() {
    let app = spawn().await;
    let draft = CompanyDraft {
        input: CompanyInput {
            name: "Carriacces".to_string(),
            address: "Av. 10 de Agosto N45-12, Quito".to_string(),
            mission: "Ofrecer accesorios automotrices de calidad.".to_string(),
            vision: "Ser la tienda de accesorios de referencia.".to_string(),
            founding_year: 2015,
            ruc: "1792345678001".to_string(),
        },
        image: None,
    };
    app.state.companies().create(&draft).await.unwrap();

    let err = app.state.companies().create(&draft).await.unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)));
    assert!(err.is_duplicate_of("company.id"));
}

#[tokio::test]
async fn test_invalid_year_and_ruc() {
    let app = spawn().await;
    let res = app
        .post_multipart("/nosotros/agregar/", &company_fields("2999", "12345"), None)
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("El año de fundación no puede ser mayor al año actual"));
    assert!(res.body.contains("El RUC debe contener exactamente 13 dígitos."));

    let res = app
        .post_multipart("/nosotros/agregar/", &company_fields("1850", "1792345678001"), None)
        .await;
    assert!(res.body.contains("El año de fundación no puede ser anterior a 1900."));

    let res = app
        .post_multipart("/nosotros/agregar/", &company_fields("dos mil", "1792345678001"), None)
        .await;
    assert!(res.body.contains("Introduzca un número entero."));
    assert!(!app.state.companies().exists().await.unwrap());
}

#[tokio::test]
async fn test_edit_then_delete() {
    let app = spawn().await;
    app.post_multipart("/nosotros/agregar/", &company_fields("2015", "1792345678001"), None)
        .await;

    let form = app.get("/nosotros/editar/").await;
    assert_eq!(form.status, StatusCode::OK);
    assert!(form.body.contains("EDITAR INFORMACIÓN DE LA EMPRESA"));

    // Keeping the same RUC is not a conflict with itself
    let res = app
        .post_multipart("/nosotros/editar/", &company_fields("2010", "1792345678001"), None)
        .await;
    assert_eq!(res.status, StatusCode::FOUND);
    let company = app.state.companies().get().await.unwrap().unwrap();
    assert_eq!(company.founding_year, 2010);

    let res = app.post_form("/nosotros/eliminar/", &[]).await;
    assert_eq!(res.status, StatusCode::FOUND);
    assert!(!app.state.companies().exists().await.unwrap());

    // Deleting frees the slot for a new profile
    let res = app
        .post_multipart("/nosotros/agregar/", &company_fields("2020", "1792345678009"), None)
        .await;
    assert_eq!(res.status, StatusCode::FOUND);
    assert!(app.state.companies().exists().await.unwrap());
}
