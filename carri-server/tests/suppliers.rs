mod common;

use axum::http::StatusCode;
use carri_server::db::repository::CatalogRepository;
use common::spawn;

fn supplier_fields<'a>(name: &'a str, phone: &'a str, email: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("nombre", name),
        ("descripcion", "Distribuidor de repuestos originales"),
        ("telefono", phone),
        ("pais", "ecuador"),
        ("correo", email),
        ("direccion", "Av. Amazonas N34-120, Quito"),
    ]
}

#[tokio::test]
async fn test_create_normalizes_fields() {
    let app = spawn().await;
    let res = app
        .post_form(
            "/proveedores/agregar/",
            &supplier_fields(
                "autopartes andinas",
                "+593-2-2234567",
                " Ventas@AutopartesAndinas.com ",
            ),
        )
        .await;
    assert_eq!(res.status, StatusCode::FOUND);
    assert_eq!(res.location(), "/proveedores/");

    let supplier = app.state.suppliers().list(10, 0).await.unwrap().remove(0);
    assert_eq!(supplier.name, "Autopartes Andinas");
    assert_eq!(supplier.country, "Ecuador");
    assert_eq!(supplier.email, "ventas@autopartesandinas.com");

    let list = app.get("/proveedores/").await;
    assert!(list.body.contains("NUESTROS PROVEEDORES"));
    assert!(list.body.contains("Autopartes Andinas"));
    assert!(list.body.contains("Total de proveedores: <strong>1</strong>"));
}

#[tokio::test]
async fn test_short_phone_is_rejected() {
    let app = spawn().await;
    let res = app
        .post_form(
            "/proveedores/agregar/",
            &supplier_fields("Repuestos Sur", "123", "sur@repuestos.com"),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(
        res.body.contains("Ingrese un número de teléfono válido.")
            || res.body.contains("El número de teléfono debe tener entre 7 y 15 dígitos.")
    );
    assert_eq!(app.state.suppliers().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_duplicate_name_and_email() {
    let app = spawn().await;
    let first = app
        .post_form(
            "/proveedores/agregar/",
            &supplier_fields("Lubricantes Del Pacifico", "0991234567", "info@lubripacifico.com"),
        )
        .await;
    assert_eq!(first.status, StatusCode::FOUND);

    let same_name = app
        .post_form(
            "/proveedores/agregar/",
            &supplier_fields("LUBRICANTES DEL PACIFICO", "0991234568", "otro@lubripacifico.com"),
        )
        .await;
    assert_eq!(same_name.status, StatusCode::OK);
    assert!(same_name.body.contains("Ya existe un proveedor con este nombre."));

    let same_email = app
        .post_form(
            "/proveedores/agregar/",
            &supplier_fields("Otro Proveedor", "0991234569", "INFO@lubripacifico.com"),
        )
        .await;
    assert_eq!(same_email.status, StatusCode::OK);
    assert!(
        same_email
            .body
            .contains("Ya existe un proveedor con este correo electrónico.")
    );
    assert_eq!(app.state.suppliers().count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_update_and_delete() {
    let app = spawn().await;
    app.post_form(
        "/proveedores/agregar/",
        &supplier_fields("Llantas Express", "022345678", "ventas@llantas.com"),
    )
    .await;
    let supplier = app.state.suppliers().list(10, 0).await.unwrap().remove(0);

    let res = app
        .post_form(
            &format!("/proveedores/{}/editar/", supplier.id),
            &supplier_fields("Llantas Express", "022345679", "ventas@llantas.com"),
        )
        .await;
    assert_eq!(res.status, StatusCode::FOUND);
    let updated = app
        .state
        .suppliers()
        .find_by_id(supplier.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.phone, "022345679");

    let res = app
        .post_form(&format!("/proveedores/{}/eliminar/", supplier.id), &[])
        .await;
    assert_eq!(res.status, StatusCode::FOUND);
    assert_eq!(app.state.suppliers().count().await.unwrap(), 0);
    assert_eq!(
        app.get(&format!("/proveedores/{}/editar/", supplier.id))
            .await
            .status,
        StatusCode::NOT_FOUND
    );
}
