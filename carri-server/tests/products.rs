mod common;

use axum::http::StatusCode;
use carri_server::db::repository::CatalogRepository;
use common::{png_bytes, png_colored, product_fields, spawn};

#[tokio::test]
async fn test_empty_list() {
    let app = spawn().await;
    let res = app.get("/productos/").await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("NUESTROS PRODUCTOS"));
    assert!(res.body.contains("Total de productos: <strong>0</strong>"));
    assert!(res.body.contains("No hay productos registrados."));
}

#[tokio::test]
async fn test_create_redirects_with_flash() {
    let app = spawn().await;
    let res = app
        .post_multipart(
            "/productos/agregar/",
            &product_fields("  aceite castrol gtx ", "25.50"),
            None,
        )
        .await;
    assert_eq!(res.status, StatusCode::FOUND);
    assert_eq!(res.location(), "/productos/");

    let cookie = res.flash_cookie().expect("flash cookie");
    let list = app.get_with_cookie("/productos/", &cookie).await;
    assert_eq!(list.status, StatusCode::OK);
    assert!(list.body.contains("ha sido creado exitosamente."));
    assert!(list.body.contains("Aceite Castrol Gtx"));
    assert!(list.body.contains("$25.50"));
    assert!(list.body.contains("$29.32"));
    assert!(list.body.contains("15% IVA"));
    assert!(list.body.contains("Total de productos: <strong>1</strong>"));
}

#[tokio::test]
async fn test_duplicate_name_is_case_insensitive() {
    let app = spawn().await;
    let first = app
        .post_multipart("/productos/agregar/", &product_fields("Filtro De Aire", "10"), None)
        .await;
    assert_eq!(first.status, StatusCode::FOUND);

    let second = app
        .post_multipart("/productos/agregar/", &product_fields("FILTRO DE AIRE", "12"), None)
        .await;
    assert_eq!(second.status, StatusCode::OK);
    assert!(second.body.contains("Ya existe un producto con este nombre."));
    assert!(second.body.contains("Por favor corrija los errores en el formulario."));
    assert_eq!(app.state.products().count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_edit_keeps_own_name() {
    let app = spawn().await;
    app.post_multipart("/productos/agregar/", &product_fields("Tapete Universal", "30"), None)
        .await;
    let product = app.state.products().list(10, 0).await.unwrap().remove(0);

    let form = app.get(&format!("/productos/{}/editar/", product.id)).await;
    assert_eq!(form.status, StatusCode::OK);
    assert!(form.body.contains("EDITAR PRODUCTO"));
    assert!(form.body.contains("Tapete Universal"));

    let res = app
        .post_multipart(
            &format!("/productos/{}/editar/", product.id),
            &product_fields("Tapete Universal", "35.00"),
            None,
        )
        .await;
    assert_eq!(res.status, StatusCode::FOUND);

    let updated = app
        .state
        .products()
        .find_by_id(product.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.price_cents, 3500);
}

#[tokio::test]
async fn test_invalid_fields_rerender_form() {
    let app = spawn().await;
    let res = app
        .post_multipart(
            "/productos/agregar/",
            &[
                ("nombre", "ab"),
                ("descripcion", "corta"),
                ("precio", "12.345"),
                ("iva", "7"),
            ],
            None,
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("El nombre del producto debe tener entre 3 y 200 caracteres."));
    assert!(res.body.contains("al menos 10 caracteres"));
    assert!(res.body.contains("Escoja una opción válida."));

    let missing = app
        .post_multipart("/productos/agregar/", &[("nombre", "Aceite")], None)
        .await;
    assert_eq!(missing.status, StatusCode::OK);
    assert!(missing.body.contains("Este campo es obligatorio."));
    assert_eq!(app.state.products().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_image_upload_is_stored_and_replaced() {
    let app = spawn().await;
    let png = png_bytes();
    let res = app
        .post_multipart(
            "/productos/agregar/",
            &product_fields("Cubre Volante", "15"),
            Some(("volante.png", "image/png", &png)),
        )
        .await;
    assert_eq!(res.status, StatusCode::FOUND);

    let product = app.state.products().list(10, 0).await.unwrap().remove(0);
    let first_image = product.image.clone().expect("stored image");
    assert!(first_image.starts_with("productos/"));
    assert!(first_image.ends_with("_volante.png"));
    assert!(app.state.media.path_of(&first_image).exists());

    let served = app.get(&format!("/media/{first_image}")).await;
    assert_eq!(served.status, StatusCode::OK);

    // A different file replaces the stored one
    let other = png_colored([10, 90, 200]);
    let res = app
        .post_multipart(
            &format!("/productos/{}/editar/", product.id),
            &product_fields("Cubre Volante", "15"),
            Some(("nuevo.png", "image/png", &other)),
        )
        .await;
    assert_eq!(res.status, StatusCode::FOUND);
    let updated = app
        .state
        .products()
        .find_by_id(product.id)
        .await
        .unwrap()
        .unwrap();
    let second_image = updated.image.expect("replaced image");
    assert_ne!(second_image, first_image);
    assert!(!app.state.media.path_of(&first_image).exists());
    assert!(app.state.media.path_of(&second_image).exists());
}

#[tokio::test]
async fn test_rejected_image_type() {
    let app = spawn().await;
    let res = app
        .post_multipart(
            "/productos/agregar/",
            &product_fields("Cubre Asientos", "40"),
            Some(("documento.pdf", "application/pdf", b"%PDF-1.4".as_slice())),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Tipo de archivo no permitido."));
    assert_eq!(app.state.products().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_flow() {
    let app = spawn().await;
    app.post_multipart("/productos/agregar/", &product_fields("Porta Vasos", "5"), None)
        .await;
    let product = app.state.products().list(10, 0).await.unwrap().remove(0);

    let confirm = app.get(&format!("/productos/{}/eliminar/", product.id)).await;
    assert_eq!(confirm.status, StatusCode::OK);
    assert!(confirm.body.contains("ELIMINAR PRODUCTO"));

    let res = app
        .post_form(&format!("/productos/{}/eliminar/", product.id), &[])
        .await;
    assert_eq!(res.status, StatusCode::FOUND);
    assert_eq!(res.location(), "/productos/");
    assert_eq!(app.state.products().count().await.unwrap(), 0);

    let again = app
        .post_form(&format!("/productos/{}/eliminar/", product.id), &[])
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let app = spawn().await;
    assert_eq!(app.get("/productos/999/editar/").await.status, StatusCode::NOT_FOUND);
    assert_eq!(app.get("/productos/abc/editar/").await.status, StatusCode::NOT_FOUND);
    assert_eq!(app.get("/productos/999/eliminar/").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_shared_upload_survives_other_delete() {
    let app = spawn().await;
    let png = png_bytes();
    for name in ["Producto Uno", "Producto Dos"] {
        let res = app
            .post_multipart(
                "/productos/agregar/",
                &product_fields(name, "12"),
                Some(("foto.png", "image/png", &png)),
            )
            .await;
        assert_eq!(res.status, StatusCode::FOUND);
    }
    let products = app.state.products().list(10, 0).await.unwrap();
    assert_eq!(products[0].image, products[1].image);
    let shared_path = products[0].image.clone().unwrap();

    let res = app
        .post_form(&format!("/productos/{}/eliminar/", products[1].id), &[])
        .await;
    assert_eq!(res.status, StatusCode::FOUND);
    assert!(app.state.media.path_of(&shared_path).exists());

    // Once the last row is gone the file goes too
    app.post_form(&format!("/productos/{}/eliminar/", products[0].id), &[])
        .await;
    assert!(!app.state.media.path_of(&shared_path).exists());
}

#[tokio::test]
async fn test_shared_upload_survives_other_replace() {
    let app = spawn().await;
    let png = png_bytes();
    for name in ["Funda Asiento", "Funda Volante"] {
        app.post_multipart(
            "/productos/agregar/",
            &product_fields(name, "20"),
            Some(("funda.png", "image/png", &png)),
        )
        .await;
    }
    let products = app.state.products().list(10, 0).await.unwrap();
    let shared_path = products[0].image.clone().unwrap();

    let other = png_colored([0, 160, 60]);
    let res = app
        .post_multipart(
            &format!("/productos/{}/editar/", products[0].id),
            &product_fields(&products[0].name, "20"),
            Some(("nueva.png", "image/png", &other)),
        )
        .await;
    assert_eq!(res.status, StatusCode::FOUND);
    assert!(app.state.media.path_of(&shared_path).exists());
}

#[tokio::test]
async fn test_price_with_three_decimals_is_rejected() {
    let app = spawn().await;
    let res = app
        .post_multipart("/productos/agregar/", &product_fields("Alfombra Goma", "10.500"), None)
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("El precio no puede tener más de 2 decimales."));
    assert_eq!(app.state.products().count().await.unwrap(), 0);
}
