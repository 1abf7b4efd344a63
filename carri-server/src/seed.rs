//! Demo data
//!
//! Seeds the catalogs through the same form pipeline the web handlers use,
//! so seeded rows are normalized and validated exactly like user input.
//! Records are created without images.

use shared::error::{AppError, AppResult};
use shared::models::{Employee, Product};

use crate::core::ServerState;
use crate::db::repository::{
    CatalogRepository, CompanyDraft, EmployeeDraft, ProductDraft,
};
use crate::forms::{self, FormErrors, RawForm};
use crate::services::MediaStore;

/// What to seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SeedTarget {
    Products,
    Suppliers,
    Employees,
    Company,
    All,
}

impl SeedTarget {
    pub fn label(&self) -> &'static str {
        match self {
            SeedTarget::Products => "products",
            SeedTarget::Suppliers => "suppliers",
            SeedTarget::Employees => "employees",
            SeedTarget::Company => "company",
            SeedTarget::All => "all",
        }
    }
}

/// Outcome of seeding one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub target: SeedTarget,
    /// Rows removed by `--clear`
    pub cleared: u64,
    /// Display names of the created rows
    pub created: Vec<String>,
    /// True when the table already had data and was left untouched
    pub skipped: bool,
}

impl SeedReport {
    fn new(target: SeedTarget) -> Self {
        Self {
            target,
            cleared: 0,
            created: Vec::new(),
            skipped: false,
        }
    }
}

const PRODUCTS: &[[&str; 4]] = &[
    [
        "Llantas Deportivas Aleación",
        "Llantas deportivas de aleación de 17 pulgadas, diseño moderno con acabado negro mate. Perfectas para mejorar el rendimiento y la estética de tu vehículo. Compatible con la mayoría de automóviles compactos y sedanes.",
        "450.00",
        "15",
    ],
    [
        "Sistema Audio Premium",
        "Sistema de audio premium con tecnología Bluetooth 5.0, sonido surround y ecualizador digital. Incluye amplificador de 4 canales y subwoofer integrado. Fácil instalación con kit completo incluido.",
        "320.75",
        "15",
    ],
    [
        "Kit Iluminación LED Interior",
        "Kit completo de iluminación LED para interior del vehículo. Incluye tiras LED RGB multicolor con control remoto, instalación plug-and-play. Crea ambiente personalizado con 16 millones de colores disponibles.",
        "89.99",
        "0",
    ],
];

const SUPPLIERS: &[[&str; 6]] = &[
    [
        "AutoPartes Colombia S.A.S.",
        "Empresa líder en la distribución de autopartes y accesorios automotrices en Colombia. Especializada en sistemas de audio, llantas deportivas y componentes electrónicos para vehículos. Más de 15 años de experiencia en el mercado latinoamericano.",
        "+57 1 4567890",
        "Colombia",
        "ventas@autopartescolombia.com",
        "Carrera 15 #85-32, Zona Industrial, Bogotá D.C.",
    ],
    [
        "TecnoAuto Argentina",
        "Proveedor especializado en tecnología automotriz y sistemas de iluminación LED para vehículos. Distribuidor oficial de marcas reconocidas internacionalmente. Ofrecemos productos de alta calidad con garantía extendida y soporte técnico especializado.",
        "+54 11 9876543",
        "Argentina",
        "contacto@tecnoautoarg.com.ar",
        "Av. Córdoba 1234, Villa Crespo, Buenos Aires (C1414)",
    ],
    [
        "AutoSupply Brasil Ltda.",
        "Importadora y distribuidora de accesorios automotrices premium. Especialistas en sistemas de audio de alta fidelidad, llantas deportivas y accesorios de tuning. Atendemos todo el territorio brasileño con envíos express.",
        "+55 11 3456789",
        "Brasil",
        "comercial@autosupplybr.com.br",
        "Rua das Indústrias, 567 - Vila Leopoldina, São Paulo - SP, 05307-020",
    ],
    [
        "Motortech Chile Spa",
        "Empresa chilena especializada en tecnología automotriz avanzada y componentes de alta performance. Distribuidor exclusivo de sistemas de suspensión deportiva y productos de tuning para el mercado sudamericano.",
        "+56 2 9876543",
        "Chile",
        "ventas@motortechchile.cl",
        "Av. Providencia 2250, Providencia, Santiago - Región Metropolitana",
    ],
    [
        "Auto Repuestos Peru SAC",
        "Líder en distribución de repuestos y accesorios automotrices en Perú. Especializado en partes eléctricas, sistemas de encendido y componentes de motor. Red de distribución nacional con más de 20 años de experiencia.",
        "+51 1 7654321",
        "Perú",
        "info@autorepuestosperu.pe",
        "Jr. Puno 1456, La Victoria, Lima 13 - Lima",
    ],
    [
        "VehiParts Ecuador Cía. Ltda.",
        "Importadora ecuatoriana de autopartes originales y aftermarket. Especializada en sistemas de frenos, transmisión y dirección. Proveedor confiable para talleres y distribuidores en Ecuador y países vecinos.",
        "+593 2 3456789",
        "Ecuador",
        "comercial@vehipartsec.com",
        "Av. 6 de Diciembre N24-253 y Bello Horizonte, Quito - Pichincha",
    ],
];

/// first name, last name, email, cédula, code, type
const EMPLOYEES: &[[&str; 6]] = &[
    ["María José", "Pérez Andrade", "mperez@carriacces.com", "1712345678", "EMP-001", "Gerente"],
    ["Carlos Andrés", "Villacís Mora", "cvillacis@carriacces.com", "1723456789", "EMP-002", "Vendedor"],
    ["Ana Lucía", "Torres Salazar", "atorres@carriacces.com", "0912345678", "EMP-003", "Técnico Instalador"],
    ["Diego", "Ramírez Cevallos", "dramirez@carriacces.com", "1109876543", "EMP-004", "Bodeguero"],
];

const COMPANY: [(&str, &str); 6] = [
    ("nombre", "CarriAcces Cía. Ltda."),
    ("direccion", "Av. 10 de Agosto N25-45 y Luis Cordero, Quito - Pichincha"),
    (
        "mision",
        "Ofrecer accesorios automotrices de calidad a precios justos, con asesoría honesta e instalación profesional para cada cliente.",
    ),
    (
        "vision",
        "Ser la tienda de accesorios para automóviles de referencia en Ecuador, reconocida por su servicio y la confianza de sus clientes.",
    ),
    ("anio_fundacion", "2015"),
    ("ruc", "1792345678001"),
];

fn rejected(name: &str, errors: &FormErrors) -> AppError {
    AppError::validation(format!("Seed record \"{name}\" was rejected: {errors:?}"))
}

/// Delete every row of a catalog, then the files its rows referenced
async fn clear_catalog<R: CatalogRepository>(
    repo: &R,
    media: &MediaStore,
    image_of: fn(&R::Entity) -> Option<String>,
) -> AppResult<u64> {
    let total = repo.count().await?;
    let rows = repo.list(total.max(1), 0).await?;
    let removed = repo.delete_all().await?;
    for path in rows.iter().filter_map(image_of) {
        media.remove(&path).await;
    }
    Ok(removed)
}

/// Shared clear/skip policy. Returns `false` when seeding should stop.
async fn prepare<R: CatalogRepository>(
    repo: &R,
    media: &MediaStore,
    clear: bool,
    image_of: fn(&R::Entity) -> Option<String>,
    report: &mut SeedReport,
) -> AppResult<bool> {
    if clear {
        report.cleared = clear_catalog(repo, media, image_of).await?;
        tracing::warn!(table = report.target.label(), removed = report.cleared, "Existing rows cleared");
    } else if repo.count().await? > 0 {
        tracing::warn!(
            table = report.target.label(),
            "Table already has data, use --clear to replace it"
        );
        report.skipped = true;
        return Ok(false);
    }
    Ok(true)
}

pub async fn seed_products(state: &ServerState, clear: bool) -> AppResult<SeedReport> {
    let repo = state.products();
    let mut report = SeedReport::new(SeedTarget::Products);
    let image_of: fn(&Product) -> Option<String> = |p| p.image.clone();
    if !prepare(&repo, &state.media, clear, image_of, &mut report).await? {
        return Ok(report);
    }

    for [name, description, price, tax] in PRODUCTS {
        let raw = RawForm::from_pairs([
            ("nombre", *name),
            ("descripcion", *description),
            ("precio", *price),
            ("iva", *tax),
        ]);
        let cleaned = forms::product::clean(state, &raw, None)
            .await?
            .map_err(|errors| rejected(name, &errors))?;
        let product = repo
            .create(&ProductDraft {
                input: cleaned.input,
                image: None,
            })
            .await?;
        tracing::info!(product_id = product.id, "Seeded product {}", product.price_display());
        report.created.push(product.name);
    }
    Ok(report)
}

pub async fn seed_suppliers(state: &ServerState, clear: bool) -> AppResult<SeedReport> {
    let repo = state.suppliers();
    let mut report = SeedReport::new(SeedTarget::Suppliers);
    if !prepare(&repo, &state.media, clear, |_| None, &mut report).await? {
        return Ok(report);
    }

    for [name, description, phone, country, email, address] in SUPPLIERS {
        let raw = RawForm::from_pairs([
            ("nombre", *name),
            ("descripcion", *description),
            ("telefono", *phone),
            ("pais", *country),
            ("correo", *email),
            ("direccion", *address),
        ]);
        let input = forms::supplier::clean(state, &raw, None)
            .await?
            .map_err(|errors| rejected(name, &errors))?;
        let supplier = repo.create(&input).await?;
        tracing::info!(supplier_id = supplier.id, country = %supplier.country, "Seeded supplier");
        report.created.push(supplier.name);
    }
    Ok(report)
}

pub async fn seed_employees(state: &ServerState, clear: bool) -> AppResult<SeedReport> {
    let repo = state.employees();
    let mut report = SeedReport::new(SeedTarget::Employees);
    let image_of: fn(&Employee) -> Option<String> = |e| e.image.clone();
    if !prepare(&repo, &state.media, clear, image_of, &mut report).await? {
        return Ok(report);
    }

    for [first, last, email, cedula, code, kind] in EMPLOYEES {
        let raw = RawForm::from_pairs([
            ("nombre", *first),
            ("apellido", *last),
            ("correo", *email),
            ("cedula", *cedula),
            ("codigo_empleado", *code),
            ("tipo_trabajador", *kind),
        ]);
        let cleaned = forms::employee::clean(state, &raw, None)
            .await?
            .map_err(|errors| rejected(code, &errors))?;
        let employee = repo
            .create(&EmployeeDraft {
                input: cleaned.input,
                image: None,
            })
            .await?;
        tracing::info!(employee_id = employee.id, "Seeded employee");
        report.created.push(employee.full_name());
    }
    Ok(report)
}

pub async fn seed_company(state: &ServerState, clear: bool) -> AppResult<SeedReport> {
    let repo = state.companies();
    let mut report = SeedReport::new(SeedTarget::Company);

    if clear {
        if let Some(old) = repo.delete().await? {
            if let Some(path) = old.image.as_deref() {
                state.media.remove(path).await;
            }
            report.cleared = 1;
        }
    } else if repo.exists().await? {
        tracing::warn!("Company already registered, use --clear to replace it");
        report.skipped = true;
        return Ok(report);
    }

    let raw = RawForm::from_pairs(COMPANY);
    let cleaned = forms::company::clean(state, &raw, false)
        .await?
        .map_err(|errors| rejected(COMPANY[0].1, &errors))?;
    let company = repo
        .create(&CompanyDraft {
            input: cleaned.input,
            image: None,
        })
        .await?;
    tracing::info!(ruc = %company.ruc, "Seeded company");
    report.created.push(company.name);
    Ok(report)
}

/// Seed one table, or every table for [`SeedTarget::All`]
pub async fn run(state: &ServerState, target: SeedTarget, clear: bool) -> AppResult<Vec<SeedReport>> {
    let reports = match target {
        SeedTarget::Products => vec![seed_products(state, clear).await?],
        SeedTarget::Suppliers => vec![seed_suppliers(state, clear).await?],
        SeedTarget::Employees => vec![seed_employees(state, clear).await?],
        SeedTarget::Company => vec![seed_company(state, clear).await?],
        SeedTarget::All => vec![
            seed_company(state, clear).await?,
            seed_products(state, clear).await?,
            seed_suppliers(state, clear).await?,
            seed_employees(state, clear).await?,
        ],
    };
    Ok(reports)
}
