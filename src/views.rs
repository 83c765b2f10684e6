//! Views — HTML rendered fully from the session on every request.
//!
//! DESIGN
//! ======
//! There is no diffing or partial update: `render` rebuilds the page from
//! state. Exactly one `<section data-screen="...">` is emitted, for the
//! active screen. Buttons carry `data-action` / `data-target` attributes that
//! name the JSON endpoint a client would call; they do not submit anything.

use crate::assistant::AssistantState;
use crate::catalog::{self, AlertStatus, Product, VendorAlert};
use crate::screen::Screen;
use crate::session::{DraftProduct, Session};

#[cfg(test)]
#[path = "views_test.rs"]
mod tests;

const FALLBACK_ITEM_NAME: &str = "Cesta sorpresa";
const FALLBACK_ITEM_PRICE: f64 = 4.99;
const FALLBACK_SHOP_NAME: &str = "Frutería Manolo";
const FALLBACK_SHOP_HOURS: &str = "Hoy, 18:00 - 19:00";

/// Full page: active screen plus the assistant panel when open.
#[must_use]
pub fn render(session: &Session) -> String {
    let mut html = String::from(
        "<!doctype html>\n<html lang=\"es\">\n<head><meta charset=\"utf-8\"><title>Rescata</title></head>\n<body>\n",
    );
    html.push_str(&render_screen(session));
    html.push_str(&render_assistant(session));
    html.push_str("</body>\n</html>\n");
    html
}

/// Markup for the active screen only.
#[must_use]
pub fn render_screen(session: &Session) -> String {
    let screen = session.screen();
    let body = match screen {
        Screen::Login => login(),
        Screen::VendorHome => vendor_home(),
        Screen::AddProduct1 => add_product_step1(session.draft()),
        Screen::AddProduct2 => add_product_step2(session.draft()),
        Screen::ConsumerHome => consumer_home(catalog::products()),
        Screen::ProductDetail => session
            .selected_product()
            .map(product_detail)
            .unwrap_or_default(),
        Screen::Checkout => checkout(session.selected_product()),
        Screen::Payment => payment(session.selected_product()),
        Screen::Success => success(session.selected_product()),
    };
    format!("<section data-screen=\"{}\">\n{body}</section>\n", screen.slug())
}

/// Assistant side panel; empty when closed.
#[must_use]
pub fn render_assistant(session: &Session) -> String {
    if !session.assistant_open() {
        return String::new();
    }
    let inner = match session.assistant() {
        AssistantState::Idle => format!(
            "<p>Select an action for the current screen <strong>({})</strong>:</p>\n{}{}",
            session.screen().slug(),
            button("assistant", Some("script"), "Generate Test Script"),
            button("assistant", Some("analyze"), "Analyze Usability")
        ),
        AssistantState::Pending => "<p class=\"busy\" aria-busy=\"true\">Consulting Gemini...</p>\n".to_string(),
        AssistantState::Resolved { text } => format!(
            "<pre class=\"output\">{}</pre>\n{}",
            escape(text),
            button("assistant_reset", None, "Start Over")
        ),
    };
    format!(
        "<aside data-panel=\"assistant\">\n<h2>UX Testing Assistant</h2>\n{inner}{}</aside>\n",
        button("assistant_close", None, "✕")
    )
}

// =============================================================================
// SCREENS
// =============================================================================

fn login() -> String {
    format!(
        "{}<h1>¡Bienvenido Vendedor!</h1>\n\
         <p>Inicia sesión para gestionar tus productos.</p>\n\
         <label>Correo electrónico o usuario <input type=\"text\" placeholder=\"tu@email.com\"></label>\n\
         <label>Contraseña <input type=\"password\"></label>\n\
         <a>¿Olvidé mi Contraseña?</a>\n{}",
        button("back", Some(Screen::Login.back_target().slug()), "Volver"),
        button("forward", Some(Screen::VendorHome.slug()), "Iniciar Sesión"),
    )
}

fn vendor_home() -> String {
    let expiring: Vec<&VendorAlert> = catalog::vendor_alerts(AlertStatus::ExpiringSoon).collect();
    let expired: Vec<&VendorAlert> = catalog::vendor_alerts(AlertStatus::Expired).collect();
    format!(
        "{}<h1>Alertas de Vencimiento</h1>\n\
         <h2>Vence Pronto ({})</h2>\n<ul>\n{}</ul>\n\
         <h2>Vencido ({})</h2>\n<ul>\n{}</ul>\n{}",
        button("back", Some(Screen::VendorHome.back_target().slug()), "Volver"),
        expiring.len(),
        expiring.iter().map(|a| vendor_alert(a)).collect::<String>(),
        expired.len(),
        expired.iter().map(|a| vendor_alert(a)).collect::<String>(),
        button("forward", Some(Screen::AddProduct1.slug()), "Añadir producto"),
    )
}

fn vendor_alert(alert: &VendorAlert) -> String {
    format!(
        "<li data-alert=\"{}\"><img src=\"{}\" alt=\"{}\"><h3>{}</h3><p>{}</p><span>{}</span></li>\n",
        escape(alert.id),
        escape(alert.image),
        escape(alert.name),
        escape(alert.name),
        escape(alert.category),
        escape(alert.status_label),
    )
}

fn add_product_step1(draft: &DraftProduct) -> String {
    format!(
        "{}<h1>Nuevo Producto</h1>\n<p>Paso 1 de 2 · Información Básica</p>\n\
         <div class=\"upload\">Subir Imagen del Producto</div>\n\
         <label>Nombre del Producto <input type=\"text\" name=\"name\" placeholder=\"Ej: Pan de masa madre fresco\" value=\"{}\"></label>\n\
         <label>Categoría <select name=\"category\" data-value=\"{}\">\
         <option>Selecciona una categoría</option><option>Panadería</option><option>Frutas</option></select></label>\n{}",
        button("back", Some(Screen::AddProduct1.back_target().slug()), "Volver"),
        escape(&draft.name),
        escape(&draft.category),
        button("forward", Some(Screen::AddProduct2.slug()), "Siguiente"),
    )
}

fn add_product_step2(draft: &DraftProduct) -> String {
    format!(
        "{}<h1>Crear Producto (2/2)</h1>\n\
         <label>Cantidad <span>Unidades disponibles</span></label>\n\
         {}<span data-field=\"stock\">{}</span>{}\n\
         <label>Fecha de Vencimiento <input type=\"text\" placeholder=\"Seleccionar fecha\"></label>\n\
         <label>Precio sin descuento <input type=\"number\" name=\"original_price\" value=\"{:.2}\"></label>\n\
         <label>Precio <input type=\"number\" name=\"price\" value=\"{:.2}\"></label>\n{}",
        button("back", Some(Screen::AddProduct2.back_target().slug()), "Volver"),
        button("stock_decrement", None, "-"),
        draft.stock,
        button("stock_increment", None, "+"),
        draft.original_price,
        draft.price,
        button("publish", Some(Screen::VendorHome.slug()), "Publicar Producto"),
    )
}

fn consumer_home(products: &[Product]) -> String {
    let cards: String = products
        .iter()
        .map(|p| {
            format!(
                "<li data-product=\"{}\"><img src=\"{}\" alt=\"{}\"><h3>{}</h3><span>{}</span>\
                 <p>{} {}</p><span class=\"price\">€{:.2}</span><s>€{:.2}</s>{}</li>\n",
                escape(&p.id),
                escape(&p.image),
                escape(&p.name),
                escape(&p.name),
                escape(&p.expiry_label),
                p.stock,
                p.unit_label(),
                p.price,
                p.original_price,
                button("select", Some(&p.id), "Ver detalle"),
            )
        })
        .collect();
    format!(
        "<h1>Cerca de ti</h1>\n{}<h2>Expira pronto</h2>\n<ul>\n{cards}</ul>\n\
         <nav><a>Inicio</a><a>Pedidos</a><a>Mapa</a><a>Perfil</a></nav>\n",
        button("navigate", Some(Screen::Login.slug()), "Perfil"),
    )
}

fn product_detail(product: &Product) -> String {
    format!(
        "{}<img src=\"{}\" alt=\"{}\">\n<h1>{}</h1>\n<p>{}</p>\n\
         <p>Cantidad Disponible: Quedan {} unidades</p>\n\
         <p>Vence: <span data-field=\"expiry\">{}</span></p>\n\
         <p>Precio <span class=\"price\">€{:.2}</span> <s class=\"original-price\">€{:.2}</s> <span>-{}%</span></p>\n{}",
        button("back", Some(Screen::ProductDetail.back_target().slug()), "Volver"),
        escape(&product.image),
        escape(&product.name),
        escape(&product.name),
        escape(&product.description),
        product.stock,
        escape(&product.expiry_label),
        product.price,
        product.original_price,
        product.discount_percent(),
        button("forward", Some(Screen::Checkout.slug()), "Reservar"),
    )
}

fn checkout(selected: Option<&Product>) -> String {
    format!(
        "{}<h1>Confirmar Reserva</h1>\n<p>Datos · Pago</p>\n<h2>Tus Datos</h2>\n\
         <label>Nombre Completo <input type=\"text\" value=\"Ana Torres\"></label>\n\
         <label>Correo Electrónico <input type=\"email\" value=\"ana.torres@email.com\"></label>\n\
         <label>Número de Teléfono <input type=\"tel\" placeholder=\"+34 600 000 000\"></label>\n{}{}",
        button("back", Some(Screen::Checkout.back_target().slug()), "Volver"),
        order_summary(selected),
        button("forward", Some(Screen::Payment.slug()), "Continuar al Pago"),
    )
}

fn payment(selected: Option<&Product>) -> String {
    format!(
        "{}<h1>Pago</h1>\n<p>Datos · Pago</p>\n<h2>Seleccionar Método de Pago</h2>\n\
         <ul><li>Tarjeta de crédito o débito</li><li>PayPal</li><li>Google Pay</li></ul>\n\
         <h2>Número de Tarjeta</h2>\n\
         <input type=\"text\" placeholder=\"0000 0000 0000 0000\">\n\
         <label>Vencimiento <input type=\"text\" placeholder=\"MM/AA\"></label>\n\
         <label>CVC <input type=\"text\" placeholder=\"123\"></label>\n{}{}",
        button("back", Some(Screen::Payment.back_target().slug()), "Volver"),
        order_summary(selected),
        button("forward", Some(Screen::Success.slug()), "Confirmar Pago"),
    )
}

fn success(selected: Option<&Product>) -> String {
    format!(
        "<h1>¡Reserva confirmada!</h1>\n<p>Recoge tu pedido en la tienda dentro del horario indicado.</p>\n{}{}",
        order_summary(selected),
        button("forward", Some(Screen::ConsumerHome.slug()), "Volver al inicio"),
    )
}

fn order_summary(selected: Option<&Product>) -> String {
    let (name, price, shop_name, shop_hours) = match selected {
        Some(p) => (p.name.as_str(), p.price, p.shop_name.as_str(), p.shop_hours.as_str()),
        None => (FALLBACK_ITEM_NAME, FALLBACK_ITEM_PRICE, FALLBACK_SHOP_NAME, FALLBACK_SHOP_HOURS),
    };
    format!(
        "<h2>Resumen del Pedido</h2>\n<div class=\"summary\"><span>{}</span><span>{:.2}€</span>\
         <p>Recogida</p><p>{}</p><p>{}</p></div>\n",
        escape(name),
        price,
        escape(shop_name),
        escape(shop_hours),
    )
}

// =============================================================================
// HELPERS
// =============================================================================

fn button(action: &str, target: Option<&str>, label: &str) -> String {
    match target {
        Some(target) => format!(
            "<button data-action=\"{}\" data-target=\"{}\">{}</button>\n",
            escape(action),
            escape(target),
            escape(label)
        ),
        None => format!("<button data-action=\"{}\">{}</button>\n", escape(action), escape(label)),
    }
}

/// Escape text for HTML element content and double-quoted attributes.
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
