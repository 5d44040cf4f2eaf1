// Leptos web application server
//
// This binary starts the web server with:
// - Actix-web for HTTP serving
// - Leptos for SSR (server-side rendering)
// - The product catalog, loaded once at startup
// - Static file serving

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use anyhow::Context;
    use filterable_product_table::web_app::app::App as WebApp;
    use filterable_product_table::web_app::catalog::{embed_catalog, CATALOG_ELEMENT_ID};
    use filterable_product_table::web_app::config::ServerConfig;
    use leptos::prelude::*;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use leptos_meta::MetaTags;
    use tracing_subscriber::EnvFilter;

    // Load .env and environment variables before logging is set up
    let config = ServerConfig::from_env();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load the catalog
    let products = config
        .load_products()
        .with_context(|| format!("failed to load catalog from {}", config.catalog_source()))?;

    tracing::info!("Serving {} products from {}", products.len(), config.catalog_source());

    // The client hydrates from this copy of the catalog
    let embedded_catalog = embed_catalog(&products).context("failed to serialize catalog")?;

    // Leptos configuration
    let conf = leptos_config::get_configuration(None).context("could not read configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    tracing::info!("Starting server at http://{}", addr);

    HttpServer::new(move || {
        // Generate the list of routes in the Leptos App
        let route_products = products.clone();
        let routes = generate_route_list(move || view! { <WebApp products=route_products.clone() /> });
        let leptos_options_inner = leptos_options.clone();
        let site_root_str = site_root.clone().to_string();
        let shell_products = products.clone();
        let embedded_catalog = embedded_catalog.clone();

        App::new()
            // Serve JS/WASM/CSS from pkg directory
            .service(Files::new("/pkg", format!("{site_root_str}/pkg")))
            // Leptos routes for SSR with proper shell
            .leptos_routes(routes, {
                let leptos_options = leptos_options_inner.clone();
                move || {
                    let products = shell_products.clone();
                    let embedded_catalog = embedded_catalog.clone();
                    view! {
                        <!DOCTYPE html>
                        <html lang="en">
                            <head>
                                <meta charset="utf-8"/>
                                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                                <AutoReload options=leptos_options.clone() />
                                <HydrationScripts options=leptos_options.clone()/>
                                <script type="application/json" id=CATALOG_ELEMENT_ID inner_html=embedded_catalog></script>
                                <MetaTags/>
                            </head>
                            <body>
                                <WebApp products=products/>
                            </body>
                        </html>
                    }
                }
            })
            .app_data(web::Data::new(leptos_options_inner.clone()))
    })
    .bind(&addr)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    panic!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
}
