//! The web application architecture diagram.
//!
//! Client pages depend on shared components, models and API fetchers; the
//! server routes requests through services to models, which persist to the
//! storage tier.

use schematic::{category::Category, semantic::Scope};

/// Title of the diagram, which also names the output file.
pub const TITLE: &str = "Architecture";

/// Declares the architecture diagram into `root`.
pub fn describe(root: &mut Scope<'_>) {
    let storages = root.nodes(["MariaDB", "Redis"], Category::Datastore);

    let index = root.cluster("Client", |client| {
        let index = client.node("index.html", Category::Frontend);

        let pages = client.cluster("Pages", |pages| {
            let app = pages.node("App.tsx", Category::Frontend);
            let children = pages.nodes(["timeline", "post"], Category::Frontend);
            pages.link_out(app, children.iter().copied());
            pages.connect(index, app);
            children
        });

        client.cluster("Components", |components| {
            let components_index = components.node("index.ts", Category::Frontend);
            let widgets = components.nodes(["TextField", "Section"], Category::Frontend);
            components.link_out(components_index, widgets);
            components.fan_in(pages.iter().copied(), components_index);
        });

        let models_index = client.cluster("Models", |models| {
            let models_index = models.node("index.ts", Category::Frontend);
            let entries = models.nodes(["post", "session"], Category::Frontend);
            models.link_out(models_index, entries);
            models_index
        });

        let fetchers = client.cluster("API Fetchers", |fetchers| {
            fetchers.nodes(["fetcher", "user", "post"], Category::Frontend)
        });

        client.connect_all(&pages, &fetchers);
        client.fan_in(pages.iter().copied(), models_index);

        index
    });

    let (main, models) = root.cluster("Server", |server| {
        let main = server.node("main.rs", Category::Backend);

        let routes = server.cluster("Routes", |routes| {
            let handlers = routes.nodes(["route", "user", "post"], Category::Backend);
            routes.fan_out(main, handlers.iter().copied());
            handlers
        });

        let services = server.cluster("Services", |services| {
            let handlers = services.nodes(["service", "user", "post"], Category::Backend);
            services.zip(&routes, &handlers);
            handlers
        });

        let models = server.cluster("Models", |models| {
            let entities = models.nodes(["model", "user", "post"], Category::Backend);
            models.connect_all(&services, &entities);
            entities
        });

        (main, models)
    });

    root.connect_all(&models, &storages);
    root.connect(index, main);
}
