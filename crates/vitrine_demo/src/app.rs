//! Demo run logic: build the page, mount the module, deliver clicks, render.

use anyhow::Context;
use tracing::info;
use vitrine::event::ClickMsg;
use vitrine::module::Registry;
use vitrine::showcase::Showcase;

use crate::config::Config;
use crate::page;
use crate::report::Report;

/// Runs the demo and returns the rendered card plus the final state report.
///
/// # Errors
///
/// Returns an error if the mounted module cannot be found back in the
/// registry, which would mean the registration contract is broken.
pub fn run(config: &Config) -> anyhow::Result<(String, Report)> {
    let mut page = page::build(config);

    let mut registry = Registry::new();
    Showcase::mount(&mut page.doc, page.card, &mut registry);

    let mut handled = 0;
    for _ in 0..config.clicks {
        if registry.dispatch_click(&mut page.doc, ClickMsg::new(page.button)) {
            handled += 1;
        }
    }
    info!(requested = config.clicks, handled, "click simulation done");

    let module = registry
        .get(page.card)
        .context("mounted showcase missing from registry")?;

    let view = if config.use_color() {
        module.view_styled(&page.doc)
    } else {
        module.view(&page.doc)
    };

    let report = Report {
        clicks_requested: config.clicks,
        clicks_handled: handled,
        italic: module.is_title_italic(),
    };

    Ok((view, report))
}
