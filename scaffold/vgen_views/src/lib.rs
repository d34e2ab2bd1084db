//! vgen List-View Scaffolding
//!
//! Generates list views for a described model type: a table with one
//! header row per model property, a per-item row with one cell per
//! property, and Edit/Details/Delete action links. The host options select
//! the page wrapper (partial view, content page, or full standalone page)
//! and the dialect picks the markup flavor.
//!
//! # Modules
//!
//! - [`host`]: caller-populated view options (flags and names)
//! - [`model`]: lazily computed, cached property-name sequence
//! - [`aspx`]: the ASPX dialect of the list template
//! - [`razor`]: the Razor dialect of the list template

pub mod aspx;
pub mod host;
pub mod model;
pub mod razor;

pub use aspx::AspxListTemplate;
pub use host::ViewHost;
pub use model::ModelDescription;
pub use razor::RazorListTemplate;
pub use vgen_emit::{Diagnostic, EmitError, Severity};

/// Markup dialect for the generated view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Web Forms markup (`<%@ Page %>`, `<%: ... %>`).
    Aspx,
    /// Razor markup (`@model`, `@Html...`).
    Razor,
}

/// Generate a complete list view in one pass.
///
/// Convenience wrapper over [`AspxListTemplate`] / [`RazorListTemplate`]
/// for callers that do not need the diagnostics side channel.
pub fn scaffold_list_view(
    host: &ViewHost,
    model: &ModelDescription,
    dialect: Dialect,
) -> Result<String, EmitError> {
    let (output, diagnostics) = match dialect {
        Dialect::Aspx => {
            let mut template = AspxListTemplate::new(host, model);
            let output = template.transform()?;
            (output, template.diagnostics().len())
        }
        Dialect::Razor => {
            let mut template = RazorListTemplate::new(host, model);
            let output = template.transform()?;
            (output, template.diagnostics().len())
        }
    };
    tracing::debug!(
        ?dialect,
        view = %host.view_name,
        properties = model.properties().len(),
        diagnostics,
        bytes = output.len(),
        "scaffolded list view"
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dialects_produce_their_own_markup() {
        let host = ViewHost::new("MyView").model_type("MyApp.MyModel");
        let model = ModelDescription::from_names(["Name"]);

        let aspx = scaffold_list_view(&host, &model, Dialect::Aspx);
        let razor = scaffold_list_view(&host, &model, Dialect::Razor);

        let aspx = aspx.unwrap_or_default();
        let razor = razor.unwrap_or_default();
        assert!(aspx.contains("<%@ Page Language=\"C#\""));
        assert!(razor.starts_with("@model IEnumerable<MyApp.MyModel>"));
        assert_eq!(aspx.matches("LabelFor").count(), 1);
        assert_eq!(razor.matches("LabelFor").count(), 1);
    }
}
