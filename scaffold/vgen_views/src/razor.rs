//! Razor list-view template.
//!
//! Same shape as the ASPX dialect — model directive, optional page
//! wrapper, table with per-property header rows and per-item cells — but
//! emitted in Razor syntax. A Razor content page carries no indent scope of
//! its own; only the full standalone page indents its body.

use vgen_emit::{Diagnostic, EmitError, TemplateEmitter, ValueFormatter};

use crate::host::ViewHost;
use crate::model::ModelDescription;

/// Template for the Razor dialect of the list view.
pub struct RazorListTemplate<'a> {
    host: &'a ViewHost,
    model: &'a ModelDescription,
    out: TemplateEmitter,
    values: ValueFormatter,
}

impl<'a> RazorListTemplate<'a> {
    /// Create a template over the given host options and model.
    pub fn new(host: &'a ViewHost, model: &'a ModelDescription) -> Self {
        RazorListTemplate {
            host,
            model,
            out: TemplateEmitter::new(),
            values: ValueFormatter::new(),
        }
    }

    /// The `@model` directive for a known model type, empty otherwise.
    pub fn model_directive(&self) -> String {
        match self.host.view_data_type_name.as_deref() {
            Some(name) if !name.is_empty() => format!("@model IEnumerable<{name}>"),
            _ => String::new(),
        }
    }

    /// Diagnostics recorded by the last generation run.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.out.diagnostics()
    }

    /// Run one generation pass and return the view markup.
    pub fn transform(&mut self) -> Result<String, EmitError> {
        self.out.reset();
        if self.host.view_data_type_name.is_none() {
            self.out
                .warning("no model type name; omitting the @model directive");
        }

        let directive = self.model_directive();
        self.write_value(Some(directive.as_str()))?;
        self.out.write("\n\n");

        self.write_wrapper_head()?;
        self.write_table_body()?;
        self.write_wrapper_tail();

        Ok(self.out.as_str().to_owned())
    }

    fn write_wrapper_head(&mut self) -> Result<(), EmitError> {
        if self.host.is_partial_view {
            // Partial views carry no wrapper at all.
        } else if self.host.is_content_page {
            self.out.write("@{\n\tViewBag.Title = \"");
            self.write_value(Some(self.host.view_name.as_str()))?;
            self.out.write("\";\n\tLayout = \"");
            self.write_value(self.host.master_page_file.as_deref())?;
            self.out.write("\";\n}\n\n<h2>");
            self.write_value(Some(self.host.view_name.as_str()))?;
            self.out.write("</h2>\n\n");
        } else {
            self.out
                .write("<!DOCTYPE html>\n<html>\n\t<head runat=\"server\">\n\t\t<title>");
            self.write_value(Some(self.host.view_name.as_str()))?;
            self.out.write("</title>\n\t</head>\n\t<body>\n");
            self.out.push_indent("\t\t");
        }
        Ok(())
    }

    fn write_table_body(&mut self) -> Result<(), EmitError> {
        self.out
            .write("<p>\n\t@Html.ActionLink(\"Create\", \"Create\")\n</p>\n<table>\n");
        if self.model.has_properties() {
            for name in self.model.properties() {
                self.out
                    .write("\t<tr>\n\t\t<th>\n\t\t\t@Html.LabelFor(model => model.");
                self.out.write(&self.values.format(Some(name))?);
                self.out.write(")\n\t\t</th>\n\t\t<th></th>\n\t</tr>\n\t\n");
            }
        }
        self.out.write("@foreach (var item in Model) {\n\t<tr>\n");
        if self.model.has_properties() {
            for name in self.model.properties() {
                self.out
                    .write("\t\t<td>\n\t\t\t@Html.DisplayFor(model => model.");
                self.out.write(&self.values.format(Some(name))?);
                self.out.write(")\n\t\t</td>\n");
            }
        }
        self.out.write(
            "\t\t<td>\n\t\t\t@Html.ActionLink(\"Edit\", \"Edit\") |\n\t\t\t@Html.ActionLink(\"Details\", \"Details\") |\n\t\t\t@Html.ActionLink(\"Delete\", \"Delete\")\n\t\t</td>\n\t</tr>\n}\n</table>\n",
        );
        Ok(())
    }

    fn write_wrapper_tail(&mut self) {
        if !self.host.is_partial_view && !self.host.is_content_page {
            self.out.pop_indent();
            self.out.write("\t</body>\n</html>\n");
        }
    }

    fn write_value(&mut self, value: Option<&str>) -> Result<(), EmitError> {
        let text = self.values.format(value)?;
        self.out.write(&text);
        Ok(())
    }
}
