//! ASPX list-view template.
//!
//! Generates a Web Forms view that lists every item of the model type in a
//! table: a header row per model property, and per-item cells plus the
//! Edit/Details/Delete action links. The page wrapper depends on the host
//! flags: user control (partial view), content page under a master page, or
//! a full standalone page.

use vgen_emit::{Diagnostic, EmitError, TemplateEmitter, ValueFormatter};

use crate::host::ViewHost;
use crate::model::ModelDescription;

/// Template for the ASPX dialect of the list view.
pub struct AspxListTemplate<'a> {
    host: &'a ViewHost,
    model: &'a ModelDescription,
    out: TemplateEmitter,
    values: ValueFormatter,
}

impl<'a> AspxListTemplate<'a> {
    /// Create a template over the given host options and model.
    pub fn new(host: &'a ViewHost, model: &'a ModelDescription) -> Self {
        AspxListTemplate {
            host,
            model,
            out: TemplateEmitter::new(),
            values: ValueFormatter::new(),
        }
    }

    /// The generic page type argument, `"<T>"` for a known model type and
    /// empty otherwise.
    pub fn view_page_type(&self) -> String {
        match self.host.view_data_type_name.as_deref() {
            Some(name) if !name.is_empty() => format!("<{name}>"),
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
                .warning("no model type name; generating an untyped view page");
        }

        self.write_wrapper_head()?;
        self.write_table_body()?;
        self.write_wrapper_tail();

        Ok(self.out.as_str().to_owned())
    }

    fn write_wrapper_head(&mut self) -> Result<(), EmitError> {
        let page_type = self.view_page_type();
        if self.host.is_partial_view {
            self.out.write(
                "<%@ Control Language=\"C#\" Inherits=\"System.Web.Mvc.ViewUserControl<IEnumerable",
            );
            self.write_value(Some(page_type.as_str()))?;
            self.out.write(">\" %>\n\n");
        } else if self.host.is_content_page {
            self.out
                .write("<%@ Page Language=\"C#\" MasterPageFile=\"");
            self.write_value(self.host.master_page_file.as_deref())?;
            self.out
                .write("\" Inherits=\"System.Web.Mvc.ViewPage<IEnumerable");
            self.write_value(Some(page_type.as_str()))?;
            self.out.write(
                ">\" %>\n\n<asp:Content ID=\"Content1\" ContentPlaceHolderID=\"Title\" runat=\"server\">\n",
            );
            self.write_value(Some(self.host.view_name.as_str()))?;
            self.out
                .write("\n</asp:Content>\n\n<asp:Content ID=\"Content2\" ContentPlaceHolderID=\"");
            self.write_value(self.host.primary_content_placeholder_id.as_deref())?;
            self.out.write("\" runat=\"server\">\n");
            self.out.push_indent("\t");
        } else {
            self.out
                .write("<%@ Page Language=\"C#\" Inherits=\"System.Web.Mvc.ViewPage<IEnumerable");
            self.write_value(Some(page_type.as_str()))?;
            self.out.write(
                ">\" %>\n\n<!DOCTYPE html>\n<html>\n\t<head runat=\"server\">\n\t\t<title>",
            );
            self.write_value(Some(self.host.view_name.as_str()))?;
            self.out.write("</title>\n\t</head>\n\t<body>\n");
            self.out.push_indent("\t\t");
        }
        Ok(())
    }

    fn write_table_body(&mut self) -> Result<(), EmitError> {
        self.out
            .write("<p>\n\t<%: Html.ActionLink(\"Create\", \"Create\") %>\n</p>\n<table>\n");
        if self.model.has_properties() {
            for name in self.model.properties() {
                self.out
                    .write("\t<tr>\n\t\t<th>\n\t\t\t<%: Html.LabelFor(model => model.");
                self.out.write(&self.values.format(Some(name))?);
                self.out
                    .write(") %>\n\t\t</th>\n\t\t<th></th>\n\t</tr>\n\t\n");
            }
        }
        self.out
            .write("<% foreach (var item in Model) { %>\n\t<tr>\n");
        if self.model.has_properties() {
            for name in self.model.properties() {
                self.out
                    .write("\t\t<td>\n\t\t\t<%: Html.DisplayFor(model => model.");
                self.out.write(&self.values.format(Some(name))?);
                self.out.write(") %>\n\t\t</td>\n");
            }
        }
        self.out.write(
            "\t\t<td>\n\t\t\t<%: Html.ActionLink(\"Edit\", \"Edit\") %> |\n\t\t\t<%: Html.ActionLink(\"Details\", \"Details\") %> |\n\t\t\t<%: Html.ActionLink(\"Delete\", \"Delete\") %>\n\t\t</td>\n\t</tr>\n<% } %>\n</table>\n",
        );
        Ok(())
    }

    fn write_wrapper_tail(&mut self) {
        if self.host.is_partial_view {
            // Nothing to close.
        } else if self.host.is_content_page {
            self.out.pop_indent();
            self.out.write("</asp:Content>\n");
        } else {
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

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn view_page_type_wraps_known_model_type() {
        let host = ViewHost::new("MyView").model_type("MyApp.MyModel");
        let model = ModelDescription::empty();
        let template = AspxListTemplate::new(&host, &model);
        assert_eq!(template.view_page_type(), "<MyApp.MyModel>");
    }

    #[test]
    fn view_page_type_is_empty_without_model_type() {
        let host = ViewHost::new("MyView");
        let model = ModelDescription::empty();
        let template = AspxListTemplate::new(&host, &model);
        assert_eq!(template.view_page_type(), "");
    }

    #[test]
    fn view_page_type_is_empty_for_empty_model_type() {
        let host = ViewHost::new("MyView").model_type("");
        let model = ModelDescription::empty();
        let template = AspxListTemplate::new(&host, &model);
        assert_eq!(template.view_page_type(), "");
    }

    #[test]
    fn content_page_without_master_page_is_a_contract_violation() {
        let mut host = ViewHost::new("MyView").model_type("MyApp.MyModel");
        host.is_content_page = true;
        let model = ModelDescription::empty();
        let mut template = AspxListTemplate::new(&host, &model);
        assert_eq!(template.transform(), Err(EmitError::MissingValue));
    }

    #[test]
    fn missing_model_type_records_a_warning() {
        let host = ViewHost::new("MyView");
        let model = ModelDescription::empty();
        let mut template = AspxListTemplate::new(&host, &model);
        let output = template.transform();
        assert!(output.is_ok());
        assert_eq!(template.diagnostics().len(), 1);
        assert!(template.diagnostics()[0].is_warning());
    }
}
