//! View host options.
//!
//! The host describes the one view being scaffolded: its name, which page
//! wrapper to emit, and the names the wrapper markup splices in. The flag
//! set is read-only during a generation run.

/// Caller-populated options for one view generation run.
///
/// The two flags select the output shape: a partial view (fragment), a
/// content page (wrapped in an outer layout), or — when neither is set —
/// a full standalone page. `is_partial_view` wins when both are set,
/// matching the order the templates test the flags in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewHost {
    /// Name of the view, used for titles and headings.
    pub view_name: String,
    /// Emit a fragment meant to be rendered inside another view.
    pub is_partial_view: bool,
    /// Emit a page that plugs into an outer layout/master page.
    pub is_content_page: bool,
    /// Layout the content page plugs into. Required to render a content
    /// page; absence is a caller contract violation there.
    pub master_page_file: Option<String>,
    /// Placeholder in the master page that receives the main content.
    pub primary_content_placeholder_id: Option<String>,
    /// Fully qualified name of the model type the view lists. When absent
    /// the model directive / page type degrades to untyped.
    pub view_data_type_name: Option<String>,
}

impl ViewHost {
    /// Create host options for a full standalone page.
    pub fn new(view_name: impl Into<String>) -> Self {
        ViewHost {
            view_name: view_name.into(),
            is_partial_view: false,
            is_content_page: false,
            master_page_file: None,
            primary_content_placeholder_id: None,
            view_data_type_name: None,
        }
    }

    /// Mark the view as a partial view.
    #[must_use]
    pub fn partial_view(mut self) -> Self {
        self.is_partial_view = true;
        self
    }

    /// Mark the view as a content page under the given master page.
    #[must_use]
    pub fn content_page(
        mut self,
        master_page_file: impl Into<String>,
        placeholder_id: impl Into<String>,
    ) -> Self {
        self.is_content_page = true;
        self.master_page_file = Some(master_page_file.into());
        self.primary_content_placeholder_id = Some(placeholder_id.into());
        self
    }

    /// Set the model type name the view lists.
    #[must_use]
    pub fn model_type(mut self, name: impl Into<String>) -> Self {
        self.view_data_type_name = Some(name.into());
        self
    }
}
