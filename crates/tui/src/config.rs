/// Display strings for the two view triggers and their panel titles.
///
/// Hosts that embed the widget in a non-English UI override the defaults;
/// the widget itself never consults anything beyond these labels.
#[derive(Debug, Clone)]
pub struct ViewLabels {
	/// Label rendered on the preview trigger.
	pub preview: String,
	/// Label rendered on the source listing trigger.
	pub code: String,
}

impl ViewLabels {
	/// Construct a [`ViewLabels`] from the two trigger labels.
	#[must_use]
	pub fn new(preview: impl Into<String>, code: impl Into<String>) -> Self {
		Self {
			preview: preview.into(),
			code: code.into(),
		}
	}

	/// The trigger label for `view`.
	#[must_use]
	pub fn label_for(&self, view: crate::view::ViewSelection) -> &str {
		match view {
			crate::view::ViewSelection::Preview => &self.preview,
			crate::view::ViewSelection::Code => &self.code,
		}
	}
}

impl Default for ViewLabels {
	fn default() -> Self {
		Self {
			preview: "Preview".to_string(),
			code: "Code".to_string(),
		}
	}
}
