//! Click-to-enlarge gallery modal.

use serde::Serialize;

const ESCAPE_KEY: &str = "Escape";

/// The image currently enlarged in the modal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModalImage {
	pub src: String,
	pub alt: String,
}

/// The gallery's enlarge-on-click modal.
///
/// Clicking a gallery image opens the modal with that image; clicking the
/// overlay or pressing Escape closes it. Only one image is shown at a time.
///
/// # Examples
///
/// ```
/// use rendezvous_page::GalleryModal;
///
/// let mut modal = GalleryModal::default();
/// modal.open("/img/cut.jpg", "Precision cut");
/// assert!(modal.is_open());
/// assert!(modal.on_key("Escape"));
/// assert!(!modal.is_open());
/// ```
#[derive(Debug, Default)]
pub struct GalleryModal {
	image: Option<ModalImage>,
}

impl GalleryModal {
	/// Opens the modal on the given image, replacing any current one.
	pub fn open(&mut self, src: impl Into<String>, alt: impl Into<String>) -> &ModalImage {
		tracing::debug!("gallery modal opened");
		self.image.insert(ModalImage {
			src: src.into(),
			alt: alt.into(),
		})
	}

	/// Closes the modal. Returns whether it was open.
	pub fn close(&mut self) -> bool {
		self.image.take().is_some()
	}

	/// Key handling: Escape closes, everything else is ignored. Returns
	/// whether the modal closed.
	pub fn on_key(&mut self, key: &str) -> bool {
		if key == ESCAPE_KEY {
			self.close()
		} else {
			false
		}
	}

	pub fn is_open(&self) -> bool {
		self.image.is_some()
	}

	pub fn image(&self) -> Option<&ModalImage> {
		self.image.as_ref()
	}
}
