//! Error types shared by every school site crate.
//!
//! Every failure a navigation can run into is a [`PageError`]. The router
//! treats all variants alike: the error is logged and the content region shows
//! the configured generic message.

use thiserror::Error;

/// Errors that can occur while resolving, fetching or rendering a page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
	/// No page is registered under the requested identifier.
	#[error("No configuration found for page: {0}")]
	ConfigurationMissing(String),

	/// A page entry that is neither a static document nor a data/renderer pair.
	#[error("Invalid configuration for page '{page_id}': {reason}")]
	InvalidConfiguration {
		/// Page identifier of the offending entry.
		page_id: String,
		/// Why the entry was rejected.
		reason: String,
	},

	/// The resource was retrieved but the response status was not a success.
	#[error("HTTP error fetching '{path}': status {status}")]
	Transport {
		/// Requested path.
		path: String,
		/// Response status code.
		status: u16,
	},

	/// The request could not be performed at all.
	#[error("Network error fetching '{path}': {message}")]
	Network {
		/// Requested path.
		path: String,
		/// Underlying failure.
		message: String,
	},

	/// The body did not have the expected shape.
	#[error("Failed to decode '{path}': {message}")]
	Decode {
		/// Requested path, or the renderer input being decoded.
		path: String,
		/// Underlying decoder message.
		message: String,
	},

	/// A detail navigation whose identifier matches no record.
	#[error("Item with ID {item_id} not found for page '{page_id}'")]
	ItemNotFound {
		/// Detail page identifier.
		page_id: String,
		/// Requested record identifier.
		item_id: String,
	},

	/// A detail navigation that names no item.
	#[error("Page '{0}' requires an item ID")]
	ItemIdMissing(String),

	/// Site settings failed to parse or validate.
	#[error("Invalid settings: {0}")]
	Settings(String),
}

impl PageError {
	/// Builds a [`PageError::Decode`] from a serde_json error.
	pub fn decode(path: impl Into<String>, err: serde_json::Error) -> Self {
		Self::Decode {
			path: path.into(),
			message: err.to_string(),
		}
	}
}

/// Result type alias for page operations.
pub type PageResult<T> = Result<T, PageError>;
