//! Server-side rendering: document metadata, the page shell around the app
//! body, the view tree itself, and the streaming composition of the three.

pub mod document;
pub mod head;
pub mod stream;
pub mod view;

pub use document::Document;
pub use head::HeadMetadata;
pub use stream::{compose, PageRenderer, RenderError, ViewRenderer};
pub use view::{JobsState, ViewModel};
