// content model and ui state shared by every site built on the section library
//
// nothing in here touches the browser, so all of the behavior that decides what a section shows
// can be exercised with plain `cargo test`
pub mod content;
pub mod countdown;
pub mod gallery;
pub mod nav;
pub mod selection;
pub mod tokens;

pub use content::{SectionKind, SiteContent, SiteVariant};
