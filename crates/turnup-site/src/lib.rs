//! Static-site generation glue around the turnup parsing core.
//!
//! Everything here is straightforward I/O: copying static assets into the
//! output directory and turning a tree of Markdown files into a mirrored
//! tree of HTML pages. The Markdown-to-HTML conversion itself lives in the
//! `turnup` crate.

pub mod assets;
pub mod page;
