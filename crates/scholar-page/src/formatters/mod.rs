//! Output formatting for the site's HTML fragments.

pub mod html;
