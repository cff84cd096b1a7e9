//! `fexport ext <mime>` – print the registered extension.

use fexport_core::mime;

pub fn run_ext(mime_type: &str) {
    println!("{}", mime::extension_for(Some(mime_type)));
}
