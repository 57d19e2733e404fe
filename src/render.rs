// File: src/render.rs
//! HTML fragment for an index page: letter navigation plus the bucketed list.
//! Page chrome and document templating belong to the site build.
use crate::core::alphabet::Alphabet;
use crate::core::types::{Bucket, Index, Letter};
use v_htmlescape::escape;

/// One navigation item per alphabet letter; only used letters are links.
pub fn alphabet_nav(alphabet: &Alphabet, used_letters: &[Letter]) -> String {
    let mut nav = String::new();
    for &letter in alphabet.letters() {
        let heading: String = letter.to_uppercase().collect();
        if used_letters.contains(&letter) {
            nav.push_str(&format!("<a href=\"#{heading}\">{heading}</a>&nbsp;\n"));
        } else {
            nav.push_str(&format!("<span>{heading}</span>&nbsp;\n"));
        }
    }
    nav
}

fn bucket_list(out: &mut String, bucket: &Bucket) {
    let heading = bucket.heading();
    out.push_str("<li class=\"index-letter-target\" style=\"list-style-type: none\">\n");
    out.push_str(&format!("<h2 id=\"{heading}\">{heading}</h2>\n"));
    out.push_str("<ol style=\"list-style-type: square\">\n");
    for entry in &bucket.entries {
        // links are trusted markup from the site's own pages
        out.push_str(&format!("<li>{} &nbsp; {}</li>\n", escape(&entry.term), entry.links.join(", ")));
    }
    out.push_str("</ol>\n</li>\n");
}

/// Navigation block followed by the nested letter/term list.
pub fn index_fragment(index: &Index) -> String {
    let alphabet = Alphabet::for_locale(index.locale());
    let mut out = String::from("<div class=\"index-letter-link\">\n");
    out.push_str(&alphabet_nav(&alphabet, index.used_letters()));
    out.push_str("</div>\n<div>\n<ul style=\"list-style-type:square\">\n");
    for bucket in index.buckets() {
        bucket_list(&mut out, bucket);
    }
    out.push_str("</ul>\n</div>\n");
    out
}
