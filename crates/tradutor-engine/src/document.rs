//! Assembling the single document string the rules run over from
//! per-page text.

/// Concatenate pages in order, each terminated by a newline.
pub fn join_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for page in pages {
        out.push_str(page.as_ref());
        out.push('\n');
    }
    out
}
