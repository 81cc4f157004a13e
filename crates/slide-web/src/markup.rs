// Pure string builders for styles and generated indicator markup.

#[inline]
pub fn translate_css(offset: f64) -> String {
    format!("translate3d({offset}px, 0, 0)")
}

/// One `<li><a href="#slideN">N</a></li>` per slide, numbered from 1.
pub fn indicator_markup(count: usize) -> String {
    (1..=count)
        .map(|n| format!(r##"<li><a href="#slide{n}">{n}</a></li>"##))
        .collect()
}
