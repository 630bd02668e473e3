//! Whitelist markup filter for user-authored text.
//!
//! Known-safe tags are rebuilt with only their allowed attributes; anything
//! else that looks like a tag is escaped so it renders as text. Text between
//! tags only has `<` and `>` escaped.

/// Filter one free-text value for output.
pub fn filter_xss(input: &str) -> String {
    let html = strip_comments(input);
    let bytes = html.as_bytes();

    let mut out = String::with_capacity(html.len());
    let mut last = 0;
    let mut tag_start: Option<usize> = None;
    let mut quote: Option<u8> = None;

    for (i, &c) in bytes.iter().enumerate() {
        let Some(start) = tag_start else {
            if c == b'<' {
                tag_start = Some(i);
            }
            continue;
        };

        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            b'<' => {
                // Unclosed fragment: emit it as text and restart here
                out.push_str(&escape_html(&html[last..i]));
                last = i;
                tag_start = Some(i);
            }
            b'>' => {
                out.push_str(&escape_html(&html[last..start]));
                out.push_str(&filter_tag(&html[start..=i]));
                last = i + 1;
                tag_start = None;
            }
            b'"' | b'\'' if follows_equals(bytes, i) => quote = Some(c),
            _ => {}
        }
    }

    out.push_str(&escape_html(&html[last..]));
    out
}

/// True when the quote at `pos` opens an attribute value (`=` then optional spaces).
fn follows_equals(bytes: &[u8], pos: usize) -> bool {
    bytes[..pos]
        .iter()
        .rev()
        .find(|b| !b.is_ascii_whitespace())
        .map_or(false, |&b| b == b'=')
}

fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(open) = rest.find("<!--") {
        match rest[open + 4..].find("-->") {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &rest[open + 4 + close + 3..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

fn escape_html(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attr_value(value: &str) -> String {
    escape_html(&value.replace('"', "&quot;"))
}

fn filter_tag(tag: &str) -> String {
    let inner = &tag[1..tag.len() - 1];
    let (closing, body) = match inner.strip_prefix('/') {
        Some(rest) => (true, rest),
        None => (false, inner),
    };

    let name_end = body
        .find(|c: char| c.is_whitespace() || c == '/')
        .unwrap_or(body.len());
    let name = body[..name_end].to_ascii_lowercase();

    let Some(allowed) = allowed_attributes(&name) else {
        return escape_html(tag);
    };

    if closing {
        return format!("</{}>", name);
    }

    let mut attrs_src = body[name_end..].trim_end();
    let self_closing = attrs_src.ends_with('/');
    if self_closing {
        attrs_src = &attrs_src[..attrs_src.len() - 1];
    }

    let attrs: Vec<String> = parse_attributes(attrs_src)
        .into_iter()
        .filter(|(attr, _)| allowed.contains(&attr.as_str()))
        .map(|(attr, value)| {
            // An empty or rejected value leaves the bare attribute name
            match value.map(|v| safe_attr_value(&attr, &v)) {
                Some(value) if !value.is_empty() => {
                    format!("{}=\"{}\"", attr, escape_attr_value(&value))
                }
                _ => attr,
            }
        })
        .collect();

    let mut html = format!("<{}", name);
    if !attrs.is_empty() {
        html.push(' ');
        html.push_str(&attrs.join(" "));
    }
    if self_closing {
        html.push_str(" /");
    }
    html.push('>');
    html
}

/// Split `a="x" b=y c` into lowercased names with optional raw values.
fn parse_attributes(src: &str) -> Vec<(String, Option<String>)> {
    let chars: Vec<char> = src.chars().collect();
    let mut attrs = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        while i < chars.len() && (chars[i].is_whitespace() || chars[i] == '/') {
            i += 1;
        }
        let name_start = i;
        while i < chars.len() && !chars[i].is_whitespace() && chars[i] != '=' {
            i += 1;
        }
        if i == name_start {
            i += 1;
            continue;
        }
        let name: String = chars[name_start..i].iter().collect::<String>().to_ascii_lowercase();

        let mut j = i;
        while j < chars.len() && chars[j].is_whitespace() {
            j += 1;
        }
        if j >= chars.len() || chars[j] != '=' {
            attrs.push((name, None));
            continue;
        }

        j += 1;
        while j < chars.len() && chars[j].is_whitespace() {
            j += 1;
        }
        let value: String = match chars.get(j) {
            Some(&q) if q == '"' || q == '\'' => {
                let value_start = j + 1;
                let mut k = value_start;
                while k < chars.len() && chars[k] != q {
                    k += 1;
                }
                i = (k + 1).min(chars.len());
                chars[value_start..k.min(chars.len())].iter().collect()
            }
            _ => {
                let value_start = j;
                let mut k = value_start;
                while k < chars.len() && !chars[k].is_whitespace() {
                    k += 1;
                }
                i = k;
                chars[value_start..k].iter().collect()
            }
        };
        attrs.push((name, Some(value)));
    }

    attrs
}

const SAFE_URL_PREFIXES: &[&str] = &[
    "#", "/", "./", "../", "http://", "https://", "mailto:", "tel:", "ftp://", "data:image/",
];

fn safe_attr_value(attr: &str, value: &str) -> String {
    let value = value.trim();
    if attr == "href" || attr == "src" {
        let lower = value.to_ascii_lowercase();
        if !SAFE_URL_PREFIXES.iter().any(|p| lower.starts_with(p)) {
            return String::new();
        }
    }
    value.to_string()
}

fn allowed_attributes(tag: &str) -> Option<&'static [&'static str]> {
    const NONE: &[&str] = &[];
    const ALIGN: &[&str] = &["align", "valign"];
    const CELL: &[&str] = &["width", "rowspan", "colspan", "align", "valign"];
    const COL: &[&str] = &["align", "valign", "span", "width"];
    const DIR: &[&str] = &["dir"];
    const DATETIME: &[&str] = &["datetime"];

    let attrs = match tag {
        "a" => &["target", "href", "title"][..],
        "abbr" => &["title"][..],
        "area" => &["shape", "coords", "href", "alt"][..],
        "audio" => &["autoplay", "controls", "crossorigin", "loop", "muted", "preload", "src"][..],
        "bdi" | "bdo" => DIR,
        "blockquote" => &["cite"][..],
        "col" | "colgroup" => COL,
        "del" | "ins" => DATETIME,
        "details" => &["open"][..],
        "font" => &["color", "size", "face"][..],
        "img" => &["src", "alt", "title", "width", "height", "loading"][..],
        "table" => &["width", "border", "align", "valign"][..],
        "tbody" | "tfoot" | "thead" => ALIGN,
        "td" | "th" => CELL,
        "tr" => &["rowspan", "align", "valign"][..],
        "video" => &[
            "autoplay", "controls", "crossorigin", "loop", "muted", "playsinline", "poster",
            "preload", "src", "height", "width",
        ][..],
        "address" | "article" | "aside" | "b" | "big" | "br" | "caption" | "center" | "cite"
        | "code" | "dd" | "div" | "dl" | "dt" | "em" | "figcaption" | "figure" | "footer" | "h1"
        | "h2" | "h3" | "h4" | "h5" | "h6" | "header" | "hr" | "i" | "kbd" | "li" | "mark" | "nav"
        | "ol" | "p" | "pre" | "s" | "section" | "small" | "span" | "sub" | "summary" | "sup"
        | "strong" | "strike" | "tt" | "u" | "ul" => NONE,
        _ => return None,
    };
    Some(attrs)
}
