//! SVG document assembly

use crate::color::escape_xml;

use super::SvgConfig;

/// A looping horizontal ping-pong translation, `0 -> shift -> 0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    /// Horizontal offset at the midpoint of the cycle; negative moves left
    pub shift: f64,
    /// Cycle length in seconds
    pub duration: f64,
}

impl Animation {
    pub fn new(shift: f64, duration: f64) -> Self {
        Self { shift, duration }
    }

    fn to_svg(self) -> String {
        format!(
            r#"<animateTransform attributeName="transform" type="translate" values="0 0; {:.2} 0; 0 0" dur="{:.2}s" repeatCount="indefinite"/>"#,
            self.shift, self.duration
        )
    }
}

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    defs: Vec<String>,
    paths: Vec<String>,
    group_transform: Option<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            defs: vec![],
            paths: vec![],
            group_transform: None,
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn indent(&self, depth: usize) -> String {
        if self.config.pretty_print {
            "  ".repeat(depth)
        } else {
            String::new()
        }
    }

    /// Add a horizontal two-stop gradient running from `start` to `end`
    pub fn add_linear_gradient(&mut self, start: &str, end: &str) {
        let nl = self.newline();
        let inner = self.indent(3);
        let outer = self.indent(2);
        self.defs.push(format!(
            r#"<linearGradient id="{id}" x1="0" y1="0" x2="1" y2="0">{nl}{inner}<stop offset="0%" stop-color="{start}"/>{nl}{inner}<stop offset="100%" stop-color="{end}"/>{nl}{outer}</linearGradient>"#,
            id = escape_xml(&self.config.gradient_id),
            start = escape_xml(start),
            end = escape_xml(end),
        ));
    }

    /// Add a filled wave path; `fill` must already be a markup-safe paint value
    pub fn add_path(&mut self, d: &str, fill: &str, opacity: f64, animation: Option<Animation>) {
        let attrs = format!(r#"d="{}" fill="{}" fill-opacity="{:.2}""#, d, fill, opacity);
        let element = match animation {
            Some(anim) => format!("{}<path {}>{}</path>", self.indent(2), attrs, anim.to_svg()),
            None => format!("{}<path {}/>", self.indent(2), attrs),
        };
        self.paths.push(element);
    }

    /// Flip the whole composition about the horizontal axis of a canvas `height` tall
    pub fn flip_vertically(&mut self, height: u32) {
        self.group_transform = Some(format!("scale(1,-1) translate(0,-{})", height));
    }

    /// Build the final SVG string
    pub fn build(self, width: u32, height: u32) -> String {
        let nl = self.newline();
        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}" preserveAspectRatio="none" role="img" aria-label="{label}">"#,
            w = width,
            h = height,
            label = escape_xml(&self.config.aria_label),
        ));
        svg.push_str(nl);

        if !self.defs.is_empty() {
            svg.push_str(&self.indent(1));
            svg.push_str("<defs>");
            svg.push_str(nl);
            for def in &self.defs {
                svg.push_str(&self.indent(2));
                svg.push_str(def);
                svg.push_str(nl);
            }
            svg.push_str(&self.indent(1));
            svg.push_str("</defs>");
            svg.push_str(nl);
        }

        svg.push_str(&self.indent(1));
        match &self.group_transform {
            Some(transform) => svg.push_str(&format!(r#"<g transform="{}">"#, transform)),
            None => svg.push_str("<g>"),
        }
        svg.push_str(nl);

        for path in &self.paths {
            svg.push_str(path);
            svg.push_str(nl);
        }

        svg.push_str(&self.indent(1));
        svg.push_str("</g>");
        svg.push_str(nl);
        svg.push_str("</svg>");

        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_animation_markup() {
        let anim = Animation::new(-24.0, 6.0);
        assert_eq!(
            anim.to_svg(),
            r#"<animateTransform attributeName="transform" type="translate" values="0 0; -24.00 0; 0 0" dur="6.00s" repeatCount="indefinite"/>"#
        );
    }

    #[test]
    fn test_build_minimal_document() {
        let mut builder = SvgBuilder::new(SvgConfig::default());
        builder.add_path("M 0 0 Z", "#fff", 1.0, None);
        let svg = builder.build(300, 40);
        assert_eq!(
            svg,
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 300 40" width="300" height="40" preserveAspectRatio="none" role="img" aria-label="Wave divider">"#,
                "\n  <g>\n",
                r##"    <path d="M 0 0 Z" fill="#fff" fill-opacity="1.00"/>"##,
                "\n  </g>\n</svg>"
            )
        );
    }

    #[test]
    fn test_gradient_and_flip() {
        let mut builder = SvgBuilder::new(SvgConfig::default().with_pretty_print(false));
        builder.add_linear_gradient("#000000", "#ffffff");
        builder.flip_vertically(80);
        let svg = builder.build(1200, 80);
        assert!(svg.contains(
            r##"<defs><linearGradient id="wg" x1="0" y1="0" x2="1" y2="0"><stop offset="0%" stop-color="#000000"/><stop offset="100%" stop-color="#ffffff"/></linearGradient></defs>"##
        ));
        assert!(svg.contains(r#"<g transform="scale(1,-1) translate(0,-80)"></g>"#));
        assert!(!svg.contains('\n'));
    }

    #[test]
    fn test_standalone_declaration() {
        let svg = SvgBuilder::new(SvgConfig::default().with_standalone(true)).build(200, 20);
        assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    }
}
