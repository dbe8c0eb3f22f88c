//! Request handling for the `/wave` route and its static companions
//!
//! This is the glue a host server mounts: it turns query pairs into
//! [`RenderParams`] with the documented defaults and clamps, and produces a
//! complete [`Response`]. No listener lives here.

use std::num::IntErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use crate::color::HexColor;
use crate::error::RequestError;
use crate::params::{
    clamp_f64, RenderParams, WaveType, DEFAULT_COLOR_BOTTOM, DEFAULT_COLOR_TOP, FREQUENCY_RANGE,
    HEIGHT_RANGE, LAYERS_RANGE, MAX_REQUEST_AMPLITUDE, OPACITY_RANGE, SPEED_RANGE, WIDTH_RANGE,
};
use crate::renderer::WaveRenderer;

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";
pub const CACHE_CONTROL: &str = "public, max-age=3600";

/// Static files served next to the generator, with their MIME types
const STATIC_ROUTES: [(&str, &str, &str); 3] = [
    ("/", "index.html", "text/html"),
    ("/styles.css", "styles.css", "text/css"),
    ("/app.js", "app.js", "application/javascript"),
];

/// A complete HTTP-style response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Response {
    fn new(status: u16, content_type: &str, body: String) -> Self {
        Self {
            status,
            headers: vec![("Content-Type".to_string(), content_type.to_string())],
            body,
        }
    }

    fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    fn not_found() -> Self {
        Self::new(404, "text/plain", "not found".to_string())
    }

    /// Look up a header, case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Decode `+` and `%XX` escapes in a query component.
///
/// Malformed escapes are kept literally.
fn decode_component(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' if i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit() =>
            {
                let hi = (bytes[i + 1] as char).to_digit(16).unwrap_or(0) as u8;
                let lo = (bytes[i + 2] as char).to_digit(16).unwrap_or(0) as u8;
                out.push(hi * 16 + lo);
                i += 3;
                continue;
            }
            b => out.push(b),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Split a raw query string (without the leading `?`) into decoded pairs
pub fn parse_query_str(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|part| match part.split_once('=') {
            Some((k, v)) => (decode_component(k), decode_component(v)),
            None => (decode_component(part), String::new()),
        })
        .collect()
}

/// Query pairs with first-wins lookup
struct Query<'a> {
    pairs: &'a [(String, String)],
}

impl<'a> Query<'a> {
    fn get(&self, key: &str) -> Option<&'a str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn number<T: std::str::FromStr>(&self, key: &str, default: T) -> Result<T, RequestError> {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => raw.trim().parse().map_err(|_| RequestError::InvalidNumber {
                key: key.to_string(),
                value: raw.to_string(),
            }),
        }
    }

    /// Integer parameter; values beyond `i64` saturate before clamping
    fn integer(&self, key: &str, default: i64, range: (u32, u32)) -> Result<u32, RequestError> {
        let v = match self.get(key) {
            None => default,
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(v) => v,
                Err(err) => match err.kind() {
                    IntErrorKind::PosOverflow => i64::MAX,
                    IntErrorKind::NegOverflow => i64::MIN,
                    _ => {
                        return Err(RequestError::InvalidNumber {
                            key: key.to_string(),
                            value: raw.to_string(),
                        })
                    }
                },
            },
        };
        Ok(v.clamp(i64::from(range.0), i64::from(range.1)) as u32)
    }

    fn float(&self, key: &str, default: f64, range: (f64, f64)) -> Result<f64, RequestError> {
        let v: f64 = self.number(key, default)?;
        Ok(clamp_f64(v, range.0, range.1))
    }

    /// `"true"` in any case is true; everything else is false
    fn flag(&self, key: &str) -> bool {
        self.get(key)
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }

    fn color(&self, key: &str, default: HexColor) -> HexColor {
        match self.get(key) {
            None => default,
            Some(raw) => raw.trim_start_matches('#').parse().unwrap_or_else(|err| {
                warn!(key, %err, "falling back to default color");
                default
            }),
        }
    }
}

impl RenderParams {
    /// Build parameters from decoded query pairs, applying defaults and clamps
    pub fn from_query(pairs: &[(String, String)]) -> Result<Self, RequestError> {
        let q = Query { pairs };
        Ok(Self {
            wave_type: WaveType::from_name(q.get("type").unwrap_or("smooth")),
            width: q.integer("width", 1200, WIDTH_RANGE)?,
            height: q.integer("height", 80, HEIGHT_RANGE)?,
            color_top: q.color("color_top", DEFAULT_COLOR_TOP),
            color_bottom: q.color("color_bottom", DEFAULT_COLOR_BOTTOM),
            amplitude: q.float("amplitude", 20.0, (1.0, MAX_REQUEST_AMPLITUDE))?,
            frequency: q.float("frequency", 1.0, FREQUENCY_RANGE)?,
            layers: q.integer("layers", 1, LAYERS_RANGE)?,
            flip: q.flag("flip"),
            gradient: q.flag("gradient"),
            mirror: q.flag("mirror"),
            animate: q.flag("animate"),
            opacity: q.float("opacity", 1.0, OPACITY_RANGE)?,
            speed: q.float("speed", 6.0, SPEED_RANGE)?,
        })
    }

    /// Build parameters from a raw query string such as `type=sine&width=800`
    pub fn from_query_str(query: &str) -> Result<Self, RequestError> {
        Self::from_query(&parse_query_str(query))
    }
}

/// Serve the `/wave` route
pub fn wave_response(renderer: &WaveRenderer, query: &str) -> Response {
    match RenderParams::from_query_str(query) {
        Ok(params) => Response::new(200, SVG_CONTENT_TYPE, renderer.render(&params))
            .with_header("Cache-Control", CACHE_CONTROL)
            .with_header("Access-Control-Allow-Origin", "*"),
        Err(err) => {
            debug!(%err, "rejecting wave request");
            Response::new(400, "text/plain", err.to_string())
        }
    }
}

/// Dispatch a request path to the wave generator or a static asset under `assets`
pub fn handle(renderer: &WaveRenderer, path: &str, query: &str, assets: &Path) -> Response {
    if path == "/wave" {
        return wave_response(renderer, query);
    }

    let Some((_, file, mime)) = STATIC_ROUTES.iter().find(|(route, _, _)| *route == path) else {
        return Response::not_found();
    };

    match std::fs::read_to_string(assets.join(file)) {
        Ok(content) => Response::new(200, mime, content),
        Err(err) => {
            warn!(file, %err, "static asset unavailable");
            Response::not_found()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_query_defaults() {
        let params = RenderParams::from_query_str("").unwrap();
        assert_eq!(params, RenderParams::default());
    }

    #[test]
    fn test_query_clamps_and_case() {
        let params = RenderParams::from_query_str(
            "type=ZigZag&width=99999&height=-5&amplitude=500&frequency=0.1&layers=9\
             &opacity=2&speed=0&flip=TRUE&gradient=yes&mirror=True&animate=1",
        )
        .unwrap();
        assert_eq!(params.wave_type, WaveType::Zigzag);
        assert_eq!((params.width, params.height), (2400, 20));
        assert_eq!(params.amplitude, 100.0);
        assert_eq!(params.frequency, 0.5);
        assert_eq!(params.layers, 3);
        assert_eq!(params.opacity, 1.0);
        assert_eq!(params.speed, 1.0);
        assert!(params.flip);
        assert!(!params.gradient);
        assert!(params.mirror);
        assert!(!params.animate);
    }

    #[test]
    fn test_query_colors_with_and_without_hash() {
        let params = RenderParams::from_query_str("color_top=%23ABC&color_bottom=112233").unwrap();
        assert_eq!(params.color_top.to_string(), "#aabbcc");
        assert_eq!(params.color_bottom.to_string(), "#112233");
    }

    #[test]
    fn test_query_bad_color_falls_back() {
        let params = RenderParams::from_query_str("color_top=zz0000").unwrap();
        assert_eq!(params.color_top, DEFAULT_COLOR_TOP);
    }

    #[test]
    fn test_query_bad_number_is_error() {
        let err = RenderParams::from_query_str("width=wide").unwrap_err();
        assert_eq!(
            err,
            RequestError::InvalidNumber {
                key: "width".to_string(),
                value: "wide".to_string()
            }
        );
    }

    #[test]
    fn test_query_huge_integers_saturate() {
        let params =
            RenderParams::from_query_str("width=99999999999999999999&height=-99999999999999999999")
                .unwrap();
        assert_eq!((params.width, params.height), (2400, 20));
    }

    #[test]
    fn test_query_color_with_repeated_hash() {
        let params = RenderParams::from_query_str("color_top=%23%23abc").unwrap();
        assert_eq!(params.color_top.to_string(), "#aabbcc");
    }

    #[test]
    fn test_decode_component() {
        assert_eq!(decode_component("a+b%20c"), "a b c");
        assert_eq!(decode_component("%2"), "%2");
        assert_eq!(decode_component("100%"), "100%");
        assert_eq!(decode_component("%zz"), "%zz");
        assert_eq!(decode_component("%+5"), "% 5");
        assert_eq!(decode_component("%-1x"), "%-1x");
    }

    #[test]
    fn test_wave_response_headers() {
        let response = wave_response(&WaveRenderer::default(), "type=sine");
        assert_eq!(response.status, 200);
        assert_eq!(response.header("content-type"), Some("image/svg+xml"));
        assert_eq!(response.header("Cache-Control"), Some("public, max-age=3600"));
        assert_eq!(response.header("Access-Control-Allow-Origin"), Some("*"));
        assert!(response.body.starts_with("<svg"));
    }

    #[test]
    fn test_wave_response_bad_request() {
        let response = wave_response(&WaveRenderer::default(), "layers=many");
        assert_eq!(response.status, 400);
        assert!(response.body.contains("layers"));
    }

    #[test]
    fn test_unknown_route() {
        let response = handle(&WaveRenderer::default(), "/nope", "", Path::new("."));
        assert_eq!(response.status, 404);
    }
}
